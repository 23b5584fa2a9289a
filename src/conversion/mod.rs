//! Conversion module
//!
//! This module contains the conversion engine, its configuration and the
//! statistics it reports.

pub mod config;
pub mod engine;
pub mod stats;

pub use config::{ConversionConfig, DEFAULT_DELIMITER};
pub use engine::{convert_csv_to_json, convert_json_to_csv, Conversion, ConversionEngine};
pub use stats::ConversionStats;
