//! Statistics for conversion operations

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Measurements for a single conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Input size in bytes
    pub input_size_bytes: u64,
    /// Output size in bytes
    pub output_size_bytes: u64,
    /// Number of records in the document
    pub record_count: usize,
    /// Number of header fields (from the first record)
    pub field_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// When the statistics were collected
    pub collected_at: DateTime<Utc>,
}

impl ConversionStats {
    /// Create statistics for a single conversion
    pub fn for_conversion(
        input_size: u64,
        output_size: u64,
        record_count: usize,
        field_count: usize,
        elapsed: Duration,
    ) -> Self {
        Self {
            input_size_bytes: input_size,
            output_size_bytes: output_size,
            record_count,
            field_count,
            processing_time_ms: elapsed.as_millis() as u64,
            collected_at: Utc::now(),
        }
    }

    /// One-line summary for `--stats` output
    pub fn summary(&self) -> String {
        format!(
            "{} records x {} fields, {} -> {} bytes in {}ms",
            self.record_count,
            self.field_count,
            self.input_size_bytes,
            self.output_size_bytes,
            self.processing_time_ms
        )
    }
}
