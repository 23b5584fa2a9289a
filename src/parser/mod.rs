//! Delimited-text parsing and conversion input sources

pub mod infer;

use std::io::Read;
use std::path::PathBuf;

use crate::conversion::ConversionConfig;
use crate::error::{ConversionError, ConversionResult};
use crate::record::{Document, Record};

use infer::infer_scalar;

/// Parse delimited text into a document.
///
/// The first non-blank line is the header: field names in order, not
/// deduplicated, not validated. Every later non-blank line becomes one
/// record. Cells align with header fields by position; surplus cells are
/// ignored and header fields past the end of a short row are left out of the
/// record entirely, while a present-but-empty cell is stored as an explicit
/// null. That keeps "column absent" and "column present but empty" apart.
///
/// Malformed input degrades to an empty document, never an error.
pub fn csv_to_document(text: &str, config: &ConversionConfig) -> Document {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header: Vec<String> = match lines.next() {
        Some(line) => line.split(config.delimiter).map(str::to_string).collect(),
        None => return Document::new(),
    };

    lines
        .map(|line| {
            line.split(config.delimiter)
                .zip(&header)
                .map(|(cell, name)| (name.clone(), infer_scalar(cell)))
                .collect::<Record>()
        })
        .collect()
}

/// Where conversion input comes from
#[derive(Debug, Clone)]
pub enum TextSource {
    /// Inline input text
    Literal(String),
    /// A file path
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl TextSource {
    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            TextSource::Literal(_) => "inline input".to_string(),
            TextSource::File(path) => format!("file: {}", path.display()),
            TextSource::Stdin => "standard input".to_string(),
        }
    }

    /// Read the whole input into memory
    pub fn read(&self) -> ConversionResult<String> {
        match self {
            TextSource::Literal(content) => Ok(content.clone()),
            TextSource::File(path) => std::fs::read_to_string(path).map_err(|e| {
                ConversionError::io(format!("failed to read file: {e}"), Some(path.clone()))
            }),
            TextSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| ConversionError::io(format!("failed to read stdin: {e}"), None))?;
                Ok(buffer)
            }
        }
    }
}
