//! csvconv
//!
//! Converts tabular data between a delimited flat-file representation
//! (CSV-like, configurable separator) and a JSON array-of-records, with
//! per-cell scalar type inference on the read path and a declarative mapping
//! onto strongly-typed values.
//!
//! The whole input is materialized in memory; every conversion is a pure,
//! bounded transformation with no shared state between calls.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod mapper;
pub mod parser;
pub mod record;

// Re-export commonly used types
pub use conversion::{Conversion, ConversionConfig, ConversionEngine, DEFAULT_DELIMITER};
pub use error::{ConversionError, ConversionResult, MapError, MapResult};
pub use mapper::{FieldDescriptor, RecordSchema};
pub use record::{Document, Record, Scalar, ScalarKind};

/// Render a document as delimited text
pub fn to_csv(doc: &Document, delimiter: char) -> String {
    formatter::document_to_csv(doc, &ConversionConfig::default().with_delimiter(delimiter))
}

/// Parse delimited text into a document, inferring each cell's scalar kind
pub fn from_csv(text: &str, delimiter: char) -> Document {
    parser::csv_to_document(text, &ConversionConfig::default().with_delimiter(delimiter))
}

/// Map a document onto typed values
pub fn to_typed<T: RecordSchema>(doc: &Document) -> MapResult<Vec<T>> {
    mapper::document_to_typed(doc)
}

/// Flatten typed values into a document
pub fn from_typed<T: RecordSchema>(items: &[T]) -> Document {
    mapper::typed_to_document(items)
}

/// Render typed values directly as delimited text
pub fn typed_to_csv<T: RecordSchema>(items: &[T], delimiter: char) -> String {
    to_csv(&from_typed(items), delimiter)
}

/// Parse delimited text directly into typed values
pub fn csv_to_typed<T: RecordSchema>(text: &str, delimiter: char) -> MapResult<Vec<T>> {
    to_typed(&from_csv(text, delimiter))
}

/// Convert a JSON array of records into delimited text
pub fn json_to_csv(json: &str, delimiter: char) -> ConversionResult<String> {
    conversion::convert_json_to_csv(
        json,
        &ConversionConfig::default().with_delimiter(delimiter),
    )
    .map(|conversion| conversion.content)
}

/// Convert delimited text into a JSON array of records
pub fn csv_to_json(text: &str, delimiter: char) -> ConversionResult<String> {
    conversion::convert_csv_to_json(
        text,
        &ConversionConfig::default().with_delimiter(delimiter),
    )
    .map(|conversion| conversion.content)
}
