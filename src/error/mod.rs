//! Error types and handling infrastructure for csvconv

use std::path::PathBuf;

use crate::record::{Scalar, ScalarKind};

/// Errors raised by the typed mapping path.
///
/// The delimited read path never raises; malformed input degrades to an empty
/// document instead. Typed mapping is the one place where silent defaulting
/// would corrupt data, so it reports.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// A scalar could not be coerced into the declared field type
    #[error("type mismatch for field '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: ScalarKind,
        found: String,
    },

    /// A field error tagged with the index of the offending record
    #[error("record {index}: {source}")]
    InRecord {
        index: usize,
        #[source]
        source: Box<MapError>,
    },

    /// The target type declares no mappable fields
    #[error("type '{type_name}' declares no mappable fields")]
    UnsupportedShape { type_name: &'static str },
}

impl MapError {
    pub fn mismatch(field: impl Into<String>, expected: ScalarKind, found: &Scalar) -> Self {
        let found = match found {
            Scalar::Null => "null".to_string(),
            other => format!("{} '{}'", other.kind(), other),
        };
        Self::TypeMismatch {
            field: field.into(),
            expected,
            found,
        }
    }

    pub fn in_record(index: usize, source: MapError) -> Self {
        Self::InRecord {
            index,
            source: Box::new(source),
        }
    }

    pub fn unsupported_shape<T>() -> Self {
        Self::UnsupportedShape {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// The record index attached to this error, if any
    pub fn record_index(&self) -> Option<usize> {
        match self {
            Self::InRecord { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("JSON parse error: {message}")]
    JsonParse {
        message: String,
        location: Option<(usize, usize)>,
    },

    /// The JSON root was readable but is not an array of flat records
    #[error("unsupported document: {message}")]
    UnsupportedDocument { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConversionError {
    pub fn json_parse(err: &serde_json::Error) -> Self {
        let location = (err.line() > 0).then(|| (err.line(), err.column()));
        Self::JsonParse {
            message: err.to_string(),
            location,
        }
    }

    pub fn unsupported_document(message: impl Into<String>) -> Self {
        Self::UnsupportedDocument {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                message,
                path: Some(path),
            } => {
                format!("{} ({})", message, path.display())
            }
            Self::Map(err) => format!("mapping failed: {err}"),
            _ => self.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Result type for typed mapping operations
pub type MapResult<T> = Result<T, MapError>;
