//! Core conversion engine composing the parser, the formatter and the JSON
//! process boundary

use std::time::Instant;

use serde_json::Value;

use crate::conversion::config::ConversionConfig;
use crate::conversion::stats::ConversionStats;
use crate::error::{ConversionError, ConversionResult};
use crate::formatter::document_to_csv;
use crate::parser::csv_to_document;
use crate::record::Document;

/// Output of one engine conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    pub content: String,
    pub stats: ConversionStats,
}

impl Conversion {
    /// Get the converted output
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the output is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Get the engine configuration
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert a JSON array of flat records into delimited text.
    ///
    /// Blank input, a non-array root and an empty array all yield the empty
    /// string. Invalid JSON, and arrays whose elements are not flat objects
    /// of scalars, are errors.
    pub fn json_to_csv(&self, json: &str) -> ConversionResult<Conversion> {
        let started = Instant::now();
        let doc = self.parse_json_document(json)?;
        let content = document_to_csv(&doc, &self.config);
        Ok(self.finish(json.len(), &doc, content, started))
    }

    /// Convert delimited text into a JSON array of records.
    ///
    /// The delimited read path never rejects its input; an empty document
    /// serializes to `[]`.
    pub fn csv_to_json(&self, text: &str) -> ConversionResult<Conversion> {
        let started = Instant::now();
        let doc = csv_to_document(text, &self.config);
        let content = if self.config.pretty {
            serde_json::to_string_pretty(&doc)
        } else {
            serde_json::to_string(&doc)
        }
        .map_err(|e| ConversionError::unsupported_document(e.to_string()))?;
        Ok(self.finish(text.len(), &doc, content, started))
    }

    fn parse_json_document(&self, json: &str) -> ConversionResult<Document> {
        if json.trim().is_empty() {
            return Ok(Document::new());
        }
        let root: Value =
            serde_json::from_str(json).map_err(|e| ConversionError::json_parse(&e))?;
        match root {
            Value::Array(items) if items.is_empty() => Ok(Document::new()),
            root @ Value::Array(_) => serde_json::from_value(root).map_err(|e| {
                ConversionError::unsupported_document(format!(
                    "expected an array of flat records: {e}"
                ))
            }),
            _ => Ok(Document::new()),
        }
    }

    fn finish(
        &self,
        input_size: usize,
        doc: &Document,
        content: String,
        started: Instant,
    ) -> Conversion {
        let field_count = doc.first().map(|record| record.len()).unwrap_or(0);
        let stats = ConversionStats::for_conversion(
            input_size as u64,
            content.len() as u64,
            doc.len(),
            field_count,
            started.elapsed(),
        );
        Conversion { content, stats }
    }
}

/// Convert a JSON string with an ad-hoc configuration
pub fn convert_json_to_csv(json: &str, config: &ConversionConfig) -> ConversionResult<Conversion> {
    ConversionEngine::new(config.clone()).json_to_csv(json)
}

/// Convert delimited text with an ad-hoc configuration
pub fn convert_csv_to_json(text: &str, config: &ConversionConfig) -> ConversionResult<Conversion> {
    ConversionEngine::new(config.clone()).csv_to_json(text)
}
