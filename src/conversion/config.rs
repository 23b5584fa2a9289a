//! Configuration options for conversions

/// Default field delimiter.
///
/// Fixed and documented; never inferred from the process locale or any other
/// environment state.
pub const DEFAULT_DELIMITER: char = ';';

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Single-character field delimiter
    pub delimiter: char,
    /// Pretty-print JSON output (vs compact)
    pub pretty: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            pretty: true,
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable/disable pretty-printed JSON output
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Validate configuration consistency.
    ///
    /// The delimiter splits lines that were themselves split on line breaks,
    /// so a line-break delimiter can never round-trip.
    pub fn validate(&self) -> Result<(), String> {
        if self.delimiter == '\n' || self.delimiter == '\r' {
            return Err("delimiter must not be a line break".to_string());
        }
        Ok(())
    }
}
