//! Delimited-text rendering

use crate::conversion::ConversionConfig;
use crate::record::Document;

/// Render a document as delimited text.
///
/// The first record's field names form the header and fix the column order.
/// Every record, the first included, becomes one data row; records are
/// queried by the header names, so a field missing from a later record
/// renders as an empty cell, as does an explicit null. Rows are joined with
/// `\n` and the result carries no trailing newline. The empty document
/// renders as the empty string rather than a headered table with no rows.
///
/// No escaping is applied: a value that itself contains the delimiter makes
/// the output ambiguous. That is an accepted limitation of the format; no
/// detection or quoting is attempted.
pub fn document_to_csv(doc: &Document, config: &ConversionConfig) -> String {
    let Some(first) = doc.first() else {
        return String::new();
    };
    let header: Vec<&str> = first.field_names().collect();

    let mut out = String::new();
    out.push_str(&header.join(&config.delimiter.to_string()));

    for record in doc {
        out.push('\n');
        for (i, name) in header.iter().enumerate() {
            if i > 0 {
                out.push(config.delimiter);
            }
            if let Some(value) = record.get(name) {
                out.push_str(&value.to_string());
            }
        }
    }
    out
}
