//! Per-cell scalar type inference

use crate::record::Scalar;

/// Infer the scalar kind of one raw cell.
///
/// Fixed priority, first match wins: empty, integer, float, boolean, string.
/// Numeric parsing is locale-independent with `.` as the decimal separator
/// and an optional exponent, so a comma decimal such as `19,99` stays a
/// string. Non-finite spellings (`inf`, `NaN`) also stay strings because JSON
/// has no representation for them. The cell is trimmed before all probes and
/// the trimmed form is what gets stored.
pub fn infer_scalar(cell: &str) -> Scalar {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Scalar::Null;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Scalar::Int(value);
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        if value.is_finite() {
            return Scalar::Float(value);
        }
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return Scalar::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Scalar::Bool(false);
    }
    Scalar::String(trimmed.to_string())
}
