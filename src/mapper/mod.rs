//! Mapping between the record representation and strongly-typed values
//!
//! A mappable type supplies a static field-descriptor table plus conversions
//! to and from [`Record`] through the [`RecordSchema`] trait. The table is a
//! declarative, compile-time description of the type's shape; nothing here
//! inspects types at runtime.
//!
//! Coercion on the read path follows one canonical rule set: integers and
//! floats widen into each other (float to integer only when the value is
//! integral and in range), strings are parsed into numbers and booleans when
//! the declared kind asks for it, any scalar renders into a string, and a
//! null or missing field takes the declared kind's default. Anything else is
//! a hard [`MapError::TypeMismatch`] for that record.

use crate::error::{MapError, MapResult};
use crate::record::{Document, Record, Scalar, ScalarKind};

/// One declared field of a mappable type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: ScalarKind,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, kind: ScalarKind) -> Self {
        Self { name, kind }
    }
}

/// Declarative mapping between a concrete type and the record representation
pub trait RecordSchema: Sized {
    /// Declared fields in construction order
    fn fields() -> &'static [FieldDescriptor];

    /// Emit one record with fields in declared order, values taken as-is
    fn to_record(&self) -> Record;

    /// Build a value from a record. Field lookup is case-insensitive and a
    /// missing field takes the declared kind's default.
    fn from_record(record: &Record) -> MapResult<Self>;
}

/// Convert a whole document, failing on the first non-coercible record.
///
/// Errors carry the index of the offending record. A type with an empty
/// descriptor table is rejected once, before any record is visited.
pub fn document_to_typed<T: RecordSchema>(doc: &Document) -> MapResult<Vec<T>> {
    check_shape::<T>()?;
    doc.iter()
        .enumerate()
        .map(|(index, record)| {
            T::from_record(record).map_err(|e| MapError::in_record(index, e))
        })
        .collect()
}

/// Convert record by record so the caller can decide to skip or abort.
///
/// The outer error is the once-per-type shape check; the inner results are
/// the per-record outcomes.
pub fn map_records<T: RecordSchema>(doc: &Document) -> MapResult<Vec<MapResult<T>>> {
    check_shape::<T>()?;
    Ok(doc
        .iter()
        .enumerate()
        .map(|(index, record)| {
            T::from_record(record).map_err(|e| MapError::in_record(index, e))
        })
        .collect())
}

/// Flatten typed values into a document. Empty input yields the empty
/// document.
pub fn typed_to_document<T: RecordSchema>(items: &[T]) -> Document {
    items.iter().map(RecordSchema::to_record).collect()
}

/// Declared header for a mappable type, in construction order.
///
/// Useful for rendering an empty table for a known type, where no first
/// record exists to derive the header from.
pub fn schema_header<T: RecordSchema>() -> Vec<&'static str> {
    T::fields().iter().map(|field| field.name).collect()
}

fn check_shape<T: RecordSchema>() -> MapResult<()> {
    if T::fields().is_empty() {
        return Err(MapError::unsupported_shape::<T>());
    }
    Ok(())
}

/// Read an integer field; absent or null falls back to 0
pub fn int_field(record: &Record, name: &str) -> MapResult<i64> {
    let Some(value) = record.get_ignore_case(name) else {
        return Ok(0);
    };
    match value {
        Scalar::Null => Ok(0),
        Scalar::Int(i) => Ok(*i),
        Scalar::Float(f)
            if f.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(f) =>
        {
            Ok(*f as i64)
        }
        Scalar::String(s) => s
            .trim()
            .parse()
            .map_err(|_| MapError::mismatch(name, ScalarKind::Int, value)),
        other => Err(MapError::mismatch(name, ScalarKind::Int, other)),
    }
}

/// Read a float field; absent or null falls back to 0.0
pub fn float_field(record: &Record, name: &str) -> MapResult<f64> {
    let Some(value) = record.get_ignore_case(name) else {
        return Ok(0.0);
    };
    match value {
        Scalar::Null => Ok(0.0),
        Scalar::Int(i) => Ok(*i as f64),
        Scalar::Float(f) => Ok(*f),
        Scalar::String(s) => s
            .trim()
            .parse()
            .map_err(|_| MapError::mismatch(name, ScalarKind::Float, value)),
        other => Err(MapError::mismatch(name, ScalarKind::Float, other)),
    }
}

/// Read a boolean field; absent or null falls back to false
pub fn bool_field(record: &Record, name: &str) -> MapResult<bool> {
    let Some(value) = record.get_ignore_case(name) else {
        return Ok(false);
    };
    match value {
        Scalar::Null => Ok(false),
        Scalar::Bool(b) => Ok(*b),
        Scalar::String(s) if s.trim().eq_ignore_ascii_case("true") => Ok(true),
        Scalar::String(s) if s.trim().eq_ignore_ascii_case("false") => Ok(false),
        other => Err(MapError::mismatch(name, ScalarKind::Bool, other)),
    }
}

/// Read a string field; absent or null falls back to the empty string.
///
/// Every scalar has a canonical string rendering, so this never mismatches.
pub fn string_field(record: &Record, name: &str) -> MapResult<String> {
    let Some(value) = record.get_ignore_case(name) else {
        return Ok(String::new());
    };
    match value {
        Scalar::Null => Ok(String::new()),
        Scalar::String(s) => Ok(s.clone()),
        other => Ok(other.to_string()),
    }
}
