//! Movie domain constants and field casting rules.
//!
//! Request bodies reach the storage layer as loose JSON. Before a document
//! is written, each field is cast to its stored type the way a schema-driven
//! document mapper would: scalars are coerced where the conversion is
//! lossless, structured values are rejected with [`CoreError::Cast`].

use serde_json::Value;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Name of the document-store collection holding movies.
pub const COLLECTION: &str = "movies";

/// Stored field names.
pub const FIELD_TITLE: &str = "title";
pub const FIELD_GENRE: &str = "genre";
pub const FIELD_YEAR: &str = "year";

/// Response messages. The wording is part of the public HTTP contract.
pub const MSG_ADDED: &str = "Movie added successfully";
pub const MSG_CREATE_FAILED: &str = "Something went wrong";
pub const MSG_UPDATED: &str = "Movie updated";
pub const MSG_NOT_FOUND: &str = "Movie not found";
pub const MSG_DELETED: &str = "Movie deleted";
pub const MSG_STORAGE_FAILED: &str = "Something is wrong";

// ---------------------------------------------------------------------------
// Casting
// ---------------------------------------------------------------------------

/// Cast a loose JSON value to an optional string field.
///
/// - absent or `null` -> `None` (field left unset)
/// - string -> stored as-is
/// - number / boolean -> stored as its JSON text
/// - array / object -> [`CoreError::Cast`]
pub fn cast_text(field: &'static str, value: Option<&Value>) -> Result<Option<String>, CoreError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(cast_error(field, "String", other)),
    }
}

/// Cast a loose JSON value to an optional release year.
///
/// - absent, `null` or a blank string -> `None` (field left unset)
/// - any number -> stored as-is, fractions included
/// - string -> parsed as a float (surrounding whitespace ignored)
/// - boolean -> `1` or `0`
///
/// Strings that do not parse to a finite number, arrays and objects are a
/// [`CoreError::Cast`].
pub fn cast_year(value: Option<&Value>) -> Result<Option<f64>, CoreError> {
    let Some(raw) = value.filter(|v| !v.is_null()) else {
        return Ok(None);
    };

    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) if s.trim().is_empty() => return Ok(None),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|year| year.is_finite())
        .map(Some)
        .ok_or_else(|| cast_error(FIELD_YEAR, "Number", raw))
}

fn cast_error(field: &'static str, expected: &'static str, value: &Value) -> CoreError {
    CoreError::Cast {
        field,
        expected,
        value: value.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
