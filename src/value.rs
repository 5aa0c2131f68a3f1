//! Helpers over the input document model
//!
//! Input documents are plain `serde_json::Value` trees. These helpers give
//! the converter one place to decide what counts as a scalar and how each
//! JSON kind is named in error messages.

use serde_json::Value as JsonValue;

/// Human readable kind of a JSON value, for error messages
pub fn kind_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// Text form of a scalar value.
///
/// Strings are returned verbatim, numbers and booleans in their JSON
/// spelling. Null, arrays and objects have no text form.
pub fn scalar_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}
