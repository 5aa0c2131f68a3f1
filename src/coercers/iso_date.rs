//! ISO-8601 timestamp coercion
//!
//! Timestamps arrive as milliseconds since the Unix epoch and leave as UTC
//! strings. Market documents carry minute precision everywhere except the
//! document creation stamp, which keeps its seconds.

use crate::error::CoercionError;
use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

/// Element name whose timestamp keeps seconds precision
pub const CREATED_DATE_TIME: &str = "createdDateTime";

const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%MZ";
const SECOND_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Coerce a millisecond timestamp for the element `xml_node_name`.
pub fn iso_date(xml_node_name: &str, value: &JsonValue) -> Result<String, CoercionError> {
    let millis = timestamp_millis(value).ok_or_else(|| {
        CoercionError::new("expected a Unix timestamp in milliseconds")
            .with_value(value.to_string())
    })?;

    format_timestamp_millis(xml_node_name, millis)
        .map_err(|e| e.with_value(value.to_string()))
}

/// Format a millisecond timestamp, truncating to minutes unless the element
/// is [`CREATED_DATE_TIME`].
pub fn format_timestamp_millis(xml_node_name: &str, millis: i64) -> Result<String, CoercionError> {
    let datetime = DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| CoercionError::new("timestamp is out of range"))?;

    let format = if xml_node_name == CREATED_DATE_TIME {
        SECOND_FORMAT
    } else {
        MINUTE_FORMAT
    };

    Ok(datetime.format(format).to_string())
}

// Integers are taken as-is, floats truncate toward zero, and decimal
// integer strings are accepted for inputs that were stringified upstream.
fn timestamp_millis(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        JsonValue::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
