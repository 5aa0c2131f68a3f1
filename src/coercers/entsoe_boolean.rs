//! ENTSO-E boolean indicator coercion

use crate::error::CoercionError;
use serde_json::Value as JsonValue;

/// Indicator code for `true`
pub const TRUE_CODE: &str = "A01";

/// Indicator code for `false`
pub const FALSE_CODE: &str = "A02";

/// Map a boolean-like input to its ENTSO-E indicator code.
///
/// Accepts JSON booleans, the strings `true`/`false` in any case, and the
/// codes themselves.
pub fn entsoe_boolean(value: &JsonValue) -> Result<&'static str, CoercionError> {
    let flag = match value {
        JsonValue::Bool(b) => Some(*b),
        JsonValue::String(s) => match s.trim() {
            TRUE_CODE => Some(true),
            FALSE_CODE => Some(false),
            other if other.eq_ignore_ascii_case("true") => Some(true),
            other if other.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        },
        _ => None,
    };

    match flag {
        Some(true) => Ok(TRUE_CODE),
        Some(false) => Ok(FALSE_CODE),
        None => Err(CoercionError::new("not an ENTSO-E boolean").with_value(value.to_string())),
    }
}
