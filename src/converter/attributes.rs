//! Attribute resolution
//!
//! Attribute specs are resolved against the scope, the input object that
//! contains the mapped field. A `source` therefore names a sibling field,
//! never a field nested inside the mapped value.

use crate::builder::AttributeMap;
use crate::error::{Error, Result};
use crate::mapping::AttributeSpec;
use crate::value::scalar_text;
use serde_json::{Map, Value as JsonValue};

/// Resolve `specs` against `scope`, preserving spec order.
///
/// A non-empty literal `value` wins; otherwise `source` is looked up in the
/// scope. Absent, null, empty, array and object values are unusable and
/// fail with [`Error::InvalidAttribute`].
pub fn resolve_attributes(
    specs: &[AttributeSpec],
    scope: &Map<String, JsonValue>,
) -> Result<AttributeMap> {
    specs
        .iter()
        .map(|spec| {
            let value = spec
                .value
                .clone()
                .filter(|v| !v.is_empty())
                .or_else(|| {
                    spec.source
                        .as_deref()
                        .and_then(|source| scope.get(source))
                        .and_then(scalar_text)
                })
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::InvalidAttribute(spec.name.clone()))?;

            Ok((spec.name.clone(), value))
        })
        .collect()
}
