//! Type coercers
//!
//! Pure functions turning raw scalar input into the canonical text of a
//! domain type. A coercer either produces text or a [`CoercionError`];
//! it never sees the XML tree.
//!
//! [`CoercionError`]: crate::error::CoercionError

mod entsoe_boolean;
mod iso_date;

pub use entsoe_boolean::{entsoe_boolean, FALSE_CODE, TRUE_CODE};
pub use iso_date::{format_timestamp_millis, iso_date, CREATED_DATE_TIME};
