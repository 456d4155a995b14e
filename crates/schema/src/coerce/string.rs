//! Coercion to text.

use conform_value::Value;

use super::{CoercionError, reject};
use crate::foundation::{Coercing, Entry, ValidationError};

/// Converts a scalar to its text form. `Null` becomes `"null"`; dates and
/// collections are not converted.
pub fn to_text(value: &Value) -> Result<String, CoercionError> {
    match value {
        Value::Text(s) => Ok(s.clone()),
        Value::Integer(_) | Value::Float(_) | Value::Boolean(_) => Ok(value.to_string()),
        Value::Null => Ok("null".to_owned()),
        Value::Date(_) | Value::Array(_) | Value::Object(_) => {
            Err(CoercionError::unsupported(value, "string"))
        }
    }
}

impl Entry<String> for Coercing {
    fn enter(value: &Value) -> Result<String, ValidationError> {
        to_text(value).map_err(reject)
    }
}
