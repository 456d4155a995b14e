//! Coercion to `bool`.

use conform_value::Value;

use super::{CoercionError, reject};
use crate::foundation::{Coercing, Entry, ValidationError};

/// Converts to `bool`.
///
/// Text accepts `true`/`TRUE`/`1` and `false`/`FALSE`/`0`, then the short
/// and capitalised forms `t`, `T`, `True`, `f`, `F`, `False`. Numbers are
/// true when non-zero. `Null` is false.
pub fn to_boolean(value: &Value) -> Result<bool, CoercionError> {
    match value {
        Value::Boolean(b) => Ok(*b),
        Value::Text(s) => match s.as_str() {
            "true" | "TRUE" | "1" | "t" | "T" | "True" => Ok(true),
            "false" | "FALSE" | "0" | "f" | "F" | "False" => Ok(false),
            _ => Err(CoercionError::Unparseable {
                input: s.clone(),
                target: "bool",
            }),
        },
        Value::Integer(i) => Ok(*i != 0),
        Value::Float(f) => Ok(*f != 0.0),
        Value::Null => Ok(false),
        Value::Date(_) | Value::Array(_) | Value::Object(_) => {
            Err(CoercionError::unsupported(value, "bool"))
        }
    }
}

impl Entry<bool> for Coercing {
    fn enter(value: &Value) -> Result<bool, ValidationError> {
        to_boolean(value).map_err(reject)
    }
}
