//! Coercion to `i64`.

use conform_value::Value;

use super::{CoercionError, reject};
use crate::foundation::{Coercing, Entry, ValidationError};

// 2^63: the first float past `i64::MAX`.
const I64_END: f64 = 9_223_372_036_854_775_808.0;

/// Converts to `i64`.
///
/// Floats are truncated toward zero and must land inside the `i64` range.
/// Booleans become 1 or 0 and `Null` becomes 0. Text, dates and containers
/// are not converted.
pub fn to_integer(value: &Value) -> Result<i64, CoercionError> {
    match value {
        Value::Integer(i) => Ok(*i),
        Value::Float(f) if f.is_nan() => Err(CoercionError::NotANumber {
            input: value.to_string(),
        }),
        Value::Float(f) if f.is_infinite() => Err(CoercionError::Infinite {
            input: value.to_string(),
        }),
        Value::Float(f) => {
            let t = f.trunc();
            if (-I64_END..I64_END).contains(&t) {
                Ok(t as i64)
            } else {
                Err(CoercionError::OutOfRange {
                    input: value.to_string(),
                    target: "integer",
                })
            }
        }
        Value::Boolean(b) => Ok(i64::from(*b)),
        Value::Null => Ok(0),
        Value::Text(_) | Value::Date(_) | Value::Array(_) | Value::Object(_) => {
            Err(CoercionError::unsupported(value, "integer"))
        }
    }
}

impl Entry<i64> for Coercing {
    fn enter(value: &Value) -> Result<i64, ValidationError> {
        to_integer(value).map_err(reject)
    }
}
