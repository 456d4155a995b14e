//! Coercion to `f64`.

use conform_value::Value;

use super::{CoercionError, reject};
use crate::foundation::{Coercing, Entry, ValidationError};

/// Converts to `f64`.
///
/// Booleans become 1 or 0 and `Null` becomes 0. Text must parse as a float
/// in full. A NaN or infinite result is rejected regardless of where it
/// came from.
pub fn to_number(value: &Value) -> Result<f64, CoercionError> {
    let n = match value {
        Value::Integer(i) => *i as f64,
        Value::Float(f) => *f,
        Value::Text(s) => s.parse::<f64>().map_err(|_| CoercionError::Unparseable {
            input: s.clone(),
            target: "float",
        })?,
        Value::Boolean(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::Date(_) | Value::Array(_) | Value::Object(_) => {
            return Err(CoercionError::unsupported(value, "float"));
        }
    };

    if n.is_nan() {
        Err(CoercionError::NotANumber {
            input: value.to_string(),
        })
    } else if n.is_infinite() {
        Err(CoercionError::Infinite {
            input: value.to_string(),
        })
    } else {
        Ok(n)
    }
}

impl Entry<f64> for Coercing {
    fn enter(value: &Value) -> Result<f64, ValidationError> {
        to_number(value).map_err(reject)
    }
}
