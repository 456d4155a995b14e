//! How a primitive schema turns a dynamic [`Value`] into its typed input.
//!
//! Every primitive schema is generic over an entry mode. [`Narrowing`]
//! accepts only values that already have the right kind; [`Coercing`]
//! converts anything convertible (see [`crate::coerce`]). Rules never see
//! the difference: they only run on the typed value the entry produced.

use chrono::{DateTime, Utc};
use conform_value::Value;

use crate::foundation::ValidationError;

/// Produces a typed `T` from a dynamic value, or the one error that stops
/// the parse before any rule runs.
pub trait Entry<T> {
    /// Converts `value`, or explains why it cannot be.
    fn enter(value: &Value) -> Result<T, ValidationError>;
}

/// Entry mode that accepts only values already of the target kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Narrowing;

/// Entry mode that coerces values into the target kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coercing;

impl Entry<String> for Narrowing {
    fn enter(value: &Value) -> Result<String, ValidationError> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            other => Err(ValidationError::type_mismatch(
                "Must be a string",
                "string",
                other.kind(),
            )),
        }
    }
}

impl Entry<f64> for Narrowing {
    fn enter(value: &Value) -> Result<f64, ValidationError> {
        match value.as_f64() {
            Some(n) if n.is_nan() => Err(ValidationError::new("not_a_number", "Must not be NaN")),
            Some(n) => Ok(n),
            None => Err(ValidationError::type_mismatch(
                "Must be a number",
                "number",
                value.kind(),
            )),
        }
    }
}

impl Entry<i64> for Narrowing {
    fn enter(value: &Value) -> Result<i64, ValidationError> {
        match value {
            Value::Integer(i) => Ok(*i),
            other => Err(ValidationError::type_mismatch(
                "Must be an integer",
                "integer",
                other.kind(),
            )),
        }
    }
}

impl Entry<bool> for Narrowing {
    fn enter(value: &Value) -> Result<bool, ValidationError> {
        value.as_bool().ok_or_else(|| {
            ValidationError::type_mismatch("Must be a boolean", "boolean", value.kind())
        })
    }
}

impl Entry<DateTime<Utc>> for Narrowing {
    fn enter(value: &Value) -> Result<DateTime<Utc>, ValidationError> {
        value
            .as_date()
            .ok_or_else(|| ValidationError::type_mismatch("Must be a date", "date", value.kind()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Integer(5), 5.0)]
    #[case(Value::Float(-1.5), -1.5)]
    #[case(Value::Float(f64::INFINITY), f64::INFINITY)]
    fn numbers_accept_both_numeric_kinds(#[case] input: Value, #[case] expected: f64) {
        assert_eq!(<Narrowing as Entry<f64>>::enter(&input), Ok(expected));
    }

    #[test]
    fn nan_is_rejected_at_entry() {
        let err = <Narrowing as Entry<f64>>::enter(&Value::Float(f64::NAN)).unwrap_err();
        assert_eq!(err.message, "Must not be NaN");
    }

    #[rstest]
    #[case(Value::Integer(1))]
    #[case(Value::Null)]
    #[case(Value::array(["a"]))]
    fn strings_do_not_convert(#[case] input: Value) {
        let err = <Narrowing as Entry<String>>::enter(&input).unwrap_err();
        assert_eq!(err.code, "type_mismatch");
        assert_eq!(err.message, "Must be a string");
    }

    #[rstest]
    #[case(Value::Float(2.0))]
    #[case(Value::text("2"))]
    #[case(Value::Boolean(true))]
    fn integers_accept_only_integer_values(#[case] input: Value) {
        assert_eq!(<Narrowing as Entry<i64>>::enter(&Value::Integer(-9)), Ok(-9));
        let err = <Narrowing as Entry<i64>>::enter(&input).unwrap_err();
        assert_eq!(err.message, "Must be an integer");
        assert_eq!(err.code, "type_mismatch");
    }

    #[test]
    fn booleans_and_dates_narrow() {
        assert_eq!(<Narrowing as Entry<bool>>::enter(&Value::Boolean(false)), Ok(false));
        let err = <Narrowing as Entry<bool>>::enter(&Value::text("true")).unwrap_err();
        assert_eq!(err.message, "Must be a boolean");

        let now = Utc::now();
        assert_eq!(<Narrowing as Entry<DateTime<Utc>>>::enter(&Value::Date(now)), Ok(now));
        assert!(<Narrowing as Entry<DateTime<Utc>>>::enter(&Value::text("2024-01-01")).is_err());
    }
}
