//! Display implementation for Value
//!
//! Scalars print in their canonical text form, which is also what string
//! coercion produces.

use std::fmt;

use crate::value::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),

            Value::Boolean(b) => write!(f, "{b}"),

            Value::Integer(i) => write!(f, "{i}"),

            Value::Float(fl) => {
                if fl.is_nan() {
                    write!(f, "NaN")
                } else if fl.is_infinite() && fl.is_sign_positive() {
                    write!(f, "+Inf")
                } else if fl.is_infinite() {
                    write!(f, "-Inf")
                } else {
                    write!(f, "{fl}")
                }
            }

            Value::Text(t) => write!(f, "{t}"),

            Value::Date(d) => write!(f, "{}", d.to_rfc3339()),

            Value::Array(arr) => {
                write!(f, "[")?;
                for (i, item) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }

            Value::Object(obj) => {
                write!(f, "{{")?;
                for (i, (key, value)) in obj.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Null, "null")]
    #[case(Value::Boolean(true), "true")]
    #[case(Value::Integer(-12), "-12")]
    #[case(Value::Float(3.0), "3")]
    #[case(Value::Float(1.25), "1.25")]
    #[case(Value::Float(f64::NAN), "NaN")]
    #[case(Value::Float(f64::NEG_INFINITY), "-Inf")]
    #[case(Value::text("plain"), "plain")]
    fn scalar_display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn collections_display() {
        let v = Value::object([("a", Value::array([1, 2])), ("b", Value::Null)]);
        assert_eq!(v.to_string(), "{a: [1, 2], b: null}");
    }
}
