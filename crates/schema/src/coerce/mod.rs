//! Coercing schemas
//!
//! The factories here build the same primitive schemas as
//! [`crate::primitives`], but with the [`Coercing`] entry mode: the input is
//! converted to the target type first, then the usual rules run.
//!
//! | target  | accepted input                                                   |
//! |---------|------------------------------------------------------------------|
//! | string  | text; integer, float and boolean via `Display`; `Null` as `"null"` |
//! | number  | integer, float; numeric text; boolean as 1/0; `Null` as 0        |
//! | integer | integer; float truncated toward zero; boolean as 1/0; `Null` as 0 |
//! | boolean | boolean; `true`/`false`-like text; numbers (non-zero is true); `Null` as false |
//! | date    | timestamps; text in a handful of layouts; `Null` as the Unix epoch |
//!
//! ```rust
//! use conform_schema::prelude::*;
//!
//! let age = coerce::number("age").int().gte(18.0);
//! assert_eq!(age.parse(&Value::text("21")).into_value(), Some(21.0));
//! assert!(!age.parse(&Value::text("abc")).is_success());
//! ```

mod boolean;
mod date;
mod integer;
mod number;
mod string;

use conform_value::ValueKind;
use tracing::debug;

use crate::foundation::{Coercing, ValidationError};
use crate::primitives::{BooleanSchema, DateSchema, IntegerSchema, NumberSchema, StringSchema};

pub use boolean::to_boolean;
pub use date::to_date;
pub use integer::to_integer;
pub use number::to_number;
pub use string::to_text;

/// Why a value could not be converted.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoercionError {
    /// The value's kind has no conversion to the target.
    #[error("cannot coerce '{value}' of type '{kind}' into {} {target}", article(.target))]
    Unsupported {
        value: String,
        kind: ValueKind,
        target: &'static str,
    },

    /// Text that does not spell a value of the target type.
    #[error("cannot parse '{input}' into a {target}")]
    Unparseable { input: String, target: &'static str },

    /// The conversion produced NaN.
    #[error("'{input}' is NaN, cannot convert to a number")]
    NotANumber { input: String },

    /// The conversion produced an infinity.
    #[error("'{input}' is infinite, cannot convert to a number")]
    Infinite { input: String },

    /// A finite number outside the target's range.
    #[error("'{input}' is out of range for {} {target}", article(.target))]
    OutOfRange { input: String, target: &'static str },
}

impl CoercionError {
    /// Stable error code, as used in [`ValidationError::code`].
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Unsupported { .. } => "coerce_unsupported",
            Self::Unparseable { .. } => "coerce_unparseable",
            Self::NotANumber { .. } => "coerce_nan",
            Self::Infinite { .. } => "coerce_infinite",
            Self::OutOfRange { .. } => "coerce_out_of_range",
        }
    }

    pub(crate) fn unsupported(value: &conform_value::Value, target: &'static str) -> Self {
        Self::Unsupported {
            value: value.to_string(),
            kind: value.kind(),
            target,
        }
    }
}

impl From<CoercionError> for ValidationError {
    fn from(err: CoercionError) -> Self {
        ValidationError::new(err.code(), err.to_string())
    }
}

fn article(noun: &str) -> &'static str {
    if noun.starts_with(['a', 'e', 'i', 'o', 'u']) {
        "an"
    } else {
        "a"
    }
}

/// Logs a failed conversion and turns it into the schema's error.
pub(crate) fn reject(err: CoercionError) -> ValidationError {
    debug!(code = err.code(), error = %err, "coercion failed");
    err.into()
}

/// A string schema that first converts scalars to text.
pub fn string(path: impl Into<String>) -> StringSchema<Coercing> {
    StringSchema::new(path)
}

/// A number schema that first converts numeric text, booleans and `Null`.
pub fn number(path: impl Into<String>) -> NumberSchema<Coercing> {
    NumberSchema::new(path)
}

/// An integer schema that first truncates floats and converts booleans and
/// `Null`. Text is not converted.
pub fn integer(path: impl Into<String>) -> IntegerSchema<Coercing> {
    IntegerSchema::new(path)
}

/// A boolean schema that first converts text, numbers and `Null`.
pub fn boolean(path: impl Into<String>) -> BooleanSchema<Coercing> {
    BooleanSchema::new(path)
}

/// A date schema that first parses text and converts `Null`.
pub fn date(path: impl Into<String>) -> DateSchema<Coercing> {
    DateSchema::new(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use conform_value::Value;

    #[test]
    fn errors_convert_with_code_and_message() {
        let err: ValidationError = CoercionError::unsupported(&Value::array([1]), "float").into();
        assert_eq!(err.code, "coerce_unsupported");
        assert_eq!(err.message, "cannot coerce '[1]' of type 'array' into a float");
    }

    #[test]
    fn nan_and_parse_failures_read_differently() {
        let nan = CoercionError::NotANumber {
            input: "NaN".to_string(),
        };
        let unparseable = CoercionError::Unparseable {
            input: "abc".to_string(),
            target: "float",
        };
        assert_ne!(nan.code(), unparseable.code());
        assert_eq!(unparseable.to_string(), "cannot parse 'abc' into a float");
    }

    #[test]
    fn out_of_range_has_its_own_code() {
        let err = CoercionError::OutOfRange {
            input: "1e19".to_string(),
            target: "integer",
        };
        assert_eq!(err.code(), "coerce_out_of_range");
        assert_eq!(err.to_string(), "'1e19' is out of range for an integer");
    }
}
