//! Custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the message of a rule's error, keeping its code and params.
///
/// Schemas use this for `.message(..)`, which wraps the most recently
/// added rule.
///
/// ```rust
/// use conform_schema::foundation::{Validate, ValidateExt};
/// use conform_schema::rules::MinLength;
///
/// let rule = MinLength::new(8).with_message("Password is too short");
/// let err = rule.validate("hunter2").unwrap_err();
/// assert_eq!(err.code, "min_length");
/// assert_eq!(err.message, "Password is too short");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    /// Wraps `inner` so its failures report `message`.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: Cow::Owned(message.into()),
        }
    }

    /// The replacement message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the wrapped rule.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner
            .validate(input)
            .map_err(|original| original.with_message(self.message.clone()))
    }
}
