//! Core traits for rules
//!
//! A rule is the smallest unit of checking: it inspects an already typed
//! value and either passes or returns one [`ValidationError`]. Schemas own
//! an ordered list of rules and run all of them.

use std::fmt;
use std::sync::Arc;

use crate::foundation::ValidationError;
use crate::rules::WithMessage;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// The trait every rule implements.
///
/// # Examples
///
/// ```rust
/// use conform_schema::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new("no_spaces", "Must not contain spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("abc").is_ok());
/// ```
pub trait Validate {
    /// The type being checked (may be unsized, e.g. `str`).
    type Input: ?Sized;

    /// Checks the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

/// A shared, type-erased rule over `T`.
pub type Rule<T> = Arc<dyn Validate<Input = T> + Send + Sync>;

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every rule.
pub trait ValidateExt: Validate + Sized {
    /// Replaces the message of any error this rule reports.
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// CLOSURE RULES
// ============================================================================

/// A rule built from a predicate closure.
///
/// Created by [`predicate`].
pub struct Predicate<T: ?Sized, F> {
    check: F,
    code: &'static str,
    message: String,
    _input: std::marker::PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> fmt::Debug for Predicate<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("code", &self.code)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<T, F> Validate for Predicate<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if (self.check)(input) {
            Ok(())
        } else {
            Err(ValidationError::new(self.code, self.message.clone()))
        }
    }
}

/// Builds a rule that fails with `message` whenever `check` returns false.
///
/// ```rust
/// use conform_schema::foundation::{predicate, Validate};
///
/// let even = predicate(|n: &f64| n % 2.0 == 0.0, "Must be even");
/// assert!(even.validate(&4.0).is_ok());
/// assert_eq!(even.validate(&3.0).unwrap_err().message, "Must be even");
/// ```
pub fn predicate<T, F>(check: F, message: impl Into<String>) -> Predicate<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    Predicate {
        check,
        code: "custom",
        message: message.into(),
        _input: std::marker::PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _: &str) -> Result<(), ValidationError> {
            Err(ValidationError::new("never", "Never valid"))
        }
    }

    #[test]
    fn shared_rules_delegate() {
        let rule: Rule<str> = Arc::new(AlwaysFails);
        assert_eq!(rule.validate("x").unwrap_err().code, "never");
    }

    #[test]
    fn with_message_keeps_code() {
        let err = AlwaysFails.with_message("Nope").validate("x").unwrap_err();
        assert_eq!(err.code, "never");
        assert_eq!(err.message, "Nope");
    }

    #[test]
    fn predicate_uses_custom_code() {
        let rule = predicate(|s: &str| s.is_ascii(), "Must be ASCII");
        let err = rule.validate("héllo").unwrap_err();
        assert_eq!(err.code, "custom");
        assert!(rule.validate("hello").is_ok());
    }
}
