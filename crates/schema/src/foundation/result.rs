//! The outcome of a parse.

use serde::Serialize;

use crate::foundation::{ValidationError, ValidationErrors};

/// What a schema reports after parsing one input.
///
/// `is_success()` is true exactly when `errors()` is empty; the two cannot
/// drift apart because errors are only added through this type's methods.
/// A successful result always carries a value. A failed result carries the
/// value that was built before rules or elements failed (the typed input,
/// or the elements of an array that did parse), and none when the input
/// could not be narrowed or coerced at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult<T> {
    success: bool,
    path: String,
    errors: Vec<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<T>,
}

impl<T> ParseResult<T> {
    /// A successful result carrying `value`.
    pub fn success(path: impl Into<String>, value: T) -> Self {
        Self {
            success: true,
            path: path.into(),
            errors: Vec::new(),
            value: Some(value),
        }
    }

    /// A failed result with a single error and no value.
    pub fn failure(path: impl Into<String>, error: ValidationError) -> Self {
        Self {
            success: false,
            path: path.into(),
            errors: vec![error],
            value: None,
        }
    }

    /// A failed result with every error in `errors` and no value.
    ///
    /// `errors` must not be empty.
    pub(crate) fn failures(path: impl Into<String>, errors: Vec<ValidationError>) -> Self {
        debug_assert!(!errors.is_empty(), "a failed result needs at least one error");
        Self {
            success: false,
            path: path.into(),
            errors,
            value: None,
        }
    }

    /// A result whose success is decided by whether `errors` is empty.
    ///
    /// The value is kept either way.
    pub fn from_parts(path: impl Into<String>, errors: Vec<ValidationError>, value: T) -> Self {
        Self {
            success: errors.is_empty(),
            path: path.into(),
            errors,
            value: Some(value),
        }
    }

    /// Whether no error was collected.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Path label of the schema that produced this result.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Collected errors in order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Just the messages of the collected errors.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_ref()).collect()
    }

    /// The parsed value, if any.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Takes the parsed value, if any.
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Adds an error, marking the result failed.
    pub fn push_error(&mut self, error: ValidationError) {
        self.success = false;
        self.errors.push(error);
    }

    /// Maps the carried value, keeping errors and path.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<U> {
        ParseResult {
            success: self.success,
            path: self.path,
            errors: self.errors,
            value: self.value.map(f),
        }
    }

    /// Splits into the value and the errors.
    pub fn into_parts(self) -> (Option<T>, Vec<ValidationError>) {
        (self.value, self.errors)
    }

    /// Converts into a standard `Result`.
    ///
    /// ```rust
    /// use conform_schema::prelude::*;
    ///
    /// let name = string("name").min(2).parse(&Value::text("Al")).into_result();
    /// assert_eq!(name.unwrap(), "Al");
    /// ```
    pub fn into_result(self) -> Result<T, ValidationErrors> {
        match self.value {
            Some(value) if self.success => Ok(value),
            _ => Err(ValidationErrors {
                path: self.path,
                errors: self.errors,
            }),
        }
    }
}
