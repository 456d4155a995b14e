//! Error types for schema failures
//!
//! A [`ValidationError`] carries a stable `code` for programmatic handling,
//! a human-readable `message`, and the `field` path it was raised at when it
//! bubbled up through an object or array. [`ValidationErrors`] is the
//! `std::error::Error` form of a failed parse, produced by
//! [`ParseResult::into_result`](crate::foundation::ParseResult::into_result).

use std::borrow::Cow;
use std::fmt;

use conform_value::ValueKind;
use serde::Serialize;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single failure reported by a schema.
///
/// All string fields use `Cow<'static, str>` so that static codes and
/// messages never allocate.
///
/// # Examples
///
/// ```rust
/// use conform_schema::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "Must be at least 5 characters long")
///     .with_param("min", "5");
///
/// assert_eq!(error.param("min"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Error code, e.g. `"min_length"`, `"type_mismatch"`, `"missing_key"`.
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Location inside the input, e.g. `"address.zipCode"` or `"tags[1]"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 0-2).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the message, keeping code, field and params.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    // ------------------------------------------------------------------------
    // Nesting
    // ------------------------------------------------------------------------

    /// Re-raises this error from inside the object key `key`.
    ///
    /// The message is prefixed with `error in key <key>: ` and the key is
    /// prepended to the field path.
    #[must_use]
    pub fn in_key(self, key: &str) -> Self {
        let field = match self.field.as_deref() {
            None => key.to_owned(),
            Some(inner) if inner.starts_with('[') => format!("{key}{inner}"),
            Some(inner) => format!("{key}.{inner}"),
        };
        let message = format!("error in key {key}: {}", self.message);
        Self {
            message: Cow::Owned(message),
            field: Some(Cow::Owned(field)),
            ..self
        }
    }

    /// Re-raises this error from inside the array element at `index`.
    #[must_use]
    pub fn at_index(self, index: usize) -> Self {
        let field = match self.field.as_deref() {
            None => format!("[{index}]"),
            Some(inner) if inner.starts_with('[') => format!("[{index}]{inner}"),
            Some(inner) => format!("[{index}].{inner}"),
        };
        let message = format!("element at index {index}: {}", self.message);
        Self {
            message: Cow::Owned(message),
            field: Some(Cow::Owned(field)),
            ..self
        }
    }

    // ------------------------------------------------------------------------
    // Convenience constructors
    // ------------------------------------------------------------------------

    /// The input has the wrong kind for the schema.
    pub fn type_mismatch(
        message: impl Into<Cow<'static, str>>,
        expected: &'static str,
        actual: ValueKind,
    ) -> Self {
        Self::new("type_mismatch", message)
            .with_param("expected", expected)
            .with_param("actual", actual.name())
    }

    /// A string is shorter than `min` bytes.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters long"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// A string is longer than `max` bytes.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters long"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// The input does not match a textual format such as email or UUID.
    pub fn invalid_format(format: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", message).with_param("format", format)
    }

    /// A required object key is absent.
    pub fn missing_key(key: &str) -> Self {
        Self::new("missing_key", format!("missing required key: {key}"))
            .with_field(key.to_owned())
    }

    /// A strict object received a key it does not declare.
    pub fn unrecognized_key(key: &str) -> Self {
        Self::new("unrecognized_key", format!("unrecognized key: {key}"))
            .with_field(key.to_owned())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{field}] ")?;
        }
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// VALIDATION ERRORS
// ============================================================================

/// Every error of a failed parse, as a single `std::error::Error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("validation failed for `{path}`: {}", summarize(.errors))]
pub struct ValidationErrors {
    /// Path label of the schema that failed.
    pub path: String,
    /// Errors in the order they were collected.
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Number of collected errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when no error was collected.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the collected errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_ref())
        .collect::<Vec<_>>()
        .join("; ")
}
