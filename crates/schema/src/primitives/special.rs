//! Schemas without constraint builders: nil, any, never.

use std::convert::Infallible;

use conform_value::Value;

use crate::foundation::{ParseResult, ValidationError};
use crate::schema::Parse;

/// Accepts only `Null`.
#[derive(Debug, Clone)]
pub struct NilSchema {
    path: String,
}

impl NilSchema {
    /// A schema accepting only `Null`.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Parse for NilSchema {
    type Output = ();

    fn parse(&self, value: &Value) -> ParseResult<()> {
        if value.is_null() {
            ParseResult::success(self.path.as_str(), ())
        } else {
            ParseResult::failure(
                self.path.as_str(),
                ValidationError::type_mismatch("Value must be nil", "null", value.kind()),
            )
        }
    }

    fn path(&self) -> &str {
        &self.path
    }
}

/// Accepts any value except `Null`, returning it unchanged.
#[derive(Debug, Clone)]
pub struct AnySchema {
    path: String,
}

impl AnySchema {
    /// A schema accepting any non-null value.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Parse for AnySchema {
    type Output = Value;

    fn parse(&self, value: &Value) -> ParseResult<Value> {
        if value.is_null() {
            ParseResult::failure(
                self.path.as_str(),
                ValidationError::new("required", "Value must not be nil"),
            )
        } else {
            ParseResult::success(self.path.as_str(), value.clone())
        }
    }

    fn path(&self) -> &str {
        &self.path
    }
}

/// Rejects every value, `Null` included.
#[derive(Debug, Clone)]
pub struct NeverSchema {
    path: String,
}

impl NeverSchema {
    /// A schema that rejects every value.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Parse for NeverSchema {
    type Output = Infallible;

    fn parse(&self, _: &Value) -> ParseResult<Infallible> {
        ParseResult::failure(
            self.path.as_str(),
            ValidationError::new("never", "Value is not allowed"),
        )
    }

    fn path(&self) -> &str {
        &self.path
    }
}
