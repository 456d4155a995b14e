//! Schemas: the parse side of the library
//!
//! Every schema implements [`Parse`], which takes a dynamic
//! [`Value`] and produces a [`ParseResult`] of the schema's output type.
//! Primitive and array schemas also implement [`TypedParse`], which skips
//! narrowing and runs only the rules.
//!
//! Composites hold their children by value, or as [`BoxedSchema`] when a
//! child's concrete type should be erased.

mod core;

use std::sync::Arc;

use conform_value::Value;

use crate::foundation::ParseResult;

pub use self::core::Schema;

/// Parses a dynamic value.
pub trait Parse {
    /// The typed value a successful parse produces.
    type Output;

    /// Narrows (or coerces) `value`, runs every rule, and reports the outcome.
    fn parse(&self, value: &Value) -> ParseResult<Self::Output>;

    /// The path label this schema reports in its results.
    fn path(&self) -> &str;

    /// Whether an object may omit the key this schema is bound to.
    fn accepts_missing(&self) -> bool {
        false
    }

    /// Parses a JSON document.
    #[cfg(feature = "json")]
    fn parse_json(&self, json: &serde_json::Value) -> ParseResult<Self::Output> {
        self.parse(&Value::from(json))
    }

    /// Erases the concrete schema type.
    fn boxed(self) -> BoxedSchema<Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

/// Runs a schema's rules on an already typed value.
pub trait TypedParse: Parse {
    /// Skips narrowing and coercion; only rules run.
    fn parse_typed(&self, value: Self::Output) -> ParseResult<Self::Output>;
}

/// A schema with its concrete type erased.
pub type BoxedSchema<T> = Box<dyn Parse<Output = T> + Send + Sync>;

impl<S: Parse + ?Sized> Parse for Box<S> {
    type Output = S::Output;

    fn parse(&self, value: &Value) -> ParseResult<Self::Output> {
        (**self).parse(value)
    }

    fn path(&self) -> &str {
        (**self).path()
    }

    fn accepts_missing(&self) -> bool {
        (**self).accepts_missing()
    }
}

impl<S: Parse + ?Sized> Parse for Arc<S> {
    type Output = S::Output;

    fn parse(&self, value: &Value) -> ParseResult<Self::Output> {
        (**self).parse(value)
    }

    fn path(&self) -> &str {
        (**self).path()
    }

    fn accepts_missing(&self) -> bool {
        (**self).accepts_missing()
    }
}
