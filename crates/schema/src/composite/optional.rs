//! Optional values and optional object keys.

use conform_value::Value;

use crate::foundation::ParseResult;
use crate::schema::{Parse, TypedParse};

/// Lets `Null` through as `None`; anything else goes to the wrapped schema.
///
/// Inside an object, a key bound to an optional schema may also be absent.
#[derive(Debug, Clone)]
pub struct OptionalSchema<S> {
    inner: S,
}

impl<S> OptionalSchema<S> {
    /// Wraps `inner`.
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped schema.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwraps back to the inner schema.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Parse> Parse for OptionalSchema<S> {
    type Output = Option<S::Output>;

    fn parse(&self, value: &Value) -> ParseResult<Self::Output> {
        if value.is_null() {
            ParseResult::success(self.inner.path(), None)
        } else {
            self.inner.parse(value).map(Some)
        }
    }

    fn path(&self) -> &str {
        self.inner.path()
    }

    fn accepts_missing(&self) -> bool {
        true
    }
}

impl<S: TypedParse> TypedParse for OptionalSchema<S> {
    fn parse_typed(&self, value: Self::Output) -> ParseResult<Self::Output> {
        match value {
            None => ParseResult::success(self.inner.path(), None),
            Some(v) => self.inner.parse_typed(v).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::optional;
    use crate::primitives::{never, string};
    use pretty_assertions::assert_eq;

    #[test]
    fn null_short_circuits_inner_schema() {
        let schema = optional(never("nothing"));
        let result = schema.parse(&Value::Null);
        assert!(result.is_success());
        assert_eq!(result.path(), "nothing");
    }

    #[test]
    fn present_values_are_delegated() {
        let schema = optional(string("nick").min(3));
        assert_eq!(
            schema.parse(&Value::text("Bob")).into_value(),
            Some(Some("Bob".to_string()))
        );
        assert_eq!(
            schema.parse(&Value::text("Bo")).messages(),
            vec!["Must be at least 3 characters long"]
        );
        assert_eq!(
            schema.parse(&Value::Integer(1)).messages(),
            vec!["Must be a string"]
        );
    }

    #[test]
    fn typed_none_skips_rules() {
        let schema = optional(string("nick").min(3));
        assert!(schema.parse_typed(None).is_success());
        assert!(!schema.parse_typed(Some("x".to_string())).is_success());
    }

    #[test]
    fn marks_key_as_omittable() {
        assert!(optional(string("nick")).accepts_missing());
        assert!(!string("nick").accepts_missing());
    }
}
