//! Homogeneous arrays.

use conform_value::Value;
use tracing::debug;

use crate::foundation::{ParseResult, ValidationError};
use crate::rules::{ExactSize, MaxSize, MinSize, NotEmpty};
use crate::schema::{Parse, Schema, TypedParse};

/// Array schema: every element goes through `S`, then size rules run on
/// the number of elements.
///
/// Element failures do not stop the scan. The result's value holds the
/// elements that did parse, in order, even when the array as a whole fails.
#[derive(Debug, Clone)]
pub struct ArraySchema<S> {
    element: S,
    size: Schema<usize>,
}

impl<S> ArraySchema<S> {
    /// An array of `element`, with no size rules.
    pub fn new(path: impl Into<String>, element: S) -> Self {
        Self {
            element,
            size: Schema::new(path),
        }
    }

    /// The element schema.
    pub fn element(&self) -> &S {
        &self.element
    }

    /// At least one element.
    pub fn nonempty(mut self) -> Self {
        self.size.add_rule(NotEmpty);
        self
    }

    /// At least `n` elements.
    pub fn min(mut self, n: usize) -> Self {
        self.size.add_rule(MinSize::new(n));
        self
    }

    /// At most `n` elements.
    pub fn max(mut self, n: usize) -> Self {
        self.size.add_rule(MaxSize::new(n));
        self
    }

    /// Exactly `n` elements.
    pub fn length(mut self, n: usize) -> Self {
        self.size.add_rule(ExactSize::new(n));
        self
    }

    /// Replaces the message of the most recently added size rule.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.size.override_last_message(message);
        self
    }

    fn collect<I, T>(&self, parsed: I, len: usize) -> ParseResult<Vec<T>>
    where
        I: IntoIterator<Item = ParseResult<T>>,
    {
        let mut items = Vec::with_capacity(len);
        let mut errors = Vec::new();

        for (index, result) in parsed.into_iter().enumerate() {
            let (value, element_errors) = result.into_parts();
            if element_errors.is_empty() {
                items.extend(value);
            } else {
                errors.extend(element_errors.into_iter().map(|e| e.at_index(index)));
            }
        }
        errors.extend(self.size.check(&len));

        if !errors.is_empty() {
            debug!(path = %self.size.path(), failed = errors.len(), "array rejected");
        }
        ParseResult::from_parts(self.size.path(), errors, items)
    }
}

impl<S: Parse> Parse for ArraySchema<S> {
    type Output = Vec<S::Output>;

    fn parse(&self, value: &Value) -> ParseResult<Self::Output> {
        let Some(elements) = value.as_array() else {
            debug!(path = %self.size.path(), actual = %value.kind(), "array expected");
            return ParseResult::failure(
                self.size.path(),
                ValidationError::type_mismatch("Must be an array", "array", value.kind()),
            );
        };
        self.collect(elements.iter().map(|e| self.element.parse(e)), elements.len())
    }

    fn path(&self) -> &str {
        self.size.path()
    }
}

impl<S: TypedParse> TypedParse for ArraySchema<S> {
    fn parse_typed(&self, value: Self::Output) -> ParseResult<Self::Output> {
        let len = value.len();
        self.collect(value.into_iter().map(|v| self.element.parse_typed(v)), len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::array;
    use crate::primitives::{number, string};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn reports_each_failing_index() {
        let schema = array("scores", number("score").positive());
        let result = schema.parse(&Value::from(json!([1, -2, 3, -4])));

        assert!(!result.is_success());
        assert_eq!(
            result.messages(),
            vec![
                "element at index 1: Must be a positive number",
                "element at index 3: Must be a positive number",
            ]
        );
        assert_eq!(result.value(), Some(&vec![1.0, 3.0]));
    }

    #[test]
    fn size_rules_run_after_elements() {
        let schema = array("tags", string("tag").min(2)).min(3);
        let result = schema.parse(&Value::from(json!(["a", "bb"])));
        assert_eq!(
            result.messages(),
            vec![
                "element at index 0: Must be at least 2 characters long",
                "Array must have at least 3 elements",
            ]
        );
    }

    #[test]
    fn size_rules_count_input_elements() {
        let schema = array("xs", number("x")).length(2);
        let result = schema.parse(&Value::from(json!([1, "two"])));
        assert_eq!(result.messages(), vec!["element at index 1: Must be a number"]);
    }

    #[test]
    fn empty_array_and_nonempty() {
        let empty = Value::array(Vec::<Value>::new());
        assert!(array("xs", number("x")).parse(&empty).is_success());
        assert_eq!(
            array("xs", number("x")).nonempty().parse(&empty).messages(),
            vec!["Array must not be empty"]
        );
    }

    #[test]
    fn non_arrays_are_rejected() {
        let result = array("xs", number("x")).parse(&Value::text("1,2"));
        assert_eq!(result.messages(), vec!["Must be an array"]);
        assert_eq!(result.path(), "xs");
    }

    #[test]
    fn nested_arrays_compose_indices() {
        let grid = array("grid", array("row", number("cell").int()));
        let result = grid.parse(&Value::from(json!([[1, 2], [3, 4.5]])));
        assert_eq!(result.errors()[0].field.as_deref(), Some("[1][1]"));
    }

    #[test]
    fn parse_typed_checks_elements_and_size() {
        let schema = array("xs", number("x").lt(10.0)).max(2);
        let result = schema.parse_typed(vec![1.0, 20.0, 3.0]);
        assert_eq!(
            result.messages(),
            vec![
                "element at index 1: Must be smaller than 10",
                "Array must have at most 2 elements",
            ]
        );
    }

    #[test]
    fn message_overrides_size_rule() {
        let schema = array("xs", number("x")).nonempty().message("Pick at least one");
        let result = schema.parse(&Value::array(Vec::<Value>::new()));
        assert_eq!(result.messages(), vec!["Pick at least one"]);
    }
}
