//! Enum and literal schemas: a narrowed value checked against fixed values.

use std::fmt;

use chrono::{DateTime, Utc};
use conform_value::Value;

use crate::foundation::{Entry, Narrowing, ParseResult, ValidationError};
use crate::schema::Parse;

/// A value that can be named in an [`EnumSchema`] or [`LiteralSchema`].
///
/// `Output` is the type the input is narrowed to before comparison, so
/// `"A"` compares as a `String` and `3` as an `f64`.
pub trait Choice {
    /// The narrowed type members are stored and compared as.
    type Output: Clone + PartialEq + fmt::Display;

    /// Converts the member into its comparison form.
    fn into_output(self) -> Self::Output;
}

impl Choice for &str {
    type Output = String;

    fn into_output(self) -> String {
        self.to_owned()
    }
}

impl Choice for String {
    type Output = Self;

    fn into_output(self) -> Self {
        self
    }
}

impl Choice for bool {
    type Output = Self;

    fn into_output(self) -> Self {
        self
    }
}

impl Choice for f64 {
    type Output = Self;

    fn into_output(self) -> Self {
        self
    }
}

impl Choice for i32 {
    type Output = f64;

    fn into_output(self) -> f64 {
        f64::from(self)
    }
}

impl Choice for DateTime<Utc> {
    type Output = Self;

    fn into_output(self) -> Self {
        self
    }
}

fn narrow<T>(path: &str, value: &Value) -> Result<T, ParseResult<T>>
where
    Narrowing: Entry<T>,
{
    <Narrowing as Entry<T>>::enter(value).map_err(|error| {
        let error = if error.code == "type_mismatch" {
            let message = format!(
                "Invalid type: expected {}, got {}",
                error.param("expected").unwrap_or("value"),
                value.kind()
            );
            error.with_message(message)
        } else {
            error
        };
        ParseResult::failure(path, error)
    })
}

/// Accepts one of a fixed set of values.
#[derive(Debug, Clone)]
pub struct EnumSchema<T> {
    path: String,
    members: Vec<T>,
}

impl<T: Clone + PartialEq + fmt::Display> EnumSchema<T> {
    /// An enum over `members`.
    pub fn new<C, I>(path: impl Into<String>, members: I) -> Self
    where
        C: Choice<Output = T>,
        I: IntoIterator<Item = C>,
    {
        let mut unique: Vec<T> = Vec::new();
        for member in members.into_iter().map(Choice::into_output) {
            if !unique.contains(&member) {
                unique.push(member);
            }
        }
        Self {
            path: path.into(),
            members: unique,
        }
    }

    /// The allowed values, duplicates removed, in declaration order.
    pub fn members(&self) -> &[T] {
        &self.members
    }

    fn listing(&self) -> String {
        let names: Vec<String> = self.members.iter().map(ToString::to_string).collect();
        names.join(", ")
    }
}

impl<T> Parse for EnumSchema<T>
where
    T: Clone + PartialEq + fmt::Display,
    Narrowing: Entry<T>,
{
    type Output = T;

    fn parse(&self, value: &Value) -> ParseResult<T> {
        let typed = match narrow::<T>(&self.path, value) {
            Ok(typed) => typed,
            Err(failed) => return failed,
        };
        if self.members.contains(&typed) {
            ParseResult::success(self.path.as_str(), typed)
        } else {
            let allowed = self.listing();
            ParseResult::failure(
                self.path.as_str(),
                ValidationError::new(
                    "not_in_set",
                    format!("Value is not in the allowed set: expected one of [{allowed}]"),
                )
                .with_param("allowed", allowed),
            )
        }
    }

    fn path(&self) -> &str {
        &self.path
    }
}

/// Accepts exactly one value.
#[derive(Debug, Clone)]
pub struct LiteralSchema<T> {
    path: String,
    expected: T,
}

impl<T: Clone + PartialEq + fmt::Display> LiteralSchema<T> {
    /// A literal equal to `expected`.
    pub fn new<C: Choice<Output = T>>(path: impl Into<String>, expected: C) -> Self {
        Self {
            path: path.into(),
            expected: expected.into_output(),
        }
    }

    /// The only accepted value.
    pub fn expected(&self) -> &T {
        &self.expected
    }
}

impl<T> Parse for LiteralSchema<T>
where
    T: Clone + PartialEq + fmt::Display,
    Narrowing: Entry<T>,
{
    type Output = T;

    fn parse(&self, value: &Value) -> ParseResult<T> {
        let typed = match narrow::<T>(&self.path, value) {
            Ok(typed) => typed,
            Err(failed) => return failed,
        };
        if typed == self.expected {
            ParseResult::success(self.path.as_str(), typed)
        } else {
            ParseResult::failure(
                self.path.as_str(),
                ValidationError::new("literal", format!("Value must equal {}", self.expected))
                    .with_param("expected", self.expected.to_string()),
            )
        }
    }

    fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::{enumeration, literal};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("A", true)]
    #[case("B", true)]
    #[case("D", false)]
    fn enum_membership(#[case] input: &str, #[case] accepted: bool) {
        let schema = enumeration("grade", ["A", "B", "C"]);
        assert_eq!(schema.parse(&Value::text(input)).is_success(), accepted);
    }

    #[test]
    fn enum_failure_messages_are_distinct() {
        let schema = enumeration("grade", ["A", "B", "C"]);
        assert_eq!(
            schema.parse(&Value::text("D")).messages(),
            vec!["Value is not in the allowed set: expected one of [A, B, C]"]
        );
        assert_eq!(
            schema.parse(&Value::Integer(1)).messages(),
            vec!["Invalid type: expected string, got integer"]
        );
    }

    #[test]
    fn enum_drops_duplicates() {
        let schema = enumeration("n", [1, 2, 2, 3]);
        assert_eq!(schema.members(), &[1.0, 2.0, 3.0]);
        assert_eq!(schema.parse(&Value::Float(2.0)).into_value(), Some(2.0));
    }

    #[test]
    fn literal_failure_messages_are_distinct() {
        let schema = literal("v", "A");
        assert!(schema.parse(&Value::text("A")).is_success());
        assert_eq!(schema.parse(&Value::text("B")).messages(), vec!["Value must equal A"]);
        assert_eq!(
            schema.parse(&Value::Boolean(true)).messages(),
            vec!["Invalid type: expected string, got boolean"]
        );
    }

    #[test]
    fn numeric_literal_matches_integer_input() {
        let schema = literal("answer", 42);
        assert!(schema.parse(&Value::Integer(42)).is_success());
        assert!(schema.parse(&Value::Float(42.0)).is_success());
        assert_eq!(schema.parse(&Value::Integer(41)).errors()[0].code, "literal");
    }

    #[test]
    fn boolean_literal() {
        let schema = literal("accepted", true);
        assert_eq!(schema.parse(&Value::Boolean(true)).into_value(), Some(true));
        assert_eq!(
            schema.parse(&Value::Boolean(false)).messages(),
            vec!["Value must equal true"]
        );
    }
}
