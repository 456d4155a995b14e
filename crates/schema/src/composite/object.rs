//! Typed records built from keyed fields.
//!
//! Each field pairs a key, a schema and a setter that writes the parsed
//! value into the record. Errors from nested schemas carry the key in
//! their field path.

use std::fmt;
use std::sync::Arc;

use conform_value::Value;
use tracing::debug;

use crate::foundation::{ParseResult, ValidationError};
use crate::schema::Parse;

type Apply<T> = dyn Fn(&Value, &mut T) -> Vec<ValidationError> + Send + Sync;

struct Field<T> {
    name: String,
    optional: bool,
    apply: Arc<Apply<T>>,
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            optional: self.optional,
            apply: Arc::clone(&self.apply),
        }
    }
}

/// Object schema that assembles a typed record `T`.
///
/// Each field pairs a key with a child schema and a setter that stores the
/// child's output into the record. The record starts as `T::default()`, so
/// an optional field that is absent keeps its default.
///
/// ```rust
/// use conform_schema::prelude::*;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct User {
///     name: String,
///     age: Option<f64>,
/// }
///
/// let user = object::<User>("user")
///     .field("name", string("name").min(1), |u, v| u.name = v)
///     .field("age", optional(number("age").int()), |u, v| u.age = v);
///
/// let parsed = user.parse(&Value::object([("name", "Ann")]));
/// assert_eq!(parsed.into_value(), Some(User { name: "Ann".into(), age: None }));
///
/// let missing = user.parse(&Value::object(Vec::<(String, Value)>::new()));
/// assert_eq!(missing.messages(), vec!["missing required key: name"]);
/// ```
pub struct ObjectSchema<T> {
    path: String,
    fields: Vec<Field<T>>,
    strict: bool,
}

impl<T> Clone for ObjectSchema<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            fields: self.fields.clone(),
            strict: self.strict,
        }
    }
}

impl<T> fmt::Debug for ObjectSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectSchema")
            .field("path", &self.path)
            .field(
                "fields",
                &self.fields.iter().map(|fd| fd.name.as_str()).collect::<Vec<_>>(),
            )
            .field("strict", &self.strict)
            .finish()
    }
}

impl<T: Default> ObjectSchema<T> {
    /// An object schema with no fields.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            fields: Vec::new(),
            strict: false,
        }
    }

    /// Declares the key `name`.
    ///
    /// The key is required unless `schema` accepts a missing value (as
    /// [`optional`](crate::composite::optional) does). Declaring a key again
    /// replaces the earlier declaration in place.
    pub fn field<S, F>(mut self, name: impl Into<String>, schema: S, set: F) -> Self
    where
        T: 'static,
        S: Parse + Send + Sync + 'static,
        F: Fn(&mut T, S::Output) + Send + Sync + 'static,
    {
        let name = name.into();
        let optional = schema.accepts_missing();
        let apply = move |value: &Value, record: &mut T| {
            let (parsed, errors) = schema.parse(value).into_parts();
            match parsed {
                Some(output) if errors.is_empty() => {
                    set(record, output);
                    Vec::new()
                }
                _ => errors,
            }
        };
        let field = Field {
            name,
            optional,
            apply: Arc::new(apply),
        };

        match self.fields.iter().position(|f| f.name == field.name) {
            Some(i) => self.fields[i] = field,
            None => self.fields.push(field),
        }
        self
    }

    /// Rejects keys that no field declares.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Declared keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

impl<T: Default> Parse for ObjectSchema<T> {
    type Output = T;

    fn parse(&self, value: &Value) -> ParseResult<T> {
        let Some(map) = value.as_object() else {
            debug!(path = %self.path, actual = %value.kind(), "object expected");
            return ParseResult::failure(
                self.path.as_str(),
                ValidationError::type_mismatch("Must be an object", "object", value.kind()),
            );
        };

        let mut record = T::default();
        let mut errors = Vec::new();

        for field in &self.fields {
            match map.get(&field.name) {
                None if field.optional => {}
                None => errors.push(ValidationError::missing_key(&field.name)),
                Some(child) => errors.extend(
                    (field.apply)(child, &mut record)
                        .into_iter()
                        .map(|e| e.in_key(&field.name)),
                ),
            }
        }

        if self.strict {
            errors.extend(
                map.keys()
                    .filter(|key| !self.fields.iter().any(|f| &f.name == *key))
                    .map(|key| ValidationError::unrecognized_key(key)),
            );
        }

        if errors.is_empty() {
            ParseResult::success(self.path.as_str(), record)
        } else {
            debug!(path = %self.path, failed = errors.len(), "object rejected");
            ParseResult::failures(self.path.as_str(), errors)
        }
    }

    fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::{array, optional};
    use crate::primitives::{number, string};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq)]
    struct Address {
        street: String,
        zip: String,
    }

    #[derive(Debug, Default, PartialEq)]
    struct Person {
        name: String,
        age: Option<f64>,
        address: Address,
        tags: Vec<String>,
    }

    fn address() -> ObjectSchema<Address> {
        ObjectSchema::new("address")
            .field("street", string("street"), |a: &mut Address, v| a.street = v)
            .field("zipCode", string("zipCode").length(5), |a: &mut Address, v| a.zip = v)
    }

    fn person() -> ObjectSchema<Person> {
        ObjectSchema::new("person")
            .field("name", string("name").min(1), |p: &mut Person, v| p.name = v)
            .field("age", optional(number("age").int()), |p: &mut Person, v| p.age = v)
            .field("address", address(), |p: &mut Person, v| p.address = v)
            .field("tags", array("tags", string("tag")), |p: &mut Person, v| p.tags = v)
    }

    #[test]
    fn assembles_record() {
        let input = Value::from(json!({
            "name": "Ann",
            "age": 30,
            "address": {"street": "Main", "zipCode": "12345"},
            "tags": ["a", "b"],
            "extra": true
        }));
        let person = person().parse(&input).into_value().unwrap();
        assert_eq!(
            person,
            Person {
                name: "Ann".to_string(),
                age: Some(30.0),
                address: Address {
                    street: "Main".to_string(),
                    zip: "12345".to_string(),
                },
                tags: vec!["a".to_string(), "b".to_string()],
            }
        );
    }

    #[test]
    fn nested_errors_carry_their_position() {
        let input = Value::from(json!({
            "name": "Ann",
            "address": {"street": "Main", "zipCode": "123"},
            "tags": ["a", 2]
        }));
        let result = person().parse(&input);
        let fields: Vec<_> = result
            .errors()
            .iter()
            .map(|e| e.field.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(fields, vec!["address.zipCode", "tags[1]"]);
        assert_eq!(
            result.messages(),
            vec![
                "error in key address: error in key zipCode: Must be exactly 5 characters long",
                "error in key tags: element at index 1: Must be a string",
            ]
        );
    }

    #[test]
    fn sibling_failures_are_all_reported() {
        let input = Value::from(json!({"name": "", "age": 1.5}));
        let result = person().parse(&input);
        assert_eq!(
            result.messages(),
            vec![
                "error in key name: Must be at least 1 characters long",
                "error in key age: Must be an integer",
                "missing required key: address",
                "missing required key: tags",
            ]
        );
    }

    #[test]
    fn null_satisfies_optional_field() {
        let input = Value::from(json!({
            "name": "Ann",
            "age": null,
            "address": {"street": "Main", "zipCode": "12345"},
            "tags": []
        }));
        let person = person().parse(&input).into_value().unwrap();
        assert_eq!(person.age, None);
    }

    #[test]
    fn non_objects_are_rejected() {
        let result = person().parse(&Value::array(["Ann"]));
        assert_eq!(result.messages(), vec!["Must be an object"]);
    }

    #[test]
    fn strict_mode_reports_unknown_keys() {
        let input = Value::from(json!({"street": "Main", "zipCode": "12345", "city": "X"}));
        assert!(address().parse(&input).is_success());

        let result = address().strict().parse(&input);
        assert_eq!(result.messages(), vec!["unrecognized key: city"]);
    }

    #[test]
    fn redeclared_field_replaces_previous() {
        let schema = address().field("zipCode", string("zipCode"), |a: &mut Address, v| a.zip = v);
        assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["street", "zipCode"]);
        let input = Value::from(json!({"street": "Main", "zipCode": "1"}));
        assert!(schema.parse(&input).is_success());
    }
}
