//! Unified Value enum
//!
//! This is the central type handed to every schema's `parse`.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{ValueError, ValueResult};
use crate::kind::ValueKind;

/// Ordered sequence of values.
pub type Array = Vec<Value>;

/// String-keyed map of values; keys keep their insertion order.
pub type Object = IndexMap<String, Value>;

/// Unified value type that can represent any input a schema may receive.
///
/// Numbers are split into `Integer` and `Float` so that literal and enum
/// schemas can tell `1` from `1.0`; the number schema accepts both.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Absence of a value
    #[default]
    Null,

    /// Boolean value
    Boolean(bool),

    /// Integer number (i64)
    Integer(i64),

    /// Floating point number (f64)
    Float(f64),

    /// UTF-8 text string
    Text(String),

    /// Structured timestamp (UTC)
    Date(DateTime<Utc>),

    /// Array of values
    Array(Array),

    /// Object (key-value map)
    Object(Object),
}

/// The timestamp that absence-of-value coerces to: the Unix epoch.
pub const fn zero_timestamp() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a text value from String or &str
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    /// Create an array value from anything convertible into values
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Create an object value from key/value pairs
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Date(_) => ValueKind::Date,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Check if this is null
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is an integer or a float
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    // ==================== Borrowing accessors ====================

    /// Returns the boolean if this is `Boolean`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is `Integer`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns any numeric kind widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the text if this is `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the timestamp if this is `Date`.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the elements if this is `Array`.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the map if this is `Object`.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a key of an object value.
    pub fn get(&self, key: &str) -> ValueResult<&Value> {
        let map = self
            .as_object()
            .ok_or_else(|| ValueError::type_mismatch("object", self.kind()))?;
        map.get(key).ok_or_else(|| ValueError::KeyNotFound {
            key: key.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_null() {
        assert!(Value::default().is_null());
    }

    #[test]
    fn integer_widens_to_f64_but_not_back() {
        let v = Value::Integer(3);
        assert_eq!(v.as_f64(), Some(3.0));
        assert_eq!(Value::Float(3.0).as_i64(), None);
    }

    #[test]
    fn integer_and_float_are_distinct() {
        assert_ne!(Value::Integer(1), Value::Float(1.0));
    }

    #[test]
    fn object_preserves_insertion_order() {
        let v = Value::object([("b", 1), ("a", 2)]);
        let keys: Vec<_> = v.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn get_reports_missing_key_and_wrong_kind() {
        let v = Value::object([("name", "Ann")]);
        assert_eq!(v.get("name"), Ok(&Value::text("Ann")));
        assert_eq!(
            v.get("age"),
            Err(ValueError::KeyNotFound {
                key: "age".to_string()
            })
        );
        assert_eq!(
            Value::Integer(1).get("x"),
            Err(ValueError::type_mismatch("object", ValueKind::Integer))
        );
    }

    #[test]
    fn zero_timestamp_is_epoch() {
        assert_eq!(zero_timestamp().timestamp(), 0);
    }
}
