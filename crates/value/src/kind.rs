//! Value kinds.
//!
//! `ValueKind` is the lightweight classification of a [`Value`](crate::Value).
//! Schemas use it to describe what they expected and what they received.

use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Serializer};

/// Represents the kind of a [`Value`](crate::Value).
///
/// Serializes as its [`name`](Self::name), the same word error messages use.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    Text,
    Date,
    Array,
    Object,
}

impl ValueKind {
    /// Get all available kinds
    pub const fn all() -> [Self; 8] {
        [
            Self::Null,
            Self::Boolean,
            Self::Integer,
            Self::Float,
            Self::Text,
            Self::Date,
            Self::Array,
            Self::Object,
        ]
    }

    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Check if this kind is a collection
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }

    /// Check if this kind is a scalar that has a canonical text form.
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Boolean | Self::Integer | Self::Float | Self::Text)
    }

    /// Lowercase name used in error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "string",
            Self::Date => "date",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl Serialize for ValueKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
