//! Value error types.

use thiserror::Error;

use crate::ValueKind;

/// Errors raised when extracting a concrete type out of a [`Value`](crate::Value).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Type mismatch between expected and actual kinds
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: ValueKind,
    },

    /// Object key not found
    #[error("Key not found: '{key}'")]
    KeyNotFound { key: String },
}

impl ValueError {
    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: &'static str, actual: ValueKind) -> Self {
        Self::TypeMismatch { expected, actual }
    }
}

/// Result alias for value operations.
pub type ValueResult<T> = Result<T, ValueError>;
