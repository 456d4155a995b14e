//! Prelude module for convenient imports.
//!
//! `use conform_schema::prelude::*;` brings in the schema factories, the
//! parse traits, result and error types, and the dynamic [`Value`].
//!
//! ```rust
//! use conform_schema::prelude::*;
//!
//! let age = coerce::number("age").int().gte(0.0);
//! assert_eq!(age.parse(&Value::text("7")).into_value(), Some(7.0));
//! ```

// ============================================================================
// VALUES
// ============================================================================

pub use conform_value::{Value, ValueKind};

// ============================================================================
// FOUNDATION: traits, errors, results
// ============================================================================

pub use crate::foundation::{
    Coercing, Narrowing, ParseResult, Rule, Validate, ValidateExt, ValidationError,
    ValidationErrors, predicate,
};
pub use crate::schema::{BoxedSchema, Parse, TypedParse};

// ============================================================================
// SCHEMAS
// ============================================================================

pub use crate::coerce;
pub use crate::composite::{
    ArraySchema, EnumSchema, LiteralSchema, ObjectSchema, OptionalSchema, array, enumeration,
    literal, object, optional,
};
pub use crate::primitives::{
    AnySchema, BooleanSchema, DateSchema, IntegerSchema, NeverSchema, NilSchema, NumberSchema,
    StringSchema, any, boolean, date, integer, never, nil, number, string,
};
