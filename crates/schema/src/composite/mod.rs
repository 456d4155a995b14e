//! Composite schemas
//!
//! Composites delegate to child schemas and annotate what comes back:
//! object errors are prefixed with the key, array errors with the index.
//! Every child failure is reported, not just the first.

mod array;
mod choice;
mod object;
mod optional;

pub use array::ArraySchema;
pub use choice::{Choice, EnumSchema, LiteralSchema};
pub use object::ObjectSchema;
pub use optional::OptionalSchema;

/// An object schema assembling a `T`; add keys with
/// [`ObjectSchema::field`].
pub fn object<T: Default>(path: impl Into<String>) -> ObjectSchema<T> {
    ObjectSchema::new(path)
}

/// An array whose elements all satisfy `element`.
pub fn array<S>(path: impl Into<String>, element: S) -> ArraySchema<S> {
    ArraySchema::new(path, element)
}

/// Wraps `inner` so that `Null` (or an absent key) is accepted as `None`.
pub const fn optional<S>(inner: S) -> OptionalSchema<S> {
    OptionalSchema::new(inner)
}

/// Accepts any of `members`.
pub fn enumeration<C, I>(path: impl Into<String>, members: I) -> EnumSchema<C::Output>
where
    C: Choice,
    I: IntoIterator<Item = C>,
{
    EnumSchema::new(path, members)
}

/// Accepts exactly `expected`.
pub fn literal<C: Choice>(path: impl Into<String>, expected: C) -> LiteralSchema<C::Output> {
    LiteralSchema::new(path, expected)
}
