//! Primitive schemas
//!
//! [`StringSchema`], [`NumberSchema`], [`IntegerSchema`], [`BooleanSchema`]
//! and [`DateSchema`] are generic over their entry mode. The factories here build the
//! narrowing variants; [`crate::coerce`] builds the coercing ones. Both
//! share every constraint builder.
//!
//! [`NilSchema`], [`AnySchema`] and [`NeverSchema`] have no rules.

/// Generates what every moded primitive has in common: the constructor,
/// `.message()`, `.rule()`, and the `Parse`/`TypedParse` impls.
macro_rules! moded_primitive {
    ($schema:ident, $input:ty, $output:ty) => {
        impl<M> $schema<M> {
            /// An unconstrained schema labelled `path`.
            pub fn new(path: impl Into<String>) -> Self {
                Self {
                    core: $crate::schema::Schema::new(path),
                    mode: ::std::marker::PhantomData,
                }
            }

            /// Replaces the message of the most recently added constraint.
            pub fn message(mut self, message: impl Into<String>) -> Self {
                self.core.override_last_message(message);
                self
            }

            /// Appends a custom rule.
            pub fn rule<V>(mut self, rule: V) -> Self
            where
                V: $crate::foundation::Validate<Input = $input> + Send + Sync + 'static,
            {
                self.core.add_rule(rule);
                self
            }

            /// The underlying rule list.
            pub fn core(&self) -> &$crate::schema::Schema<$input> {
                &self.core
            }
        }

        impl<M> ::std::clone::Clone for $schema<M> {
            fn clone(&self) -> Self {
                Self {
                    core: self.core.clone(),
                    mode: ::std::marker::PhantomData,
                }
            }
        }

        impl<M> ::std::fmt::Debug for $schema<M> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($schema))
                    .field("mode", &::std::any::type_name::<M>())
                    .field("core", &self.core)
                    .finish()
            }
        }

        impl<M: $crate::foundation::Entry<$output>> $crate::schema::Parse for $schema<M> {
            type Output = $output;

            fn parse(
                &self,
                value: &::conform_value::Value,
            ) -> $crate::foundation::ParseResult<$output> {
                self.core.enter::<M, $output>(value)
            }

            fn path(&self) -> &str {
                self.core.path()
            }
        }

        impl<M: $crate::foundation::Entry<$output>> $crate::schema::TypedParse for $schema<M> {
            fn parse_typed(&self, value: $output) -> $crate::foundation::ParseResult<$output> {
                self.core.run(value)
            }
        }
    };
}

pub(crate) use moded_primitive;

mod boolean;
mod date;
mod integer;
mod number;
mod special;
mod string;

pub use boolean::BooleanSchema;
pub use date::DateSchema;
pub use integer::IntegerSchema;
pub use number::NumberSchema;
pub use special::{AnySchema, NeverSchema, NilSchema};
pub use string::StringSchema;

/// A schema accepting strings only.
pub fn string(path: impl Into<String>) -> StringSchema {
    StringSchema::new(path)
}

/// A schema accepting integers and floats, widened to `f64`.
pub fn number(path: impl Into<String>) -> NumberSchema {
    NumberSchema::new(path)
}

/// A schema accepting integer values only, as `i64`.
pub fn integer(path: impl Into<String>) -> IntegerSchema {
    IntegerSchema::new(path)
}

/// A schema accepting booleans only.
pub fn boolean(path: impl Into<String>) -> BooleanSchema {
    BooleanSchema::new(path)
}

/// A schema accepting timestamps only.
pub fn date(path: impl Into<String>) -> DateSchema {
    DateSchema::new(path)
}

/// A schema accepting only `Null`.
pub fn nil(path: impl Into<String>) -> NilSchema {
    NilSchema::new(path)
}

/// A schema accepting everything except `Null`.
pub fn any(path: impl Into<String>) -> AnySchema {
    AnySchema::new(path)
}

/// A schema accepting nothing.
pub fn never(path: impl Into<String>) -> NeverSchema {
    NeverSchema::new(path)
}
