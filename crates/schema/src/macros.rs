//! Macros for declaring rules with minimal boilerplate.
//!
//! ```rust
//! use conform_schema::rule;
//! use conform_schema::foundation::{Validate, ValidationError};
//!
//! // Unit rule (no fields)
//! rule! {
//!     pub Lowercase for str;
//!     rule(input) { input.chars().all(|c| !c.is_uppercase()) }
//!     error(input) { ValidationError::new("lowercase", "Must be lowercase") }
//! }
//!
//! // Rule with fields
//! rule! {
//!     #[derive(Copy, PartialEq)]
//!     pub AtMost { max: f64 } for f64;
//!     rule(self, input) { *input <= self.max }
//!     error(self, input) { ValidationError::new("at_most", format!("Must be at most {}", self.max)) }
//! }
//!
//! assert!(Lowercase.validate("abc").is_ok());
//! assert!(AtMost::new(3.0).validate(&4.0).is_err());
//! ```

/// Declares a rule: the struct, its constructor, and its `Validate` impl.
///
/// `#[derive(Debug, Clone)]` is always applied; add more via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit rule**: `pub Name for Input; rule(input) {..} error(input) {..}`
///
/// **Rule with fields** (auto `new` taking every field in order):
/// `pub Name { a: A, b: B } for Input; rule(self, input) {..} error(self, input) {..}`
///
/// **Custom constructor**: as above, followed by `new(args) { body }`.
///
/// **Generic rules**: `pub Name<T: Bound> for T; ..` (unit, built with
/// `Name::new()`) or `pub Name<T: Bound> { a: T } for T; ..` (fields).
#[macro_export]
macro_rules! rule {
    // ── Shared Validate impl for rules with fields ───────────────────────
    (@validate $name:ident, $input:ty, $self_:ident, $inp:ident, $rule:block, $einp:ident, $err:block) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Unit rule ────────────────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Rule with fields + custom new ────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::rule!(@validate $name, $input, $self_, $inp, $rule, $einp, $err);
    };

    // ── Rule with fields + auto new ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::rule!(@validate $name, $input, $self_, $inp, $rule, $einp, $err);
    };

    // ── Generic unit rule (phantom type parameter) ───────────────────────
    //
    // One type parameter; bounds must be plain identifiers.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*> for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name<$gen> {
            _input: ::std::marker::PhantomData<fn() -> $gen>,
        }

        impl<$gen> $name<$gen> {
            #[must_use]
            pub const fn new() -> Self {
                Self { _input: ::std::marker::PhantomData }
            }
        }

        impl<$gen> ::std::default::Default for $name<$gen> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Generic rule with fields + auto new ──────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}
