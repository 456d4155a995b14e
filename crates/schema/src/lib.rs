//! # conform-schema
//!
//! Declarative schemas that check a dynamic [`Value`](conform_value::Value)
//! against a shape and hand back a typed value together with every error
//! found.
//!
//! ## Quick Start
//!
//! ```rust
//! use conform_schema::prelude::*;
//!
//! let email = string("email").min(5).email();
//! let result = email.parse(&Value::text("ab"));
//! assert_eq!(result.errors().len(), 2);
//!
//! let scores = array("scores", number("score").positive());
//! let result = scores.parse(&Value::array([1, -2, 3]));
//! assert_eq!(result.messages(), vec!["element at index 1: Must be a positive number"]);
//! ```
//!
//! ## Building blocks
//!
//! - **Primitives** ([`primitives`]): `string`, `number`, `boolean`, `date`,
//!   `nil`, `any`, `never`. They accept only values of their own kind.
//! - **Coercion** ([`coerce`]): `string`, `number`, `boolean`, `date` that
//!   convert the input before the rules run.
//! - **Composites** ([`composite`]): `object`, `array`, `optional`,
//!   `enumeration`, `literal`.
//! - **Rules** ([`rules`]): the constraints behind every builder method.
//!   Write your own with [`rule!`] or [`predicate`](foundation::predicate).
//!
//! Parsing never panics on bad input. Failures come back as data in a
//! [`ParseResult`](foundation::ParseResult).

// ValidationError is returned by every rule; boxing it buys nothing here.
#![allow(clippy::result_large_err)]

pub use conform_value;

pub mod coerce;
pub mod composite;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod primitives;
pub mod rules;
pub mod schema;
