//! Core building blocks
//!
//! - **Rules**: [`Validate`], [`ValidateExt`], [`predicate`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//! - **Results**: [`ParseResult`]
//! - **Entry modes**: [`Entry`], [`Narrowing`], [`Coercing`]
//!
//! Rules are generic over their input type and know nothing about dynamic
//! values. The entry mode of a schema is what turns a [`conform_value::Value`]
//! into the typed input its rules check.
//!
//! ```rust
//! use conform_schema::foundation::{Validate, ValidationError};
//! use conform_schema::rules::MinLength;
//!
//! let rule = MinLength::new(5);
//! assert!(rule.validate("hello").is_ok());
//! assert_eq!(rule.validate("hi").unwrap_err().code, "min_length");
//! ```

pub mod entry;
pub mod error;
pub mod result;
pub mod traits;

pub use entry::{Coercing, Entry, Narrowing};
pub use error::{ValidationError, ValidationErrors};
pub use result::ParseResult;
pub use traits::{Predicate, Rule, Validate, ValidateExt, predicate};
