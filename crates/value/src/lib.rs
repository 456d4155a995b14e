//! # conform-value
//!
//! The dynamic value model consumed by `conform-schema`.
//!
//! A [`Value`] is a tagged union over every input kind the schema engine
//! understands. Schemas narrow a `Value` to a concrete Rust type by matching on
//! its variant, so no runtime reflection is ever needed.
//!
//! ```rust
//! use conform_value::{Value, ValueKind};
//!
//! let v = Value::from("hello");
//! assert_eq!(v.kind(), ValueKind::Text);
//! assert_eq!(v.as_str(), Some("hello"));
//! ```

mod convert;
mod display;
pub mod error;
pub mod kind;
pub mod value;

pub use error::ValueError;
pub use kind::ValueKind;
pub use value::{Array, Object, Value, zero_timestamp};
