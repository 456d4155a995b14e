//! Built-in rules
//!
//! Schema builders append these; they can also be used on their own or
//! handed to a schema's `.rule(..)`.
//!
//! - **String**: [`MinLength`], [`MaxLength`], [`ExactLength`], [`Includes`],
//!   [`StartsWith`], [`EndsWith`], [`MatchesRegex`]
//! - **Formats**: [`Email`], [`Url`], [`Uuid`], [`Ip`], [`Cidr`], [`IsoDate`],
//!   [`IsoTime`], [`DateTimeFormat`], [`NanoId`], [`Cuid`], [`Cuid2`], [`Ulid`]
//! - **Number**: [`GreaterThan`], [`GreaterOrEqual`], [`LessThan`],
//!   [`LessOrEqual`], [`Positive`], [`NonNegative`], [`Negative`],
//!   [`NonPositive`], [`Integer`], [`MultipleOf`], [`Finite`], [`SafeInteger`]
//!   (bounds and signs are generic over [`Numeric`])
//! - **Date**: [`NotBefore`], [`NotAfter`]
//! - **Array size**: [`NotEmpty`], [`MinSize`], [`MaxSize`], [`ExactSize`]

pub mod date;
pub mod format;
pub mod message;
pub mod number;
pub mod size;
pub mod string;

pub use date::{NotAfter, NotBefore};
pub use format::{
    Cidr, Cuid, Cuid2, DateTimeFormat, Email, Ip, IsoDate, IsoTime, NanoId, Ulid, Url, Uuid,
};
pub use message::WithMessage;
pub use number::{
    Finite, GreaterOrEqual, GreaterThan, Integer, LessOrEqual, LessThan, MultipleOf, Negative,
    NonNegative, NonPositive, Numeric, Positive, SafeInteger,
};
pub use size::{ExactSize, MaxSize, MinSize, NotEmpty};
pub use string::{EndsWith, ExactLength, Includes, MatchesRegex, MaxLength, MinLength, StartsWith};
