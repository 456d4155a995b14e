//! Booleans.

use std::marker::PhantomData;

use crate::foundation::Narrowing;
use crate::schema::Schema;

/// Boolean schema. Has no built-in constraints; `.rule()` still works.
pub struct BooleanSchema<M = Narrowing> {
    core: Schema<bool>,
    mode: PhantomData<fn() -> M>,
}

super::moded_primitive!(BooleanSchema, bool, bool);
