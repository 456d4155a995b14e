//! UTC timestamps with inclusive bounds.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};

use crate::foundation::Narrowing;
use crate::rules::{NotAfter, NotBefore};
use crate::schema::Schema;

/// Timestamp schema.
///
/// Narrowing accepts only `Value::Date`; use `string().date()` to check
/// text, or `coerce::date` to parse it.
pub struct DateSchema<M = Narrowing> {
    core: Schema<DateTime<Utc>>,
    mode: PhantomData<fn() -> M>,
}

super::moded_primitive!(DateSchema, DateTime<Utc>, DateTime<Utc>);

impl<M> DateSchema<M> {
    /// Not before `earliest`; the boundary itself passes.
    pub fn min(self, earliest: DateTime<Utc>) -> Self {
        self.rule(NotBefore::new(earliest))
    }

    /// Not after `latest`; the boundary itself passes.
    pub fn max(self, latest: DateTime<Utc>) -> Self {
        self.rule(NotAfter::new(latest))
    }
}
