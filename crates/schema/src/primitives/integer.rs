//! Whole numbers as `i64`.

use std::marker::PhantomData;

use crate::foundation::Narrowing;
use crate::rules::{
    GreaterOrEqual, GreaterThan, LessOrEqual, LessThan, MultipleOf, Negative, NonNegative,
    NonPositive, Positive,
};
use crate::schema::Schema;

/// Integer schema over `i64`.
///
/// Narrowing accepts `Value::Integer` only; a float with no fractional part
/// is still a float. Use [`crate::coerce::integer`] to truncate floats.
pub struct IntegerSchema<M = Narrowing> {
    core: Schema<i64>,
    mode: PhantomData<fn() -> M>,
}

super::moded_primitive!(IntegerSchema, i64, i64);

impl<M> IntegerSchema<M> {
    /// `> n`
    pub fn gt(self, n: i64) -> Self {
        self.rule(GreaterThan::new(n))
    }

    /// `>= n`
    pub fn gte(self, n: i64) -> Self {
        self.rule(GreaterOrEqual::new(n))
    }

    /// `< n`
    pub fn lt(self, n: i64) -> Self {
        self.rule(LessThan::new(n))
    }

    /// `<= n`
    pub fn lte(self, n: i64) -> Self {
        self.rule(LessOrEqual::new(n))
    }

    /// `> 0`
    pub fn positive(self) -> Self {
        self.rule(Positive::<i64>::new())
    }

    /// `>= 0`
    pub fn nonnegative(self) -> Self {
        self.rule(NonNegative::<i64>::new())
    }

    /// `< 0`
    pub fn negative(self) -> Self {
        self.rule(Negative::<i64>::new())
    }

    /// `<= 0`
    pub fn nonpositive(self) -> Self {
        self.rule(NonPositive::<i64>::new())
    }

    /// Divisible by `step`. A zero step always fails.
    pub fn multiple_of(self, step: i64) -> Self {
        self.rule(MultipleOf::new(step))
    }
}
