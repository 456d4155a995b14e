//! Numbers as `f64`, with bound, sign and shape rules.

use std::marker::PhantomData;

use crate::foundation::Narrowing;
use crate::rules::{
    Finite, GreaterOrEqual, GreaterThan, Integer, LessOrEqual, LessThan, MultipleOf, Negative,
    NonNegative, NonPositive, Positive, SafeInteger,
};
use crate::schema::Schema;

/// Number schema over `f64`.
///
/// Integer input is widened; NaN never gets past narrowing.
pub struct NumberSchema<M = Narrowing> {
    core: Schema<f64>,
    mode: PhantomData<fn() -> M>,
}

super::moded_primitive!(NumberSchema, f64, f64);

impl<M> NumberSchema<M> {
    /// `> n`
    pub fn gt(self, n: f64) -> Self {
        self.rule(GreaterThan::new(n))
    }

    /// `>= n`
    pub fn gte(self, n: f64) -> Self {
        self.rule(GreaterOrEqual::new(n))
    }

    /// `< n`
    pub fn lt(self, n: f64) -> Self {
        self.rule(LessThan::new(n))
    }

    /// `<= n`
    pub fn lte(self, n: f64) -> Self {
        self.rule(LessOrEqual::new(n))
    }

    /// No fractional part.
    pub fn int(self) -> Self {
        self.rule(Integer)
    }

    /// `> 0`
    pub fn positive(self) -> Self {
        self.rule(Positive::<f64>::new())
    }

    /// `>= 0`
    pub fn nonnegative(self) -> Self {
        self.rule(NonNegative::<f64>::new())
    }

    /// `< 0`
    pub fn negative(self) -> Self {
        self.rule(Negative::<f64>::new())
    }

    /// `<= 0`
    pub fn nonpositive(self) -> Self {
        self.rule(NonPositive::<f64>::new())
    }

    /// Exact remainder check: `0.3` is not a multiple of `0.1` in binary
    /// floating point, so it fails.
    pub fn multiple_of(self, step: f64) -> Self {
        self.rule(MultipleOf::new(step))
    }

    /// Neither infinite nor NaN.
    pub fn finite(self) -> Self {
        self.rule(Finite)
    }

    /// Within the `i64` range.
    pub fn safe(self) -> Self {
        self.rule(SafeInteger)
    }
}
