//! Numeric rules
//!
//! Bound and sign rules are generic over [`Numeric`], so the number schema
//! (`f64`) and the integer schema (`i64`) share them. Shape rules only make
//! sense for floats and check `f64`.

use std::fmt::Display;

use crate::foundation::ValidationError;

/// A number type the bound and sign rules can check.
pub trait Numeric: PartialOrd + Display + Copy + Send + Sync + 'static {
    const ZERO: Self;

    /// Whether `step` divides `self` with no remainder. A zero step never
    /// divides anything.
    fn is_multiple_of(self, step: Self) -> bool;
}

impl Numeric for f64 {
    const ZERO: Self = 0.0;

    fn is_multiple_of(self, step: Self) -> bool {
        self % step == 0.0
    }
}

impl Numeric for i64 {
    const ZERO: Self = 0;

    fn is_multiple_of(self, step: Self) -> bool {
        step != 0 && self.wrapping_rem(step) == 0
    }
}

// ============================================================================
// BOUNDS
// ============================================================================

crate::rule! {
    /// Strictly greater than `min`.
    #[derive(Copy, PartialEq)]
    pub GreaterThan<T: Numeric> { min: T } for T;
    rule(self, input) { *input > self.min }
    error(self, input) {
        ValidationError::new("greater_than", format!("Must be greater than {}", self.min))
            .with_param("min", self.min.to_string())
    }
}

crate::rule! {
    /// Greater than or equal to `min`.
    #[derive(Copy, PartialEq)]
    pub GreaterOrEqual<T: Numeric> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("greater_or_equal", format!("Must be greater than or equal to {}", self.min))
            .with_param("min", self.min.to_string())
    }
}

crate::rule! {
    /// Strictly less than `max`.
    #[derive(Copy, PartialEq)]
    pub LessThan<T: Numeric> { max: T } for T;
    rule(self, input) { *input < self.max }
    error(self, input) {
        ValidationError::new("less_than", format!("Must be smaller than {}", self.max))
            .with_param("max", self.max.to_string())
    }
}

crate::rule! {
    /// Less than or equal to `max`.
    #[derive(Copy, PartialEq)]
    pub LessOrEqual<T: Numeric> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("less_or_equal", format!("Must be smaller than or equal to {}", self.max))
            .with_param("max", self.max.to_string())
    }
}

crate::rule! {
    /// Exact multiple of `step`: the remainder must be exactly zero.
    ///
    /// A zero step never passes.
    #[derive(Copy, PartialEq)]
    pub MultipleOf<T: Numeric> { step: T } for T;
    rule(self, input) { input.is_multiple_of(self.step) }
    error(self, input) {
        ValidationError::new("multiple_of", format!("Must be a multiple of {}", self.step))
            .with_param("step", self.step.to_string())
    }
}

// ============================================================================
// SIGN
// ============================================================================

crate::rule! {
    /// `> 0`
    pub Positive<T: Numeric> for T;
    rule(input) { *input > T::ZERO }
    error(input) { ValidationError::new("positive", "Must be a positive number") }
}

crate::rule! {
    /// `>= 0`
    pub NonNegative<T: Numeric> for T;
    rule(input) { *input >= T::ZERO }
    error(input) { ValidationError::new("non_negative", "Must be a non-negative number") }
}

crate::rule! {
    /// `< 0`
    pub Negative<T: Numeric> for T;
    rule(input) { *input < T::ZERO }
    error(input) { ValidationError::new("negative", "Must be a negative number") }
}

crate::rule! {
    /// `<= 0`
    pub NonPositive<T: Numeric> for T;
    rule(input) { *input <= T::ZERO }
    error(input) { ValidationError::new("non_positive", "Must be a non-positive number") }
}

// ============================================================================
// SHAPE
// ============================================================================

crate::rule! {
    /// No fractional part.
    pub Integer for f64;
    rule(input) { input.floor() == *input }
    error(input) { ValidationError::new("integer", "Must be an integer") }
}

crate::rule! {
    /// Neither infinite nor NaN.
    pub Finite for f64;
    rule(input) { input.is_finite() }
    error(input) { ValidationError::new("finite", "Must be a finite number") }
}

crate::rule! {
    /// Within the range of a signed 64-bit integer.
    pub SafeInteger for f64;
    rule(input) { *input >= i64::MIN as f64 && *input <= i64::MAX as f64 }
    error(input) { ValidationError::new("safe", "Must be a safe integer") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case(5.0, false, true)]
    #[case(5.5, true, true)]
    #[case(4.9, false, false)]
    fn exclusive_and_inclusive_bounds(#[case] n: f64, #[case] gt: bool, #[case] gte: bool) {
        assert_eq!(GreaterThan::new(5.0).validate(&n).is_ok(), gt);
        assert_eq!(GreaterOrEqual::new(5.0).validate(&n).is_ok(), gte);
    }

    #[test]
    fn upper_bounds() {
        assert!(LessThan::new(1.0).validate(&1.0).is_err());
        assert!(LessOrEqual::new(1.0).validate(&1.0).is_ok());
        assert_eq!(
            LessThan::new(1.0).validate(&2.0).unwrap_err().message,
            "Must be smaller than 1"
        );
    }

    #[rstest]
    #[case(0.0, false, true, false, true)]
    #[case(2.0, true, true, false, false)]
    #[case(-2.0, false, false, true, true)]
    fn sign_rules(
        #[case] n: f64,
        #[case] positive: bool,
        #[case] non_negative: bool,
        #[case] negative: bool,
        #[case] non_positive: bool,
    ) {
        assert_eq!(Positive::<f64>::new().validate(&n).is_ok(), positive);
        assert_eq!(NonNegative::<f64>::new().validate(&n).is_ok(), non_negative);
        assert_eq!(Negative::<f64>::new().validate(&n).is_ok(), negative);
        assert_eq!(NonPositive::<f64>::new().validate(&n).is_ok(), non_positive);
    }

    #[test]
    fn integer_rejects_fractions() {
        assert!(Integer.validate(&3.0).is_ok());
        assert!(Integer.validate(&-3.0).is_ok());
        assert!(Integer.validate(&3.5).is_err());
    }

    #[rstest]
    #[case(10.0, 5.0, true)]
    #[case(10.0, 3.0, false)]
    #[case(0.75, 0.25, true)]
    #[case(1.0, 0.0, false)]
    fn multiple_of_is_exact(#[case] n: f64, #[case] step: f64, #[case] ok: bool) {
        assert_eq!(MultipleOf::new(step).validate(&n).is_ok(), ok);
    }

    #[rstest]
    #[case(10, 5, true)]
    #[case(10, 3, false)]
    #[case(1, 0, false)]
    #[case(i64::MIN, -1, true)]
    fn integer_multiple_of_never_panics(#[case] n: i64, #[case] step: i64, #[case] ok: bool) {
        assert_eq!(MultipleOf::new(step).validate(&n).is_ok(), ok);
    }

    #[test]
    fn bounds_and_signs_check_integers() {
        assert!(GreaterOrEqual::new(18_i64).validate(&18).is_ok());
        assert_eq!(
            LessThan::new(10_i64).validate(&10).unwrap_err().message,
            "Must be smaller than 10"
        );
        assert!(Positive::<i64>::new().validate(&0).is_err());
        assert!(NonPositive::<i64>::new().validate(&0).is_ok());
    }

    #[test]
    fn finite_and_safe() {
        assert!(Finite.validate(&f64::INFINITY).is_err());
        assert!(Finite.validate(&1e308).is_ok());
        assert!(SafeInteger.validate(&1e18).is_ok());
        assert!(SafeInteger.validate(&1e19).is_err());
        assert!(SafeInteger.validate(&-1e19).is_err());
    }
}
