//! Date bound rules

use chrono::{DateTime, Utc};

use crate::foundation::ValidationError;

crate::rule! {
    /// Not before `min`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub NotBefore { min: DateTime<Utc> } for DateTime<Utc>;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min_date", format!("Must be later than or equal to {}", self.min.to_rfc3339()))
            .with_param("min", self.min.to_rfc3339())
    }
}

crate::rule! {
    /// Not after `max`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub NotAfter { max: DateTime<Utc> } for DateTime<Utc>;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max_date", format!("Must be earlier than or equal to {}", self.max.to_rfc3339()))
            .with_param("max", self.max.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(NotBefore::new(day(10)).validate(&day(10)).is_ok());
        assert!(NotBefore::new(day(10)).validate(&day(9)).is_err());
        assert!(NotAfter::new(day(10)).validate(&day(10)).is_ok());
        assert!(NotAfter::new(day(10)).validate(&day(11)).is_err());
    }

    #[test]
    fn error_mentions_bound() {
        let err = NotBefore::new(day(10)).validate(&day(1)).unwrap_err();
        assert_eq!(
            err.message,
            "Must be later than or equal to 2024-01-10T00:00:00+00:00"
        );
    }
}
