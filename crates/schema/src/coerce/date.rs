//! Coercion to UTC timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use conform_value::{Value, zero_timestamp};

use super::{CoercionError, reject};
use crate::foundation::{Coercing, Entry, ValidationError};

// A layout pairs a chrono format with its exact shape: `9` stands for one
// ASCII digit, anything else must match literally. chrono alone would also
// take unpadded fields like "1/2/2006".
#[derive(Clone, Copy)]
enum Layout {
    Date(&'static str, &'static str),
    DateTime(&'static str, &'static str),
}

impl Layout {
    fn parse(self, s: &str) -> Option<DateTime<Utc>> {
        let (Self::Date(_, shape) | Self::DateTime(_, shape)) = self;
        if !has_shape(s, shape) {
            return None;
        }
        match self {
            Self::Date(fmt, _) => NaiveDate::parse_from_str(s, fmt)
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN).and_utc()),
            Self::DateTime(fmt, _) => NaiveDateTime::parse_from_str(s, fmt)
                .ok()
                .map(|d| d.and_utc()),
        }
    }
}

fn has_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes()
            .zip(shape.bytes())
            .all(|(c, p)| if p == b'9' { c.is_ascii_digit() } else { c == p })
}

// Tried in order; the first match wins, so "01/02/2006" is January 2.
const LAYOUTS: [Layout; 4] = [
    Layout::Date("%Y-%m-%d", "9999-99-99"),
    Layout::Date("%m/%d/%Y", "99/99/9999"),
    Layout::DateTime("%Y-%m-%d %H:%M:%S", "9999-99-99 99:99:99"),
    Layout::DateTime("%d/%m/%Y %H:%M:%S", "99/99/9999 99:99:99"),
];

/// Converts to a UTC timestamp.
///
/// Text is tried as `YYYY-MM-DD`, `MM/DD/YYYY`, `YYYY-MM-DD HH:MM:SS`,
/// `DD/MM/YYYY HH:MM:SS` and finally RFC 3339. Every field must be
/// zero-padded to its full width. Layouts without an offset
/// are read as UTC. `Null` becomes the Unix epoch.
pub fn to_date(value: &Value) -> Result<DateTime<Utc>, CoercionError> {
    match value {
        Value::Date(d) => Ok(*d),
        Value::Text(s) => parse_text(s).ok_or_else(|| CoercionError::Unparseable {
            input: s.clone(),
            target: "date",
        }),
        Value::Null => Ok(zero_timestamp()),
        _ => Err(CoercionError::unsupported(value, "date")),
    }
}

fn parse_text(s: &str) -> Option<DateTime<Utc>> {
    LAYOUTS
        .iter()
        .find_map(|layout| layout.parse(s))
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|d| d.with_timezone(&Utc))
        })
}

impl Entry<DateTime<Utc>> for Coercing {
    fn enter(value: &Value) -> Result<DateTime<Utc>, ValidationError> {
        to_date(value).map_err(reject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce;
    use crate::schema::Parse;
    use chrono::TimeZone;
    use rstest::rstest;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[rstest]
    #[case("2006-01-02", utc(2006, 1, 2, 0, 0, 0))]
    #[case("01/02/2006", utc(2006, 1, 2, 0, 0, 0))]
    #[case("2006-01-02 15:04:05", utc(2006, 1, 2, 15, 4, 5))]
    #[case("02/01/2006 15:04:05", utc(2006, 1, 2, 15, 4, 5))]
    #[case("2006-01-02T15:04:05+02:00", utc(2006, 1, 2, 13, 4, 5))]
    fn layouts(#[case] input: &str, #[case] expected: DateTime<Utc>) {
        assert_eq!(to_date(&Value::text(input)), Ok(expected));
    }

    #[test]
    fn null_is_epoch() {
        assert_eq!(to_date(&Value::Null), Ok(zero_timestamp()));
    }

    #[rstest]
    #[case(Value::text("yesterday"), "coerce_unparseable")]
    #[case(Value::text("13/13/2006"), "coerce_unparseable")]
    #[case(Value::text("1/2/2006"), "coerce_unparseable")]
    #[case(Value::text("2006-1-2"), "coerce_unparseable")]
    #[case(Value::text("2006-01-02 5:04:05"), "coerce_unparseable")]
    #[case(Value::text("2/1/2006 15:04:05"), "coerce_unparseable")]
    #[case(Value::Integer(0), "coerce_unsupported")]
    #[case(Value::Boolean(true), "coerce_unsupported")]
    fn failures(#[case] input: Value, #[case] code: &str) {
        assert_eq!(to_date(&input).unwrap_err().code(), code);
    }

    #[test]
    fn bounds_apply_after_parsing() {
        let schema = coerce::date("d").min(utc(2000, 1, 1, 0, 0, 0));
        assert!(schema.parse(&Value::text("2006-01-02")).is_success());
        let result = schema.parse(&Value::Null);
        assert_eq!(result.errors()[0].code, "min_date");
    }
}
