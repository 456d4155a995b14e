//! Well-known string formats
//!
//! Identifier formats use fixed regular expressions. Addresses, URLs and
//! calendar values go through the parsers of `std`, `url` and `chrono`.

use std::net::IpAddr;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime};
use regex::Regex;

use crate::foundation::ValidationError;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

static NANOID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{21}$").unwrap());

static CUID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^c[a-z0-9]{24}$").unwrap());

static CUID2_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*$").unwrap());

// Crockford base32: no I, L, O or U.
static ULID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-HJKMNP-TV-Z]{26}$").unwrap());

static DATETIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.(?P<fraction>[0-9]+))?(?P<zone>Z|[+-][0-9]{2}:[0-9]{2})$",
    )
    .unwrap()
});

// ============================================================================
// CONTACT / WEB
// ============================================================================

crate::rule! {
    /// Email address of the form `local@domain.tld`.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("email", "Must be a valid email address") }
}

crate::rule! {
    /// Absolute URL with a scheme.
    pub Url for str;
    rule(input) { url::Url::parse(input).is_ok() }
    error(input) { ValidationError::invalid_format("url", "Must be a valid URL") }
}

// ============================================================================
// NETWORK
// ============================================================================

crate::rule! {
    /// IPv4 or IPv6 address.
    pub Ip for str;
    rule(input) { input.parse::<IpAddr>().is_ok() }
    error(input) { ValidationError::invalid_format("ip", "Must be a valid IP address") }
}

crate::rule! {
    /// `address/prefix` with a prefix no longer than the address family allows.
    pub Cidr for str;
    rule(input) { is_cidr(input) }
    error(input) { ValidationError::invalid_format("cidr", "Must be of valid CIDR notation") }
}

fn is_cidr(input: &str) -> bool {
    let Some((addr, prefix)) = input.split_once('/') else {
        return false;
    };
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let Ok(bits) = prefix.parse::<u8>() else {
        return false;
    };
    match addr.parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => bits <= 32,
        Ok(IpAddr::V6(_)) => bits <= 128,
        Err(_) => false,
    }
}

// ============================================================================
// CALENDAR
// ============================================================================

crate::rule! {
    /// Calendar date as `YYYY-MM-DD`.
    pub IsoDate for str;
    rule(input) { NaiveDate::parse_from_str(input, "%Y-%m-%d").is_ok() }
    error(input) {
        ValidationError::invalid_format("date", "Must follow a valid date format (YYYY-MM-DD)")
    }
}

crate::rule! {
    /// Time of day as `HH:MM:SS`.
    pub IsoTime for str;
    rule(input) { NaiveTime::parse_from_str(input, "%H:%M:%S").is_ok() }
    error(input) {
        ValidationError::invalid_format("time", "Must follow a valid time format (HH:MM:SS)")
    }
}

crate::rule! {
    /// RFC 3339 timestamp such as `2024-01-02T15:04:05Z`.
    ///
    /// Without `offset` the zone must be `Z`. `precision` fixes the number of
    /// fractional-second digits (`Some(0)` forbids a fraction); `None`
    /// accepts any.
    #[derive(Copy, PartialEq, Eq)]
    pub DateTimeFormat { offset: bool, precision: Option<usize> } for str;
    rule(self, input) { is_datetime(input, self.offset, self.precision) }
    error(self, input) {
        ValidationError::invalid_format("datetime", "Must be a valid ISO 8601 datetime")
    }
}

fn is_datetime(input: &str, offset: bool, precision: Option<usize>) -> bool {
    let Some(caps) = DATETIME_REGEX.captures(input) else {
        return false;
    };
    let digits = caps.name("fraction").map_or(0, |m| m.len());
    let zone_ok = offset || &caps["zone"] == "Z";
    zone_ok
        && precision.is_none_or(|p| p == digits)
        && DateTime::parse_from_rfc3339(input).is_ok()
}

// ============================================================================
// IDENTIFIERS
// ============================================================================

crate::rule! {
    /// Hyphenated UUID of any version.
    pub Uuid for str;
    rule(input) { UUID_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("uuid", "Must be a valid UUID") }
}

crate::rule! {
    /// 21 URL-safe characters.
    pub NanoId for str;
    rule(input) { NANOID_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("nanoid", "Must be a valid NanoID") }
}

crate::rule! {
    /// `c` followed by 24 lowercase alphanumerics.
    pub Cuid for str;
    rule(input) { CUID_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("cuid", "Must be a valid CUID") }
}

crate::rule! {
    /// Lowercase letter followed by lowercase alphanumerics.
    pub Cuid2 for str;
    rule(input) { CUID2_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("cuid2", "Must be a valid CUID2") }
}

crate::rule! {
    /// 26 Crockford base32 characters.
    pub Ulid for str;
    rule(input) { ULID_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("ulid", "Must be a valid ULID") }
}
