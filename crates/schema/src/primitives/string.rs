//! Text input and its length, content and format rules.

use std::marker::PhantomData;

use regex::Regex;

use crate::foundation::Narrowing;
use crate::rules::{
    Cidr, Cuid, Cuid2, DateTimeFormat, Email, EndsWith, ExactLength, Includes, Ip, IsoDate,
    IsoTime, MatchesRegex, MaxLength, MinLength, NanoId, StartsWith, Ulid, Url, Uuid,
};
use crate::schema::Schema;

/// String schema.
///
/// ```rust
/// use conform_schema::prelude::*;
///
/// let email = string("email").min(5).email();
///
/// let result = email.parse(&Value::text("ab"));
/// assert_eq!(
///     result.messages(),
///     vec!["Must be at least 5 characters long", "Must be a valid email address"]
/// );
/// ```
pub struct StringSchema<M = Narrowing> {
    core: Schema<str>,
    mode: PhantomData<fn() -> M>,
}

super::moded_primitive!(StringSchema, str, String);

impl<M> StringSchema<M> {
    /// At least `n` bytes.
    pub fn min(self, n: usize) -> Self {
        self.rule(MinLength::new(n))
    }

    /// At most `n` bytes.
    pub fn max(self, n: usize) -> Self {
        self.rule(MaxLength::new(n))
    }

    /// Exactly `n` bytes.
    pub fn length(self, n: usize) -> Self {
        self.rule(ExactLength::new(n))
    }

    /// `local@domain.tld`
    pub fn email(self) -> Self {
        self.rule(Email)
    }

    /// Absolute URL with a scheme.
    pub fn url(self) -> Self {
        self.rule(Url)
    }

    /// Hyphenated UUID, any version.
    pub fn uuid(self) -> Self {
        self.rule(Uuid)
    }

    /// IPv4 or IPv6.
    pub fn ip(self) -> Self {
        self.rule(Ip)
    }

    /// IPv4 or IPv6 network in CIDR notation, e.g. `10.0.0.0/8`.
    pub fn cidr(self) -> Self {
        self.rule(Cidr)
    }

    /// `YYYY-MM-DD`
    pub fn date(self) -> Self {
        self.rule(IsoDate)
    }

    /// `HH:MM:SS`
    pub fn time(self) -> Self {
        self.rule(IsoTime)
    }

    /// RFC 3339 timestamp, e.g. `2006-01-02T15:04:05Z`.
    ///
    /// `offset` also allows a numeric zone like `+07:00`. `precision` fixes
    /// the number of fractional-second digits; `None` accepts any.
    pub fn datetime(self, offset: bool, precision: Option<usize>) -> Self {
        self.rule(DateTimeFormat::new(offset, precision))
    }

    /// 21 URL-safe characters.
    pub fn nanoid(self) -> Self {
        self.rule(NanoId)
    }

    /// `c` followed by 24 lowercase alphanumerics.
    pub fn cuid(self) -> Self {
        self.rule(Cuid)
    }

    /// Lowercase alphanumerics starting with a letter.
    pub fn cuid2(self) -> Self {
        self.rule(Cuid2)
    }

    /// 26 Crockford base32 characters.
    pub fn ulid(self) -> Self {
        self.rule(Ulid)
    }

    /// Contains `needle` somewhere.
    pub fn includes(self, needle: impl Into<String>) -> Self {
        self.rule(Includes::new(needle))
    }

    /// Begins with `prefix`.
    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        self.rule(StartsWith::new(prefix))
    }

    /// Ends with `suffix`.
    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        self.rule(EndsWith::new(suffix))
    }

    /// Must match `pattern` (unanchored unless the pattern anchors itself).
    pub fn regex(self, pattern: Regex) -> Self {
        self.rule(MatchesRegex::new(pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::predicate;
    use crate::primitives::string;
    use crate::schema::{Parse, TypedParse};
    use conform_value::Value;
    use pretty_assertions::assert_eq;

    #[test]
    fn narrowing_rejects_non_strings_without_running_rules() {
        let schema = string("name").min(3);
        let result = schema.parse(&Value::Integer(12345));
        assert_eq!(result.messages(), vec!["Must be a string"]);
        assert_eq!(result.errors()[0].code, "type_mismatch");
    }

    #[test]
    fn every_failing_rule_is_reported() {
        let schema = string("code").length(4).starts_with("X").ends_with("!");
        let result = schema.parse(&Value::text("abc"));
        assert_eq!(result.errors().len(), 3);
        assert_eq!(result.path(), "code");
    }

    #[test]
    fn message_overrides_last_rule() {
        let schema = string("pwd").min(8).message("Too short").includes("1");
        let result = schema.parse(&Value::text("abc"));
        assert_eq!(result.messages(), vec!["Too short", "Must include '1'"]);
    }

    #[test]
    fn regex_and_custom_rules() {
        let schema = string("slug")
            .regex(Regex::new(r"^[a-z-]+$").unwrap())
            .rule(predicate(|s: &str| !s.starts_with('-'), "Must not start with a dash"));
        assert!(schema.parse(&Value::text("hello-world")).is_success());
        assert_eq!(
            schema.parse(&Value::text("-x")).messages(),
            vec!["Must not start with a dash"]
        );
    }

    #[test]
    fn datetime_with_offset_and_precision() {
        let schema = string("at").datetime(true, Some(3));
        assert!(schema.parse(&Value::text("2024-05-01T08:30:00.250+02:00")).is_success());

        let result = schema.parse(&Value::text("2024-05-01T08:30:00+02:00"));
        assert_eq!(result.messages(), vec!["Must be a valid ISO 8601 datetime"]);
        assert_eq!(result.errors()[0].code, "invalid_format");

        let utc_only = string("at").datetime(false, None);
        assert!(!utc_only.parse(&Value::text("2024-05-01T08:30:00+02:00")).is_success());
    }

    #[test]
    fn parse_typed_skips_narrowing() {
        let schema = string("s").max(2);
        let result = schema.parse_typed("abc".to_string());
        assert!(!result.is_success());
        assert_eq!(result.value().map(String::as_str), Some("abc"));
    }

    #[test]
    fn clones_are_independent_builders() {
        let base = string("s").min(1);
        let stricter = base.clone().max(2);
        assert!(base.parse(&Value::text("abcd")).is_success());
        assert!(!stricter.parse(&Value::text("abcd")).is_success());
    }
}
