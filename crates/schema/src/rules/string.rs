//! String length and content rules
//!
//! Length is the UTF-8 byte length, so `"é"` counts as two.

use crate::foundation::ValidationError;

// ============================================================================
// LENGTH
// ============================================================================

crate::rule! {
    /// At least `min` bytes.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.len() >= self.min }
    error(self, input) { ValidationError::min_length(self.min, input.len()) }
}

crate::rule! {
    /// At most `max` bytes.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.len() <= self.max }
    error(self, input) { ValidationError::max_length(self.max, input.len()) }
}

crate::rule! {
    /// Exactly `length` bytes.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize } for str;
    rule(self, input) { input.len() == self.length }
    error(self, input) {
        ValidationError::new("exact_length", format!("Must be exactly {} characters long", self.length))
            .with_param("length", self.length.to_string())
            .with_param("actual", input.len().to_string())
    }
}

// ============================================================================
// CONTENT
// ============================================================================

crate::rule! {
    /// Contains `needle` somewhere.
    #[derive(PartialEq, Eq, Hash)]
    pub Includes { needle: String } for str;
    rule(self, input) { input.contains(self.needle.as_str()) }
    error(self, input) {
        ValidationError::new("includes", format!("Must include '{}'", self.needle))
            .with_param("needle", self.needle.clone())
    }
    new(needle: impl Into<String>) { Self { needle: needle.into() } }
}

crate::rule! {
    /// Begins with `prefix`.
    #[derive(PartialEq, Eq, Hash)]
    pub StartsWith { prefix: String } for str;
    rule(self, input) { input.starts_with(self.prefix.as_str()) }
    error(self, input) {
        ValidationError::new("starts_with", format!("Must start with '{}'", self.prefix))
            .with_param("prefix", self.prefix.clone())
    }
    new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
}

crate::rule! {
    /// Ends with `suffix`.
    #[derive(PartialEq, Eq, Hash)]
    pub EndsWith { suffix: String } for str;
    rule(self, input) { input.ends_with(self.suffix.as_str()) }
    error(self, input) {
        ValidationError::new("ends_with", format!("Must end with '{}'", self.suffix))
            .with_param("suffix", self.suffix.clone())
    }
    new(suffix: impl Into<String>) { Self { suffix: suffix.into() } }
}

crate::rule! {
    /// Matches a caller-supplied regular expression.
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("regex", format!("Must match the pattern {}", self.pattern.as_str()))
            .with_param("pattern", self.pattern.as_str().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("abc", true)]
    #[case("ab", false)]
    #[case("éa", true)]
    #[case("é", false)]
    fn min_length_counts_bytes(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(MinLength::new(3).validate(input).is_ok(), ok);
    }

    #[test]
    fn length_errors_carry_bounds() {
        let err = MaxLength::new(2).validate("abc").unwrap_err();
        assert_eq!(err.code, "max_length");
        assert_eq!(err.message, "Must be at most 2 characters long");
        assert_eq!(err.param("max"), Some("2"));

        assert!(ExactLength::new(3).validate("abc").is_ok());
        assert!(ExactLength::new(3).validate("abcd").is_err());
    }

    #[test]
    fn substring_rules() {
        assert!(Includes::new("@").validate("a@b").is_ok());
        assert_eq!(
            Includes::new("@").validate("ab").unwrap_err().message,
            "Must include '@'"
        );
        assert!(StartsWith::new("https").validate("https://x").is_ok());
        assert!(StartsWith::new("https").validate("http://x").is_err());
        assert!(EndsWith::new(".rs").validate("main.rs").is_ok());
        assert!(EndsWith::new(".rs").validate("main.go").is_err());
    }

    #[test]
    fn custom_regex() {
        let rule = MatchesRegex::new(regex::Regex::new(r"^\d{3}$").unwrap());
        assert!(rule.validate("123").is_ok());
        let err = rule.validate("12a").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.param("pattern"), Some(r"^\d{3}$"));
    }
}
