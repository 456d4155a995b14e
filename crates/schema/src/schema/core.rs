//! The rule list every schema is built on.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use conform_value::Value;
use tracing::trace;

use crate::foundation::{Entry, ParseResult, Rule, Validate, ValidationError};
use crate::rules::WithMessage;

/// A path label plus an ordered list of rules over `T`.
///
/// Rules run in insertion order and every one of them runs: a failing rule
/// does not stop the ones after it, so a result lists all violations.
/// An empty rule list accepts everything.
///
/// ```rust
/// use conform_schema::schema::Schema;
/// use conform_schema::rules::{Email, MinLength};
///
/// let mut core = Schema::<str>::new("email");
/// core.add_rule(MinLength::new(5));
/// core.add_rule(Email);
///
/// let result = core.run("ab".to_string());
/// assert!(!result.is_success());
/// assert_eq!(result.errors().len(), 2);
/// ```
pub struct Schema<T: ?Sized + 'static> {
    path: String,
    rules: Vec<Rule<T>>,
}

impl<T: ?Sized + 'static> Clone for Schema<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            rules: self.rules.clone(),
        }
    }
}

impl<T: ?Sized + 'static> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("path", &self.path)
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl<T: ?Sized + 'static> Schema<T> {
    /// An empty schema labelled `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            rules: Vec::new(),
        }
    }

    /// The path label used in results.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rule has been added.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Appends a rule. Order of addition is order of evaluation.
    pub fn add_rule<V>(&mut self, rule: V)
    where
        V: Validate<Input = T> + Send + Sync + 'static,
    {
        self.rules.push(Arc::new(rule));
    }

    /// Replaces the message reported by the most recently added rule.
    ///
    /// Does nothing when there are no rules yet.
    pub fn override_last_message(&mut self, message: impl Into<String>) {
        if let Some(last) = self.rules.pop() {
            self.rules.push(Arc::new(WithMessage::new(last, message)));
        }
    }

    /// Runs every rule against `input` and returns the failures in order.
    pub fn check(&self, input: &T) -> Vec<ValidationError> {
        let errors: Vec<_> = self
            .rules
            .iter()
            .filter_map(|rule| rule.validate(input).err())
            .collect();

        trace!(
            path = %self.path,
            rules = self.rules.len(),
            failed = errors.len(),
            "rules evaluated"
        );
        errors
    }

    /// Runs every rule and wraps the outcome, carrying `value` either way.
    pub fn run<O: Borrow<T>>(&self, value: O) -> ParseResult<O> {
        let errors = self.check(value.borrow());
        ParseResult::from_parts(self.path.as_str(), errors, value)
    }

    /// Converts `value` with the entry mode `M`, then runs the rules.
    ///
    /// If the conversion fails its error is the only one reported.
    pub fn enter<M, O>(&self, value: &Value) -> ParseResult<O>
    where
        M: Entry<O>,
        O: Borrow<T>,
    {
        match M::enter(value) {
            Ok(typed) => self.run(typed),
            Err(error) => ParseResult::failure(self.path.as_str(), error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Narrowing;
    use crate::rules::{Email, GreaterThan, MinLength, Positive};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_rule_list_accepts() {
        let core = Schema::<f64>::new("n");
        assert!(core.is_empty());
        let result = core.run(-1.0);
        assert!(result.is_success());
        assert_eq!(result.value(), Some(&-1.0));
    }

    #[test]
    fn all_rules_run_in_order() {
        let mut core = Schema::<f64>::new("n");
        core.add_rule(GreaterThan::new(10.0));
        core.add_rule(Positive::<f64>::new());
        let codes: Vec<_> = core.check(&-1.0).into_iter().map(|e| e.code).collect();
        assert_eq!(codes, vec!["greater_than", "positive"]);
    }

    #[test]
    fn override_targets_last_rule_only() {
        let mut core = Schema::<str>::new("email");
        core.add_rule(MinLength::new(5));
        core.add_rule(Email);
        core.override_last_message("Bad email");
        let messages: Vec<_> = core.check("ab").into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["Must be at least 5 characters long", "Bad email"]);
    }

    #[test]
    fn override_without_rules_is_a_no_op() {
        let mut core = Schema::<str>::new("s");
        core.override_last_message("ignored");
        assert!(core.is_empty());
    }

    #[test]
    fn entry_failure_skips_rules() {
        let mut core = Schema::<str>::new("s");
        core.add_rule(MinLength::new(5));
        let result = core.enter::<Narrowing, String>(&Value::Integer(1));
        assert_eq!(result.messages(), vec!["Must be a string"]);
        assert_eq!(result.path(), "s");
        assert_eq!(result.value(), None);
    }

    #[test]
    fn clones_share_rules() {
        let mut core = Schema::<f64>::new("n");
        core.add_rule(Positive::<f64>::new());
        let copy = core.clone();
        assert_eq!(copy.len(), 1);
        assert!(!copy.run(-2.0).is_success());
    }
}
