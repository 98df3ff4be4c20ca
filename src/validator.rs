//! Password validator - runs every policy rule and collects violations.

use secrecy::SecretString;

use crate::rules::{
    digit_rule, lowercase_rule, max_length_rule, min_length_rule, uppercase_rule,
    whitespace_rule, RuleResult, Violation,
};

/// Ordered list of violations produced by [`validate_password`].
///
/// An empty result means the password is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn contains(&self, violation: Violation) -> bool {
        self.violations.contains(&violation)
    }

    /// User-facing messages, in rule order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

impl From<Vec<Violation>> for ValidationResult {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

/// Validates a password against the signup policy.
///
/// Every rule runs, so a single call reports all failures. Order is fixed:
/// min length, max length, whitespace, digit, uppercase, lowercase.
pub fn validate_password(password: &SecretString) -> ValidationResult {
    // Orchestrator: execute rules in display order
    let rules: [(&str, fn(&SecretString) -> RuleResult); 6] = [
        ("min_length", min_length_rule),
        ("max_length", max_length_rule),
        ("whitespace", whitespace_rule),
        ("digit", digit_rule),
        ("uppercase", uppercase_rule),
        ("lowercase", lowercase_rule),
    ];

    let mut violations = Vec::new();
    for (_rule_name, rule_fn) in rules {
        if let Some(violation) = rule_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::trace!("password rule failed: {}", _rule_name);
            violations.push(violation);
        }
    }

    ValidationResult { violations }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_validate_empty_password() {
        let result = validate_password(&secret(""));
        assert_eq!(
            result.violations(),
            &[
                Violation::TooShort,
                Violation::MissingDigit,
                Violation::MissingUppercase,
                Violation::MissingLowercase,
            ]
        );
    }

    #[test]
    fn test_validate_short_password() {
        let result = validate_password(&secret("short1A"));
        assert!(result.contains(Violation::TooShort));
        assert!(!result.contains(Violation::TooLong));
        assert!(!result.contains(Violation::ContainsWhitespace));
        assert!(!result.contains(Violation::MissingDigit));
        assert!(!result.contains(Violation::MissingUppercase));
        assert!(!result.contains(Violation::MissingLowercase));
    }

    #[test]
    fn test_validate_no_digits() {
        let result = validate_password(&secret("NoDigitsHere"));
        assert_eq!(
            result.messages(),
            vec!["Password must contain at least one number".to_string()]
        );
    }

    #[test]
    fn test_validate_valid_password() {
        let result = validate_password(&secret("valid1Password"));
        assert!(result.is_valid());
        assert!(result.messages().is_empty());
    }

    #[test]
    fn test_validate_long_password_with_space() {
        let result = validate_password(&secret("this is far too long for the policy"));
        assert_eq!(
            result.violations(),
            &[
                Violation::TooLong,
                Violation::ContainsWhitespace,
                Violation::MissingDigit,
                Violation::MissingUppercase,
            ]
        );
    }

    #[test]
    fn test_validate_length_boundaries() {
        let cases = [
            ("Abcdefgh1", false),
            ("Abcdefghi1", true),
            ("Abcdefghijklmnopqrstuvw1", true),
            ("Abcdefghijklmnopqrstuvwx1", false),
        ];

        for (pwd, expected) in cases {
            assert_eq!(
                validate_password(&secret(pwd)).is_valid(),
                expected,
                "unexpected result for {:?} ({} chars)",
                pwd,
                pwd.len()
            );
        }
    }

    #[test]
    fn test_validate_emoji_password_length() {
        // 7 chars but 11 UTF-16 units
        let result = validate_password(&secret("Aa1\u{1F600}\u{1F600}\u{1F600}\u{1F600}"));
        assert!(result.is_valid(), "unexpected violations {:?}", result.messages());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let pwd = secret("bad pass");
        let first = validate_password(&pwd);
        let second = validate_password(&pwd);
        assert_eq!(first, second);
        assert_eq!(first.messages(), second.messages());
    }
}
