//! Character class rules - digit, uppercase and lowercase requirements.
//!
//! Classes are ASCII only: `0-9`, `A-Z`, `a-z`.

use secrecy::{ExposeSecret, SecretString};
use super::{RuleResult, Violation};

fn require(password: &SecretString, class: fn(&char) -> bool, violation: Violation) -> RuleResult {
    if password.expose_secret().chars().any(|c| class(&c)) {
        None
    } else {
        Some(violation)
    }
}

/// Requires at least one character in `0-9`.
pub fn digit_rule(password: &SecretString) -> RuleResult {
    require(password, char::is_ascii_digit, Violation::MissingDigit)
}

/// Requires at least one character in `A-Z`.
pub fn uppercase_rule(password: &SecretString) -> RuleResult {
    require(password, char::is_ascii_uppercase, Violation::MissingUppercase)
}

/// Requires at least one character in `a-z`.
pub fn lowercase_rule(password: &SecretString) -> RuleResult {
    require(password, char::is_ascii_lowercase, Violation::MissingLowercase)
}
