//! Length rules - checks password minimum and maximum length.

use secrecy::{ExposeSecret, SecretString};
use super::{RuleResult, Violation};

pub const MIN_LENGTH: usize = 10;
pub const MAX_LENGTH: usize = 24;

// Counted in UTF-16 code units, as browsers count string length.
fn form_len(password: &SecretString) -> usize {
    password.expose_secret().encode_utf16().count()
}

/// Checks if the password meets the minimum length requirement.
///
/// # Returns
/// - `Some(Violation::TooShort)` if password is too short
/// - `None` if password has sufficient length
pub fn min_length_rule(password: &SecretString) -> RuleResult {
    if form_len(password) < MIN_LENGTH {
        return Some(Violation::TooShort);
    }
    None
}

/// Checks if the password stays within the maximum length.
pub fn max_length_rule(password: &SecretString) -> RuleResult {
    if form_len(password) > MAX_LENGTH {
        return Some(Violation::TooLong);
    }
    None
}
