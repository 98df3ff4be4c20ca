//! Password policy rules
//!
//! Each rule checks one aspect of the signup password policy and reports
//! at most one violation.

mod charset;
mod length;
mod whitespace;

pub use charset::{digit_rule, lowercase_rule, uppercase_rule};
pub use length::{max_length_rule, min_length_rule, MAX_LENGTH, MIN_LENGTH};
pub use whitespace::whitespace_rule;

use thiserror::Error;

/// A single policy rule the password fails to satisfy.
///
/// The `Display` output is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    #[error("Password must be at least 10 characters long")]
    TooShort,
    #[error("Password must be at most 24 characters long")]
    TooLong,
    #[error("Password cannot contain spaces")]
    ContainsWhitespace,
    #[error("Password must contain at least one number")]
    MissingDigit,
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,
    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,
}

/// Result type for rule functions.
/// - `Some(violation)` - Rule failed
/// - `None` - Rule passed
pub type RuleResult = Option<Violation>;
