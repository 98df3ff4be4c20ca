//! Whitespace rule - rejects passwords containing any whitespace.

use secrecy::{ExposeSecret, SecretString};
use super::{RuleResult, Violation};

/// True for the characters matched by a regex `\s` class in browsers:
/// ASCII whitespace, the Unicode space separators, line/paragraph separators
/// and the byte order mark. U+0085 is not included.
fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Checks that the password contains no whitespace character (space, tab, newline, ...).
pub fn whitespace_rule(password: &SecretString) -> RuleResult {
    if password.expose_secret().chars().any(is_form_whitespace) {
        return Some(Violation::ContainsWhitespace);
    }
    None
}
