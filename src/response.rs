//! Signup response classification
//!
//! Maps an HTTP status and body to exactly one [`SubmissionOutcome`].

use serde::Deserialize;

use crate::error::ApiError;

/// Raw response of the signup endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupResponse {
    pub status: u16,
    pub body: String,
}

impl SignupResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Result of one submission attempt that reached the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(ApiError),
}

impl SubmissionOutcome {
    /// Message to display, if any. Success shows nothing locally.
    pub fn message(&self) -> Option<String> {
        match self {
            SubmissionOutcome::Success => None,
            SubmissionOutcome::Failure(err) => Some(err.to_string()),
        }
    }
}

pub const PASSWORD_NOT_ALLOWED: &str = "password_not_allowed";

/// Error body the server may send on failure.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Parses the body; empty, malformed or non-object JSON yields the empty body.
    pub fn parse_or_default(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}

/// Classifies a response.
///
/// Precedence for failures: 500, then 401/403, then a
/// `password_not_allowed` body, then the generic error.
pub fn classify(response: &SignupResponse) -> SubmissionOutcome {
    if response.is_success() {
        return SubmissionOutcome::Success;
    }

    let body = ErrorBody::parse_or_default(&response.body);
    let err = match response.status {
        500 => ApiError::ServerError { status: 500 },
        401 | 403 => ApiError::NotAuthenticated,
        _ if body.error.as_deref() == Some(PASSWORD_NOT_ALLOWED) => ApiError::PasswordNotAllowed,
        status => ApiError::ServerError { status },
    };
    SubmissionOutcome::Failure(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure_message(status: u16, body: &str) -> String {
        classify(&SignupResponse::new(status, body))
            .message()
            .expect("failure should carry a message")
    }

    #[test]
    fn test_classify_success_statuses() {
        for status in [200, 201, 204, 299] {
            let outcome = classify(&SignupResponse::new(status, ""));
            assert_eq!(outcome, SubmissionOutcome::Success);
            assert_eq!(outcome.message(), None);
        }
    }

    #[test]
    fn test_classify_server_error() {
        assert_eq!(
            failure_message(500, ""),
            "Something went wrong, please try again."
        );
    }

    #[test]
    fn test_classify_500_wins_over_policy_body() {
        let outcome = classify(&SignupResponse::new(500, r#"{"error":"password_not_allowed"}"#));
        assert_eq!(
            outcome,
            SubmissionOutcome::Failure(ApiError::ServerError { status: 500 })
        );
    }

    #[test]
    fn test_classify_not_authenticated() {
        for status in [401, 403] {
            assert_eq!(
                failure_message(status, r#"{"error":"password_not_allowed"}"#),
                "Not authenticated to access this resource"
            );
        }
    }

    #[test]
    fn test_classify_password_not_allowed() {
        assert_eq!(
            failure_message(400, r#"{"error":"password_not_allowed"}"#),
            "Sorry, the entered password is not allowed, please try a different one."
        );
    }

    #[test]
    fn test_classify_unknown_error_code() {
        let outcome = classify(&SignupResponse::new(400, r#"{"error":"other"}"#));
        assert_eq!(
            outcome,
            SubmissionOutcome::Failure(ApiError::ServerError { status: 400 })
        );
    }

    #[test]
    fn test_classify_tolerates_bad_bodies() {
        for body in ["", "not json", "[1,2]", r#"{"error": 42}"#, "null"] {
            assert_eq!(
                failure_message(422, body),
                "Something went wrong, please try again.",
                "body {:?}",
                body
            );
        }
    }

    #[test]
    fn test_error_body_parse_or_default() {
        assert_eq!(ErrorBody::parse_or_default("garbage"), ErrorBody::default());
        assert_eq!(
            ErrorBody::parse_or_default(r#"{"error":"x","extra":true}"#).error.as_deref(),
            Some("x")
        );
    }
}
