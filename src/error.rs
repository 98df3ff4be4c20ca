//! Error types for the signup form
//!
//! `ApiError` messages are shown to the user verbatim.
//! Error messages MUST NOT contain passwords or bearer tokens.

use crate::validator::ValidationResult;

/// A failed signup attempt, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401 or 403.
    #[error("Not authenticated to access this resource")]
    NotAuthenticated,

    /// The server refused an otherwise well-formed password.
    #[error("Sorry, the entered password is not allowed, please try a different one.")]
    PasswordNotAllowed,

    /// HTTP 500 or any unrecognized failure status.
    #[error("Something went wrong, please try again.")]
    ServerError { status: u16 },

    /// The request never completed.
    #[error("Something went wrong, please try again.")]
    Transport,
}

/// Errors from the signup transport layer
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Request failed: {0}")]
    Request(String),
}

impl From<TransportError> for ApiError {
    fn from(_: TransportError) -> Self {
        ApiError::Transport
    }
}

/// Errors from loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid signup endpoint {value:?}: {source}")]
    InvalidEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Signup endpoint must use http or https, got {0:?}")]
    UnsupportedScheme(String),

    #[error("Invalid timeout {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// A submit that was refused before any request was sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    /// Empty username or password policy violations.
    #[error("Form is invalid ({} password violations)", .0.violations().len())]
    Invalid(ValidationResult),

    /// Another submission is still in flight.
    #[error("A submission is already in progress")]
    InFlight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_messages() {
        assert_eq!(
            ApiError::NotAuthenticated.to_string(),
            "Not authenticated to access this resource"
        );
        assert_eq!(
            ApiError::PasswordNotAllowed.to_string(),
            "Sorry, the entered password is not allowed, please try a different one."
        );
        assert_eq!(
            ApiError::ServerError { status: 500 }.to_string(),
            "Something went wrong, please try again."
        );
        assert_eq!(
            ApiError::Transport.to_string(),
            "Something went wrong, please try again."
        );
    }

    #[test]
    fn test_transport_error_maps_to_generic() {
        let err: ApiError = TransportError::Request("connection refused".into()).into();
        assert_eq!(err, ApiError::Transport);
    }
}
