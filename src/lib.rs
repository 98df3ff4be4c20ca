//! User registration form core
//!
//! This library validates a signup password against a fixed policy and
//! submits the credentials to a remote signup endpoint, mapping every
//! outcome to a single user-facing message.
//!
//! # Features
//!
//! - `http` (default): Enables the reqwest-based [`HttpTransport`]
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `SIGNUP_ENDPOINT`: Signup URL (default: the challenge signup endpoint)
//! - `SIGNUP_TIMEOUT_SECS`: Request timeout in seconds (default: `10`)
//!
//! # Example
//!
//! ```rust,no_run
//! use secrecy::SecretString;
//! use signup_form::{
//!     validate_password, HttpTransport, LocationTokenProvider, PageLocation, SignupConfig,
//!     SubmissionController,
//! };
//! use url::Url;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! // Per-keystroke validation
//! let password = SecretString::new("valid1Password".to_string().into());
//! assert!(validate_password(&password).is_valid());
//!
//! // Submission
//! let config = SignupConfig::from_env()?;
//! let location = PageLocation::new(Url::parse("https://app.example/signup/my-token")?);
//! let controller = SubmissionController::new(
//!     HttpTransport::new(&config)?,
//!     LocationTokenProvider::new(location),
//!     || println!("user created"),
//! );
//! controller.set_username("alice");
//! controller.set_password(password);
//!
//! match controller.submit().await {
//!     Ok(outcome) => println!("{:?}", outcome.message()),
//!     Err(blocked) => println!("not sent: {}", blocked),
//! }
//! # Ok(())
//! # }
//! ```

// Internal modules
mod config;
mod controller;
mod credentials;
mod error;
mod mock_transport;
mod response;
mod rules;
mod state;
mod token;
mod transport;
mod validator;
pub mod view;

// Public API
pub use config::{SignupConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
pub use controller::SubmissionController;
pub use credentials::Credentials;
pub use error::{ApiError, ConfigError, SubmitBlocked, TransportError};
pub use mock_transport::{MockReply, MockTransport, RecordedRequest};
pub use response::{classify, ErrorBody, SignupResponse, SubmissionOutcome};
pub use rules::{Violation, MAX_LENGTH, MIN_LENGTH};
pub use state::{FormState, Phase};
pub use token::{token_from_url, LocationTokenProvider, PageLocation, StaticTokenProvider, TokenProvider};
pub use transport::SignupTransport;
pub use validator::{validate_password, ValidationResult};

#[cfg(feature = "http")]
pub use transport::HttpTransport;
