//! Signup configuration
//!
//! Resolves the signup endpoint and request timeout.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str =
    "https://api.challenge.hennge.com/password-validation-challenge-api/001/challenge-signup";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENDPOINT_ENV: &str = "SIGNUP_ENDPOINT";
pub const TIMEOUT_ENV: &str = "SIGNUP_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupConfig {
    pub endpoint: Url,
    pub timeout: Duration,
}

impl SignupConfig {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: parse_endpoint(endpoint)?,
            timeout,
        })
    }

    /// Loads configuration from the environment.
    ///
    /// Priority:
    /// 1. Environment variables `SIGNUP_ENDPOINT` and `SIGNUP_TIMEOUT_SECS`
    /// 2. Built-in defaults
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let timeout = match std::env::var(TIMEOUT_ENV) {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let config = Self::new(&endpoint, timeout)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Signup config loaded: endpoint={} timeout={:?}",
            config.endpoint,
            config.timeout
        );

        Ok(config)
    }
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidEndpoint {
        value: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}
