//! Signup transport abstraction
//!
//! This trait allows testing without a real server by supporting mock implementations.
//! The reqwest-backed implementation is behind the `http` feature.

use async_trait::async_trait;

use crate::credentials::Credentials;
use crate::error::TransportError;
use crate::response::SignupResponse;

/// Issues the signup POST.
///
/// Implementations send exactly one request per call, with
/// `Authorization: Bearer <token>`, `Content-Type: application/json` and the
/// JSON-serialized credentials as body. No retries.
#[async_trait]
pub trait SignupTransport: Send + Sync {
    async fn post_signup(
        &self,
        token: &str,
        credentials: &Credentials,
    ) -> Result<SignupResponse, TransportError>;
}

#[cfg(feature = "http")]
pub use http_client::HttpTransport;

#[cfg(feature = "http")]
mod http_client {
    use async_trait::async_trait;
    use url::Url;

    use super::SignupTransport;
    use crate::config::SignupConfig;
    use crate::credentials::Credentials;
    use crate::error::TransportError;
    use crate::response::SignupResponse;

    /// HTTP transport using a shared reqwest client.
    #[derive(Debug, Clone)]
    pub struct HttpTransport {
        client: reqwest::Client,
        endpoint: Url,
    }

    impl HttpTransport {
        pub fn new(config: &SignupConfig) -> Result<Self, TransportError> {
            let client = reqwest::Client::builder()
                .timeout(config.timeout)
                .build()
                .map_err(|e| TransportError::Request(format!("Failed to create HTTP client: {}", e)))?;
            Ok(Self {
                client,
                endpoint: config.endpoint.clone(),
            })
        }

        pub fn endpoint(&self) -> &Url {
            &self.endpoint
        }
    }

    #[async_trait]
    impl SignupTransport for HttpTransport {
        async fn post_signup(
            &self,
            token: &str,
            credentials: &Credentials,
        ) -> Result<SignupResponse, TransportError> {
            // `json` sets Content-Type: application/json
            let resp = self
                .client
                .post(self.endpoint.clone())
                .bearer_auth(token)
                .json(credentials)
                .send()
                .await
                .map_err(|e| TransportError::Request(e.without_url().to_string()))?;

            let status = resp.status().as_u16();
            // An unreadable body is treated as empty
            let body = resp.text().await.unwrap_or_default();

            Ok(SignupResponse { status, body })
        }
    }

}
