//! Bearer token providers
//!
//! The token is resolved at the moment of submission, never cached, so a
//! form that outlives a navigation uses whatever the location says now.

use std::sync::{Arc, RwLock};

use url::Url;

/// Supplies the bearer token for a signup request.
pub trait TokenProvider: Send + Sync {
    /// Returns the current token. May be empty.
    fn bearer_token(&self) -> String;
}

/// Returns the last path segment of `url`.
///
/// `https://host/signup/abc123` yields `abc123`. A trailing slash yields an
/// empty token, which is still sent.
pub fn token_from_url(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default()
        .to_string()
}

/// Shared, updatable page location.
#[derive(Debug, Clone)]
pub struct PageLocation {
    current: Arc<RwLock<Url>>,
}

impl PageLocation {
    pub fn new(url: Url) -> Self {
        Self {
            current: Arc::new(RwLock::new(url)),
        }
    }

    pub fn navigate(&self, url: Url) {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = url;
    }

    pub fn current(&self) -> Url {
        self.current.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// Reads the token from the last path segment of a [`PageLocation`].
#[derive(Debug, Clone)]
pub struct LocationTokenProvider {
    location: PageLocation,
}

impl LocationTokenProvider {
    pub fn new(location: PageLocation) -> Self {
        Self { location }
    }
}

impl TokenProvider for LocationTokenProvider {
    fn bearer_token(&self) -> String {
        token_from_url(&self.location.current())
    }
}

/// Always returns the same token.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider(String);

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticTokenProvider {
    fn bearer_token(&self) -> String {
        self.0.clone()
    }
}
