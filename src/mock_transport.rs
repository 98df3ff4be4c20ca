//! Mock signup transport for testing without a real server
//!
//! Replies with scripted responses in order and records every request it
//! receives, so tests can assert on the token and body it was handed.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::credentials::Credentials;
use crate::error::TransportError;
use crate::response::SignupResponse;
use crate::transport::SignupTransport;

/// A request as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub token: String,
    pub body: serde_json::Value,
}

/// Scripted reply
#[derive(Debug, Clone)]
pub enum MockReply {
    Respond(SignupResponse),
    /// Simulated network failure
    Fail(String),
}

#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
    gate: Option<Arc<Notify>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock answering the first call with `status` and `body`.
    pub fn responding(status: u16, body: &str) -> Self {
        Self::new().then_respond(status, body)
    }

    /// Mock whose first call fails at the transport level.
    pub fn failing(reason: &str) -> Self {
        Self::new().then_fail(reason)
    }

    pub fn then_respond(self, status: u16, body: &str) -> Self {
        self.push(MockReply::Respond(SignupResponse::new(status, body)))
    }

    pub fn then_fail(self, reason: &str) -> Self {
        self.push(MockReply::Fail(reason.to_string()))
    }

    /// Holds every reply until the returned handle is notified.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn push(self, reply: MockReply) -> Self {
        self.replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(reply);
        self
    }
}

#[async_trait]
impl SignupTransport for MockTransport {
    async fn post_signup(
        &self,
        token: &str,
        credentials: &Credentials,
    ) -> Result<SignupResponse, TransportError> {
        let body: serde_json::Value = serde_json::from_str(&credentials.to_json()?)?;
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedRequest {
                token: token.to_string(),
                body,
            });

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let reply = self
            .replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();

        match reply {
            Some(MockReply::Respond(response)) => Ok(response),
            Some(MockReply::Fail(reason)) => Err(TransportError::Request(reason)),
            None => Err(TransportError::Request("no scripted reply".to_string())),
        }
    }
}
