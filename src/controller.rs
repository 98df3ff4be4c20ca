//! Submission controller - orchestrates validation and the signup request.

use secrecy::SecretString;
use tokio::sync::watch;

use crate::error::SubmitBlocked;
use crate::response::{classify, SubmissionOutcome};
use crate::state::{self, FormState};
use crate::token::TokenProvider;
use crate::transport::SignupTransport;

type OnCreated = Box<dyn Fn() + Send + Sync>;

/// Owns the state of one form instance and drives its submissions.
///
/// State changes are published on a watch channel; call [`subscribe`](Self::subscribe)
/// to observe them.
pub struct SubmissionController<T, P> {
    transport: T,
    tokens: P,
    state: watch::Sender<FormState>,
    on_created: OnCreated,
}

/// Clears the in-flight flag when dropped, whatever way the request ended.
struct InFlightGuard<'a> {
    state: &'a watch::Sender<FormState>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(state::request_settled);
    }
}

impl<T, P> SubmissionController<T, P>
where
    T: SignupTransport,
    P: TokenProvider,
{
    /// `on_created` is called once for every successful submission.
    pub fn new(transport: T, tokens: P, on_created: impl Fn() + Send + Sync + 'static) -> Self {
        let (state, _) = watch::channel(FormState::default());
        Self {
            transport,
            tokens,
            state,
            on_created: Box::new(on_created),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// Current state. Do not hold the guard across other calls on the controller.
    pub fn state(&self) -> watch::Ref<'_, FormState> {
        self.state.borrow()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn set_username(&self, username: impl Into<String>) {
        let username = username.into();
        self.state
            .send_modify(|s| state::username_changed(s, username));
    }

    pub fn set_password(&self, password: SecretString) {
        self.state
            .send_modify(|s| state::password_changed(s, password));
    }

    /// Submits the current username and password.
    ///
    /// # Returns
    /// * `Ok(outcome)` - A request was attempted; the outcome is also in the state
    /// * `Err(SubmitBlocked)` - Nothing was sent
    pub async fn submit(&self) -> Result<SubmissionOutcome, SubmitBlocked> {
        let mut started = Ok(());
        self.state.send_if_modified(|s| {
            started = state::submit_pressed(s);
            started.is_ok()
        });
        started?;

        let mut gate = Err(SubmitBlocked::InFlight);
        self.state.send_modify(|s| gate = state::validated(s));
        let credentials = match gate {
            Ok(credentials) => credentials,
            Err(blocked) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Signup blocked before request: {}", blocked);
                return Err(blocked);
            }
        };

        let guard = InFlightGuard { state: &self.state };

        #[cfg(feature = "tracing")]
        tracing::info!("Submitting signup for user {:?}", credentials.username);

        let token = self.tokens.bearer_token();
        let outcome = match self.transport.post_signup(&token, &credentials).await {
            Ok(response) => {
                #[cfg(feature = "tracing")]
                tracing::info!("Signup response status {}", response.status);
                classify(&response)
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Signup request failed: {}", e);
                SubmissionOutcome::Failure(e.into())
            }
        };

        self.state
            .send_modify(|s| state::response_received(s, &outcome));
        drop(guard);

        match &outcome {
            SubmissionOutcome::Success => (self.on_created)(),
            SubmissionOutcome::Failure(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Signup failed: {:?}", _err);
            }
        }

        Ok(outcome)
    }
}
