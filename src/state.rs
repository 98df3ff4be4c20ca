//! Form state and reducers
//!
//! Every user or network event is a pure function on [`FormState`]. The
//! controller applies them through a watch channel so views observe each
//! transition.

use secrecy::{ExposeSecret, SecretString};

use crate::credentials::Credentials;
use crate::error::{ApiError, SubmitBlocked};
use crate::response::SubmissionOutcome;
use crate::validator::{validate_password, ValidationResult};

/// Lifecycle phase of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug)]
pub struct FormState {
    pub username: String,
    pub password: SecretString,
    pub violations: ValidationResult,
    pub api_error: Option<ApiError>,
    pub in_flight: bool,
    pub phase: Phase,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: SecretString::new(String::new().into()),
            violations: ValidationResult::default(),
            api_error: None,
            in_flight: false,
            phase: Phase::Idle,
        }
    }
}

impl FormState {
    /// Credentials as currently typed. The password is copied out of the state.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.username.clone(),
            SecretString::new(self.password.expose_secret().into()),
        )
    }

    /// Message shown for the API error, if any.
    pub fn api_error_message(&self) -> Option<String> {
        self.api_error.as_ref().map(ToString::to_string)
    }
}

// Editing after a finished attempt starts a fresh one.
fn settle_phase(state: &mut FormState) {
    if matches!(state.phase, Phase::Invalid | Phase::Succeeded | Phase::Failed) {
        state.phase = Phase::Idle;
    }
}

pub fn username_changed(state: &mut FormState, username: String) {
    state.username = username;
    settle_phase(state);
}

/// Stores the new password, revalidates it and clears any API error.
pub fn password_changed(state: &mut FormState, password: SecretString) {
    state.violations = validate_password(&password);
    state.password = password;
    state.api_error = None;
    settle_phase(state);
}

/// Starts a submit attempt by clearing previous errors.
///
/// Refused without touching state while another attempt is being validated
/// or is in flight.
pub fn submit_pressed(state: &mut FormState) -> Result<(), SubmitBlocked> {
    if state.in_flight || state.phase == Phase::Validating {
        return Err(SubmitBlocked::InFlight);
    }
    state.violations = ValidationResult::default();
    state.api_error = None;
    state.phase = Phase::Validating;
    Ok(())
}

/// Runs the validator as a gate.
///
/// An empty username blocks submission without adding a message.
/// On success the state is `Submitting` with the in-flight flag set, and the
/// credentials to send are returned.
pub fn validated(state: &mut FormState) -> Result<Credentials, SubmitBlocked> {
    let violations = validate_password(&state.password);
    if state.username.is_empty() || !violations.is_valid() {
        state.violations = violations.clone();
        state.phase = Phase::Invalid;
        return Err(SubmitBlocked::Invalid(violations));
    }

    state.phase = Phase::Submitting;
    state.in_flight = true;
    Ok(state.credentials())
}

/// Records the outcome of a request. Success wipes the credentials.
pub fn response_received(state: &mut FormState, outcome: &SubmissionOutcome) {
    match outcome {
        SubmissionOutcome::Success => {
            state.phase = Phase::Succeeded;
            state.api_error = None;
            state.username.clear();
            state.password = SecretString::new(String::new().into());
        }
        SubmissionOutcome::Failure(err) => {
            state.phase = Phase::Failed;
            state.api_error = Some(err.clone());
        }
    }
}

/// Clears the in-flight flag. Runs on every exit path of a request.
pub fn request_settled(state: &mut FormState) {
    state.in_flight = false;
    // Request ended without an outcome
    if state.phase == Phase::Submitting {
        state.phase = Phase::Failed;
        state.api_error = Some(ApiError::Transport);
    }
}
