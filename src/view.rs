//! Form view boundary
//!
//! The view owns widgets, labels and layout. It must keep each input bound to
//! its label, disable submit while a request is in flight and show either the
//! violation list or the API error. [`TextFormView`] is a plain-text rendering
//! of that contract.

use secrecy::ExposeSecret;
use tokio::sync::watch;

use crate::state::FormState;

pub const USERNAME_ID: &str = "username";
pub const PASSWORD_ID: &str = "password";
pub const SUBMIT_LABEL: &str = "Create User";

/// Renders form state.
pub trait FormView {
    fn render(&mut self, state: &FormState);
}

/// Renders the form as text, one widget per line.
#[derive(Debug, Default)]
pub struct TextFormView {
    frames: Vec<String>,
}

impl TextFormView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered frame
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl FormView for TextFormView {
    fn render(&mut self, state: &FormState) {
        self.frames.push(render_text(state));
    }
}

/// Text rendering of `state`. The password is masked.
pub fn render_text(state: &FormState) -> String {
    let mut out = Vec::new();

    out.push(format!("[label for={USERNAME_ID}] Username"));
    out.push(format!("[input id={USERNAME_ID} type=text] {}", state.username));

    out.push(format!("[label for={PASSWORD_ID}] Password"));
    let masked = "*".repeat(state.password.expose_secret().chars().count());
    let invalid = !state.violations.is_valid();
    out.push(format!(
        "[input id={PASSWORD_ID} type=password aria-invalid={invalid}] {masked}"
    ));

    for message in state.violations.messages() {
        out.push(format!("  - {}", message));
    }
    if let Some(message) = state.api_error_message() {
        out.push(format!("  ! {}", message));
    }

    let button = if state.in_flight {
        format!("[button disabled] {SUBMIT_LABEL}")
    } else {
        format!("[button] {SUBMIT_LABEL}")
    };
    out.push(button);

    out.join("\n")
}

/// Renders every state change until the controller is dropped.
pub async fn drive_view<V: FormView>(mut rx: watch::Receiver<FormState>, view: &mut V) {
    view.render(&rx.borrow_and_update());
    while rx.changed().await.is_ok() {
        view.render(&rx.borrow_and_update());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::state::{password_changed, username_changed};
    use secrecy::SecretString;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_render_labels_bound_to_inputs() {
        let frame = render_text(&FormState::default());
        assert!(frame.contains("[label for=username] Username"));
        assert!(frame.contains("[input id=username type=text]"));
        assert!(frame.contains("[label for=password] Password"));
        assert!(frame.contains("[input id=password type=password aria-invalid=false]"));
        assert!(frame.ends_with("[button] Create User"));
    }

    #[test]
    fn test_render_masks_password_and_lists_violations() {
        let mut state = FormState::default();
        username_changed(&mut state, "alice".to_string());
        password_changed(&mut state, secret("short"));

        let frame = render_text(&state);
        assert!(frame.contains("[input id=username type=text] alice"));
        assert!(frame.contains("aria-invalid=true] *****"));
        assert!(!frame.contains("short"));
        assert!(frame.contains("  - Password must be at least 10 characters long"));
        assert!(frame.contains("  - Password must contain at least one number"));
    }

    #[test]
    fn test_render_api_error_and_disabled_button() {
        let mut state = FormState::default();
        state.api_error = Some(ApiError::NotAuthenticated);
        state.in_flight = true;

        let frame = render_text(&state);
        assert!(frame.contains("  ! Not authenticated to access this resource"));
        assert!(frame.contains("[button disabled] Create User"));
    }

    #[tokio::test]
    async fn test_drive_view_renders_until_closed() {
        let (tx, rx) = watch::channel(FormState::default());
        let mut view = TextFormView::new();

        let producer = async move {
            tx.send_modify(|s| username_changed(s, "bob".to_string()));
            tokio::task::yield_now().await;
            tx.send_modify(|s| password_changed(s, secret("x")));
        };
        tokio::join!(producer, drive_view(rx, &mut view));

        assert!(view.frame_count() >= 2);
        let last = view.last_frame().unwrap();
        assert!(last.contains("bob"));
        assert!(last.contains("aria-invalid=true"));
    }
}
