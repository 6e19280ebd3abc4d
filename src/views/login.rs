//! Login View
//!
//! Exchanges credentials for a bearer token, stores it in the session and
//! moves on to the dashboard. Failures leave the form populated and show
//! the backend's message inline.

use crate::api::{ApiClient, Credentials};

use super::cell::ViewCell;
use super::shell::{Route, Shell};

pub const LOGIN_FAILED: &str = "Login failed";
pub const MISSING_FIELDS: &str = "Email and password are required";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
}

impl LoginState {
    pub fn can_submit(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.trim(), self.password.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    SignedIn,
    Rejected(String),
}

/// Submit the form
pub async fn submit(
    api: &ApiClient,
    view: &impl ViewCell<LoginState>,
    shell: &dyn Shell,
) -> LoginOutcome {
    let Some(form) = view.with(|s| s.can_submit().then(|| s.credentials())) else {
        return LoginOutcome::Rejected(LOGIN_FAILED.to_string());
    };
    let Some(credentials) = form else {
        return reject(view, MISSING_FIELDS.to_string());
    };

    view.update(|s| s.error = None);

    let token = match api.login(&credentials).await {
        Ok(response) => response.into_token(),
        Err(e) => {
            tracing::warn!("Login for {} rejected: {}", credentials.email, e);
            return reject(view, e.user_message(LOGIN_FAILED));
        }
    };

    let Some(token) = token else {
        tracing::warn!("Login response carried no token");
        return reject(view, LOGIN_FAILED.to_string());
    };

    if let Err(e) = api.session().sign_in(&token) {
        tracing::warn!("Could not store session token: {}", e);
        return reject(view, LOGIN_FAILED.to_string());
    }

    if view.with(|_| ()).is_some() {
        shell.navigate(Route::Dashboard);
    }
    LoginOutcome::SignedIn
}

fn reject(view: &impl ViewCell<LoginState>, message: String) -> LoginOutcome {
    view.update(|s| s.error = Some(message.clone()));
    LoginOutcome::Rejected(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{status, MockTransport};
    use crate::api::Method;
    use crate::session::Session;
    use crate::views::cell::LocalView;
    use crate::views::testing::{RecordingShell, ShellEvent};
    use serde_json::json;

    fn setup() -> (MockTransport, ApiClient, LocalView<LoginState>, RecordingShell) {
        let mock = MockTransport::new();
        let api = ApiClient::new("http://backend.test", Session::in_memory(), mock.clone());
        let view = LocalView::new(LoginState {
            email: "user@example.com".into(),
            password: "hunter2".into(),
            error: None,
        });
        (mock, api, view, RecordingShell::new())
    }

    #[tokio::test]
    async fn test_success_stores_token_and_navigates_once() {
        for body in [
            json!({"access_token": "abc"}),
            json!({"token": "abc"}),
            json!({"access_token": "abc", "token": "old"}),
        ] {
            let (mock, api, view, shell) = setup();
            mock.respond(Method::Post, "/auth/login", Ok(body));

            let outcome = submit(&api, &view, &shell).await;

            assert_eq!(outcome, LoginOutcome::SignedIn);
            assert_eq!(api.session().token().as_deref(), Some("abc"));
            assert_eq!(shell.events(), vec![ShellEvent::Navigate(Route::Dashboard)]);
        }
    }

    #[tokio::test]
    async fn test_failure_shows_backend_message_and_keeps_token() {
        let cases = [
            (status(401, json!({"detail": "Invalid credentials"})), "Invalid credentials"),
            (status(400, json!({"message": "Account locked"})), "Account locked"),
            (status(500, json!({})), LOGIN_FAILED),
            (Ok(json!({"token_type": "bearer"})), LOGIN_FAILED),
        ];

        for (reply, expected) in cases {
            let (mock, api, view, shell) = setup();
            api.session().sign_in("previous").unwrap();
            mock.respond(Method::Post, "/auth/login", reply);

            let outcome = submit(&api, &view, &shell).await;

            assert_eq!(outcome, LoginOutcome::Rejected(expected.to_string()));
            assert_eq!(api.session().token().as_deref(), Some("previous"));
            let state = view.snapshot();
            assert_eq!(state.error.as_deref(), Some(expected));
            assert_eq!(state.email, "user@example.com");
            assert!(shell.events().is_empty());
        }
    }

    #[tokio::test]
    async fn test_empty_fields_skip_request() {
        let (mock, api, view, shell) = setup();
        view.update(|s| s.password.clear());

        let outcome = submit(&api, &view, &shell).await;

        assert_eq!(outcome, LoginOutcome::Rejected(MISSING_FIELDS.to_string()));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unmounted_view_still_signs_in_without_navigating() {
        let (mock, api, view, shell) = setup();
        let gate = mock.respond_later(Method::Post, "/auth/login");

        let pending = submit(&api, &view, &shell);
        let release = async {
            view.unmount();
            gate.send(Ok(json!({"access_token": "late"}))).unwrap();
        };
        let (outcome, ()) = futures_util::join!(pending, release);

        assert_eq!(outcome, LoginOutcome::SignedIn);
        assert_eq!(api.session().token().as_deref(), Some("late"));
        assert!(shell.events().is_empty());
    }
}
