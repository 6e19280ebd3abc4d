//! Registration View

use std::time::Duration;

use crate::api::{ApiClient, Credentials};

use super::cell::ViewCell;
use super::login::MISSING_FIELDS;
use super::shell::{Route, Shell};

pub const REGISTRATION_SUCCESS: &str = "Registration successful! You can now login.";
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Pause between the success notice and the jump to login
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterState {
    pub email: String,
    pub password: String,
    /// Only one of success or error is ever shown
    pub notice: Option<Notice>,
}

impl RegisterState {
    pub fn can_submit(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    Registered,
    Rejected(String),
}

/// Submit the form. Repeated submits each send their own request.
pub async fn submit(
    api: &ApiClient,
    view: &impl ViewCell<RegisterState>,
    shell: &dyn Shell,
) -> RegisterOutcome {
    let form = view.with(|s| {
        s.can_submit()
            .then(|| Credentials::new(s.email.trim(), s.password.clone()))
    });
    let Some(form) = form else {
        return RegisterOutcome::Rejected(REGISTRATION_FAILED.to_string());
    };
    let Some(credentials) = form else {
        return reject(view, MISSING_FIELDS.to_string());
    };

    match api.create_user(&credentials).await {
        Ok(_) => {
            tracing::info!("Registered {}", credentials.email);
            let shown = view.update(|s| {
                s.notice = Some(Notice {
                    kind: NoticeKind::Success,
                    text: REGISTRATION_SUCCESS.to_string(),
                })
            });
            if shown {
                shell.navigate_after(Route::Login, REDIRECT_DELAY);
            }
            RegisterOutcome::Registered
        }
        Err(e) => {
            tracing::warn!("Registration for {} failed: {}", credentials.email, e);
            reject(view, e.user_message(REGISTRATION_FAILED))
        }
    }
}

fn reject(view: &impl ViewCell<RegisterState>, message: String) -> RegisterOutcome {
    view.update(|s| {
        s.notice = Some(Notice {
            kind: NoticeKind::Error,
            text: message.clone(),
        })
    });
    RegisterOutcome::Rejected(message)
}
