//! API Error Types
//!
//! Failures surfaced by the backend client. Every call ends in one of
//! three ways: the request never completed, the backend answered with an
//! error status, or the body could not be decoded.

use serde::Deserialize;
use thiserror::Error;

/// Backend client errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport failure (DNS, refused connection, aborted fetch)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response, with the backend's message when it sent one
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// Response body was not the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Error body shapes the backend is known to send.
///
/// FastAPI-style `{"detail": ...}` wins over `{"message": ...}`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Pick the human-readable message out of an error body
    pub fn into_message(self) -> Option<String> {
        self.detail
            .and_then(message_text)
            .or_else(|| self.message.and_then(message_text))
    }
}

fn message_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        serde_json::Value::Null => None,
        serde_json::Value::String(_) => None,
        // Validation errors arrive as arrays/objects; show them verbatim
        other => Some(other.to_string()),
    }
}

impl ApiError {
    /// Build a status error from a raw response body
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message);

        ApiError::Status { status, message }
    }

    /// HTTP status code, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend rejected our credentials
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Message to show a user, falling back to `default`
    pub fn user_message(&self, default: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => default.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;
