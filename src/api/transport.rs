//! HTTP transport abstraction
//!
//! A [`Transport`] performs exactly one HTTP exchange. It never retries and
//! never times out; the native build uses reqwest, the browser build uses
//! the Fetch API through gloo-net.

use async_trait::async_trait;
use serde_json::Value;

use super::error::{ApiError, ApiResult};

/// HTTP verbs the backend contract uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved outbound request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base URL, including any query string
    pub path: String,
    /// Absolute URL
    pub url: String,
    pub body: Option<Value>,
    /// Bearer credential, when a session token exists
    pub bearer: Option<String>,
}

/// One request, one response
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value>;
}

/// Turn a status code and raw body into the client's result type.
///
/// Empty 2xx bodies decode as `null`.
pub fn interpret_response(status: u16, body: &str) -> ApiResult<Value> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body));
    }

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(body).map_err(ApiError::from)
}
