//! Backend API Client
//!
//! The single call site for every backend request. It resolves paths
//! against the configured base URL and attaches the session's bearer
//! token; absence of a token is never pre-checked, the backend decides.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::rc::Rc;

use super::dto::{
    Ad, AdEvent, AssignRequest, Country, Credentials, ServerDescriptor, TokenResponse,
    UsageReport, User,
};
use super::error::{ApiError, ApiResult};
use super::transport::{ApiRequest, Method, Transport};
use crate::session::Session;

/// Backend endpoint paths
pub mod paths {
    pub const LOGIN: &str = "/auth/login";
    pub const CREATE_USER: &str = "/users/create";
    pub const CURRENT_USER: &str = "/users/me";
    pub const SERVERS: &str = "/vpn/servers";
    pub const ASSIGN: &str = "/vpn/assign";
    pub const USAGE: &str = "/usage";
    pub const ADS: &str = "/ads";
    pub const AD_EVENT: &str = "/ads/event";

    /// Country-filtered ad listing
    pub fn ads_for(country_code: &str) -> String {
        format!("{}?country={}", ADS, urlencoding::encode(country_code))
    }
}

/// Backend client; cheap to clone
#[derive(Clone)]
pub struct ApiClient {
    base_url: Rc<str>,
    session: Session,
    transport: Rc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Session, transport: impl Transport + 'static) -> Self {
        Self {
            base_url: normalize_base(base_url).into(),
            session,
            transport: Rc::new(transport),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // ============ Verbs ============

    pub async fn get(&self, path: &str) -> ApiResult<Value> {
        self.call(Method::Get, path, None).await
    }

    pub async fn post(&self, path: &str, body: Option<Value>) -> ApiResult<Value> {
        self.call(Method::Post, path, body).await
    }

    pub async fn patch(&self, path: &str, body: Option<Value>) -> ApiResult<Value> {
        self.call(Method::Patch, path, body).await
    }

    async fn call(&self, method: Method, path: &str, body: Option<Value>) -> ApiResult<Value> {
        let request = ApiRequest {
            method,
            path: path.to_string(),
            url: format!("{}{}", self.base_url, path),
            body,
            bearer: self.session.token(),
        };

        tracing::debug!(
            method = %method,
            path = %path,
            authenticated = request.bearer.is_some(),
            "API request"
        );

        let result = self.transport.send(request).await;

        if let Err(e) = &result {
            tracing::debug!(method = %method, path = %path, error = %e, "API request failed");
        }

        result
    }

    // ============ Endpoints ============

    /// `POST /auth/login`
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<TokenResponse> {
        let value = self.post(paths::LOGIN, Some(to_body(credentials)?)).await?;
        decode(value)
    }

    /// `POST /users/create`; the success payload is opaque
    pub async fn create_user(&self, credentials: &Credentials) -> ApiResult<Value> {
        self.post(paths::CREATE_USER, Some(to_body(credentials)?)).await
    }

    /// `GET /users/me`
    pub async fn current_user(&self) -> ApiResult<User> {
        decode(self.get(paths::CURRENT_USER).await?)
    }

    /// `GET /vpn/servers`
    pub async fn servers(&self) -> ApiResult<Vec<ServerDescriptor>> {
        self.fetch_list(paths::SERVERS).await
    }

    /// `GET /ads?country=CC`
    pub async fn ads(&self, country: Country) -> ApiResult<Vec<Ad>> {
        self.fetch_list(&paths::ads_for(country.code())).await
    }

    /// `POST /vpn/assign`; returns the opaque tunnel configuration
    pub async fn assign(&self, server_id: &str) -> ApiResult<Value> {
        self.post(paths::ASSIGN, Some(to_body(&AssignRequest { server_id })?))
            .await
    }

    /// `PATCH /usage`
    pub async fn report_usage(&self, data_used: f64) -> ApiResult<Value> {
        self.patch(paths::USAGE, Some(to_body(&UsageReport { data_used })?))
            .await
    }

    /// `POST /ads/event`
    pub async fn ad_event(&self, event: &AdEvent) -> ApiResult<()> {
        self.post(paths::AD_EVENT, Some(to_body(event)?)).await?;
        Ok(())
    }

    /// GET a JSON array; `null` reads as an empty list
    pub async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Vec<T>> {
        match self.get(path).await? {
            Value::Null => Ok(Vec::new()),
            value => decode(value),
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish()
    }
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn to_body<T: Serialize>(value: &T) -> ApiResult<Value> {
    serde_json::to_value(value).map_err(ApiError::from)
}

fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    serde_json::from_value(value).map_err(ApiError::from)
}
