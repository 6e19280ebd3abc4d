//! reqwest transport
//!
//! Native HTTP transport. No timeout and no retries.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::error::{ApiError, ApiResult};
use super::transport::{interpret_response, ApiRequest, Method, Transport};

/// Transport over a shared reqwest client
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Patch => self.client.patch(&request.url),
        };

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_connect() {
                ApiError::Network(format!("Cannot reach {}: {}", request.url, e))
            } else {
                ApiError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        interpret_response(status, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::{Ad, Credentials, ServerDescriptor};
    use crate::api::{paths, ApiClient};
    use crate::session::Session;
    use axum::{
        extract::Query,
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Response},
        routing::{get, patch, post},
        Json, Router,
    };
    use serde_json::json;
    use std::collections::HashMap;

    async fn login(Json(body): Json<Value>) -> Response {
        if body["password"] == "hunter2" {
            Json(json!({"access_token": "issued-token", "token_type": "bearer"})).into_response()
        } else {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"detail": "Incorrect email or password"})),
            )
                .into_response()
        }
    }

    async fn me(headers: HeaderMap) -> Response {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if auth == "Bearer issued-token" {
            Json(json!({"email": "ada@example.com", "id": 1})).into_response()
        } else {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"detail": "Not authenticated"})),
            )
                .into_response()
        }
    }

    async fn servers() -> Json<Value> {
        Json(json!([
            {"id": "fra-1", "region": "Frankfurt", "ip": "10.0.0.1", "status": "online"}
        ]))
    }

    async fn usage(Json(body): Json<Value>) -> StatusCode {
        if body["dataUsed"].is_number() {
            StatusCode::NO_CONTENT
        } else {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }

    async fn ads(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        let country = params.get("country").cloned().unwrap_or_default();
        Json(json!([
            {"id": 42, "title": format!("Deal for {}", country), "link": "https://ads.test/42", "payout": "$0.90 CPC"}
        ]))
    }

    async fn spawn_backend() -> String {
        let app = Router::new()
            .route("/auth/login", post(login))
            .route("/users/me", get(me))
            .route("/vpn/servers", get(servers))
            .route("/usage", patch(usage))
            .route("/ads", get(ads));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_login_then_authenticated_call() {
        let base = spawn_backend().await;
        let session = Session::in_memory();
        let api = ApiClient::new(&base, session.clone(), HttpTransport::new());

        let token = api
            .login(&Credentials::new("ada@example.com", "hunter2"))
            .await
            .unwrap()
            .into_token()
            .unwrap();
        session.sign_in(&token).unwrap();

        let user = api.current_user().await.unwrap();
        assert_eq!(user.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_rejected_login_carries_detail() {
        let base = spawn_backend().await;
        let api = ApiClient::new(&base, Session::in_memory(), HttpTransport::new());

        let err = api
            .login(&Credentials::new("ada@example.com", "wrong"))
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message("Login failed"), "Incorrect email or password");
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let base = spawn_backend().await;
        let api = ApiClient::new(&base, Session::in_memory(), HttpTransport::new());

        let err = api.current_user().await.unwrap_err();
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn test_lists_and_empty_patch_response() {
        let base = spawn_backend().await;
        let api = ApiClient::new(&base, Session::in_memory(), HttpTransport::new());

        let servers: Vec<ServerDescriptor> = api.fetch_list(paths::SERVERS).await.unwrap();
        assert_eq!(servers[0].id, "fra-1");

        let ads: Vec<Ad> = api.fetch_list(&paths::ads_for("US")).await.unwrap();
        assert_eq!(ads[0].title, "Deal for US");
        assert_eq!(ads[0].payout_rate.as_deref(), Some("$0.90 CPC"));

        assert_eq!(api.report_usage(12.5).await.unwrap(), Value::Null);
    }

    #[tokio::test]
    async fn test_unknown_route_is_status_error() {
        let base = spawn_backend().await;
        let api = ApiClient::new(&base, Session::in_memory(), HttpTransport::new());

        let err = api.assign("fra-1").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404 | 405, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = ApiClient::new(
            &format!("http://{}", addr),
            Session::in_memory(),
            HttpTransport::new(),
        );
        let err = api.current_user().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
