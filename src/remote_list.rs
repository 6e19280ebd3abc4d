//! Remote lists with local fallback
//!
//! Both the server picker and the ads widget show a backend list when one
//! is available and a fixed sample set otherwise. A failed request and an
//! empty list are treated the same way.

use serde::de::DeserializeOwned;

use crate::api::ApiClient;

/// Where the items on screen came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListSource {
    #[default]
    Fallback,
    Remote,
}

impl ListSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListSource::Fallback => "sample",
            ListSource::Remote => "live",
        }
    }
}

/// Items plus their origin
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub source: ListSource,
}

/// An endpoint paired with the sample data shown when it has nothing
#[derive(Debug, Clone)]
pub struct RemoteList<T> {
    endpoint: String,
    fallback: Vec<T>,
}

impl<T: DeserializeOwned + Clone> RemoteList<T> {
    pub fn new(endpoint: impl Into<String>, fallback: Vec<T>) -> Self {
        Self {
            endpoint: endpoint.into(),
            fallback,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The sample set, for painting before the request resolves
    pub fn fallback(&self) -> Listing<T> {
        Listing {
            items: self.fallback.clone(),
            source: ListSource::Fallback,
        }
    }

    /// Fetch the endpoint; anything but a non-empty list yields the fallback
    pub async fn load(&self, api: &ApiClient) -> Listing<T> {
        match api.fetch_list::<T>(&self.endpoint).await {
            Ok(items) if !items.is_empty() => {
                tracing::debug!("{} returned {} items", self.endpoint, items.len());
                Listing {
                    items,
                    source: ListSource::Remote,
                }
            }
            Ok(_) => {
                tracing::debug!("{} returned no items, using sample data", self.endpoint);
                self.fallback()
            }
            Err(e) => {
                tracing::info!("{} unavailable ({}), using sample data", self.endpoint, e);
                self.fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{status, MockTransport};
    use crate::api::{ApiError, Method};
    use crate::session::Session;
    use serde_json::json;

    fn list() -> RemoteList<String> {
        RemoteList::new("/things", vec!["sample".to_string()])
    }

    fn client(mock: &MockTransport) -> ApiClient {
        ApiClient::new("http://backend.test", Session::in_memory(), mock.clone())
    }

    #[tokio::test]
    async fn test_remote_items_replace_fallback() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/things", Ok(json!(["a", "b"])));

        let listing = list().load(&client(&mock)).await;
        assert_eq!(listing.items, vec!["a", "b"]);
        assert_eq!(listing.source, ListSource::Remote);
    }

    #[tokio::test]
    async fn test_empty_failed_and_malformed_use_fallback() {
        let cases = vec![
            Ok(json!([])),
            Ok(serde_json::Value::Null),
            Ok(json!({"unexpected": true})),
            status(503, json!({"detail": "down"})),
            Err(ApiError::Network("refused".into())),
        ];

        for reply in cases {
            let mock = MockTransport::new();
            mock.respond(Method::Get, "/things", reply);

            let listing = list().load(&client(&mock)).await;
            assert_eq!(listing, list().fallback());
            assert_eq!(mock.calls_to("/things"), 1);
        }
    }
}
