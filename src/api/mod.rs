//! ModernVPN Backend API
//!
//! Client side of the backend REST contract.
//!
//! # Endpoints
//!
//! ## Auth
//! - `POST /auth/login` - Exchange credentials for a bearer token
//! - `POST /users/create` - Create an account
//! - `GET /users/me` - Current user
//!
//! ## VPN
//! - `GET /vpn/servers` - Available exit servers
//! - `POST /vpn/assign` - Request a tunnel configuration for a server
//! - `PATCH /usage` - Report data usage
//!
//! ## Ads
//! - `GET /ads?country=CC` - Sponsored ads for a country
//! - `POST /ads/event` - Impression/click analytics
//!
//! # Example
//!
//! ```rust,ignore
//! use modernvpn::api::{ApiClient, HttpTransport};
//! use modernvpn::session::Session;
//!
//! let api = ApiClient::new("http://localhost:8000", Session::in_memory(), HttpTransport::new());
//! let user = api.current_user().await?;
//! ```

mod client;
pub mod dto;
pub mod error;
#[cfg(feature = "native")]
mod http;
#[cfg(test)]
pub(crate) mod mock;
mod transport;

pub use client::{paths, ApiClient};
pub use dto::{
    Ad, AdEvent, AdEventKind, AdEventMetadata, AdId, Country, Credentials, ServerDescriptor,
    TokenResponse, User,
};
pub use error::{ApiError, ApiResult, ErrorBody};
#[cfg(feature = "native")]
pub use http::HttpTransport;
pub use transport::{interpret_response, ApiRequest, Method, Transport};
