//! # ModernVPN
//!
//! Client core for the ModernVPN dashboard: sign in, pick an exit server,
//! request a tunnel configuration, report usage and browse sponsored ads.
//!
//! The crate is platform-neutral. The browser app (`modernvpn-ui`) and the
//! `modernvpn` command-line tool both drive the same view controllers and
//! differ only in their [`api::Transport`], [`session::SessionStore`] and
//! [`views::Shell`].
//!
//! ## Modules
//!
//! - [`api`]: Backend client and wire types
//! - [`session`]: Bearer token storage
//! - [`remote_list`]: Backend lists with sample-data fallback
//! - [`views`]: Login, registration, dashboard and ads controllers
//! - [`config`]: TOML + environment configuration (native)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use modernvpn::api::{ApiClient, HttpTransport};
//! use modernvpn::session::{FileSessionStore, Session};
//! use modernvpn::views::{dashboard, LocalView};
//!
//! # async fn run(shell: &dyn modernvpn::views::Shell) {
//! let session = Session::new(FileSessionStore::default());
//! let api = ApiClient::new("http://localhost:8000", session, HttpTransport::new());
//!
//! let view = LocalView::<dashboard::DashboardState>::default();
//! dashboard::mount(&api, &view, shell).await;
//! # }
//! ```

pub mod api;
#[cfg(feature = "native")]
pub mod config;
pub mod fixtures;
#[cfg(feature = "native")]
pub mod logging;
pub mod remote_list;
pub mod session;
pub mod views;

// Re-export top-level types for convenience
pub use api::{
    Ad, AdEvent, AdEventKind, AdId, ApiClient, ApiError, ApiResult, Country, Credentials,
    ServerDescriptor, Transport, User,
};

#[cfg(feature = "native")]
pub use api::HttpTransport;

pub use session::{MemorySessionStore, Session, SessionError, SessionStore};

#[cfg(feature = "native")]
pub use session::FileSessionStore;

pub use remote_list::{ListSource, Listing, RemoteList};

pub use views::{LocalView, Route, Shell, ViewCell};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
