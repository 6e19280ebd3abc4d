//! Dashboard View
//!
//! Shows the signed-in user, lets them pick an exit server and request a
//! tunnel configuration for it, and reports data usage. The ads widget is
//! composed in by the host.

use std::fmt;

use crate::api::{ApiClient, ServerDescriptor, User};
use crate::fixtures;
use crate::remote_list::{ListSource, Listing};
use crate::session::Session;

use super::cell::ViewCell;
use super::shell::{Route, Shell};

pub const PICK_A_SERVER: &str = "Pick a server";
pub const USAGE_UPDATED: &str = "Usage updated";
pub const USAGE_UPDATE_FAILED: &str = "Usage update failed";

/// Outcome of the most recent connect attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Failed,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::Connecting => "connecting...",
            ConnectionStatus::Connected => "connected ✓",
            ConnectionStatus::Failed => "connection failed",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub user: Option<User>,
    pub servers: Vec<ServerDescriptor>,
    pub servers_source: ListSource,
    selected: Option<String>,
    pub status: ConnectionStatus,
    pub usage: f64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            user: None,
            servers: fixtures::sample_servers(),
            servers_source: ListSource::Fallback,
            selected: None,
            status: ConnectionStatus::Disconnected,
            usage: 0.0,
        }
    }
}

impl DashboardState {
    /// Fresh state with a usage amount already entered
    pub fn with_usage(usage: f64) -> Self {
        Self {
            usage,
            ..Self::default()
        }
    }

    /// The selected descriptor; always one of `servers`
    pub fn selected_server(&self) -> Option<&ServerDescriptor> {
        let id = self.selected.as_deref()?;
        self.servers.iter().find(|s| s.id == id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select a listed server. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) -> bool {
        if self.servers.iter().any(|s| s.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Replace the server list, dropping a selection it no longer contains
    pub fn set_servers(&mut self, listing: Listing<ServerDescriptor>) {
        self.servers = listing.items;
        self.servers_source = listing.source;
        if self.selected_server().is_none() {
            self.selected = None;
        }
    }

    pub fn can_connect(&self) -> bool {
        self.selected.is_some() && self.status != ConnectionStatus::Connecting
    }

    pub fn connect_label(&self) -> &'static str {
        if self.status == ConnectionStatus::Connecting {
            "Connecting..."
        } else {
            "Connect to VPN"
        }
    }

    pub fn welcome(&self) -> Option<String> {
        self.user.as_ref().map(|u| format!("Welcome, {}", u.email))
    }
}

/// Read the usage field. A cleared field counts as zero; anything else
/// that is not a number is refused.
pub fn parse_usage(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return Some(0.0);
    }
    input.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Run the two mount fetches concurrently
pub async fn mount(api: &ApiClient, view: &impl ViewCell<DashboardState>, shell: &dyn Shell) {
    futures_util::join!(load_user(api, view, shell), load_servers(api, view));
}

/// `GET /users/me`. A 401 ends the session.
pub async fn load_user(api: &ApiClient, view: &impl ViewCell<DashboardState>, shell: &dyn Shell) {
    match api.current_user().await {
        Ok(user) => {
            tracing::debug!("Loaded user {}", user.email);
            view.update(|s| s.user = Some(user));
        }
        Err(e) if e.is_unauthorized() => {
            tracing::info!("Session rejected by backend, signing out");
            logout(api.session(), shell);
        }
        Err(e) => tracing::warn!("Failed to load current user: {}", e),
    }
}

/// Paint the sample servers, then swap in the backend's list if it has one
pub async fn load_servers(api: &ApiClient, view: &impl ViewCell<DashboardState>) {
    let servers = fixtures::server_list();
    view.update(|s| s.set_servers(servers.fallback()));

    let listing = servers.load(api).await;
    if listing.source == ListSource::Remote {
        view.update(|s| s.set_servers(listing));
    }
}

pub fn select_server(view: &impl ViewCell<DashboardState>, id: &str) -> bool {
    let mut selected = false;
    view.update(|s| selected = s.select(id));
    if !selected {
        tracing::debug!("Ignoring selection of unlisted server {}", id);
    }
    selected
}

/// `POST /vpn/assign` for the selected server
pub async fn connect(
    api: &ApiClient,
    view: &impl ViewCell<DashboardState>,
    shell: &dyn Shell,
) -> ConnectionStatus {
    let Some(server_id) = view
        .with(|s| s.selected_server().map(|srv| srv.id.clone()))
        .flatten()
    else {
        shell.alert(PICK_A_SERVER);
        return view.with(|s| s.status).unwrap_or_default();
    };

    view.update(|s| s.status = ConnectionStatus::Connecting);

    let status = match api.assign(&server_id).await {
        Ok(config) => {
            tracing::debug!(server = %server_id, config = %config, "Tunnel assigned");
            ConnectionStatus::Connected
        }
        Err(e) => {
            tracing::warn!("Connect to {} failed: {}", server_id, e);
            ConnectionStatus::Failed
        }
    };

    view.update(|s| s.status = status);
    status
}

/// `PATCH /usage` with the entered value
pub async fn report_usage(
    api: &ApiClient,
    view: &impl ViewCell<DashboardState>,
    shell: &dyn Shell,
) -> bool {
    let Some(amount) = view.with(|s| s.usage) else {
        return false;
    };

    match api.report_usage(amount).await {
        Ok(_) => {
            shell.alert(USAGE_UPDATED);
            true
        }
        Err(e) => {
            tracing::warn!("Usage report failed: {}", e);
            shell.alert(USAGE_UPDATE_FAILED);
            false
        }
    }
}

/// Forget the token and reload at the root path
pub fn logout(session: &Session, shell: &dyn Shell) {
    session.sign_out();
    shell.reload_to(Route::Login);
}
