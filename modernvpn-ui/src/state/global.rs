//! Global Application State
//!
//! The backend client is the only state shared across pages. Everything
//! else is page-local and dies with the route.

use leptos::*;

use modernvpn::api::ApiClient;
use modernvpn::session::Session;

use crate::api::{get_api_base, GlooTransport};
use crate::state::session::LocalStorageSessionStore;

/// Context provided to all components
#[derive(Clone)]
pub struct AppContext {
    pub api: ApiClient,
}

/// Provide the app context to the component tree
pub fn provide_app_context() {
    let session = Session::new(LocalStorageSessionStore::new());
    let api = ApiClient::new(&get_api_base(), session, GlooTransport);

    web_sys::console::log_1(&format!("ModernVPN backend: {}", api.base_url()).into());

    provide_context(AppContext { api });
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found")
}
