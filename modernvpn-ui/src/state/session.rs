//! Browser session storage
//!
//! The bearer token lives in `localStorage` so it survives reloads and is
//! scoped to the page origin.

use modernvpn::session::{SessionError, SessionStore};

const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone)]
pub struct LocalStorageSessionStore {
    key: &'static str,
}

impl LocalStorageSessionStore {
    pub fn new() -> Self {
        Self { key: TOKEN_KEY }
    }

    fn storage() -> Result<web_sys::Storage, SessionError> {
        web_sys::window()
            .ok_or_else(|| SessionError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| SessionError::Unavailable("localStorage disabled".into()))
    }
}

impl Default for LocalStorageSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for LocalStorageSessionStore {
    fn save(&self, token: &str) -> Result<(), SessionError> {
        Self::storage()?
            .set_item(self.key, token)
            .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))
    }

    fn load(&self) -> Result<Option<String>, SessionError> {
        Self::storage()?
            .get_item(self.key)
            .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), SessionError> {
        Self::storage()?
            .remove_item(self.key)
            .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))
    }
}
