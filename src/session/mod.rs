//! Session Store
//!
//! Holds the bearer token between runs. The token is the only piece of
//! client state that outlives a view: it is written at login, read by
//! every API call and cleared at logout or when the backend answers 401.
//!
//! Views never touch storage directly; they go through [`Session`], which
//! is passed explicitly to every component that talks to the backend.

#[cfg(feature = "native")]
mod file;
mod memory;

#[cfg(feature = "native")]
pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use std::rc::Rc;
use thiserror::Error;

/// Durable token storage
pub trait SessionStore {
    /// Persist the token, replacing any previous one
    fn save(&self, token: &str) -> Result<(), SessionError>;

    /// Read the stored token
    fn load(&self) -> Result<Option<String>, SessionError>;

    /// Forget the stored token
    fn clear(&self) -> Result<(), SessionError>;
}

/// Session storage errors
#[derive(Error, Debug)]
pub enum SessionError {
    /// Filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing storage missing or refused the operation
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),
}

/// Shared handle to the session store
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    /// Session backed by process memory only
    pub fn in_memory() -> Self {
        Self::new(MemorySessionStore::default())
    }

    /// Current bearer token; unreadable storage counts as signed out
    pub fn token(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("Failed to read session token: {}", e);
                None
            }
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }

    /// Store a freshly issued token
    pub fn sign_in(&self, token: &str) -> Result<(), SessionError> {
        self.store.save(token)?;
        tracing::info!("Session token stored");
        Ok(())
    }

    /// Drop the token; failures are logged, never surfaced
    pub fn sign_out(&self) {
        match self.store.clear() {
            Ok(()) => tracing::info!("Session token cleared"),
            Err(e) => tracing::warn!("Failed to clear session token: {}", e),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("signed_in", &self.is_signed_in())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn save(&self, _token: &str) -> Result<(), SessionError> {
            Err(SessionError::Unavailable("read-only".into()))
        }

        fn load(&self) -> Result<Option<String>, SessionError> {
            Err(SessionError::Unavailable("read-only".into()))
        }

        fn clear(&self) -> Result<(), SessionError> {
            Err(SessionError::Unavailable("read-only".into()))
        }
    }

    #[test]
    fn test_sign_in_and_out() {
        let session = Session::in_memory();
        assert!(!session.is_signed_in());

        session.sign_in("tok").unwrap();
        assert_eq!(session.token().as_deref(), Some("tok"));

        session.sign_out();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_clones_share_the_store() {
        let session = Session::in_memory();
        let other = session.clone();
        session.sign_in("shared").unwrap();
        assert_eq!(other.token().as_deref(), Some("shared"));
    }

    #[test]
    fn test_broken_store_reads_as_signed_out() {
        let session = Session::new(BrokenStore);
        assert_eq!(session.token(), None);
        assert!(session.sign_in("tok").is_err());
        // Must not panic
        session.sign_out();
    }
}
