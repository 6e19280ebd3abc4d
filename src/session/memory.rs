//! In-memory session store

use std::cell::RefCell;

use super::{SessionError, SessionStore};

/// Token kept for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
}

impl SessionStore for MemorySessionStore {
    fn save(&self, token: &str) -> Result<(), SessionError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(self.token.borrow().clone())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.token.borrow_mut().take();
        Ok(())
    }
}
