//! File-backed session store
//!
//! The native counterpart of browser local storage: one file holding the
//! token, created with owner-only permissions on unix.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{SessionError, SessionStore};

/// Token persisted to a single file
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the user's local data directory
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .map(|p| p.join("modernvpn").join("token"))
            .unwrap_or_else(|| PathBuf::from("./.modernvpn_token"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, token: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path)?;
        file.write_all(token.as_bytes())?;
        file.sync_all()?;

        tracing::debug!("Wrote session token to {:?}", self.path);
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_absent() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("token"));
        assert_eq!(store.load().unwrap(), None);
        // Clearing nothing is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_survives_a_new_store_instance() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("token");

        FileSessionStore::new(&path).save("eyJhbGciOi").unwrap();

        let reopened = FileSessionStore::new(&path);
        assert_eq!(reopened.load().unwrap().as_deref(), Some("eyJhbGciOi"));

        reopened.clear().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_save_replaces_previous_token() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("token"));
        store.save("a-much-longer-first-token").unwrap();
        store.save("short").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("short"));
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("token"));
        store.save("secret").unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0);
    }
}
