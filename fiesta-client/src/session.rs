//! Session identifier storage
//!
//! The anonymous user id lives in a small JSON file so the same remote cart
//! is picked up again after a restart.

use crate::ClientResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed session file name inside the session directory
pub const SESSION_FILE: &str = "fiesta-userid.json";

/// Persisted session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    /// Milliseconds since epoch
    pub created_at: i64,
}

impl Session {
    fn generate() -> Self {
        Self {
            user_id: shared::util::new_id(),
            created_at: shared::util::now_millis(),
        }
    }
}

/// File-backed session storage
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SESSION_FILE),
        }
    }

    /// Read the stored session; `None` when missing or unreadable
    pub fn load(&self) -> Option<Session> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Session>(&json) {
            Ok(session) if !session.user_id.trim().is_empty() => Some(session),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring corrupt session file");
                None
            }
        }
    }

    /// Return the stored user id, or generate and persist a new one
    ///
    /// The flag is `true` when a new id was created.
    pub fn load_or_create(&self) -> ClientResult<(String, bool)> {
        if let Some(session) = self.load() {
            return Ok((session.user_id, false));
        }
        let session = Session::generate();
        self.save(&session)?;
        tracing::info!(user_id = %session.user_id, "Created new session");
        Ok((session.user_id, true))
    }

    pub fn save(&self, session: &Session) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn delete(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_create_is_stable() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("nested"));

        let (first, created) = store.load_or_create().unwrap();
        assert!(created);
        assert_eq!(first.len(), 36);

        let (second, created) = store.load_or_create().unwrap();
        assert!(!created);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_and_corrupt_files() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        assert!(store.load().is_none());

        fs::write(store.path(), "not json").unwrap();
        assert!(store.load().is_none());

        let (id, created) = store.load_or_create().unwrap();
        assert!(created);
        assert_eq!(store.load().unwrap().user_id, id);
    }

    #[test]
    fn test_delete() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        store.load_or_create().unwrap();
        assert!(store.exists());
        store.delete().unwrap();
        assert!(!store.exists());
        store.delete().unwrap();
    }

    #[test]
    fn test_unwritable_dir_is_io_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain-file");
        fs::write(&file, "").unwrap();

        let store = SessionStore::new(&file);
        assert!(matches!(store.load_or_create(), Err(ClientError::Io(_))));
        assert!(store.load().is_none());
    }
}
