//! Connection settings for `redboard`.
//!
//! One persisted JSON record (`base_url`, `api_key`, `user_id`) at a
//! known path, plus a change-notification channel. Path resolution
//! (highest wins):
//! 1. `REDBOARD_CONFIG` environment variable
//! 2. Platform config dir (`~/.config/redboard/config.json` on Linux)
//!
//! Notification is a single subscription interface: every save or clear
//! bumps a generation counter; subscribers re-read the file on each
//! tick. No format validation happens locally - a connection proves
//! itself only by a successful remote call.

use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "REDBOARD_CONFIG";

const CONFIG_FILENAME: &str = "config.json";

/// The persisted connection record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub user_id: String,
}

impl Connection {
    /// Usable means both the API key and the user id are non-empty
    /// after trimming. Anything less forces demo mode.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.user_id.trim().is_empty()
    }
}

/// Persisted config record with change notification.
///
/// Clones share the same notification channel, so a save through one
/// handle wakes subscribers obtained from any other.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    changes: Arc<watch::Sender<u64>>,
}

impl ConfigStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            changes: Arc::new(watch::channel(0).0),
        }
    }

    /// Resolve the store from `REDBOARD_CONFIG` or the platform config
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory can be determined for
    /// this platform.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(Self::new(PathBuf::from(path)));
        }
        let dirs = directories::ProjectDirs::from("", "", "redboard").ok_or_else(|| {
            BoardError::Config("cannot determine a config directory for this platform".to_string())
        })?;
        Ok(Self::new(dirs.config_dir().join(CONFIG_FILENAME)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted record. Absent file is `Ok(None)`; an
    /// unreadable or corrupt file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<Connection>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Persist the record (temp file + rename) and notify subscribers.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self, conn: &Connection) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(conn)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "saved connection settings");
        self.notify();
        Ok(())
    }

    /// Remove the persisted record and notify subscribers.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        self.notify();
        Ok(())
    }

    /// Subscribe to change notifications. The receiver yields a
    /// generation counter; the current value counts as seen, so only
    /// future saves wake the subscriber.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    fn notify(&self) {
        self.changes.send_modify(|generation| *generation += 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::new(dir.path().join("config.json"))
    }

    #[test]
    fn load_returns_none_when_absent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let conn = Connection {
            base_url: "https://tracker.example".to_string(),
            api_key: "abc123".to_string(),
            user_id: "42".to_string(),
        };
        store.save(&conn).unwrap();
        assert_eq!(store.load().unwrap(), Some(conn));
    }

    #[test]
    fn clear_removes_the_record() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&Connection::default()).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn usable_requires_api_key_and_user_id() {
        let mut conn = Connection::default();
        assert!(!conn.is_usable());
        conn.api_key = "abc".to_string();
        assert!(!conn.is_usable());
        conn.user_id = "  ".to_string();
        assert!(!conn.is_usable(), "whitespace-only user id is unusable");
        conn.user_id = "42".to_string();
        assert!(conn.is_usable());
    }

    #[tokio::test]
    async fn save_notifies_subscribers_including_clones() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let clone = store.clone();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        clone.save(&Connection::default()).unwrap();
        assert!(rx.has_changed().unwrap());
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 1);
    }
}
