//! String key/value session storage.
//!
//! The file store keeps one JSON object at `~/.mams/session.json` (or a
//! configured path), with the directory at `0700` and the file at `0600` on
//! Unix. A missing file reads as an empty store; an unreadable or corrupt one
//! is logged and treated as empty so a fresh login can overwrite it.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

pub const KEY_USER_ROLE: &str = "userRole";
pub const KEY_USER_NAME: &str = "userName";
pub const KEY_TOKEN: &str = "token";

const SESSION_DIR_NAME: &str = ".mams";
const SESSION_FILE_NAME: &str = "session.json";

/// Persistent string-valued key/value store holding the session.
pub trait SessionStore {
    /// # Errors
    ///
    /// `StoreError` if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, AuthError>;

    /// # Errors
    ///
    /// `StoreError` if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), AuthError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// `StoreError` if the backing storage cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), AuthError>;
}

// ---------------------------------------------------------------------------
// MemorySessionStore
// ---------------------------------------------------------------------------

/// In-process store for tests and embedding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySessionStore {
    entries: BTreeMap<String, String>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AuthError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), AuthError> {
        self.entries.remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FileSessionStore
// ---------------------------------------------------------------------------

/// JSON-object file store.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.mams/session.json`.
    ///
    /// # Errors
    ///
    /// `StoreError` if the home directory cannot be determined.
    pub fn at_default_path() -> Result<Self, AuthError> {
        dirs::home_dir()
            .map(|home| Self::new(home.join(SESSION_DIR_NAME).join(SESSION_FILE_NAME)))
            .ok_or_else(|| {
                AuthError::StoreError("home directory not found: cannot store session".into())
            })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(error) => {
                tracing::warn!(%error, path = %self.path.display(), "session file unreadable; treating as empty");
                return BTreeMap::new();
            }
        };
        if raw.trim().is_empty() {
            return BTreeMap::new();
        }
        serde_json::from_str(&raw).unwrap_or_else(|error| {
            tracing::warn!(%error, path = %self.path.display(), "session file corrupt; treating as empty");
            BTreeMap::new()
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    AuthError::StoreError(format!("mkdir {}: {e}", parent.display()))
                })?;
                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                        tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                    }
                }
            }
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| AuthError::StoreError(format!("encode session: {e}")))?;
        fs::write(&self.path, json)
            .map_err(|e| AuthError::StoreError(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::StoreError(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.read_all().remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AuthError> {
        let mut entries = self.read_all();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), AuthError> {
        let mut entries = self.read_all();
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_all(&entries)
    }
}
