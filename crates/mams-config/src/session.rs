//! Session store configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_fallback_user_name() -> String {
    "User".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Session file location. Empty means `~/.mams/session.json`.
    #[serde(default)]
    pub store_path: String,

    /// Display name used when a session has a role but no stored name.
    #[serde(default = "default_fallback_user_name")]
    pub fallback_user_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store_path: String::new(),
            fallback_user_name: default_fallback_user_name(),
        }
    }
}

impl SessionConfig {
    /// Where the session file lives, or `None` if no home directory is known
    /// and no explicit path is configured.
    #[must_use]
    pub fn resolved_store_path(&self) -> Option<PathBuf> {
        if self.store_path.is_empty() {
            dirs::home_dir().map(|home| home.join(".mams").join("session.json"))
        } else {
            Some(PathBuf::from(&self.store_path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = SessionConfig {
            store_path: "/tmp/mams-session.json".into(),
            ..SessionConfig::default()
        };
        assert_eq!(
            config.resolved_store_path(),
            Some(PathBuf::from("/tmp/mams-session.json"))
        );
    }

    #[test]
    fn default_path_is_under_home() {
        let config = SessionConfig::default();
        if let Some(path) = config.resolved_store_path() {
            assert!(path.ends_with(".mams/session.json"));
        }
        assert_eq!(config.fallback_user_name, "User");
    }
}
