//! # mams-config
//!
//! Layered configuration loading for M.A.M.S. using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MAMS_*` prefix, `__` as separator)
//! 2. Project-level `.mams/config.toml`
//! 3. User-level `~/.config/mams/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MAMS_API__BASE_URL` -> `api.base_url`,
//! `MAMS_WORKFLOW__APPROVAL_POLICY` -> `workflow.approval_policy`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use mams_config::MamsConfig;
//!
//! let config = MamsConfig::load().expect("config");
//! println!("Registering against {}", config.api.users_url());
//! ```

mod api;
mod error;
mod general;
mod session;
mod workflow;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;
pub use workflow::WorkflowConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every configuration key.
pub const ENV_PREFIX: &str = "MAMS_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MamsConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub workflow: WorkflowConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl MamsConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `.env` files are not read here; the binary loads them before calling this.
    ///
    /// # Errors
    ///
    /// `Figment` when a source fails to parse or a value has the wrong type,
    /// `InvalidValue` when a value parses but is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".mams/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that deserialize but cannot work.
    ///
    /// # Errors
    ///
    /// `InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api.has_http_scheme() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.api.base_url),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.session.fallback_user_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "session.fallback_user_name".into(),
                reason: "must not be blank".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mams").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use mams_core::workflow::ApprovalPolicy;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = MamsConfig::default();
        config.validate().unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.workflow.approval_policy, ApprovalPolicy::Open);
        assert_eq!(config.session.fallback_user_name, "User");
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut config = MamsConfig::default();
        config.general.default_limit = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("general.default_limit"));
    }

    #[test]
    fn schemeless_base_url_is_rejected() {
        let mut config = MamsConfig::default();
        config.api.base_url = "localhost:5000".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "api.base_url"
        ));
    }
}
