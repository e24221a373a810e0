//! Backend API configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Root URL of the user registration backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Endpoint new accounts are posted to.
    #[must_use]
    pub fn users_url(&self) -> String {
        format!("{}/api/users", self.base_url.trim_end_matches('/'))
    }

    pub(crate) fn has_http_scheme(&self) -> bool {
        self.base_url.starts_with("http://") || self.base_url.starts_with("https://")
    }
}
