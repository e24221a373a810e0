use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// The signed-in user as every view sees it.
///
/// Produced by `mams-auth` from the session store and handed explicitly to
/// view-level operations.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub user_name: String,
}

impl Session {
    #[must_use]
    pub fn new(role: Role, user_name: impl Into<String>) -> Self {
        Self {
            role,
            user_name: user_name.into(),
        }
    }

    /// Greeting shown on the dashboard header.
    #[must_use]
    pub fn greeting(&self) -> String {
        format!(
            "Welcome back, {} \u{2022} {} Access",
            self.user_name,
            self.role.label()
        )
    }
}

/// Outcome of resolving the stored session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Authenticated(Session),
    /// No usable role stored; protected views redirect to login.
    Unauthenticated,
}

impl SessionState {
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Unauthenticated => None,
        }
    }

    #[must_use]
    pub fn into_session(self) -> Option<Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Unauthenticated => None,
        }
    }
}
