//! Cross-cutting error types for M.A.M.S.
//!
//! Domain-specific errors (`AuthError`, `ConfigError`) live in their own
//! crates. They converge into `anyhow` in `mams-cli`.

use thiserror::Error;

use crate::enums::Role;

/// Errors raised by the in-memory views and workflows.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Record lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// The acting role may not perform the operation.
    #[error("Role '{role}' may not {operation}")]
    Forbidden { role: Role, operation: String },

    /// A record with the same identifier is already present.
    #[error("Duplicate identifier: {entity_type} {id}")]
    Duplicate { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub(crate) fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}
