use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::enums::{AuditAction, AuditEntity, Role, Severity};

/// Before/after pair captured for an audited change. Either side may be
/// absent (a creation has no previous value).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValueChange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
}

/// An append-only audit trail entry. Never mutated once created.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub action: AuditAction,
    pub entity: AuditEntity,
    pub entity_id: String,
    pub entity_name: String,
    pub user: String,
    /// Role of the actor; `None` when the actor could not be identified.
    pub user_role: Option<Role>,
    pub location: String,
    pub ip_address: IpAddr,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<ValueChange>,
    pub severity: Severity,
    pub success: bool,
}
