//! Append-only audit trail view.
//!
//! Entries are kept newest first. Nothing here edits or removes an entry once
//! it has been appended.

use chrono::{DateTime, Utc};
use std::net::IpAddr;

use crate::entities::{AuditEntry, Session, ValueChange};
use crate::enums::{AuditAction, AuditEntity, Severity};
use crate::errors::CoreError;
use crate::filter::{self, AuditFilter};
use crate::ids::{self, PREFIX_AUDIT};

const ENTITY: &str = "audit entry";

/// Details of an event about to be recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    pub action: AuditAction,
    pub entity: AuditEntity,
    pub entity_id: String,
    pub entity_name: String,
    pub location: String,
    pub ip_address: IpAddr,
    pub details: String,
    pub change: Option<ValueChange>,
    pub severity: Severity,
    pub success: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    /// Wrap existing entries, ordering them newest first.
    #[must_use]
    pub fn new(mut entries: Vec<AuditEntry>) -> Self {
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no entry has this id.
    pub fn get(&self, id: &str) -> Result<&AuditEntry, CoreError> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| CoreError::not_found(ENTITY, id))
    }

    #[must_use]
    pub fn filtered(&self, predicate: &AuditFilter) -> Vec<AuditEntry> {
        filter::filter(&self.entries, predicate)
    }

    /// Record `event` performed by `actor` at `at` under the next free id.
    pub fn record(&mut self, event: AuditEvent, actor: &Session, at: DateTime<Utc>) -> &AuditEntry {
        let id = ids::next_id(PREFIX_AUDIT, self.entries.iter().map(|e| e.id.as_str()));
        let entry = AuditEntry {
            id,
            timestamp: at,
            action: event.action,
            entity: event.entity,
            entity_id: event.entity_id,
            entity_name: event.entity_name,
            user: actor.user_name.clone(),
            user_role: Some(actor.role),
            location: event.location,
            ip_address: event.ip_address,
            details: event.details,
            change: event.change,
            severity: event.severity,
            success: event.success,
        };
        tracing::debug!(id = %entry.id, action = %entry.action, "audit entry recorded");
        let position = self
            .entries
            .iter()
            .position(|e| e.timestamp <= entry.timestamp)
            .unwrap_or(self.entries.len());
        self.entries.insert(position, entry);
        &self.entries[position]
    }
}
