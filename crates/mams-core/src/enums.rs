//! Roles, statuses, categories, and classifications for M.A.M.S.
//!
//! All enums use `kebab-case` serialization via `#[serde(rename_all = "kebab-case")]`
//! so multi-word values read as `in-transit`. Every enum is closed: badge tones,
//! icons, and allow-list checks are exhaustive matches, so adding a variant is a
//! compile-time-checked change. Status enums with a lifecycle provide
//! `allowed_next_states()` to enforce valid transitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

/// Badge colour class a status or classification renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Success,
    Warning,
    Secondary,
    Accent,
    Destructive,
    Muted,
}

impl Tone {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Destructive => "destructive",
            Self::Muted => "muted",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of an authenticated user. Determines menu and page visibility.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    Commander,
    Logistics,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Admin, Self::Commander, Self::Logistics];

    /// Return the string representation stored in the session store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Commander => "commander",
            Self::Logistics => "logistics",
        }
    }

    /// Capitalized form used in greetings ("Commander Access").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Commander => "Commander",
            Self::Logistics => "Logistics",
        }
    }

    /// Parse a stored role value. Unknown values yield `None`.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AssetCategory
// ---------------------------------------------------------------------------

/// Category of a tracked asset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum AssetCategory {
    Vehicle,
    Weapon,
    Ammunition,
    Equipment,
    Communication,
}

impl AssetCategory {
    pub const ALL: [Self; 5] = [
        Self::Vehicle,
        Self::Weapon,
        Self::Ammunition,
        Self::Equipment,
        Self::Communication,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vehicle => "vehicle",
            Self::Weapon => "weapon",
            Self::Ammunition => "ammunition",
            Self::Equipment => "equipment",
            Self::Communication => "communication",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Vehicle => "car",
            Self::Weapon => "swords",
            Self::Ammunition => "target",
            Self::Equipment => "wrench",
            Self::Communication => "radio",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AssetStatus
// ---------------------------------------------------------------------------

/// Operational status of an asset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum AssetStatus {
    Active,
    Maintenance,
    Reserved,
    Decommissioned,
}

impl AssetStatus {
    pub const ALL: [Self; 4] = [
        Self::Active,
        Self::Maintenance,
        Self::Reserved,
        Self::Decommissioned,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Maintenance => "maintenance",
            Self::Reserved => "reserved",
            Self::Decommissioned => "decommissioned",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Success,
            Self::Maintenance => Tone::Warning,
            Self::Reserved => Tone::Secondary,
            Self::Decommissioned => Tone::Destructive,
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Active => "check-circle",
            Self::Maintenance => "alert-triangle",
            Self::Reserved => "clock",
            Self::Decommissioned => "x-circle",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// Physical condition of an asset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Condition {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TransferStatus
// ---------------------------------------------------------------------------

/// Status of a transfer request through its approval workflow.
///
/// ```text
/// pending → approved → in-transit → completed
///         → rejected
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum TransferStatus {
    Pending,
    Approved,
    InTransit,
    Completed,
    Rejected,
}

impl TransferStatus {
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Approved,
        Self::InTransit,
        Self::Completed,
        Self::Rejected,
    ];

    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved => &[Self::InTransit],
            Self::InTransit => &[Self::Completed],
            Self::Completed | Self::Rejected => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.allowed_next_states().is_empty()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::InTransit => "in-transit",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Pending => Tone::Warning,
            Self::Approved | Self::Completed => Tone::Success,
            Self::InTransit => Tone::Secondary,
            Self::Rejected => Tone::Destructive,
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Pending => "clock",
            Self::Approved | Self::Completed => "check-circle",
            Self::InTransit => "truck",
            Self::Rejected => "x-circle",
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Urgency of a transfer request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Urgent => Tone::Destructive,
            Self::High => Tone::Warning,
            Self::Medium => Tone::Secondary,
            Self::Low => Tone::Muted,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditAction
// ---------------------------------------------------------------------------

/// Action recorded in an audit entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Transfer,
    View,
    Login,
    Logout,
}

impl AuditAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Transfer => "transfer",
            Self::View => "view",
            Self::Login => "login",
            Self::Logout => "logout",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Create => Tone::Success,
            Self::Update => Tone::Secondary,
            Self::Delete => Tone::Destructive,
            Self::Transfer => Tone::Accent,
            Self::View | Self::Login | Self::Logout => Tone::Muted,
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Create => "plus",
            Self::Update => "edit",
            Self::Delete => "trash-2",
            Self::Transfer => "arrow-right-left",
            Self::View => "eye",
            Self::Login | Self::Logout => "user",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditEntity
// ---------------------------------------------------------------------------

/// Kind of entity an audit entry refers to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum AuditEntity {
    Asset,
    User,
    Transfer,
    Report,
    System,
}

impl AuditEntity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::User => "user",
            Self::Transfer => "transfer",
            Self::Report => "report",
            Self::System => "system",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Asset => "shield",
            Self::User => "user",
            Self::Transfer => "arrow-right-left",
            Self::Report => "file-text",
            Self::System => "history",
        }
    }
}

impl fmt::Display for AuditEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Audit-entry classification, independent of the action type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Low => Tone::Success,
            Self::Medium => Tone::Secondary,
            Self::High => Tone::Warning,
            Self::Critical => Tone::Destructive,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReportType
// ---------------------------------------------------------------------------

/// Subject area of a report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ReportType {
    Asset,
    Transfer,
    Maintenance,
    Financial,
    Security,
}

impl ReportType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Transfer => "transfer",
            Self::Maintenance => "maintenance",
            Self::Financial => "financial",
            Self::Security => "security",
        }
    }

    /// Title given to a freshly generated report of this type.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Asset => "Asset Inventory Report",
            Self::Transfer => "Transfer Activity Report",
            Self::Maintenance => "Maintenance Schedule Report",
            Self::Financial => "Financial Summary Report",
            Self::Security => "Security Audit Report",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Asset => "shield",
            Self::Transfer => "truck",
            Self::Maintenance => "alert-triangle",
            Self::Financial => "dollar-sign",
            Self::Security => "users",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReportStatus
// ---------------------------------------------------------------------------

/// Status of a report.
///
/// ```text
/// generating → ready
///            → error
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ReportStatus {
    Ready,
    Generating,
    Error,
}

impl ReportStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Generating => &[Self::Ready, Self::Error],
            Self::Ready | Self::Error => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Generating => "generating",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Ready => Tone::Success,
            Self::Generating => Tone::Warning,
            Self::Error => Tone::Destructive,
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReportPeriod
// ---------------------------------------------------------------------------

/// Time window a generated report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReportPeriod {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl ReportPeriod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weekly => "Last 7 Days",
            Self::Monthly => "Last 30 Days",
            Self::Quarterly => "Last 3 Months",
            Self::Yearly => "Last Year",
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
