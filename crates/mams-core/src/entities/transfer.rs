use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Priority, TransferStatus};

/// Workflow position of a transfer, carrying exactly the fields valid for it.
///
/// A pending request has no approver; a completed one always has both an
/// approver and a completion date. Serialized flat into the owning
/// [`Transfer`] as `status`, `approved_by`, `completed_date`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum TransferState {
    Pending,
    Approved {
        approved_by: String,
    },
    InTransit {
        approved_by: String,
    },
    Completed {
        approved_by: String,
        completed_date: NaiveDate,
    },
    /// Rejected, either straight from pending or after an approval.
    Rejected {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        approved_by: Option<String>,
    },
}

impl TransferState {
    #[must_use]
    pub const fn status(&self) -> TransferStatus {
        match self {
            Self::Pending => TransferStatus::Pending,
            Self::Approved { .. } => TransferStatus::Approved,
            Self::InTransit { .. } => TransferStatus::InTransit,
            Self::Completed { .. } => TransferStatus::Completed,
            Self::Rejected { .. } => TransferStatus::Rejected,
        }
    }

    #[must_use]
    pub fn approved_by(&self) -> Option<&str> {
        match self {
            Self::Pending | Self::Rejected { approved_by: None } => None,
            Self::Approved { approved_by }
            | Self::InTransit { approved_by }
            | Self::Completed { approved_by, .. }
            | Self::Rejected {
                approved_by: Some(approved_by),
            } => Some(approved_by.as_str()),
        }
    }

    #[must_use]
    pub const fn completed_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Completed { completed_date, .. } => Some(*completed_date),
            Self::Pending | Self::Approved { .. } | Self::InTransit { .. } | Self::Rejected { .. } => {
                None
            }
        }
    }
}

/// A request to relocate an asset between two locations.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Transfer {
    pub id: String,
    pub asset_id: String,
    pub asset_name: String,
    pub from_location: String,
    pub to_location: String,
    pub requested_by: String,
    #[serde(flatten)]
    pub state: TransferState,
    pub request_date: NaiveDate,
    pub expected_date: NaiveDate,
    pub reason: String,
    pub priority: Priority,
}

impl Transfer {
    #[must_use]
    pub const fn status(&self) -> TransferStatus {
        self.state.status()
    }

    #[must_use]
    pub fn approved_by(&self) -> Option<&str> {
        self.state.approved_by()
    }

    #[must_use]
    pub const fn completed_date(&self) -> Option<NaiveDate> {
        self.state.completed_date()
    }
}
