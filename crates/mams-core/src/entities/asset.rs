use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AssetCategory, AssetStatus, Condition};

/// A tracked military asset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub category: AssetCategory,
    pub status: AssetStatus,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub condition: Condition,
    pub last_maintenance: NaiveDate,
    pub next_maintenance: NaiveDate,
    pub serial_number: String,
    pub acquisition_date: NaiveDate,
    /// Value in whole currency units.
    pub value: u64,
}

impl Asset {
    /// Whether scheduled maintenance is due on or before `today`.
    #[must_use]
    pub fn maintenance_due(&self, today: NaiveDate) -> bool {
        self.next_maintenance <= today
    }
}
