use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ReportStatus, ReportType};

/// A generated (or generating) report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Report {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub description: String,
    pub last_generated: NaiveDate,
    pub generated_by: String,
    pub status: ReportStatus,
    /// Output size in bytes; absent until generation finishes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

impl Report {
    /// Human-readable size ("2.4 MB"), or "Pending" while none is known.
    #[must_use]
    pub fn size_label(&self) -> String {
        self.size_bytes.map_or_else(|| "Pending".to_string(), format_size)
    }
}

#[allow(clippy::cast_precision_loss)]
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1_000;
    const MB: u64 = 1_000_000;
    const GB: u64 = 1_000_000_000;
    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
