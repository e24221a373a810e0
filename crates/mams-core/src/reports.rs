//! Report shelf: listing and the generate/finish lifecycle.
//!
//! ```text
//! generating ──finish(ready)──▶ ready
//!      └──────finish(failed)──▶ error
//! ```

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Report;
use crate::enums::{ReportPeriod, ReportStatus, ReportType};
use crate::errors::CoreError;
use crate::filter::{self, ReportFilter};
use crate::ids::{self, PREFIX_REPORT};

const ENTITY: &str = "report";

/// Parameters chosen when generating a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportRequest {
    pub report_type: ReportType,
    pub period: ReportPeriod,
}

/// How a generation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    Ready { size_bytes: u64 },
    Failed,
}

impl ReportOutcome {
    const fn status(self) -> ReportStatus {
        match self {
            Self::Ready { .. } => ReportStatus::Ready,
            Self::Failed => ReportStatus::Error,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportShelf {
    reports: Vec<Report>,
}

impl ReportShelf {
    #[must_use]
    pub const fn new(reports: Vec<Report>) -> Self {
        Self { reports }
    }

    #[must_use]
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no report has this id.
    pub fn get(&self, id: &str) -> Result<&Report, CoreError> {
        self.reports
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::not_found(ENTITY, id))
    }

    #[must_use]
    pub fn filtered(&self, predicate: &ReportFilter) -> Vec<Report> {
        filter::filter(&self.reports, predicate)
    }

    /// Start generating a report. The new entry is `generating` with no size.
    pub fn generate(&mut self, request: ReportRequest, author: &str, today: NaiveDate) -> &Report {
        let id = ids::next_id(PREFIX_REPORT, self.reports.iter().map(|r| r.id.as_str()));
        let report = Report {
            id,
            name: request.report_type.title().to_string(),
            report_type: request.report_type,
            description: format!(
                "{} covering {}",
                request.report_type.title(),
                request.period.label().to_lowercase()
            ),
            last_generated: today,
            generated_by: author.to_string(),
            status: ReportStatus::Generating,
            size_bytes: None,
        };
        tracing::info!(
            id = %report.id,
            report_type = %report.report_type,
            period = %request.period,
            "report generation started"
        );
        self.reports.push(report);
        let last = self.reports.len() - 1;
        &self.reports[last]
    }

    /// Settle a generating report.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id; `InvalidTransition` if the report is
    /// already `ready` or `error`.
    pub fn finish(&mut self, id: &str, outcome: ReportOutcome) -> Result<&Report, CoreError> {
        let index = self
            .reports
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

        let report = &mut self.reports[index];
        let next = outcome.status();
        if !report.status.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity_type: ENTITY.into(),
                id: id.into(),
                from: report.status.to_string(),
                to: next.to_string(),
            });
        }

        report.status = next;
        if let ReportOutcome::Ready { size_bytes } = outcome {
            report.size_bytes = Some(size_bytes);
        }
        tracing::info!(id, status = %next, "report generation finished");
        Ok(report)
    }
}
