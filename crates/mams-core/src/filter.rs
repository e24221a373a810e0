//! Record filter engine.
//!
//! A predicate-set is a conjunction of independent clauses: one free-text
//! clause matched case-insensitively against a record's designated text fields
//! (passing if ANY field matches), plus categorical clauses that are either the
//! `all` wildcard or an exact match on one field.
//!
//! [`filter`] is stable (original relative order is kept) and idempotent.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::entities::{Asset, AuditEntry, Report, Transfer};
use crate::enums::{
    AssetCategory, AssetStatus, AuditAction, AuditEntity, Priority, ReportStatus, ReportType,
    Severity, TransferStatus,
};
use crate::errors::CoreError;

/// Wildcard keyword accepted by every categorical selector.
pub const WILDCARD: &str = "all";

// ---------------------------------------------------------------------------
// Clauses
// ---------------------------------------------------------------------------

/// Categorical clause: either every value passes, or exactly one does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selector<T> {
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T> From<Option<T>> for Selector<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

impl<T: DeserializeOwned> FromStr for Selector<T> {
    type Err = CoreError;

    /// Parse `all` or a kebab-case enum value (`in_transit` is accepted too).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('_', "-");
        if normalized == WILDCARD {
            return Ok(Self::All);
        }
        let json = format!("\"{normalized}\"");
        serde_json::from_str(&json)
            .map(Self::Only)
            .map_err(|_| CoreError::Validation(format!("unknown selector value '{raw}'")))
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(WILDCARD),
            Self::Only(value) => value.fmt(f),
        }
    }
}

/// Free-text clause. An empty query passes every record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// True if the query is empty or occurs in any of `fields`.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        self.is_empty()
            || fields
                .into_iter()
                .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

impl From<&str> for TextQuery {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}

impl From<Option<&str>> for TextQuery {
    fn from(query: Option<&str>) -> Self {
        query.map(Self::new).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// A predicate-set over one record type.
pub trait RecordFilter {
    type Record;

    /// Whether `record` passes every clause.
    fn matches(&self, record: &Self::Record) -> bool;
}

/// Stable filter: the records passing `predicate`, in their original order.
///
/// Works over owned records and shared handles alike (`Vec<Asset>`,
/// `Vec<Arc<Transfer>>`).
pub fn filter<R, F>(records: &[R], predicate: &F) -> Vec<R>
where
    R: Borrow<F::Record> + Clone,
    F: RecordFilter,
{
    records
        .iter()
        .filter(|record| predicate.matches(Borrow::<F::Record>::borrow(*record)))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Per-view predicate-sets
// ---------------------------------------------------------------------------

/// Asset inventory filters: search over name and serial number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetFilter {
    pub search: TextQuery,
    pub category: Selector<AssetCategory>,
    pub status: Selector<AssetStatus>,
}

impl RecordFilter for AssetFilter {
    type Record = Asset;

    fn matches(&self, asset: &Asset) -> bool {
        self.search
            .matches_any([asset.name.as_str(), asset.serial_number.as_str()])
            && self.category.admits(&asset.category)
            && self.status.admits(&asset.status)
    }
}

/// Transfer list filters: search over asset name, requester, and reason.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferFilter {
    pub search: TextQuery,
    pub status: Selector<TransferStatus>,
    pub priority: Selector<Priority>,
}

impl RecordFilter for TransferFilter {
    type Record = Transfer;

    fn matches(&self, transfer: &Transfer) -> bool {
        self.search.matches_any([
            transfer.asset_name.as_str(),
            transfer.requested_by.as_str(),
            transfer.reason.as_str(),
        ]) && self.status.admits(&transfer.status())
            && self.priority.admits(&transfer.priority)
    }
}

/// Audit history filters: search over entity name, actor, and details.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditFilter {
    pub search: TextQuery,
    pub action: Selector<AuditAction>,
    pub entity: Selector<AuditEntity>,
    pub severity: Selector<Severity>,
}

impl RecordFilter for AuditFilter {
    type Record = AuditEntry;

    fn matches(&self, entry: &AuditEntry) -> bool {
        self.search.matches_any([
            entry.entity_name.as_str(),
            entry.user.as_str(),
            entry.details.as_str(),
        ]) && self.action.admits(&entry.action)
            && self.entity.admits(&entry.entity)
            && self.severity.admits(&entry.severity)
    }
}

/// Report list filters: search over name and description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub search: TextQuery,
    pub report_type: Selector<ReportType>,
    pub status: Selector<ReportStatus>,
}

impl RecordFilter for ReportFilter {
    type Record = Report;

    fn matches(&self, report: &Report) -> bool {
        self.search
            .matches_any([report.name.as_str(), report.description.as_str()])
            && self.report_type.admits(&report.report_type)
            && self.status.admits(&report.status)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::seed;

    trait HasId {
        fn id(&self) -> &str;
    }
    impl HasId for Asset {
        fn id(&self) -> &str {
            &self.id
        }
    }
    impl HasId for Transfer {
        fn id(&self) -> &str {
            &self.id
        }
    }
    impl HasId for AuditEntry {
        fn id(&self) -> &str {
            &self.id
        }
    }
    impl<T: HasId> HasId for Arc<T> {
        fn id(&self) -> &str {
            self.as_ref().id()
        }
    }

    fn ids<R: HasId>(records: &[R]) -> Vec<String> {
        records.iter().map(|r| r.id().to_string()).collect()
    }

    // --- Selector parsing ---

    #[rstest]
    #[case("all", Selector::All)]
    #[case("ALL", Selector::All)]
    #[case("pending", Selector::Only(TransferStatus::Pending))]
    #[case("in-transit", Selector::Only(TransferStatus::InTransit))]
    #[case("in_transit", Selector::Only(TransferStatus::InTransit))]
    fn selector_parses(#[case] raw: &str, #[case] expected: Selector<TransferStatus>) {
        assert_eq!(raw.parse::<Selector<TransferStatus>>().unwrap(), expected);
    }

    #[test]
    fn selector_rejects_unknown_value() {
        let err = "shipped".parse::<Selector<TransferStatus>>().unwrap_err();
        assert!(err.to_string().contains("unknown selector value 'shipped'"));
    }

    #[test]
    fn selector_displays_wildcard() {
        assert_eq!(Selector::<Severity>::All.to_string(), "all");
        assert_eq!(Selector::Only(Severity::High).to_string(), "high");
    }

    // --- Wildcards ---

    #[test]
    fn all_wildcard_filter_is_identity() {
        let assets = seed::assets();
        assert_eq!(filter(&assets, &AssetFilter::default()), assets);

        let entries = seed::audit_entries();
        assert_eq!(filter(&entries, &AuditFilter::default()), entries);

        let reports = seed::reports();
        assert_eq!(filter(&reports, &ReportFilter::default()), reports);
    }

    #[test]
    fn empty_text_query_behaves_as_wildcard() {
        let assets = seed::assets();
        let predicate = AssetFilter {
            search: TextQuery::new(""),
            ..AssetFilter::default()
        };
        assert_eq!(filter(&assets, &predicate).len(), assets.len());
    }

    // --- Text search ---

    #[rstest]
    #[case("abrams", &["AST-001"])]
    #[case("ABR-2024", &["AST-001"])]
    #[case("2024-00", &["AST-001", "AST-002", "AST-003", "AST-004", "AST-005", "AST-006"])]
    #[case("radio", &["AST-006"])]
    #[case("no such thing", &[])]
    fn asset_search_matches_name_or_serial(#[case] query: &str, #[case] expected: &[&str]) {
        let assets = seed::assets();
        let predicate = AssetFilter {
            search: query.into(),
            ..AssetFilter::default()
        };
        assert_eq!(ids(&filter(&assets, &predicate)), expected);
    }

    #[test]
    fn text_results_contain_query_and_exclusions_do_not() {
        let entries = seed::audit_entries();
        let predicate = AuditFilter {
            search: "admin".into(),
            ..AuditFilter::default()
        };
        let hits = filter(&entries, &predicate);
        assert!(!hits.is_empty());

        let contains = |entry: &AuditEntry| {
            [&entry.entity_name, &entry.user, &entry.details]
                .iter()
                .any(|field| field.to_lowercase().contains("admin"))
        };
        assert!(hits.iter().all(contains));
        assert!(
            entries
                .iter()
                .filter(|e| !hits.contains(e))
                .all(|e| !contains(e))
        );
    }

    // --- Categorical clauses ---

    #[test]
    fn clauses_are_anded() {
        let assets = seed::assets();
        let predicate = AssetFilter {
            category: Selector::Only(AssetCategory::Vehicle),
            status: Selector::Only(AssetStatus::Active),
            ..AssetFilter::default()
        };
        assert_eq!(ids(&filter(&assets, &predicate)), ["AST-001"]);
    }

    #[test]
    fn audit_severity_and_action_filters() {
        let entries = seed::audit_entries();
        let predicate = AuditFilter {
            action: Selector::Only(AuditAction::Login),
            severity: Selector::Only(Severity::High),
            ..AuditFilter::default()
        };
        assert_eq!(ids(&filter(&entries, &predicate)), ["AUD-006"]);

        let system = AuditFilter {
            entity: Selector::Only(AuditEntity::System),
            ..AuditFilter::default()
        };
        assert_eq!(
            ids(&filter(&entries, &system)),
            ["AUD-003", "AUD-006", "AUD-008"]
        );
    }

    #[test]
    fn seeded_transfers_filter_by_status() {
        let transfers: Vec<Arc<Transfer>> = seed::transfers().into_iter().map(Arc::new).collect();

        let pending = TransferFilter {
            status: Selector::Only(TransferStatus::Pending),
            ..TransferFilter::default()
        };
        assert_eq!(ids(&filter(&transfers, &pending)), ["TRF-001"]);

        let all = filter(&transfers, &TransferFilter::default());
        assert_eq!(ids(&all), ["TRF-001", "TRF-002", "TRF-003", "TRF-004"]);
        assert!(all.iter().zip(&transfers).all(|(a, b)| Arc::ptr_eq(a, b)));
    }

    #[test]
    fn report_type_filter() {
        let reports = seed::reports();
        let predicate = ReportFilter {
            report_type: Selector::Only(ReportType::Security),
            ..ReportFilter::default()
        };
        let hits = filter(&reports, &predicate);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "RPT-005");
    }

    // --- Idempotence ---

    #[test]
    fn refiltering_is_idempotent() {
        let entries = seed::audit_entries();
        let predicate = AuditFilter {
            search: "asset".into(),
            severity: Selector::Only(Severity::Low),
            ..AuditFilter::default()
        };
        let once = filter(&entries, &predicate);
        let twice = filter(&once, &predicate);
        assert_eq!(once, twice);
    }
}
