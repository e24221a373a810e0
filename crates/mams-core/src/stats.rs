//! Aggregates for dashboard tiles.
//!
//! Everything here is recomputed from the current in-memory records; nothing
//! is cached.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Asset, AuditEntry, Transfer};
use crate::enums::{AssetCategory, AssetStatus, Severity, TransferStatus};

/// Tally records by a derived key. Every record lands in exactly one bucket,
/// so the counts sum to `records.len()`.
pub fn count_by<R, K, F>(records: &[R], key: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&R) -> K,
{
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(key(record)).or_insert(0) += 1;
    }
    counts
}

#[must_use]
pub fn assets_by_status(assets: &[Asset]) -> BTreeMap<AssetStatus, usize> {
    count_by(assets, |asset| asset.status)
}

#[must_use]
pub fn assets_by_category(assets: &[Asset]) -> BTreeMap<AssetCategory, usize> {
    count_by(assets, |asset| asset.category)
}

pub fn transfers_by_status<R: Borrow<Transfer>>(transfers: &[R]) -> BTreeMap<TransferStatus, usize> {
    count_by(transfers, |transfer| Borrow::<Transfer>::borrow(transfer).status())
}

/// One tile per transfer status, zero-filled, in workflow order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StatusTile {
    pub status: TransferStatus,
    pub count: usize,
}

pub fn transfer_status_tiles<R: Borrow<Transfer>>(transfers: &[R]) -> Vec<StatusTile> {
    let counts = transfers_by_status(transfers);
    TransferStatus::ALL
        .into_iter()
        .map(|status| StatusTile {
            status,
            count: counts.get(&status).copied().unwrap_or(0),
        })
        .collect()
}

/// Headline figures for the command dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DashboardSummary {
    pub total_assets: usize,
    pub active_assets: usize,
    pub maintenance_assets: usize,
    pub total_asset_value: u64,
    pub assets_by_status: BTreeMap<AssetStatus, usize>,
    pub assets_by_category: BTreeMap<AssetCategory, usize>,
    pub transfers_by_status: BTreeMap<TransferStatus, usize>,
    pub pending_transfers: usize,
    pub failed_audit_events: usize,
    pub critical_audit_events: usize,
    pub recent_activity: Vec<AuditEntry>,
}

/// Number of audit entries surfaced as recent activity.
pub const RECENT_ACTIVITY: usize = 4;

impl DashboardSummary {
    #[must_use]
    pub fn compute<R: Borrow<Transfer>>(
        assets: &[Asset],
        transfers: &[R],
        audit: &[AuditEntry],
    ) -> Self {
        let assets_by_status = assets_by_status(assets);
        let transfers_by_status = transfers_by_status(transfers);

        let mut recent_activity = audit.to_vec();
        recent_activity.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        recent_activity.truncate(RECENT_ACTIVITY);

        Self {
            total_assets: assets.len(),
            active_assets: assets_by_status
                .get(&AssetStatus::Active)
                .copied()
                .unwrap_or(0),
            maintenance_assets: assets_by_status
                .get(&AssetStatus::Maintenance)
                .copied()
                .unwrap_or(0),
            total_asset_value: assets.iter().map(|asset| asset.value).sum(),
            assets_by_category: assets_by_category(assets),
            pending_transfers: transfers_by_status
                .get(&TransferStatus::Pending)
                .copied()
                .unwrap_or(0),
            assets_by_status,
            transfers_by_status,
            failed_audit_events: audit.iter().filter(|entry| !entry.success).count(),
            critical_audit_events: audit
                .iter()
                .filter(|entry| entry.severity == Severity::Critical)
                .count(),
            recent_activity,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::seed;

    #[test]
    fn count_by_sums_to_input_length() {
        let assets = seed::assets();
        let by_status = assets_by_status(&assets);
        assert_eq!(by_status.values().sum::<usize>(), assets.len());
        let by_category = assets_by_category(&assets);
        assert_eq!(by_category.values().sum::<usize>(), assets.len());
    }

    #[test]
    fn seeded_asset_breakdown() {
        let assets = seed::assets();
        let by_status = assets_by_status(&assets);
        assert_eq!(by_status[&AssetStatus::Active], 4);
        assert_eq!(by_status[&AssetStatus::Maintenance], 1);
        assert_eq!(by_status[&AssetStatus::Reserved], 1);
        assert!(!by_status.contains_key(&AssetStatus::Decommissioned));

        let by_category = assets_by_category(&assets);
        assert_eq!(by_category[&AssetCategory::Vehicle], 3);
        assert_eq!(by_category[&AssetCategory::Communication], 1);
    }

    #[test]
    fn count_by_on_empty_input_is_empty() {
        let none: Vec<Asset> = Vec::new();
        assert!(count_by(&none, |a| a.status).is_empty());
    }

    #[test]
    fn status_tiles_are_zero_filled() {
        let tiles = transfer_status_tiles(&seed::transfers());
        let counts: Vec<_> = tiles.iter().map(|t| (t.status, t.count)).collect();
        assert_eq!(
            counts,
            [
                (TransferStatus::Pending, 1),
                (TransferStatus::Approved, 0),
                (TransferStatus::InTransit, 1),
                (TransferStatus::Completed, 1),
                (TransferStatus::Rejected, 1),
            ]
        );
    }

    #[test]
    fn dashboard_summary_from_seed() {
        let summary = DashboardSummary::compute(
            &seed::assets(),
            &seed::transfers(),
            &seed::audit_entries(),
        );
        assert_eq!(summary.total_assets, 6);
        assert_eq!(summary.active_assets, 4);
        assert_eq!(summary.maintenance_assets, 1);
        assert_eq!(summary.total_asset_value, 23_926_800);
        assert_eq!(summary.pending_transfers, 1);
        assert_eq!(summary.failed_audit_events, 1);
        assert_eq!(summary.critical_audit_events, 1);
        let recent: Vec<_> = summary
            .recent_activity
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(recent, ["AUD-001", "AUD-002", "AUD-003", "AUD-004"]);
    }
}
