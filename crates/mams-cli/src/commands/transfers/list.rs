use mams_core::entities::Transfer;
use mams_core::filter::TransferFilter;
use mams_core::workflow::TransferBoard;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::commands::shared::parse::parse_selector;
use crate::context::AppContext;
use crate::output::output;

pub struct ListArgs<'a> {
    pub search: Option<&'a str>,
    pub status: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub limit: Option<u32>,
}

pub fn run(
    board: &TransferBoard,
    args: &ListArgs<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(args.limit, flags.limit, ctx.config.general.default_limit);
    let mut transfers = select(board, args)?;
    truncate_to(&mut transfers, limit);
    output(&transfers, flags.format)
}

fn select(board: &TransferBoard, args: &ListArgs<'_>) -> anyhow::Result<Vec<Transfer>> {
    let predicate = TransferFilter {
        search: args.search.into(),
        status: parse_selector(args.status, "status")?,
        priority: parse_selector(args.priority, "priority")?,
    };
    Ok(board
        .filtered(&predicate)
        .iter()
        .map(|transfer| Transfer::clone(transfer))
        .collect())
}

#[cfg(test)]
mod tests {
    use mams_core::seed;
    use mams_core::workflow::ApprovalPolicy;
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(args: &ListArgs<'_>) -> Vec<String> {
        let board = TransferBoard::new(seed::transfers(), ApprovalPolicy::Open);
        select(&board, args)
            .unwrap()
            .iter()
            .map(|t| t.id.clone())
            .collect()
    }

    fn args<'a>(status: Option<&'a str>, search: Option<&'a str>) -> ListArgs<'a> {
        ListArgs {
            search,
            status,
            priority: None,
            limit: None,
        }
    }

    #[test]
    fn pending_filter_finds_only_first_transfer() {
        assert_eq!(ids(&args(Some("pending"), None)), ["TRF-001"]);
    }

    #[test]
    fn all_keeps_seed_order() {
        assert_eq!(
            ids(&args(Some("all"), None)),
            ["TRF-001", "TRF-002", "TRF-003", "TRF-004"]
        );
    }

    #[test]
    fn search_covers_requester_and_reason() {
        assert_eq!(ids(&args(None, Some("martinez"))), ["TRF-004"]);
        assert_eq!(ids(&args(None, Some("PATROL"))), ["TRF-003"]);
    }

    #[test]
    fn unknown_status_is_an_error() {
        let board = TransferBoard::new(seed::transfers(), ApprovalPolicy::Open);
        assert!(select(&board, &args(Some("lost"), None)).is_err());
    }
}
