use std::sync::Arc;

use mams_core::entities::{Session, Transfer};
use mams_core::enums::Priority;
use mams_core::inventory::Inventory;
use mams_core::seed;
use mams_core::workflow::{NewTransfer, TransferBoard};

use crate::commands::shared::parse::{parse_date, parse_enum};

pub struct RequestArgs<'a> {
    pub asset_id: &'a str,
    pub to_location: &'a str,
    pub expected: &'a str,
    pub reason: &'a str,
    pub priority: &'a str,
}

/// Raise a transfer of an inventory asset from its current location.
pub fn run(
    board: &mut TransferBoard,
    args: &RequestArgs<'_>,
    requester: &Session,
) -> anyhow::Result<Arc<Transfer>> {
    let inventory = Inventory::new(seed::assets())?;
    let asset = inventory.get(args.asset_id)?;

    let request = NewTransfer {
        asset_id: asset.id.clone(),
        asset_name: asset.name.clone(),
        from_location: asset.location.clone(),
        to_location: args.to_location.trim().to_string(),
        request_date: crate::commands::today(),
        expected_date: parse_date(args.expected, "expected date")?,
        reason: args.reason.to_string(),
        priority: parse_enum::<Priority>(args.priority, "priority")?,
    };
    Ok(board.request(request, requester)?)
}
