use mams_core::nav::Page;
use mams_core::responses::DashboardResponse;
use mams_core::seed;
use mams_core::stats::{DashboardSummary, transfer_status_tiles};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(ctx)?, flags.format)
}

fn run(ctx: &AppContext) -> anyhow::Result<DashboardResponse> {
    let session = ctx.session_for(Page::Dashboard)?;
    let transfers = seed::transfers();
    Ok(DashboardResponse {
        greeting: session.greeting(),
        summary: DashboardSummary::compute(&seed::assets(), &transfers, &seed::audit_entries()),
        transfer_tiles: transfer_status_tiles(&transfers),
    })
}
