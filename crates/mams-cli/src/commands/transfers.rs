#[path = "transfers/list.rs"]
mod list;
#[path = "transfers/request.rs"]
mod request;
#[path = "transfers/transition.rs"]
mod transition;

use mams_core::nav::Page;
use mams_core::seed;
use mams_core::workflow::TransferBoard;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TransferCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mams transfers`.
pub async fn handle(
    action: &TransferCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.session_for(Page::Transfers)?;
    let mut board = board(ctx);

    match action {
        TransferCommands::List {
            search,
            status,
            priority,
            limit,
        } => list::run(
            &board,
            &list::ListArgs {
                search: search.as_deref(),
                status: status.as_deref(),
                priority: priority.as_deref(),
                limit: *limit,
            },
            ctx,
            flags,
        ),
        TransferCommands::Get { id } => output(board.get(id)?.as_ref(), flags.format),
        TransferCommands::Approve { id } => {
            let response = transition::apply(&mut board, id, transition::Action::Approve, &session)?;
            output(&response, flags.format)
        }
        TransferCommands::Reject { id } => {
            let response = transition::apply(&mut board, id, transition::Action::Reject, &session)?;
            output(&response, flags.format)
        }
        TransferCommands::Advance { id, on } => {
            let on = on
                .as_deref()
                .map(|raw| crate::commands::shared::parse::parse_date(raw, "date"))
                .transpose()?
                .unwrap_or_else(crate::commands::today);
            let response =
                transition::apply(&mut board, id, transition::Action::Advance { on }, &session)?;
            output(&response, flags.format)
        }
        TransferCommands::Request {
            asset,
            to,
            expected,
            reason,
            priority,
        } => {
            let transfer = request::run(
                &mut board,
                &request::RequestArgs {
                    asset_id: asset,
                    to_location: to,
                    expected,
                    reason,
                    priority,
                },
                &session,
            )?;
            output(transfer.as_ref(), flags.format)
        }
    }
}

/// A fresh board over the seeded transfers under the configured policy.
fn board(ctx: &AppContext) -> TransferBoard {
    TransferBoard::new(seed::transfers(), ctx.config.workflow.approval_policy)
}
