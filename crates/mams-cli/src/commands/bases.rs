use mams_core::seed;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BaseCommands;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::context::AppContext;
use crate::output::output;

/// Handle `mams bases`.
pub async fn handle(
    action: &BaseCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.session()?;

    match action {
        BaseCommands::List { limit } => {
            let mut bases = seed::bases();
            truncate_to(
                &mut bases,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output(&bases, flags.format)
        }
    }
}
