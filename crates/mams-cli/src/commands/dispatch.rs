use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Login(args) => commands::auth::login::handle(&args, ctx, flags).await,
        Commands::Logout => commands::auth::logout::handle(ctx, flags).await,
        Commands::Register(args) => commands::auth::register::handle(&args, ctx, flags).await,
        Commands::Whoami => commands::auth::whoami::handle(ctx, flags).await,
        Commands::Menu => commands::menu::handle(ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Assets { action } => commands::assets::handle(&action, ctx, flags).await,
        Commands::Transfers { action } => commands::transfers::handle(&action, ctx, flags).await,
        Commands::Audit { action } => commands::audit::handle(&action, ctx, flags).await,
        Commands::Reports { action } => commands::reports::handle(&action, ctx, flags).await,
        Commands::Bases { action } => commands::bases::handle(&action, ctx, flags).await,
        Commands::Settings { action } => commands::settings::handle(&action, ctx, flags).await,
    }
}
