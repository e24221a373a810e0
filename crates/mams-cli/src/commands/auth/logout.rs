use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    logged_out: bool,
}

pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    mams_auth::logout(ctx.store.as_mut())?;
    output(&LogoutResponse { logged_out: true }, flags.format)
}
