use mams_core::responses::SessionResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.session()?;
    output(
        &SessionResponse {
            greeting: session.greeting(),
            session,
        },
        flags.format,
    )
}
