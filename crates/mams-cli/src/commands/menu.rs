use mams_core::nav;
use mams_core::responses::MenuEntry;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(ctx)?, flags.format)
}

fn run(ctx: &AppContext) -> anyhow::Result<Vec<MenuEntry>> {
    let session = ctx.session()?;
    Ok(nav::visible_menu_items(session.role)
        .into_iter()
        .map(|item| MenuEntry {
            title: item.title.to_string(),
            page: item.page,
            path: item.path.to_string(),
        })
        .collect())
}
