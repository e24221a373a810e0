use mams_core::audit_log::AuditLog;
use mams_core::entities::AuditEntry;
use mams_core::filter::AuditFilter;
use mams_core::nav::Page;
use mams_core::seed;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuditCommands;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::commands::shared::parse::parse_selector;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mams audit`.
pub async fn handle(
    action: &AuditCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.session_for(Page::Audit)?;
    let log = AuditLog::new(seed::audit_entries());

    match action {
        AuditCommands::List {
            search,
            action,
            entity,
            severity,
            limit,
        } => {
            let predicate = AuditFilter {
                search: search.as_deref().into(),
                action: parse_selector(action.as_deref(), "action")?,
                entity: parse_selector(entity.as_deref(), "entity")?,
                severity: parse_selector(severity.as_deref(), "severity")?,
            };
            let mut entries: Vec<AuditEntry> = log.filtered(&predicate);
            truncate_to(
                &mut entries,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output(&entries, flags.format)
        }
        AuditCommands::Get { id } => output(log.get(id)?, flags.format),
    }
}
