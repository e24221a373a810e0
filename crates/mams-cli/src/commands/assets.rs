use mams_core::entities::Asset;
use mams_core::filter::AssetFilter;
use mams_core::inventory::Inventory;
use mams_core::nav::Page;
use mams_core::seed;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AssetCommands;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::commands::shared::parse::parse_selector;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mams assets`.
pub async fn handle(
    action: &AssetCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.session_for(Page::Assets)?;
    let inventory = Inventory::new(seed::assets())?;

    match action {
        AssetCommands::List {
            search,
            category,
            status,
            maintenance_due,
            limit,
        } => {
            let predicate = AssetFilter {
                search: search.as_deref().into(),
                category: parse_selector(category.as_deref(), "category")?,
                status: parse_selector(status.as_deref(), "status")?,
            };
            let mut assets = list(&inventory, &predicate, *maintenance_due);
            truncate_to(
                &mut assets,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output(&assets, flags.format)
        }
        AssetCommands::Get { id } => output(inventory.get(id)?, flags.format),
    }
}

fn list(inventory: &Inventory, predicate: &AssetFilter, maintenance_due: bool) -> Vec<Asset> {
    let mut assets = inventory.filtered(predicate);
    if maintenance_due {
        let today = crate::commands::today();
        assets.retain(|asset| asset.maintenance_due(today));
    }
    assets
}

#[cfg(test)]
mod tests {
    use mams_core::enums::AssetStatus;
    use mams_core::filter::Selector;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn search_matches_serial_numbers_case_insensitively() {
        let inventory = Inventory::new(seed::assets()).unwrap();
        let first = &seed::assets()[0];
        let predicate = AssetFilter {
            search: first.serial_number.to_lowercase().as_str().into(),
            ..AssetFilter::default()
        };
        let found = list(&inventory, &predicate, false);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, first.id);
    }

    #[test]
    fn status_selector_narrows_results() {
        let inventory = Inventory::new(seed::assets()).unwrap();
        let predicate = AssetFilter {
            status: Selector::Only(AssetStatus::Maintenance),
            ..AssetFilter::default()
        };
        let found = list(&inventory, &predicate, false);
        assert!(!found.is_empty());
        assert!(found.iter().all(|a| a.status == AssetStatus::Maintenance));
    }
}
