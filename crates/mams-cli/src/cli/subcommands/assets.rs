use clap::Subcommand;

/// Asset inventory commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AssetCommands {
    /// List assets.
    List {
        /// Matches name or serial number.
        #[arg(long)]
        search: Option<String>,
        /// `all` or a category (vehicle, weapon, ammunition, equipment, communication).
        #[arg(long)]
        category: Option<String>,
        /// `all` or a status (active, maintenance, reserved, decommissioned).
        #[arg(long)]
        status: Option<String>,
        /// Only assets whose next maintenance date has passed.
        #[arg(long)]
        maintenance_due: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an asset by ID.
    Get { id: String },
}
