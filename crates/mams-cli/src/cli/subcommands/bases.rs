use clap::Subcommand;

/// Base commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BaseCommands {
    /// List bases.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
}
