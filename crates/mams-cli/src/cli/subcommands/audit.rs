use clap::Subcommand;

/// Audit history commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuditCommands {
    /// List audit entries, newest first.
    List {
        /// Matches entity name, user, or details.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        action: Option<String>,
        #[arg(long)]
        entity: Option<String>,
        #[arg(long)]
        severity: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an audit entry by ID.
    Get { id: String },
}
