use clap::Subcommand;

/// Transfer workflow commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TransferCommands {
    /// List transfers.
    List {
        /// Matches asset name, requester, or reason.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a transfer by ID.
    Get { id: String },
    /// Approve a pending transfer.
    Approve { id: String },
    /// Reject a pending transfer.
    Reject { id: String },
    /// Move an approved transfer into transit, or complete one in transit.
    Advance {
        id: String,
        /// Completion date (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        on: Option<String>,
    },
    /// Request a new transfer of an asset.
    Request {
        #[arg(long)]
        asset: String,
        /// Destination location.
        #[arg(long)]
        to: String,
        /// Expected arrival date (YYYY-MM-DD).
        #[arg(long)]
        expected: String,
        #[arg(long)]
        reason: String,
        #[arg(long, default_value = "medium")]
        priority: String,
    },
}
