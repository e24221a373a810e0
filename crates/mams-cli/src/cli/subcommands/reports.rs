use clap::Subcommand;

/// Report commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReportCommands {
    /// List reports.
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long = "type")]
        report_type: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Generate a report.
    Generate {
        /// asset, transfer, maintenance, financial, or security.
        #[arg(long = "type")]
        report_type: String,
        /// weekly, monthly, quarterly, or yearly.
        #[arg(long, default_value = "monthly")]
        period: String,
    },
}
