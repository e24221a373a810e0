use clap::{Args, Subcommand};

use super::subcommands::{
    AssetCommands, AuditCommands, BaseCommands, ReportCommands, SettingsCommands,
    TransferCommands,
};

/// Top-level `mams` commands.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in. The role is derived from the username.
    Login(LoginArgs),
    /// Clear the stored session.
    Logout,
    /// Create an account on the backend.
    Register(RegisterArgs),
    /// Show the current session.
    Whoami,
    /// Menu entries visible to the current role.
    Menu,
    /// Asset, transfer, and audit overview.
    Dashboard,
    /// Asset inventory.
    Assets {
        #[command(subcommand)]
        action: AssetCommands,
    },
    /// Asset transfer requests and approvals.
    Transfers {
        #[command(subcommand)]
        action: TransferCommands,
    },
    /// Audit history (admin only).
    Audit {
        #[command(subcommand)]
        action: AuditCommands,
    },
    /// Generated reports (admin and commander).
    Reports {
        #[command(subcommand)]
        action: ReportCommands,
    },
    /// Military bases.
    Bases {
        #[command(subcommand)]
        action: BaseCommands,
    },
    /// System settings and user profile (admin only).
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },
}

/// Arguments for `mams login`.
#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    pub username: String,
    #[arg(long)]
    pub password: String,
}

/// Arguments for `mams register`.
#[derive(Clone, Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}
