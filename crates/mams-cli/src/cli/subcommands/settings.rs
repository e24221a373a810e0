use clap::Subcommand;

/// System settings commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SettingsCommands {
    /// Show all settings, or the value at a dotted path.
    Show { path: Option<String> },
    /// Set the value at a dotted path, e.g. `security.session_timeout 15`.
    Set { path: String, value: String },
    /// Show the signed-in user's profile.
    Profile,
    /// Change password, checked against the password policy.
    Password {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
}
