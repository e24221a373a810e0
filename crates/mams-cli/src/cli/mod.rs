use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `mams` binary.
#[derive(Debug, Parser)]
#[command(
    name = "mams",
    version,
    about = "M.A.M.S. - military asset management dashboard"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{SettingsCommands, TransferCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "mams",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "dashboard",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["mams", "menu", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Menu));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["mams", "--format", "xml", "whoami"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_accepts_all_supported_values() {
        for value in ["json", "table", "raw"] {
            let cli = Cli::try_parse_from(["mams", "--format", value, "whoami"])
                .expect("cli should parse");
            assert!(matches!(cli.command, Commands::Whoami));
        }
    }

    #[test]
    fn login_takes_username_and_password() {
        let cli = Cli::try_parse_from(["mams", "login", "admin", "--password", "secret"])
            .expect("cli should parse");
        let Commands::Login(args) = cli.command else {
            panic!("expected login");
        };
        assert_eq!(args.username, "admin");
        assert_eq!(args.password, "secret");
    }

    #[test]
    fn login_without_password_is_rejected() {
        assert!(Cli::try_parse_from(["mams", "login", "admin"]).is_err());
    }

    #[test]
    fn transfer_list_filters_parse() {
        let cli = Cli::try_parse_from([
            "mams",
            "transfers",
            "list",
            "--status",
            "in-transit",
            "--search",
            "abrams",
            "--limit",
            "3",
        ])
        .expect("cli should parse");
        let Commands::Transfers {
            action: TransferCommands::List { status, search, limit, .. },
        } = cli.command
        else {
            panic!("expected transfers list");
        };
        assert_eq!(status.as_deref(), Some("in-transit"));
        assert_eq!(search.as_deref(), Some("abrams"));
        assert_eq!(limit, Some(3));
    }

    #[test]
    fn settings_set_takes_path_and_value() {
        let cli = Cli::try_parse_from([
            "mams",
            "settings",
            "set",
            "security.session_timeout",
            "15",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Settings {
                action: SettingsCommands::Set { ref path, ref value },
            } if path == "security.session_timeout" && value == "15"
        ));
    }
}
