//! CLI command definitions using clap
//!
//! Defines the command structure for the `console-menus` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// console-menus - numbered console menus with paging and prompts
///
/// Run without arguments to launch the demo application.
#[derive(Parser, Debug)]
#[command(name = "console-menus", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file to use instead of the platform default
    #[arg(long, global = true, env = "CONSOLE_MENUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Items per page in scrolling menus (overrides the configuration file)
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the demo menu application (default)
    Run,

    /// Manage configuration
    Config(ConfigArgs),
}

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key
        key: ConfigKey,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: ConfigKey,
    },

    /// Reset a configuration value to its default
    Remove {
        /// Configuration key
        key: ConfigKey,
    },
}

/// Available configuration keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigKey {
    /// Items per page in scrolling menus
    #[value(name = "page-size")]
    PageSize,

    /// Farewell printed on quit
    #[value(name = "quit-message")]
    QuitMessage,

    /// `redisplay` or `notify` when input selects nothing
    #[value(name = "unresolved-selection")]
    UnresolvedSelection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_runs_demo() {
        let cli = Cli::try_parse_from(["console-menus"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.page_size.is_none());
    }

    #[test]
    fn test_config_set_parses_key() {
        let cli = Cli::try_parse_from([
            "console-menus",
            "--config",
            "/tmp/menus.toml",
            "config",
            "set",
            "page-size",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/menus.toml")));
        match cli.command {
            Some(Commands::Config(ConfigArgs {
                command: ConfigCommand::Set { key, value },
            })) => {
                assert_eq!(key, ConfigKey::PageSize);
                assert_eq!(value, "10");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Cli::try_parse_from(["console-menus", "config", "get", "colour"]).is_err());
    }
}
