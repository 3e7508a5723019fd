//! console-menus - console menu demo and configuration tool
//!
//! Run without arguments to launch the demo menus on stdin/stdout,
//! or use `config` to manage settings.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use console_menus::cli::commands::{Cli, Commands};
use console_menus::cli::{config, demo};
use console_menus::core::Config;
use console_menus::error::{MenuError, Result};
use console_menus::io::ConsoleIo;

fn main() {
    // Initialize logging; stdout belongs to the menus
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    match cli.command {
        // Config commands operate on the file, not the merged settings
        Some(Commands::Config(args)) => config::handle_config(args.command, &config_path),

        // No subcommand - launch the demo
        None | Some(Commands::Run) => {
            let mut config = Config::load_from(&config_path)?;
            if let Some(page_size) = cli.page_size {
                if page_size == 0 {
                    return Err(MenuError::InvalidInput(
                        "--page-size must be greater than 0".to_string(),
                    ));
                }
                config.page_size = page_size;
            }
            demo::run_demo(&config, ConsoleIo::stdio())
        }
    }
}
