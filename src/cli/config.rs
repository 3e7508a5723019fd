//! Configuration CLI command handlers

use std::path::Path;

use crate::cli::commands::{ConfigCommand, ConfigKey};
use crate::core::config::{Config, UnresolvedSelectionMode};
use crate::error::{MenuError, Result};

/// Handle configuration commands against the file at `path`
pub fn handle_config(command: ConfigCommand, path: &Path) -> Result<()> {
    match command {
        ConfigCommand::Set { key, value } => handle_set(key, &value, path),
        ConfigCommand::Get { key } => handle_get(key, path),
        ConfigCommand::Remove { key } => handle_remove(key, path),
    }
}

/// Handle setting a configuration value
fn handle_set(key: ConfigKey, value: &str, path: &Path) -> Result<()> {
    let mut config = Config::load_from(path)?;
    match key {
        ConfigKey::PageSize => {
            config.page_size = value
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| {
                    MenuError::InvalidInput(format!(
                        "Invalid page size '{}'. Use a whole number greater than 0.",
                        value
                    ))
                })?;
        }
        ConfigKey::QuitMessage => {
            config.quit_message = value.to_string();
        }
        ConfigKey::UnresolvedSelection => {
            config.unresolved_selection =
                UnresolvedSelectionMode::from_str(value).ok_or_else(|| {
                    MenuError::InvalidInput(format!(
                        "Invalid mode '{}'. Available modes: {}",
                        value,
                        UnresolvedSelectionMode::all()
                            .iter()
                            .map(|m| m.name())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))
                })?;
        }
    }
    config.save_to(path)?;
    println!("{}", describe(key, &config));
    Ok(())
}

/// Handle getting a configuration value
fn handle_get(key: ConfigKey, path: &Path) -> Result<()> {
    let config = Config::load_from(path)?;
    println!("{}", describe(key, &config));
    Ok(())
}

/// Handle removing a configuration value
fn handle_remove(key: ConfigKey, path: &Path) -> Result<()> {
    let mut config = Config::load_from(path)?;
    let defaults = Config::default();
    match key {
        ConfigKey::PageSize => config.page_size = defaults.page_size,
        ConfigKey::QuitMessage => config.quit_message = defaults.quit_message,
        ConfigKey::UnresolvedSelection => {
            config.unresolved_selection = defaults.unresolved_selection
        }
    }
    config.save_to(path)?;
    println!("{} (default)", describe(key, &config));
    Ok(())
}

fn describe(key: ConfigKey, config: &Config) -> String {
    match key {
        ConfigKey::PageSize => format!("page-size: {}", config.page_size),
        ConfigKey::QuitMessage => format!("quit-message: {}", config.quit_message),
        ConfigKey::UnresolvedSelection => {
            format!("unresolved-selection: {}", config.unresolved_selection)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        handle_config(
            ConfigCommand::Set {
                key: ConfigKey::UnresolvedSelection,
                value: "notify".into(),
            },
            &path,
        )
        .unwrap();
        assert_eq!(
            Config::load_from(&path).unwrap().unresolved_selection,
            UnresolvedSelectionMode::Notify
        );

        handle_config(ConfigCommand::Remove { key: ConfigKey::UnresolvedSelection }, &path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let result = handle_config(
            ConfigCommand::Set {
                key: ConfigKey::PageSize,
                value: "0".into(),
            },
            &path,
        );
        assert!(matches!(result, Err(MenuError::InvalidInput(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_describe() {
        let config = Config::default();
        assert_eq!(describe(ConfigKey::PageSize, &config), "page-size: 30");
        assert_eq!(describe(ConfigKey::QuitMessage, &config), "quit-message: Quitting");
    }
}
