//! Application configuration management
//!
//! Handles loading and saving console settings including:
//! - Page size of scrolling menus
//! - Farewell printed on quit
//! - What happens on an unresolved menu selection

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result, DEFAULT_QUIT_MESSAGE};

/// Behavior when input matches no menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UnresolvedSelectionMode {
    /// Redisplay the menu without comment (default)
    #[default]
    Redisplay,
    /// Print a message before redisplaying the menu
    Notify,
}

impl UnresolvedSelectionMode {
    pub fn name(&self) -> &'static str {
        match self {
            UnresolvedSelectionMode::Redisplay => "redisplay",
            UnresolvedSelectionMode::Notify => "notify",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "redisplay" => Some(UnresolvedSelectionMode::Redisplay),
            "notify" => Some(UnresolvedSelectionMode::Notify),
            _ => None,
        }
    }

    pub fn all() -> &'static [UnresolvedSelectionMode] {
        &[
            UnresolvedSelectionMode::Redisplay,
            UnresolvedSelectionMode::Notify,
        ]
    }
}

impl std::fmt::Display for UnresolvedSelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Items per page in scrolling menus
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Farewell printed when the user quits
    #[serde(default = "default_quit_message")]
    pub quit_message: String,

    /// Policy for input that selects nothing
    #[serde(default)]
    pub unresolved_selection: UnresolvedSelectionMode,

    /// Message printed under the `notify` policy
    #[serde(default = "default_unresolved_message")]
    pub unresolved_message: String,
}

fn default_page_size() -> usize {
    30
}

fn default_quit_message() -> String {
    DEFAULT_QUIT_MESSAGE.to_string()
}

fn default_unresolved_message() -> String {
    "Invalid selection.".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            quit_message: default_quit_message(),
            unresolved_selection: UnresolvedSelectionMode::default(),
            unresolved_message: default_unresolved_message(),
        }
    }
}

impl Config {
    /// Load configuration from file, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, or defaults if the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the configuration directory
    pub fn config_dir() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "console-menus", "console-menus")
            .ok_or_else(|| MenuError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().to_path_buf())
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(MenuError::Config("page-size must be greater than 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_mode_from_str() {
        assert_eq!(
            UnresolvedSelectionMode::from_str("redisplay"),
            Some(UnresolvedSelectionMode::Redisplay)
        );
        assert_eq!(
            UnresolvedSelectionMode::from_str("notify"),
            Some(UnresolvedSelectionMode::Notify)
        );
        assert_eq!(UnresolvedSelectionMode::from_str("shout"), None);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.page_size, 30);
        assert_eq!(config.quit_message, "Quitting");
        assert_eq!(config.unresolved_selection, UnresolvedSelectionMode::Redisplay);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            page_size: 5,
            unresolved_selection: UnresolvedSelectionMode::Notify,
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "unresolved_selection = \"notify\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.unresolved_selection, UnresolvedSelectionMode::Notify);
        assert_eq!(config.page_size, 30);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "page_size = 0\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(MenuError::Config(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "page_size = [").unwrap();
        assert!(matches!(Config::load_from(&path), Err(MenuError::Toml(_))));
    }
}
