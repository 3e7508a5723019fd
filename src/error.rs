//! Error and control-flow types for console-menus
//!
//! Cancellation and quitting travel through the same `Result` as real
//! failures so actions and prompts can raise them with `?`. Only the
//! application loop interprets them.

use thiserror::Error;

use crate::app::cancel::CancelHandler;
use crate::testing::HarnessError;

/// Default message carried by a cancellation
pub const DEFAULT_CANCEL_MESSAGE: &str = "Canceling work in progress";

/// Default farewell carried by the quit signal
pub const DEFAULT_QUIT_MESSAGE: &str = "Quitting";

/// Main error type for console-menus
#[derive(Error, Debug)]
pub enum MenuError {
    /// Work in progress was cancelled; the handler says how far to unwind the menu stack
    #[error("{message}")]
    Cancelled {
        message: String,
        handler: CancelHandler,
    },

    /// The user asked to leave the application
    #[error("{0}")]
    Quit(String),

    /// The input stream reached end of file
    #[error("No more input is available.\n\n  → The input stream was closed before the application quit.")]
    EndOfInput,

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}\n\n  → Fix the file or run 'console-menus config remove <key>' to reset a value.")]
    Toml(String),

    /// IO error
    #[error("Console operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// The scripted test console gave up on the application
    #[error("Test harness: {0}")]
    Harness(#[from] HarnessError),
}

impl MenuError {
    /// Cancel and redisplay the current menu
    pub fn try_again(message: impl Into<String>) -> Self {
        MenuError::Cancelled {
            message: message.into(),
            handler: CancelHandler::TryAgainAtMostRecentMenu,
        }
    }

    /// Cancel and pop the current menu
    pub fn pop_most_recent(message: impl Into<String>) -> Self {
        MenuError::Cancelled {
            message: message.into(),
            handler: CancelHandler::PopMostRecentMenu,
        }
    }

    /// Cancel and pop `menus_to_pop` menus
    pub fn pop_menus(menus_to_pop: usize, message: impl Into<String>) -> Self {
        MenuError::Cancelled {
            message: message.into(),
            handler: CancelHandler::PopMenus(menus_to_pop),
        }
    }

    /// Quit signal with the default farewell
    pub fn quit() -> Self {
        MenuError::Quit(DEFAULT_QUIT_MESSAGE.to_string())
    }

    /// Whether this is a control-flow signal rather than a failure
    pub fn is_signal(&self) -> bool {
        matches!(self, MenuError::Cancelled { .. } | MenuError::Quit(_))
    }
}

impl From<toml::de::Error> for MenuError {
    fn from(err: toml::de::Error) -> Self {
        MenuError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for MenuError {
    fn from(err: toml::ser::Error) -> Self {
        MenuError::Toml(err.to_string())
    }
}

/// Result type alias using MenuError
pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_constructors_carry_handler() {
        match MenuError::pop_menus(2, "going up") {
            MenuError::Cancelled { message, handler } => {
                assert_eq!(message, "going up");
                assert_eq!(handler, CancelHandler::PopMenus(2));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(MenuError::try_again(DEFAULT_CANCEL_MESSAGE).is_signal());
        assert!(!MenuError::EndOfInput.is_signal());
    }

    #[test]
    fn test_quit_message() {
        assert_eq!(MenuError::quit().to_string(), "Quitting");
    }
}
