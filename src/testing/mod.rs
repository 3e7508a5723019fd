//! Console doubles for exercising menu applications
//!
//! [`ScriptedConsole`] replays a fixed list of input lines on the calling
//! thread. [`InteractiveConsoleFixture`] runs the application on its own
//! thread and lets the test exchange input and output with it in turns.

pub mod interactive;
pub mod scripted;

use std::time::Duration;

use thiserror::Error;

pub use interactive::InteractiveConsoleFixture;
pub use scripted::ScriptedConsole;

/// Environment variable that stretches harness timeouts for debugger sessions
pub const DEBUG_ENV_VAR: &str = "CONSOLE_MENUS_DEBUG";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);
const DEBUG_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Failures detected by the test consoles
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    #[error("timed out after {millis} ms waiting for the application")]
    Timeout { millis: u128 },

    #[error("the application expected more input than the test provided")]
    ExpectedMoreInput,

    #[error("the application exited unexpectedly")]
    ExitedUnexpectedly,

    #[error("the test thread and the application thread were running at the same time")]
    RunningSimultaneously,

    #[error("the application was stopped by the test")]
    Stopped,

    #[error("input was supplied after the application terminated")]
    InputAfterTermination,
}

/// How long a harness waits for the other side before failing
pub fn default_timeout() -> Duration {
    if std::env::var_os(DEBUG_ENV_VAR).is_some() {
        DEBUG_TIMEOUT
    } else {
        DEFAULT_TIMEOUT
    }
}
