//! Console input/output boundary
//!
//! Every component receives its reader and printer explicitly through a
//! [`ConsoleIo`]. There are no process-wide default handles.

pub mod input;
pub mod output;

use std::sync::Arc;

pub use input::{InputReader, StdinReader};
pub use output::{OutPrinter, StdoutPrinter};

/// Reader and printer handles shared by menus, prompts and the application
#[derive(Clone)]
pub struct ConsoleIo {
    pub input: Arc<dyn InputReader>,
    pub output: Arc<dyn OutPrinter>,
}

impl ConsoleIo {
    pub fn new(input: Arc<dyn InputReader>, output: Arc<dyn OutPrinter>) -> Self {
        Self { input, output }
    }

    /// Handles backed by the process stdin and stdout
    pub fn stdio() -> Self {
        Self::new(Arc::new(StdinReader), Arc::new(StdoutPrinter))
    }
}

impl std::fmt::Debug for ConsoleIo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleIo").finish_non_exhaustive()
    }
}
