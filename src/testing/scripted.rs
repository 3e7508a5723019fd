//! Single-threaded console double

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{MenuError, Result};
use crate::io::{ConsoleIo, InputReader, OutPrinter};

#[derive(Default)]
struct Script {
    inputs: VecDeque<String>,
    outputs: Vec<String>,
    ignore_blanks: bool,
}

/// Replays scripted input lines and records every output fragment.
///
/// Reading past the end of the script yields [`MenuError::EndOfInput`].
#[derive(Clone, Default)]
pub struct ScriptedConsole {
    script: Arc<Mutex<Script>>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let console = Self::new();
        console.push_inputs(inputs);
        console
    }

    /// Drop output fragments that are blank from the recording
    pub fn ignore_blanks(self) -> Self {
        self.lock().ignore_blanks = true;
        self
    }

    pub fn push_inputs<I, S>(&self, inputs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock().inputs.extend(inputs.into_iter().map(Into::into));
    }

    /// Reader and printer wired to this script
    pub fn io(&self) -> ConsoleIo {
        ConsoleIo::new(Arc::new(self.clone()), Arc::new(self.clone()))
    }

    /// Every recorded fragment in the order printed
    pub fn outputs(&self) -> Vec<String> {
        self.lock().outputs.clone()
    }

    /// All recorded output joined into one string
    pub fn transcript(&self) -> String {
        self.lock().outputs.concat()
    }

    pub fn remaining_inputs(&self) -> Vec<String> {
        self.lock().inputs.iter().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl InputReader for ScriptedConsole {
    fn read_line(&self) -> Result<String> {
        self.lock().inputs.pop_front().ok_or(MenuError::EndOfInput)
    }
}

impl OutPrinter for ScriptedConsole {
    fn print(&self, text: &str) -> Result<()> {
        let mut script = self.lock();
        if !(script.ignore_blanks && text.trim().is_empty()) {
            script.outputs.push(text.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_inputs_in_order() {
        let console = ScriptedConsole::with_inputs(["one", "two"]);
        let io = console.io();
        assert_eq!(io.input.read_line().unwrap(), "one");
        assert_eq!(console.remaining_inputs(), vec!["two"]);
        assert_eq!(io.input.read_line().unwrap(), "two");
        assert!(matches!(io.input.read_line(), Err(MenuError::EndOfInput)));
    }

    #[test]
    fn test_records_outputs() {
        let console = ScriptedConsole::new();
        let io = console.io();
        io.output.print("a").unwrap();
        io.output.vertical_space().unwrap();
        assert_eq!(console.outputs(), vec!["a", "\n"]);
        assert_eq!(console.transcript(), "a\n");
    }

    #[test]
    fn test_ignore_blanks() {
        let console = ScriptedConsole::new().ignore_blanks();
        let io = console.io();
        io.output.vertical_space().unwrap();
        io.output.print("kept").unwrap();
        assert_eq!(console.outputs(), vec!["kept"]);
    }
}
