//! Choose one value from a numbered list

use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::inputs::Prompt;
use crate::io::ConsoleIo;
use crate::menu::{format_menu, DEFAULT_PROMPT};

/// Renders `options` like a menu and returns the one picked by number.
/// Anything other than a valid number re-renders the list.
pub struct SelectionPrompt<T> {
    header: Option<String>,
    prompt: String,
    options: Vec<T>,
    io: ConsoleIo,
}

impl<T> SelectionPrompt<T> {
    /// # Panics
    /// If `options` is empty.
    pub fn new(header: Option<String>, options: Vec<T>, io: ConsoleIo) -> Self {
        assert!(!options.is_empty(), "selection prompt needs at least one option");
        Self {
            header,
            prompt: DEFAULT_PROMPT.to_string(),
            options,
            io,
        }
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

impl<T: fmt::Display + Clone> Prompt<T> for SelectionPrompt<T> {
    fn get_result(&self) -> Result<Option<T>> {
        let mut listing = format_menu(self.header.as_deref(), &self.options);
        listing.push_str(&self.prompt);
        loop {
            self.io.output.print(&listing)?;
            let input = self.io.input.read_line()?;
            let chosen = input
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|choice| choice.checked_sub(1))
                .and_then(|index| self.options.get(index));
            match chosen {
                Some(option) => return Ok(Some(option.clone())),
                None => debug!(input = %input, "No option selected"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConsole;

    #[test]
    fn test_select_by_number() {
        let console = ScriptedConsole::with_inputs(["2"]);
        let prompt = SelectionPrompt::new(
            Some("Pick a colour".into()),
            vec!["red", "green"],
            console.io(),
        );
        assert_eq!(prompt.get_result().unwrap(), Some("green"));
        assert_eq!(
            console.outputs(),
            vec!["Pick a colour\n 1. red\n 2. green\nEnter selection: "]
        );
    }

    #[test]
    fn test_invalid_choice_redisplays() {
        let console = ScriptedConsole::with_inputs(["0", "three", "1"]);
        let prompt = SelectionPrompt::new(None, vec![10, 20, 30], console.io()).prompt("Which? ");
        assert_eq!(prompt.get_result().unwrap(), Some(10));
        let outputs = console.outputs();
        assert_eq!(outputs.len(), 3);
        assert!(outputs.iter().all(|o| o == " 1. 10\n 2. 20\n 3. 30\nWhich? "));
    }
}
