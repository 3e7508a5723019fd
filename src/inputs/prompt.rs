//! The basic prompt and the yes/no helpers built on it

use tracing::debug;

use crate::error::Result;
use crate::inputs::validators::{AcceptAnything, NonBlank, StringValidator};
use crate::inputs::{Prompt, Transformer};
use crate::io::ConsoleIo;

/// Prints `basic_prompt`, reads a line, validates then transforms it
pub struct SimplePrompt<T> {
    basic_prompt: String,
    io: ConsoleIo,
    validator: Box<dyn StringValidator>,
    transformer: Transformer<T>,
}

impl SimplePrompt<String> {
    /// Non-blank text returned as typed
    pub fn new(basic_prompt: impl Into<String>, io: ConsoleIo) -> Self {
        Self::with_transformer(basic_prompt, io, |input| Ok(input.to_string()))
    }
}

impl<T> SimplePrompt<T> {
    pub fn with_transformer(
        basic_prompt: impl Into<String>,
        io: ConsoleIo,
        transformer: impl Fn(&str) -> std::result::Result<T, String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            basic_prompt: basic_prompt.into(),
            io,
            validator: Box::new(NonBlank),
            transformer: Box::new(transformer),
        }
    }

    /// Replace the default [`NonBlank`] check
    pub fn validator(mut self, validator: impl StringValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }
}

impl<T> Prompt<T> for SimplePrompt<T> {
    fn get_result(&self) -> Result<Option<T>> {
        loop {
            self.io.output.print(&self.basic_prompt)?;
            let input = self.io.input.read_line()?;
            let message = if self.validator.validate(&input) {
                match (self.transformer)(&input) {
                    Ok(value) => return Ok(Some(value)),
                    Err(message) => message,
                }
            } else {
                self.validator.error_message()
            };
            debug!(input = %input, "Rejected prompt input");
            if !offer_retry(&self.io, &message)? {
                return Ok(None);
            }
        }
    }
}

/// Show `message` and ask whether to try again. Anything but "n" means yes.
pub(crate) fn offer_retry(io: &ConsoleIo, message: &str) -> Result<bool> {
    io.output.important(message)?;
    user_doesnt_say_no(io, "Try again?")
}

/// Ask `question` with yes as the default answer
pub fn user_doesnt_say_no(io: &ConsoleIo, question: &str) -> Result<bool> {
    let answer = SimplePrompt::with_transformer(format!("{question} [Y/n]: "), io.clone(), |input| {
        Ok(!matches!(input.trim(), "n" | "N"))
    })
    .validator(AcceptAnything)
    .get_result()?;
    Ok(answer.unwrap_or(true))
}

/// Ask `question` with no as the default answer
pub fn user_says_yes(io: &ConsoleIo, question: &str) -> Result<bool> {
    let answer = SimplePrompt::with_transformer(format!("{question} [y/N]: "), io.clone(), |input| {
        Ok(matches!(input.trim(), "y" | "Y"))
    })
    .validator(AcceptAnything)
    .get_result()?;
    Ok(answer.unwrap_or(false))
}
