//! Prompt whose blank answer means "use the default"

use crate::error::Result;
use crate::inputs::prompt::offer_retry;
use crate::inputs::validators::{AcceptAnything, StringValidator};
use crate::inputs::{Prompt, Transformer};
use crate::io::ConsoleIo;

/// Blank input returns `default_value` without any retry question.
/// Other input must pass the additional validation and the transformer,
/// otherwise the user is offered another try.
pub struct PromptWithDefault<T> {
    basic_prompt: String,
    default_value: T,
    io: ConsoleIo,
    additional_validation: Box<dyn StringValidator>,
    transformer: Transformer<T>,
}

impl PromptWithDefault<String> {
    pub fn new(basic_prompt: impl Into<String>, default_value: impl Into<String>, io: ConsoleIo) -> Self {
        Self::with_transformer(basic_prompt, default_value.into(), io, |input| {
            Ok(input.to_string())
        })
    }
}

impl<T> PromptWithDefault<T> {
    pub fn with_transformer(
        basic_prompt: impl Into<String>,
        default_value: T,
        io: ConsoleIo,
        transformer: impl Fn(&str) -> std::result::Result<T, String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            basic_prompt: basic_prompt.into(),
            default_value,
            io,
            additional_validation: Box::new(AcceptAnything),
            transformer: Box::new(transformer),
        }
    }

    /// Check applied to non-blank input before transforming it
    pub fn additional_validation(mut self, validator: impl StringValidator + 'static) -> Self {
        self.additional_validation = Box::new(validator);
        self
    }

    pub fn default_value(&self) -> &T {
        &self.default_value
    }
}

impl<T: Clone> Prompt<T> for PromptWithDefault<T> {
    fn get_result(&self) -> Result<Option<T>> {
        loop {
            self.io.output.print(&self.basic_prompt)?;
            let input = self.io.input.read_line()?;
            if input.trim().is_empty() {
                return Ok(Some(self.default_value.clone()));
            }
            let message = if self.additional_validation.validate(&input) {
                match (self.transformer)(&input) {
                    Ok(value) => return Ok(Some(value)),
                    Err(message) => message,
                }
            } else {
                self.additional_validation.error_message()
            };
            if !offer_retry(&self.io, &message)? {
                return Ok(None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::validators::{CurrencyAmount, Positive};
    use crate::io::input::MockInputReader;
    use crate::testing::ScriptedConsole;
    use std::sync::Arc;

    #[test]
    fn test_blank_returns_default_without_retry() {
        let console = ScriptedConsole::new();
        let mut input = MockInputReader::new();
        input.expect_read_line().times(1).returning(|| Ok(String::new()));
        let io = ConsoleIo::new(Arc::new(input), console.io().output);

        let prompt = PromptWithDefault::new("Description [income]: ", "income", io);
        assert_eq!(prompt.get_result().unwrap().as_deref(), Some("income"));
        assert_eq!(console.outputs(), vec!["Description [income]: "]);
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let console = ScriptedConsole::with_inputs(["   "]);
        let prompt = PromptWithDefault::new("Name [x]: ", "x", console.io())
            .additional_validation(Positive);
        assert_eq!(prompt.get_result().unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_additional_validation_failure_offers_retry() {
        let console = ScriptedConsole::with_inputs(["-3", "y", "2.50"]);
        let prompt = PromptWithDefault::with_transformer(
            "Amount [1.00]: ",
            CurrencyAmount::from_cents(100),
            console.io(),
            |input| CurrencyAmount::parse(input).ok_or_else(|| "Not an amount".to_string()),
        )
        .additional_validation(Positive);

        assert_eq!(
            prompt.get_result().unwrap(),
            Some(CurrencyAmount::from_cents(250))
        );
        assert_eq!(
            console.outputs(),
            vec![
                "Amount [1.00]: ",
                "\nAmount must be positive\n\n",
                "Try again? [Y/n]: ",
                "Amount [1.00]: ",
            ]
        );
    }

    #[test]
    fn test_transformer_failure_then_give_up() {
        let console = ScriptedConsole::with_inputs(["twelve", "n"]);
        let prompt = PromptWithDefault::with_transformer("Count [3]: ", 3u32, console.io(), |input| {
            input.parse().map_err(|_| "Must enter a whole number.".to_string())
        });
        assert_eq!(prompt.get_result().unwrap(), None);
        assert_eq!(console.outputs()[1], "\nMust enter a whole number.\n\n");
    }
}
