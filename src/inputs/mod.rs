//! Prompts: one validated question-and-answer exchange each
//!
//! Raw input goes through a [`StringValidator`] and then a transformer that
//! turns it into a typed value. Either stage can reject the input, in which
//! case the prompt shows the message and asks whether to try again.

pub mod prompt;
pub mod selection;
pub mod timestamp;
pub mod validators;
pub mod with_default;

use crate::error::Result;

pub use prompt::{user_doesnt_say_no, user_says_yes, SimplePrompt};
pub use selection::SelectionPrompt;
pub use timestamp::{date_from_user, timestamp_from_user, TimestampPrompt};
pub use validators::{
    AcceptAnything, CurrencyAmount, Email, InRangeInclusive, NonBlank, NonNegative, NotInList,
    Positive, StringValidator,
};
pub use with_default::PromptWithDefault;

/// Converts validated input to a value, or explains why it cannot
pub type Transformer<T> = Box<dyn Fn(&str) -> std::result::Result<T, String> + Send + Sync>;

/// A question whose answer is a `T`
pub trait Prompt<T> {
    /// Ask until an acceptable answer arrives. `Ok(None)` means the user
    /// declined to try again after a rejected answer.
    fn get_result(&self) -> Result<Option<T>>;
}
