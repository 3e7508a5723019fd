//! String validators used by prompts
//!
//! A validator is a predicate plus the message shown when it rejects.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Accepts or rejects raw input
pub trait StringValidator: Send + Sync {
    /// `true` if the input is acceptable
    fn validate(&self, input: &str) -> bool;

    fn error_message(&self) -> String;
}

/// Rejects empty or whitespace-only input
#[derive(Debug, Clone, Copy, Default)]
pub struct NonBlank;

impl StringValidator for NonBlank {
    fn validate(&self, input: &str) -> bool {
        !input.trim().is_empty()
    }

    fn error_message(&self) -> String {
        "Entry must not be blank.".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAnything;

impl StringValidator for AcceptAnything {
    fn validate(&self, _input: &str) -> bool {
        true
    }

    fn error_message(&self) -> String {
        String::new()
    }
}

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .expect("Invalid regex pattern for email validation")
});

/// Email address with a dotted domain and an alphabetic top-level label
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl StringValidator for Email {
    fn validate(&self, input: &str) -> bool {
        EMAIL_PATTERN.is_match(input)
    }

    fn error_message(&self) -> String {
        "Must enter a valid email address.".to_string()
    }
}

static AMOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-])?(\d*)(?:\.(\d{0,2}))?$")
        .expect("Invalid regex pattern for currency amounts")
});

/// Money amount with two fractional digits, stored in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CurrencyAmount {
    cents: i64,
}

impl CurrencyAmount {
    pub const ZERO: CurrencyAmount = CurrencyAmount { cents: 0 };

    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Parse `"12"`, `"12.3"`, `"-0.25"` and the like. More than two
    /// fractional digits is rejected rather than rounded.
    pub fn parse(input: &str) -> Option<Self> {
        let caps = AMOUNT_PATTERN.captures(input)?;
        let whole = caps.get(2).map_or("", |m| m.as_str());
        let fraction = caps.get(3).map_or("", |m| m.as_str());
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let fraction: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().ok()? * 10,
            _ => fraction.parse().ok()?,
        };
        let magnitude = whole.checked_mul(100)?.checked_add(fraction)?;
        let negative = caps.get(1).is_some_and(|m| m.as_str() == "-");
        Some(Self {
            cents: if negative { -magnitude } else { magnitude },
        })
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let magnitude = self.cents.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
    }
}

/// Amount strictly greater than zero
#[derive(Debug, Clone, Copy, Default)]
pub struct Positive;

impl StringValidator for Positive {
    fn validate(&self, input: &str) -> bool {
        CurrencyAmount::parse(input).is_some_and(|amount| amount > CurrencyAmount::ZERO)
    }

    fn error_message(&self) -> String {
        "Amount must be positive".to_string()
    }
}

/// Amount of zero or more
#[derive(Debug, Clone, Copy, Default)]
pub struct NonNegative;

impl StringValidator for NonNegative {
    fn validate(&self, input: &str) -> bool {
        CurrencyAmount::parse(input).is_some_and(|amount| amount >= CurrencyAmount::ZERO)
    }

    fn error_message(&self) -> String {
        "Amount must be non-negative".to_string()
    }
}

/// Rejects exact matches of any forbidden entry. `label` describes the list.
#[derive(Debug, Clone)]
pub struct NotInList {
    pub list: Vec<String>,
    pub label: String,
}

impl NotInList {
    pub fn new(list: Vec<String>, label: impl Into<String>) -> Self {
        Self {
            list,
            label: label.into(),
        }
    }
}

impl StringValidator for NotInList {
    fn validate(&self, input: &str) -> bool {
        !self.list.iter().any(|entry| entry == input)
    }

    fn error_message(&self) -> String {
        format!("Input must not be {}.", self.label)
    }
}

/// Amount between `min` and `max`, both included
#[derive(Debug, Clone, Copy)]
pub struct InRangeInclusive {
    pub min: CurrencyAmount,
    pub max: CurrencyAmount,
}

impl InRangeInclusive {
    pub fn new(min: CurrencyAmount, max: CurrencyAmount) -> Self {
        Self { min, max }
    }
}

impl StringValidator for InRangeInclusive {
    fn validate(&self, input: &str) -> bool {
        CurrencyAmount::parse(input).is_some_and(|amount| (self.min..=self.max).contains(&amount))
    }

    fn error_message(&self) -> String {
        format!("Amount must be between {} and {}", self.min, self.max)
    }
}
