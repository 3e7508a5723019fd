//! Date and time entry, one component at a time
//!
//! The user first accepts or rejects a default timestamp. Rejecting it
//! walks through year, month, day and, unless only a date is wanted, hour,
//! minute and second. Each component defaults to the matching part of the
//! default timestamp.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::debug;

use crate::error::{MenuError, Result};
use crate::inputs::prompt::offer_retry;
use crate::inputs::with_default::PromptWithDefault;
use crate::inputs::Prompt;
use crate::io::ConsoleIo;

/// Question asked before offering the current time
pub const DEFAULT_TIMESTAMP_QUERY: &str = "Use current time [Y]? ";

/// Question asked before offering today's date
pub const DEFAULT_DATE_QUERY: &str = "Use today's date [Y]? ";

/// The user stopped part way through; `field` names the component they gave up on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaveUp {
    pub field: &'static str,
}

/// Composite prompt producing a [`NaiveDateTime`]
pub struct TimestampPrompt {
    query: String,
    default: NaiveDateTime,
    io: ConsoleIo,
    date_only: bool,
}

impl TimestampPrompt {
    pub fn new(query: impl Into<String>, default: NaiveDateTime, io: ConsoleIo) -> Self {
        Self {
            query: query.into(),
            default,
            io,
            date_only: false,
        }
    }

    /// Skip the time components; the result is at midnight
    pub fn date_only(mut self) -> Self {
        self.date_only = true;
        self
    }

    fn default_value(&self) -> NaiveDateTime {
        if self.date_only {
            self.default.date().and_time(NaiveTime::MIN)
        } else {
            self.default
        }
    }

    /// Like [`Prompt::get_result`] but says which component was abandoned
    pub fn entry(&self) -> Result<std::result::Result<NaiveDateTime, GaveUp>> {
        loop {
            self.io.output.print(&self.query)?;
            let answer = self.io.input.read_line()?;
            if matches!(answer.trim(), "" | "y" | "Y") {
                return Ok(Ok(self.default_value()));
            }
            match self.components()? {
                Components::Valid(timestamp) => return Ok(Ok(timestamp)),
                Components::GaveUp(gave_up) => {
                    debug!(field = gave_up.field, "Timestamp entry abandoned");
                    return Ok(Err(gave_up));
                }
                Components::Invalid(message) => {
                    if !offer_retry(&self.io, &message)? {
                        return Ok(Err(GaveUp { field: "date" }));
                    }
                }
            }
        }
    }

    fn components(&self) -> Result<Components> {
        let d = self.default;
        let Some(year) = self.component(
            format!("         year [{}]: ", d.year()),
            i64::from(d.year()),
            1..=9999,
        )?
        else {
            return Ok(Components::GaveUp(GaveUp { field: "year" }));
        };
        let Some(month) = self.component(
            format!("   month (1-12) [{:2}]: ", d.month()),
            i64::from(d.month()),
            1..=12,
        )?
        else {
            return Ok(Components::GaveUp(GaveUp { field: "month" }));
        };
        let Some(day) = self.component(
            format!("   day of month [{:2}]: ", d.day()),
            i64::from(d.day()),
            1..=31,
        )?
        else {
            return Ok(Components::GaveUp(GaveUp {
                field: "day of month",
            }));
        };

        let (hour, minute, second) = if self.date_only {
            (0, 0, 0)
        } else {
            let Some(hour) = self.component(
                format!("hour (24-clock) [{:2}]: ", d.hour()),
                i64::from(d.hour()),
                0..=23,
            )?
            else {
                return Ok(Components::GaveUp(GaveUp { field: "hour" }));
            };
            let Some(minute) = self.component(
                format!(" minute of hour [{:2}]: ", d.minute()),
                i64::from(d.minute()),
                0..=59,
            )?
            else {
                return Ok(Components::GaveUp(GaveUp { field: "minute" }));
            };
            let Some(second) = self.component(
                format!("         second [{:2}]: ", d.second()),
                i64::from(d.second()),
                0..=59,
            )?
            else {
                return Ok(Components::GaveUp(GaveUp { field: "second" }));
            };
            (hour, minute, second)
        };

        // Components are range-checked above so the narrowing casts are lossless
        let timestamp = NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
            .and_then(|date| date.and_hms_opt(hour as u32, minute as u32, second as u32));
        Ok(match timestamp {
            Some(timestamp) => Components::Valid(timestamp),
            None => Components::Invalid(format!(
                "{year:04}-{month:02}-{day:02} is not a valid date."
            )),
        })
    }

    fn component(
        &self,
        prompt: String,
        default: i64,
        range: RangeInclusive<i64>,
    ) -> Result<Option<i64>> {
        PromptWithDefault::with_transformer(prompt, default, self.io.clone(), move |input| {
            let value: i64 = input
                .trim()
                .parse()
                .map_err(|_| "Must enter a whole number.".to_string())?;
            if range.contains(&value) {
                Ok(value)
            } else {
                Err(format!(
                    "Must be between {} and {}.",
                    range.start(),
                    range.end()
                ))
            }
        })
        .get_result()
    }
}

enum Components {
    Valid(NaiveDateTime),
    GaveUp(GaveUp),
    Invalid(String),
}

impl Prompt<NaiveDateTime> for TimestampPrompt {
    fn get_result(&self) -> Result<Option<NaiveDateTime>> {
        Ok(self.entry()?.ok())
    }
}

/// Ask for a timestamp defaulting to `now`. Giving up part way cancels
/// back to the current menu with "No <field> entered.".
pub fn timestamp_from_user(io: &ConsoleIo, query: &str, now: NaiveDateTime) -> Result<NaiveDateTime> {
    TimestampPrompt::new(query, now, io.clone())
        .entry()?
        .map_err(|gave_up| MenuError::try_again(format!("No {} entered.", gave_up.field)))
}

/// Date-only counterpart of [`timestamp_from_user`]
pub fn date_from_user(io: &ConsoleIo, query: &str, today: NaiveDate) -> Result<NaiveDate> {
    TimestampPrompt::new(query, today.and_time(NaiveTime::MIN), io.clone())
        .date_only()
        .entry()?
        .map(|timestamp| timestamp.date())
        .map_err(|gave_up| MenuError::try_again(format!("No {} entered.", gave_up.field)))
}
