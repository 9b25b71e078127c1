//! Source of "today" for age calculation.

use chrono::{Local, NaiveDate};

/// Where the current date comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Local system date.
    #[default]
    System,
    /// A pinned date (`--today`).
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Parse a `dd-mm-yyyy` date for `--today`.
pub fn parse_today(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), "%d-%m-%Y")
        .map_err(|e| format!("expected dd-mm-yyyy: {e}"))
}
