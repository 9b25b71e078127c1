//! Date-of-birth validation.
//!
//! Handles:
//! - Lexical shape (`dd-mm-yyyy`, ASCII digits only)
//! - Calendar validity (year 1..=9999, month 1..=12, day within the month)
//! - February length by leap year, and the 30-day months (04, 06, 09, 11),
//!   re-checked after the calendar rules

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use crate::models::BirthDate;

static DOB_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})-([0-9]{2})-([0-9]{4})$").expect("Invalid date-of-birth regex")
});

/// Months with 30 days.
const THIRTY_DAY_MONTHS: [u32; 4] = [4, 6, 9, 11];

/// Date-of-birth validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date format. Use dd-mm-yyyy.")]
    InvalidFormat,

    #[error(transparent)]
    InvalidCalendar(#[from] CalendarRule),
}

/// Calendar rules a well-formed date can violate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarRule {
    #[error("year {year} is out of range")]
    YearOutOfRange { year: i32 },

    #[error("month must be in 1..12")]
    MonthOutOfRange,

    #[error("day is out of range for month")]
    DayOutOfRange,

    #[error("February has only 28 or 29 days.")]
    FebruaryLength,

    #[error("Month {month:02} has only 30 days.")]
    ThirtyDayMonth { month: u32 },
}

/// Leap year: divisible by 4, and not by 100 unless also by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Validate a `dd-mm-yyyy` date of birth.
///
/// The input is matched as given; callers trim surrounding whitespace first.
pub fn validate_date_of_birth(input: &str) -> Result<BirthDate, DateError> {
    let caps = DOB_REGEX.captures(input).ok_or(DateError::InvalidFormat)?;

    let day: u32 = caps[1].parse().map_err(|_| DateError::InvalidFormat)?;
    let month: u32 = caps[2].parse().map_err(|_| DateError::InvalidFormat)?;
    let year: i32 = caps[3].parse().map_err(|_| DateError::InvalidFormat)?;

    let date = calendar_date(year, month, day)?;
    check_month_length(year, month, day)?;
    Ok(BirthDate::new(date))
}

/// Standard calendar rules, checked year, then month, then day.
fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarRule> {
    if year < 1 {
        return Err(CalendarRule::YearOutOfRange { year });
    }
    if !(1..=12).contains(&month) {
        return Err(CalendarRule::MonthOutOfRange);
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarRule::DayOutOfRange)
}

/// Explicit February and 30-day month rules.
fn check_month_length(year: i32, month: u32, day: u32) -> Result<(), CalendarRule> {
    if month == 2 && (day > 29 || (day == 29 && !is_leap_year(year))) {
        return Err(CalendarRule::FebruaryLength);
    }
    if THIRTY_DAY_MONTHS.contains(&month) && day > 30 {
        return Err(CalendarRule::ThirtyDayMonth { month });
    }
    Ok(())
}
