//! Age calculation.

use chrono::{Datelike, NaiveDate};

use crate::models::BirthDate;

/// Completed years between `dob` and `today`.
///
/// One year is subtracted while this year's birthday is still ahead, comparing
/// `(month, day)` pairs. A birth date after `today` gives a negative age.
pub fn age_on(dob: &BirthDate, today: NaiveDate) -> i32 {
    let birth = dob.date();
    let birthday_pending = (today.month(), today.day()) < (birth.month(), birth.day());
    today.year() - birth.year() - i32::from(birthday_pending)
}
