//! Phone number validation.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::PhoneNumber;

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("Invalid phone regex"));

/// Phone validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    #[error("Invalid phone number format. Use xxx-xxx-xxxx.")]
    InvalidFormat,
}

/// Validate an `xxx-xxx-xxxx` phone number.
pub fn validate_phone(input: &str) -> Result<PhoneNumber, PhoneError> {
    if PHONE_REGEX.is_match(input) {
        Ok(PhoneNumber::new(input.to_string()))
    } else {
        Err(PhoneError::InvalidFormat)
    }
}
