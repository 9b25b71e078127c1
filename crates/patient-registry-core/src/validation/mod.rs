//! Field validators.
//!
//! Each validator is a pure function returning the validated field type or an
//! error whose `Display` is the message shown to the user before re-prompting.

mod date;
mod phone;

pub use date::*;
pub use phone::*;
