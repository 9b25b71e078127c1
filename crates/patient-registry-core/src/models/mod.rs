//! Domain models for the patient registry.

mod fields;
mod patient;

pub use fields::*;
pub use patient::*;
