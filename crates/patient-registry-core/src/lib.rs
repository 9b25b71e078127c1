//! Patient Registry Core Library
//!
//! In-memory patient record management with date-of-birth and phone validation.
//!
//! # Architecture
//!
//! ```text
//!   raw input ──► Validators ──► BirthDate / PhoneNumber
//!                                     │
//!                                     ▼
//!                              Record Operations ──► Age Calculator
//!                                     │
//!                                     ▼
//!                               PatientStore
//!                       (ordered Vec + next-id counter)
//! ```
//!
//! # Core Principle
//!
//! **Validated fields are typed.** A [`BirthDate`] or [`PhoneNumber`] can only be
//! produced by its validator, so a stored record always satisfies the format rules
//! at the moment it was written.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, NewPatient, PatientUpdate, BirthDate, PhoneNumber)
//! - [`validation`]: Date-of-birth and phone validators
//! - [`age`]: Whole-years age calculation
//! - [`store`]: Ordered in-memory record store with a never-reused id counter
//! - [`records`]: Add/list/find/update/delete operations over the store

pub mod age;
pub mod models;
pub mod records;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use age::age_on;
pub use models::{BirthDate, NewPatient, Patient, PatientId, PatientUpdate, PhoneNumber};
pub use records::{RegistryError, RegistryResult};
pub use store::PatientStore;
pub use validation::{is_leap_year, validate_date_of_birth, validate_phone, DateError, PhoneError};
