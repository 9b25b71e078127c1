//! Record operations over a [`PatientStore`].
//!
//! Every operation takes the store explicitly; there is no global state.
//! "Today" is passed in by the caller so ages are reproducible.

use std::num::IntErrorKind;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

use crate::age::age_on;
use crate::models::{NewPatient, Patient, PatientId, PatientUpdate};
use crate::store::PatientStore;

/// Registry errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Holds the requested value, which may lie outside the `PatientId` range.
    #[error("Patient not found.")]
    NotFound(i64),

    #[error("Invalid ID.")]
    InvalidId(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Parse a user-supplied patient ID.
///
/// Only non-integer text is an `InvalidId`. Integers that no record can carry
/// (negative, or too large for a `PatientId`) are `NotFound`; overflowing
/// input saturates to `i64::MIN`/`i64::MAX`.
pub fn parse_patient_id(input: &str) -> RegistryResult<PatientId> {
    let requested = match input.trim().parse::<i64>() {
        Ok(value) => value,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => return Err(RegistryError::InvalidId(input.to_string())),
        },
    };
    PatientId::try_from(requested).map_err(|_| RegistryError::NotFound(requested))
}

/// Add a patient, computing age from the birth date as of `today`.
pub fn add_patient(store: &mut PatientStore, new: NewPatient, today: NaiveDate) -> &Patient {
    let age = age_on(&new.date_of_birth, today);
    let patient = store.insert(new, age);
    info!(patient_id = patient.id, "Patient added");
    patient
}

/// All patients in insertion order.
pub fn list_patients(store: &PatientStore) -> &[Patient] {
    store.as_slice()
}

/// Look up a patient by ID.
pub fn find_patient(store: &PatientStore, id: PatientId) -> RegistryResult<&Patient> {
    let found = store.find_by_id(id);
    debug!(patient_id = id, found = found.is_some(), "Patient lookup");
    found.ok_or(RegistryError::NotFound(id.into()))
}

/// Apply a partial update.
///
/// Empty text fields are treated as "keep". Age is recomputed only when the
/// birth date changes.
pub fn update_patient(
    store: &mut PatientStore,
    id: PatientId,
    update: PatientUpdate,
    today: NaiveDate,
) -> RegistryResult<&Patient> {
    let patient = store
        .find_by_id_mut(id)
        .ok_or(RegistryError::NotFound(id.into()))?;

    apply_text(&mut patient.first_name, update.first_name);
    apply_text(&mut patient.last_name, update.last_name);
    if let Some(dob) = update.date_of_birth {
        patient.age = age_on(&dob, today);
        patient.date_of_birth = dob;
    }
    apply_text(&mut patient.hometown, update.hometown);
    apply_text(&mut patient.house_number, update.house_number);
    if let Some(phone) = update.phone {
        patient.phone = phone;
    }

    info!(patient_id = id, "Patient updated");
    Ok(&*patient)
}

/// Remove a patient. The store is untouched when the ID is absent.
pub fn delete_patient(store: &mut PatientStore, id: PatientId) -> RegistryResult<Patient> {
    let removed = store
        .remove_by_id(id)
        .ok_or(RegistryError::NotFound(id.into()))?;
    info!(patient_id = id, "Patient deleted");
    Ok(removed)
}

fn apply_text(field: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *field = value;
    }
}
