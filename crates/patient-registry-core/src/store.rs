//! In-memory patient store.

use crate::models::{NewPatient, Patient, PatientId};

/// Ordered patient records plus the next-id counter.
///
/// Insertion order is listing order. IDs start at 1, increase by one per insert,
/// and are never reused after a removal.
#[derive(Debug, Clone)]
pub struct PatientStore {
    patients: Vec<Patient>,
    next_id: PatientId,
}

impl Default for PatientStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            patients: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a record with the next ID and advance the counter.
    pub fn insert(&mut self, new: NewPatient, age: i32) -> &Patient {
        let index = self.patients.len();
        self.patients.push(Patient {
            id: self.next_id,
            first_name: new.first_name,
            last_name: new.last_name,
            date_of_birth: new.date_of_birth,
            age,
            hometown: new.hometown,
            house_number: new.house_number,
            phone: new.phone,
        });
        self.next_id += 1;
        &self.patients[index]
    }

    /// Linear scan for a record.
    pub fn find_by_id(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: PatientId) -> Option<&mut Patient> {
        self.patients.iter_mut().find(|p| p.id == id)
    }

    /// Remove a record, preserving the order of the rest.
    pub fn remove_by_id(&mut self, id: PatientId) -> Option<Patient> {
        let index = self.patients.iter().position(|p| p.id == id)?;
        Some(self.patients.remove(index))
    }

    pub fn as_slice(&self) -> &[Patient] {
        &self.patients
    }

    pub fn iter(&self) -> impl Iterator<Item = &Patient> {
        self.patients.iter()
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// ID the next insert will receive.
    pub fn next_id(&self) -> PatientId {
        self.next_id
    }
}
