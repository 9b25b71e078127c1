//! Patient models.

use std::fmt;

use super::fields::{BirthDate, PhoneNumber};

/// Sequential patient identifier, assigned by the store starting at 1.
pub type PatientId = u32;

/// A stored patient record.
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    /// Store-assigned ID, immutable once assigned
    pub id: PatientId,
    /// First name (not validated)
    pub first_name: String,
    /// Last name (not validated)
    pub last_name: String,
    /// Date of birth
    pub date_of_birth: BirthDate,
    /// Age in whole years as of the last write of `date_of_birth`
    pub age: i32,
    /// Hometown (free text)
    pub hometown: String,
    /// House number (free text)
    pub house_number: String,
    /// Phone number
    pub phone: PhoneNumber,
}

impl Patient {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.full_name())?;
        writeln!(f, "Date of Birth: {} (Age: {})", self.date_of_birth, self.age)?;
        writeln!(f, "Hometown: {}", self.hometown)?;
        writeln!(f, "House Number: {}", self.house_number)?;
        writeln!(f, "Phone: {}", self.phone)?;
        write!(f, "{}", "-".repeat(30))
    }
}

/// Fields collected for a new patient, before an ID is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: BirthDate,
    pub hometown: String,
    pub house_number: String,
    pub phone: PhoneNumber,
}

/// A partial update. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<BirthDate>,
    pub hometown: Option<String>,
    pub house_number: Option<String>,
    pub phone: Option<PhoneNumber>,
}

impl PatientUpdate {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.date_of_birth.is_none()
            && self.hometown.is_none()
            && self.house_number.is_none()
            && self.phone.is_none()
    }
}
