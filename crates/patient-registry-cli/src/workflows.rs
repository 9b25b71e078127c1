//! Interactive record workflows.
//!
//! Each workflow drives the [`Console`] and delegates to the core record
//! operations. Lookup and ID errors abort the workflow with a message; date
//! and phone errors re-prompt until a valid (or, during update, blank) answer.

use std::io::{BufRead, Write};

use patient_registry_core::records::{self, parse_patient_id};
use patient_registry_core::{
    validate_date_of_birth, validate_phone, NewPatient, PatientId, PatientStore, PatientUpdate,
};
use tracing::debug;

use crate::clock::Clock;
use crate::console::{Console, ConsoleResult};

/// Collect a new patient and add it to the store.
pub fn add_patient<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut PatientStore,
    clock: Clock,
) -> ConsoleResult<PatientId> {
    console.say("\n--- Add New Patient ---")?;

    let first_name = console.prompt("Enter First Name: ")?;
    let last_name = console.prompt("Enter Last Name: ")?;
    let date_of_birth =
        console.prompt_until("Enter Date of Birth (dd-mm-yyyy): ", validate_date_of_birth)?;
    let hometown = console.prompt("Enter Hometown: ")?;
    let house_number = console.prompt("Enter House Number: ")?;
    let phone = console.prompt_until("Enter Phone Number (xxx-xxx-xxxx): ", validate_phone)?;

    let new = NewPatient {
        first_name,
        last_name,
        date_of_birth,
        hometown,
        house_number,
        phone,
    };
    let patient = records::add_patient(store, new, clock.today());
    let id = patient.id;
    let message = format!(
        "Patient {} added successfully with ID {}.\n",
        patient.full_name(),
        id
    );
    console.say(message)?;
    Ok(id)
}

/// Print every patient in insertion order.
pub fn list_patients<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &PatientStore,
) -> ConsoleResult<()> {
    console.say("\n--- All Patients ---")?;
    let patients = records::list_patients(store);
    if patients.is_empty() {
        return console.say("No patients found.");
    }
    for patient in patients {
        console.say(patient)?;
    }
    Ok(())
}

/// Ask for an ID and print the matching patient.
pub fn search_patient<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &PatientStore,
) -> ConsoleResult<()> {
    let Some(id) = read_patient_id(console)? else {
        return Ok(());
    };
    match records::find_patient(store, id) {
        Ok(patient) => console.say(patient),
        Err(e) => console.say(e),
    }
}

/// Ask for an ID and update that patient field by field.
///
/// A blank answer keeps the current value. A non-blank birth date or phone
/// number is re-prompted until it validates or the answer is blank.
pub fn update_patient<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut PatientStore,
    clock: Clock,
) -> ConsoleResult<()> {
    let Some(id) = read_patient_id(console)? else {
        return Ok(());
    };
    let current = match records::find_patient(store, id) {
        Ok(patient) => patient.clone(),
        Err(e) => return console.say(e),
    };

    console.say("\n--- Update Patient ---")?;
    console.say(&current)?;
    console.say("Leave fields blank to keep existing values.")?;

    let update = PatientUpdate {
        first_name: console.prompt_keep(&format!("First Name [{}]: ", current.first_name))?,
        last_name: console.prompt_keep(&format!("Last Name [{}]: ", current.last_name))?,
        date_of_birth: console.prompt_optional(
            &format!("Date of Birth (dd-mm-yyyy) [{}]: ", current.date_of_birth),
            validate_date_of_birth,
        )?,
        hometown: console.prompt_keep(&format!("Hometown [{}]: ", current.hometown))?,
        house_number: console.prompt_keep(&format!("House Number [{}]: ", current.house_number))?,
        phone: console.prompt_optional(
            &format!("Phone Number [{}]: ", current.phone),
            validate_phone,
        )?,
    };
    debug!(patient_id = id, unchanged = update.is_empty(), "Update collected");

    match records::update_patient(store, id, update, clock.today()) {
        Ok(_) => console.say("Patient updated successfully.\n"),
        Err(e) => console.say(e),
    }
}

/// Ask for an ID and delete that patient.
pub fn delete_patient<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut PatientStore,
) -> ConsoleResult<()> {
    let Some(id) = read_patient_id(console)? else {
        return Ok(());
    };
    match records::delete_patient(store, id) {
        Ok(_) => console.say(format!("Patient with ID {} deleted successfully.\n", id)),
        Err(e) => console.say(e),
    }
}

/// Read an ID; prints the error and yields `None` when no record can match it.
fn read_patient_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> ConsoleResult<Option<PatientId>> {
    let answer = console.prompt("Enter Patient ID: ")?;
    match parse_patient_id(&answer) {
        Ok(id) => Ok(Some(id)),
        Err(e) => {
            console.say(e)?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: &TestConsole) -> String {
        String::from_utf8_lossy(console.output()).into_owned()
    }

    fn clock() -> Clock {
        Clock::Fixed(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap())
    }

    const ADD_JANE: &str = "Jane\nDoe\n15-06-1990\nLeeds\n4A\n123-456-7890\n";

    fn store_with_jane() -> PatientStore {
        let mut store = PatientStore::new();
        add_patient(&mut console(ADD_JANE), &mut store, clock()).unwrap();
        store
    }

    #[test]
    fn test_add_patient() {
        let mut store = PatientStore::new();
        let mut c = console(ADD_JANE);
        let id = add_patient(&mut c, &mut store, clock()).unwrap();

        assert_eq!(id, 1);
        let patient = store.find_by_id(1).unwrap();
        assert_eq!(patient.full_name(), "Jane Doe");
        assert_eq!(patient.age, 33);
        assert_eq!(patient.house_number, "4A");
        assert!(transcript(&c).contains("Patient Jane Doe added successfully with ID 1."));
    }

    #[test]
    fn test_add_reprompts_invalid_fields() {
        let mut store = PatientStore::new();
        let input = "Jane\nDoe\n31-04-1990\n1990-06-15\n15-06-1990\nLeeds\n4A\n1234567890\n123-456-7890\n";
        let mut c = console(input);
        add_patient(&mut c, &mut store, clock()).unwrap();

        let out = transcript(&c);
        assert!(out.contains("day is out of range for month"));
        assert!(out.contains("Invalid date format. Use dd-mm-yyyy."));
        assert!(out.contains("Invalid phone number format. Use xxx-xxx-xxxx."));
        assert_eq!(out.matches("Enter Date of Birth (dd-mm-yyyy): ").count(), 3);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_accepts_blank_names() {
        let mut store = PatientStore::new();
        let mut c = console("\n\n01-01-2000\n\n\n111-222-3333\n");
        add_patient(&mut c, &mut store, clock()).unwrap();
        assert_eq!(store.find_by_id(1).unwrap().first_name, "");
    }

    #[test]
    fn test_add_input_closed_adds_nothing() {
        let mut store = PatientStore::new();
        let mut c = console("Jane\nDoe\nnot-a-date\n");
        assert!(add_patient(&mut c, &mut store, clock()).is_err());
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn test_list_empty() {
        let store = PatientStore::new();
        let mut c = console("");
        list_patients(&mut c, &store).unwrap();
        assert!(transcript(&c).contains("No patients found."));
    }

    #[test]
    fn test_list_prints_records() {
        let store = store_with_jane();
        let mut c = console("");
        list_patients(&mut c, &store).unwrap();
        let out = transcript(&c);
        assert!(out.contains("ID: 1"));
        assert!(out.contains("Date of Birth: 15-06-1990 (Age: 33)"));
    }

    #[test]
    fn test_search() {
        let store = store_with_jane();

        let mut c = console("1\n");
        search_patient(&mut c, &store).unwrap();
        assert!(transcript(&c).contains("Name: Jane Doe"));

        let mut c = console("2\n");
        search_patient(&mut c, &store).unwrap();
        assert!(transcript(&c).contains("Patient not found."));

        let mut c = console("one\n");
        search_patient(&mut c, &store).unwrap();
        assert!(transcript(&c).contains("Invalid ID."));

        for id in ["-1", "99999999999"] {
            let mut c = console(&format!("{id}\n"));
            search_patient(&mut c, &store).unwrap();
            let out = transcript(&c);
            assert!(out.contains("Patient not found."), "{id}");
            assert!(!out.contains("Invalid ID."), "{id}");
        }
    }

    #[test]
    fn test_update_all_blank_changes_nothing() {
        let mut store = store_with_jane();
        let before = store.find_by_id(1).unwrap().clone();

        let later = Clock::Fixed(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
        let mut c = console("1\n\n\n\n\n\n\n");
        update_patient(&mut c, &mut store, later).unwrap();

        assert_eq!(*store.find_by_id(1).unwrap(), before);
        let out = transcript(&c);
        assert!(out.contains("Leave fields blank to keep existing values."));
        assert!(out.contains("First Name [Jane]: "));
        assert!(out.contains("Date of Birth (dd-mm-yyyy) [15-06-1990]: "));
        assert!(out.contains("Phone Number [123-456-7890]: "));
        assert!(out.contains("Patient updated successfully."));
    }

    #[test]
    fn test_update_invalid_date_reprompts_then_skip() {
        let mut store = store_with_jane();
        let mut c = console("1\n\n\n30-02-2001\n\n\n\n\n");
        update_patient(&mut c, &mut store, clock()).unwrap();

        let patient = store.find_by_id(1).unwrap();
        assert_eq!(patient.date_of_birth.to_string(), "15-06-1990");
        assert_eq!(patient.age, 33);
        let out = transcript(&c);
        assert!(out.contains("day is out of range for month"));
        assert_eq!(out.matches("Date of Birth (dd-mm-yyyy) [").count(), 2);
    }

    #[test]
    fn test_update_malformed_date_reprompts_then_skip() {
        let mut store = store_with_jane();
        let mut c = console("1\n\n\n1990/06/15\n\n\n\n\n");
        update_patient(&mut c, &mut store, clock()).unwrap();

        let patient = store.find_by_id(1).unwrap();
        assert_eq!(patient.date_of_birth.to_string(), "15-06-1990");
        assert_eq!(patient.age, 33);
        let out = transcript(&c);
        assert!(out.contains("Invalid date format. Use dd-mm-yyyy."));
        assert_eq!(out.matches("Date of Birth (dd-mm-yyyy) [").count(), 2);
        assert!(out.contains("Patient updated successfully."));
    }

    #[test]
    fn test_update_fields() {
        let mut store = store_with_jane();
        let mut c = console("1\nJanet\n\n99-99-9999\n01-01-2000\nYork\n\nbad\n555-555-5555\n");
        update_patient(&mut c, &mut store, clock()).unwrap();

        let patient = store.find_by_id(1).unwrap();
        assert_eq!(patient.first_name, "Janet");
        assert_eq!(patient.last_name, "Doe");
        assert_eq!(patient.date_of_birth.to_string(), "01-01-2000");
        assert_eq!(patient.age, 24);
        assert_eq!(patient.hometown, "York");
        assert_eq!(patient.house_number, "4A");
        assert_eq!(patient.phone.as_str(), "555-555-5555");
    }

    #[test]
    fn test_update_missing() {
        let mut store = store_with_jane();
        let mut c = console("8\n");
        update_patient(&mut c, &mut store, clock()).unwrap();
        let out = transcript(&c);
        assert!(out.contains("Patient not found."));
        assert!(!out.contains("--- Update Patient ---"));
    }

    #[test]
    fn test_delete() {
        let mut store = store_with_jane();

        let mut c = console("3\n");
        delete_patient(&mut c, &mut store).unwrap();
        assert!(transcript(&c).contains("Patient not found."));
        assert_eq!(store.len(), 1);

        let mut c = console("1\n");
        delete_patient(&mut c, &mut store).unwrap();
        assert!(transcript(&c).contains("Patient with ID 1 deleted successfully."));
        assert!(store.is_empty());
    }
}
