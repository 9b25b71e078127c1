//! Main menu loop.

use std::io::{BufRead, Write};
use std::str::FromStr;

use patient_registry_core::PatientStore;
use thiserror::Error;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::console::{Console, ConsoleError, ConsoleResult};
use crate::workflows;

const MENU: &str = "\n--- Patient Management System ---\n\
                    1. Add New Patient\n\
                    2. Get All Patients\n\
                    3. Search Patient by ID\n\
                    4. Update Patient by ID\n\
                    5. Delete Patient by ID\n\
                    6. Exit";

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Search,
    Update,
    Delete,
    Exit,
}

/// Menu input that is not one of the listed choices.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid choice. Please try again.")]
pub struct InvalidChoice(pub String);

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::List),
            "3" => Ok(MenuChoice::Search),
            "4" => Ok(MenuChoice::Update),
            "5" => Ok(MenuChoice::Delete),
            "6" => Ok(MenuChoice::Exit),
            other => Err(InvalidChoice(other.to_string())),
        }
    }
}

/// Run the menu until Exit or end of input.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut PatientStore,
    clock: Clock,
) -> ConsoleResult<()> {
    info!(?clock, "Session started");
    match run_loop(console, store, clock) {
        Err(ConsoleError::InputClosed) => {
            info!(patients = store.len(), "Input closed, ending session");
            Ok(())
        }
        other => other,
    }
}

fn run_loop<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut PatientStore,
    clock: Clock,
) -> ConsoleResult<()> {
    loop {
        console.say(MENU)?;
        let answer = console.prompt("Enter your choice: ")?;
        let choice = match answer.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                debug!(input = %e.0, "Unrecognized menu input");
                console.say(e)?;
                continue;
            }
        };
        debug!(?choice, "Menu selection");

        match choice {
            MenuChoice::Add => {
                workflows::add_patient(console, store, clock)?;
            }
            MenuChoice::List => workflows::list_patients(console, store)?,
            MenuChoice::Search => workflows::search_patient(console, store)?,
            MenuChoice::Update => workflows::update_patient(console, store, clock)?,
            MenuChoice::Delete => workflows::delete_patient(console, store)?,
            MenuChoice::Exit => {
                console.say("Exiting system. Goodbye!")?;
                info!(patients = store.len(), "Session ended");
                return Ok(());
            }
        }
    }
}
