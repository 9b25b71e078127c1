//! Interactive text menu for the patient registry.
//!
//! The menu, prompt workflows and logging setup live here; record logic lives
//! in `patient_registry_core`.

pub mod clock;
pub mod console;
pub mod logging;
pub mod menu;
pub mod workflows;

pub use clock::Clock;
pub use console::{Console, ConsoleError, ConsoleResult};
