//! Startup wiring for the initial desk.

mod config;
mod startup;

pub use config::ExampleDataSettings;
pub use startup::{StartupSeedingError, load_initial_desk, load_registry, read_text_file};
