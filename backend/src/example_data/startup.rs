//! Startup seeding orchestration.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use example_data::{RegistryError, SeedRegistry};
use mockable::Clock;
use thiserror::Error;
use tracing::info;

use crate::domain::{ExampleDataSeedOutcome, ExampleDataSeeder, ExampleDataSeedingError};
use crate::example_data::config::ExampleDataSettings;

/// Errors returned while building the initial desk.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Registry file could not be read.
    #[error("failed to read registry at {path}: {source}")]
    RegistryRead {
        /// Path to the registry file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Registry parsing failed.
    #[error("registry parse error: {0}")]
    Registry(#[from] RegistryError),
    /// Seed generation or conversion failed.
    #[error("example data seeding error: {0}")]
    Seeding(#[from] ExampleDataSeedingError),
    /// Seed name must not be empty.
    #[error("seed name must not be empty")]
    EmptySeedName,
}

/// Build the initial desk from the configured registry.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::PathBuf;
/// use std::sync::Arc;
///
/// use brotocare::example_data::{ExampleDataSettings, load_initial_desk};
/// use mockable::DefaultClock;
///
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ExampleDataSettings {
///     enabled: false,
///     seed_name: None,
///     student_count: None,
///     complaint_count: None,
///     registry_path: Some(PathBuf::from("fixtures/example-data/seeds.json")),
/// };
/// let outcome = load_initial_desk(&settings, Arc::new(DefaultClock))?;
/// assert!(outcome.state.complaints().is_empty());
/// # Ok(())
/// # }
/// ```
pub fn load_initial_desk<C: Clock>(
    settings: &ExampleDataSettings,
    clock: Arc<C>,
) -> Result<ExampleDataSeedOutcome, StartupSeedingError> {
    let registry_path = settings.registry_path();
    let registry = load_registry(&registry_path)?;
    let seeder = ExampleDataSeeder::new(clock);

    if !settings.is_enabled() {
        let outcome = seeder.fixed_accounts(&registry)?;
        info!(
            reason = "disabled",
            user_count = outcome.state.users().len(),
            "example data generation skipped; fixed accounts loaded"
        );
        return Ok(outcome);
    }

    let seed_name = settings.seed_name().trim();
    if seed_name.is_empty() {
        return Err(StartupSeedingError::EmptySeedName);
    }

    let outcome = seeder.seed_from_registry(
        &registry,
        seed_name,
        settings.student_count,
        settings.complaint_count,
    )?;
    info!(
        seed_key = seed_name,
        user_count = outcome.state.users().len(),
        complaint_count = outcome.state.complaints().len(),
        "example data seeding applied"
    );
    Ok(outcome)
}

/// Read and parse a seed registry.
pub fn load_registry(path: &Path) -> Result<SeedRegistry, StartupSeedingError> {
    let contents = read_text_file(path).map_err(|source| StartupSeedingError::RegistryRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SeedRegistry::from_json(&contents)?)
}

/// Read a UTF-8 file through a capability handle on its parent directory.
///
/// A bare file name is resolved against the working directory.
pub fn read_text_file(path: &Path) -> io::Result<String> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} does not name a file", path.display()),
        )
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(Path::new(file_name))
}
