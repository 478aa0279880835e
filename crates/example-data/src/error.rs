//! Error types for the example-data crate.
//!
//! This module defines semantic error enums for registry parsing and dataset
//! generation, following the project's error handling conventions with
//! `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing or querying a seed registry.
///
/// These errors cover file I/O, JSON parsing, schema validation, and seed
/// lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The registry lists no campuses to assign students to.
    #[error("registry contains no campuses")]
    EmptyCampuses,

    /// The registry lists no batches to assign students to.
    #[error("registry contains no batches")]
    EmptyBatches,

    /// Two fixed accounts share an email address (compared case-insensitively).
    #[error("duplicate account email at index {index}: {email}")]
    DuplicateAccountEmail {
        /// Index of the second occurrence in the accounts array.
        index: usize,
        /// The repeated email address.
        email: String,
    },

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

/// Errors that can occur during dataset generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a valid display name after maximum retries.
    #[error("failed to generate valid display name after {max_attempts} attempts")]
    DisplayNameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// Complaints were requested but the dataset holds no students to own them.
    #[error("cannot generate {requested} complaints without any students")]
    NoStudents {
        /// Number of complaints the seed asked for.
        requested: usize,
    },
}
