//! Deterministic example students and complaints for demonstration purposes.
//!
//! This crate produces believable, reproducible complaint-desk data from a
//! JSON seed registry. It is independent of backend domain types so the
//! backend can depend on it without a cycle; records use plain strings and
//! mirror enums that the backend converts at the point of use.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading seed registries from JSON files
//! - Fixed demonstration accounts (students and administrators)
//! - Deterministic student and complaint generation using named seeds
//! - Display name and description checks for generated records
//!
//! # Example
//!
//! ```
//! use example_data::{SeedRegistry, generate_example_data};
//!
//! let json = r#"{
//!     "version": 1,
//!     "emailDomain": "brototype.com",
//!     "defaultPassword": "password",
//!     "campuses": ["Kochi"],
//!     "batches": ["MEARN-1"],
//!     "accounts": [],
//!     "seeds": [{"name": "test-seed", "seed": 42, "studentCount": 3, "complaintCount": 4}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let dataset = generate_example_data(&registry, seed_def).expect("generation succeeds");
//!
//! assert_eq!(dataset.users.len(), 3);
//! assert_eq!(dataset.complaints.len(), 4);
//! ```

mod error;
mod generator;
mod registry;
mod seed;
mod validation;

pub use error::{GenerationError, RegistryError};
pub use generator::generate_example_data;
pub use registry::{SeedDefinition, SeedRegistry};
pub use seed::{
    CategorySeed, ExampleComplaintSeed, ExampleDataset, ExampleUserSeed, PrioritySeed, RoleSeed,
    StatusSeed,
};
pub use validation::{
    DESCRIPTION_MIN, DISPLAY_NAME_MAX, DISPLAY_NAME_MIN, is_valid_description,
    is_valid_display_name,
};
