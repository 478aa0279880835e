//! Seed registry types and JSON parsing.
//!
//! The registry holds the fixed demonstration accounts, the campuses and
//! batches generated students are drawn from, and named seed definitions.
//! It is loaded from JSON and provides deterministic seed lookups.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::RegistryError;
use crate::seed::ExampleUserSeed;

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// A seed registry containing fixed accounts and named seeds.
///
/// # Example
///
/// ```
/// use example_data::SeedRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "emailDomain": "brototype.com",
///     "defaultPassword": "password",
///     "campuses": ["Kochi", "Trivandrum"],
///     "batches": ["MEARN-1"],
///     "accounts": [],
///     "seeds": [{"name": "test", "seed": 42, "studentCount": 5, "complaintCount": 8}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.seeds().len(), 1);
/// assert_eq!(registry.campuses().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRegistry {
    version: u32,
    email_domain: String,
    default_password: String,
    campuses: Vec<String>,
    batches: Vec<String>,
    accounts: Vec<ExampleUserSeed>,
    seeds: Vec<SeedDefinition>,
}

impl SeedRegistry {
    /// Parses a seed registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed or required fields are missing
    /// - The version is unsupported
    /// - The campus or batch lists are empty
    /// - Two fixed accounts share an email address
    /// - The seeds array is empty
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawSeedRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a seed registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSeedRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.campuses.is_empty() {
            return Err(RegistryError::EmptyCampuses);
        }
        if raw.batches.is_empty() {
            return Err(RegistryError::EmptyBatches);
        }

        let mut seen = HashSet::new();
        for (index, account) in raw.accounts.iter().enumerate() {
            if !seen.insert(account.email.to_lowercase()) {
                return Err(RegistryError::DuplicateAccountEmail {
                    index,
                    email: account.email.clone(),
                });
            }
        }

        if raw.seeds.is_empty() {
            return Err(RegistryError::EmptySeeds);
        }

        let seeds = raw
            .seeds
            .into_iter()
            .map(|s| SeedDefinition {
                name: s.name,
                seed: s.seed,
                student_count: s.student_count,
                complaint_count: s.complaint_count,
            })
            .collect();

        Ok(Self {
            version: raw.version,
            email_domain: raw.email_domain,
            default_password: raw.default_password,
            campuses: raw.campuses,
            batches: raw.batches,
            accounts: raw.accounts,
            seeds,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the domain used for generated student emails.
    #[must_use]
    pub fn email_domain(&self) -> &str {
        &self.email_domain
    }

    /// Returns the password assigned to generated students.
    #[must_use]
    pub fn default_password(&self) -> &str {
        &self.default_password
    }

    /// Returns the campuses generated students are assigned to.
    #[must_use]
    pub fn campuses(&self) -> &[String] {
        &self.campuses
    }

    /// Returns the batches generated students are assigned to.
    #[must_use]
    pub fn batches(&self) -> &[String] {
        &self.batches
    }

    /// Returns the fixed demonstration accounts.
    #[must_use]
    pub fn accounts(&self) -> &[ExampleUserSeed] {
        &self.accounts
    }

    /// Returns all seed definitions.
    #[must_use]
    pub fn seeds(&self) -> &[SeedDefinition] {
        &self.seeds
    }

    /// Finds a seed definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SeedNotFound`] if no seed with the given name
    /// exists.
    pub fn find_seed(&self, name: &str) -> Result<&SeedDefinition, RegistryError> {
        self.seeds
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RegistryError::SeedNotFound {
                name: name.to_owned(),
            })
    }
}

/// A named seed definition for deterministic generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDefinition {
    name: String,
    seed: u64,
    student_count: usize,
    complaint_count: usize,
}

impl SeedDefinition {
    /// Returns the seed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of students to generate on top of fixed accounts.
    #[must_use]
    pub const fn student_count(&self) -> usize {
        self.student_count
    }

    /// Returns the number of complaints to generate.
    #[must_use]
    pub const fn complaint_count(&self) -> usize {
        self.complaint_count
    }

    /// Returns a copy with the counts replaced where overrides are given.
    ///
    /// ```
    /// use example_data::SeedRegistry;
    ///
    /// let json = r#"{
    ///     "version": 1, "emailDomain": "x.com", "defaultPassword": "pw",
    ///     "campuses": ["Kochi"], "batches": ["B1"], "accounts": [],
    ///     "seeds": [{"name": "s", "seed": 1, "studentCount": 5, "complaintCount": 8}]
    /// }"#;
    /// let registry = SeedRegistry::from_json(json).expect("valid registry");
    /// let seed = registry.find_seed("s").expect("seed").with_counts(Some(2), None);
    /// assert_eq!(seed.student_count(), 2);
    /// assert_eq!(seed.complaint_count(), 8);
    /// ```
    #[must_use]
    pub fn with_counts(&self, students: Option<usize>, complaints: Option<usize>) -> Self {
        Self {
            name: self.name.clone(),
            seed: self.seed,
            student_count: students.unwrap_or(self.student_count),
            complaint_count: complaints.unwrap_or(self.complaint_count),
        }
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedRegistry {
    version: u32,
    email_domain: String,
    default_password: String,
    campuses: Vec<String>,
    batches: Vec<String>,
    #[serde(default)]
    accounts: Vec<ExampleUserSeed>,
    seeds: Vec<RawSeedDefinition>,
}

/// Raw JSON representation of a seed definition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedDefinition {
    name: String,
    seed: u64,
    student_count: usize,
    complaint_count: usize,
}
