//! Deterministic dataset generation from seed definitions.
//!
//! The same seed definition always produces identical students and
//! complaints, so demonstrations and tests see a stable desk.

use std::collections::HashSet;

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::error::GenerationError;
use crate::registry::{SeedDefinition, SeedRegistry};
use crate::seed::{
    CategorySeed, ExampleComplaintSeed, ExampleDataset, ExampleUserSeed, PrioritySeed, RoleSeed,
    StatusSeed,
};
use crate::validation::{DISPLAY_NAME_MAX, is_valid_display_name, sanitize_display_name};

/// Maximum number of attempts to generate a valid display name.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Oldest complaint age in hours (thirty days).
const MAX_OPENED_HOURS_AGO: u32 = 720;

/// Probability of an urgent complaint (one in five).
const URGENT_NUMERATOR: u32 = 1;
const URGENT_DENOMINATOR: u32 = 5;

/// Status weights out of ten: submitted, in progress, resolved.
const SUBMITTED_WEIGHT: u32 = 4;
const IN_PROGRESS_WEIGHT: u32 = 3;

const HOSTEL_DESCRIPTIONS: [&str; 3] = [
    "Room has no water supply since yesterday morning.",
    "The hostel wifi drops every evening after eight.",
    "Mess food quality has dropped over the last week.",
];
const MENTOR_DESCRIPTIONS: [&str; 2] = [
    "My mentor has missed the last two review sessions.",
    "Review feedback is not being shared after the session.",
];
const FEE_DESCRIPTIONS: [&str; 2] = [
    "Fee receipt for last month has not been issued yet.",
    "I was charged a late fee although I paid on time.",
];
const PLACEMENT_DESCRIPTIONS: [&str; 2] = [
    "No placement drive updates were shared this month.",
    "Mock interview slot was cancelled without notice.",
];
const BEHAVIOUR_DESCRIPTIONS: [&str; 2] = [
    "A batchmate keeps disrupting the shared workspace.",
    "Staff member was rude while handling my query.",
];
const FACILITY_DESCRIPTIONS: [&str; 3] = [
    "Projector in the second floor lab is not working.",
    "Air conditioning in the study hall has failed.",
    "Washroom on the third floor needs urgent cleaning.",
];
const OTHER_DESCRIPTIONS: [&str; 2] = [
    "Library access card stopped working at the gate.",
    "Lost and found counter is never staffed in the evening.",
];

const PROGRESS_NOTES: [&str; 3] = [
    "Forwarded to the campus operations team.",
    "Scheduled a call with the student.",
    "Awaiting confirmation from the vendor.",
];
const RESOLUTION_NOTES: [&str; 3] = [
    "Issue fixed and verified with the student.",
    "Refund processed by the accounts team.",
    "Mentor reassigned for the remaining reviews.",
];

/// Generates students and complaints from a seed definition.
///
/// Fixed registry accounts are emitted first, followed by
/// `student_count` generated students, each with a valid display name, a
/// unique email, and a campus and batch from the registry. Complaints are
/// owned by randomly chosen students (fixed or generated) and returned
/// newest first.
///
/// # Errors
///
/// Returns [`GenerationError`] if:
/// - Display name generation fails after maximum retries
/// - Complaints are requested but the dataset holds no students
///
/// # Example
///
/// ```
/// use example_data::{SeedRegistry, generate_example_data};
///
/// let json = r#"{
///     "version": 1,
///     "emailDomain": "brototype.com",
///     "defaultPassword": "password",
///     "campuses": ["Kochi"],
///     "batches": ["MEARN-1"],
///     "seeds": [{"name": "test", "seed": 42, "studentCount": 3, "complaintCount": 5}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid");
/// let seed_def = registry.find_seed("test").expect("found");
/// let first = generate_example_data(&registry, seed_def).expect("generated");
/// let second = generate_example_data(&registry, seed_def).expect("generated");
///
/// assert_eq!(first.complaints.len(), 5);
/// assert_eq!(first, second);
/// ```
pub fn generate_example_data(
    registry: &SeedRegistry,
    seed_def: &SeedDefinition,
) -> Result<ExampleDataset, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    let mut users = registry.accounts().to_vec();
    let mut emails: HashSet<String> = users.iter().map(|u| u.email.to_lowercase()).collect();

    for ordinal in 1..=seed_def.student_count() {
        let student = generate_student(&mut rng, registry, ordinal, &mut emails)?;
        users.push(student);
    }

    let student_ids: Vec<&str> = users
        .iter()
        .filter(|u| u.role == RoleSeed::Student)
        .map(|u| u.id.as_str())
        .collect();

    let complaint_count = seed_def.complaint_count();
    if complaint_count > 0 && student_ids.is_empty() {
        return Err(GenerationError::NoStudents {
            requested: complaint_count,
        });
    }

    let mut complaints = Vec::with_capacity(complaint_count);
    for _ in 0..complaint_count {
        complaints.push(generate_complaint(&mut rng, &student_ids));
    }
    complaints.sort_by_key(|c| c.opened_hours_ago);

    Ok(ExampleDataset { users, complaints })
}

fn generate_student(
    rng: &mut ChaCha8Rng,
    registry: &SeedRegistry,
    ordinal: usize,
    emails: &mut HashSet<String>,
) -> Result<ExampleUserSeed, GenerationError> {
    let id = format!("student-{}", Uuid::from_u128(rng.random()).simple());
    let (first, last) = generate_name(rng)?;
    let email = unique_email(&first, &last, ordinal, registry.email_domain(), emails);

    Ok(ExampleUserSeed {
        id,
        name: format!("{first} {last}"),
        email,
        password: registry.default_password().to_owned(),
        role: RoleSeed::Student,
        batch: registry.batches().choose(rng).cloned(),
        campus: registry.campuses().choose(rng).cloned(),
    })
}

/// Generates a first and last name whose combination is a valid display name.
fn generate_name(rng: &mut ChaCha8Rng) -> Result<(String, String), GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);
        let first = sanitize_display_name(&first);
        let last = sanitize_display_name(&last);

        let candidate = format!("{first} {last}");
        if candidate.chars().count() <= DISPLAY_NAME_MAX && is_valid_display_name(&candidate) {
            return Ok((first, last));
        }
    }

    Err(GenerationError::DisplayNameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

/// Builds `first.l<ordinal>@domain`, widening the suffix until it is unused.
fn unique_email(
    first: &str,
    last: &str,
    ordinal: usize,
    domain: &str,
    emails: &mut HashSet<String>,
) -> String {
    let local: String = first
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase();
    let initial: String = last
        .chars()
        .find(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase().to_string())
        .unwrap_or_default();

    let mut suffix = ordinal.to_string();
    loop {
        let candidate = format!("{local}.{initial}{suffix}@{domain}");
        if emails.insert(candidate.to_lowercase()) {
            return candidate;
        }
        suffix.push('0');
    }
}

fn generate_complaint(rng: &mut ChaCha8Rng, student_ids: &[&str]) -> ExampleComplaintSeed {
    let id = format!("complaint-{}", Uuid::from_u128(rng.random()).simple());
    let student_id = student_ids
        .choose(rng)
        .map(|id| (*id).to_owned())
        .unwrap_or_default();
    let category = CategorySeed::ALL
        .choose(rng)
        .copied()
        .unwrap_or(CategorySeed::Other);
    let description = descriptions_for(category)
        .choose(rng)
        .map(|d| (*d).to_owned())
        .unwrap_or_default();
    let priority = if rng.random_ratio(URGENT_NUMERATOR, URGENT_DENOMINATOR) {
        PrioritySeed::Urgent
    } else {
        PrioritySeed::Normal
    };

    let opened_hours_ago = rng.random_range(1..=MAX_OPENED_HOURS_AGO);
    let roll = rng.random_range(0..10);
    let status = if roll < SUBMITTED_WEIGHT {
        StatusSeed::Submitted
    } else if roll < SUBMITTED_WEIGHT + IN_PROGRESS_WEIGHT {
        StatusSeed::InProgress
    } else {
        StatusSeed::Resolved
    };

    let (handled_after_hours, admin_note) = match status {
        StatusSeed::Submitted => (None, None),
        StatusSeed::InProgress => {
            let note = if rng.random_bool(0.5) {
                PROGRESS_NOTES.choose(rng).map(|n| (*n).to_owned())
            } else {
                None
            };
            (Some(rng.random_range(0..=opened_hours_ago)), note)
        }
        StatusSeed::Resolved => (
            Some(rng.random_range(0..=opened_hours_ago)),
            RESOLUTION_NOTES.choose(rng).map(|n| (*n).to_owned()),
        ),
    };

    ExampleComplaintSeed {
        id,
        student_id,
        category,
        priority,
        description,
        status,
        opened_hours_ago,
        handled_after_hours,
        admin_note,
    }
}

const fn descriptions_for(category: CategorySeed) -> &'static [&'static str] {
    match category {
        CategorySeed::Hostel => &HOSTEL_DESCRIPTIONS,
        CategorySeed::Mentor => &MENTOR_DESCRIPTIONS,
        CategorySeed::Fee => &FEE_DESCRIPTIONS,
        CategorySeed::Placement => &PLACEMENT_DESCRIPTIONS,
        CategorySeed::Behaviour => &BEHAVIOUR_DESCRIPTIONS,
        CategorySeed::Facility => &FACILITY_DESCRIPTIONS,
        CategorySeed::Other => &OTHER_DESCRIPTIONS,
    }
}
