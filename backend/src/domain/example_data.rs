//! Example data seeding.
//!
//! Converts deterministic example-data registry outputs into validated domain
//! users and complaints, anchoring relative seed times to the injected clock.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use example_data::{
    CategorySeed, ExampleComplaintSeed, ExampleUserSeed, GenerationError, PrioritySeed,
    RegistryError, RoleSeed, SeedRegistry, StatusSeed, generate_example_data,
};
use mockable::Clock;
use thiserror::Error;

use crate::domain::complaint_lifecycle::{SUBMITTED_MESSAGE, pending_events};
use crate::domain::{
    Category, Complaint, ComplaintId, ComplaintParts, ComplaintValidationError, Credential,
    DeskState, Description, DisplayName, Email, Priority, Role, Status, TimelineAction,
    TimelineEvent, UNKNOWN_CAMPUS, User, UserId, UserValidationError,
};

/// Result of seeding a desk from the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleDataSeedOutcome {
    /// Seed name used for generation, or `None` for fixed accounts only.
    pub seed_key: Option<String>,
    /// The initial desk.
    pub state: DeskState,
}

/// Errors raised while preparing example data.
#[derive(Debug, Error)]
pub enum ExampleDataSeedingError {
    /// Seed registry lookups failed.
    #[error("seed registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Dataset generation failed.
    #[error("example data generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// A generated user failed backend validation.
    #[error("seeded user {id} failed validation: {source}")]
    UserInvalid {
        id: String,
        #[source]
        source: UserValidationError,
    },
    /// A generated complaint failed backend validation.
    #[error("seeded complaint {id} failed validation: {source}")]
    ComplaintInvalid {
        id: String,
        #[source]
        source: ComplaintValidationError,
    },
    /// A complaint references a student that is not in the dataset.
    #[error("seeded complaint {complaint_id} references unknown student {student_id}")]
    UnknownStudent {
        complaint_id: String,
        student_id: String,
    },
    /// Handled complaints need an administrator to attribute events to.
    #[error("seeded complaints were handled but the dataset has no admin account")]
    NoAdministrator,
}

/// Builds initial desk state from the seed registry.
pub struct ExampleDataSeeder<C> {
    clock: Arc<C>,
}

impl<C> ExampleDataSeeder<C>
where
    C: Clock,
{
    pub fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    /// Generate users and complaints for a named seed.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleDataSeedingError`] if registry lookup, generation or
    /// validation fails.
    pub fn seed_from_registry(
        &self,
        registry: &SeedRegistry,
        seed_name: &str,
        student_count: Option<usize>,
        complaint_count: Option<usize>,
    ) -> Result<ExampleDataSeedOutcome, ExampleDataSeedingError> {
        let seed_def = registry
            .find_seed(seed_name)?
            .with_counts(student_count, complaint_count);
        let dataset = generate_example_data(registry, &seed_def)?;
        let now = self.clock.utc();

        let users = dataset
            .users
            .into_iter()
            .map(|seed| convert_user(seed, now))
            .collect::<Result<Vec<_>, _>>()?;
        let complaints = dataset
            .complaints
            .into_iter()
            .map(|seed| convert_complaint(seed, &users, now))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ExampleDataSeedOutcome {
            seed_key: Some(seed_def.name().to_owned()),
            state: DeskState::new(users, complaints),
        })
    }

    /// Desk holding only the registry's fixed accounts and no complaints.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleDataSeedingError::UserInvalid`] when an account fails
    /// validation.
    pub fn fixed_accounts(
        &self,
        registry: &SeedRegistry,
    ) -> Result<ExampleDataSeedOutcome, ExampleDataSeedingError> {
        let now = self.clock.utc();
        let users = registry
            .accounts()
            .iter()
            .cloned()
            .map(|seed| convert_user(seed, now))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ExampleDataSeedOutcome {
            seed_key: None,
            state: DeskState::new(users, Vec::new()),
        })
    }
}

fn convert_user(seed: ExampleUserSeed, now: DateTime<Utc>) -> Result<User, ExampleDataSeedingError> {
    let invalid = |source| ExampleDataSeedingError::UserInvalid {
        id: seed.id.clone(),
        source,
    };
    let id = UserId::new(&seed.id).map_err(invalid)?;
    let name = DisplayName::new(seed.name.as_str()).map_err(invalid)?;
    let email = Email::new(&seed.email).map_err(invalid)?;
    let credential = Credential::new(&seed.password).map_err(invalid)?;

    let mut user = User::new(id, name, email, credential, map_role(seed.role), now);
    if let Some(batch) = seed.batch {
        user = user.with_batch(batch);
    }
    if let Some(campus) = seed.campus {
        user = user.with_campus(campus);
    }
    Ok(user)
}

fn convert_complaint(
    seed: ExampleComplaintSeed,
    users: &[User],
    now: DateTime<Utc>,
) -> Result<Complaint, ExampleDataSeedingError> {
    let invalid = |source| ExampleDataSeedingError::ComplaintInvalid {
        id: seed.id.clone(),
        source,
    };
    let author = users
        .iter()
        .find(|user| user.id().as_ref() == seed.student_id)
        .ok_or_else(|| ExampleDataSeedingError::UnknownStudent {
            complaint_id: seed.id.clone(),
            student_id: seed.student_id.clone(),
        })?;
    let id = ComplaintId::new(seed.id.as_str()).map_err(invalid)?;
    let description = Description::new(&seed.description).map_err(invalid)?;

    let created_at = now - TimeDelta::hours(i64::from(seed.opened_hours_ago));
    let mut timeline = vec![TimelineEvent::new(
        TimelineAction::ComplaintSubmitted,
        SUBMITTED_MESSAGE,
        created_at,
    )];
    let status = map_status(seed.status);
    let mut updated_at = created_at;

    if let Some(hours) = seed.handled_after_hours {
        let handled_at = created_at + TimeDelta::hours(i64::from(hours));
        let admin = users
            .iter()
            .find(|user| user.role() == Role::Admin)
            .ok_or(ExampleDataSeedingError::NoAdministrator)?;
        let events = pending_events(
            Status::Submitted,
            status,
            seed.admin_note.as_deref(),
            admin.id(),
            handled_at,
        );
        if !events.is_empty() {
            timeline.splice(0..0, events);
            updated_at = handled_at;
        }
    }

    Complaint::try_from_parts(ComplaintParts {
        id,
        student_id: author.id().clone(),
        student_name: author.name().clone(),
        campus: author.campus().unwrap_or(UNKNOWN_CAMPUS).to_owned(),
        category: map_category(seed.category),
        description,
        priority: map_priority(seed.priority),
        attachment_url: None,
        status,
        assigned_admin_id: None,
        timeline,
        created_at,
        updated_at,
    })
    .map_err(invalid)
}

fn map_role(role: RoleSeed) -> Role {
    match role {
        RoleSeed::Student => Role::Student,
        RoleSeed::Admin => Role::Admin,
    }
}

fn map_category(category: CategorySeed) -> Category {
    match category {
        CategorySeed::Hostel => Category::Hostel,
        CategorySeed::Mentor => Category::Mentor,
        CategorySeed::Fee => Category::Fee,
        CategorySeed::Placement => Category::Placement,
        CategorySeed::Behaviour => Category::Behaviour,
        CategorySeed::Facility => Category::Facility,
        CategorySeed::Other => Category::Other,
    }
}

fn map_priority(priority: PrioritySeed) -> Priority {
    match priority {
        PrioritySeed::Normal => Priority::Normal,
        PrioritySeed::Urgent => Priority::Urgent,
    }
}

fn map_status(status: StatusSeed) -> Status {
    match status {
        StatusSeed::Submitted => Status::Submitted,
        StatusSeed::InProgress => Status::InProgress,
        StatusSeed::Resolved => Status::Resolved,
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for example data seeding.

    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::test_support::MutableClock;

    const REGISTRY_JSON: &str = r#"{
        "version": 1,
        "emailDomain": "brototype.com",
        "defaultPassword": "password",
        "campuses": ["Kochi", "Trivandrum"],
        "batches": ["MEARN-1", "Flutter-3"],
        "accounts": [
            {"id": "student-01", "name": "Arjun Sharma", "email": "arjun.s@brototype.com",
             "password": "password", "role": "student", "batch": "MEARN-1", "campus": "Kochi"},
            {"id": "admin-01", "name": "Admin User", "email": "admin@brototype.com",
             "password": "password", "role": "admin", "campus": "HQ"}
        ],
        "seeds": [{"name": "mossy-owl", "seed": 42, "studentCount": 4, "complaintCount": 12}]
    }"#;

    fn registry() -> SeedRegistry {
        SeedRegistry::from_json(REGISTRY_JSON).expect("registry should parse")
    }

    #[fixture]
    fn seeder() -> ExampleDataSeeder<MutableClock> {
        let now = Utc
            .with_ymd_and_hms(2025, 11, 20, 9, 0, 0)
            .single()
            .expect("valid timestamp");
        ExampleDataSeeder::new(Arc::new(MutableClock::new(now)))
    }

    #[rstest]
    fn seeds_users_and_complaints(seeder: ExampleDataSeeder<MutableClock>) {
        let outcome = seeder
            .seed_from_registry(&registry(), "mossy-owl", None, None)
            .expect("seed succeeds");

        assert_eq!(outcome.seed_key.as_deref(), Some("mossy-owl"));
        assert_eq!(outcome.state.users().len(), 6);
        assert_eq!(outcome.state.complaints().len(), 12);
        for complaint in outcome.state.complaints() {
            assert!(!complaint.timeline().is_empty());
            assert!(complaint.updated_at() >= complaint.created_at());
            assert_eq!(
                complaint.status() == Status::Submitted,
                complaint.timeline().len() == 1
            );
        }
    }

    #[rstest]
    fn seeding_is_deterministic(seeder: ExampleDataSeeder<MutableClock>) {
        let first = seeder
            .seed_from_registry(&registry(), "mossy-owl", Some(2), Some(5))
            .expect("seed succeeds");
        let second = seeder
            .seed_from_registry(&registry(), "mossy-owl", Some(2), Some(5))
            .expect("seed succeeds");
        assert_eq!(first, second);
        assert_eq!(first.state.complaints().len(), 5);
    }

    #[rstest]
    fn handled_events_are_attributed_to_the_admin(seeder: ExampleDataSeeder<MutableClock>) {
        let outcome = seeder
            .seed_from_registry(&registry(), "mossy-owl", None, Some(30))
            .expect("seed succeeds");
        let responders: Vec<_> = outcome
            .state
            .complaints()
            .iter()
            .flat_map(Complaint::timeline)
            .filter_map(TimelineEvent::responder_id)
            .map(|id| id.as_ref().to_owned())
            .collect();
        assert!(responders.iter().all(|id| id == "admin-01"));
    }

    #[rstest]
    fn fixed_accounts_only_has_no_complaints(seeder: ExampleDataSeeder<MutableClock>) {
        let outcome = seeder.fixed_accounts(&registry()).expect("accounts valid");
        assert!(outcome.seed_key.is_none());
        assert_eq!(outcome.state.users().len(), 2);
        assert!(outcome.state.complaints().is_empty());
    }

    #[rstest]
    fn unknown_seed_is_a_registry_error(seeder: ExampleDataSeeder<MutableClock>) {
        let err = seeder
            .seed_from_registry(&registry(), "missing", None, None)
            .expect_err("unknown seed");
        assert!(matches!(err, ExampleDataSeedingError::Registry(_)));
    }

    #[rstest]
    fn complaints_without_an_admin_fail_when_handled(seeder: ExampleDataSeeder<MutableClock>) {
        let json = REGISTRY_JSON.replace(r#""role": "admin""#, r#""role": "student""#);
        let registry = SeedRegistry::from_json(&json).expect("registry should parse");
        let result = seeder.seed_from_registry(&registry, "mossy-owl", None, Some(40));
        assert!(matches!(
            result,
            Err(ExampleDataSeedingError::NoAdministrator)
        ));
    }
}
