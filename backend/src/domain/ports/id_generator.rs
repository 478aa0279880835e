//! Driven port for identifier allocation.
//!
//! The desk never invents identifiers itself. Production wiring uses random
//! UUIDs; tests substitute a counter or a mock so ids are predictable.

use uuid::Uuid;

use crate::domain::{ComplaintId, UserId};

/// Source of fresh identifiers. Ids must not repeat within a session.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Allocate an id for a newly submitted complaint.
    fn complaint_id(&self) -> ComplaintId;

    /// Allocate an id for a newly registered student.
    fn student_id(&self) -> UserId;
}

/// Random UUID (v4) backed generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn complaint_id(&self) -> ComplaintId {
        ComplaintId::from_uuid(Uuid::new_v4())
    }

    fn student_id(&self) -> UserId {
        UserId::student_from_uuid(Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn uuid_generator_prefixes_ids() {
        let generator = UuidIdGenerator;
        let complaint = generator.complaint_id();
        let student = generator.student_id();
        assert!(complaint.as_ref().starts_with("complaint-"));
        assert!(student.as_ref().starts_with("student-"));
        assert_eq!(complaint.as_ref().len(), "complaint-".len() + 32);
    }

    #[rstest]
    fn uuid_generator_does_not_repeat() {
        let generator = UuidIdGenerator;
        assert_ne!(generator.complaint_id(), generator.complaint_id());
        assert_ne!(generator.student_id(), generator.student_id());
    }
}
