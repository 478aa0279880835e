//! Deterministic identifier source.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::ports::IdGenerator;
use crate::domain::{ComplaintId, UserId};

/// Hands out `complaint-1`, `complaint-2`, ... and `student-1`, ... in call
/// order. Each sequence counts independently.
#[derive(Debug, Default)]
pub struct SequentialIds {
    complaints: AtomicU64,
    students: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn complaint_id(&self) -> ComplaintId {
        ComplaintId::from_sequence(self.complaints.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn student_id(&self) -> UserId {
        UserId::student_from_sequence(self.students.fetch_add(1, Ordering::Relaxed) + 1)
    }
}
