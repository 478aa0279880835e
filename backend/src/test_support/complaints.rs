//! Builder for complaints in arbitrary lifecycle states.

use chrono::{DateTime, Utc};

use crate::domain::{
    Category, Complaint, ComplaintId, ComplaintParts, Description, Priority, Status,
    TimelineAction, TimelineEvent, UNKNOWN_CAMPUS, User,
};
use crate::domain::complaint_lifecycle::SUBMITTED_MESSAGE;

/// Builds a [`Complaint`] directly, bypassing the lifecycle functions.
///
/// Events added with [`ComplaintBuilder::event`] must be added oldest first.
pub struct ComplaintBuilder {
    parts: ComplaintParts,
}

impl ComplaintBuilder {
    pub fn new(sequence: u64, author: &User, opened: DateTime<Utc>) -> Self {
        let description = Description::new("Room has no water supply")
            .unwrap_or_else(|err| panic!("fixture description: {err}"));
        Self {
            parts: ComplaintParts {
                id: ComplaintId::from_sequence(sequence),
                student_id: author.id().clone(),
                student_name: author.name().clone(),
                campus: author.campus().unwrap_or(UNKNOWN_CAMPUS).to_owned(),
                category: Category::Hostel,
                description,
                priority: Priority::Normal,
                attachment_url: None,
                status: Status::Submitted,
                assigned_admin_id: None,
                timeline: vec![TimelineEvent::new(
                    TimelineAction::ComplaintSubmitted,
                    SUBMITTED_MESSAGE,
                    opened,
                )],
                created_at: opened,
                updated_at: opened,
            },
        }
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.parts.category = category;
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.parts.priority = priority;
        self
    }

    #[must_use]
    pub fn status(mut self, status: Status) -> Self {
        self.parts.status = status;
        self
    }

    /// Prepend an event and move `updated_at` to its timestamp.
    #[must_use]
    pub fn event(mut self, action: TimelineAction, message: &str, at: DateTime<Utc>) -> Self {
        self.parts
            .timeline
            .insert(0, TimelineEvent::new(action, message, at));
        self.parts.updated_at = self.parts.updated_at.max(at);
        self
    }

    /// Mark resolved with a resolution event at `at`.
    #[must_use]
    pub fn resolved_at(self, at: DateTime<Utc>) -> Self {
        self.status(Status::Resolved)
            .event(TimelineAction::Resolution, "Status changed to Resolved.", at)
    }

    pub fn build(self) -> Complaint {
        Complaint::try_from_parts(self.parts)
            .unwrap_or_else(|err| panic!("fixture complaint: {err}"))
    }
}
