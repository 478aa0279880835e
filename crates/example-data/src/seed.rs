//! Generated record types.
//!
//! These types are the output of generation. They mirror the backend's
//! domain enums without depending on them; the backend converts them into
//! validated domain values when it builds its initial desk state.

use serde::{Deserialize, Serialize};

/// Account role for a seeded user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleSeed {
    /// A student who raises complaints.
    #[default]
    Student,
    /// An administrator who triages complaints.
    Admin,
}

/// Complaint category mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategorySeed {
    /// Hostel facilities and accommodation.
    Hostel,
    /// Mentor conduct or availability.
    Mentor,
    /// Fees and payments.
    Fee,
    /// Placement support.
    Placement,
    /// Behaviour of staff or peers.
    Behaviour,
    /// Campus facilities.
    Facility,
    /// Anything else.
    Other,
}

impl CategorySeed {
    /// Every category in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Hostel,
        Self::Mentor,
        Self::Fee,
        Self::Placement,
        Self::Behaviour,
        Self::Facility,
        Self::Other,
    ];
}

/// Complaint priority mirror.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrioritySeed {
    /// Routine handling.
    #[default]
    Normal,
    /// Needs attention first.
    Urgent,
}

/// Complaint status mirror.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusSeed {
    /// Raised and awaiting triage.
    #[default]
    Submitted,
    /// Picked up by an administrator.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Closed with a resolution.
    Resolved,
}

/// A generated or fixed user record.
///
/// # Example
///
/// ```
/// use example_data::{ExampleUserSeed, RoleSeed};
///
/// let user = ExampleUserSeed {
///     id: "student-01".to_owned(),
///     name: "Arjun Sharma".to_owned(),
///     email: "arjun.s@brototype.com".to_owned(),
///     password: "password".to_owned(),
///     role: RoleSeed::Student,
///     batch: Some("MEARN-1".to_owned()),
///     campus: Some("Kochi".to_owned()),
/// };
///
/// assert_eq!(user.role, RoleSeed::Student);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleUserSeed {
    /// Unique identifier for the user.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Plain demonstration password.
    pub password: String,
    /// Account role.
    pub role: RoleSeed,
    /// Optional course batch.
    #[serde(default)]
    pub batch: Option<String>,
    /// Optional campus.
    #[serde(default)]
    pub campus: Option<String>,
}

/// A generated complaint record.
///
/// Times are relative so the backend can anchor them to its own clock:
/// the complaint was opened `opened_hours_ago` hours before "now", and the
/// status change (when the status is not `Submitted`) happened
/// `handled_after_hours` hours after opening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleComplaintSeed {
    /// Unique identifier for the complaint.
    pub id: String,
    /// Identifier of the owning student.
    pub student_id: String,
    /// Complaint category.
    pub category: CategorySeed,
    /// Complaint priority.
    pub priority: PrioritySeed,
    /// Free-text description.
    pub description: String,
    /// Status reached by the complaint.
    pub status: StatusSeed,
    /// Hours between opening and "now".
    pub opened_hours_ago: u32,
    /// Hours between opening and the status change, if any.
    pub handled_after_hours: Option<u32>,
    /// Note left by the administrator on the status change, if any.
    pub admin_note: Option<String>,
}

/// Users and complaints produced from one seed definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleDataset {
    /// Fixed accounts followed by generated students.
    pub users: Vec<ExampleUserSeed>,
    /// Generated complaints, newest first.
    pub complaints: Vec<ExampleComplaintSeed>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_seed_serializes_lowercase() {
        let admin = serde_json::to_string(&RoleSeed::Admin).expect("serialize");
        assert_eq!(admin, "\"admin\"");
    }

    #[test]
    fn in_progress_uses_display_label() {
        let status = serde_json::to_string(&StatusSeed::InProgress).expect("serialize");
        assert_eq!(status, "\"In Progress\"");
    }

    #[test]
    fn complaint_seed_serializes_to_camel_case() {
        let complaint = ExampleComplaintSeed {
            id: "complaint-1".to_owned(),
            student_id: "student-01".to_owned(),
            category: CategorySeed::Hostel,
            priority: PrioritySeed::Urgent,
            description: "Room has no water supply".to_owned(),
            status: StatusSeed::Submitted,
            opened_hours_ago: 3,
            handled_after_hours: None,
            admin_note: None,
        };
        let json = serde_json::to_string(&complaint).expect("serialize");
        assert!(json.contains("studentId"));
        assert!(json.contains("openedHoursAgo"));
        assert!(json.contains("handledAfterHours"));
    }
}
