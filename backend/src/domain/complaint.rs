//! Complaint data model: identifiers, closed label sets, timeline events and
//! the complaint record itself.
//!
//! Labels serialise exactly as they are displayed (`"In Progress"`,
//! `"Complaint Submitted"`), so payloads and dashboards share one vocabulary.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::user::{DisplayName, UserId};

/// Minimum number of characters in a trimmed complaint description.
pub const DESCRIPTION_MIN: usize = 10;

/// Campus recorded on complaints whose author has none on file.
pub const UNKNOWN_CAMPUS: &str = "N/A";

/// Validation errors returned by the complaint value constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComplaintValidationError {
    #[error("complaint id must not be empty")]
    EmptyId,
    #[error("complaint id must not contain surrounding whitespace")]
    InvalidId,
    #[error("description must be at least {min} characters")]
    DescriptionTooShort { min: usize },
    #[error("attachment url must not be empty")]
    EmptyAttachmentUrl,
    #[error("complaint timeline must not be empty")]
    EmptyTimeline,
    #[error("complaint timeline must be ordered newest first")]
    TimelineOutOfOrder,
    #[error("updated_at must not precede created_at")]
    UpdatedBeforeCreated,
}

/// Raised when a label does not name a member of a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} label: {value}")]
pub struct LabelParseError {
    kind: &'static str,
    value: String,
}

impl LabelParseError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Declare a closed label enum with `ALL`, `label`, `Display` and `FromStr`.
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every member in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Human readable label, identical to the serialised form.
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = LabelParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|member| member.label() == s)
                    .ok_or_else(|| LabelParseError::new($kind, s))
            }
        }
    };
}

label_enum! {
    /// Complaint category.
    Category, "category" {
        Hostel => "Hostel",
        Mentor => "Mentor",
        Fee => "Fee",
        Placement => "Placement",
        Behaviour => "Behaviour",
        Facility => "Facility",
        Other => "Other",
    }
}

label_enum! {
    /// Complaint priority.
    Priority, "priority" {
        Normal => "Normal",
        Urgent => "Urgent",
    }
}

label_enum! {
    /// Complaint status.
    ///
    /// The desk accepts any transition, including leaving `Resolved`.
    /// [`Status::is_terminal`] and [`Status::offered_transitions`] tell
    /// callers which moves to present.
    Status, "status" {
        Submitted => "Submitted",
        InProgress => "In Progress",
        Resolved => "Resolved",
    }
}

label_enum! {
    /// Action recorded on a timeline event.
    TimelineAction, "timeline action" {
        ComplaintSubmitted => "Complaint Submitted",
        StatusUpdate => "Status Update",
        Resolution => "Resolution",
        NoteAdded => "Note Added",
    }
}

impl Status {
    /// Whether dashboards should stop offering transitions.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved)
    }

    /// Statuses an admin dashboard offers for a complaint in this status.
    pub const fn offered_transitions(self) -> &'static [Self] {
        if self.is_terminal() { &[] } else { Self::ALL }
    }
}

/// Complaint identifier such as `complaint-1a2b...`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComplaintId(String);

impl ComplaintId {
    /// Validate and construct a [`ComplaintId`].
    pub fn new(id: impl Into<String>) -> Result<Self, ComplaintValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ComplaintValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(ComplaintValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Id derived from a random UUID, e.g. `complaint-1a2b...`.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(format!("complaint-{}", uuid.simple()))
    }

    /// Id derived from a counter, e.g. `complaint-7`.
    pub fn from_sequence(n: u64) -> Self {
        Self(format!("complaint-{n}"))
    }
}

impl AsRef<str> for ComplaintId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ComplaintId> for String {
    fn from(value: ComplaintId) -> Self {
        value.0
    }
}

impl TryFrom<String> for ComplaintId {
    type Error = ComplaintValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Free-text complaint description, trimmed, at least [`DESCRIPTION_MIN`]
/// characters long.
///
/// # Examples
/// ```
/// use brotocare::domain::Description;
///
/// assert!(Description::new("Room has no water supply").is_ok());
/// assert!(Description::new("  too short ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Length is checked on the trimmed text; the text is kept as typed.
    pub fn new(text: impl Into<String>) -> Result<Self, ComplaintValidationError> {
        let text = text.into();
        if text.trim().chars().count() < DESCRIPTION_MIN {
            return Err(ComplaintValidationError::DescriptionTooShort {
                min: DESCRIPTION_MIN,
            });
        }
        Ok(Self(text))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

impl TryFrom<String> for Description {
    type Error = ComplaintValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Opaque attachment reference. Never dereferenced by the desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AttachmentUrl(String);

impl AttachmentUrl {
    pub fn new(url: impl AsRef<str>) -> Result<Self, ComplaintValidationError> {
        let trimmed = url.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ComplaintValidationError::EmptyAttachmentUrl);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for AttachmentUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<AttachmentUrl> for String {
    fn from(value: AttachmentUrl) -> Self {
        value.0
    }
}

impl TryFrom<String> for AttachmentUrl {
    type Error = ComplaintValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Immutable timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    action: TimelineAction,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    responder_id: Option<UserId>,
    timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attachment_url: Option<AttachmentUrl>,
}

impl TimelineEvent {
    pub fn new(action: TimelineAction, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            action,
            message: message.into(),
            responder_id: None,
            timestamp,
            attachment_url: None,
        }
    }

    #[must_use]
    pub fn with_responder(mut self, responder_id: UserId) -> Self {
        self.responder_id = Some(responder_id);
        self
    }

    #[must_use]
    pub fn with_attachment(mut self, attachment_url: AttachmentUrl) -> Self {
        self.attachment_url = Some(attachment_url);
        self
    }

    pub fn action(&self) -> TimelineAction {
        self.action
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn responder_id(&self) -> Option<&UserId> {
        self.responder_id.as_ref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn attachment_url(&self) -> Option<&AttachmentUrl> {
        self.attachment_url.as_ref()
    }
}

/// Unvalidated complaint payload as supplied by a student.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDraft {
    pub category: Category,
    pub priority: Priority,
    pub description: String,
    #[serde(default)]
    pub attachment_url: Option<String>,
}

/// Every field of a [`Complaint`], used to restore records from seed data.
#[derive(Debug, Clone)]
pub struct ComplaintParts {
    pub id: ComplaintId,
    pub student_id: UserId,
    pub student_name: DisplayName,
    pub campus: String,
    pub category: Category,
    pub description: Description,
    pub priority: Priority,
    pub attachment_url: Option<AttachmentUrl>,
    pub status: Status,
    pub assigned_admin_id: Option<UserId>,
    pub timeline: Vec<TimelineEvent>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A student complaint and its timeline.
///
/// ## Invariants
/// - `timeline` is never empty and is ordered newest first.
/// - `updated_at >= created_at`.
/// - `student_name` and `campus` are copies taken at submission and are not
///   re-synchronised with the author's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    id: ComplaintId,
    student_id: UserId,
    student_name: DisplayName,
    campus: String,
    category: Category,
    description: Description,
    priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachment_url: Option<AttachmentUrl>,
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    assigned_admin_id: Option<UserId>,
    timeline: Vec<TimelineEvent>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Complaint {
    /// Rebuild a complaint from parts, checking the record invariants.
    pub fn try_from_parts(parts: ComplaintParts) -> Result<Self, ComplaintValidationError> {
        if parts.timeline.is_empty() {
            return Err(ComplaintValidationError::EmptyTimeline);
        }
        if parts
            .timeline
            .windows(2)
            .any(|pair| matches!(pair, [newer, older] if newer.timestamp < older.timestamp))
        {
            return Err(ComplaintValidationError::TimelineOutOfOrder);
        }
        if parts.updated_at < parts.created_at {
            return Err(ComplaintValidationError::UpdatedBeforeCreated);
        }

        Ok(Self {
            id: parts.id,
            student_id: parts.student_id,
            student_name: parts.student_name,
            campus: parts.campus,
            category: parts.category,
            description: parts.description,
            priority: parts.priority,
            attachment_url: parts.attachment_url,
            status: parts.status,
            assigned_admin_id: parts.assigned_admin_id,
            timeline: parts.timeline,
            created_at: parts.created_at,
            updated_at: parts.updated_at,
        })
    }

    /// Set a new status and prepend `events`, keeping their relative order.
    pub(crate) fn record(
        &mut self,
        status: Status,
        events: Vec<TimelineEvent>,
        now: DateTime<Utc>,
    ) {
        self.status = status;
        self.updated_at = now.max(self.created_at);
        self.timeline.splice(0..0, events);
    }

    pub fn id(&self) -> &ComplaintId {
        &self.id
    }

    pub fn student_id(&self) -> &UserId {
        &self.student_id
    }

    pub fn student_name(&self) -> &DisplayName {
        &self.student_name
    }

    pub fn campus(&self) -> &str {
        self.campus.as_str()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn attachment_url(&self) -> Option<&AttachmentUrl> {
        self.attachment_url.as_ref()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Declared for triage assignment; nothing assigns it yet.
    pub fn assigned_admin_id(&self) -> Option<&UserId> {
        self.assigned_admin_id.as_ref()
    }

    /// Timeline, newest first.
    pub fn timeline(&self) -> &[TimelineEvent] {
        &self.timeline
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
