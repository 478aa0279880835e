//! Complaint lifecycle transitions: submission and admin updates.
//!
//! Both operations are pure. They take the current collection by reference
//! and hand back a replacement; the caller decides whether to keep it. Ids
//! and timestamps arrive as arguments so the desk service can inject them.

use chrono::{DateTime, Utc};
use serde_json::json;

use super::complaint::{
    AttachmentUrl, Complaint, ComplaintDraft, ComplaintId, ComplaintParts, Description, Status,
    TimelineAction, TimelineEvent, UNKNOWN_CAMPUS,
};
use super::{Error, User, UserId};

/// Message recorded on every submission event.
pub const SUBMITTED_MESSAGE: &str = "Student submitted the complaint.";

/// Result of [`update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Nothing to record: same status and no note. Keep the input collection.
    Unchanged,
    /// The replacement collection with the target complaint rewritten.
    Updated(Vec<Complaint>),
}

impl UpdateOutcome {
    /// Whether the update produced a new collection.
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }
}

/// Submit a new complaint on behalf of `author`.
///
/// Returns `[new, ...complaints]`. Fails with `invalid_request` when the
/// trimmed description is shorter than
/// [`DESCRIPTION_MIN`](super::complaint::DESCRIPTION_MIN) characters.
///
/// # Examples
/// ```
/// use brotocare::domain::{
///     complaint_lifecycle, Category, ComplaintDraft, ComplaintId, Credential, DisplayName,
///     Email, Priority, Role, Status, User, UserId,
/// };
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let author = User::new(
///     UserId::new("student-01").unwrap(),
///     DisplayName::new("Arjun Sharma").unwrap(),
///     Email::new("arjun.s@brototype.com").unwrap(),
///     Credential::new("password").unwrap(),
///     Role::Student,
///     now,
/// );
/// let draft = ComplaintDraft {
///     category: Category::Hostel,
///     priority: Priority::Urgent,
///     description: "Room has no water supply".into(),
///     attachment_url: None,
/// };
/// let complaints =
///     complaint_lifecycle::submit(&[], &author, draft, ComplaintId::from_sequence(1), now)
///         .unwrap();
/// assert_eq!(complaints[0].status(), Status::Submitted);
/// assert_eq!(complaints[0].campus(), "N/A");
/// ```
pub fn submit(
    complaints: &[Complaint],
    author: &User,
    draft: ComplaintDraft,
    id: ComplaintId,
    now: DateTime<Utc>,
) -> Result<Vec<Complaint>, Error> {
    let description = Description::new(&draft.description).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({ "field": "description" }))
    })?;
    let attachment_url = draft
        .attachment_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .map(AttachmentUrl::new)
        .transpose()
        .map_err(|err| {
            Error::invalid_request(err.to_string())
                .with_details(json!({ "field": "attachmentUrl" }))
        })?;

    let submitted = Complaint::try_from_parts(ComplaintParts {
        id,
        student_id: author.id().clone(),
        student_name: author.name().clone(),
        campus: author.campus().unwrap_or(UNKNOWN_CAMPUS).to_owned(),
        category: draft.category,
        description,
        priority: draft.priority,
        attachment_url,
        status: Status::Submitted,
        assigned_admin_id: None,
        timeline: vec![TimelineEvent::new(
            TimelineAction::ComplaintSubmitted,
            SUBMITTED_MESSAGE,
            now,
        )],
        created_at: now,
        updated_at: now,
    })
    .map_err(|err| Error::invalid_request(err.to_string()))?;

    let mut next = Vec::with_capacity(complaints.len() + 1);
    next.push(submitted);
    next.extend_from_slice(complaints);
    Ok(next)
}

/// Events an update would append, status event first.
///
/// A note is blank when it is empty after trimming. Resolving with a note
/// folds the note into the resolution message instead of adding a separate
/// event.
pub fn pending_events(
    current: Status,
    new_status: Status,
    note: Option<&str>,
    responder: &UserId,
    now: DateTime<Utc>,
) -> Vec<TimelineEvent> {
    let mut note = note.map(str::trim).filter(|text| !text.is_empty());
    let mut events = Vec::with_capacity(2);

    if new_status != current {
        let (action, message) = match new_status {
            Status::Resolved => {
                let mut message = format!("Status changed to {new_status}.");
                if let Some(text) = note.take() {
                    message.push_str(" Resolution note: ");
                    message.push_str(text);
                }
                (TimelineAction::Resolution, message)
            }
            Status::Submitted | Status::InProgress => (
                TimelineAction::StatusUpdate,
                format!("Status changed to {new_status}."),
            ),
        };
        events.push(TimelineEvent::new(action, message, now).with_responder(responder.clone()));
    }

    if let Some(text) = note {
        events.push(
            TimelineEvent::new(TimelineAction::NoteAdded, text, now)
                .with_responder(responder.clone()),
        );
    }

    events
}

/// Apply an admin update to the complaint with `id`.
///
/// Fails with `not_found` when no complaint has that id. Transitions are not
/// guarded; moving out of [`Status::Resolved`] is accepted.
pub fn update(
    complaints: &[Complaint],
    id: &ComplaintId,
    actor: &User,
    new_status: Status,
    note: Option<&str>,
    now: DateTime<Utc>,
) -> Result<UpdateOutcome, Error> {
    let target = complaints
        .iter()
        .find(|complaint| complaint.id() == id)
        .ok_or_else(|| {
            Error::not_found(format!("complaint {id} not found"))
                .with_details(json!({ "complaintId": id }))
        })?;

    let events = pending_events(target.status(), new_status, note, actor.id(), now);
    if events.is_empty() {
        return Ok(UpdateOutcome::Unchanged);
    }

    let mut next = complaints.to_vec();
    if let Some(slot) = next.iter_mut().find(|complaint| complaint.id() == id) {
        slot.record(new_status, events, now);
    }
    Ok(UpdateOutcome::Updated(next))
}

#[cfg(test)]
#[path = "complaint_lifecycle_tests.rs"]
mod tests;
