//! Tests for complaint submission and admin updates.

use chrono::{Duration, TimeZone};
use rstest::{fixture, rstest};

use super::*;
use crate::domain::{Category, ErrorCode, Priority};
use crate::test_support::{admin, arjun, campusless_student};

#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 20, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

fn water_draft() -> ComplaintDraft {
    ComplaintDraft {
        category: Category::Hostel,
        priority: Priority::Urgent,
        description: "Room has no water supply".to_owned(),
        attachment_url: None,
    }
}

fn submitted(now: DateTime<Utc>) -> Vec<Complaint> {
    submit(&[], &arjun(now), water_draft(), ComplaintId::from_sequence(1), now)
        .expect("valid submission")
}

fn head(complaints: &[Complaint]) -> &Complaint {
    complaints.first().expect("non-empty collection")
}

fn updated(outcome: UpdateOutcome) -> Vec<Complaint> {
    match outcome {
        UpdateOutcome::Updated(complaints) => complaints,
        UpdateOutcome::Unchanged => panic!("expected an update"),
    }
}

#[rstest]
fn submit_creates_a_submitted_complaint(now: DateTime<Utc>) {
    let complaints = submitted(now);
    let complaint = head(&complaints);

    assert_eq!(complaints.len(), 1);
    assert_eq!(complaint.status(), Status::Submitted);
    assert_eq!(complaint.category(), Category::Hostel);
    assert_eq!(complaint.priority(), Priority::Urgent);
    assert_eq!(complaint.student_id().as_ref(), "student-01");
    assert_eq!(complaint.student_name().as_ref(), "Arjun Sharma");
    assert_eq!(complaint.campus(), "Kochi");
    assert_eq!(complaint.created_at(), now);
    assert_eq!(complaint.updated_at(), now);

    let [event] = complaint.timeline() else {
        panic!("expected exactly one event");
    };
    assert_eq!(event.action(), TimelineAction::ComplaintSubmitted);
    assert_eq!(event.message(), SUBMITTED_MESSAGE);
    assert!(event.responder_id().is_none());
}

#[rstest]
fn submit_prepends_without_touching_input(now: DateTime<Utc>) {
    let existing = submitted(now);
    let before = existing.clone();
    let later = now + Duration::minutes(5);

    let next = submit(
        &existing,
        &arjun(now),
        water_draft(),
        ComplaintId::from_sequence(2),
        later,
    )
    .expect("valid submission");

    assert_eq!(existing, before);
    assert_eq!(next.len(), existing.len() + 1);
    assert_eq!(head(&next).id().as_ref(), "complaint-2");
    assert_eq!(next.get(1), existing.first());
}

#[rstest]
fn submit_records_unknown_campus(now: DateTime<Utc>) {
    let complaints = submit(
        &[],
        &campusless_student(now),
        water_draft(),
        ComplaintId::from_sequence(1),
        now,
    )
    .expect("valid submission");
    assert_eq!(head(&complaints).campus(), UNKNOWN_CAMPUS);
}

#[rstest]
#[case("short")]
#[case("   padded   ")]
fn submit_rejects_short_descriptions(now: DateTime<Utc>, #[case] description: &str) {
    let draft = ComplaintDraft {
        description: description.to_owned(),
        ..water_draft()
    };
    let err = submit(&[], &arjun(now), draft, ComplaintId::from_sequence(1), now)
        .expect_err("description too short");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        err.details().and_then(|d| d.get("field")).and_then(|f| f.as_str()),
        Some("description")
    );
}

#[rstest]
fn submit_keeps_attachment_and_ignores_blank_one(now: DateTime<Utc>) {
    let with_attachment = ComplaintDraft {
        attachment_url: Some("blob:photo-1".to_owned()),
        ..water_draft()
    };
    let complaints = submit(&[], &arjun(now), with_attachment, ComplaintId::from_sequence(1), now)
        .expect("valid submission");
    assert_eq!(
        head(&complaints).attachment_url().map(|url| url.as_ref()),
        Some("blob:photo-1")
    );

    let blank = ComplaintDraft {
        attachment_url: Some("  ".to_owned()),
        ..water_draft()
    };
    let complaints = submit(&[], &arjun(now), blank, ComplaintId::from_sequence(1), now)
        .expect("valid submission");
    assert!(head(&complaints).attachment_url().is_none());
}

#[rstest]
fn resolving_with_a_note_consumes_the_note(now: DateTime<Utc>) {
    let complaints = submitted(now);
    let later = now + Duration::hours(3);

    let next = updated(
        update(
            &complaints,
            &ComplaintId::from_sequence(1),
            &admin(now),
            Status::Resolved,
            Some("Fixed by plumber"),
            later,
        )
        .expect("known complaint"),
    );

    let complaint = head(&next);
    assert_eq!(complaint.status(), Status::Resolved);
    assert_eq!(complaint.updated_at(), later);
    assert_eq!(complaint.timeline().len(), 2);
    let event = complaint.timeline().first().expect("head event");
    assert_eq!(event.action(), TimelineAction::Resolution);
    assert_eq!(
        event.message(),
        "Status changed to Resolved. Resolution note: Fixed by plumber"
    );
    assert_eq!(event.responder_id().map(|id| id.as_ref()), Some("admin-01"));
    assert_eq!(event.timestamp(), later);
}

#[rstest]
fn status_change_with_note_appends_two_events(now: DateTime<Utc>) {
    let complaints = submitted(now);
    let next = updated(
        update(
            &complaints,
            &ComplaintId::from_sequence(1),
            &admin(now),
            Status::InProgress,
            Some("Plumber booked for tomorrow"),
            now,
        )
        .expect("known complaint"),
    );

    let actions: Vec<_> = head(&next)
        .timeline()
        .iter()
        .map(|event| (event.action(), event.message().to_owned()))
        .collect();
    assert_eq!(
        actions,
        vec![
            (
                TimelineAction::StatusUpdate,
                "Status changed to In Progress.".to_owned()
            ),
            (
                TimelineAction::NoteAdded,
                "Plumber booked for tomorrow".to_owned()
            ),
            (
                TimelineAction::ComplaintSubmitted,
                SUBMITTED_MESSAGE.to_owned()
            ),
        ]
    );
}

#[rstest]
fn note_only_update_keeps_status(now: DateTime<Utc>) {
    let complaints = submitted(now);
    let next = updated(
        update(
            &complaints,
            &ComplaintId::from_sequence(1),
            &admin(now),
            Status::Submitted,
            Some("Checking with the warden"),
            now + Duration::minutes(1),
        )
        .expect("known complaint"),
    );
    let complaint = head(&next);
    assert_eq!(complaint.status(), Status::Submitted);
    assert_eq!(complaint.timeline().len(), 2);
    assert_eq!(
        complaint.timeline().first().map(TimelineEvent::action),
        Some(TimelineAction::NoteAdded)
    );
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   "))]
fn same_status_without_note_is_a_no_op(now: DateTime<Utc>, #[case] note: Option<&str>) {
    let complaints = submitted(now);
    let outcome = update(
        &complaints,
        &ComplaintId::from_sequence(1),
        &admin(now),
        Status::Submitted,
        note,
        now,
    )
    .expect("known complaint");
    assert_eq!(outcome, UpdateOutcome::Unchanged);
    assert!(!outcome.is_updated());
}

#[rstest]
fn update_reports_missing_complaint(now: DateTime<Utc>) {
    let complaints = submitted(now);
    let err = update(
        &complaints,
        &ComplaintId::from_sequence(99),
        &admin(now),
        Status::Resolved,
        None,
        now,
    )
    .expect_err("unknown complaint");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
fn update_leaves_other_complaints_untouched(now: DateTime<Utc>) {
    let first = submitted(now);
    let both = submit(&first, &arjun(now), water_draft(), ComplaintId::from_sequence(2), now)
        .expect("valid submission");

    let next = updated(
        update(
            &both,
            &ComplaintId::from_sequence(1),
            &admin(now),
            Status::InProgress,
            None,
            now,
        )
        .expect("known complaint"),
    );
    assert_eq!(next.first(), both.first());
    assert_eq!(next.len(), both.len());
    assert_eq!(next.get(1).map(Complaint::status), Some(Status::InProgress));
}

#[rstest]
fn resolved_complaints_can_be_reopened(now: DateTime<Utc>) {
    let complaints = submitted(now);
    let id = ComplaintId::from_sequence(1);
    let resolved = updated(
        update(&complaints, &id, &admin(now), Status::Resolved, None, now)
            .expect("known complaint"),
    );
    let reopened = updated(
        update(&resolved, &id, &admin(now), Status::InProgress, None, now)
            .expect("known complaint"),
    );
    let complaint = head(&reopened);
    assert_eq!(complaint.status(), Status::InProgress);
    assert_eq!(complaint.timeline().len(), 3);
}

#[rstest]
#[case(Status::InProgress, None, 0)]
#[case(Status::Resolved, None, 1)]
#[case(Status::Resolved, Some("done"), 1)]
#[case(Status::Submitted, Some("done"), 2)]
#[case(Status::InProgress, Some("done"), 1)]
fn pending_events_count(
    now: DateTime<Utc>,
    #[case] target: Status,
    #[case] note: Option<&str>,
    #[case] expected: usize,
) {
    let events = pending_events(Status::InProgress, target, note, admin(now).id(), now);
    assert_eq!(events.len(), expected);
}
