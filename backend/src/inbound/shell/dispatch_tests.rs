//! Tests for the shell dispatcher.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rstest::{fixture, rstest};
use serde_json::Value;

use super::*;
use crate::domain::{Complaint, ErrorCode, TimelineAction};
use crate::test_support::{MutableClock, SequentialIds, mock_users};

type TestShell = Shell<MutableClock, SequentialIds>;

#[fixture]
fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 20, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[fixture]
fn shell(start: DateTime<Utc>) -> TestShell {
    let desk = ComplaintDesk::new(
        Arc::new(MutableClock::new(start)),
        Arc::new(SequentialIds::new()),
    );
    Shell::new(desk, DeskState::new(mock_users(start), Vec::new()))
}

fn ok(response: ShellResponse) -> Reply {
    match response {
        ShellResponse::Ok(reply) => reply,
        ShellResponse::Error(err) => panic!("expected success, got {err:?}"),
    }
}

fn error_code(response: &ShellResponse) -> ErrorCode {
    response.error().map(Error::code).expect("expected an error")
}

const ARJUN_LOGIN: &str =
    r#"{"command":"login","email":"arjun.s@brototype.com","password":"password"}"#;
const ADMIN_LOGIN: &str =
    r#"{"command":"login","email":"admin@brototype.com","password":"password"}"#;
const WATER: &str = r#"{"command":"submit","category":"Hostel","priority":"Urgent","description":"Room has no water supply"}"#;

#[rstest]
fn commands_requiring_a_session_are_forbidden_when_signed_out(mut shell: TestShell) {
    for line in [
        WATER,
        r#"{"command":"dashboard"}"#,
        r#"{"command":"stats"}"#,
        r#"{"command":"logout"}"#,
        r#"{"command":"show","complaintId":"complaint-1"}"#,
    ] {
        let response = shell.handle_line(line);
        assert_eq!(error_code(&response), ErrorCode::Forbidden, "{line}");
    }
}

#[rstest]
fn login_opens_a_session(mut shell: TestShell) {
    let reply = ok(shell.handle_line(ARJUN_LOGIN));
    let Reply::User(user) = reply else {
        panic!("expected user reply");
    };
    assert_eq!(user.id().as_ref(), "student-01");
    assert_eq!(
        shell.session().map(|s| s.user().id().clone()),
        Some(user.id().clone())
    );
}

#[rstest]
fn wrong_password_is_an_invalid_credential(mut shell: TestShell) {
    let response = shell
        .handle_line(r#"{"command":"login","email":"arjun.s@brototype.com","password":"nope"}"#);
    assert_eq!(error_code(&response), ErrorCode::InvalidCredential);
    assert!(shell.session().is_none());
}

#[rstest]
fn signup_registers_and_signs_in(mut shell: TestShell) {
    let reply = ok(shell.handle_line(
        r#"{"command":"signup","name":"Dup Student","email":"dup@x.com","password":"secret","campus":"Kochi","batch":"MEARN-2"}"#,
    ));
    let Reply::User(user) = reply else {
        panic!("expected user reply");
    };
    assert_eq!(user.id().as_ref(), "student-1");
    assert_eq!(shell.state().users().len(), 4);

    let again = shell.handle_line(
        r#"{"command":"signup","name":"Dup Again","email":"DUP@x.com","password":"secret","campus":"Kochi","batch":"MEARN-2"}"#,
    );
    assert_eq!(error_code(&again), ErrorCode::DuplicateIdentity);
    assert_eq!(shell.state().users().len(), 4);
}

#[rstest]
fn signup_with_missing_fields_is_rejected(mut shell: TestShell) {
    let response = shell.handle_line(r#"{"command":"signup","name":"Only Name"}"#);
    assert_eq!(error_code(&response), ErrorCode::InvalidRequest);
    assert!(shell.session().is_none());
}

#[rstest]
fn student_submission_and_admin_resolution(mut shell: TestShell) {
    ok(shell.handle_line(ARJUN_LOGIN));
    let Reply::Complaint(submitted) = ok(shell.handle_line(WATER)) else {
        panic!("expected complaint reply");
    };
    assert_eq!(submitted.id().as_ref(), "complaint-1");
    assert_eq!(submitted.status(), Status::Submitted);

    ok(shell.handle_line(ADMIN_LOGIN));
    let reply = ok(shell.handle_line(
        r#"{"command":"update","complaintId":"complaint-1","status":"Resolved","note":"Plumber fixed it"}"#,
    ));
    let Reply::Update(update) = reply else {
        panic!("expected update reply");
    };
    assert!(update.changed);
    assert_eq!(update.complaint.status(), Status::Resolved);
    let newest = update.complaint.timeline().first().expect("timeline entry");
    assert_eq!(newest.action(), TimelineAction::Resolution);
    assert!(newest.message().contains("Plumber fixed it"));
}

#[rstest]
fn repeating_the_current_status_reports_no_change(mut shell: TestShell) {
    ok(shell.handle_line(ARJUN_LOGIN));
    ok(shell.handle_line(WATER));
    ok(shell.handle_line(ADMIN_LOGIN));

    let Reply::Update(update) = ok(shell.handle_line(
        r#"{"command":"update","complaintId":"complaint-1","status":"Submitted"}"#,
    )) else {
        panic!("expected update reply");
    };
    assert!(!update.changed);
    assert_eq!(update.complaint.timeline().len(), 1);
}

#[rstest]
fn students_cannot_update_or_read_stats(mut shell: TestShell) {
    ok(shell.handle_line(ARJUN_LOGIN));
    ok(shell.handle_line(WATER));

    let update = shell.handle_line(
        r#"{"command":"update","complaintId":"complaint-1","status":"Resolved"}"#,
    );
    assert_eq!(error_code(&update), ErrorCode::Forbidden);
    assert_eq!(error_code(&shell.handle_line(r#"{"command":"stats"}"#)), ErrorCode::Forbidden);
    assert_eq!(
        shell.state().complaints().first().map(Complaint::status),
        Some(Status::Submitted)
    );
}

#[rstest]
fn admin_filter_is_remembered_by_the_dashboard(mut shell: TestShell) {
    ok(shell.handle_line(ARJUN_LOGIN));
    ok(shell.handle_line(WATER));
    ok(shell.handle_line(
        r#"{"command":"submit","category":"Fee","priority":"Normal","description":"Fee receipt never arrived"}"#,
    ));
    ok(shell.handle_line(ADMIN_LOGIN));

    let Reply::Complaints(found) =
        ok(shell.handle_line(r#"{"command":"filter","category":"Fee"}"#))
    else {
        panic!("expected complaint list");
    };
    assert_eq!(found.len(), 1);

    let Reply::Dashboard(Dashboard::Admin(board)) =
        ok(shell.handle_line(r#"{"command":"dashboard"}"#))
    else {
        panic!("expected admin dashboard");
    };
    assert_eq!(board.complaints.len(), 1);
    assert_eq!(board.stats.total_complaints, 2);
}

#[rstest]
fn logout_ends_the_session(mut shell: TestShell) {
    ok(shell.handle_line(ARJUN_LOGIN));
    let reply = ok(shell.handle_line(r#"{"command":"logout"}"#));
    assert!(matches!(reply, Reply::SignedOut { .. }));
    assert!(shell.session().is_none());
}

#[rstest]
fn unparseable_lines_are_invalid_requests(mut shell: TestShell) {
    let response = shell.handle_line("{not json");
    assert_eq!(error_code(&response), ErrorCode::InvalidRequest);
}

#[rstest]
fn run_answers_each_command_line(mut shell: TestShell) {
    let script = format!("# sign in\n{ARJUN_LOGIN}\n\n{WATER}\n{{\"command\":\"stats\"}}\n");
    let mut output = Vec::new();
    shell
        .run(script.as_bytes(), &mut output)
        .expect("run succeeds");

    let lines: Vec<Value> = String::from_utf8(output)
        .expect("utf-8 output")
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["ok"]["id"], "student-01");
    assert_eq!(lines[1]["ok"]["status"], "Submitted");
    assert_eq!(lines[2]["error"]["code"], "forbidden");
}
