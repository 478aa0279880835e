//! Tests for the domain error payload.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn base_error() -> Error {
    Error::invalid_request("description must be at least 10 characters")
}

#[rstest]
fn invalid_request_constructor_sets_code(base_error: Error) {
    assert_eq!(base_error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        base_error.message(),
        "description must be at least 10 characters"
    );
}

#[rstest]
#[case(Error::invalid_credential("x"), ErrorCode::InvalidCredential)]
#[case(Error::forbidden("x"), ErrorCode::Forbidden)]
#[case(Error::not_found("x"), ErrorCode::NotFound)]
#[case(Error::duplicate_identity("x"), ErrorCode::DuplicateIdentity)]
fn convenience_constructors_set_codes(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn new_panics_on_empty_message() {
    let result = std::panic::catch_unwind(|| Error::new(ErrorCode::NotFound, ""));
    assert!(result.is_err());
}

#[rstest]
fn display_uses_message(base_error: Error) {
    assert_eq!(
        base_error.to_string(),
        "description must be at least 10 characters"
    );
}

#[rstest]
fn serialises_codes_in_snake_case() {
    let error = Error::duplicate_identity("An account with this email already exists.")
        .with_details(json!({"email": "dup@x.com"}));
    let value = serde_json::to_value(&error).expect("serialise error");

    assert_eq!(
        value,
        json!({
            "code": "duplicate_identity",
            "message": "An account with this email already exists.",
            "details": {"email": "dup@x.com"}
        })
    );
}

#[rstest]
fn omits_absent_details(base_error: Error) {
    let value = serde_json::to_value(&base_error).expect("serialise error");
    assert!(value.get("details").is_none());
}

#[rstest]
fn deserialising_rejects_blank_messages() {
    let payload = json!({"code": "not_found", "message": "  "});
    let result = serde_json::from_value::<Error>(payload);
    assert!(result.is_err());
}
