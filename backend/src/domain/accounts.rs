//! Account registration and sign-in over the user collection.

use chrono::{DateTime, Utc};
use serde_json::json;

use super::auth::{LoginCredentials, SignupRequest};
use super::user::{Credential, Role, User, UserId};
use super::Error;

/// Register a student.
///
/// The email must not already be taken, compared ignoring case. On success
/// the new user is appended to a copy of `users` and returned alongside it
/// so the caller can sign them in.
pub fn signup(
    users: &[User],
    request: &SignupRequest,
    id: UserId,
    now: DateTime<Utc>,
) -> Result<(Vec<User>, User), Error> {
    if users
        .iter()
        .any(|user| user.email().matches(request.email().as_ref()))
    {
        return Err(
            Error::duplicate_identity("an account with this email already exists")
                .with_details(json!({ "field": "email" })),
        );
    }

    let credential = Credential::new(request.password()).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({ "field": "password" }))
    })?;
    let user = User::new(
        id,
        request.name().clone(),
        request.email().clone(),
        credential,
        Role::Student,
        now,
    )
    .with_batch(request.batch())
    .with_campus(request.campus());

    let mut next = users.to_vec();
    next.push(user.clone());
    Ok((next, user))
}

/// Resolve credentials to a user. Emails match ignoring case; passwords
/// match exactly. Both failure modes report the same error.
pub fn login<'a>(users: &'a [User], credentials: &LoginCredentials) -> Result<&'a User, Error> {
    users
        .iter()
        .find(|user| {
            user.email().matches(credentials.email())
                && user.verify_credential(credentials.password())
        })
        .ok_or_else(|| Error::invalid_credential("invalid email or password"))
}
