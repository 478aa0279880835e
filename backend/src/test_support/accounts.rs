//! Fixture accounts mirroring the bundled mock users.

use chrono::{DateTime, Utc};

use crate::domain::{Credential, DisplayName, Email, Role, User, UserId};

/// Password shared by every fixture account.
pub const FIXTURE_PASSWORD: &str = "password";

fn user(id: &str, name: &str, email: &str, role: Role, now: DateTime<Utc>) -> User {
    let id = UserId::new(id).unwrap_or_else(|err| panic!("fixture id {id}: {err}"));
    let name = DisplayName::new(name).unwrap_or_else(|err| panic!("fixture name {name}: {err}"));
    let email = Email::new(email).unwrap_or_else(|err| panic!("fixture email {email}: {err}"));
    let credential =
        Credential::new(FIXTURE_PASSWORD).unwrap_or_else(|err| panic!("fixture password: {err}"));
    User::new(id, name, email, credential, role, now)
}

/// `student-01`, Arjun Sharma, Kochi campus, batch MEARN-1.
pub fn arjun(now: DateTime<Utc>) -> User {
    user(
        "student-01",
        "Arjun Sharma",
        "arjun.s@brototype.com",
        Role::Student,
        now,
    )
    .with_batch("MEARN-1")
    .with_campus("Kochi")
}

/// `student-02`, Priya Patel, Trivandrum campus, batch Flutter-3.
pub fn priya(now: DateTime<Utc>) -> User {
    user(
        "student-02",
        "Priya Patel",
        "priya.p@brototype.com",
        Role::Student,
        now,
    )
    .with_batch("Flutter-3")
    .with_campus("Trivandrum")
}

/// `admin-01`, Admin User, HQ.
pub fn admin(now: DateTime<Utc>) -> User {
    user(
        "admin-01",
        "Admin User",
        "admin@brototype.com",
        Role::Admin,
        now,
    )
    .with_campus("HQ")
}

/// A student with no campus on file.
pub fn campusless_student(now: DateTime<Utc>) -> User {
    user(
        "student-09",
        "Nikhil Rao",
        "nikhil.r@brototype.com",
        Role::Student,
        now,
    )
}

/// The three bundled accounts in registry order.
pub fn mock_users(now: DateTime<Utc>) -> Vec<User> {
    vec![arjun(now), priya(now), admin(now)]
}
