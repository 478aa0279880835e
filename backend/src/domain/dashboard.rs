//! Role-specific dashboard views.
//!
//! A [`Session`] carries the signed-in user. [`Dashboard::for_session`]
//! dispatches on the role: students see their own complaints, admins see the
//! filtered desk with analytics.

use serde::Serialize;

use super::analytics::{self, ComplaintStats};
use super::complaint::{Complaint, ComplaintId, Status};
use super::complaint_query::{self, ComplaintFilter};
use super::desk::DeskState;
use super::{Error, Role, User};

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn role(&self) -> Role {
        self.user.role()
    }
}

/// A student's own complaints, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboard {
    pub user: User,
    pub complaints: Vec<Complaint>,
}

/// The admin's filtered view of the desk.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub user: User,
    pub filter: ComplaintFilter,
    pub complaints: Vec<Complaint>,
    pub stats: ComplaintStats,
    pub campus_options: Vec<String>,
}

/// Dashboard selected by the session role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Dashboard {
    Student(StudentDashboard),
    Admin(AdminDashboard),
}

impl Dashboard {
    /// Build the dashboard for `session`. Students ignore `filter`.
    pub fn for_session(session: &Session, state: &DeskState, filter: &ComplaintFilter) -> Self {
        let user = session.user().clone();
        match session.role() {
            Role::Student => Self::Student(StudentDashboard {
                complaints: complaint_query::complaints_for_student(state.complaints(), user.id()),
                user,
            }),
            Role::Admin => Self::Admin(AdminDashboard {
                filter: filter.clone(),
                complaints: complaint_query::filter(state.complaints(), filter),
                stats: analytics::aggregate(state.complaints(), state.users()),
                campus_options: complaint_query::campus_options(state.complaints()),
                user,
            }),
        }
    }
}

/// One complaint with the transitions the viewer may request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDetail {
    pub complaint: Complaint,
    pub offered_transitions: Vec<Status>,
}

impl ComplaintDetail {
    /// Detail view for `id`. Students may only open their own complaints.
    pub fn for_session(session: &Session, state: &DeskState, id: &ComplaintId) -> Result<Self, Error> {
        let complaint = complaint_query::find(state.complaints(), id)?;
        let offered_transitions = match session.role() {
            Role::Student if complaint.student_id() != session.user().id() => {
                return Err(Error::forbidden("students may only view their own complaints"));
            }
            Role::Student => Vec::new(),
            Role::Admin => complaint.status().offered_transitions().to_vec(),
        };
        Ok(Self {
            complaint: complaint.clone(),
            offered_transitions,
        })
    }
}
