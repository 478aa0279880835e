//! Complaint desk service.
//!
//! [`DeskState`] is the explicitly owned store value: every user and every
//! complaint. [`ComplaintDesk`] carries the injected clock and id generator
//! and turns a state plus a command into a replacement state or a view. It
//! never holds state between calls.

use std::sync::Arc;

use mockable::Clock;
use serde::Serialize;
use tracing::{info, warn};

use super::analytics::{self, ComplaintStats};
use super::auth::{LoginCredentials, SignupForm, SignupRequest};
use super::complaint::{Complaint, ComplaintDraft, ComplaintId, Status};
use super::complaint_lifecycle::{self, UpdateOutcome};
use super::complaint_query::{self, ComplaintFilter};
use super::ports::IdGenerator;
use super::{Error, Role, User, accounts};

/// Users and complaints, complaints newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeskState {
    users: Vec<User>,
    complaints: Vec<Complaint>,
}

impl DeskState {
    pub fn new(users: Vec<User>, complaints: Vec<Complaint>) -> Self {
        Self { users, complaints }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn complaints(&self) -> &[Complaint] {
        &self.complaints
    }

    #[must_use]
    fn with_users(&self, users: Vec<User>) -> Self {
        Self {
            users,
            complaints: self.complaints.clone(),
        }
    }

    #[must_use]
    fn with_complaints(&self, complaints: Vec<Complaint>) -> Self {
        Self {
            users: self.users.clone(),
            complaints,
        }
    }
}

fn require_role(user: &User, role: Role, action: &str) -> Result<(), Error> {
    if user.role() == role {
        return Ok(());
    }
    warn!(user_id = %user.id(), role = %user.role(), action, "action refused for role");
    Err(Error::forbidden(format!("only {role} accounts may {action}")))
}

/// Complaint desk use-cases over an explicit [`DeskState`].
pub struct ComplaintDesk<C, I> {
    clock: Arc<C>,
    ids: Arc<I>,
}

impl<C, I> Clone for ComplaintDesk<C, I> {
    fn clone(&self) -> Self {
        Self {
            clock: Arc::clone(&self.clock),
            ids: Arc::clone(&self.ids),
        }
    }
}

impl<C, I> ComplaintDesk<C, I>
where
    C: Clock,
    I: IdGenerator,
{
    pub fn new(clock: Arc<C>, ids: Arc<I>) -> Self {
        Self { clock, ids }
    }

    /// Register a student and return the new state with the created user.
    pub fn signup(&self, state: &DeskState, form: SignupForm<'_>) -> Result<(DeskState, User), Error> {
        let request = SignupRequest::try_from_form(form).map_err(|err| {
            warn!(field = err.field(), "signup rejected: invalid form");
            Error::from(err)
        })?;

        match accounts::signup(state.users(), &request, self.ids.student_id(), self.clock.utc()) {
            Ok((users, user)) => {
                info!(user_id = %user.id(), campus = ?user.campus(), "student registered");
                Ok((state.with_users(users), user))
            }
            Err(err) => {
                warn!(code = ?err.code(), "signup rejected");
                Err(err)
            }
        }
    }

    /// Resolve raw credentials to a user.
    pub fn login(&self, state: &DeskState, email: &str, password: &str) -> Result<User, Error> {
        let credentials = LoginCredentials::try_from_parts(email, password).map_err(Error::from)?;
        match accounts::login(state.users(), &credentials) {
            Ok(user) => {
                info!(user_id = %user.id(), role = %user.role(), "signed in");
                Ok(user.clone())
            }
            Err(err) => {
                warn!("sign-in rejected");
                Err(err)
            }
        }
    }

    /// Submit a complaint authored by a student.
    pub fn submit(
        &self,
        state: &DeskState,
        author: &User,
        draft: ComplaintDraft,
    ) -> Result<DeskState, Error> {
        require_role(author, Role::Student, "submit complaints")?;
        let id = self.ids.complaint_id();
        match complaint_lifecycle::submit(
            state.complaints(),
            author,
            draft,
            id.clone(),
            self.clock.utc(),
        ) {
            Ok(complaints) => {
                info!(complaint_id = %id, student_id = %author.id(), "complaint submitted");
                Ok(state.with_complaints(complaints))
            }
            Err(err) => {
                warn!(student_id = %author.id(), message = err.message(), "submission rejected");
                Err(err)
            }
        }
    }

    /// Apply an admin update. `Ok(None)` means nothing changed and the
    /// caller keeps `state`.
    pub fn update(
        &self,
        state: &DeskState,
        id: &ComplaintId,
        actor: &User,
        new_status: Status,
        note: Option<&str>,
    ) -> Result<Option<DeskState>, Error> {
        require_role(actor, Role::Admin, "update complaints")?;
        match complaint_lifecycle::update(
            state.complaints(),
            id,
            actor,
            new_status,
            note,
            self.clock.utc(),
        ) {
            Ok(UpdateOutcome::Updated(complaints)) => {
                info!(complaint_id = %id, admin_id = %actor.id(), status = %new_status, "complaint updated");
                Ok(Some(state.with_complaints(complaints)))
            }
            Ok(UpdateOutcome::Unchanged) => {
                info!(complaint_id = %id, "update requested no change");
                Ok(None)
            }
            Err(err) => {
                warn!(complaint_id = %id, code = ?err.code(), "update rejected");
                Err(err)
            }
        }
    }

    /// Complaints admitted by `filter`.
    pub fn filter(&self, state: &DeskState, filter: &ComplaintFilter) -> Vec<Complaint> {
        complaint_query::filter(state.complaints(), filter)
    }

    /// Aggregate statistics over the whole desk.
    pub fn aggregate(&self, state: &DeskState) -> ComplaintStats {
        analytics::aggregate(state.complaints(), state.users())
    }
}
