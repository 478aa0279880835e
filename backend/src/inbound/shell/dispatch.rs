//! Command dispatch for the JSON-lines shell.
//!
//! The shell owns the authoritative [`DeskState`], the current [`Session`]
//! and the admin's last filter. Every command either replaces the state with
//! the desk's returned value or leaves it untouched on error.

use std::io::{self, BufRead, Write};

use mockable::Clock;
use serde_json::json;
use tracing::{debug, warn};

use super::messages::{Reply, ShellCommand, ShellResponse, StatsReply, UpdateReply};
use crate::domain::complaint_query;
use crate::domain::ports::IdGenerator;
use crate::domain::{
    ComplaintDesk, ComplaintDetail, ComplaintDraft, ComplaintFilter, ComplaintId, Dashboard, DeskResult,
    DeskState, Error, Role, Session, SignupForm, Status,
};

/// Interactive front end over a [`ComplaintDesk`].
pub struct Shell<C, I> {
    desk: ComplaintDesk<C, I>,
    state: DeskState,
    session: Option<Session>,
    filter: ComplaintFilter,
}

impl<C, I> Shell<C, I>
where
    C: Clock,
    I: IdGenerator,
{
    pub fn new(desk: ComplaintDesk<C, I>, state: DeskState) -> Self {
        Self {
            desk,
            state,
            session: None,
            filter: ComplaintFilter::default(),
        }
    }

    /// Current desk state.
    pub fn state(&self) -> &DeskState {
        &self.state
    }

    /// Signed-in session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Parse and execute one input line.
    pub fn handle_line(&mut self, line: &str) -> ShellResponse {
        match serde_json::from_str::<ShellCommand>(line) {
            Ok(command) => self.handle(command),
            Err(err) => {
                debug!(error = %err, "unparseable shell command");
                ShellResponse::Error(
                    Error::invalid_request(format!("could not parse command: {err}"))
                        .with_details(json!({ "line": err.line(), "column": err.column() })),
                )
            }
        }
    }

    /// Execute a parsed command.
    pub fn handle(&mut self, command: ShellCommand) -> ShellResponse {
        let result = match command {
            ShellCommand::Signup {
                name,
                email,
                password,
                campus,
                batch,
            } => self.signup(SignupForm {
                name: &name,
                email: &email,
                password: &password,
                campus: &campus,
                batch: &batch,
            }),
            ShellCommand::Login { email, password } => self.login(&email, &password),
            ShellCommand::Logout => self.logout(),
            ShellCommand::Submit { draft } => self.submit(draft),
            ShellCommand::Update {
                complaint_id,
                status,
                note,
            } => self.update(&complaint_id, status, note.as_deref()),
            ShellCommand::Dashboard { filter } => self.dashboard(filter),
            ShellCommand::Filter { filter } => self.filter(filter),
            ShellCommand::Stats => self
                .require_admin()
                .map(|()| Reply::Stats(StatsReply::from(self.desk.aggregate(&self.state)))),
            ShellCommand::Show { complaint_id } => self.show(&complaint_id),
        };
        if let Err(err) = &result {
            warn!(code = ?err.code(), message = err.message(), "shell command failed");
        }
        ShellResponse::from(result)
    }

    /// Read commands from `input` until EOF, writing one response per line.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let response = self.handle_line(trimmed);
            serde_json::to_writer(&mut output, &response).map_err(io::Error::other)?;
            output.write_all(b"\n")?;
            output.flush()?;
        }
        Ok(())
    }

    fn current_session(&self) -> DeskResult<Session> {
        self.session
            .clone()
            .ok_or_else(|| Error::forbidden("sign in first"))
    }

    fn require_admin(&self) -> DeskResult<()> {
        let session = self.current_session()?;
        match session.role() {
            Role::Admin => Ok(()),
            Role::Student => Err(Error::forbidden("only admin accounts may do that")),
        }
    }

    fn signup(&mut self, form: SignupForm<'_>) -> DeskResult<Reply> {
        let (next, user) = self.desk.signup(&self.state, form)?;
        self.state = next;
        self.session = Some(Session::new(user.clone()));
        Ok(Reply::User(user))
    }

    fn login(&mut self, email: &str, password: &str) -> DeskResult<Reply> {
        let user = self.desk.login(&self.state, email, password)?;
        self.session = Some(Session::new(user.clone()));
        self.filter = ComplaintFilter::default();
        Ok(Reply::User(user))
    }

    fn logout(&mut self) -> DeskResult<Reply> {
        let session = self
            .session
            .take()
            .ok_or_else(|| Error::forbidden("sign in first"))?;
        Ok(Reply::SignedOut {
            signed_out: session.user().id().clone(),
        })
    }

    fn submit(&mut self, draft: ComplaintDraft) -> DeskResult<Reply> {
        let session = self.current_session()?;
        let next = self.desk.submit(&self.state, session.user(), draft)?;
        // The desk prepends new complaints.
        let submitted = next
            .complaints()
            .first()
            .cloned()
            .ok_or_else(|| Error::not_found("submitted complaint missing"))?;
        self.state = next;
        Ok(Reply::Complaint(submitted))
    }

    fn update(
        &mut self,
        id: &ComplaintId,
        status: Status,
        note: Option<&str>,
    ) -> DeskResult<Reply> {
        let session = self.current_session()?;
        let changed = match self
            .desk
            .update(&self.state, id, session.user(), status, note)?
        {
            Some(next) => {
                self.state = next;
                true
            }
            None => false,
        };
        let complaint = complaint_query::find(self.state.complaints(), id)?.clone();
        Ok(Reply::Update(UpdateReply { changed, complaint }))
    }

    fn show(&self, id: &ComplaintId) -> DeskResult<Reply> {
        let session = self.current_session()?;
        ComplaintDetail::for_session(&session, &self.state, id).map(Reply::Detail)
    }

    fn dashboard(&mut self, filter: Option<ComplaintFilter>) -> DeskResult<Reply> {
        let session = self.current_session()?;
        if let Some(filter) = filter {
            self.filter = filter;
        }
        Ok(Reply::Dashboard(Dashboard::for_session(
            &session,
            &self.state,
            &self.filter,
        )))
    }

    fn filter(&mut self, filter: ComplaintFilter) -> DeskResult<Reply> {
        self.require_admin()?;
        let complaints = self.desk.filter(&self.state, &filter);
        self.filter = filter;
        Ok(Reply::Complaints(complaints))
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
