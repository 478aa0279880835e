//! Wire-level message definitions for the JSON-lines shell.
//!
//! Each input line is one [`ShellCommand`]; each output line is one
//! [`ShellResponse`], either `{"ok": ...}` or `{"error": {...}}`.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Complaint, ComplaintDetail, ComplaintDraft, ComplaintFilter, ComplaintId, ComplaintStats,
    Dashboard, Error, Status, User, UserId,
};

/// Inbound command, tagged by its `command` field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ShellCommand {
    Signup {
        #[serde(default)]
        name: String,
        #[serde(default)]
        email: String,
        #[serde(default)]
        password: String,
        #[serde(default)]
        campus: String,
        #[serde(default)]
        batch: String,
    },
    Login {
        email: String,
        password: String,
    },
    Logout,
    Submit {
        #[serde(flatten)]
        draft: ComplaintDraft,
    },
    Update {
        complaint_id: ComplaintId,
        status: Status,
        #[serde(default)]
        note: Option<String>,
    },
    Dashboard {
        #[serde(default)]
        filter: Option<ComplaintFilter>,
    },
    Filter {
        #[serde(flatten)]
        filter: ComplaintFilter,
    },
    Stats,
    Show {
        complaint_id: ComplaintId,
    },
}

/// Result of an `update` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReply {
    pub changed: bool,
    pub complaint: Complaint,
}

/// Result of a `stats` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReply {
    #[serde(flatten)]
    pub stats: ComplaintStats,
    pub avg_resolution_label: String,
}

impl From<ComplaintStats> for StatsReply {
    fn from(stats: ComplaintStats) -> Self {
        Self {
            avg_resolution_label: stats.avg_resolution_label(),
            stats,
        }
    }
}

/// Successful payloads, serialised without a wrapper tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    User(User),
    SignedOut {
        #[serde(rename = "signedOut")]
        signed_out: UserId,
    },
    Complaint(Complaint),
    Update(UpdateReply),
    Dashboard(Dashboard),
    Complaints(Vec<Complaint>),
    Stats(StatsReply),
    Detail(ComplaintDetail),
}

/// One output line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellResponse {
    Ok(Reply),
    Error(Error),
}

impl From<Result<Reply, Error>> for ShellResponse {
    fn from(result: Result<Reply, Error>) -> Self {
        match result {
            Ok(reply) => Self::Ok(reply),
            Err(err) => Self::Error(err),
        }
    }
}

impl ShellResponse {
    /// Error payload, if this response carries one.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Ok(_) => None,
            Self::Error(err) => Some(err),
        }
    }
}
