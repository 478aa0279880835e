//! JSON-lines shell adapter.
//!
//! Reads one [`ShellCommand`] per line and writes one [`ShellResponse`] per
//! line, keeping the session and desk state between commands.

mod dispatch;
mod messages;

pub use dispatch::Shell;
pub use messages::{Reply, ShellCommand, ShellResponse, StatsReply, UpdateReply};
