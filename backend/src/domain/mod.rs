//! Domain primitives, aggregates and use-cases.
//!
//! Purpose: define the strongly typed complaint desk model and the pure
//! operations over it. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): desk error payload with a stable code.
//! - User, Role, Email, Credential: accounts and their validated parts.
//! - Complaint, TimelineEvent and the closed label sets.
//! - DeskState and ComplaintDesk: the explicit store value and the service
//!   that transforms it.
//! - Session and Dashboard: role dispatch for presentation collaborators.

pub mod accounts;
pub mod analytics;
pub mod auth;
pub mod complaint;
pub mod complaint_lifecycle;
pub mod complaint_query;
pub mod dashboard;
pub mod desk;
pub mod error;
pub mod example_data;
pub mod ports;
pub mod user;

pub use self::analytics::ComplaintStats;
pub use self::auth::{AuthValidationError, LoginCredentials, SignupForm, SignupRequest};
pub use self::complaint::{
    AttachmentUrl, Category, Complaint, ComplaintDraft, ComplaintId, ComplaintParts,
    ComplaintValidationError, DESCRIPTION_MIN, Description, LabelParseError, Priority, Status,
    TimelineAction, TimelineEvent, UNKNOWN_CAMPUS,
};
pub use self::complaint_lifecycle::UpdateOutcome;
pub use self::complaint_query::{ComplaintFilter, Selection};
pub use self::dashboard::{AdminDashboard, ComplaintDetail, Dashboard, Session, StudentDashboard};
pub use self::desk::{ComplaintDesk, DeskState};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::example_data::{ExampleDataSeedOutcome, ExampleDataSeeder, ExampleDataSeedingError};
pub use self::user::{Credential, DisplayName, Email, Role, User, UserId, UserValidationError};

/// Convenient desk result alias.
///
/// # Examples
/// ```
/// use brotocare::domain::{DeskResult, Error};
///
/// fn refuse() -> DeskResult<()> {
///     Err(Error::forbidden("nope"))
/// }
/// assert!(refuse().is_err());
/// ```
pub type DeskResult<T> = Result<T, Error>;
