//! Authentication primitives such as login credentials and signup requests.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to the desk.

use std::fmt;

use serde_json::json;
use zeroize::Zeroizing;

use super::Error;
use super::user::{DisplayName, Email, UserValidationError};

/// Domain error returned when login or signup payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthValidationError {
    /// A required field was missing or blank once trimmed.
    MissingField { field: &'static str },
    /// Password was blank.
    EmptyPassword,
    /// A present field failed user model validation.
    InvalidField {
        field: &'static str,
        reason: UserValidationError,
    },
}

impl fmt::Display for AuthValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "{field} is required"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::InvalidField { field, reason } => write!(f, "{field} is invalid: {reason}"),
        }
    }
}

impl std::error::Error for AuthValidationError {}

impl AuthValidationError {
    /// Name of the offending field, used in error details.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } | Self::InvalidField { field, .. } => field,
            Self::EmptyPassword => "password",
        }
    }
}

impl From<AuthValidationError> for Error {
    fn from(err: AuthValidationError) -> Self {
        Self::invalid_request(err.to_string()).with_details(json!({ "field": err.field() }))
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, AuthValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AuthValidationError::MissingField { field });
    }
    Ok(trimmed)
}

fn password(value: &str) -> Result<Zeroizing<String>, AuthValidationError> {
    if value.is_empty() {
        return Err(AuthValidationError::EmptyPassword);
    }
    Ok(Zeroizing::new(value.to_owned()))
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use brotocare::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" admin@brototype.com ", "password").unwrap();
/// assert_eq!(creds.email(), "admin@brototype.com");
/// assert_eq!(creds.password(), "password");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password_raw: &str) -> Result<Self, AuthValidationError> {
        let email = required("email", email)?;
        Ok(Self {
            email: email.to_owned(),
            password: password(password_raw)?,
        })
    }

    /// Email string suitable for user lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Raw signup form fields as received from an inbound adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignupForm<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub campus: &'a str,
    pub batch: &'a str,
}

/// Validated signup request for a new student account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    name: DisplayName,
    email: Email,
    password: Zeroizing<String>,
    campus: String,
    batch: String,
}

impl SignupRequest {
    /// Validate every signup field. Fields are checked in form order so the
    /// first missing one is reported.
    pub fn try_from_form(form: SignupForm<'_>) -> Result<Self, AuthValidationError> {
        let name = required("name", form.name)?;
        let email = required("email", form.email)?;
        let password = password(form.password)?;
        let campus = required("campus", form.campus)?;
        let batch = required("batch", form.batch)?;

        let name = DisplayName::new(name).map_err(|reason| AuthValidationError::InvalidField {
            field: "name",
            reason,
        })?;
        let email = Email::new(email).map_err(|reason| AuthValidationError::InvalidField {
            field: "email",
            reason,
        })?;

        Ok(Self {
            name,
            email,
            password,
            campus: campus.to_owned(),
            batch: batch.to_owned(),
        })
    }

    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub fn campus(&self) -> &str {
        self.campus.as_str()
    }

    pub fn batch(&self) -> &str {
        self.batch.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn form<'a>() -> SignupForm<'a> {
        SignupForm {
            name: "Dup Student",
            email: "dup@x.com",
            password: "pw",
            campus: "Kochi",
            batch: "MEARN-1",
        }
    }

    #[rstest]
    #[case("", "pw", AuthValidationError::MissingField { field: "email" })]
    #[case("   ", "pw", AuthValidationError::MissingField { field: "email" })]
    #[case("user@x.com", "", AuthValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: AuthValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("  admin@brototype.com  ", "secret")]
    #[case("alice@x.com", " correct horse battery staple ")]
    fn valid_credentials_trim_email(#[case] email: &str, #[case] password: &str) {
        let creds = LoginCredentials::try_from_parts(email, password)
            .expect("valid inputs should succeed");
        assert_eq!(creds.email(), email.trim());
        assert_eq!(creds.password(), password);
    }

    #[rstest]
    fn validation_errors_map_to_invalid_request() {
        let err = Error::from(AuthValidationError::MissingField { field: "campus" });
        assert_eq!(err.code(), crate::domain::ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "campus is required");
        assert_eq!(err.details(), Some(&serde_json::json!({ "field": "campus" })));
    }

    #[rstest]
    fn signup_accepts_complete_form() {
        let request = SignupRequest::try_from_form(form()).expect("valid form");
        assert_eq!(request.name().as_ref(), "Dup Student");
        assert_eq!(request.email().as_ref(), "dup@x.com");
        assert_eq!(request.campus(), "Kochi");
        assert_eq!(request.batch(), "MEARN-1");
    }

    #[rstest]
    #[case::name(SignupForm { name: " ", ..form() }, "name")]
    #[case::email(SignupForm { email: "", ..form() }, "email")]
    #[case::password(SignupForm { password: "", ..form() }, "password")]
    #[case::campus(SignupForm { campus: "", ..form() }, "campus")]
    #[case::batch(SignupForm { batch: "\t", ..form() }, "batch")]
    #[case::malformed_email(SignupForm { email: "not-an-email", ..form() }, "email")]
    fn signup_reports_the_offending_field(
        #[case] input: SignupForm<'static>,
        #[case] field: &str,
    ) {
        let err = SignupRequest::try_from_form(input).expect_err("invalid form");
        assert_eq!(err.field(), field);
    }
}
