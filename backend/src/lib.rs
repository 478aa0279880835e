//! In-memory complaint desk for a training institute.
//!
//! Students sign up and lodge complaints; administrators triage them through
//! an auditable status timeline and read aggregate statistics. All state is
//! held in an explicit [`domain::DeskState`] value.

pub mod domain;
pub mod example_data;
pub mod inbound;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
