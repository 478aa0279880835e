//! Domain ports and supporting types for the hexagonal boundary.

mod id_generator;

#[cfg(test)]
pub use id_generator::MockIdGenerator;
pub use id_generator::{IdGenerator, UuidIdGenerator};
