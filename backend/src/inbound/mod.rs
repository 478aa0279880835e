//! Inbound adapters that translate external input into desk calls while
//! keeping transport details at the edge.
//!
//! The JSON-lines [`shell`] is the only transport today.

pub mod shell;
