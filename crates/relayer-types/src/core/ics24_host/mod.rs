//! ICS 24: Host identifiers.

pub mod error;
pub mod identifier;
pub(crate) mod validate;
