//! ICS 02: Client heights.

pub mod error;
pub mod height;
