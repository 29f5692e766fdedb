//! ICS 23: Commitment proofs.

pub mod commitment;
