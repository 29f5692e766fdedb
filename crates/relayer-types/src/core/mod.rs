//! The subset of the IBC core protocol needed to relay packets.

pub mod ics02_client;
pub mod ics04_channel;
pub mod ics23_commitment;
pub mod ics24_host;
