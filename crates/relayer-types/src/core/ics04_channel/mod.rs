//! ICS 04: Channel packets and the messages which relay them.

pub mod error;
pub mod msgs;
pub mod packet;
pub mod timeout;
