//! Message definitions for the packet relaying datagrams: receive,
//! acknowledgement and timeout.

pub mod acknowledgement;
pub mod recv_packet;
pub mod timeout;
