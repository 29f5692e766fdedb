#![forbid(unsafe_code)]
#![deny(trivial_numeric_casts, unused_import_braces)]

//! Domain types for relaying IBC packets.
//!
//! This crate holds the data model shared by the packet relay core: chain
//! heights, ICS-24 identifiers, the ICS-04 packet record and the three
//! proof-carrying channel messages (`MsgRecvPacket`, `MsgAcknowledgement`
//! and `MsgTimeout`) that a relayer submits on behalf of a packet.
//!
//! Every message implements [`tx_msg::Msg`] and can therefore be encoded
//! into a `google.protobuf.Any` ready to be signed and broadcast.

pub mod core;
pub mod proofs;
pub mod serializers;
pub mod signer;
pub mod timestamp;
pub mod tx_msg;

/// Re-export of ICS 002 Height domain type
pub type Height = crate::core::ics02_client::height::Height;
