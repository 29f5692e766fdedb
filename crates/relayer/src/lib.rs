#![forbid(unsafe_code)]
#![deny(trivial_numeric_casts, unused_import_braces)]
#![allow(clippy::result_large_err)]

//! Packet relay core of an IBC relayer.
//!
//! Given a packet observed on one chain, this crate fetches the proof of the
//! relevant channel state from the counterparty chain and builds the exact
//! message that submits that proof: a `MsgRecvPacket`, a `MsgAcknowledgement`
//! or a `MsgTimeout`. Chains are consumed through the [`ChainHandle`] trait;
//! signing and broadcasting the resulting messages is left to the caller.
//!
//! The three relay actions are modelled as the variants of
//! [`AnyRelayPacket`](link::relay_packet::AnyRelayPacket):
//!
//! | variant        | submission chain | proof chain | proof of            |
//! |----------------|------------------|-------------|---------------------|
//! | `RecvPacket`   | receiver         | sender      | packet commitment   |
//! | `AckPacket`    | sender           | receiver    | acknowledgement     |
//! | `TimeoutPacket`| sender           | receiver    | absence of receipt  |
//!
//! [`ChainHandle`]: chain::handle::ChainHandle

pub mod chain;
pub mod config;
pub mod error;
pub mod link;
