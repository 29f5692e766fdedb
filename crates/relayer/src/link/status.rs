//! Per-packet relay status, owned by whoever collects the packets to relay.
//!
//! A relay packet does not know whether relaying it still makes sense. The
//! caller records the outcome of each attempt here instead, and picks the
//! next batch of work from [`PacketStatusMap::pending`].

use std::collections::BTreeMap;

use tracing::debug;

use ibc_packet_relay_types::core::ics04_channel::packet::Sequence;

use crate::link::error::LinkError;
use crate::link::packet_msg::PacketMsg;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PacketStatus {
    /// Relaying the packet should be (re)attempted.
    #[default]
    Pending,
    /// There is nothing left to relay for this packet.
    Skipped,
    /// A message was built for the packet.
    Completed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PacketStatusMap {
    statuses: BTreeMap<Sequence, PacketStatus>,
}

impl PacketStatusMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `sequence` as pending. Already tracked packets keep
    /// their status.
    pub fn track(&mut self, sequence: Sequence) {
        self.statuses.entry(sequence).or_default();
    }

    pub fn status(&self, sequence: Sequence) -> Option<PacketStatus> {
        self.statuses.get(&sequence).copied()
    }

    pub fn mark_skipped(&mut self, sequence: Sequence) {
        self.statuses.insert(sequence, PacketStatus::Skipped);
    }

    pub fn mark_completed(&mut self, sequence: Sequence) {
        self.statuses.insert(sequence, PacketStatus::Completed);
    }

    /// Updates the status of `sequence` from the outcome of a relay attempt.
    pub fn record(&mut self, sequence: Sequence, outcome: &Result<PacketMsg, LinkError>) {
        match outcome {
            Ok(_) => self.mark_completed(sequence),
            Err(e) if e.is_resolved_packet() => {
                debug!(%sequence, "packet already resolved on the proof chain, skipping it");
                self.mark_skipped(sequence)
            }
            Err(e) => {
                debug!(%sequence, "relay attempt failed, packet stays pending: {e}");
                self.track(sequence)
            }
        }
    }

    /// Tracked packets still to be relayed, in sequence order.
    pub fn pending(&self) -> impl Iterator<Item = Sequence> + '_ {
        self.statuses
            .iter()
            .filter(|(_, status)| **status == PacketStatus::Pending)
            .map(|(sequence, _)| *sequence)
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}
