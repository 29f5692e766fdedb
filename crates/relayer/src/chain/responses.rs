//! Results of the packet proof queries.
//!
//! Chains signal that a record or a proof is absent with empty bytes.

use serde_derive::{Deserialize, Serialize};

use ibc_packet_relay_types::Height;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPacketCommitmentResponse {
    pub commitment: Vec<u8>,
    pub proof: Vec<u8>,
    pub proof_height: Height,
}

/// There is no receipt value: relaying only ever needs the proof that a
/// receipt is absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPacketReceiptResponse {
    pub proof: Vec<u8>,
    pub proof_height: Height,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPacketAcknowledgementResponse {
    pub acknowledgement: Vec<u8>,
    pub proof: Vec<u8>,
    pub proof_height: Height,
}
