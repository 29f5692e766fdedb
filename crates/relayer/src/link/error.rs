use flex_error::define_error;

use ibc_packet_relay_types::core::ics02_client::error::Error as Ics02Error;
use ibc_packet_relay_types::core::ics04_channel::packet::{PacketMsgType, Sequence};
use ibc_packet_relay_types::core::ics24_host::identifier::ChainId;
use ibc_packet_relay_types::Height;

use crate::error::Error;

define_error! {
    LinkError {
        Query
            { chain_id: ChainId }
            [ Error ]
            |e| {
                format!("failed during query to chain id {0}", e.chain_id)
            },

        MissingProof
            {
                chain_id: ChainId,
                msg_type: PacketMsgType,
                sequence: Sequence,
            }
            |e| {
                format!("{} proof for packet sequence {} is missing on chain {}",
                    e.msg_type, e.sequence, e.chain_id)
            },

        MissingValue
            {
                chain_id: ChainId,
                msg_type: PacketMsgType,
                sequence: Sequence,
            }
            |e| {
                format!("{} query for packet sequence {} on chain {} returned a proof but no value",
                    e.msg_type, e.sequence, e.chain_id)
            },

        MissingEvidence
            {
                chain_id: ChainId,
                msg_type: PacketMsgType,
                sequence: Sequence,
            }
            |e| {
                format!("{} packet sequence {} for chain {} has no associated proofs",
                    e.msg_type, e.sequence, e.chain_id)
            },

        Signer
            { chain_id: ChainId }
            [ Error ]
            |e| {
                format!("could not retrieve signer for chain {}", e.chain_id)
            },

        DecrementHeight
            { height: Height }
            [ Ics02Error ]
            |e| {
                format!("cannot query proofs below height {}, because this height cannot be decremented", e.height)
            },
    }
}

impl LinkError {
    /// The query never reached a result, eg. because the chain's RPC
    /// endpoint is unreachable.
    pub fn is_transport_error(&self) -> bool {
        matches!(self.detail(), LinkErrorDetail::Query(_))
    }

    /// The packet was already relayed or pruned on the proof chain, so
    /// there is nothing left to relay.
    pub fn is_resolved_packet(&self) -> bool {
        matches!(self.detail(), LinkErrorDetail::MissingValue(_))
    }

    /// Trying again later, at a greater height, may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.detail(),
            LinkErrorDetail::Query(_) | LinkErrorDetail::MissingProof(_)
        )
    }
}
