use serde_derive::{Deserialize, Serialize};

use ibc_packet_relay_types::core::ics04_channel::packet::Sequence;
use ibc_packet_relay_types::core::ics24_host::identifier::{ChannelId, PortId};
use ibc_packet_relay_types::Height;

use crate::chain::path_end::PathEnd;

/// Query for the proof of a packet commitment, stored by the sending chain
/// when the packet was sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPacketCommitmentRequest {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub sequence: Sequence,
    pub height: Height,
}

/// Query for the proof of a packet receipt, stored by the receiving chain
/// when the packet was received. For a packet that timed out, the receipt
/// does not exist and the proof is one of absence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPacketReceiptRequest {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub sequence: Sequence,
    pub height: Height,
}

/// Query for the proof of a packet acknowledgement, written by the
/// receiving chain after processing the packet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPacketAcknowledgementRequest {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub sequence: Sequence,
    pub height: Height,
}

macro_rules! impl_packet_request {
    ($request:ident) => {
        impl $request {
            pub fn new(path_end: PathEnd, sequence: Sequence, height: Height) -> Self {
                Self {
                    port_id: path_end.port_id,
                    channel_id: path_end.channel_id,
                    sequence,
                    height,
                }
            }
        }
    };
}

impl_packet_request!(QueryPacketCommitmentRequest);
impl_packet_request!(QueryPacketReceiptRequest);
impl_packet_request!(QueryPacketAcknowledgementRequest);
