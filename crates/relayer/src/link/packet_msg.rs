use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_proto::google::protobuf::Any;

use ibc_packet_relay_types::core::ics04_channel::msgs::acknowledgement::MsgAcknowledgement;
use ibc_packet_relay_types::core::ics04_channel::msgs::recv_packet::MsgRecvPacket;
use ibc_packet_relay_types::core::ics04_channel::msgs::timeout::MsgTimeout;
use ibc_packet_relay_types::core::ics04_channel::packet::{Packet, PacketMsgType};
use ibc_packet_relay_types::proofs::Proofs;
use ibc_packet_relay_types::signer::Signer;
use ibc_packet_relay_types::tx_msg::Msg;

/// A message built by a relay packet, ready to be signed and submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PacketMsg {
    Recv(MsgRecvPacket),
    Ack(MsgAcknowledgement),
    Timeout(MsgTimeout),
}

impl PacketMsg {
    pub fn msg_type(&self) -> PacketMsgType {
        match self {
            Self::Recv(_) => PacketMsgType::Recv,
            Self::Ack(_) => PacketMsgType::Ack,
            Self::Timeout(_) => PacketMsgType::Timeout,
        }
    }

    pub fn packet(&self) -> &Packet {
        match self {
            Self::Recv(msg) => &msg.packet,
            Self::Ack(msg) => &msg.packet,
            Self::Timeout(msg) => &msg.packet,
        }
    }

    pub fn proofs(&self) -> &Proofs {
        match self {
            Self::Recv(msg) => &msg.proofs,
            Self::Ack(msg) => &msg.proofs,
            Self::Timeout(msg) => &msg.proofs,
        }
    }

    pub fn signer(&self) -> &Signer {
        match self {
            Self::Recv(msg) => &msg.signer,
            Self::Ack(msg) => &msg.signer,
            Self::Timeout(msg) => &msg.signer,
        }
    }

    /// Encodes the message for the transaction builder of the submission chain.
    #[allow(clippy::wrong_self_convention)]
    pub fn to_any(self) -> Any {
        match self {
            Self::Recv(msg) => msg.to_any(),
            Self::Ack(msg) => msg.to_any(),
            Self::Timeout(msg) => msg.to_any(),
        }
    }
}

impl Display for PacketMsg {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(
            f,
            "{} {}, proofs at height {}",
            self.msg_type(),
            self.packet(),
            self.proofs().height()
        )
    }
}

impl From<MsgRecvPacket> for PacketMsg {
    fn from(msg: MsgRecvPacket) -> Self {
        Self::Recv(msg)
    }
}

impl From<MsgAcknowledgement> for PacketMsg {
    fn from(msg: MsgAcknowledgement) -> Self {
        Self::Ack(msg)
    }
}

impl From<MsgTimeout> for PacketMsg {
    fn from(msg: MsgTimeout) -> Self {
        Self::Timeout(msg)
    }
}
