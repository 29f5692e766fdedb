use ibc_proto::ibc::core::channel::v1::MsgAcknowledgement as RawMsgAcknowledgement;
use serde_derive::{Deserialize, Serialize};

use crate::core::ics04_channel::error::Error;
use crate::core::ics04_channel::packet::Packet;
use crate::proofs::Proofs;
use crate::signer::Signer;
use crate::tx_msg::Msg;

pub const TYPE_URL: &str = "/ibc.core.channel.v1.MsgAcknowledgement";

/// The acknowledgement bytes written by the receiving chain after it
/// processed a packet. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Acknowledgement(Vec<u8>);

impl Acknowledgement {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<Vec<u8>> for Acknowledgement {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        if bytes.is_empty() {
            Err(Error::invalid_acknowledgement())
        } else {
            Ok(Self(bytes))
        }
    }
}

impl From<Acknowledgement> for Vec<u8> {
    fn from(ack: Acknowledgement) -> Self {
        ack.0
    }
}

///
/// Message definition for packet acknowledgements.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgAcknowledgement {
    pub packet: Packet,
    pub acknowledgement: Acknowledgement,
    pub proofs: Proofs,
    pub signer: Signer,
}

impl MsgAcknowledgement {
    pub fn new(
        packet: Packet,
        acknowledgement: Acknowledgement,
        proofs: Proofs,
        signer: Signer,
    ) -> MsgAcknowledgement {
        Self {
            packet,
            acknowledgement,
            proofs,
            signer,
        }
    }
}

impl Msg for MsgAcknowledgement {
    type Raw = RawMsgAcknowledgement;

    fn type_url(&self) -> String {
        TYPE_URL.to_string()
    }
}

impl From<MsgAcknowledgement> for RawMsgAcknowledgement {
    fn from(domain_msg: MsgAcknowledgement) -> Self {
        RawMsgAcknowledgement {
            packet: Some(domain_msg.packet.into()),
            acknowledgement: domain_msg.acknowledgement.into(),
            proof_acked: domain_msg.proofs.object_proof().clone().into(),
            proof_height: Some(domain_msg.proofs.height().into()),
            signer: domain_msg.signer.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use ibc_proto::ibc::core::channel::v1::MsgAcknowledgement as RawMsgAcknowledgement;
    use prost::Message;

    use super::{Acknowledgement, MsgAcknowledgement, TYPE_URL};
    use crate::core::ics04_channel::packet::test_utils::raw_packet;
    use crate::core::ics04_channel::packet::Packet;
    use crate::core::ics23_commitment::commitment::CommitmentProofBytes;
    use crate::proofs::Proofs;
    use crate::tx_msg::Msg;
    use crate::Height;

    #[test]
    fn empty_acknowledgement_is_rejected() {
        assert!(Acknowledgement::try_from(Vec::new()).is_err());
        assert!(Acknowledgement::try_from(vec![0x01]).is_ok());
    }

    #[test]
    fn encodes_into_any_with_channel_type_url() {
        let packet = Packet::try_from(raw_packet(20, 0)).unwrap();
        let proofs = Proofs::new(
            CommitmentProofBytes::try_from(vec![0xCC]).unwrap(),
            Height::new(1, 99).unwrap(),
        );
        let msg = MsgAcknowledgement::new(
            packet.clone(),
            Acknowledgement::try_from(b"{\"result\":\"AQ==\"}".to_vec()).unwrap(),
            proofs,
            "cosmos1signer".parse().unwrap(),
        );

        let any = msg.to_any();
        assert_eq!(any.type_url, TYPE_URL);

        let raw = RawMsgAcknowledgement::decode(any.value.as_slice()).unwrap();
        assert_eq!(raw.packet, Some(packet.into()));
        assert_eq!(raw.acknowledgement, b"{\"result\":\"AQ==\"}".to_vec());
        assert_eq!(raw.proof_acked, vec![0xCC]);
        assert_eq!(raw.proof_height.map(|h| h.revision_height), Some(99));
        assert_eq!(raw.signer, "cosmos1signer");
    }
}
