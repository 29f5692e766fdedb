//! The three ways of relaying a packet, each pairing a proof query on one
//! chain with the message that submits the proof to the other chain.
//!
//! Two chains take part in every relay action, under fixed roles:
//!
//! - the *submission chain* signs and executes the built message,
//! - the *proof chain* stores the state the message proves.
//!
//! For [`RecvPacket`] the submission chain is the packet's receiver and the
//! proof chain its sender. For [`AckPacket`] and [`TimeoutPacket`] the roles
//! are reversed: the message goes back to the sender, with a proof taken on
//! the receiver.
//!
//! A relay packet is single use. Its proofs are fetched once, at the height
//! given by the caller, and are never refreshed; fresher proofs require a
//! new relay packet.

use tracing::{debug, trace};

use ibc_packet_relay_types::core::ics04_channel::error::Error as ChannelError;
use ibc_packet_relay_types::core::ics04_channel::msgs::acknowledgement::{
    Acknowledgement, MsgAcknowledgement,
};
use ibc_packet_relay_types::core::ics04_channel::msgs::recv_packet::MsgRecvPacket;
use ibc_packet_relay_types::core::ics04_channel::msgs::timeout::MsgTimeout;
use ibc_packet_relay_types::core::ics04_channel::packet::{
    timed_out, Packet, PacketMsgType, Sequence,
};
use ibc_packet_relay_types::core::ics04_channel::timeout::TimeoutHeight;
use ibc_packet_relay_types::core::ics23_commitment::commitment::CommitmentProofBytes;
use ibc_packet_relay_types::proofs::Proofs;
use ibc_packet_relay_types::signer::Signer;
use ibc_packet_relay_types::timestamp::Timestamp;
use ibc_packet_relay_types::Height;

use crate::chain::handle::ChainHandle;
use crate::chain::path_end::PathEnd;
use crate::chain::requests::{
    QueryPacketAcknowledgementRequest, QueryPacketCommitmentRequest, QueryPacketReceiptRequest,
};
use crate::link::error::LinkError;
use crate::link::packet_msg::PacketMsg;

/// A packet as observed in the events of the chain which committed it.
///
/// Port and channel identifiers are not part of it: they are taken from the
/// chain handles when the packet record is rebuilt for a message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObservedPacket {
    pub data: Vec<u8>,
    pub sequence: Sequence,
    pub timeout_height: TimeoutHeight,
    pub timeout_timestamp: Timestamp,
}

impl ObservedPacket {
    pub fn new(
        data: Vec<u8>,
        sequence: Sequence,
        timeout_height: TimeoutHeight,
        timeout_timestamp: Timestamp,
    ) -> Self {
        Self {
            data,
            sequence,
            timeout_height,
            timeout_timestamp,
        }
    }

    /// Whether the packet can no longer be received by a destination chain
    /// at the given time and height, and must be timed out instead.
    pub fn timed_out(&self, dst_chain_ts: &Timestamp, dst_chain_height: Height) -> bool {
        timed_out(
            &self.timeout_height,
            &self.timeout_timestamp,
            dst_chain_ts,
            dst_chain_height,
        )
    }

    fn to_packet(&self, source: PathEnd, destination: PathEnd) -> Packet {
        Packet {
            sequence: self.sequence,
            source_port: source.port_id,
            source_channel: source.channel_id,
            destination_port: destination.port_id,
            destination_channel: destination.channel_id,
            data: self.data.clone(),
            timeout_height: self.timeout_height,
            timeout_timestamp: self.timeout_timestamp,
        }
    }
}

impl From<Packet> for ObservedPacket {
    fn from(packet: Packet) -> Self {
        Self {
            data: packet.data,
            sequence: packet.sequence,
            timeout_height: packet.timeout_height,
            timeout_timestamp: packet.timeout_timestamp,
        }
    }
}

/// The outcome of a successful proof query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PacketProofs {
    proofs: Proofs,
    value: Option<Vec<u8>>,
}

impl PacketProofs {
    pub fn proofs(&self) -> &Proofs {
        &self.proofs
    }

    pub fn height(&self) -> Height {
        self.proofs.height()
    }

    /// The proven commitment or acknowledgement. `None` for timeouts, whose
    /// proof is one of absence.
    pub fn value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }
}

/// Capabilities shared by the relay packet variants.
pub trait RelayPacket {
    fn data(&self) -> &[u8];

    fn sequence(&self) -> Sequence;

    fn timeout_height(&self) -> TimeoutHeight;

    fn msg_type(&self) -> PacketMsgType;

    /// The proofs fetched so far, if any.
    fn proofs(&self) -> Option<&PacketProofs>;

    /// Queries `proof_chain` for the proof this packet's message needs.
    ///
    /// `query_height` is the latest height observed on the proof chain. The
    /// query is made one block below it, so that the proof is generated
    /// against state already committed in the header at `query_height`.
    fn fetch_proofs<SubmissionChain: ChainHandle, ProofChain: ChainHandle>(
        &mut self,
        submission_chain: &SubmissionChain,
        proof_chain: &ProofChain,
        query_height: Height,
    ) -> Result<(), LinkError>;

    /// Builds the message to submit to `submission_chain`. Fails unless
    /// [`RelayPacket::fetch_proofs`] succeeded beforehand.
    fn build_msg<SubmissionChain: ChainHandle, ProofChain: ChainHandle>(
        &self,
        submission_chain: &SubmissionChain,
        proof_chain: &ProofChain,
    ) -> Result<PacketMsg, LinkError>;
}

fn proof_query_height(query_height: Height) -> Result<Height, LinkError> {
    query_height
        .decrement()
        .map_err(|e| LinkError::decrement_height(query_height, e))
}

fn proof_bytes<Chain: ChainHandle>(
    proof_chain: &Chain,
    msg_type: PacketMsgType,
    sequence: Sequence,
    proof: Vec<u8>,
) -> Result<CommitmentProofBytes, LinkError> {
    CommitmentProofBytes::try_from(proof)
        .map_err(|_| LinkError::missing_proof(proof_chain.id(), msg_type, sequence))
}

fn fetched_proofs<'a, Chain: ChainHandle>(
    proofs: &'a Option<PacketProofs>,
    submission_chain: &Chain,
    msg_type: PacketMsgType,
    sequence: Sequence,
) -> Result<&'a PacketProofs, LinkError> {
    proofs
        .as_ref()
        .ok_or_else(|| LinkError::missing_evidence(submission_chain.id(), msg_type, sequence))
}

fn signer<Chain: ChainHandle>(submission_chain: &Chain) -> Result<Signer, LinkError> {
    submission_chain
        .get_signer()
        .map_err(|e| LinkError::signer(submission_chain.id(), e))
}

/// Times out a packet that the receiving chain never received.
///
/// The proof is one of absence of the packet receipt on the receiver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeoutPacket {
    packet: ObservedPacket,
    proofs: Option<PacketProofs>,
}

impl TimeoutPacket {
    pub fn new(packet: ObservedPacket) -> Self {
        Self {
            packet,
            proofs: None,
        }
    }

    pub fn packet(&self) -> &ObservedPacket {
        &self.packet
    }
}

impl RelayPacket for TimeoutPacket {
    fn data(&self) -> &[u8] {
        &self.packet.data
    }

    fn sequence(&self) -> Sequence {
        self.packet.sequence
    }

    fn timeout_height(&self) -> TimeoutHeight {
        self.packet.timeout_height
    }

    fn msg_type(&self) -> PacketMsgType {
        PacketMsgType::Timeout
    }

    fn proofs(&self) -> Option<&PacketProofs> {
        self.proofs.as_ref()
    }

    fn fetch_proofs<SubmissionChain: ChainHandle, ProofChain: ChainHandle>(
        &mut self,
        submission_chain: &SubmissionChain,
        proof_chain: &ProofChain,
        query_height: Height,
    ) -> Result<(), LinkError> {
        if self.proofs.is_some() {
            debug!(sequence = %self.sequence(), "timeout proofs already fetched, skipping query");
            return Ok(());
        }

        let height = proof_query_height(query_height)?;

        let response = proof_chain
            .query_packet_receipt(QueryPacketReceiptRequest::new(
                proof_chain.path_end(),
                self.sequence(),
                height,
            ))
            .map_err(|e| LinkError::query(proof_chain.id(), e))?;

        // The receipt itself is expected to be absent, only the proof matters.
        let proof = proof_bytes(proof_chain, self.msg_type(), self.sequence(), response.proof)?;

        trace!(
            src_chain = %submission_chain.id(),
            dst_chain = %proof_chain.id(),
            sequence = %self.sequence(),
            proof_height = %response.proof_height,
            "fetched packet receipt absence proof"
        );

        self.proofs = Some(PacketProofs {
            proofs: Proofs::new(proof, response.proof_height),
            value: None,
        });

        Ok(())
    }

    fn build_msg<SubmissionChain: ChainHandle, ProofChain: ChainHandle>(
        &self,
        submission_chain: &SubmissionChain,
        proof_chain: &ProofChain,
    ) -> Result<PacketMsg, LinkError> {
        let proofs = fetched_proofs(
            &self.proofs,
            submission_chain,
            self.msg_type(),
            self.sequence(),
        )?;
        let signer = signer(submission_chain)?;

        let packet = self
            .packet
            .to_packet(submission_chain.path_end(), proof_chain.path_end());

        let msg = MsgTimeout::new(packet, self.sequence(), proofs.proofs.clone(), signer);

        trace!(
            chain = %submission_chain.id(),
            "built timeout msg {}, proofs at height {}",
            msg.packet,
            msg.proofs.height()
        );

        Ok(msg.into())
    }
}

/// Delivers a packet committed on the sending chain to the receiving chain.
///
/// The proof is one of the packet commitment on the sender.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecvPacket {
    packet: ObservedPacket,
    proofs: Option<PacketProofs>,
}

impl RecvPacket {
    pub fn new(packet: ObservedPacket) -> Self {
        Self {
            packet,
            proofs: None,
        }
    }

    pub fn packet(&self) -> &ObservedPacket {
        &self.packet
    }

    /// Gives up on delivering the packet and times it out instead.
    ///
    /// The commitment proofs fetched for the receive, if any, are dropped:
    /// a timeout proves something else and must fetch its own.
    pub fn into_timeout(self) -> TimeoutPacket {
        TimeoutPacket::new(self.packet)
    }
}

impl RelayPacket for RecvPacket {
    fn data(&self) -> &[u8] {
        &self.packet.data
    }

    fn sequence(&self) -> Sequence {
        self.packet.sequence
    }

    fn timeout_height(&self) -> TimeoutHeight {
        self.packet.timeout_height
    }

    fn msg_type(&self) -> PacketMsgType {
        PacketMsgType::Recv
    }

    fn proofs(&self) -> Option<&PacketProofs> {
        self.proofs.as_ref()
    }

    fn fetch_proofs<SubmissionChain: ChainHandle, ProofChain: ChainHandle>(
        &mut self,
        submission_chain: &SubmissionChain,
        proof_chain: &ProofChain,
        query_height: Height,
    ) -> Result<(), LinkError> {
        if self.proofs.is_some() {
            debug!(sequence = %self.sequence(), "recv proofs already fetched, skipping query");
            return Ok(());
        }

        let height = proof_query_height(query_height)?;

        let response = proof_chain
            .query_packet_commitment(QueryPacketCommitmentRequest::new(
                proof_chain.path_end(),
                self.sequence(),
                height,
            ))
            .map_err(|e| LinkError::query(proof_chain.id(), e))?;

        let proof = proof_bytes(proof_chain, self.msg_type(), self.sequence(), response.proof)?;

        if response.commitment.is_empty() {
            debug!(
                chain = %proof_chain.id(),
                sequence = %self.sequence(),
                "packet commitment is gone, packet was already relayed"
            );

            return Err(LinkError::missing_value(
                proof_chain.id(),
                self.msg_type(),
                self.sequence(),
            ));
        }

        trace!(
            src_chain = %proof_chain.id(),
            dst_chain = %submission_chain.id(),
            sequence = %self.sequence(),
            proof_height = %response.proof_height,
            "fetched packet commitment proof"
        );

        self.proofs = Some(PacketProofs {
            proofs: Proofs::new(proof, response.proof_height),
            value: Some(response.commitment),
        });

        Ok(())
    }

    fn build_msg<SubmissionChain: ChainHandle, ProofChain: ChainHandle>(
        &self,
        submission_chain: &SubmissionChain,
        proof_chain: &ProofChain,
    ) -> Result<PacketMsg, LinkError> {
        let proofs = fetched_proofs(
            &self.proofs,
            submission_chain,
            self.msg_type(),
            self.sequence(),
        )?;
        let signer = signer(submission_chain)?;

        let packet = self
            .packet
            .to_packet(proof_chain.path_end(), submission_chain.path_end());

        let msg = MsgRecvPacket::new(packet, proofs.proofs.clone(), signer);

        trace!(
            chain = %submission_chain.id(),
            "built recv_packet msg {}, proofs at height {}",
            msg.packet,
            msg.proofs.height()
        );

        Ok(msg.into())
    }
}

/// Relays the acknowledgement written by the receiving chain back to the
/// sending chain.
///
/// The proof is one of the acknowledgement on the receiver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AckPacket {
    packet: ObservedPacket,
    acknowledgement: Acknowledgement,
    proofs: Option<PacketProofs>,
}

impl AckPacket {
    pub fn new(packet: ObservedPacket, acknowledgement: Acknowledgement) -> Self {
        Self {
            packet,
            acknowledgement,
            proofs: None,
        }
    }

    /// From the packet and acknowledgement bytes of a `write_acknowledgement`
    /// event.
    pub fn from_write_ack(packet: Packet, ack: Vec<u8>) -> Result<Self, ChannelError> {
        let acknowledgement = Acknowledgement::try_from(ack)?;
        Ok(Self::new(packet.into(), acknowledgement))
    }

    pub fn packet(&self) -> &ObservedPacket {
        &self.packet
    }

    pub fn acknowledgement(&self) -> &Acknowledgement {
        &self.acknowledgement
    }
}

impl RelayPacket for AckPacket {
    fn data(&self) -> &[u8] {
        &self.packet.data
    }

    fn sequence(&self) -> Sequence {
        self.packet.sequence
    }

    fn timeout_height(&self) -> TimeoutHeight {
        self.packet.timeout_height
    }

    fn msg_type(&self) -> PacketMsgType {
        PacketMsgType::Ack
    }

    fn proofs(&self) -> Option<&PacketProofs> {
        self.proofs.as_ref()
    }

    fn fetch_proofs<SubmissionChain: ChainHandle, ProofChain: ChainHandle>(
        &mut self,
        submission_chain: &SubmissionChain,
        proof_chain: &ProofChain,
        query_height: Height,
    ) -> Result<(), LinkError> {
        if self.proofs.is_some() {
            debug!(sequence = %self.sequence(), "ack proofs already fetched, skipping query");
            return Ok(());
        }

        let height = proof_query_height(query_height)?;

        let response = proof_chain
            .query_packet_acknowledgement(QueryPacketAcknowledgementRequest::new(
                proof_chain.path_end(),
                self.sequence(),
                height,
            ))
            .map_err(|e| LinkError::query(proof_chain.id(), e))?;

        let proof = proof_bytes(proof_chain, self.msg_type(), self.sequence(), response.proof)?;

        if response.acknowledgement.is_empty() {
            debug!(
                chain = %proof_chain.id(),
                sequence = %self.sequence(),
                "packet acknowledgement is gone, acknowledgement was already relayed"
            );

            return Err(LinkError::missing_value(
                proof_chain.id(),
                self.msg_type(),
                self.sequence(),
            ));
        }

        trace!(
            src_chain = %submission_chain.id(),
            dst_chain = %proof_chain.id(),
            sequence = %self.sequence(),
            proof_height = %response.proof_height,
            "fetched packet acknowledgement proof"
        );

        self.proofs = Some(PacketProofs {
            proofs: Proofs::new(proof, response.proof_height),
            value: Some(response.acknowledgement),
        });

        Ok(())
    }

    fn build_msg<SubmissionChain: ChainHandle, ProofChain: ChainHandle>(
        &self,
        submission_chain: &SubmissionChain,
        proof_chain: &ProofChain,
    ) -> Result<PacketMsg, LinkError> {
        let proofs = fetched_proofs(
            &self.proofs,
            submission_chain,
            self.msg_type(),
            self.sequence(),
        )?;
        let signer = signer(submission_chain)?;

        let packet = self
            .packet
            .to_packet(submission_chain.path_end(), proof_chain.path_end());

        let msg = MsgAcknowledgement::new(
            packet,
            self.acknowledgement.clone(),
            proofs.proofs.clone(),
            signer,
        );

        trace!(
            chain = %submission_chain.id(),
            "built acknowledgment msg {}, proofs at height {}",
            msg.packet,
            msg.proofs.height()
        );

        Ok(msg.into())
    }
}

/// A relay packet of any kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyRelayPacket {
    Recv(RecvPacket),
    Ack(AckPacket),
    Timeout(TimeoutPacket),
}

impl RelayPacket for AnyRelayPacket {
    fn data(&self) -> &[u8] {
        match self {
            Self::Recv(p) => p.data(),
            Self::Ack(p) => p.data(),
            Self::Timeout(p) => p.data(),
        }
    }

    fn sequence(&self) -> Sequence {
        match self {
            Self::Recv(p) => p.sequence(),
            Self::Ack(p) => p.sequence(),
            Self::Timeout(p) => p.sequence(),
        }
    }

    fn timeout_height(&self) -> TimeoutHeight {
        match self {
            Self::Recv(p) => p.timeout_height(),
            Self::Ack(p) => p.timeout_height(),
            Self::Timeout(p) => p.timeout_height(),
        }
    }

    fn msg_type(&self) -> PacketMsgType {
        match self {
            Self::Recv(p) => p.msg_type(),
            Self::Ack(p) => p.msg_type(),
            Self::Timeout(p) => p.msg_type(),
        }
    }

    fn proofs(&self) -> Option<&PacketProofs> {
        match self {
            Self::Recv(p) => p.proofs(),
            Self::Ack(p) => p.proofs(),
            Self::Timeout(p) => p.proofs(),
        }
    }

    fn fetch_proofs<SubmissionChain: ChainHandle, ProofChain: ChainHandle>(
        &mut self,
        submission_chain: &SubmissionChain,
        proof_chain: &ProofChain,
        query_height: Height,
    ) -> Result<(), LinkError> {
        match self {
            Self::Recv(p) => p.fetch_proofs(submission_chain, proof_chain, query_height),
            Self::Ack(p) => p.fetch_proofs(submission_chain, proof_chain, query_height),
            Self::Timeout(p) => p.fetch_proofs(submission_chain, proof_chain, query_height),
        }
    }

    fn build_msg<SubmissionChain: ChainHandle, ProofChain: ChainHandle>(
        &self,
        submission_chain: &SubmissionChain,
        proof_chain: &ProofChain,
    ) -> Result<PacketMsg, LinkError> {
        match self {
            Self::Recv(p) => p.build_msg(submission_chain, proof_chain),
            Self::Ack(p) => p.build_msg(submission_chain, proof_chain),
            Self::Timeout(p) => p.build_msg(submission_chain, proof_chain),
        }
    }
}

impl From<RecvPacket> for AnyRelayPacket {
    fn from(packet: RecvPacket) -> Self {
        Self::Recv(packet)
    }
}

impl From<AckPacket> for AnyRelayPacket {
    fn from(packet: AckPacket) -> Self {
        Self::Ack(packet)
    }
}

impl From<TimeoutPacket> for AnyRelayPacket {
    fn from(packet: TimeoutPacket) -> Self {
        Self::Timeout(packet)
    }
}
