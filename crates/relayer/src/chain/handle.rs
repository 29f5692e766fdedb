use core::fmt::Debug;

use ibc_packet_relay_types::core::ics24_host::identifier::ChainId;
use ibc_packet_relay_types::signer::Signer;

use crate::chain::path_end::PathEnd;
use crate::chain::requests::{
    QueryPacketAcknowledgementRequest, QueryPacketCommitmentRequest, QueryPacketReceiptRequest,
};
use crate::chain::responses::{
    QueryPacketAcknowledgementResponse, QueryPacketCommitmentResponse,
    QueryPacketReceiptResponse,
};
use crate::error::Error;

/// The view of a chain needed to relay packets through one of its channel
/// ends: its identity, the account which signs messages submitted to it,
/// and proof queries for the packet state it stores.
///
/// Handles are shared by every packet relayed over a path, possibly from
/// several threads at once, hence the `Send + Sync` bound. Queries block
/// until the chain answers and carry no timeout or retry of their own.
pub trait ChainHandle: Clone + Debug + Send + Sync + 'static {
    /// Get the [`ChainId`] of this chain.
    fn id(&self) -> ChainId;

    /// Get the address which signs messages submitted to this chain.
    /// Fails if no signing key is configured.
    fn get_signer(&self) -> Result<Signer, Error>;

    /// The channel end on this chain which packets are relayed through.
    fn path_end(&self) -> PathEnd;

    fn query_packet_commitment(
        &self,
        request: QueryPacketCommitmentRequest,
    ) -> Result<QueryPacketCommitmentResponse, Error>;

    fn query_packet_receipt(
        &self,
        request: QueryPacketReceiptRequest,
    ) -> Result<QueryPacketReceiptResponse, Error>;

    fn query_packet_acknowledgement(
        &self,
        request: QueryPacketAcknowledgementRequest,
    ) -> Result<QueryPacketAcknowledgementResponse, Error>;
}
