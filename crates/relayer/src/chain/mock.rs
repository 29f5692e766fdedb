//! An in-memory chain, for testing the packet relay core without a
//! running node.
//!
//! A `MockChain` answers proof queries from responses programmed by the
//! test, keyed by packet sequence, and records every query it serves.
//! Clones share the same state, like handles to the same chain would.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::trace;

use ibc_packet_relay_types::core::ics04_channel::packet::{PacketMsgType, Sequence};
use ibc_packet_relay_types::core::ics24_host::identifier::{ChainId, ChannelId, PortId};
use ibc_packet_relay_types::signer::Signer;
use ibc_packet_relay_types::Height;

use crate::chain::handle::ChainHandle;
use crate::chain::path_end::PathEnd;
use crate::chain::requests::{
    QueryPacketAcknowledgementRequest, QueryPacketCommitmentRequest, QueryPacketReceiptRequest,
};
use crate::chain::responses::{
    QueryPacketAcknowledgementResponse, QueryPacketCommitmentResponse,
    QueryPacketReceiptResponse,
};
use crate::config::ChainConfig;
use crate::error::Error;

/// A proof query served by a [`MockChain`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedQuery {
    pub msg_type: PacketMsgType,
    pub sequence: Sequence,
    pub height: Height,
}

#[derive(Debug, Default)]
struct MockChainState {
    signer: Option<Signer>,
    rpc_failure: Option<String>,
    commitments: HashMap<Sequence, QueryPacketCommitmentResponse>,
    receipts: HashMap<Sequence, QueryPacketReceiptResponse>,
    acknowledgements: HashMap<Sequence, QueryPacketAcknowledgementResponse>,
    queries: Vec<RecordedQuery>,
}

#[derive(Clone, Debug)]
pub struct MockChain {
    config: ChainConfig,
    state: Arc<Mutex<MockChainState>>,
}

impl MockChain {
    /// A chain without a signing key. See [`MockChain::with_signer`].
    pub fn from_config(config: ChainConfig) -> Self {
        Self {
            config,
            state: Arc::new(Mutex::new(MockChainState::default())),
        }
    }

    pub fn with_signer(self, signer: Signer) -> Self {
        self.state().signer = Some(signer);
        self
    }

    pub fn set_commitment_response(
        &self,
        sequence: Sequence,
        response: QueryPacketCommitmentResponse,
    ) {
        self.state().commitments.insert(sequence, response);
    }

    pub fn set_receipt_response(&self, sequence: Sequence, response: QueryPacketReceiptResponse) {
        self.state().receipts.insert(sequence, response);
    }

    pub fn set_acknowledgement_response(
        &self,
        sequence: Sequence,
        response: QueryPacketAcknowledgementResponse,
    ) {
        self.state().acknowledgements.insert(sequence, response);
    }

    /// Makes every subsequent query fail with an RPC error.
    pub fn fail_queries(&self, reason: impl Into<String>) {
        self.state().rpc_failure = Some(reason.into());
    }

    pub fn recorded_queries(&self) -> Vec<RecordedQuery> {
        self.state().queries.clone()
    }

    fn state(&self) -> MutexGuard<'_, MockChainState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Checks the query targets this chain's channel end, records it, and
    /// fails it if RPC failures were requested.
    fn serve(
        &self,
        msg_type: PacketMsgType,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: Sequence,
        height: Height,
    ) -> Result<MutexGuard<'_, MockChainState>, Error> {
        if *port_id != self.config.port_id || *channel_id != self.config.channel_id {
            return Err(Error::channel_not_found(
                self.config.id.clone(),
                port_id.clone(),
                channel_id.clone(),
            ));
        }

        let mut state = self.state();

        if let Some(reason) = &state.rpc_failure {
            return Err(Error::rpc(self.config.id.clone(), reason.clone()));
        }

        trace!(chain = %self.config.id, ?msg_type, %sequence, %height, "serving proof query");

        state.queries.push(RecordedQuery {
            msg_type,
            sequence,
            height,
        });

        Ok(state)
    }
}

impl ChainHandle for MockChain {
    fn id(&self) -> ChainId {
        self.config.id.clone()
    }

    fn get_signer(&self) -> Result<Signer, Error> {
        self.state().signer.clone().ok_or_else(|| {
            Error::key_not_found(self.config.id.clone(), self.config.key_name.clone())
        })
    }

    fn path_end(&self) -> PathEnd {
        self.config.path_end()
    }

    fn query_packet_commitment(
        &self,
        request: QueryPacketCommitmentRequest,
    ) -> Result<QueryPacketCommitmentResponse, Error> {
        let state = self.serve(
            PacketMsgType::Recv,
            &request.port_id,
            &request.channel_id,
            request.sequence,
            request.height,
        )?;

        Ok(state
            .commitments
            .get(&request.sequence)
            .cloned()
            .unwrap_or_else(|| QueryPacketCommitmentResponse {
                commitment: Vec::new(),
                proof: Vec::new(),
                proof_height: request.height.increment(),
            }))
    }

    fn query_packet_receipt(
        &self,
        request: QueryPacketReceiptRequest,
    ) -> Result<QueryPacketReceiptResponse, Error> {
        let state = self.serve(
            PacketMsgType::Timeout,
            &request.port_id,
            &request.channel_id,
            request.sequence,
            request.height,
        )?;

        Ok(state
            .receipts
            .get(&request.sequence)
            .cloned()
            .unwrap_or_else(|| QueryPacketReceiptResponse {
                proof: Vec::new(),
                proof_height: request.height.increment(),
            }))
    }

    fn query_packet_acknowledgement(
        &self,
        request: QueryPacketAcknowledgementRequest,
    ) -> Result<QueryPacketAcknowledgementResponse, Error> {
        let state = self.serve(
            PacketMsgType::Ack,
            &request.port_id,
            &request.channel_id,
            request.sequence,
            request.height,
        )?;

        Ok(state
            .acknowledgements
            .get(&request.sequence)
            .cloned()
            .unwrap_or_else(|| QueryPacketAcknowledgementResponse {
                acknowledgement: Vec::new(),
                proof: Vec::new(),
                proof_height: request.height.increment(),
            }))
    }
}
