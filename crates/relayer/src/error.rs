//! This module defines the various errors that can be raised by a chain
//! handle while serving the packet relay core.

use flex_error::define_error;

use ibc_packet_relay_types::core::ics24_host::identifier::{ChainId, ChannelId, PortId};

define_error! {
    Error {
        Rpc
            { chain_id: ChainId, reason: String }
            |e| { format!("RPC error to chain {}: {}", e.chain_id, e.reason) },

        KeyNotFound
            { chain_id: ChainId, key_name: String }
            |e| {
                format!("no signing key `{}` configured for chain {}",
                    e.key_name, e.chain_id)
            },

        ChannelNotFound
            {
                chain_id: ChainId,
                port_id: PortId,
                channel_id: ChannelId,
            }
            |e| {
                format!("channel {}/{} does not exist on chain {}",
                    e.port_id, e.channel_id, e.chain_id)
            },
    }
}
