//! Relaying of individual packets over one channel between two chains.
//!
//! Callers wrap each packet they observed in the [`AnyRelayPacket`] variant
//! matching the action to perform, fetch its proofs from the proof chain,
//! then build the message for the submission chain:
//!
//! ```ignore
//! let mut relay_packet = AnyRelayPacket::from(RecvPacket::new(packet));
//! relay_packet.fetch_proofs(&receiver, &sender, sender_height)?;
//! let msg = relay_packet.build_msg(&receiver, &sender)?;
//! ```

pub mod error;
pub mod packet_msg;
pub mod relay_packet;
pub mod status;

pub use error::LinkError;
pub use packet_msg::PacketMsg;
pub use relay_packet::{
    AckPacket, AnyRelayPacket, ObservedPacket, PacketProofs, RecvPacket, RelayPacket,
    TimeoutPacket,
};
pub use status::{PacketStatus, PacketStatusMap};
