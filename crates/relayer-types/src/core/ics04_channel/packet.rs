use core::fmt::{Debug, Display, Error as FmtError, Formatter};
use core::str::FromStr;

use ibc_proto::ibc::core::channel::v1::Packet as RawPacket;
use serde_derive::{Deserialize, Serialize};
use subtle_encoding::hex;

use super::timeout::TimeoutHeight;
use crate::core::ics04_channel::error::Error;
use crate::core::ics24_host::identifier::{ChannelId, PortId};
use crate::timestamp::{Expiry, Timestamp};
use crate::Height;

/// The proof-carrying channel messages a relayer builds for a packet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PacketMsgType {
    Recv,
    Ack,
    Timeout,
}

impl PacketMsgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recv => "recv_packet",
            Self::Ack => "acknowledge_packet",
            Self::Timeout => "timeout_packet",
        }
    }
}

impl Display for PacketMsgType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        f.write_str(self.as_str())
    }
}

/// Packet sequence number, assigned by the sending chain when the packet
/// is committed. Sequences start at 1 on every channel.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct Sequence(u64);

impl Sequence {
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl FromStr for Sequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Sequence)
            .map_err(|e| Error::invalid_string_as_sequence(s.to_string(), e))
    }
}

impl From<u64> for Sequence {
    fn from(seq: u64) -> Self {
        Sequence(seq)
    }
}

impl From<Sequence> for u64 {
    fn from(seq: Sequence) -> u64 {
        seq.0
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        Display::fmt(&self.0, f)
    }
}

/// The packet record carried by channel messages: the application payload
/// together with both of its channel ends and its timeout conditions.
#[derive(Clone, Default, Hash, PartialEq, Eq, Deserialize, Serialize)]
pub struct Packet {
    pub sequence: Sequence,
    pub source_port: PortId,
    pub source_channel: ChannelId,
    pub destination_port: PortId,
    pub destination_channel: ChannelId,
    #[serde(serialize_with = "crate::serializers::ser_hex_upper")]
    pub data: Vec<u8>,
    pub timeout_height: TimeoutHeight,
    pub timeout_timestamp: Timestamp,
}

impl Packet {
    /// Whether the destination chain, at the given time and height, must
    /// refuse this packet. A timed out packet is relayed with a
    /// [`MsgTimeout`](crate::core::ics04_channel::msgs::timeout::MsgTimeout)
    /// back to its source rather than delivered.
    pub fn timed_out(&self, dst_chain_ts: &Timestamp, dst_chain_height: Height) -> bool {
        timed_out(
            &self.timeout_height,
            &self.timeout_timestamp,
            dst_chain_ts,
            dst_chain_height,
        )
    }
}

/// Either timeout condition is enough. An unset timestamp never expires.
pub fn timed_out(
    timeout_height: &TimeoutHeight,
    timeout_timestamp: &Timestamp,
    dst_chain_ts: &Timestamp,
    dst_chain_height: Height,
) -> bool {
    if timeout_height.has_expired(dst_chain_height) {
        return true;
    }

    timeout_timestamp.is_set() && dst_chain_ts.check_expiry(timeout_timestamp) == Expiry::Expired
}

impl Debug for Packet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        let data = hex::encode_upper(&self.data);

        f.debug_struct("Packet")
            .field("sequence", &self.sequence)
            .field("source", &format_args!("{}/{}", self.source_port, self.source_channel))
            .field(
                "destination",
                &format_args!("{}/{}", self.destination_port, self.destination_channel),
            )
            .field("data", &String::from_utf8_lossy(&data))
            .field("timeout_height", &self.timeout_height)
            .field("timeout_timestamp", &self.timeout_timestamp)
            .finish()
    }
}

impl Display for Packet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(
            f,
            "#{} {}/{} -> {}/{} (timeout height: {}, timeout timestamp: {})",
            self.sequence,
            self.source_port,
            self.source_channel,
            self.destination_port,
            self.destination_channel,
            self.timeout_height,
            self.timeout_timestamp
        )
    }
}

impl TryFrom<RawPacket> for Packet {
    type Error = Error;

    fn try_from(raw: RawPacket) -> Result<Self, Self::Error> {
        let sequence = Sequence::from(raw.sequence);
        if sequence.is_zero() {
            return Err(Error::zero_packet_sequence());
        }

        if raw.data.is_empty() {
            return Err(Error::zero_packet_data());
        }

        // `0-0` is the wire value of "no timeout height", any other height
        // must be a valid one.
        let timeout_height =
            TimeoutHeight::try_from(raw.timeout_height).map_err(Error::invalid_timeout_height)?;

        Ok(Packet {
            sequence,
            source_port: raw.source_port.parse().map_err(Error::identifier)?,
            source_channel: raw.source_channel.parse().map_err(Error::identifier)?,
            destination_port: raw.destination_port.parse().map_err(Error::identifier)?,
            destination_channel: raw.destination_channel.parse().map_err(Error::identifier)?,
            data: raw.data,
            timeout_height,
            timeout_timestamp: Timestamp::from_nanoseconds(raw.timeout_timestamp),
        })
    }
}

impl From<Packet> for RawPacket {
    fn from(packet: Packet) -> Self {
        RawPacket {
            sequence: packet.sequence.into(),
            source_port: packet.source_port.to_string(),
            source_channel: packet.source_channel.to_string(),
            destination_port: packet.destination_port.to_string(),
            destination_channel: packet.destination_channel.to_string(),
            data: packet.data,
            timeout_height: packet.timeout_height.into(),
            timeout_timestamp: packet.timeout_timestamp.nanoseconds(),
        }
    }
}

#[cfg(test)]
pub mod test_utils {
    use ibc_proto::ibc::core::channel::v1::Packet as RawPacket;
    use ibc_proto::ibc::core::client::v1::Height as RawHeight;

    /// A valid raw packet going out of `transfer/channel-0` into
    /// `transfer/channel-1`, with the given timeouts.
    pub fn raw_packet(timeout_height: u64, timeout_timestamp: u64) -> RawPacket {
        RawPacket {
            sequence: 1,
            source_port: "transfer".to_string(),
            source_channel: "channel-0".to_string(),
            destination_port: "transfer".to_string(),
            destination_channel: "channel-1".to_string(),
            data: b"{\"amount\":\"100\"}".to_vec(),
            timeout_height: Some(RawHeight {
                revision_number: 0,
                revision_height: timeout_height,
            }),
            timeout_timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use ibc_proto::ibc::core::channel::v1::Packet as RawPacket;
    use ibc_proto::ibc::core::client::v1::Height as RawHeight;

    use super::test_utils::raw_packet;
    use super::{Packet, PacketMsgType, Sequence};
    use crate::core::ics04_channel::error::ErrorDetail;
    use crate::core::ics04_channel::timeout::TimeoutHeight;
    use crate::timestamp::Timestamp;
    use crate::Height;

    #[test]
    fn sequence_parses_from_decimal() {
        assert_eq!("42".parse::<Sequence>().unwrap(), Sequence::from(42));
        assert!("-1".parse::<Sequence>().is_err());
        assert_eq!(Sequence::from(42).as_u64(), 42);
        assert!(Sequence::from(0).is_zero());
    }

    #[test]
    fn msg_type_names() {
        assert_eq!(PacketMsgType::Recv.to_string(), "recv_packet");
        assert_eq!(PacketMsgType::Ack.to_string(), "acknowledge_packet");
        assert_eq!(PacketMsgType::Timeout.to_string(), "timeout_packet");
    }

    #[test]
    fn valid_raw_packets_convert_back_unchanged() {
        for raw in [raw_packet(15, 0), raw_packet(0, 0), raw_packet(0, 1_000)] {
            let packet = Packet::try_from(raw.clone()).unwrap();
            assert_eq!(RawPacket::from(packet), raw);
        }

        let packet = Packet::try_from(raw_packet(0, 0)).unwrap();
        assert_eq!(packet.timeout_height, TimeoutHeight::Never);
        assert!(!packet.timeout_timestamp.is_set());
    }

    #[test]
    fn invalid_raw_packets_are_rejected() {
        let zero_sequence = RawPacket {
            sequence: 0,
            ..raw_packet(10, 0)
        };
        let err = Packet::try_from(zero_sequence).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::ZeroPacketSequence(_)));

        let empty_data = RawPacket {
            data: vec![],
            ..raw_packet(10, 0)
        };
        let err = Packet::try_from(empty_data).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::ZeroPacketData(_)));

        let zero_revision_height = RawPacket {
            timeout_height: Some(RawHeight {
                revision_number: 1,
                revision_height: 0,
            }),
            ..raw_packet(10, 0)
        };
        let err = Packet::try_from(zero_revision_height).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::InvalidTimeoutHeight(_)));

        let short_port = RawPacket {
            source_port: "p".to_string(),
            ..raw_packet(10, 0)
        };
        let err = Packet::try_from(short_port).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::Identifier(_)));

        let channel_with_separator = RawPacket {
            destination_channel: "channel/1".to_string(),
            ..raw_packet(10, 0)
        };
        assert!(Packet::try_from(channel_with_separator).is_err());
    }

    #[test]
    fn timed_out_by_height_or_timestamp() {
        let packet = Packet {
            sequence: Sequence::from(42),
            timeout_height: TimeoutHeight::At(Height::new(1, 100).unwrap()),
            timeout_timestamp: Timestamp::from_nanoseconds(5_000),
            data: b"payload".to_vec(),
            ..Packet::default()
        };

        let early = Timestamp::from_nanoseconds(1_000);
        let late = Timestamp::from_nanoseconds(6_000);

        assert!(!packet.timed_out(&early, Height::new(1, 100).unwrap()));
        assert!(packet.timed_out(&early, Height::new(1, 101).unwrap()));
        assert!(packet.timed_out(&late, Height::new(1, 50).unwrap()));

        let no_timeouts = Packet {
            timeout_height: TimeoutHeight::Never,
            timeout_timestamp: Timestamp::none(),
            ..packet
        };
        assert!(!no_timeouts.timed_out(&late, Height::new(9, 9_999).unwrap()));
    }

    #[test]
    fn debug_shows_hex_data() {
        let packet = Packet {
            data: vec![0xDE, 0xAD],
            ..Packet::default()
        };

        assert!(format!("{packet:?}").contains("data: \"DEAD\""));
    }
}
