use core::convert::Infallible;
use core::fmt::{Debug, Display, Error as FmtError, Formatter};
use core::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::error::ValidationError;
use super::validate::{validate_channel_identifier, validate_port_identifier};

/// The identifier of a chain, eg. `cosmoshub-4`.
///
/// A chain identifier following the epoch format `{name}-{number}` carries
/// its revision number in the numeric suffix. Identifiers without such a
/// suffix have revision number zero.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId {
    id: String,
    version: u64,
}

impl ChainId {
    /// Creates a new `ChainId` from a string and the revision number it
    /// is expected to carry.
    pub fn new(name: String, version: u64) -> Self {
        Self {
            id: format!("{name}-{version}"),
            version,
        }
    }

    pub fn from_string(id: &str) -> Self {
        let version = Self::chain_version(id);

        Self {
            id: id.to_string(),
            version,
        }
    }

    /// Get a reference to the underlying string.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Extract the revision number from this chain identifier.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Extract the revision number from the given chain identifier, or zero
    /// if it does not follow the epoch format.
    pub fn chain_version(chain_id: &str) -> u64 {
        chain_id
            .rsplit_once('-')
            .and_then(|(name, version)| {
                if name.is_empty() {
                    None
                } else {
                    version.parse::<u64>().ok()
                }
            })
            .unwrap_or(0)
    }
}

impl FromStr for ChainId {
    type Err = Infallible;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_string(id))
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.id)
    }
}

impl Debug for ChainId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "ChainId({})", self.id)
    }
}

impl From<ChainId> for String {
    fn from(chain_id: ChainId) -> String {
        chain_id.id
    }
}

impl From<String> for ChainId {
    fn from(value: String) -> Self {
        Self::from_string(&value)
    }
}

impl Serialize for ChainId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id)
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

/// The identifier of a port, eg. `transfer`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PortId(String);

impl PortId {
    pub fn transfer() -> Self {
        Self("transfer".to_string())
    }

    /// Get this identifier as a borrowed `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get this identifier as a borrowed byte slice
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl Display for PortId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PortId {
    type Err = ValidationError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        validate_port_identifier(id).map(|_| Self(id.to_string()))
    }
}

impl AsRef<str> for PortId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for PortId {
    fn default() -> Self {
        Self("defaultPort".to_string())
    }
}

/// The identifier of a channel end, eg. `channel-0`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChannelId(String);

impl ChannelId {
    const PREFIX: &'static str = "channel-";

    /// Builds a new channel identifier. Like client and connection identifiers, channel ids are
    /// deterministically formed from two elements: a prefix `prefix`, and a monotonically
    /// increasing `counter`, separated by a dash "-".
    /// The prefix is currently determined statically (see `ChannelId::prefix()`) so this method
    /// accepts a single argument, the `counter`.
    ///
    /// ```
    /// # use ibc_packet_relay_types::core::ics24_host::identifier::ChannelId;
    /// let chan_id = ChannelId::new(27);
    /// assert_eq!(chan_id.to_string(), "channel-27");
    /// ```
    pub fn new(identifier: u64) -> Self {
        let id = format!("{}{}", Self::PREFIX, identifier);
        Self(id)
    }

    /// Get this identifier as a borrowed `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get this identifier as a borrowed byte slice
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl Display for ChannelId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChannelId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_channel_identifier(s).map(|_| Self(s.to_string()))
    }
}

impl AsRef<str> for ChannelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Default for ChannelId {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Equality check against string literal (satisfies &ChannelId == &str).
/// ```
/// use core::str::FromStr;
/// use ibc_packet_relay_types::core::ics24_host::identifier::ChannelId;
/// let channel_id = ChannelId::from_str("channelId-0");
/// assert!(channel_id.is_ok());
/// channel_id.map(|id| {assert_eq!(&id, "channelId-0")});
/// ```
impl PartialEq<str> for ChannelId {
    fn eq(&self, other: &str) -> bool {
        self.as_str().eq(other)
    }
}

macro_rules! impl_validated_serde {
    ($id:ty) => {
        impl Serialize for $id {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $id {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(de::Error::custom)
            }
        }
    };
}

impl_validated_serde!(PortId);
impl_validated_serde!(ChannelId);

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::{ChainId, ChannelId, PortId};

    #[test]
    fn chain_id_version_from_epoch_suffix() {
        assert_eq!(ChainId::from_string("ibc-0").version(), 0);
        assert_eq!(ChainId::from_string("cosmoshub-4").version(), 4);
        assert_eq!(ChainId::from_string("osmosis").version(), 0);
        assert_eq!(ChainId::from_string("-7").version(), 0);
        assert_eq!(ChainId::new("gaia".to_string(), 12).as_str(), "gaia-12");
    }

    #[test]
    fn port_and_channel_ids_are_validated() {
        assert!("transfer".parse::<PortId>().is_ok());
        assert!("p".parse::<PortId>().is_err());
        assert!("channel-12".parse::<ChannelId>().is_ok());
        assert!("chan/12".parse::<ChannelId>().is_err());
        assert_eq!(ChannelId::default().as_str(), "channel-0");
    }

    #[test]
    fn deserialization_rejects_invalid_ids() {
        let ok: Result<PortId, _> = serde_json::from_str("\"transfer\"");
        assert_eq!(ok.unwrap(), PortId::transfer());

        let bad: Result<ChannelId, _> = serde_json::from_str("\"ch\"");
        assert!(bad.is_err());
    }
}
