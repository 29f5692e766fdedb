use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_proto::ibc::core::client::v1::Height as RawHeight;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::ics02_client::error::Error as ICS2Error;
use crate::core::ics02_client::height::Height;

/// Indicates a consensus height on the destination chain after which the packet
/// will no longer be processed, and will instead count as having timed-out.
///
/// `TimeoutHeight` is treated differently from other heights because
///
/// `RawHeight.timeout_height == {revision_number: 0, revision_height = 0}`
///
/// is legal and meaningful, even though Tendermint rejects this height
/// as invalid. Thus, it must be parsed specially, where this special case means
/// "no timeout".
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum TimeoutHeight {
    #[default]
    Never,
    At(Height),
}

impl TimeoutHeight {
    pub fn revision_number(&self) -> u64 {
        match self {
            Self::At(height) => height.revision_number(),
            Self::Never => 0,
        }
    }

    pub fn revision_height(&self) -> u64 {
        match self {
            Self::At(height) => height.revision_height(),
            Self::Never => 0,
        }
    }

    /// Check if a height is *strictly past* the timeout height, and thus is
    /// deemed expired.
    pub fn has_expired(&self, height: Height) -> bool {
        match self {
            Self::At(timeout_height) => height > *timeout_height,
            // When there's no timeout, heights are never expired
            Self::Never => false,
        }
    }
}

impl TryFrom<RawHeight> for TimeoutHeight {
    type Error = ICS2Error;

    // Note: it is important for `revision_number` to also be `0`, otherwise
    // packet commitment proofs will be incorrect.
    fn try_from(raw_height: RawHeight) -> Result<Self, Self::Error> {
        if raw_height.revision_number == 0 && raw_height.revision_height == 0 {
            Ok(TimeoutHeight::Never)
        } else {
            let height: Height = raw_height.try_into()?;
            Ok(TimeoutHeight::At(height))
        }
    }
}

impl TryFrom<Option<RawHeight>> for TimeoutHeight {
    type Error = ICS2Error;

    fn try_from(maybe_raw_height: Option<RawHeight>) -> Result<Self, Self::Error> {
        match maybe_raw_height {
            Some(raw_height) => Self::try_from(raw_height),
            None => Ok(TimeoutHeight::Never),
        }
    }
}

/// We map "no timeout height" to `Some(RawHeight::zero)` due to a quirk
/// in ICS-4. See <https://github.com/cosmos/ibc/issues/776>.
impl From<TimeoutHeight> for Option<RawHeight> {
    fn from(timeout_height: TimeoutHeight) -> Self {
        let raw_height = match timeout_height {
            TimeoutHeight::At(height) => height.into(),
            TimeoutHeight::Never => RawHeight {
                revision_number: 0,
                revision_height: 0,
            },
        };

        Some(raw_height)
    }
}

impl From<Height> for TimeoutHeight {
    fn from(height: Height) -> Self {
        Self::At(height)
    }
}

impl Display for TimeoutHeight {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            TimeoutHeight::At(timeout_height) => write!(f, "{timeout_height}"),
            TimeoutHeight::Never => write!(f, "no timeout"),
        }
    }
}

/// Serialized as a plain `{revision_number, revision_height}` pair so that
/// `Never` round-trips through the `0-0` wire value.
#[derive(serde_derive::Serialize, serde_derive::Deserialize)]
struct FlatHeight {
    revision_number: u64,
    revision_height: u64,
}

impl Serialize for TimeoutHeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FlatHeight {
            revision_number: self.revision_number(),
            revision_height: self.revision_height(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TimeoutHeight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        FlatHeight::deserialize(deserializer).map(|height| {
            Height::new(height.revision_number, height.revision_height)
                // If it's a valid height with a non-zero revision height, then we have a timeout
                .map(TimeoutHeight::At)
                // Otherwise, no timeout
                .unwrap_or(TimeoutHeight::Never)
        })
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use ibc_proto::ibc::core::client::v1::Height as RawHeight;

    use super::TimeoutHeight;
    use crate::Height;

    #[test]
    fn zero_raw_height_means_no_timeout() {
        let raw = RawHeight {
            revision_number: 0,
            revision_height: 0,
        };
        assert_eq!(TimeoutHeight::try_from(raw).unwrap(), TimeoutHeight::Never);

        let raw: Option<RawHeight> = TimeoutHeight::Never.into();
        assert_eq!(
            raw,
            Some(RawHeight {
                revision_number: 0,
                revision_height: 0,
            })
        );
    }

    #[test]
    fn revision_height_zero_with_nonzero_revision_is_invalid() {
        let raw = RawHeight {
            revision_number: 1,
            revision_height: 0,
        };
        assert!(TimeoutHeight::try_from(raw).is_err());
    }

    #[test]
    fn expiry_is_strict() {
        let timeout = TimeoutHeight::At(Height::new(1, 100).unwrap());

        assert!(!timeout.has_expired(Height::new(1, 100).unwrap()));
        assert!(timeout.has_expired(Height::new(1, 101).unwrap()));
        assert!(!TimeoutHeight::Never.has_expired(Height::new(9, 9).unwrap()));
    }
}
