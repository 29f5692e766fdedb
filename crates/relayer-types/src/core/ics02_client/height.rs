use core::cmp::Ordering;
use core::fmt::{Debug, Display, Error as FmtError, Formatter};
use core::str::FromStr;

use ibc_proto::ibc::core::client::v1::Height as RawHeight;
use serde_derive::{Deserialize, Serialize};

use crate::core::ics02_client::error::Error;

/// A chain height, made of the revision (epoch) number of the chain and
/// the block height within that revision.
///
/// A `Height` with a zero revision height cannot be constructed: such a
/// height is not valid for a Tendermint chain. The special `0-0` value used
/// by packets to disable height based timeouts is modelled by
/// [`TimeoutHeight::Never`](crate::core::ics04_channel::timeout::TimeoutHeight)
/// instead.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Height {
    /// Previously known as "epoch"
    revision_number: u64,

    /// The height of a block
    revision_height: u64,
}

impl Height {
    pub fn new(revision_number: u64, revision_height: u64) -> Result<Self, Error> {
        if revision_height == 0 {
            return Err(Error::invalid_height());
        }

        Ok(Self {
            revision_number,
            revision_height,
        })
    }

    pub fn revision_number(&self) -> u64 {
        self.revision_number
    }

    pub fn revision_height(&self) -> u64 {
        self.revision_height
    }

    pub fn add(&self, delta: u64) -> Height {
        Height {
            revision_number: self.revision_number,
            revision_height: self.revision_height.saturating_add(delta),
        }
    }

    pub fn increment(&self) -> Height {
        self.add(1)
    }

    /// Lowers the revision height by `delta`, failing if the result would
    /// not be a valid height (ie. zero or negative).
    pub fn sub(&self, delta: u64) -> Result<Height, Error> {
        if self.revision_height <= delta {
            return Err(Error::invalid_height_result(*self, delta));
        }

        Ok(Height {
            revision_number: self.revision_number,
            revision_height: self.revision_height - delta,
        })
    }

    pub fn decrement(&self) -> Result<Height, Error> {
        self.sub(1)
    }
}

impl PartialOrd for Height {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Height {
    fn cmp(&self, other: &Self) -> Ordering {
        self.revision_number
            .cmp(&other.revision_number)
            .then(self.revision_height.cmp(&other.revision_height))
    }
}

impl TryFrom<RawHeight> for Height {
    type Error = Error;

    fn try_from(raw_height: RawHeight) -> Result<Self, Self::Error> {
        Height::new(raw_height.revision_number, raw_height.revision_height)
    }
}

impl From<Height> for RawHeight {
    fn from(ics_height: Height) -> Self {
        RawHeight {
            revision_number: ics_height.revision_number,
            revision_height: ics_height.revision_height,
        }
    }
}

impl Debug for Height {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        f.debug_struct("Height")
            .field("revision", &self.revision_number)
            .field("height", &self.revision_height)
            .finish()
    }
}

impl Display for Height {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}-{}", self.revision_number, self.revision_height)
    }
}

impl FromStr for Height {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (number, height) = value
            .split_once('-')
            .ok_or_else(Error::invalid_height)?;

        let revision_number = number
            .parse::<u64>()
            .map_err(|e| Error::height_conversion(value.to_owned(), e))?;

        let revision_height = height
            .parse::<u64>()
            .map_err(|e| Error::height_conversion(value.to_owned(), e))?;

        Height::new(revision_number, revision_height)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::Height;
    use crate::core::ics02_client::error::ErrorDetail;

    #[test]
    fn zero_revision_height_is_rejected() {
        assert!(Height::new(1, 0).is_err());
        assert!(Height::new(0, 1).is_ok());
    }

    #[test]
    fn decrement_stops_above_zero() {
        let height = Height::new(1, 100).unwrap();
        assert_eq!(height.decrement().unwrap(), Height::new(1, 99).unwrap());

        let lowest = Height::new(4, 1).unwrap();
        let err = lowest.decrement().unwrap_err();
        assert!(matches!(
            err.detail(),
            ErrorDetail::InvalidHeightResult(e) if e.delta == 1
        ));
    }

    #[test]
    fn ordering_is_revision_first() {
        let low_revision = Height::new(0, 1000).unwrap();
        let high_revision = Height::new(1, 1).unwrap();

        assert!(low_revision < high_revision);
        assert!(high_revision.increment() > high_revision);
    }

    #[test]
    fn parse_display_form() {
        struct Test {
            input: &'static str,
            want: Option<(u64, u64)>,
        }

        let tests = vec![
            Test {
                input: "1-99",
                want: Some((1, 99)),
            },
            Test {
                input: "0-1",
                want: Some((0, 1)),
            },
            Test {
                input: "1-0",
                want: None,
            },
            Test {
                input: "99",
                want: None,
            },
            Test {
                input: "a-1",
                want: None,
            },
        ];

        for test in tests {
            let parsed = test.input.parse::<Height>();
            match test.want {
                Some((number, height)) => {
                    let parsed = parsed.unwrap();
                    assert_eq!(parsed.revision_number(), number);
                    assert_eq!(parsed.revision_height(), height);
                    assert_eq!(parsed.to_string(), test.input);
                }
                None => assert!(parsed.is_err(), "{} should not parse", test.input),
            }
        }
    }
}
