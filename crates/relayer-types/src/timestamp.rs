use core::fmt::{Display, Error as FmtError, Formatter};

use serde_derive::{Deserialize, Serialize};

/// A packet timeout timestamp, as a Unix timestamp in nanoseconds.
///
/// The protocol uses `0` to signal that no timestamp is set, in which case
/// the packet never times out on account of time.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default, Deserialize, Serialize, Hash)]
#[serde(transparent)]
pub struct Timestamp {
    nanoseconds: u64,
}

/// The expiry result when comparing two timestamps.
/// - If either timestamp is not set (0), the result is `InvalidTimestamp`.
/// - If the left timestamp is strictly after the right timestamp, the result is `Expired`.
/// - Otherwise, the result is `NotExpired`.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Deserialize, Serialize, Hash)]
pub enum Expiry {
    Expired,
    NotExpired,
    InvalidTimestamp,
}

impl Timestamp {
    pub fn from_nanoseconds(nanoseconds: u64) -> Timestamp {
        Timestamp { nanoseconds }
    }

    /// Returns a `Timestamp` representation of a timestamp not being set.
    pub fn none() -> Self {
        Timestamp { nanoseconds: 0 }
    }

    /// Convert a `Timestamp` to `u64` value in nanoseconds. If no timestamp
    /// is set, the result is 0.
    pub fn nanoseconds(&self) -> u64 {
        self.nanoseconds
    }

    pub fn is_set(&self) -> bool {
        self.nanoseconds != 0
    }

    /// Checks whether the timestamp has expired when compared to the
    /// `other` timestamp. Returns an [`Expiry`] result.
    pub fn check_expiry(&self, other: &Timestamp) -> Expiry {
        if !self.is_set() || !other.is_set() {
            Expiry::InvalidTimestamp
        } else if self.nanoseconds > other.nanoseconds {
            Expiry::Expired
        } else {
            Expiry::NotExpired
        }
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        if self.is_set() {
            write!(f, "Timestamp({})", self.nanoseconds)
        } else {
            write!(f, "Timestamp(NoTimestamp)")
        }
    }
}

impl From<Timestamp> for u64 {
    fn from(timestamp: Timestamp) -> u64 {
        timestamp.nanoseconds
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::{Expiry, Timestamp};

    #[test]
    fn expiry_needs_both_timestamps() {
        let unset = Timestamp::none();
        let earlier = Timestamp::from_nanoseconds(1_000);
        let later = Timestamp::from_nanoseconds(2_000);

        assert_eq!(later.check_expiry(&earlier), Expiry::Expired);
        assert_eq!(earlier.check_expiry(&later), Expiry::NotExpired);
        assert_eq!(earlier.check_expiry(&earlier), Expiry::NotExpired);
        assert_eq!(later.check_expiry(&unset), Expiry::InvalidTimestamp);
        assert_eq!(unset.check_expiry(&later), Expiry::InvalidTimestamp);
    }
}
