use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use flex_error::define_error;
use serde_derive::{Deserialize, Serialize};

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    SignerError {
        EmptySigner
            | _ | { "signer cannot be empty" },
    }
}

/// The account address which signs a relayed message on the chain it is
/// submitted to.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Signer(String);

impl Signer {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Signer {
    type Err = SignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_string();
        if s.trim().is_empty() {
            return Err(SignerError::empty_signer());
        }
        Ok(Self(s))
    }
}

impl Display for Signer {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Signer {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::Signer;

    #[test]
    fn blank_signer_is_rejected() {
        assert!("".parse::<Signer>().is_err());
        assert!("   ".parse::<Signer>().is_err());

        let signer: Signer = "cosmos1hmxq4lzc2nyauvph3esqaw5skznmfudnx9fh5z".parse().unwrap();
        assert_eq!(signer.as_str(), "cosmos1hmxq4lzc2nyauvph3esqaw5skznmfudnx9fh5z");
    }
}
