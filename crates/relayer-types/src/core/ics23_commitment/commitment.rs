use core::fmt::{Debug, Error as FmtError, Formatter};

use serde_derive::Serialize;
use subtle_encoding::hex;

use crate::proofs::ProofError;

/// Encoded Merkle proof bytes, as returned by a chain's proof query.
///
/// Proof bytes are never empty: an empty proof is not a proof, and is
/// rejected on conversion.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CommitmentProofBytes {
    #[serde(serialize_with = "crate::serializers::ser_hex_upper")]
    bytes: Vec<u8>,
}

impl CommitmentProofBytes {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Debug for CommitmentProofBytes {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        let hex = hex::encode_upper(&self.bytes);
        f.debug_tuple("CommitmentProof")
            .field(&String::from_utf8_lossy(&hex))
            .finish()
    }
}

impl TryFrom<Vec<u8>> for CommitmentProofBytes {
    type Error = ProofError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        if bytes.is_empty() {
            Err(Self::Error::empty_proof())
        } else {
            Ok(Self { bytes })
        }
    }
}

impl From<CommitmentProofBytes> for Vec<u8> {
    fn from(p: CommitmentProofBytes) -> Vec<u8> {
        p.bytes
    }
}
