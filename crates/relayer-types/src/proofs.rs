use flex_error::define_error;
use serde_derive::Serialize;

use crate::core::ics23_commitment::commitment::CommitmentProofBytes;
use crate::Height;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    ProofError {
        EmptyProof
            | _ | { format_args!("proof cannot be empty") },
    }
}

/// The proof carried by a packet message, together with the height of the
/// commitment root it must be verified against.
///
/// When creating these proofs, the proof chain is queried at `height - 1`,
/// so that the resulting proof verifies against the root committed in the
/// header at `height`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Proofs {
    object_proof: CommitmentProofBytes,
    height: Height,
}

impl Proofs {
    pub fn new(object_proof: CommitmentProofBytes, height: Height) -> Self {
        Self {
            object_proof,
            height,
        }
    }

    /// Getter for the height field of this proof (i.e., the consensus height where this proof was
    /// created).
    pub fn height(&self) -> Height {
        self.height
    }

    /// Getter for the object-specific proof (e.g., proof for a packet commitment or receipt).
    pub fn object_proof(&self) -> &CommitmentProofBytes {
        &self.object_proof
    }
}
