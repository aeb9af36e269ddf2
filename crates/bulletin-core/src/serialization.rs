//! Canonical encoding helpers
//!
//! The log's digest chain hashes a canonical CBOR encoding of each entry.
//! CBOR with serde's derived encodings is deterministic for the types used
//! here (no maps with unstable iteration order).

use crate::errors::{BulletinError, Result};
use serde::Serialize;

/// Serialize a value to canonical CBOR bytes
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_cbor::to_vec(value).map_err(|e| BulletinError::encoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::ParticipantId;

    #[test]
    fn encoding_is_deterministic() {
        let id = ParticipantId::new_from_entropy([8u8; 32]);
        let a = to_canonical_bytes(&id).unwrap();
        let b = to_canonical_bytes(&id).unwrap();
        assert_eq!(a, b);
    }
}
