//! Participant identifier type
//!
//! Participants are identified by an opaque address. Equality is exact value
//! equality; the identifier reveals nothing about the participant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque participant address
///
/// Identifies a participant on the board: the admin, an admitted member, or a
/// candidate. The address is globally unique and carries no structure that
/// the board inspects beyond equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub Uuid);

impl ParticipantId {
    /// Create a participant ID from caller-provided entropy.
    pub fn new_from_entropy(entropy: [u8; 32]) -> Self {
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes.copy_from_slice(&entropy[..16]);
        Self(Uuid::from_bytes(uuid_bytes))
    }

    /// Create from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Convert to bytes
    pub fn to_bytes(&self) -> [u8; 16] {
        self.0.into_bytes()
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        // Default should be stable; use a non-zero sentinel.
        Self(Uuid::from_bytes([7u8; 16]))
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "participant-{}", self.0)
    }
}

impl FromStr for ParticipantId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Handle both raw UUIDs and prefixed format
        let uuid_str = s.strip_prefix("participant-").unwrap_or(s);
        Ok(ParticipantId(Uuid::parse_str(uuid_str)?))
    }
}

impl From<Uuid> for ParticipantId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ParticipantId> for Uuid {
    fn from(id: ParticipantId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_constructor_is_deterministic() {
        let a = ParticipantId::new_from_entropy([3u8; 32]);
        let b = ParticipantId::new_from_entropy([3u8; 32]);
        let c = ParticipantId::new_from_entropy([4u8; 32]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        let id = ParticipantId::new_from_entropy([9u8; 32]);
        let parsed: ParticipantId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);

        // Raw UUID form also accepted
        let raw: ParticipantId = id.uuid().to_string().parse().unwrap();
        assert_eq!(id, raw);
    }
}
