//! Action model for the log
//!
//! Actions are immutable once appended. An entry records one of two things:
//! a participant was admitted, or a participant sent a message. Admission
//! entries carry a neutral zero payload.

use bulletin_core::{ParticipantId, Payload};
use serde::{Deserialize, Serialize};

/// What an action records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionKind {
    /// The address was added to the roster
    Admission,
    /// The address submitted its message
    MessageSent,
}

/// Immutable log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Participant this action concerns
    pub address: ParticipantId,
    /// Whether this is an admission or a message submission
    pub kind: ActionKind,
    /// The message value for `MessageSent`; zero for admissions
    pub payload: Payload,
}

impl Action {
    /// Create an admission entry for an address
    pub fn admission(address: ParticipantId) -> Self {
        Self {
            address,
            kind: ActionKind::Admission,
            payload: Payload::default(),
        }
    }

    /// Create a message entry for an address
    pub fn message(address: ParticipantId, payload: Payload) -> Self {
        Self {
            address,
            kind: ActionKind::MessageSent,
            payload,
        }
    }

    /// Whether this entry admits the given address
    pub fn admits(&self, address: &ParticipantId) -> bool {
        self.kind == ActionKind::Admission && self.address == *address
    }

    /// Whether this entry is a message from the given address
    pub fn message_from(&self, address: &ParticipantId) -> bool {
        self.kind == ActionKind::MessageSent && self.address == *address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admission_carries_zero_payload() {
        let who = ParticipantId::new_from_entropy([1u8; 32]);
        let action = Action::admission(who);
        assert_eq!(action.payload, Payload::default());
        assert!(action.admits(&who));
        assert!(!action.message_from(&who));
    }

    #[test]
    fn kind_discriminates_matches() {
        let who = ParticipantId::new_from_entropy([2u8; 32]);
        let other = ParticipantId::new_from_entropy([3u8; 32]);
        let action = Action::message(who, Payload::from_u64(6));
        assert!(action.message_from(&who));
        assert!(!action.message_from(&other));
        assert!(!action.admits(&who));
    }
}
