//! Error types for bulletin operations
//!
//! Every rejection reason gets its own variant with the context a caller
//! needs to decide whether a retry is meaningful. All variants are
//! precondition failures detected before any mutation; a rejected call never
//! leaves partial state behind.

use crate::identifiers::ParticipantId;
use crate::payload::ValidityRule;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bulletin error types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum BulletinError {
    /// Caller of an admission is not the board admin
    #[error("caller {caller} is not the admin")]
    NotAdmin {
        /// The non-admin caller
        caller: ParticipantId,
    },

    /// Candidate already holds an admission on the log
    #[error("{address} is already admitted")]
    AlreadyAdmitted {
        /// The already-admitted candidate
        address: ParticipantId,
    },

    /// Admitting the candidate would exceed the configured capacity
    #[error("admission would bring the roster to {count}, capacity is {max}")]
    CapacityExceeded {
        /// Roster size the admission would produce
        count: u32,
        /// Configured capacity
        max: u32,
    },

    /// Payload failed a validity rule
    #[error("payload violates the {rule}")]
    InvalidPayload {
        /// The violated rule
        rule: ValidityRule,
    },

    /// Sender has no admission on the log
    #[error("{address} is not admitted")]
    NotAdmitted {
        /// The unadmitted sender
        address: ParticipantId,
    },

    /// Sender already has a message on the log
    #[error("{address} has already sent a message")]
    DuplicateMessage {
        /// The repeat sender
        address: ParticipantId,
    },

    /// Unfolded backlog exceeds the per-call fold bound
    ///
    /// Transient: retry after the caller's checkpoint advances. Truncating
    /// the fold instead would corrupt the derived facts.
    #[error("backlog of {backlog} entries exceeds the fold bound of {bound}")]
    BacklogTooLarge {
        /// Entries between the checkpoint and the head
        backlog: u64,
        /// Maximum entries a single fold may visit
        bound: u64,
    },

    /// Checkpoint digest does not match the recorded log history
    #[error("checkpoint does not match the log history")]
    CheckpointMismatch,

    /// Configuration rejected at construction
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// What was wrong with the configuration
        message: String,
    },

    /// Derived state disagrees with durable counters
    #[error("state drift: {message}")]
    StateDrift {
        /// Description of the disagreement
        message: String,
    },

    /// Canonical encoding failed
    #[error("encoding failed: {message}")]
    Encoding {
        /// Underlying encoder error
        message: String,
    },
}

impl BulletinError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a state drift error
    pub fn state_drift(message: impl Into<String>) -> Self {
        Self::StateDrift {
            message: message.into(),
        }
    }

    /// Create an encoding error
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// Whether a retry of the failed call could ever succeed
    ///
    /// Only backlog pressure clears on its own; every other rejection stands
    /// until the conflicting condition itself changes.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::BacklogTooLarge { .. })
    }
}

/// Standard Result type for bulletin operations
pub type Result<T> = std::result::Result<T, BulletinError>;
