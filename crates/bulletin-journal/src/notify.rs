//! Notifications emitted by accepted operations
//!
//! One notification per accepted call, recorded in acceptance order. An
//! observer reading the full history of a board that reached capacity with
//! every member having sent sees exactly `max_users` admissions and
//! `max_users` messages.

use bulletin_core::{ParticipantId, Payload};
use serde::{Deserialize, Serialize};

/// Event emitted by an accepted operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// An address was added to the roster
    Admitted {
        /// The admitted address
        address: ParticipantId,
    },
    /// An admitted address posted its message
    MessagePosted {
        /// The sender
        sender: ParticipantId,
        /// The message value
        payload: Payload,
    },
}
