//! Pure reducers over log entries
//!
//! Membership and send-status are never stored; they are derived here. Every
//! accumulator is commutative and associative over the entry multiset, so
//! the facts are independent of arrival order.

use crate::action::{Action, ActionKind};
use crate::log::{ActionLog, Checkpoint};
use bulletin_core::{ParticipantId, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Whether the address holds an admission between the checkpoint and head
pub fn is_admitted(
    log: &ActionLog,
    from: &Checkpoint,
    bound: u64,
    address: &ParticipantId,
) -> Result<bool> {
    log.fold_since(from, bound, false, |admitted, action| {
        admitted || action.admits(address)
    })
}

/// Whether the address has a message between the checkpoint and head
pub fn has_sent(
    log: &ActionLog,
    from: &Checkpoint,
    bound: u64,
    address: &ParticipantId,
) -> Result<bool> {
    log.fold_since(from, bound, false, |sent, action| {
        sent || action.message_from(address)
    })
}

/// Number of admission entries between the checkpoint and head
pub fn admission_count(log: &ActionLog, from: &Checkpoint, bound: u64) -> Result<u32> {
    log.fold_since(from, bound, 0u32, |count, action| {
        if action.kind == ActionKind::Admission {
            count + 1
        } else {
            count
        }
    })
}

/// Full derived state of a roster
///
/// Produced by [`replay`]; used for audits and observability rather than by
/// the accept path, which folds single facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterState {
    /// Addresses holding an admission
    pub admitted: BTreeSet<ParticipantId>,
    /// Addresses that have sent their message
    pub senders: BTreeSet<ParticipantId>,
    /// Total admission entries seen
    pub admission_count: u32,
    /// Total message entries seen
    pub message_count: u32,
}

/// Derive the roster state from a slice of entries in one pass
pub fn replay(entries: &[Action]) -> RosterState {
    entries
        .iter()
        .fold(RosterState::default(), |mut state, action| {
            match action.kind {
                ActionKind::Admission => {
                    state.admitted.insert(action.address);
                    state.admission_count += 1;
                }
                ActionKind::MessageSent => {
                    state.senders.insert(action.address);
                    state.message_count += 1;
                }
            }
            state
        })
}
