//! Board state
//!
//! The board owns the log plus the small amount of durable state that is not
//! derivable from it cheaply: the immutable configuration, the sent-message
//! counter, and the notification history. The counter is redundant with the
//! log by construction and [`Board::audit`] checks that they agree.

use crate::log::{ActionLog, Checkpoint};
use crate::notify::Notification;
use crate::reduce::{self, RosterState};
use bulletin_core::{BoardConfig, BulletinError, ParticipantId, Result};
use serde::{Deserialize, Serialize};

/// A bulletin board: bounded roster, one message per member
///
/// Created once with an immutable config; thereafter mutated only by
/// [`Board::admit`](crate::admission) and
/// [`Board::send_message`](crate::posting) under their preconditions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub(crate) config: BoardConfig,
    pub(crate) log: ActionLog,
    pub(crate) sent_counter: u32,
    pub(crate) notifications: Vec<Notification>,
}

impl Board {
    /// Create a board with an empty log and zeroed counter
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            log: ActionLog::new(),
            sent_counter: 0,
            notifications: Vec::new(),
        }
    }

    /// The board configuration
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The admin identity
    pub fn admin(&self) -> ParticipantId {
        self.config.admin()
    }

    /// Number of accepted messages
    pub fn sent_count(&self) -> u32 {
        self.sent_counter
    }

    /// Notification history in acceptance order
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// The underlying action log
    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Cursor at the log's current head
    pub fn checkpoint(&self) -> Checkpoint {
        self.log.head()
    }

    /// Whether the address currently holds an admission
    pub fn is_admitted(&self, address: &ParticipantId) -> Result<bool> {
        reduce::is_admitted(
            &self.log,
            &Checkpoint::initial(),
            self.config.fold_bound(),
            address,
        )
    }

    /// Whether the address has already sent its message
    pub fn has_sent(&self, address: &ParticipantId) -> Result<bool> {
        reduce::has_sent(
            &self.log,
            &Checkpoint::initial(),
            self.config.fold_bound(),
            address,
        )
    }

    /// Replay the full log and cross-check every invariant
    ///
    /// Returns the derived roster on success. Disagreement between the
    /// derived facts and the durable counter, or any structural invariant
    /// violation, is reported as [`BulletinError::StateDrift`].
    pub fn audit(&self) -> Result<RosterState> {
        let state = reduce::replay(self.log.entries());

        if state.admitted.len() as u32 != state.admission_count {
            return Err(BulletinError::state_drift(
                "duplicate admission entries on the log",
            ));
        }
        if state.senders.len() as u32 != state.message_count {
            return Err(BulletinError::state_drift(
                "duplicate message entries on the log",
            ));
        }
        if state.admission_count > self.config.max_users() {
            return Err(BulletinError::state_drift(format!(
                "roster of {} exceeds capacity {}",
                state.admission_count,
                self.config.max_users()
            )));
        }
        if !state.senders.is_subset(&state.admitted) {
            return Err(BulletinError::state_drift(
                "message entry without a matching admission",
            ));
        }
        if state.message_count != self.sent_counter {
            return Err(BulletinError::state_drift(format!(
                "counter {} disagrees with {} message entries",
                self.sent_counter, state.message_count
            )));
        }

        Ok(state)
    }
}
