//! Shared board handle for concurrent submitters
//!
//! Acceptance must be linearizable: a call's preconditions are evaluated
//! against the log as of the call, and a conflicting action committed first
//! must make the later call fail. The write lock holds for the whole
//! fold-assert-append-count-notify unit, which is exactly that
//! linearization point.

use crate::board::Board;
use crate::log::Checkpoint;
use crate::notify::Notification;
use crate::reduce::RosterState;
use bulletin_core::{BoardConfig, ParticipantId, Payload, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cheaply clonable handle to a board shared across threads
#[derive(Debug, Clone)]
pub struct SharedBoard {
    inner: Arc<RwLock<Board>>,
}

impl SharedBoard {
    /// Create a shared board from a config
    pub fn new(config: BoardConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Board::new(config))),
        }
    }

    /// Wrap an existing board
    pub fn from_board(board: Board) -> Self {
        Self {
            inner: Arc::new(RwLock::new(board)),
        }
    }

    /// Admit a candidate; see [`Board::admit`]
    pub fn admit(&self, candidate: ParticipantId, caller: ParticipantId) -> Result<()> {
        self.inner.write().admit(candidate, caller)
    }

    /// Submit a message; see [`Board::send_message`]
    pub fn send_message(&self, payload: Payload, caller: ParticipantId) -> Result<()> {
        self.inner.write().send_message(payload, caller)
    }

    /// The admin identity
    pub fn admin(&self) -> ParticipantId {
        self.inner.read().admin()
    }

    /// Number of accepted messages
    pub fn sent_count(&self) -> u32 {
        self.inner.read().sent_count()
    }

    /// Snapshot of the notification history
    pub fn notifications(&self) -> Vec<Notification> {
        self.inner.read().notifications().to_vec()
    }

    /// Whether the address currently holds an admission
    pub fn is_admitted(&self, address: &ParticipantId) -> Result<bool> {
        self.inner.read().is_admitted(address)
    }

    /// Cursor at the log's current head
    pub fn checkpoint(&self) -> Checkpoint {
        self.inner.read().checkpoint()
    }

    /// Replay and cross-check the board; see [`Board::audit`]
    pub fn audit(&self) -> Result<RosterState> {
        self.inner.read().audit()
    }
}
