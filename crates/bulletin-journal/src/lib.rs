//! Append-only action log and the bulletin board built on it
//!
//! The log is the single source of truth: who is admitted and who has sent
//! is never stored in a mutable table, it is derived by folding the log.
//! Every accepted operation re-validates itself against the full history it
//! can see, which makes acceptance replay-safe under concurrent submission.
//!
//! # Architecture
//!
//! - **Actions**: immutable typed entries, appended and never edited
//! - **Checkpoints**: opaque tamper-evident cursors into log history
//! - **Reducers**: pure folds deriving membership and send-status facts
//! - **Board**: configuration, durable counter, and notification history
//!   around the log, with the `admit` and `send_message` operations
//!
//! Folds are bounded per invocation; a backlog past the bound is rejected,
//! never silently truncated.

pub mod action;
pub mod admission;
pub mod board;
pub mod log;
pub mod notify;
pub mod posting;
pub mod reduce;
pub mod shared;

pub use action::{Action, ActionKind};
pub use board::Board;
pub use log::{ActionLog, Checkpoint};
pub use notify::Notification;
pub use reduce::RosterState;
pub use shared::SharedBoard;

// Re-export the foundation types alongside the board
pub use bulletin_core::{BoardConfig, BulletinError, ParticipantId, Payload, Result};
