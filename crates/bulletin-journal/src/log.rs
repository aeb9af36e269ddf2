//! Append-only action log with tamper-evident checkpoints
//!
//! Each append extends a blake3 digest chain over the canonical encoding of
//! the entry. A checkpoint is an offset plus the chain digest at that
//! offset, so it can only fold forward over history it actually observed.
//! Folds are bounded: a backlog larger than the caller's bound is an error,
//! never a truncation.

use crate::action::Action;
use bulletin_core::{serialization, BulletinError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Digest of an empty history
const INITIAL_DIGEST: [u8; 32] = [0u8; 32];

/// Opaque cursor into log history
///
/// Obtained from [`Checkpoint::initial`] or [`ActionLog::head`]. A
/// checkpoint taken against one log cannot be replayed against a different
/// history; the digest will not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    offset: u64,
    digest: [u8; 32],
}

impl Checkpoint {
    /// The distinguished cursor denoting "from the beginning of time"
    pub fn initial() -> Self {
        Self {
            offset: 0,
            digest: INITIAL_DIGEST,
        }
    }

    /// Number of entries preceding this cursor
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl Default for Checkpoint {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "checkpoint:{}:{}", self.offset, hex::encode(&self.digest[..8]))
    }
}

/// Append-only, unordered multiset of actions
///
/// Entries are stored in arrival order but every reducer used over them is
/// commutative and associative, so no fold result depends on that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLog {
    entries: Vec<Action>,
    // chain[i] is the digest after the first i entries; chain[0] covers the
    // empty history.
    chain: Vec<[u8; 32]>,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            chain: vec![INITIAL_DIGEST],
        }
    }

    /// Number of entries in the log
    pub fn len(&self) -> u64 {
        self.entries.len() as u64
    }

    /// Whether the log has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[Action] {
        &self.entries
    }

    /// Cursor at the current head
    pub fn head(&self) -> Checkpoint {
        Checkpoint {
            offset: self.len(),
            digest: self.head_digest(),
        }
    }

    fn head_digest(&self) -> [u8; 32] {
        // chain always holds at least the initial digest
        self.chain[self.chain.len() - 1]
    }

    /// Append an entry, extending the digest chain
    ///
    /// The digest is computed before anything is stored, so a failed encode
    /// leaves the log untouched.
    pub fn append(&mut self, action: Action) -> Result<Checkpoint> {
        let bytes = serialization::to_canonical_bytes(&action)?;
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.head_digest());
        hasher.update(&bytes);
        self.chain.push(*hasher.finalize().as_bytes());
        self.entries.push(action);
        Ok(self.head())
    }

    /// Verify that a checkpoint matches this log's recorded history
    pub fn verify(&self, checkpoint: &Checkpoint) -> Result<()> {
        let offset = checkpoint.offset as usize;
        if offset >= self.chain.len() || self.chain[offset] != checkpoint.digest {
            return Err(BulletinError::CheckpointMismatch);
        }
        Ok(())
    }

    /// Entries between a checkpoint and the head
    pub fn entries_since(&self, from: &Checkpoint) -> Result<&[Action]> {
        self.verify(from)?;
        Ok(&self.entries[from.offset as usize..])
    }

    /// Fold the entries between a checkpoint and the head
    ///
    /// Visits at most `bound` entries; a larger backlog is rejected so the
    /// accumulated fact can never be computed from partial history.
    pub fn fold_since<T, F>(&self, from: &Checkpoint, bound: u64, seed: T, f: F) -> Result<T>
    where
        F: FnMut(T, &Action) -> T,
    {
        let pending = self.entries_since(from)?;
        let backlog = pending.len() as u64;
        if backlog > bound {
            warn!(backlog, bound, "fold backlog exceeds bound");
            return Err(BulletinError::BacklogTooLarge { backlog, bound });
        }
        Ok(pending.iter().fold(seed, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulletin_core::{ParticipantId, Payload};

    fn participant(tag: u8) -> ParticipantId {
        ParticipantId::new_from_entropy([tag; 32])
    }

    #[test]
    fn empty_log_head_is_initial() {
        let log = ActionLog::new();
        assert_eq!(log.head(), Checkpoint::initial());
        assert!(log.is_empty());
    }

    #[test]
    fn append_advances_the_head() {
        let mut log = ActionLog::new();
        let before = log.head();
        let after = log.append(Action::admission(participant(1))).unwrap();
        assert_ne!(before, after);
        assert_eq!(after, log.head());
        assert_eq!(after.offset(), 1);
    }

    #[test]
    fn identical_histories_produce_identical_heads() {
        let mut a = ActionLog::new();
        let mut b = ActionLog::new();
        for tag in 1..=3 {
            a.append(Action::admission(participant(tag))).unwrap();
            b.append(Action::admission(participant(tag))).unwrap();
        }
        assert_eq!(a.head(), b.head());
    }

    #[test]
    fn foreign_checkpoint_is_rejected() {
        let mut a = ActionLog::new();
        let mut b = ActionLog::new();
        a.append(Action::admission(participant(1))).unwrap();
        b.append(Action::admission(participant(2))).unwrap();

        let foreign = b.head();
        assert_eq!(
            a.fold_since(&foreign, 10, 0u32, |n, _| n + 1),
            Err(BulletinError::CheckpointMismatch)
        );
    }

    #[test]
    fn fold_scopes_to_the_checkpoint() {
        let mut log = ActionLog::new();
        log.append(Action::admission(participant(1))).unwrap();
        let mid = log.head();
        log.append(Action::message(participant(1), Payload::from_u64(0)))
            .unwrap();

        let from_start = log
            .fold_since(&Checkpoint::initial(), 10, 0u32, |n, _| n + 1)
            .unwrap();
        let from_mid = log.fold_since(&mid, 10, 0u32, |n, _| n + 1).unwrap();
        assert_eq!(from_start, 2);
        assert_eq!(from_mid, 1);
    }

    #[test]
    fn oversized_backlog_is_an_error_not_a_truncation() {
        let mut log = ActionLog::new();
        for tag in 1..=5 {
            log.append(Action::admission(participant(tag))).unwrap();
        }
        assert_eq!(
            log.fold_since(&Checkpoint::initial(), 4, 0u32, |n, _| n + 1),
            Err(BulletinError::BacklogTooLarge {
                backlog: 5,
                bound: 4
            })
        );
        // At the bound is fine
        assert_eq!(
            log.fold_since(&Checkpoint::initial(), 5, 0u32, |n, _| n + 1),
            Ok(5)
        );
    }
}
