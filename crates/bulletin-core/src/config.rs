//! Board configuration
//!
//! The admin identity and capacity are fixed when the board is created and
//! never change afterwards. Both controllers read the same immutable config;
//! nothing here is ambient or global.

use crate::errors::{BulletinError, Result};
use crate::identifiers::ParticipantId;
use serde::{Deserialize, Serialize};

/// Default roster capacity
pub const DEFAULT_MAX_USERS: u32 = 10;

/// Immutable board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    admin: ParticipantId,
    max_users: u32,
}

impl BoardConfig {
    /// Create a validated configuration
    pub fn new(admin: ParticipantId, max_users: u32) -> Result<Self> {
        if max_users == 0 {
            return Err(BulletinError::invalid_config(
                "max_users must be at least 1",
            ));
        }
        Ok(Self { admin, max_users })
    }

    /// Create a configuration with the default capacity
    pub fn with_default_capacity(admin: ParticipantId) -> Self {
        Self {
            admin,
            max_users: DEFAULT_MAX_USERS,
        }
    }

    /// The admin identity, immutable after construction
    pub fn admin(&self) -> ParticipantId {
        self.admin
    }

    /// Roster capacity
    pub fn max_users(&self) -> u32 {
        self.max_users
    }

    /// Maximum entries a single fold may visit
    ///
    /// Sized for the worst case of `max_users` admissions plus `max_users`
    /// messages accumulated since a checkpoint advance. Admission and
    /// message entries share this allowance.
    pub fn fold_bound(&self) -> u64 {
        2 * u64::from(self.max_users)
    }
}
