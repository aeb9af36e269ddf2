//! Deterministic fixtures for bulletin tests
//!
//! Everything here is seeded: the same tags and seeds always produce the
//! same participants and boards, so failures reproduce exactly.

use bulletin_core::{BoardConfig, ParticipantId, Payload};
use bulletin_journal::Board;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic participant from a one-byte tag
///
/// Tag 0 is reserved for [`admin`] by convention in these fixtures.
pub fn participant(tag: u8) -> ParticipantId {
    ParticipantId::new_from_entropy([tag; 32])
}

/// The fixture admin identity
pub fn admin() -> ParticipantId {
    participant(0)
}

/// `n` distinct participants drawn from a seeded generator
pub fn distinct_participants(n: usize, seed: u64) -> Vec<ParticipantId> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let id = ParticipantId::new_from_entropy(rng.gen());
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

/// A payload passing every validity rule (all flags clear)
pub fn valid_payload() -> Payload {
    Payload::from_u64(0)
}

/// A valid payload with the dependency pair satisfied (bits 1 and 2)
pub fn dependent_payload() -> Payload {
    Payload::from_u64(0b00_0110)
}

/// An invalid payload: bit 0 set alongside every other flag
pub fn exclusive_conflict_payload() -> Payload {
    Payload::from_u64(0x3f)
}

/// An invalid payload: bit 3 set alongside bit 4
pub fn pair_conflict_payload() -> Payload {
    Payload::from_u64(0b01_1000)
}

/// A fresh board run by [`admin`] with the given capacity
pub fn board(max_users: u32) -> Board {
    Board::new(
        BoardConfig::new(admin(), max_users).unwrap_or_else(|e| panic!("fixture config: {e}")),
    )
}

/// A board with `members` already admitted
pub fn board_with_members(max_users: u32, members: &[ParticipantId]) -> Board {
    let mut board = board(max_users);
    for member in members {
        board
            .admit(*member, admin())
            .unwrap_or_else(|e| panic!("fixture admission: {e}"));
    }
    board
}

/// Initialize tracing for a test binary
///
/// Safe to call from every test; repeated initialization is ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
