//! Foundation types for the bulletin workspace
//!
//! This crate provides the types shared by every bulletin crate: participant
//! identifiers, the message payload with its validity rules, the immutable
//! board configuration, and the error taxonomy.
//!
//! # Architecture
//!
//! - **Identifiers**: opaque participant addresses with exact value equality
//! - **Payloads**: 32-byte values whose low six bits are interpreted as flags
//! - **Config**: admin identity and capacity, fixed at initialization
//! - **Errors**: one structured variant per rejection reason
//!
//! Nothing here depends on the action log; log semantics live in
//! `bulletin-journal`.

pub mod config;
pub mod errors;
pub mod identifiers;
pub mod payload;
pub mod serialization;

pub use config::{BoardConfig, DEFAULT_MAX_USERS};
pub use errors::{BulletinError, Result};
pub use identifiers::ParticipantId;
pub use payload::{Flags, Payload, ValidityRule};
