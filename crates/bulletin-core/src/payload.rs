//! Message payloads and their validity rules
//!
//! A payload is a 32-byte little-endian value. The low six bits form a flag
//! byte with three independent rules; everything above bit 5 is free content.
//! Validity is a pure property of the payload and never consults board state.

use crate::errors::{BulletinError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mask selecting the six flag bits
const FLAG_MASK: u8 = 0x3f;

/// Message payload
///
/// 32 bytes, interpreted as a little-endian value, wide enough for any
/// 254-bit-or-wider field element a caller might carry. Byte 0 holds the
/// flag bits in positions 0..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Payload([u8; 32]);

impl Payload {
    /// Create a payload from raw little-endian bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create a payload from a u64 value (little-endian, upper bytes zero)
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        Self(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The six flag bits, from the low bits of byte 0
    pub fn flag_bits(&self) -> u8 {
        self.0[0] & FLAG_MASK
    }

    /// Decode the flag bits into their named view
    pub fn flags(&self) -> Flags {
        Flags::from_bits(self.flag_bits())
    }

    /// Check the payload against all validity rules
    ///
    /// Rejected payloads must never reach the action log; callers check this
    /// before any fold or append.
    pub fn validate(&self) -> Result<()> {
        self.flags()
            .check()
            .map_err(|rule| BulletinError::InvalidPayload { rule })
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "payload:{}", hex::encode(self.0))
    }
}

/// Decoded view of a payload's six flag bits
///
/// Field order matches the wire format, least significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    /// Bit 0: when set, all other flags must be clear
    pub exclusive: bool,
    /// Bit 1: when set, requires `dependency_target`
    pub dependent: bool,
    /// Bit 2: target of the dependency rule
    pub dependency_target: bool,
    /// Bit 3: when set, both pair members must be clear
    pub paired: bool,
    /// Bit 4: first member of the exclusion pair
    pub pair_member_a: bool,
    /// Bit 5: second member of the exclusion pair
    pub pair_member_b: bool,
}

impl Flags {
    /// Decode from a flag byte (bits above position 5 are ignored)
    pub fn from_bits(bits: u8) -> Self {
        Self {
            exclusive: bits & 0b00_0001 != 0,
            dependent: bits & 0b00_0010 != 0,
            dependency_target: bits & 0b00_0100 != 0,
            paired: bits & 0b00_1000 != 0,
            pair_member_a: bits & 0b01_0000 != 0,
            pair_member_b: bits & 0b10_0000 != 0,
        }
    }

    /// Check all three rules, reporting the first violated one
    ///
    /// Rules are independent; a flag byte must satisfy all of them.
    pub fn check(&self) -> std::result::Result<(), ValidityRule> {
        if self.exclusive
            && (self.dependent
                || self.dependency_target
                || self.paired
                || self.pair_member_a
                || self.pair_member_b)
        {
            return Err(ValidityRule::ExclusiveFlag);
        }
        if self.dependent && !self.dependency_target {
            return Err(ValidityRule::DependencyPair);
        }
        if self.paired && (self.pair_member_a || self.pair_member_b) {
            return Err(ValidityRule::MutualExclusionPair);
        }
        Ok(())
    }
}

/// The validity rule a payload violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidityRule {
    /// Bit 0 set together with any other flag
    ExclusiveFlag,
    /// Bit 1 set without bit 2
    DependencyPair,
    /// Bit 3 set together with bit 4 or bit 5
    MutualExclusionPair,
}

impl fmt::Display for ValidityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidityRule::ExclusiveFlag => write!(f, "exclusive-flag rule"),
            ValidityRule::DependencyPair => write!(f, "dependency rule"),
            ValidityRule::MutualExclusionPair => write!(f, "mutual-exclusion rule"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_flags_clear_is_valid() {
        assert!(Payload::from_u64(0).validate().is_ok());
    }

    #[test]
    fn content_above_flag_bits_is_unconstrained() {
        // Bits 6 and 7 of byte 0, and all higher bytes, carry content only
        let mut bytes = [0xffu8; 32];
        bytes[0] = 0b1100_0000;
        assert!(Payload::from_bytes(bytes).validate().is_ok());
    }

    #[test]
    fn exclusive_bit_with_others_set_is_invalid() {
        // 0xff and 0x3f both have bit 0 set alongside bits 1..=5
        assert_eq!(
            Payload::from_u64(0xff).validate(),
            Err(BulletinError::InvalidPayload {
                rule: ValidityRule::ExclusiveFlag
            })
        );
        assert_eq!(
            Payload::from_u64(0x3f).validate(),
            Err(BulletinError::InvalidPayload {
                rule: ValidityRule::ExclusiveFlag
            })
        );
    }

    #[test]
    fn exclusive_bit_alone_is_valid() {
        assert!(Payload::from_u64(0b00_0001).validate().is_ok());
    }

    #[test]
    fn dependency_satisfied_is_valid() {
        // bit1 and bit2 set: 0b000110
        assert!(Payload::from_u64(6).validate().is_ok());
    }

    #[test]
    fn dependency_unsatisfied_is_invalid() {
        assert_eq!(
            Payload::from_u64(0b00_0010).validate(),
            Err(BulletinError::InvalidPayload {
                rule: ValidityRule::DependencyPair
            })
        );
    }

    #[test]
    fn pair_conflict_is_invalid() {
        // bit3 with bit4: 0b011000 = 24
        assert_eq!(
            Payload::from_u64(24).validate(),
            Err(BulletinError::InvalidPayload {
                rule: ValidityRule::MutualExclusionPair
            })
        );
        // bit3 with bit5
        assert_eq!(
            Payload::from_u64(0b10_1000).validate(),
            Err(BulletinError::InvalidPayload {
                rule: ValidityRule::MutualExclusionPair
            })
        );
    }

    #[test]
    fn pair_bit_alone_is_valid() {
        assert!(Payload::from_u64(0b00_1000).validate().is_ok());
        // pair members without bit3 are also fine
        assert!(Payload::from_u64(0b11_0000).validate().is_ok());
    }

    #[test]
    fn from_u64_is_little_endian() {
        let payload = Payload::from_u64(0x0102);
        assert_eq!(payload.as_bytes()[0], 0x02);
        assert_eq!(payload.as_bytes()[1], 0x01);
        assert_eq!(payload.flag_bits(), 0x02);
    }
}
