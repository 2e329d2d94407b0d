//! The 36-bit storage word.
//!
//! Architectural bit numbering runs from bit 0 (most significant) to bit 35
//! (least significant), matching the hardware reference manuals.

use std::fmt;

/// Number of significant bits in a storage word.
pub const WORD_BITS: u32 = 36;

/// A 36-bit unsigned storage word.
///
/// Constructors truncate to the low 36 bits; nothing here fails on overflow.
/// Deserialization goes through the same truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(from = "u64", into = "u64"))]
pub struct Word36(u64);

impl Word36 {
    /// Mask of the 36 significant bits.
    pub const MASK: u64 = 0o777_777_777_777;
    /// The all-zero word.
    pub const ZERO: Self = Self(0);
    /// Number of significant bits.
    pub const BITS: u32 = WORD_BITS;

    /// Builds a word from the low 36 bits of `value`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value & Self::MASK)
    }

    /// Returns the raw 36-bit value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns `true` when architectural bit `bit` (0 = MSB) is set.
    ///
    /// Bits outside `0..=35` are never set.
    #[must_use]
    pub const fn is_bit_set(self, bit: u32) -> bool {
        if bit >= WORD_BITS {
            return false;
        }
        (self.0 >> (WORD_BITS - 1 - bit)) & 1 != 0
    }
}

impl From<Word36> for u64 {
    fn from(word: Word36) -> Self {
        word.0
    }
}

impl From<u64> for Word36 {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<u32> for Word36 {
    fn from(value: u32) -> Self {
        Self(u64::from(value))
    }
}

impl fmt::Display for Word36 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:012o}", self.0)
    }
}
