//! Interrupt taxonomy: class codes, short status fields, and status words.

/// Architected interrupt class codes.
pub mod class;
/// Short status field code constants.
pub mod ssf;
/// Concrete interrupt records.
pub mod variants;

pub use class::{InterruptClass, INTERRUPT_CLASS_COUNT};
pub use variants::{
    AddressingException, InvalidInstruction, RcsGenericStackUnderOverflow, ReferenceViolation,
};

use thiserror::Error;

use crate::word::Word36;

/// An interrupt recognized by the processor.
///
/// The variant set is closed; accessors match exhaustively so a new class
/// cannot be added without deciding each of its status fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Interrupt {
    /// Class 8.
    #[error("reference violation (ssf {:o})", .0.short_status_field())]
    ReferenceViolation(ReferenceViolation),
    /// Class 9.
    #[error(
        "addressing exception (ssf {:o}, source L,BDI {:o},{:o})",
        .0.short_status_field(),
        .0.source_bank_level(),
        .0.source_bank_descriptor_index()
    )]
    AddressingException(AddressingException),
    /// Class 11.
    #[error(
        "RCS/generic stack under/overflow (ssf {:o}, B{})",
        .0.short_status_field(),
        .0.base_register()
    )]
    RcsGenericStackUnderOverflow(RcsGenericStackUnderOverflow),
    /// Class 14.
    #[error("invalid instruction (ssf {:o})", .0.short_status_field())]
    InvalidInstruction(InvalidInstruction),
}

impl Interrupt {
    /// Architected class.
    #[must_use]
    pub const fn class(&self) -> InterruptClass {
        match self {
            Self::ReferenceViolation(_) => ReferenceViolation::CLASS,
            Self::AddressingException(_) => AddressingException::CLASS,
            Self::RcsGenericStackUnderOverflow(_) => RcsGenericStackUnderOverflow::CLASS,
            Self::InvalidInstruction(_) => InvalidInstruction::CLASS,
        }
    }

    /// Short status field.
    #[must_use]
    pub const fn short_status_field(&self) -> u8 {
        match self {
            Self::ReferenceViolation(i) => i.short_status_field(),
            Self::AddressingException(i) => i.short_status_field(),
            Self::RcsGenericStackUnderOverflow(i) => i.short_status_field(),
            Self::InvalidInstruction(i) => i.short_status_field(),
        }
    }

    /// Interrupt status word 0.
    #[must_use]
    pub const fn status_word0(&self) -> Word36 {
        match self {
            Self::RcsGenericStackUnderOverflow(i) => i.status_word0(),
            Self::ReferenceViolation(_)
            | Self::AddressingException(_)
            | Self::InvalidInstruction(_) => Word36::ZERO,
        }
    }

    /// Interrupt status word 1.
    #[must_use]
    pub const fn status_word1(&self) -> Word36 {
        match self {
            Self::AddressingException(i) => i.status_word1(),
            Self::ReferenceViolation(_)
            | Self::RcsGenericStackUnderOverflow(_)
            | Self::InvalidInstruction(_) => Word36::ZERO,
        }
    }

    /// Whether delivery may be deferred. None of the realized classes are.
    #[must_use]
    pub const fn is_deferrable(&self) -> bool {
        match self {
            Self::ReferenceViolation(_)
            | Self::AddressingException(_)
            | Self::RcsGenericStackUnderOverflow(_)
            | Self::InvalidInstruction(_) => false,
        }
    }
}

impl From<ReferenceViolation> for Interrupt {
    fn from(value: ReferenceViolation) -> Self {
        Self::ReferenceViolation(value)
    }
}

impl From<AddressingException> for Interrupt {
    fn from(value: AddressingException) -> Self {
        Self::AddressingException(value)
    }
}

impl From<RcsGenericStackUnderOverflow> for Interrupt {
    fn from(value: RcsGenericStackUnderOverflow) -> Self {
        Self::RcsGenericStackUnderOverflow(value)
    }
}

impl From<InvalidInstruction> for Interrupt {
    fn from(value: InvalidInstruction) -> Self {
        Self::InvalidInstruction(value)
    }
}
