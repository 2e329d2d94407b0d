//! Concrete interrupt records and their status-word encodings.
//!
//! Constructors mask every scalar to its field width and never reject input.

use super::class::InterruptClass;
use crate::fields::{mask_to_width, FieldSpec};
use crate::word::Word36;

const REFERENCE_VIOLATION_ENTRY_TYPE_SHIFT: u32 = 4;
const REFERENCE_VIOLATION_ENTRY_TYPE_BITS: u32 = 2;
const REFERENCE_VIOLATION_FETCH_BIT: u8 = 0o01;

/// ISW1 source bank level.
pub const ISW1_SOURCE_LEVEL: FieldSpec = FieldSpec::new(1, 0, 3);
/// ISW1 source bank descriptor index.
pub const ISW1_SOURCE_BDI: FieldSpec = FieldSpec::new(1, 3, 15);
/// ISW0 base register causing a stack fault.
pub const ISW0_BASE_REGISTER: FieldSpec = FieldSpec::new(0, 0, 6);
/// ISW0 relative address of a stack fault.
pub const ISW0_RELATIVE_ADDRESS: FieldSpec = FieldSpec::new(0, 12, 24);

/// Class 8 reference violation.
///
/// ssf bits 0-1 hold the entry type, bit 5 is set for an instruction fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "ReferenceViolationFields", into = "ReferenceViolationFields")
)]
pub struct ReferenceViolation {
    short_status_field: u8,
}

impl ReferenceViolation {
    /// Interrupt class of this record.
    pub const CLASS: InterruptClass = InterruptClass::ReferenceViolation;

    /// Builds the record; `entry_type` is truncated to 2 bits.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(entry_type: u8, fetch_operation: bool) -> Self {
        let mut ssf = (mask_to_width(entry_type as u64, REFERENCE_VIOLATION_ENTRY_TYPE_BITS)
            as u8)
            << REFERENCE_VIOLATION_ENTRY_TYPE_SHIFT;
        if fetch_operation {
            ssf |= REFERENCE_VIOLATION_FETCH_BIT;
        }
        Self {
            short_status_field: ssf,
        }
    }

    /// Entry type recorded in the ssf.
    #[must_use]
    pub const fn entry_type(self) -> u8 {
        self.short_status_field >> REFERENCE_VIOLATION_ENTRY_TYPE_SHIFT
    }

    /// Whether the violation happened during an instruction fetch.
    #[must_use]
    pub const fn fetch_operation(self) -> bool {
        self.short_status_field & REFERENCE_VIOLATION_FETCH_BIT != 0
    }

    /// Short status field.
    #[must_use]
    pub const fn short_status_field(self) -> u8 {
        self.short_status_field
    }
}

/// Class 9 addressing exception.
///
/// ISW1 carries the source bank level and BDI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "AddressingExceptionFields", into = "AddressingExceptionFields")
)]
pub struct AddressingException {
    short_status_field: u8,
    status_word1: Word36,
}

impl AddressingException {
    /// Interrupt class of this record.
    pub const CLASS: InterruptClass = InterruptClass::AddressingException;

    /// Builds the record. The ssf is kept as given; level and BDI are masked
    /// to 3 and 15 bits.
    #[must_use]
    pub const fn new(
        short_status_field: u8,
        source_bank_level: u8,
        source_bank_descriptor_index: u16,
    ) -> Self {
        let isw1 = ISW1_SOURCE_LEVEL.insert(Word36::ZERO, source_bank_level as u64);
        let isw1 = ISW1_SOURCE_BDI.insert(isw1, source_bank_descriptor_index as u64);
        Self {
            short_status_field,
            status_word1: isw1,
        }
    }

    /// Source bank level from ISW1.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn source_bank_level(self) -> u8 {
        ISW1_SOURCE_LEVEL.extract(self.status_word1) as u8
    }

    /// Source bank descriptor index from ISW1.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn source_bank_descriptor_index(self) -> u16 {
        ISW1_SOURCE_BDI.extract(self.status_word1) as u16
    }

    /// Short status field.
    #[must_use]
    pub const fn short_status_field(self) -> u8 {
        self.short_status_field
    }

    /// Interrupt status word 1.
    #[must_use]
    pub const fn status_word1(self) -> Word36 {
        self.status_word1
    }
}

/// Class 11 RCS or generic stack underflow/overflow.
///
/// ISW0 bits 0-5 hold the faulting base register (25 for the RCS), bits
/// 12-35 the relative address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "RcsGenericStackFields", into = "RcsGenericStackFields")
)]
pub struct RcsGenericStackUnderOverflow {
    short_status_field: u8,
    status_word0: Word36,
}

impl RcsGenericStackUnderOverflow {
    /// Interrupt class of this record.
    pub const CLASS: InterruptClass = InterruptClass::RcsGenericStackUnderOverflow;

    /// Builds the record. The ssf is kept as given; the base register is
    /// masked to 6 bits and the relative address to 24.
    #[must_use]
    pub const fn new(short_status_field: u8, base_register: u8, relative_address: u32) -> Self {
        let isw0 = ISW0_BASE_REGISTER.insert(Word36::ZERO, base_register as u64);
        let isw0 = ISW0_RELATIVE_ADDRESS.insert(isw0, relative_address as u64);
        Self {
            short_status_field,
            status_word0: isw0,
        }
    }

    /// Base register from ISW0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn base_register(self) -> u8 {
        ISW0_BASE_REGISTER.extract(self.status_word0) as u8
    }

    /// Relative address from ISW0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn relative_address(self) -> u32 {
        ISW0_RELATIVE_ADDRESS.extract(self.status_word0) as u32
    }

    /// Short status field.
    #[must_use]
    pub const fn short_status_field(self) -> u8 {
        self.short_status_field
    }

    /// Interrupt status word 0.
    #[must_use]
    pub const fn status_word0(self) -> Word36 {
        self.status_word0
    }
}

/// Class 14 invalid instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct InvalidInstruction {
    short_status_field: u8,
}

impl InvalidInstruction {
    /// Interrupt class of this record.
    pub const CLASS: InterruptClass = InterruptClass::InvalidInstruction;

    /// Builds the record with the ssf as given.
    #[must_use]
    pub const fn new(short_status_field: u8) -> Self {
        Self { short_status_field }
    }

    /// Short status field.
    #[must_use]
    pub const fn short_status_field(self) -> u8 {
        self.short_status_field
    }
}

// Serialized forms carry constructor arguments, so deserializing re-applies
// the field masks.

#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Deserialize, serde::Serialize)]
struct ReferenceViolationFields {
    entry_type: u8,
    fetch_operation: bool,
}

#[cfg(feature = "serde")]
impl From<ReferenceViolationFields> for ReferenceViolation {
    fn from(fields: ReferenceViolationFields) -> Self {
        Self::new(fields.entry_type, fields.fetch_operation)
    }
}

#[cfg(feature = "serde")]
impl From<ReferenceViolation> for ReferenceViolationFields {
    fn from(record: ReferenceViolation) -> Self {
        Self {
            entry_type: record.entry_type(),
            fetch_operation: record.fetch_operation(),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Deserialize, serde::Serialize)]
struct AddressingExceptionFields {
    short_status_field: u8,
    source_bank_level: u8,
    source_bank_descriptor_index: u16,
}

#[cfg(feature = "serde")]
impl From<AddressingExceptionFields> for AddressingException {
    fn from(fields: AddressingExceptionFields) -> Self {
        Self::new(
            fields.short_status_field,
            fields.source_bank_level,
            fields.source_bank_descriptor_index,
        )
    }
}

#[cfg(feature = "serde")]
impl From<AddressingException> for AddressingExceptionFields {
    fn from(record: AddressingException) -> Self {
        Self {
            short_status_field: record.short_status_field(),
            source_bank_level: record.source_bank_level(),
            source_bank_descriptor_index: record.source_bank_descriptor_index(),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Deserialize, serde::Serialize)]
struct RcsGenericStackFields {
    short_status_field: u8,
    base_register: u8,
    relative_address: u32,
}

#[cfg(feature = "serde")]
impl From<RcsGenericStackFields> for RcsGenericStackUnderOverflow {
    fn from(fields: RcsGenericStackFields) -> Self {
        Self::new(
            fields.short_status_field,
            fields.base_register,
            fields.relative_address,
        )
    }
}

#[cfg(feature = "serde")]
impl From<RcsGenericStackUnderOverflow> for RcsGenericStackFields {
    fn from(record: RcsGenericStackUnderOverflow) -> Self {
        Self {
            short_status_field: record.short_status_field(),
            base_register: record.base_register(),
            relative_address: record.relative_address(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AddressingException, InvalidInstruction, RcsGenericStackUnderOverflow, ReferenceViolation,
    };
    use crate::interrupt::ssf;

    #[test]
    fn reference_violation_ssf_packs_entry_type_and_fetch() {
        assert_eq!(ReferenceViolation::new(3, true).short_status_field(), 0b11_0001);
        assert_eq!(ReferenceViolation::new(0, false).short_status_field(), 0);
        assert_eq!(
            ReferenceViolation::new(ssf::reference_violation::READ_ACCESS, false)
                .short_status_field(),
            0b10_0000
        );
    }

    #[test]
    fn reference_violation_masks_wide_entry_type() {
        let rv = ReferenceViolation::new(0b1111_1101, false);
        assert_eq!(rv.entry_type(), 0b01);
        assert!(!rv.fetch_operation());
        assert_eq!(rv.short_status_field(), 0b01_0000);
    }

    #[test]
    fn addressing_exception_packs_source_bank_into_isw1() {
        let ae = AddressingException::new(ssf::addressing_exception::GOTO_INHIBIT, 5, 0x7FFF);
        let isw1 = ae.status_word1().value();
        assert_eq!(isw1 >> 33, 0b101);
        assert_eq!((isw1 >> 18) & 0x7FFF, 0x7FFF);
        assert_eq!(isw1 & 0o777_777, 0);
        assert_eq!(ae.source_bank_level(), 5);
        assert_eq!(ae.source_bank_descriptor_index(), 0x7FFF);
        assert_eq!(ae.short_status_field(), 0o06);
    }

    #[test]
    fn addressing_exception_masks_level_and_bdi() {
        let ae = AddressingException::new(0, 0xFF, 0xFFFF);
        assert_eq!(ae.source_bank_level(), 7);
        assert_eq!(ae.source_bank_descriptor_index(), 0x7FFF);
        assert_eq!(ae.status_word1().value() & 0o777_777, 0);
    }

    #[test]
    fn rcs_fault_places_base_register_in_top_six_bits() {
        let rcs = RcsGenericStackUnderOverflow::new(
            ssf::rcs_generic_stack::UNDERFLOW,
            ssf::rcs_generic_stack::RCS_BASE_REGISTER,
            0,
        );
        assert_eq!(rcs.status_word0().value(), 25 << 30);
        assert_eq!(rcs.base_register(), 25);
        assert_eq!(rcs.relative_address(), 0);
        assert_eq!(rcs.short_status_field(), 1);
    }

    #[test]
    fn rcs_fault_masks_base_register_and_relative_address() {
        let rcs = RcsGenericStackUnderOverflow::new(0, 0xFF, u32::MAX);
        assert_eq!(rcs.base_register(), 0o77);
        assert_eq!(rcs.relative_address(), 0o77_777_777);
        assert_eq!(rcs.status_word0().value(), 0o770_077_777_777);
    }

    #[test]
    fn invalid_instruction_keeps_ssf() {
        let ii = InvalidInstruction::new(ssf::invalid_instruction::EXR_INVALID_TARGET);
        assert_eq!(ii.short_status_field(), 3);
    }
}
