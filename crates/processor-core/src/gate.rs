//! Gate descriptor decoding.
//!
//! A gate is a 5-word protected entry point into another bank. Decoding is a
//! pure shift/mask pass over the words; checking the lock against a caller's
//! key or the target address against bank limits belongs to the consumer.

use thiserror::Error;

use crate::fields::FieldSpec;
use crate::values::{AccessKey, AccessLock, AccessPermissions, DesignatorRegister};
use crate::word::Word36;

/// Number of storage words in a gate descriptor.
pub const GATE_WORD_COUNT: usize = 5;

/// Number of named fields in [`GATE_FIELD_TABLE`].
pub const GATE_FIELD_COUNT: usize = 17;

/// Offset added to the basic mode base register field to form a register index.
pub const BASIC_MODE_BASE_REGISTER_OFFSET: u8 = 12;

/// Named gate fields. Discriminants index [`GATE_FIELD_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum GateField {
    /// GAP enter bit.
    GeneralAccessEnter = 0,
    /// SAP enter bit.
    SpecialAccessEnter = 1,
    /// Library gate flag.
    LibFlag = 2,
    /// GOTO inhibit.
    GotoInhibit = 3,
    /// Designator bits are not installed on transfer.
    DesignatorInhibit = 4,
    /// Access key is not installed on transfer.
    AccessKeyInhibit = 5,
    /// Latent parameter 0 is not installed on transfer.
    LatentParameter0Inhibit = 6,
    /// Latent parameter 1 is not installed on transfer.
    LatentParameter1Inhibit = 7,
    /// Access lock (ring + domain).
    AccessLock = 8,
    /// Target level.
    TargetLevel = 9,
    /// Target bank descriptor index.
    TargetBdi = 10,
    /// Target offset.
    TargetOffset = 11,
    /// Basic mode base register, less 12.
    BasicModeBaseRegister = 12,
    /// Designator bits DB12-DB17.
    DesignatorBits = 13,
    /// Access key installed on transfer.
    NewAccessKey = 14,
    /// Latent parameter 0 value.
    LatentParameterValue0 = 15,
    /// Latent parameter 1 value.
    LatentParameterValue1 = 16,
}

/// Single source-of-truth gate field map, in architectural bit numbering.
pub const GATE_FIELD_TABLE: [(GateField, FieldSpec); GATE_FIELD_COUNT] = [
    (GateField::GeneralAccessEnter, FieldSpec::new(0, 0, 1)),
    (GateField::SpecialAccessEnter, FieldSpec::new(0, 3, 1)),
    (GateField::LibFlag, FieldSpec::new(0, 12, 1)),
    (GateField::GotoInhibit, FieldSpec::new(0, 13, 1)),
    (GateField::DesignatorInhibit, FieldSpec::new(0, 14, 1)),
    (GateField::AccessKeyInhibit, FieldSpec::new(0, 15, 1)),
    // LP0I has no documented position; bit 16 follows the bit 12-17 flag run.
    (GateField::LatentParameter0Inhibit, FieldSpec::new(0, 16, 1)),
    (GateField::LatentParameter1Inhibit, FieldSpec::new(0, 17, 1)),
    (GateField::AccessLock, FieldSpec::new(0, 18, 18)),
    (GateField::TargetLevel, FieldSpec::new(1, 0, 3)),
    (GateField::TargetBdi, FieldSpec::new(1, 3, 15)),
    (GateField::TargetOffset, FieldSpec::new(1, 18, 18)),
    (GateField::BasicModeBaseRegister, FieldSpec::new(2, 10, 2)),
    (GateField::DesignatorBits, FieldSpec::new(2, 12, 6)),
    (GateField::NewAccessKey, FieldSpec::new(2, 18, 18)),
    (GateField::LatentParameterValue0, FieldSpec::whole_word(3)),
    (GateField::LatentParameterValue1, FieldSpec::whole_word(4)),
];

impl GateField {
    /// Bit range of this field.
    #[must_use]
    pub const fn spec(self) -> FieldSpec {
        GATE_FIELD_TABLE[self as usize].1
    }
}

/// Caller-contract violations when decoding a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GateDecodeError {
    /// Fewer than [`GATE_WORD_COUNT`] words were supplied.
    #[error("gate buffer holds {len} words, at least {required} required", required = GATE_WORD_COUNT)]
    BufferTooShort {
        /// Length of the rejected buffer.
        len: usize,
    },
}

/// Level/BDI/offset triple naming the gate's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct TargetAddress {
    /// Bank level (3 bits).
    pub level: u8,
    /// Bank descriptor index (15 bits).
    pub bdi: u16,
    /// Offset within the bank (18 bits).
    pub offset: u32,
}

/// Decoded gate descriptor.
///
/// Serializes as its five storage words, so deserialized gates are decoded
/// the same way as fresh ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(from = "[Word36; 5]", into = "[Word36; 5]"))]
#[allow(clippy::struct_excessive_bools)]
pub struct Gate {
    general_access_permissions: AccessPermissions,
    special_access_permissions: AccessPermissions,
    lib_flag: bool,
    goto_inhibit: bool,
    designator_inhibit: bool,
    access_key_inhibit: bool,
    latent_parameter0_inhibit: bool,
    latent_parameter1_inhibit: bool,
    access_lock: AccessLock,
    target_level: u8,
    target_bdi: u16,
    target_offset: u32,
    basic_mode_base_register: u8,
    designator_register_value: DesignatorRegister,
    new_access_key: AccessKey,
    latent_parameter_value0: Word36,
    latent_parameter_value1: Word36,
}

const fn read(words: &[Word36; GATE_WORD_COUNT], field: GateField) -> u64 {
    let spec = field.spec();
    spec.extract(words[spec.word()])
}

const fn read_flag(words: &[Word36; GATE_WORD_COUNT], field: GateField) -> bool {
    let spec = field.spec();
    spec.flag(words[spec.word()])
}

/// Decodes the first [`GATE_WORD_COUNT`] words of `buffer` into a [`Gate`].
///
/// # Errors
///
/// Returns [`GateDecodeError::BufferTooShort`] when `buffer` holds fewer than
/// five words. No word is read in that case.
pub fn decode_gate(buffer: &[Word36]) -> Result<Gate, GateDecodeError> {
    Gate::decode(buffer)
}

impl Gate {
    /// See [`decode_gate`].
    ///
    /// # Errors
    ///
    /// Returns [`GateDecodeError::BufferTooShort`] for buffers shorter than
    /// five words.
    pub fn decode(buffer: &[Word36]) -> Result<Self, GateDecodeError> {
        let Some(words) = buffer.first_chunk::<GATE_WORD_COUNT>() else {
            return Err(GateDecodeError::BufferTooShort { len: buffer.len() });
        };
        Ok(Self::from_words(words))
    }

    /// Decodes exactly five words.
    ///
    /// Only the enter bit of each permission set is carried by a gate; read and
    /// write are always reported as not granted.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_words(words: &[Word36; GATE_WORD_COUNT]) -> Self {
        let designator = GateField::DesignatorBits.spec();
        Self {
            general_access_permissions: AccessPermissions::new(
                read_flag(words, GateField::GeneralAccessEnter),
                false,
                false,
            ),
            special_access_permissions: AccessPermissions::new(
                read_flag(words, GateField::SpecialAccessEnter),
                false,
                false,
            ),
            lib_flag: read_flag(words, GateField::LibFlag),
            goto_inhibit: read_flag(words, GateField::GotoInhibit),
            designator_inhibit: read_flag(words, GateField::DesignatorInhibit),
            access_key_inhibit: read_flag(words, GateField::AccessKeyInhibit),
            latent_parameter0_inhibit: read_flag(words, GateField::LatentParameter0Inhibit),
            latent_parameter1_inhibit: read_flag(words, GateField::LatentParameter1Inhibit),
            access_lock: AccessLock::from_composite(read(words, GateField::AccessLock)),
            target_level: read(words, GateField::TargetLevel) as u8,
            target_bdi: read(words, GateField::TargetBdi) as u16,
            target_offset: read(words, GateField::TargetOffset) as u32,
            basic_mode_base_register: read(words, GateField::BasicModeBaseRegister) as u8,
            designator_register_value: DesignatorRegister::from_composite(
                designator.extract_in_place(words[designator.word()]),
            ),
            new_access_key: AccessKey::from_composite(read(words, GateField::NewAccessKey)),
            latent_parameter_value0: Word36::new(read(words, GateField::LatentParameterValue0)),
            latent_parameter_value1: Word36::new(read(words, GateField::LatentParameterValue1)),
        }
    }

    /// Re-encodes the decoded fields into five storage words.
    ///
    /// Bits outside [`GATE_FIELD_TABLE`] come back as zero, so
    /// `Gate::from_words(&gate.to_words()) == gate` for every gate.
    #[must_use]
    pub fn to_words(&self) -> [Word36; GATE_WORD_COUNT] {
        let mut words = [Word36::ZERO; GATE_WORD_COUNT];
        let fields = [
            (
                GateField::GeneralAccessEnter,
                u64::from(self.general_access_permissions.can_enter()),
            ),
            (
                GateField::SpecialAccessEnter,
                u64::from(self.special_access_permissions.can_enter()),
            ),
            (GateField::LibFlag, u64::from(self.lib_flag)),
            (GateField::GotoInhibit, u64::from(self.goto_inhibit)),
            (GateField::DesignatorInhibit, u64::from(self.designator_inhibit)),
            (GateField::AccessKeyInhibit, u64::from(self.access_key_inhibit)),
            (
                GateField::LatentParameter0Inhibit,
                u64::from(self.latent_parameter0_inhibit),
            ),
            (
                GateField::LatentParameter1Inhibit,
                u64::from(self.latent_parameter1_inhibit),
            ),
            (GateField::AccessLock, self.access_lock.composite()),
            (GateField::TargetLevel, u64::from(self.target_level)),
            (GateField::TargetBdi, u64::from(self.target_bdi)),
            (GateField::TargetOffset, u64::from(self.target_offset)),
            (
                GateField::BasicModeBaseRegister,
                u64::from(self.basic_mode_base_register),
            ),
            (
                GateField::DesignatorBits,
                self.designator_register_value.composite().value()
                    >> GateField::DesignatorBits.spec().shift(),
            ),
            (GateField::NewAccessKey, self.new_access_key.composite()),
            (
                GateField::LatentParameterValue0,
                self.latent_parameter_value0.value(),
            ),
            (
                GateField::LatentParameterValue1,
                self.latent_parameter_value1.value(),
            ),
        ];
        for (field, value) in fields {
            let spec = field.spec();
            words[spec.word()] = spec.insert(words[spec.word()], value);
        }
        words
    }

    /// General access permissions.
    #[must_use]
    pub const fn general_access_permissions(&self) -> AccessPermissions {
        self.general_access_permissions
    }

    /// Special access permissions.
    #[must_use]
    pub const fn special_access_permissions(&self) -> AccessPermissions {
        self.special_access_permissions
    }

    /// Library gate flag.
    #[must_use]
    pub const fn lib_flag(&self) -> bool {
        self.lib_flag
    }

    /// GOTO inhibit.
    #[must_use]
    pub const fn goto_inhibit(&self) -> bool {
        self.goto_inhibit
    }

    /// Designator bit installation inhibit.
    #[must_use]
    pub const fn designator_inhibit(&self) -> bool {
        self.designator_inhibit
    }

    /// Access key installation inhibit.
    #[must_use]
    pub const fn access_key_inhibit(&self) -> bool {
        self.access_key_inhibit
    }

    /// Latent parameter 0 installation inhibit.
    #[must_use]
    pub const fn latent_parameter0_inhibit(&self) -> bool {
        self.latent_parameter0_inhibit
    }

    /// Latent parameter 1 installation inhibit.
    #[must_use]
    pub const fn latent_parameter1_inhibit(&self) -> bool {
        self.latent_parameter1_inhibit
    }

    /// Lock compared against the caller's access key.
    #[must_use]
    pub const fn access_lock(&self) -> AccessLock {
        self.access_lock
    }

    /// Target level.
    #[must_use]
    pub const fn target_level(&self) -> u8 {
        self.target_level
    }

    /// Target bank descriptor index.
    #[must_use]
    pub const fn target_bdi(&self) -> u16 {
        self.target_bdi
    }

    /// Target offset.
    #[must_use]
    pub const fn target_offset(&self) -> u32 {
        self.target_offset
    }

    /// Target level, BDI and offset together.
    #[must_use]
    pub const fn target(&self) -> TargetAddress {
        TargetAddress {
            level: self.target_level,
            bdi: self.target_bdi,
            offset: self.target_offset,
        }
    }

    /// Raw 2-bit basic mode base register field.
    #[must_use]
    pub const fn basic_mode_base_register(&self) -> u8 {
        self.basic_mode_base_register
    }

    /// Base register selected for basic mode (B12-B15).
    #[must_use]
    pub const fn basic_mode_base_register_index(&self) -> u8 {
        self.basic_mode_base_register + BASIC_MODE_BASE_REGISTER_OFFSET
    }

    /// Designator bits DB12-DB17 to install on transfer.
    #[must_use]
    pub const fn designator_register_value(&self) -> DesignatorRegister {
        self.designator_register_value
    }

    /// Access key to install on transfer.
    #[must_use]
    pub const fn new_access_key(&self) -> AccessKey {
        self.new_access_key
    }

    /// Latent parameter 0, passed through uninterpreted.
    #[must_use]
    pub const fn latent_parameter_value0(&self) -> Word36 {
        self.latent_parameter_value0
    }

    /// Latent parameter 1, passed through uninterpreted.
    #[must_use]
    pub const fn latent_parameter_value1(&self) -> Word36 {
        self.latent_parameter_value1
    }
}

impl From<[Word36; GATE_WORD_COUNT]> for Gate {
    fn from(words: [Word36; GATE_WORD_COUNT]) -> Self {
        Self::from_words(&words)
    }
}

impl From<Gate> for [Word36; GATE_WORD_COUNT] {
    fn from(gate: Gate) -> Self {
        gate.to_words()
    }
}
