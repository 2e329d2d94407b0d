use crate::fields::FieldSpec;
use crate::word::Word36;

const PROCESSOR_PRIVILEGE: FieldSpec = FieldSpec::new(0, 14, 2);
const BASIC_MODE_ENABLED_BIT: u32 = 16;
const EXEC_REGISTER_SET_SELECTED_BIT: u32 = 17;

/// Designator register contents, kept in architectural bit positions.
///
/// A gate only supplies DB12-DB17; every other bit of a gate-derived value is
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(from = "u64", into = "u64"))]
pub struct DesignatorRegister(Word36);

impl DesignatorRegister {
    /// Wraps a composite value, truncated to 36 bits.
    #[must_use]
    pub const fn from_composite(composite: u64) -> Self {
        Self(Word36::new(composite))
    }

    /// Full register value.
    #[must_use]
    pub const fn composite(self) -> Word36 {
        self.0
    }

    /// Returns `true` when designator bit `db` is set.
    #[must_use]
    pub const fn is_bit_set(self, db: u32) -> bool {
        self.0.is_bit_set(db)
    }

    /// Processor privilege level from DB14-DB15.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn processor_privilege(self) -> u8 {
        PROCESSOR_PRIVILEGE.extract(self.0) as u8
    }

    /// DB16.
    #[must_use]
    pub const fn basic_mode_enabled(self) -> bool {
        self.0.is_bit_set(BASIC_MODE_ENABLED_BIT)
    }

    /// DB17.
    #[must_use]
    pub const fn exec_register_set_selected(self) -> bool {
        self.0.is_bit_set(EXEC_REGISTER_SET_SELECTED_BIT)
    }
}

impl From<u64> for DesignatorRegister {
    fn from(composite: u64) -> Self {
        Self::from_composite(composite)
    }
}

impl From<DesignatorRegister> for u64 {
    fn from(value: DesignatorRegister) -> Self {
        value.0.value()
    }
}
