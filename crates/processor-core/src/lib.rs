//! Architected control structures for a 36-bit word-oriented processor.
//!
//! Decodes gate descriptors and builds interrupt records bit-exactly. Both are
//! immutable value objects; nothing here schedules, validates, or delivers.

/// The 36-bit storage word.
pub mod word;
pub use word::{Word36, WORD_BITS};

/// Bit-field descriptors and shared truncation helpers.
pub mod fields;
pub use fields::{mask_to_width, FieldSpec};

/// Access permission, lock/key, and designator value objects.
pub mod values;
pub use values::{
    AccessKey, AccessLock, AccessPermissions, DesignatorRegister, ACCESS_COMPOSITE_BITS,
};

/// Gate descriptor field map and decoder.
pub mod gate;
pub use gate::{
    decode_gate, Gate, GateDecodeError, GateField, TargetAddress,
    BASIC_MODE_BASE_REGISTER_OFFSET, GATE_FIELD_COUNT, GATE_FIELD_TABLE, GATE_WORD_COUNT,
};

/// Interrupt class codes and concrete interrupt records.
pub mod interrupt;
pub use interrupt::{
    AddressingException, Interrupt, InterruptClass, InvalidInstruction,
    RcsGenericStackUnderOverflow, ReferenceViolation, INTERRUPT_CLASS_COUNT,
};

/// Host-facing configuration and trace hooks.
pub mod api;
pub use api::{decode_gate_traced, recognize_interrupt, CoreConfig, TraceEvent, TraceSink};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use serde_json as _;
