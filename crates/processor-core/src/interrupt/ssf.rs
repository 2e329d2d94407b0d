//! Short status field codes, grouped by interrupt class.

/// Reference violation entry types (ssf bits 0-1).
pub mod reference_violation {
    /// GRS location referenced with insufficient processor privilege.
    pub const GRS: u8 = 0;
    /// Storage limits violation.
    pub const STORAGE_LIMITS: u8 = 1;
    /// Read access violation.
    pub const READ_ACCESS: u8 = 2;
    /// Write access violation.
    pub const WRITE_ACCESS: u8 = 3;
}

/// Addressing exception codes.
pub mod addressing_exception {
    /// Fatal addressing exception.
    pub const FATAL: u8 = 0o00;
    /// G-bit set in gate bank descriptor.
    pub const GATE_G_BIT_SET: u8 = 0o01;
    /// Enter access denied by gate BD or gate, or queuing access denied.
    pub const ENTER_ACCESS_DENIED: u8 = 0o02;
    /// Invalid source L,BDI or BDT limit error.
    pub const INVALID_SOURCE_LBDI: u8 = 0o03;
    /// Gate bank boundary violation or gate offset outside gate BD limits.
    pub const GATE_BANK_BOUNDARY_VIOLATION: u8 = 0o04;
    /// Invalid IS value.
    pub const INVALID_IS_VALUE: u8 = 0o05;
    /// GOTO inhibit set in gate.
    pub const GOTO_INHIBIT: u8 = 0o06;
    /// General queuing instruction violation.
    pub const GENERAL_QUEUING_VIOLATION: u8 = 0o07;
    /// MaxCount exceeded on ENQ/ENQF.
    pub const MAX_COUNT_ENQ: u8 = 0o10;
    /// G-bit set in indirect bank descriptor.
    pub const INDIRECT_G_BIT_SET: u8 = 0o11;
    /// Inactive queue BD list empty on DEQ/DEQW.
    pub const INACTIVE_QUEUE_BD_LIST_EMPTY: u8 = 0o13;
    /// Update in progress set in queue structure.
    pub const UPDATE_IN_PROGRESS: u8 = 0o14;
    /// Queue bank repository full.
    pub const QUEUE_BANK_REPOSITORY_FULL: u8 = 0o15;
    /// Bank descriptor type invalid.
    pub const BD_TYPE_INVALID: u8 = 0o16;
    /// Access denied by postern or data expanse.
    pub const ACCESS_DENIED_POSTERN_OR_DATA_EXPANSE: u8 = 0o17;
}

/// RCS/generic stack codes.
pub mod rcs_generic_stack {
    /// Stack overflow.
    pub const OVERFLOW: u8 = 0;
    /// Stack underflow.
    pub const UNDERFLOW: u8 = 1;
    /// Base register reported when the return control stack itself faults.
    pub const RCS_BASE_REGISTER: u8 = 25;
}

/// Invalid instruction codes.
///
/// Several distinct conditions share code 0.
pub mod invalid_instruction {
    /// Undefined function code, directly or as an EXR target.
    pub const BAD_FUNCTION_CODE: u8 = 0;
    /// LBJ/LIJ/LDJ uses X0.
    pub const X0_LINKAGE: u8 = 0;
    /// LBU uses B0 or B1.
    pub const LBU_USES_B0_OR_B1: u8 = 0;
    /// LBUD uses B0.
    pub const LBUD_USES_B0: u8 = 0;
    /// Insufficient processor privilege.
    pub const BAD_PP: u8 = 1;
    /// EXR target invalid.
    pub const EXR_INVALID_TARGET: u8 = 3;
}
