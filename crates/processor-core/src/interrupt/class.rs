use std::fmt;

/// Number of architected interrupt classes.
pub const INTERRUPT_CLASS_COUNT: usize = 24;

/// Architected interrupt class codes.
///
/// The numbering is sparse and fixed by the hardware; every discriminant is
/// written out literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum InterruptClass {
    /// Class 0.
    HardwareDefault = 0,
    /// Class 1.
    HardwareCheck = 1,
    /// Class 2.
    Diagnostic = 2,
    /// Class 8.
    ReferenceViolation = 8,
    /// Class 9.
    AddressingException = 9,
    /// Class 10.
    TerminalAddressingException = 10,
    /// Class 11.
    RcsGenericStackUnderOverflow = 11,
    /// Class 12.
    Signal = 12,
    /// Class 13.
    TestAndSet = 13,
    /// Class 14.
    InvalidInstruction = 14,
    /// Class 15.
    PageException = 15,
    /// Class 16.
    ArithmeticException = 16,
    /// Class 17.
    DataException = 17,
    /// Class 18.
    OperationTrap = 18,
    /// Class 19.
    Breakpoint = 19,
    /// Class 20.
    QuantumTimer = 20,
    /// Class 23.
    PageZeroed = 23,
    /// Class 24.
    SoftwareBreak = 24,
    /// Class 25.
    JumpHistoryFull = 25,
    /// Class 27.
    DayClock = 27,
    /// Class 28.
    PerformanceMonitoring = 28,
    /// Class 29.
    Ipl = 29,
    /// Class 30.
    UpiInitial = 30,
    /// Class 31.
    UpiNormal = 31,
}

impl InterruptClass {
    /// Every class, in ascending code order.
    pub const ALL: [Self; INTERRUPT_CLASS_COUNT] = [
        Self::HardwareDefault,
        Self::HardwareCheck,
        Self::Diagnostic,
        Self::ReferenceViolation,
        Self::AddressingException,
        Self::TerminalAddressingException,
        Self::RcsGenericStackUnderOverflow,
        Self::Signal,
        Self::TestAndSet,
        Self::InvalidInstruction,
        Self::PageException,
        Self::ArithmeticException,
        Self::DataException,
        Self::OperationTrap,
        Self::Breakpoint,
        Self::QuantumTimer,
        Self::PageZeroed,
        Self::SoftwareBreak,
        Self::JumpHistoryFull,
        Self::DayClock,
        Self::PerformanceMonitoring,
        Self::Ipl,
        Self::UpiInitial,
        Self::UpiNormal,
    ];

    /// Architected class code.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Looks up a class code. Unassigned codes return `None`.
    #[must_use]
    pub const fn from_u8(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::HardwareDefault),
            1 => Some(Self::HardwareCheck),
            2 => Some(Self::Diagnostic),
            8 => Some(Self::ReferenceViolation),
            9 => Some(Self::AddressingException),
            10 => Some(Self::TerminalAddressingException),
            11 => Some(Self::RcsGenericStackUnderOverflow),
            12 => Some(Self::Signal),
            13 => Some(Self::TestAndSet),
            14 => Some(Self::InvalidInstruction),
            15 => Some(Self::PageException),
            16 => Some(Self::ArithmeticException),
            17 => Some(Self::DataException),
            18 => Some(Self::OperationTrap),
            19 => Some(Self::Breakpoint),
            20 => Some(Self::QuantumTimer),
            23 => Some(Self::PageZeroed),
            24 => Some(Self::SoftwareBreak),
            25 => Some(Self::JumpHistoryFull),
            27 => Some(Self::DayClock),
            28 => Some(Self::PerformanceMonitoring),
            29 => Some(Self::Ipl),
            30 => Some(Self::UpiInitial),
            31 => Some(Self::UpiNormal),
            _ => None,
        }
    }

    /// Symbolic name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HardwareDefault => "hardware default",
            Self::HardwareCheck => "hardware check",
            Self::Diagnostic => "diagnostic",
            Self::ReferenceViolation => "reference violation",
            Self::AddressingException => "addressing exception",
            Self::TerminalAddressingException => "terminal addressing exception",
            Self::RcsGenericStackUnderOverflow => "RCS/generic stack under/overflow",
            Self::Signal => "signal",
            Self::TestAndSet => "test and set",
            Self::InvalidInstruction => "invalid instruction",
            Self::PageException => "page exception",
            Self::ArithmeticException => "arithmetic exception",
            Self::DataException => "data exception",
            Self::OperationTrap => "operation trap",
            Self::Breakpoint => "breakpoint",
            Self::QuantumTimer => "quantum timer",
            Self::PageZeroed => "page(s) zeroed",
            Self::SoftwareBreak => "software break",
            Self::JumpHistoryFull => "jump history full",
            Self::DayClock => "day clock",
            Self::PerformanceMonitoring => "performance monitoring",
            Self::Ipl => "initial program load",
            Self::UpiInitial => "UPI initial",
            Self::UpiNormal => "UPI normal",
        }
    }
}

impl fmt::Display for InterruptClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {} ({})", self.as_u8(), self.name())
    }
}
