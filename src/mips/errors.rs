use thiserror::Error;

/// Errors produced while turning a line of text into an instruction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Malformed text: wrong token count, bad operand, unknown mnemonic.
    #[error("Parameter error: {0}")]
    Parameter(String),

    /// A register number outside `$0..$31`, saturated when it overflows `i64`.
    #[error("Register error: ${0} is not a register")]
    Register(i64),
}

/// Errors produced while applying an instruction to the machine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// A raw register index outside `0..32`.
    #[error("Register error: no register {0}")]
    Register(usize),

    /// Data address outside memory, or a jump/branch target outside the address space.
    #[error("Memory error: invalid address {0}")]
    Memory(i64),

    /// Signed 32-bit overflow caught before the result was written.
    #[error("Overflow: {0} overflowed, destination left untouched")]
    Overflow(&'static str),
}

impl ExecutionError {
    /// Overflow is reported but the step still counts as taken.
    pub fn is_warning(&self) -> bool {
        matches!(self, ExecutionError::Overflow(_))
    }
}

/// Errors produced while packing an instruction into a machine word.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Encode error: immediate {0} does not fit in 16 bits")]
    ImmediateRange(i32),

    #[error("Encode error: address {0} does not fit in 26 bits")]
    AddressRange(u32),
}

/// Either half of a decode-then-execute step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Execute(#[from] ExecutionError),
}
