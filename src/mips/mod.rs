pub mod arch;
pub mod bounds;
pub mod errors;
pub mod exec;
pub mod instruction;
pub mod machine;
pub mod memory;
pub mod registers;

pub mod decoder;
pub mod encoder;

pub use decoder::decode;
pub use errors::{DecodeError, EncodeError, ExecutionError, StepError};
pub use exec::{execute, step, Step};
pub use instruction::Instruction;
pub use machine::MachineState;
pub use registers::Reg;
