// mips/arch.rs

/// Words of data memory.
pub const MEMORY_WORDS: usize = 1024;
/// General-purpose registers.
pub const REGISTER_COUNT: usize = 32;
/// Bytes per instruction; the pc moves in these steps.
pub const INSTRUCTION_BYTES: u32 = 4;
/// Byte size of the addressable space the pc may point into.
pub const ADDRESS_SPACE_BYTES: u32 = MEMORY_WORDS as u32 * INSTRUCTION_BYTES;
/// Lines of this length or longer are refused before decoding.
pub const MAX_LINE_LEN: usize = 99;

/// Register written by `jal`.
pub const RA: u8 = 31;

// opcodes
pub const OPC_RTYPE: u8 = 0x00;
pub const OPC_J: u8 = 0x02;
pub const OPC_JAL: u8 = 0x03;
pub const OPC_BEQ: u8 = 0x04;
pub const OPC_ADDI: u8 = 0x08;
pub const OPC_LW: u8 = 0x23;
pub const OPC_SW: u8 = 0x2B;

// R-type function codes
pub const FUNCT_JR: u8 = 0x08;
pub const FUNCT_ADD: u8 = 0x20;
pub const FUNCT_SUB: u8 = 0x22;
pub const FUNCT_AND: u8 = 0x24;
pub const FUNCT_OR: u8 = 0x25;
pub const FUNCT_SLT: u8 = 0x2A;
