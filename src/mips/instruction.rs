// mips/instruction.rs
use std::fmt;

use super::arch::*;
use super::registers::Reg;

/// R-type operations, selected by the function field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Add,
    Sub,
    And,
    Or,
    Slt,
    Jr,
}

impl Function {
    pub fn code(self) -> u8 {
        match self {
            Function::Add => FUNCT_ADD,
            Function::Sub => FUNCT_SUB,
            Function::And => FUNCT_AND,
            Function::Or => FUNCT_OR,
            Function::Slt => FUNCT_SLT,
            Function::Jr => FUNCT_JR,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Function::Add => "add",
            Function::Sub => "sub",
            Function::And => "and",
            Function::Or => "or",
            Function::Slt => "slt",
            Function::Jr => "jr",
        }
    }
}

/// I-type operations taking two registers and an immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Addi,
    Beq,
}

impl ArithOp {
    pub fn opcode(self) -> u8 {
        match self {
            ArithOp::Addi => OPC_ADDI,
            ArithOp::Beq => OPC_BEQ,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            ArithOp::Addi => "addi",
            ArithOp::Beq => "beq",
        }
    }
}

/// I-type word loads and stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemOp {
    Lw,
    Sw,
}

impl MemOp {
    pub fn opcode(self) -> u8 {
        match self {
            MemOp::Lw => OPC_LW,
            MemOp::Sw => OPC_SW,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            MemOp::Lw => "lw",
            MemOp::Sw => "sw",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOp {
    J,
    Jal,
}

impl JumpOp {
    pub fn opcode(self) -> u8 {
        match self {
            JumpOp::J => OPC_J,
            JumpOp::Jal => OPC_JAL,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            JumpOp::J => "j",
            JumpOp::Jal => "jal",
        }
    }
}

/// A decoded instruction, one variant per encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `jr` only reads `rs`; its `rd` and `rt` are `$0`.
    Register { function: Function, rd: Reg, rs: Reg, rt: Reg },
    ImmediateArith { op: ArithOp, rs: Reg, rt: Reg, immediate: i32 },
    /// Effective address is `rs + immediate`, in words.
    ImmediateMem { op: MemOp, rs: Reg, rt: Reg, immediate: i32 },
    /// `address` is a word index; the pc target is `address * 4`.
    Jump { op: JumpOp, address: u32 },
}

/// Encoding class, as shown in the instruction detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    R,
    I,
    J,
}

impl Instruction {
    pub fn format(&self) -> Format {
        match self {
            Instruction::Register { .. } => Format::R,
            Instruction::ImmediateArith { .. } | Instruction::ImmediateMem { .. } => Format::I,
            Instruction::Jump { .. } => Format::J,
        }
    }

    pub fn opcode(&self) -> u8 {
        match self {
            Instruction::Register { .. } => OPC_RTYPE,
            Instruction::ImmediateArith { op, .. } => op.opcode(),
            Instruction::ImmediateMem { op, .. } => op.opcode(),
            Instruction::Jump { op, .. } => op.opcode(),
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Register { function, .. } => function.mnemonic(),
            Instruction::ImmediateArith { op, .. } => op.mnemonic(),
            Instruction::ImmediateMem { op, .. } => op.mnemonic(),
            Instruction::Jump { op, .. } => op.mnemonic(),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::Register { function: Function::Jr, rs, .. } => write!(f, "jr {rs}"),
            Instruction::Register { function, rd, rs, rt } => {
                write!(f, "{} {rd},{rs},{rt}", function.mnemonic())
            }
            Instruction::ImmediateArith { op, rs, rt, immediate } => {
                write!(f, "{} {rt},{rs},{immediate}", op.mnemonic())
            }
            Instruction::ImmediateMem { op, rs, rt, immediate } => {
                write!(f, "{} {rt},{immediate}({rs})", op.mnemonic())
            }
            Instruction::Jump { op, address } => write!(f, "{} {address}", op.mnemonic()),
        }
    }
}
