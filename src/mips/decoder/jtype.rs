use crate::mips::errors::DecodeError;
use crate::mips::instruction::{Instruction, JumpOp};

// addr (decimal word index)
pub(super) fn decode(op: JumpOp, operands: &str) -> Result<Instruction, DecodeError> {
    let tok = operands.trim();
    let address = tok
        .parse::<u32>()
        .map_err(|_| DecodeError::Parameter(format!("{}: invalid address '{tok}'", op.mnemonic())))?;
    Ok(Instruction::Jump { op, address })
}
