use crate::mips::errors::DecodeError;
use crate::mips::instruction::{Function, Instruction};
use crate::mips::registers::Reg;

use super::{parse_reg, split_operands};

// $rd,$rs,$rt
pub(super) fn decode(function: Function, operands: &str) -> Result<Instruction, DecodeError> {
    let ops = split_operands(operands, 3)?;
    let rd = parse_reg(ops[0])?;
    let rs = parse_reg(ops[1])?;
    let rt = parse_reg(ops[2])?;
    Ok(Instruction::Register { function, rd, rs, rt })
}

// $rs
pub(super) fn decode_jr(operands: &str) -> Result<Instruction, DecodeError> {
    let ops = split_operands(operands, 1)?;
    let rs = parse_reg(ops[0])?;
    Ok(Instruction::Register {
        function: Function::Jr,
        rd: Reg::ZERO,
        rs,
        rt: Reg::ZERO,
    })
}
