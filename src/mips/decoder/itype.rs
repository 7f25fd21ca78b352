use crate::mips::errors::DecodeError;
use crate::mips::instruction::{ArithOp, Instruction, MemOp};

use super::{parse_imm, parse_reg, split_operands};

// $rt,$rs,imm
pub(super) fn decode_arith(op: ArithOp, operands: &str) -> Result<Instruction, DecodeError> {
    let ops = split_operands(operands, 3)?;
    let rt = parse_reg(ops[0])?;
    let rs = parse_reg(ops[1])?;
    let immediate = parse_imm(ops[2])?;
    Ok(Instruction::ImmediateArith { op, rs, rt, immediate })
}

// $rt,imm($rs)
pub(super) fn decode_mem(op: MemOp, operands: &str) -> Result<Instruction, DecodeError> {
    let missing = |what: &str| DecodeError::Parameter(format!("{}: missing {what}", op.mnemonic()));

    let (rt_s, rest) = operands.split_once(',').ok_or_else(|| missing("','"))?;
    let rt = parse_reg(rt_s)?;

    let (imm_s, rest) = rest.split_once('(').ok_or_else(|| missing("'('"))?;
    let immediate = parse_imm(imm_s)?;

    let (rs_s, trailing) = rest.split_once(')').ok_or_else(|| missing("')'"))?;
    let rs = parse_reg(rs_s)?;

    if !trailing.trim().is_empty() {
        return Err(DecodeError::Parameter(format!(
            "{}: unexpected '{}' after ')'",
            op.mnemonic(),
            trailing.trim()
        )));
    }
    Ok(Instruction::ImmediateMem { op, rs, rt, immediate })
}
