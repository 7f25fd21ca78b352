// mips/decoder/mod.rs
//! Text decoder: one line of assembly in, one [`Instruction`] out.
//!
//! The decoder works on borrowed slices only; a failed decode leaves nothing
//! behind and the same line always yields the same result.

mod itype;
mod jtype;
mod rtype;


use crate::mips::errors::DecodeError;
use crate::mips::instruction::{ArithOp, Function, Instruction, JumpOp, MemOp};
use crate::mips::registers::Reg;

pub fn decode(line: &str) -> Result<Instruction, DecodeError> {
    let (mnemonic, operands) = split_mnemonic(line)?;
    let instr = match mnemonic {
        "add" => rtype::decode(Function::Add, operands),
        "sub" => rtype::decode(Function::Sub, operands),
        "and" => rtype::decode(Function::And, operands),
        "or" => rtype::decode(Function::Or, operands),
        "slt" => rtype::decode(Function::Slt, operands),
        "jr" => rtype::decode_jr(operands),
        "addi" => itype::decode_arith(ArithOp::Addi, operands),
        "beq" => itype::decode_arith(ArithOp::Beq, operands),
        "lw" => itype::decode_mem(MemOp::Lw, operands),
        "sw" => itype::decode_mem(MemOp::Sw, operands),
        "j" => jtype::decode(JumpOp::J, operands),
        "jal" => jtype::decode(JumpOp::Jal, operands),
        other => Err(DecodeError::Parameter(format!("unknown instruction '{other}'"))),
    };
    if let Err(e) = &instr {
        tracing::debug!(line, error = %e, "decode rejected");
    }
    instr
}

// helpers shared with the format submodules

/// Splits at the first whitespace run; both halves must be present.
fn split_mnemonic(line: &str) -> Result<(&str, &str), DecodeError> {
    let line = line.trim_start();
    let (mnemonic, rest) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| DecodeError::Parameter(format!("expected '<op> <operands>', got '{line}'")))?;
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(DecodeError::Parameter(format!("'{mnemonic}' has no operands")));
    }
    Ok((mnemonic, rest))
}

/// Comma-separated operands, exactly `count` of them.
fn split_operands(rest: &str, count: usize) -> Result<Vec<&str>, DecodeError> {
    let ops: Vec<&str> = rest.split(',').map(str::trim).collect();
    if ops.len() != count {
        return Err(DecodeError::Parameter(format!(
            "expected {count} operands, got {}",
            ops.len()
        )));
    }
    Ok(ops)
}

/// `$<integer>`; any integer outside `0..32` is a register error, even one too
/// wide for `i64` (reported saturated).
fn parse_reg(tok: &str) -> Result<Reg, DecodeError> {
    let tok = tok.trim();
    let digits = tok
        .strip_prefix('$')
        .filter(|n| is_integer(n))
        .ok_or_else(|| DecodeError::Parameter(format!("invalid register '{tok}'")))?;
    let num = digits.parse::<i64>().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    });
    Reg::new(num).ok_or(DecodeError::Register(num))
}

// optional sign, then ASCII digits only
fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_imm(tok: &str) -> Result<i32, DecodeError> {
    let tok = tok.trim();
    tok.parse::<i32>()
        .map_err(|_| DecodeError::Parameter(format!("invalid immediate '{tok}'")))
}
