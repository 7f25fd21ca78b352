// mips/exec.rs
use crate::mips::{
    arch::INSTRUCTION_BYTES,
    bounds::{jump_target, word_index},
    decoder::decode,
    errors::{ExecutionError, StepError},
    instruction::{ArithOp, Function, Instruction, JumpOp, MemOp},
    machine::MachineState,
    registers::Reg,
};

/// Applies one instruction to the machine.
///
/// Every check runs before anything is written, so an `Err` leaves the state as it
/// was. The exception is [`ExecutionError::Overflow`]: the destination register is
/// not written but the pc still moves on to the next instruction.
pub fn execute(state: &mut MachineState, instr: &Instruction) -> Result<(), ExecutionError> {
    state.regs.clear_zero();
    let pc = state.pc;
    let res = apply(state, instr);
    state.regs.clear_zero();

    match &res {
        Ok(()) => tracing::debug!(pc, next_pc = state.pc, %instr, "executed"),
        Err(e) if e.is_warning() => tracing::warn!(pc, %instr, "{e}"),
        Err(e) => tracing::debug!(pc, %instr, error = %e, "execution rejected"),
    }
    res
}

fn apply(state: &mut MachineState, instr: &Instruction) -> Result<(), ExecutionError> {
    let pc = state.pc;
    let fallthrough = pc as i64 + INSTRUCTION_BYTES as i64;
    let next_pc = || jump_target(fallthrough).ok_or(ExecutionError::Memory(fallthrough));

    match *instr {
        // R
        Instruction::Register { function, rd, rs, rt } => {
            let a = state.regs.read(rs);
            let b = state.regs.read(rt);
            match function {
                Function::Jr => {
                    let target = a as i64;
                    state.pc = jump_target(target).ok_or(ExecutionError::Memory(target))?;
                    Ok(())
                }
                Function::Add => commit(state, rd, a.checked_add(b), "add", next_pc()?),
                Function::Sub => commit(state, rd, a.checked_sub(b), "sub", next_pc()?),
                Function::And => commit(state, rd, Some(a & b), "and", next_pc()?),
                Function::Or => commit(state, rd, Some(a | b), "or", next_pc()?),
                Function::Slt => commit(state, rd, Some((a < b) as i32), "slt", next_pc()?),
            }
        }

        // I
        Instruction::ImmediateArith { op: ArithOp::Addi, rs, rt, immediate } => {
            let sum = state.regs.read(rs).checked_add(immediate);
            commit(state, rt, sum, "addi", next_pc()?)
        }
        // Offset counts from the pc of the branch itself, not pc + 4.
        Instruction::ImmediateArith { op: ArithOp::Beq, rs, rt, immediate } => {
            if state.regs.read(rs) == state.regs.read(rt) {
                let target = pc as i64 + immediate as i64 * INSTRUCTION_BYTES as i64;
                state.pc = jump_target(target).ok_or(ExecutionError::Memory(target))?;
            } else {
                state.pc = next_pc()?;
            }
            Ok(())
        }
        Instruction::ImmediateMem { op, rs, rt, immediate } => {
            let addr = state.regs.read(rs) as i64 + immediate as i64;
            let index = word_index(addr).ok_or(ExecutionError::Memory(addr))?;
            let next = next_pc()?;
            match op {
                MemOp::Lw => state.regs.write(rt, state.mem.read(index)),
                MemOp::Sw => state.mem.write(index, state.regs.read(rt)),
            }
            state.pc = next;
            Ok(())
        }

        // J
        Instruction::Jump { op, address } => {
            let target = address as i64 * INSTRUCTION_BYTES as i64;
            let target = jump_target(target).ok_or(ExecutionError::Memory(target))?;
            if op == JumpOp::Jal {
                state.regs.write(Reg::RA, (pc + INSTRUCTION_BYTES) as i32);
            }
            state.pc = target;
            Ok(())
        }
    }
}

/// Moves the pc on and writes `value` unless the operation overflowed.
fn commit(
    state: &mut MachineState,
    dest: Reg,
    value: Option<i32>,
    name: &'static str,
    next_pc: u32,
) -> Result<(), ExecutionError> {
    state.pc = next_pc;
    match value {
        Some(v) => {
            state.regs.write(dest, v);
            Ok(())
        }
        None => Err(ExecutionError::Overflow(name)),
    }
}

/// What a successful [`step`] ran, plus the overflow warning if one was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub instruction: Instruction,
    pub warning: Option<ExecutionError>,
}

/// Decodes `line` and executes it. Overflow comes back as a warning, not an error.
pub fn step(state: &mut MachineState, line: &str) -> Result<Step, StepError> {
    let instruction = decode(line)?;
    match execute(state, &instruction) {
        Ok(()) => Ok(Step { instruction, warning: None }),
        Err(e) if e.is_warning() => Ok(Step { instruction, warning: Some(e) }),
        Err(e) => Err(e.into()),
    }
}
