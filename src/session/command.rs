use thiserror::Error;

use crate::mips::arch::{MAX_LINE_LEN, MEMORY_WORDS};
use crate::mips::errors::{ExecutionError, StepError};

/// One line typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    Help,
    Registers,
    Reset,
    /// Inclusive word range.
    Memory { start: usize, end: usize },
    Set { index: usize, value: i32 },
    Empty,
    Instruction(&'a str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Instruction too long: {0} characters (limit {limit})", limit = MAX_LINE_LEN - 1)]
    LineTooLong(usize),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid memory range {start}..={end} (words 0..={last})", last = MEMORY_WORDS - 1)]
    MemoryRange { start: i64, end: i64 },

    #[error(transparent)]
    Step(#[from] StepError),

    #[error(transparent)]
    Machine(#[from] ExecutionError),
}

const MEM_USAGE: &str = "mem <start> <end>";
const SET_USAGE: &str = "set $<register> <value>";

pub fn parse(line: &str) -> Result<Command<'_>, SessionError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let len = line.chars().count();
    if len >= MAX_LINE_LEN {
        return Err(SessionError::LineTooLong(len));
    }

    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Ok(Command::Empty);
    };
    let args: Vec<&str> = tokens.collect();

    Ok(match (head, args.as_slice()) {
        ("sair" | "quit" | "exit", []) => Command::Quit,
        ("help", []) => Command::Help,
        ("regs", []) => Command::Registers,
        ("reset", []) => Command::Reset,
        ("mem", rest) => parse_mem(rest)?,
        ("set", rest) => parse_set(rest)?,
        _ => Command::Instruction(line),
    })
}

fn parse_mem(args: &[&str]) -> Result<Command<'static>, SessionError> {
    let [start, end] = args else {
        return Err(SessionError::Usage(MEM_USAGE));
    };
    let (Ok(start), Ok(end)) = (start.parse::<i64>(), end.parse::<i64>()) else {
        return Err(SessionError::Usage(MEM_USAGE));
    };
    if start < 0 || end >= MEMORY_WORDS as i64 || start > end {
        return Err(SessionError::MemoryRange { start, end });
    }
    Ok(Command::Memory { start: start as usize, end: end as usize })
}

fn parse_set(args: &[&str]) -> Result<Command<'static>, SessionError> {
    let [reg, value] = args else {
        return Err(SessionError::Usage(SET_USAGE));
    };
    let index = reg
        .strip_prefix('$')
        .and_then(|n| n.parse::<usize>().ok())
        .ok_or(SessionError::Usage(SET_USAGE))?;
    let value = value.parse::<i32>().map_err(|_| SessionError::Usage(SET_USAGE))?;
    Ok(Command::Set { index, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords() {
        assert_eq!(parse("sair"), Ok(Command::Quit));
        assert_eq!(parse("quit\n"), Ok(Command::Quit));
        assert_eq!(parse("help"), Ok(Command::Help));
        assert_eq!(parse("regs"), Ok(Command::Registers));
        assert_eq!(parse("reset"), Ok(Command::Reset));
        assert_eq!(parse("   "), Ok(Command::Empty));
    }

    #[test]
    fn everything_else_is_an_instruction() {
        assert_eq!(parse("add $1,$2,$3"), Ok(Command::Instruction("add $1,$2,$3")));
        assert_eq!(parse("help me"), Ok(Command::Instruction("help me")));
    }

    #[test]
    fn mem_range_is_checked() {
        assert_eq!(parse("mem 0 7"), Ok(Command::Memory { start: 0, end: 7 }));
        assert_eq!(parse("mem 1023 1023"), Ok(Command::Memory { start: 1023, end: 1023 }));
        assert_eq!(parse("mem 5 1024"), Err(SessionError::MemoryRange { start: 5, end: 1024 }));
        assert_eq!(parse("mem 8 2"), Err(SessionError::MemoryRange { start: 8, end: 2 }));
        assert_eq!(parse("mem -1 2"), Err(SessionError::MemoryRange { start: -1, end: 2 }));
        assert_eq!(parse("mem 1"), Err(SessionError::Usage(MEM_USAGE)));
        assert_eq!(parse("mem a b"), Err(SessionError::Usage(MEM_USAGE)));
    }

    #[test]
    fn set_takes_register_and_value() {
        assert_eq!(parse("set $2 2147483647"), Ok(Command::Set { index: 2, value: i32::MAX }));
        assert_eq!(parse("set 2 5"), Err(SessionError::Usage(SET_USAGE)));
        assert_eq!(parse("set $2"), Err(SessionError::Usage(SET_USAGE)));
    }

    #[test]
    fn long_lines_are_refused_first() {
        let line = format!("add $1,$2,$3{}", " ".repeat(90));
        assert_eq!(parse(&line), Err(SessionError::LineTooLong(line.len())));
        let ok = "a".repeat(98);
        assert_eq!(parse(&ok), Ok(Command::Instruction(ok.as_str())));
    }
}
