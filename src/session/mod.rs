//! Interactive layer around the core: one submitted line in, one [`Outcome`] out.

pub mod command;
pub mod dump;
pub mod help;

pub use command::{Command, SessionError};

use crate::mips::arch::REGISTER_COUNT;
use crate::mips::errors::ExecutionError;
use crate::mips::exec::step;
use crate::mips::instruction::Instruction;
use crate::mips::machine::MachineState;

/// What happened to a submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Executed { instruction: Instruction, warning: Option<ExecutionError> },
    Help,
    Registers,
    Memory { start: usize, end: usize },
    RegisterSet { index: usize, value: i32 },
    Reset,
    Quit,
    Nothing,
    Rejected(SessionError),
}

#[derive(Debug, Default)]
pub struct Session {
    state: MachineState,
    last: Option<Instruction>,
    // snapshot before the last change, for highlighting
    prev_regs: [i32; REGISTER_COUNT],
    prev_pc: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    pub fn last_instruction(&self) -> Option<&Instruction> {
        self.last.as_ref()
    }

    pub fn prev_registers(&self) -> &[i32; REGISTER_COUNT] {
        &self.prev_regs
    }

    pub fn prev_pc(&self) -> u32 {
        self.prev_pc
    }

    pub fn submit(&mut self, line: &str) -> Outcome {
        match command::parse(line) {
            Ok(cmd) => self.run(cmd),
            Err(e) => Outcome::Rejected(e),
        }
    }

    fn run(&mut self, cmd: Command<'_>) -> Outcome {
        match cmd {
            Command::Quit => Outcome::Quit,
            Command::Help => Outcome::Help,
            Command::Registers => Outcome::Registers,
            Command::Empty => Outcome::Nothing,
            Command::Memory { start, end } => Outcome::Memory { start, end },
            Command::Reset => {
                self.snapshot();
                self.state = MachineState::new();
                self.last = None;
                tracing::info!("machine reset");
                Outcome::Reset
            }
            Command::Set { index, value } => {
                self.snapshot();
                match self.state.set_register(index, value) {
                    Ok(()) => Outcome::RegisterSet { index, value },
                    Err(e) => Outcome::Rejected(e.into()),
                }
            }
            Command::Instruction(text) => {
                self.snapshot();
                match step(&mut self.state, text) {
                    Ok(done) => {
                        self.last = Some(done.instruction);
                        Outcome::Executed { instruction: done.instruction, warning: done.warning }
                    }
                    Err(e) => Outcome::Rejected(e.into()),
                }
            }
        }
    }

    fn snapshot(&mut self) {
        self.prev_regs = *self.state.registers();
        self.prev_pc = self.state.pc();
    }
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mips::errors::{DecodeError, StepError};

    fn submit_all(s: &mut Session, lines: &[&str]) {
        for line in lines {
            let out = s.submit(line);
            assert!(!out.is_error(), "{line}: {out:?}");
        }
    }

    #[test]
    fn runs_instructions_against_its_state() {
        let mut s = Session::new();
        submit_all(&mut s, &["set $2 5", "set $3 7", "add $1,$2,$3"]);
        assert_eq!(s.state().try_register(1), Ok(12));
        assert_eq!(s.state().pc(), 4);
        assert_eq!(s.last_instruction().map(|i| i.to_string()), Some("add $1,$2,$3".into()));
        assert_eq!(s.prev_registers()[1], 0);
        assert_eq!(s.prev_pc(), 0);
    }

    #[test]
    fn overflow_is_reported_but_not_rejected() {
        let mut s = Session::new();
        s.submit("set $2 2147483647");
        let out = s.submit("addi $1,$2,1");
        assert!(matches!(
            out,
            Outcome::Executed { warning: Some(ExecutionError::Overflow("addi")), .. }
        ));
        assert_eq!(s.state().try_register(1), Ok(0));
    }

    #[test]
    fn rejected_lines_leave_state_alone() {
        let mut s = Session::new();
        s.submit("set $1 1");
        let before = s.state().clone();
        for line in ["addx $1,$2,$3", "add $1,$40,$3", "j 1024", "lw $1,2000($0)", "set $32 1"] {
            assert!(s.submit(line).is_error(), "{line}");
        }
        assert_eq!(*s.state(), before);
        assert_eq!(
            s.submit("add $1,$40,$3"),
            Outcome::Rejected(SessionError::Step(StepError::Decode(DecodeError::Register(40))))
        );
    }

    #[test]
    fn reset_clears_everything() {
        let mut s = Session::new();
        submit_all(&mut s, &["set $1 9", "sw $1,3($0)", "reset"]);
        assert_eq!(*s.state(), MachineState::new());
        assert!(s.last_instruction().is_none());
    }

    #[test]
    fn commands_do_not_touch_the_machine() {
        let mut s = Session::new();
        assert_eq!(s.submit("help"), Outcome::Help);
        assert_eq!(s.submit("regs"), Outcome::Registers);
        assert_eq!(s.submit("mem 0 3"), Outcome::Memory { start: 0, end: 3 });
        assert_eq!(s.submit(""), Outcome::Nothing);
        assert_eq!(s.submit("sair"), Outcome::Quit);
        assert_eq!(*s.state(), MachineState::new());
    }
}
