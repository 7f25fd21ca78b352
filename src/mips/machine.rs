// mips/machine.rs
use super::arch::REGISTER_COUNT;
use super::bounds::valid_register;
use super::errors::ExecutionError;
use super::memory::Memory;
use super::registers::{Reg, Registers};

/// Registers, data memory and program counter of the simulated processor.
///
/// Only [`exec::execute`](super::exec::execute) changes the state during normal
/// operation; [`MachineState::set_register`] exists for interactive poking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineState {
    pub(super) regs: Registers,
    pub(super) mem: Memory,
    pub(super) pc: u32,
}

impl MachineState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn pc(&self) -> u32 {
        self.pc
    }

    #[inline]
    pub fn register(&self, r: Reg) -> i32 {
        self.regs.read(r)
    }

    pub fn registers(&self) -> &[i32; REGISTER_COUNT] {
        self.regs.as_array()
    }

    pub fn memory(&self, addr: usize) -> Option<i32> {
        self.mem.load(addr as i64)
    }

    pub fn memory_words(&self) -> &[i32] {
        self.mem.words()
    }

    pub fn try_register(&self, index: usize) -> Result<i32, ExecutionError> {
        if !valid_register(index as i64) {
            return Err(ExecutionError::Register(index));
        }
        Ok(self.regs.as_array()[index])
    }

    pub fn try_memory(&self, addr: usize) -> Result<i32, ExecutionError> {
        self.mem
            .load(addr as i64)
            .ok_or(ExecutionError::Memory(addr as i64))
    }

    /// Writes a register outside of instruction execution. `$0` stays zero.
    pub fn set_register(&mut self, index: usize, value: i32) -> Result<(), ExecutionError> {
        let r = Reg::new(index as i64).ok_or(ExecutionError::Register(index))?;
        self.regs.write(r, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let st = MachineState::new();
        assert_eq!(st.pc(), 0);
        assert!(st.registers().iter().all(|&v| v == 0));
        assert!(st.memory_words().iter().all(|&v| v == 0));
        assert_eq!(st.memory_words().len(), 1024);
    }

    #[test]
    fn raw_accessors_validate() {
        let mut st = MachineState::new();
        st.set_register(5, 9).unwrap();
        assert_eq!(st.try_register(5), Ok(9));
        assert_eq!(st.try_register(32), Err(ExecutionError::Register(32)));
        assert_eq!(st.try_memory(1024), Err(ExecutionError::Memory(1024)));
        assert_eq!(st.set_register(40, 1), Err(ExecutionError::Register(40)));
    }

    #[test]
    fn set_register_keeps_zero_pinned() {
        let mut st = MachineState::new();
        st.set_register(0, 123).unwrap();
        assert_eq!(st.register(Reg::ZERO), 0);
    }
}
