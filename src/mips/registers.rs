// mips/registers.rs
use std::fmt;

use super::arch::{RA, REGISTER_COUNT};
use super::bounds::valid_register;

/// A register number known to be in `0..32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Reg(u8);

impl Reg {
    pub const ZERO: Reg = Reg(0);
    pub const RA: Reg = Reg(RA);

    pub fn new(index: i64) -> Option<Reg> {
        valid_register(index).then_some(Reg(index as u8))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    x: [i32; REGISTER_COUNT], // $0 always reads 0
}

impl Default for Registers {
    fn default() -> Self {
        Self { x: [0; REGISTER_COUNT] }
    }
}

impl Registers {
    #[inline]
    pub fn read(&self, r: Reg) -> i32 {
        self.x[r.index()]
    }

    #[inline]
    pub fn write(&mut self, r: Reg, v: i32) {
        if r != Reg::ZERO {
            self.x[r.index()] = v;
        }
    }

    /// Re-pins `$0` to zero.
    #[inline]
    pub fn clear_zero(&mut self) {
        self.x[0] = 0;
    }

    pub fn as_array(&self) -> &[i32; REGISTER_COUNT] {
        &self.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reg_rejects_out_of_range() {
        assert!(Reg::new(32).is_none());
        assert!(Reg::new(-1).is_none());
        assert_eq!(Reg::new(31), Some(Reg::RA));
    }

    #[test]
    fn zero_register_ignores_writes() {
        let mut regs = Registers::default();
        regs.write(Reg::ZERO, 42);
        regs.write(Reg::RA, 7);
        assert_eq!(regs.read(Reg::ZERO), 0);
        assert_eq!(regs.read(Reg::RA), 7);
    }
}
