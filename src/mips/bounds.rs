// mips/bounds.rs
//! Range predicates shared by the decoder, the executor and the session layer.

use super::arch::{ADDRESS_SPACE_BYTES, INSTRUCTION_BYTES, MEMORY_WORDS, REGISTER_COUNT};

#[inline]
pub fn valid_register(index: i64) -> bool {
    (0..REGISTER_COUNT as i64).contains(&index)
}

/// Word index into data memory.
#[inline]
pub fn valid_address(addr: i64) -> bool {
    (0..MEMORY_WORDS as i64).contains(&addr)
}

/// Byte address the pc may be set to: inside the address space and word aligned.
#[inline]
pub fn valid_jump_target(target: i64) -> bool {
    (0..ADDRESS_SPACE_BYTES as i64).contains(&target) && target % INSTRUCTION_BYTES as i64 == 0
}

/// Converts a validated data address into a slice index.
#[inline]
pub fn word_index(addr: i64) -> Option<usize> {
    valid_address(addr).then_some(addr as usize)
}

/// Converts a validated jump target into a pc value.
#[inline]
pub fn jump_target(target: i64) -> Option<u32> {
    valid_jump_target(target).then_some(target as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_edges() {
        assert!(valid_register(0));
        assert!(valid_register(31));
        assert!(!valid_register(32));
        assert!(!valid_register(-1));
    }

    #[test]
    fn address_edges() {
        assert_eq!(word_index(0), Some(0));
        assert_eq!(word_index(1023), Some(1023));
        assert_eq!(word_index(1024), None);
        assert_eq!(word_index(-4), None);
    }

    #[test]
    fn jump_targets_must_be_aligned_and_in_range() {
        assert_eq!(jump_target(0), Some(0));
        assert_eq!(jump_target(4092), Some(4092));
        assert_eq!(jump_target(4096), None);
        assert_eq!(jump_target(-4), None);
        assert_eq!(jump_target(6), None);
    }
}
