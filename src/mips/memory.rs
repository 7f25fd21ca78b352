// mips/memory.rs
use super::arch::MEMORY_WORDS;
use super::bounds::word_index;

/// Word-addressed data memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    words: Vec<i32>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            words: vec![0; MEMORY_WORDS],
        }
    }

    pub fn load(&self, addr: i64) -> Option<i32> {
        word_index(addr).map(|i| self.words[i])
    }

    /// Reads a word at an index already checked with [`word_index`].
    #[inline]
    pub fn read(&self, index: usize) -> i32 {
        self.words[index]
    }

    #[inline]
    pub fn write(&mut self, index: usize, value: i32) {
        self.words[index] = value;
    }

    pub fn words(&self) -> &[i32] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_load() {
        let mut mem = Memory::new();
        let index = word_index(1023).unwrap();
        mem.write(index, -5);
        assert_eq!(mem.load(1023), Some(-5));
        assert_eq!(mem.read(index), -5);
    }

    #[test]
    fn out_of_range_is_refused() {
        let mem = Memory::new();
        assert_eq!(mem.load(1024), None);
        assert_eq!(mem.load(-1), None);
        assert_eq!(word_index(1024), None);
    }
}
