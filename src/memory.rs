//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations. The CPU owns no memory; every `clock`/`step` call is handed
//! the memory it should run against.
//!
//! Two implementations ship with the crate:
//!
//! - [`FlatMemory`] - 64KB of plain RAM, handy for tests and quick experiments
//! - [`Bus`](crate::Bus) - the device-mapped system bus
//!
//! Neither access can fail: the 6502 has no bus error line, so a missing mapping
//! reads as open bus and a write with nowhere to go is dropped.

/// Byte-wide view of the 16-bit address space as the CPU sees it.
///
/// `read` takes `&self`; devices whose reads have side effects (a keyboard
/// consuming its queue) keep that state behind a `Cell` or `RefCell`.
///
/// # Examples
///
/// ```
/// use sim6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// assert_eq!(mem.read_word(0x1234), 0x0042);
/// ```
pub trait MemoryBus {
    /// Byte at `addr`, or the open-bus value when nothing answers.
    fn read(&self, addr: u16) -> u8;

    /// Stores `value` at `addr`; read-only and unmapped targets drop it.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word; the high byte comes from `addr + 1` (wrapping at 0xFFFF).
    fn read_word(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read(addr), self.read(addr.wrapping_add(1))])
    }
}

/// 64KB of RAM with no devices, for running raw binaries and for tests.
///
/// # Examples
///
/// ```
/// use sim6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.load(0x0200, &[0xA9, 0x01]);
/// assert_eq!(mem.read(0x0201), 0x01);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates zero-filled 64KB memory.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `addr`, wrapping past 0xFFFF.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let mut target = addr;
        for &byte in bytes {
            self.data[target as usize] = byte;
            target = target.wrapping_add(1);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_starts_zeroed() {
        let mut mem = FlatMemory::new();

        assert!((0..=0xFFFFu16).step_by(0x1111).all(|a| mem.read(a) == 0));

        mem.write(0x1234, 0x42);
        assert_eq!(
            [mem.read(0x1233), mem.read(0x1234), mem.read(0x1235)],
            [0x00, 0x42, 0x00]
        );
    }

    #[test]
    fn test_read_word_wraps_at_top_of_memory() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFF, 0x34);
        mem.write(0x0000, 0x12);
        assert_eq!(mem.read_word(0xFFFF), 0x1234);
    }

    #[test]
    fn test_load_wraps() {
        let mut mem = FlatMemory::new();
        mem.load(0xFFFE, &[1, 2, 3]);
        assert_eq!(mem.read(0xFFFE), 1);
        assert_eq!(mem.read(0xFFFF), 2);
        assert_eq!(mem.read(0x0000), 3);
    }
}
