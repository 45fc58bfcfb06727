//! Read/write storage. Its contents survive a bus reset.

use super::Device;

/// Zero-initialized RAM. Offsets past the end read as 0xFF.
///
/// Reset leaves the contents alone, so programs and vectors loaded into RAM
/// are still there when the CPU comes out of reset.
///
/// ```rust
/// use sim6502::{RamDevice, Device};
///
/// let mut ram = RamDevice::new(0x0400);
/// ram.write(0x42, 0xAA);
/// ram.reset();
/// assert_eq!(ram.read(0x42), 0xAA);
///
/// ram.clear();
/// assert_eq!(ram.read(0x42), 0x00);
/// ```
pub struct RamDevice {
    data: Vec<u8>,
}

impl RamDevice {
    /// `size` bytes of RAM, capped at the 64KB address space.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size.min(0x10000)],
        }
    }

    /// Copies `bytes` in at `offset`, dropping whatever falls past the end.
    pub fn load_bytes(&mut self, offset: u16, bytes: &[u8]) {
        let start = (offset as usize).min(self.data.len());
        let end = (start + bytes.len()).min(self.data.len());
        self.data[start..end].copy_from_slice(&bytes[..end - start]);
    }

    /// Zeroes every byte.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// The raw contents.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl Device for RamDevice {
    fn read(&self, offset: u16) -> u8 {
        self.data.get(offset as usize).copied().unwrap_or(0xFF)
    }

    fn write(&mut self, offset: u16, value: u8) {
        if let Some(cell) = self.data.get_mut(offset as usize) {
            *cell = value;
        }
    }

    fn size(&self) -> usize {
        self.data.len()
    }
}
