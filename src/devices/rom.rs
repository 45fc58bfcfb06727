//! Read-only storage, typically holding the program and the vectors.

use super::Device;
use crate::ConfigError;

/// Fixed contents; writes and reset leave them alone.
///
/// ```rust
/// use sim6502::{RomDevice, Device};
///
/// let mut rom = RomDevice::new(vec![0xEA; 3]).unwrap();
/// rom.write(0, 0xFF);
/// assert_eq!(rom.read(0), 0xEA);
/// ```
pub struct RomDevice {
    data: Vec<u8>,
}

impl RomDevice {
    /// ROM holding `data`. Its size is `data.len()`.
    ///
    /// # Errors
    ///
    /// `ConfigError::EmptyRom` when `data` is empty.
    pub fn new(data: Vec<u8>) -> Result<Self, ConfigError> {
        if data.is_empty() {
            return Err(ConfigError::EmptyRom);
        }
        Ok(Self { data })
    }
}

impl Device for RomDevice {
    fn read(&self, offset: u16) -> u8 {
        self.data.get(offset as usize).copied().unwrap_or(0xFF)
    }

    fn write(&mut self, _offset: u16, _value: u8) {}

    fn size(&self) -> usize {
        self.data.len()
    }
}
