//! Memory-mapped device support for the 6502 emulator.
//!
//! This module defines the [`Device`] contract every memory-mapped unit implements,
//! and the peripherals of the example machine.
//!
//! # Architecture
//!
//! - **Device trait**: register access by offset, plus clock and reset signals
//! - **[`Bus`](crate::Bus)**: routes read/write operations to devices by address range
//! - **Device implementations**: RAM, ROM, timer, real-time clock, parallel port,
//!   display, keyboard and mouse
//! - **[`InterruptLine`]**: the handle through which a device raises NMI/IRQ on the CPU
//! - **[`HostInterface`]**: the screen/keyboard/mouse capabilities of the host
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use sim6502::{AddressRange, Bus, MemoryBus, RamDevice, RomDevice};
//!
//! let mut bus = Bus::new();
//!
//! // 16KB RAM at 0x0000-0x3FFF
//! let ram = Rc::new(RefCell::new(RamDevice::new(0x4000)));
//! bus.add_device(AddressRange::new(0x0000, 0x3FFF).unwrap(), ram).unwrap();
//!
//! // 16KB ROM at 0xC000-0xFFFF
//! let rom = RomDevice::new(vec![0xEA; 0x4000]).unwrap();
//! bus.add_device(AddressRange::new(0xC000, 0xFFFF).unwrap(), Rc::new(RefCell::new(rom))).unwrap();
//!
//! bus.write(0x1234, 0x42);
//! assert_eq!(bus.read(0x1234), 0x42);
//! assert_eq!(bus.read(0xC000), 0xEA);
//! assert_eq!(bus.read(0x8000), 0xFF); // unmapped
//! ```

pub mod display;
pub mod host;
pub mod interrupts;
pub mod keyboard;
pub mod mouse;
pub mod parallel;
pub mod ram;
pub mod rom;
pub mod rtc;
pub mod timer;

pub use display::{Display, DisplayGeometry};
pub use host::{HostInterface, MouseInfo};
pub use interrupts::{InterruptKind, InterruptLine};
pub use keyboard::Keyboard;
pub use mouse::Mouse;
pub use parallel::ParallelPort;
pub use ram::RamDevice;
pub use rom::RomDevice;
pub use rtc::RealTimeClock;
pub use timer::Timer;

/// A block of registers or storage the [`Bus`](crate::Bus) maps at some base address.
///
/// Accesses arrive as offsets from that base (0 to `size() - 1`), so a device never
/// knows where it lives. Offsets outside the device read as 0xFF and ignore writes.
/// The bus forwards its clock and reset signals in registration order.
///
/// # Examples
///
/// ```rust
/// use sim6502::Device;
///
/// struct Latch {
///     value: u8,
/// }
///
/// impl Device for Latch {
///     fn read(&self, _offset: u16) -> u8 {
///         self.value
///     }
///
///     fn write(&mut self, _offset: u16, value: u8) {
///         self.value = value;
///     }
///
///     fn size(&self) -> usize {
///         1
///     }
///
///     fn reset(&mut self) {
///         self.value = 0;
///     }
/// }
/// ```
pub trait Device {
    fn read(&self, offset: u16) -> u8;

    fn write(&mut self, offset: u16, value: u8);

    /// Number of bytes the device occupies in the address space.
    fn size(&self) -> usize;

    /// One bus clock cycle.
    fn clock(&mut self) {}

    /// Bus reset signal.
    fn reset(&mut self) {}
}
