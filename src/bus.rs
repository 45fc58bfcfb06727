//! # System Bus
//!
//! The bus connects the CPU and the memory-mapped devices of a machine. It
//! distributes the clock and reset signals to every registered component and
//! routes data reads and writes to devices by address.
//!
//! # Address Routing
//!
//! - **Reads** are answered by the *first* registered device whose range contains
//!   the address. Unmapped addresses read as `0xFF` (open bus).
//! - **Writes** go to *every* registered device whose range contains the address,
//!   in registration order. Overlapping ranges are allowed and each receives the
//!   write; this lets e.g. a RAM shadow a ROM.
//!
//! The mapping is static: there is no bank switching.
//!
//! # Ordering
//!
//! Components and devices share a single registration order. `clock()` and
//! `reset()` visit them in that order, which decides e.g. whether a timer raises
//! its interrupt before or after the CPU's cycle in the same clock call.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use crate::devices::Device;
use crate::{ConfigError, ExecutionError, MemoryBus};

/// Anything driven by the bus clock that is not (only) a memory-mapped device,
/// most importantly the CPU.
///
/// The bus hands itself to the component as the memory it may access during
/// the call.
pub trait Component {
    /// One bus clock cycle.
    fn clock(&mut self, bus: &mut dyn MemoryBus) -> Result<(), ExecutionError>;

    /// Bus reset signal.
    fn reset(&mut self, bus: &mut dyn MemoryBus);
}

/// An inclusive address range `start..=end` in the 16-bit address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    start: u16,
    end: u16,
}

impl AddressRange {
    /// Creates the range `start..=end`.
    ///
    /// # Errors
    ///
    /// `ConfigError::EmptyRange` when `end < start`.
    pub fn new(start: u16, end: u16) -> Result<Self, ConfigError> {
        if end < start {
            return Err(ConfigError::EmptyRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    /// Number of addresses covered (1..=65536).
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Always false: a range covers at least one address.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, addr: u16) -> bool {
        addr >= self.start && addr <= self.end
    }
}

enum Slot {
    Component(Rc<RefCell<dyn Component>>),
    Device(Rc<RefCell<dyn Device>>),
}

/// Internal mapping of a device to its address range.
struct DeviceMapping {
    range: AddressRange,
    device: Rc<RefCell<dyn Device>>,
}

/// The system bus.
///
/// Components are shared with the caller through `Rc<RefCell<_>>` so they can
/// still be inspected (registers, device state) while the bus drives them.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use sim6502::{AddressRange, Bus, MemoryBus, RamDevice};
///
/// let mut bus = Bus::new();
/// let ram = Rc::new(RefCell::new(RamDevice::new(256)));
/// bus.add_device(AddressRange::new(0x1000, 0x10FF).unwrap(), ram.clone()).unwrap();
///
/// bus.write(0x1042, 0x99);
/// assert_eq!(bus.read(0x1042), 0x99);
/// assert_eq!(ram.borrow().data()[0x42], 0x99);
///
/// // Unmapped address returns 0xFF
/// assert_eq!(bus.read(0x8000), 0xFF);
/// ```
pub struct Bus {
    slots: Vec<Slot>,
    devices: Vec<DeviceMapping>,
    unmapped_value: u8,
}

impl Bus {
    /// Creates a bus with nothing attached.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            devices: Vec::new(),
            unmapped_value: 0xFF, // Classic 6502 floating bus behavior
        }
    }

    /// Attaches a clocked component such as the CPU.
    pub fn add_component<C: Component + 'static>(&mut self, component: Rc<RefCell<C>>) {
        self.slots.push(Slot::Component(component));
    }

    /// Maps a device into `range` and attaches it to the clock/reset chain.
    ///
    /// # Errors
    ///
    /// `ConfigError::SizeMismatch` when the range length differs from `device.size()`.
    pub fn add_device<D: Device + 'static>(
        &mut self,
        range: AddressRange,
        device: Rc<RefCell<D>>,
    ) -> Result<(), ConfigError> {
        let expected = device.borrow().size();
        if range.len() != expected {
            return Err(ConfigError::SizeMismatch {
                start: range.start(),
                end: range.end(),
                expected,
            });
        }

        log::debug!(
            "mapping {}-byte device at ${:04X}-${:04X}",
            expected,
            range.start(),
            range.end()
        );
        let device: Rc<RefCell<dyn Device>> = device;
        self.slots.push(Slot::Device(Rc::clone(&device)));
        self.devices.push(DeviceMapping { range, device });
        Ok(())
    }

    /// Sends the reset signal to every component, in registration order.
    pub fn reset(&mut self) {
        log::info!("bus reset ({} components)", self.slots.len());
        for slot in self.snapshot_slots() {
            match slot {
                Slot::Component(component) => component.borrow_mut().reset(self),
                Slot::Device(device) => device.borrow_mut().reset(),
            }
        }
    }

    /// Runs one clock cycle on every component, in registration order.
    ///
    /// # Errors
    ///
    /// The first `ExecutionError` raised by a component; later components do not
    /// see this cycle.
    pub fn clock(&mut self) -> Result<(), ExecutionError> {
        for slot in self.snapshot_slots() {
            match slot {
                Slot::Component(component) => component.borrow_mut().clock(self)?,
                Slot::Device(device) => device.borrow_mut().clock(),
            }
        }
        Ok(())
    }

    /// Renders `from..=to` as a hex dump with an ASCII column, 16 bytes per line.
    pub fn dump(&self, from: u16, to: u16) -> String {
        let mut out = String::new();
        let mut line_start = from as u32;
        while line_start <= to as u32 {
            let line_end = (line_start + 15).min(to as u32);
            let bytes: Vec<u8> = (line_start..=line_end)
                .map(|addr| self.read(addr as u16))
                .collect();
            let _ = write!(out, "${:04x}  ", line_start);
            for byte in &bytes {
                let _ = write!(out, "{:02x} ", byte);
            }
            out.push_str("  ");
            out.extend(bytes.iter().map(|&b| {
                if (0x20..0x7F).contains(&b) {
                    b as char
                } else {
                    '.'
                }
            }));
            out.push('\n');
            line_start += 16;
        }
        out
    }

    // The slot list is cloned so a component can be handed `&mut self` as its memory.
    fn snapshot_slots(&self) -> Vec<Slot> {
        self.slots
            .iter()
            .map(|slot| match slot {
                Slot::Component(c) => Slot::Component(Rc::clone(c)),
                Slot::Device(d) => Slot::Device(Rc::clone(d)),
            })
            .collect()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for Bus {
    fn read(&self, addr: u16) -> u8 {
        self.devices
            .iter()
            .find(|mapping| mapping.range.contains(addr))
            .map(|mapping| {
                mapping
                    .device
                    .borrow()
                    .read(addr - mapping.range.start())
            })
            .unwrap_or(self.unmapped_value)
    }

    fn write(&mut self, addr: u16, value: u8) {
        for mapping in &self.devices {
            if mapping.range.contains(addr) {
                mapping
                    .device
                    .borrow_mut()
                    .write(addr - mapping.range.start(), value);
            }
        }
        // Unmapped writes are silently ignored (matching 6502 hardware behavior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Simple test device for unit testing
    struct TestDevice {
        data: Vec<u8>,
        clocks: u32,
    }

    impl TestDevice {
        fn new(size: usize) -> Self {
            Self {
                data: vec![0; size],
                clocks: 0,
            }
        }
    }

    impl Device for TestDevice {
        fn read(&self, offset: u16) -> u8 {
            self.data[offset as usize]
        }

        fn write(&mut self, offset: u16, value: u8) {
            self.data[offset as usize] = value;
        }

        fn size(&self) -> usize {
            self.data.len()
        }

        fn clock(&mut self) {
            self.clocks += 1;
        }

        fn reset(&mut self) {
            self.data.fill(0);
        }
    }

    fn shared(size: usize) -> Rc<RefCell<TestDevice>> {
        Rc::new(RefCell::new(TestDevice::new(size)))
    }

    #[test]
    fn test_bus_empty() {
        let bus = Bus::new();
        // Unmapped reads return 0xFF
        assert_eq!(bus.read(0x0000), 0xFF);
        assert_eq!(bus.read(0x1234), 0xFF);
        assert_eq!(bus.read(0xFFFF), 0xFF);
    }

    #[test]
    fn test_address_range_validation() {
        assert_eq!(
            AddressRange::new(0x2000, 0x1FFF),
            Err(ConfigError::EmptyRange {
                start: 0x2000,
                end: 0x1FFF
            })
        );
        let full = AddressRange::new(0x0000, 0xFFFF).unwrap();
        assert_eq!(full.len(), 0x10000);
        assert!(full.contains(0xFFFF));
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let mut bus = Bus::new();
        let result = bus.add_device(AddressRange::new(0x1000, 0x10FE).unwrap(), shared(256));
        assert_eq!(
            result,
            Err(ConfigError::SizeMismatch {
                start: 0x1000,
                end: 0x10FE,
                expected: 256
            })
        );
    }

    #[test]
    fn test_device_receives_offsets() {
        let mut bus = Bus::new();
        let dev = shared(256);
        bus.add_device(AddressRange::new(0x1000, 0x10FF).unwrap(), dev.clone())
            .unwrap();

        bus.write(0x1000, 0x42);
        bus.write(0x10FF, 0x99);
        assert_eq!(dev.borrow().data[0x00], 0x42);
        assert_eq!(dev.borrow().data[0xFF], 0x99);

        assert_eq!(bus.read(0x0FFF), 0xFF);
        assert_eq!(bus.read(0x1100), 0xFF);
    }

    #[test]
    fn test_clock_and_reset_reach_devices() {
        let mut bus = Bus::new();
        let dev = shared(16);
        bus.add_device(AddressRange::new(0x0000, 0x000F).unwrap(), dev.clone())
            .unwrap();
        bus.write(0x0003, 7);

        bus.clock().unwrap();
        bus.clock().unwrap();
        assert_eq!(dev.borrow().clocks, 2);

        bus.reset();
        assert_eq!(bus.read(0x0003), 0);
    }

    #[test]
    fn test_dump_format() {
        let mut bus = Bus::new();
        let dev = shared(16);
        bus.add_device(AddressRange::new(0x0200, 0x020F).unwrap(), dev)
            .unwrap();
        bus.write(0x0200, b'H');
        bus.write(0x0201, b'i');

        let dump = bus.dump(0x0200, 0x0203);
        assert_eq!(dump, "$0200  48 69 00 00   Hi..\n");
    }
}
