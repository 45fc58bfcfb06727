//! Output-only parallel port.
//!
//! # Registers
//!
//! | Offset | Write | Read |
//! |---|---|---|
//! | 0 | data latch | data latch |
//! | 1 | bit 0 set: send the latched byte | 0 |
//!
//! Sent bytes go to an output callback. Without one they are logged at `info`.

use super::Device;

const DATA: u16 = 0;
const CONTROL: u16 = 1;

/// Parallel output port with a data latch and a strobe bit.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use sim6502::{Device, ParallelPort};
///
/// let printed = Rc::new(RefCell::new(Vec::new()));
/// let sink = printed.clone();
///
/// let mut port = ParallelPort::new();
/// port.set_output_callback(move |byte| sink.borrow_mut().push(byte));
///
/// port.write(0, b'A');
/// port.write(1, 0x01);
/// assert_eq!(*printed.borrow(), vec![b'A']);
/// ```
pub struct ParallelPort {
    data: u8,
    on_output: Option<Box<dyn FnMut(u8)>>,
}

impl ParallelPort {
    pub fn new() -> Self {
        Self {
            data: 0x00,
            on_output: None,
        }
    }

    /// Set the function that receives every byte sent through the port.
    pub fn set_output_callback<F>(&mut self, callback: F)
    where
        F: FnMut(u8) + 'static,
    {
        self.on_output = Some(Box::new(callback));
    }

    fn send(&mut self) {
        let byte = self.data;
        match self.on_output.as_mut() {
            Some(callback) => callback(byte),
            None => log::info!("parallel port: {:?} (0x{:02X})", byte as char, byte),
        }
    }
}

impl Default for ParallelPort {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for ParallelPort {
    fn read(&self, offset: u16) -> u8 {
        match offset {
            DATA => self.data,
            _ => 0x00,
        }
    }

    fn write(&mut self, offset: u16, value: u8) {
        match offset {
            DATA => self.data = value,
            CONTROL if value & 0x01 != 0 => self.send(),
            _ => {}
        }
    }

    fn size(&self) -> usize {
        2
    }
}
