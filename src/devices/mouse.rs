//! Mouse position and button register block.
//!
//! | Offset | Value |
//! |---|---|
//! | 0-1 | pointer X in pixels, little-endian |
//! | 2-3 | pointer Y in pixels, little-endian |
//! | 4 | buttons: bit 0 left, bit 1 right, bit 2 middle |
//!
//! Every read samples the host, so the registers are read-only and always live.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Device, HostInterface};

pub struct Mouse {
    host: Rc<RefCell<dyn HostInterface>>,
}

impl Mouse {
    pub fn new(host: Rc<RefCell<dyn HostInterface>>) -> Self {
        Self { host }
    }
}

impl Device for Mouse {
    fn read(&self, offset: u16) -> u8 {
        let mouse = self.host.borrow().mouse();
        let [x_lo, x_hi] = mouse.x.to_le_bytes();
        let [y_lo, y_hi] = mouse.y.to_le_bytes();
        match offset {
            0 => x_lo,
            1 => x_hi,
            2 => y_lo,
            3 => y_hi,
            4 => (mouse.left as u8) | (mouse.right as u8) << 1 | (mouse.middle as u8) << 2,
            _ => 0xFF,
        }
    }

    fn write(&mut self, _offset: u16, _value: u8) {}

    fn size(&self) -> usize {
        5
    }
}
