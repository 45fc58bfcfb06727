//! Keyboard input register.
//!
//! A single read-only register that yields the next key the host has buffered,
//! or 0 when there is none. Reading consumes the key.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Device, HostInterface};

pub struct Keyboard {
    host: Rc<RefCell<dyn HostInterface>>,
}

impl Keyboard {
    pub fn new(host: Rc<RefCell<dyn HostInterface>>) -> Self {
        Self { host }
    }
}

impl Device for Keyboard {
    fn read(&self, offset: u16) -> u8 {
        match offset {
            // Characters outside Latin-1 do not fit the register and read as 0
            0 => self
                .host
                .borrow_mut()
                .keyboard()
                .and_then(|ch| u8::try_from(ch).ok())
                .unwrap_or(0),
            _ => 0xFF,
        }
    }

    fn write(&mut self, _offset: u16, _value: u8) {}

    fn size(&self) -> usize {
        1
    }
}
