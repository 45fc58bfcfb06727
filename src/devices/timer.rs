//! Programmable interval timer.
//!
//! # Registers
//!
//! | Offset | Write | Read |
//! |---|---|---|
//! | 0 | control: bit 0 enable, bit 1 raise NMI instead of IRQ | control bits |
//! | 1-3 | interval, 24-bit little-endian | live counter, 24-bit little-endian |
//!
//! While enabled with a non-zero interval the counter advances once per clock.
//! When it reaches the interval the timer raises its interrupt and starts over
//! from zero, so an interval of N fires exactly every N cycles.

use super::{Device, InterruptLine};

const CONTROL: u16 = 0;
const ENABLE: u8 = 0b0000_0001;
const USE_NMI: u8 = 0b0000_0010;

/// A 24-bit interval timer that raises IRQ or NMI.
///
/// # Examples
///
/// ```rust
/// use sim6502::{Device, InterruptLine, Timer};
///
/// let line = InterruptLine::new();
/// let mut timer = Timer::new(line.clone());
/// timer.write(1, 3); // interval = 3
/// timer.write(0, 1); // enable, IRQ
///
/// timer.clock();
/// timer.clock();
/// assert!(!line.is_asserted());
/// timer.clock();
/// assert!(line.is_asserted());
/// ```
pub struct Timer {
    interrupts: InterruptLine,
    enabled: bool,
    nmi: bool,
    interval: u32,
    counter: u32,
}

impl Timer {
    pub fn new(interrupts: InterruptLine) -> Self {
        Self {
            interrupts,
            enabled: false,
            nmi: false,
            interval: 0,
            counter: 0,
        }
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }
}

impl Device for Timer {
    fn read(&self, offset: u16) -> u8 {
        match offset {
            CONTROL => (self.enabled as u8) | ((self.nmi as u8) << 1),
            1..=3 => self.counter.to_le_bytes()[offset as usize - 1],
            _ => 0xFF,
        }
    }

    fn write(&mut self, offset: u16, value: u8) {
        match offset {
            CONTROL => {
                let enable = value & ENABLE != 0;
                if enable && !self.enabled {
                    self.counter = 0;
                }
                self.enabled = enable;
                self.nmi = value & USE_NMI != 0;
            }
            1..=3 => {
                let shift = 8 * (offset as u32 - 1);
                self.interval = (self.interval & !(0xFF << shift)) | ((value as u32) << shift);
            }
            _ => {}
        }
    }

    fn size(&self) -> usize {
        4
    }

    fn clock(&mut self) {
        if !self.enabled || self.interval == 0 {
            return;
        }
        self.counter += 1;
        if self.counter == self.interval {
            if self.nmi {
                self.interrupts.request_nmi("timer");
            } else {
                self.interrupts.request_irq("timer");
            }
            self.counter = 0;
        }
    }

    fn reset(&mut self) {
        self.enabled = false;
        self.nmi = false;
        self.interval = 0;
        self.counter = 0;
    }
}
