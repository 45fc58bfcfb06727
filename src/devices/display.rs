//! Text and bitmap display controller.
//!
//! Neither the character matrix nor the bitmap is memory-mapped. Programs place a
//! position in the registers and then read or write the character or pixel there;
//! the controller keeps a copy of the characters and forwards every change to the
//! [`HostInterface`].
//!
//! # Registers
//!
//! | Offset | Value |
//! |---|---|
//! | 0x0 | character cell X |
//! | 0x1 | character cell Y |
//! | 0x2 | character at the cell (r/w, cursor unaffected) |
//! | 0x3-0x4 | pixel X, little-endian |
//! | 0x5-0x6 | pixel Y, little-endian |
//! | 0x7 | pixel at X/Y (r/w, 0 = clear) |
//! | 0x8 | cursor X, clamped to the last column |
//! | 0x9 | cursor Y, clamped to the last row |
//! | 0xA | character at the cursor; writes advance the cursor |
//!
//! Writes to 0xA interpret the control codes backspace (0x08), tab (0x09),
//! newline (0x0A), form feed (0x0C, clears the screen) and carriage return (0x0D).
//! Running off the last row scrolls the text up.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Device, HostInterface};

const BACKSPACE: u8 = 0x08;
const TAB: u8 = 0x09;
const NEWLINE: u8 = 0x0A;
const FORM_FEED: u8 = 0x0C;
const CARRIAGE_RETURN: u8 = 0x0D;

/// Character grid and bitmap dimensions of a [`Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayGeometry {
    pub columns: u16,
    pub rows: u16,
    pub pixel_width: u16,
    pub pixel_height: u16,
}

impl Default for DisplayGeometry {
    /// 80x30 characters over a 640x480 bitmap.
    fn default() -> Self {
        Self {
            columns: 80,
            rows: 30,
            pixel_width: 640,
            pixel_height: 480,
        }
    }
}

/// Memory-mapped display controller.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use sim6502::{Device, Display, DisplayGeometry, HostInterface, MouseInfo};
///
/// #[derive(Default)]
/// struct Screen {
///     text: Vec<(u16, u16, u8)>,
/// }
///
/// impl HostInterface for Screen {
///     fn clear_screen(&mut self) {}
///     fn get_pixel(&self, _x: u16, _y: u16) -> bool { false }
///     fn set_pixel(&mut self, _x: u16, _y: u16) {}
///     fn clear_pixel(&mut self, _x: u16, _y: u16) {}
///     fn set_char(&mut self, x: u16, y: u16, ch: u8) { self.text.push((x, y, ch)); }
///     fn scroll_up(&mut self) {}
///     fn mouse(&self) -> MouseInfo { MouseInfo::default() }
///     fn keyboard(&mut self) -> Option<char> { None }
/// }
///
/// let screen = Rc::new(RefCell::new(Screen::default()));
/// let mut display = Display::new(screen.clone(), DisplayGeometry::default());
///
/// display.write(0xA, b'H');
/// display.write(0xA, b'i');
/// assert_eq!(screen.borrow().text, vec![(0, 0, b'H'), (1, 0, b'i')]);
/// assert_eq!(display.read(0x8), 2); // cursor moved on
/// ```
pub struct Display {
    host: Rc<RefCell<dyn HostInterface>>,
    geometry: DisplayGeometry,
    chars: Vec<u8>,
    cursor_x: u16,
    cursor_y: u16,
    char_x: u8,
    char_y: u8,
    pixel_x: u16,
    pixel_y: u16,
}

impl Display {
    /// Creates a display with a blank character grid. Zero dimensions count as 1.
    pub fn new(host: Rc<RefCell<dyn HostInterface>>, geometry: DisplayGeometry) -> Self {
        let geometry = DisplayGeometry {
            columns: geometry.columns.max(1),
            rows: geometry.rows.max(1),
            ..geometry
        };
        Self {
            host,
            geometry,
            chars: vec![b' '; geometry.columns as usize * geometry.rows as usize],
            cursor_x: 0,
            cursor_y: 0,
            char_x: 0,
            char_y: 0,
            pixel_x: 0,
            pixel_y: 0,
        }
    }

    pub fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    /// Character at column `x`, row `y` of the grid, if inside it.
    pub fn char_at(&self, x: u16, y: u16) -> Option<u8> {
        self.cell_index(x, y).map(|index| self.chars[index])
    }

    /// The cursor as (column, row).
    pub fn cursor(&self) -> (u16, u16) {
        (self.cursor_x, self.cursor_y)
    }

    fn cell_index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.geometry.columns && y < self.geometry.rows)
            .then(|| y as usize * self.geometry.columns as usize + x as usize)
    }

    fn put_char(&mut self, x: u16, y: u16, ch: u8) {
        if let Some(index) = self.cell_index(x, y) {
            self.chars[index] = ch;
            self.host.borrow_mut().set_char(x, y, ch);
        }
    }

    fn write_at_cursor(&mut self, ch: u8) {
        match ch {
            BACKSPACE => {
                if self.cursor_x > 0 {
                    self.cursor_x -= 1;
                } else if self.cursor_y > 0 {
                    self.cursor_y -= 1;
                    self.cursor_x = self.geometry.columns - 1;
                }
                self.put_char(self.cursor_x, self.cursor_y, b' ');
            }
            TAB => {
                self.cursor_x = (self.cursor_x & !7) + 8;
                if self.cursor_x >= self.geometry.columns {
                    self.cursor_x = 0;
                    self.cursor_down();
                }
            }
            NEWLINE => {
                self.cursor_x = 0;
                self.cursor_down();
            }
            FORM_FEED => self.reset(),
            CARRIAGE_RETURN => self.cursor_x = 0,
            _ => {
                self.put_char(self.cursor_x, self.cursor_y, ch);
                self.cursor_x += 1;
                if self.cursor_x >= self.geometry.columns {
                    self.cursor_x = 0;
                    self.cursor_down();
                }
            }
        }
        self.host
            .borrow_mut()
            .set_cursor(self.cursor_x, self.cursor_y);
    }

    fn cursor_down(&mut self) {
        self.cursor_y += 1;
        if self.cursor_y >= self.geometry.rows {
            let columns = self.geometry.columns as usize;
            self.chars.copy_within(columns.., 0);
            let len = self.chars.len();
            self.chars[len - columns..].fill(b' ');
            self.cursor_y = self.geometry.rows - 1;
            self.host.borrow_mut().scroll_up();
        }
    }
}

impl Device for Display {
    fn read(&self, offset: u16) -> u8 {
        match offset {
            0x0 => self.char_x,
            0x1 => self.char_y,
            0x2 => self
                .char_at(self.char_x as u16, self.char_y as u16)
                .unwrap_or(0xFF),
            0x3 => self.pixel_x.to_le_bytes()[0],
            0x4 => self.pixel_x.to_le_bytes()[1],
            0x5 => self.pixel_y.to_le_bytes()[0],
            0x6 => self.pixel_y.to_le_bytes()[1],
            0x7 => self.host.borrow().get_pixel(self.pixel_x, self.pixel_y) as u8,
            0x8 => self.cursor_x as u8,
            0x9 => self.cursor_y as u8,
            0xA => self.char_at(self.cursor_x, self.cursor_y).unwrap_or(0xFF),
            _ => 0xFF,
        }
    }

    fn write(&mut self, offset: u16, value: u8) {
        match offset {
            0x0 => self.char_x = value,
            0x1 => self.char_y = value,
            0x2 => self.put_char(self.char_x as u16, self.char_y as u16, value),
            0x3 => self.pixel_x = (self.pixel_x & 0xFF00) | value as u16,
            0x4 => self.pixel_x = (self.pixel_x & 0x00FF) | (value as u16) << 8,
            0x5 => self.pixel_y = (self.pixel_y & 0xFF00) | value as u16,
            0x6 => self.pixel_y = (self.pixel_y & 0x00FF) | (value as u16) << 8,
            0x7 => {
                let (x, y) = (self.pixel_x, self.pixel_y);
                if x < self.geometry.pixel_width && y < self.geometry.pixel_height {
                    let mut host = self.host.borrow_mut();
                    if value == 0 {
                        host.clear_pixel(x, y);
                    } else {
                        host.set_pixel(x, y);
                    }
                }
            }
            0x8 => {
                self.cursor_x = (value as u16).min(self.geometry.columns - 1);
                self.host.borrow_mut().set_cursor(self.cursor_x, self.cursor_y);
            }
            0x9 => {
                self.cursor_y = (value as u16).min(self.geometry.rows - 1);
                self.host.borrow_mut().set_cursor(self.cursor_x, self.cursor_y);
            }
            0xA => self.write_at_cursor(value),
            _ => {}
        }
    }

    fn size(&self) -> usize {
        11
    }

    fn reset(&mut self) {
        self.chars.fill(b' ');
        self.cursor_x = 0;
        self.cursor_y = 0;
        self.char_x = 0;
        self.char_y = 0;
        self.pixel_x = 0;
        self.pixel_y = 0;
        self.host.borrow_mut().clear_screen();
    }
}
