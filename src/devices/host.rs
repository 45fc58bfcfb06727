//! The host side of the screen, keyboard and mouse.
//!
//! [`Display`](super::Display), [`Keyboard`](super::Keyboard) and
//! [`Mouse`](super::Mouse) forward to a [`HostInterface`] that the embedding
//! application implements: a terminal, a canvas in a browser, or a recording
//! test double.

/// Snapshot of the host mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseInfo {
    pub x: u16,
    pub y: u16,
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

/// Screen, keyboard and mouse capabilities provided by the embedding application.
///
/// Calls must return immediately; the emulator never waits on the host.
pub trait HostInterface {
    fn clear_screen(&mut self);

    fn get_pixel(&self, x: u16, y: u16) -> bool;

    fn set_pixel(&mut self, x: u16, y: u16);

    fn clear_pixel(&mut self, x: u16, y: u16);

    /// Shows `ch` in the character cell at column `x`, row `y`.
    fn set_char(&mut self, x: u16, y: u16, ch: u8);

    /// Moves the visible cursor. Hosts without a cursor can ignore this.
    fn set_cursor(&mut self, _x: u16, _y: u16) {}

    /// Moves all character rows up by one, blanking the last row.
    fn scroll_up(&mut self);

    fn mouse(&self) -> MouseInfo;

    /// The next key press, if any. Consumes it.
    fn keyboard(&mut self) -> Option<char>;
}
