//! Real-time clock showing the host's wall-clock time.
//!
//! # Registers (read-only)
//!
//! | Offset | Value |
//! |---|---|
//! | 0-1 | year, little-endian |
//! | 2 | month, 1-12 |
//! | 3 | day, 1-31 |
//! | 4 | hour, 0-23 |
//! | 5 | minute, 0-59 |
//! | 6 | second, 0-59 |
//! | 7-8 | millisecond 0-999, little-endian |
//!
//! Every read samples the clock anew. Programs that need a consistent
//! timestamp should read the registers twice and compare.

use time::OffsetDateTime;

use super::Device;

/// Memory-mapped time of day.
///
/// Uses the host's local time zone when it can be determined and UTC otherwise.
#[derive(Debug, Default)]
pub struct RealTimeClock;

impl RealTimeClock {
    pub fn new() -> Self {
        Self
    }

    fn now() -> OffsetDateTime {
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }

    /// Register value for `offset` at the given moment.
    pub fn register_at(offset: u16, now: OffsetDateTime) -> u8 {
        let [year_lo, year_hi] = (now.year() as u16).to_le_bytes();
        let [ms_lo, ms_hi] = now.millisecond().to_le_bytes();
        match offset {
            0 => year_lo,
            1 => year_hi,
            2 => u8::from(now.month()),
            3 => now.day(),
            4 => now.hour(),
            5 => now.minute(),
            6 => now.second(),
            7 => ms_lo,
            8 => ms_hi,
            _ => 0xFF,
        }
    }
}

impl Device for RealTimeClock {
    fn read(&self, offset: u16) -> u8 {
        Self::register_at(offset, Self::now())
    }

    fn write(&mut self, _offset: u16, _value: u8) {}

    fn size(&self) -> usize {
        9
    }
}
