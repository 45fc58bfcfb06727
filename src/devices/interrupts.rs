//! Interrupt request lines between devices and the CPU.
//!
//! The CPU owns an [`InterruptLine`] and hands out clones of it. A device keeps its
//! clone and calls [`request_irq`](InterruptLine::request_irq) or
//! [`request_nmi`](InterruptLine::request_nmi) from its `clock()` or register writes;
//! the CPU samples the line at the next instruction fetch boundary.
//!
//! # Interrupt Model
//!
//! - **NMI** is non-maskable and wins when both kinds are pending.
//! - **IRQ** is masked by the I flag. A masked request stays pending and is serviced
//!   at the first fetch boundary after I is cleared.
//! - At most one request per kind is tracked; a second request before servicing
//!   only replaces the recorded source.
//! - Servicing clears the request of the serviced kind.
//!
//! # Example
//!
//! ```rust
//! use sim6502::{CpuConfig, InterruptKind, CPU};
//!
//! let cpu = CPU::new(CpuConfig::default());
//! let line = cpu.interrupt_line();
//!
//! line.request_irq("timer");
//! assert_eq!(line.pending(true), None); // masked by I
//! assert_eq!(line.pending(false), Some((InterruptKind::Irq, "timer")));
//!
//! line.request_nmi("restore key");
//! assert_eq!(line.pending(true), Some((InterruptKind::Nmi, "restore key")));
//! ```

use std::cell::Cell;
use std::rc::Rc;

/// The two hardware interrupt inputs of the 6502.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterruptKind {
    Nmi,
    Irq,
}

#[derive(Debug, Default)]
struct Lines {
    nmi: Cell<Option<&'static str>>,
    irq: Cell<Option<&'static str>>,
}

/// Shared handle to the CPU's pending NMI/IRQ requests.
///
/// Cloning is cheap; all clones observe the same requests.
#[derive(Debug, Clone, Default)]
pub struct InterruptLine {
    lines: Rc<Lines>,
}

impl InterruptLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a non-maskable interrupt on behalf of `source`.
    pub fn request_nmi(&self, source: &'static str) {
        log::trace!("NMI requested by {source}");
        self.lines.nmi.set(Some(source));
    }

    /// Requests a maskable interrupt on behalf of `source`.
    pub fn request_irq(&self, source: &'static str) {
        log::trace!("IRQ requested by {source}");
        self.lines.irq.set(Some(source));
    }

    /// The request that should be serviced now, given the current I flag.
    pub fn pending(&self, irq_disabled: bool) -> Option<(InterruptKind, &'static str)> {
        if let Some(source) = self.lines.nmi.get() {
            return Some((InterruptKind::Nmi, source));
        }
        match self.lines.irq.get() {
            Some(source) if !irq_disabled => Some((InterruptKind::Irq, source)),
            _ => None,
        }
    }

    /// True if any request is recorded, masked or not.
    pub fn is_asserted(&self) -> bool {
        self.lines.nmi.get().is_some() || self.lines.irq.get().is_some()
    }

    /// Drops the request of the given kind.
    pub fn clear(&self, kind: InterruptKind) {
        match kind {
            InterruptKind::Nmi => self.lines.nmi.set(None),
            InterruptKind::Irq => self.lines.irq.set(None),
        }
    }

    /// Drops all requests.
    pub fn clear_all(&self) {
        self.lines.nmi.set(None);
        self.lines.irq.set(None);
    }
}
