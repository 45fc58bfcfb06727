//! WebAssembly bindings for the sim6502 emulator.
//!
//! This module exposes a small ready-made machine to JavaScript so programs can
//! be run and inspected in a browser.

pub mod api;

pub use api::Emulator6502;
