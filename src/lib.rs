//! # 6502 System Emulator
//!
//! A cycle-stepped emulator for the MOS 6502 (NMOS), WDC 65C02 (CMOS) and NES 2A03 processors,
//! together with the shared bus and the memory-mapped peripherals of a small machine.
//!
//! ## Quick Start
//!
//! ```rust
//! use sim6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//! memory.write(0x8000, 0xA9); // LDA #$42
//! memory.write(0x8001, 0x42);
//!
//! let mut cpu = CPU::new(CpuConfig::default());
//! cpu.reset(&mut memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFD);
//!
//! cpu.step(&mut memory).unwrap();
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Building a machine
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use sim6502::{AddressRange, Bus, CpuConfig, RamDevice, RomDevice, Timer, CPU};
//!
//! let cpu = Rc::new(RefCell::new(CPU::new(CpuConfig::default())));
//! let timer = Rc::new(RefCell::new(Timer::new(cpu.borrow().interrupt_line())));
//!
//! let mut rom = vec![0xEA; 0x1000];
//! rom[0x0FFC] = 0x00; // reset vector -> $F000
//! rom[0x0FFD] = 0xF0;
//!
//! let mut bus = Bus::new();
//! bus.add_component(cpu.clone());
//! bus.add_device(AddressRange::new(0x0000, 0x7FFF).unwrap(), Rc::new(RefCell::new(RamDevice::new(0x8000)))).unwrap();
//! bus.add_device(AddressRange::new(0xD000, 0xD003).unwrap(), timer).unwrap();
//! bus.add_device(AddressRange::new(0xF000, 0xFFFF).unwrap(), Rc::new(RefCell::new(RomDevice::new(rom).unwrap()))).unwrap();
//!
//! bus.reset();
//! for _ in 0..100 {
//!     bus.clock().unwrap();
//! }
//! assert!(cpu.borrow().pc() > 0xF000);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state machine, interrupts, breakpoints
//! - `bus` - The system bus and the clocked `Component` contract
//! - `devices` - The `Device` contract and the peripherals
//! - `memory` - `MemoryBus` trait and a flat 64KB implementation
//! - `opcodes` - NMOS and CMOS opcode tables
//! - `addressing` - Addressing mode enumerations
//! - `disassembler` - Pure decoding and formatting of machine code
//! - `assembler` - One-line-at-a-time assembler writing into memory

pub mod addressing;
pub mod assembler;
pub mod bus;
pub mod cpu;
pub mod devices;
pub mod disassembler;
pub mod memory;
pub mod opcodes;

#[cfg(feature = "wasm")]
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use assembler::{Assembled, Assembler, AssemblerError, SourceError};
pub use bus::{AddressRange, Bus, Component};
pub use cpu::{
    BreakpointAction, BreakpointHandler, CpuConfig, CpuState, RunState, Variant, CPU,
    IRQ_VECTOR, MAX_BREAKPOINT_REDIRECTS, NMI_VECTOR, RESET_VECTOR,
};
pub use devices::{
    Device, Display, DisplayGeometry, HostInterface, InterruptKind, InterruptLine, Keyboard,
    Mouse, MouseInfo, ParallelPort, RamDevice, RealTimeClock, RomDevice, Timer,
};
pub use disassembler::{
    decode_instruction, disassemble, format_instruction, format_listing_line, DisassemblyOptions,
    Instruction,
};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{OpcodeMetadata, Operation, CMOS_OPCODES, NMOS_OPCODES, OPCODE_TABLE};

/// Errors that can occur during CPU execution.
///
/// None of these are retried by the engine; they are propagated out of
/// `clock`/`step`/`run_for_cycles` and out of `Bus::clock`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// A JAM/KIL opcode was fetched. Real silicon locks up here.
    #[error("invalid opcode 0x{opcode:02X} at ${pc:04X}")]
    InvalidOpcode { opcode: u8, pc: u16 },

    /// BRK was fetched while the CPU is configured to stop on BRK.
    #[error("stopped on BRK instruction at ${pc:04X}")]
    StoppedOnBrk { pc: u16 },

    /// Instruction opcode is known but its behaviour has not been implemented.
    #[error("opcode 0x{opcode:02X} ({mnemonic}) at ${pc:04X} is not implemented")]
    UnimplementedOpcode {
        opcode: u8,
        mnemonic: &'static str,
        pc: u16,
    },
}

/// Errors raised while wiring up a machine, before anything runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The end address lies before the start address.
    #[error("invalid address range ${start:04X}-${end:04X}")]
    EmptyRange { start: u16, end: u16 },

    /// The mapped range does not match the number of registers/bytes the device has.
    #[error("address range ${start:04X}-${end:04X} does not fit a device of {expected} bytes")]
    SizeMismatch { start: u16, end: u16, expected: usize },

    /// A ROM was created without any contents.
    #[error("rom needs at least one byte of data")]
    EmptyRom,
}
