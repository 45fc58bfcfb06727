//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary CPU state and memory contents, then executes one
//! instruction on any variant.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sim6502::{CpuConfig, FlatMemory, MemoryBus, RunState, Variant, CPU};

#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    /// 0: NMOS, 1: CMOS, anything else: 2A03
    variant: u8,
    irq: bool,
    nmi: bool,
}

#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Target of absolute accesses at 0x4000
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    // Reset vector -> 0x8000, NMI -> 0xA000, IRQ -> 0x9000
    memory.load(0xFFFA, &[0x00, 0xA0, 0x00, 0x80, 0x00, 0x90]);
    memory.load(0x8000, &input.memory.instruction_bytes);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);

    let state = &input.cpu_state;
    let variant = match state.variant {
        0 => Variant::Nmos,
        1 => Variant::Cmos,
        _ => Variant::Nes,
    };
    let mut cpu = CPU::new(CpuConfig {
        variant,
        ..Default::default()
    });
    cpu.reset(&mut memory);

    cpu.set_a(state.a);
    cpu.set_x(state.x);
    cpu.set_y(state.y);
    cpu.set_sp(state.sp);
    cpu.set_status(state.status);
    if state.irq {
        cpu.interrupt_line().request_irq("fuzz");
    }
    if state.nmi {
        cpu.interrupt_line().request_nmi("fuzz");
    }

    // Errors are fine, panics are not
    let before = cpu.cycles();
    let result = cpu.step(&mut memory);

    assert_eq!(cpu.status() & 0x20, 0x20);
    if result.is_err() {
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.instr_cycles(), 0);
    } else if cpu.run_state() == RunState::Normal {
        assert!(cpu.cycles() > before);
    }
    let _ = memory.read(0x0000);
});
