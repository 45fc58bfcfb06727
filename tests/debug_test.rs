//! Tests for breakpoints, stop-on-BRK and execution errors.
//!
//! Tests cover:
//! - Breakpoint actions: moving PC, substituting the opcode, forcing BRK
//! - The bound on consecutive breakpoint redirects
//! - The BRK handler and stop-on-BRK mode
//! - JAM and unimplemented opcodes leaving the CPU at the fetch boundary

use std::cell::RefCell;
use std::rc::Rc;

use sim6502::{
    BreakpointAction, CpuConfig, ExecutionError, FlatMemory, MemoryBus, CPU,
    MAX_BREAKPOINT_REDIRECTS,
};

/// Helper with `program` at 0x8000 and the IRQ/BRK vector at 0xA000
fn setup_cpu(config: CpuConfig, program: &[u8]) -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.load(0xFFFC, &[0x00, 0x80, 0x00, 0xA0]);
    memory.load(0x8000, program);

    let mut cpu = CPU::new(config);
    cpu.reset(&mut memory);
    while cpu.instr_cycles() > 0 {
        cpu.clock(&mut memory).unwrap();
    }
    (cpu, memory)
}

fn jump_to(address: u16) -> BreakpointAction {
    BreakpointAction {
        change_pc: Some(address),
        ..Default::default()
    }
}

// ========== Breakpoint Tests ==========

#[test]
fn test_breakpoint_sees_cpu_and_can_edit_it() {
    let (mut cpu, mut memory) = setup_cpu(CpuConfig::default(), &[0xAA]); // TAX
    let hits = Rc::new(RefCell::new(Vec::new()));
    let record = hits.clone();
    cpu.add_breakpoint(0x8000, move |cpu, pc| {
        record.borrow_mut().push((pc, cpu.cycles()));
        cpu.set_a(0x99);
        BreakpointAction::default()
    });

    cpu.step(&mut memory).unwrap();

    assert_eq!(*hits.borrow(), vec![(0x8000, 8)]);
    assert_eq!(cpu.x(), 0x99);
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_breakpoint_moves_pc() {
    let (mut cpu, mut memory) = setup_cpu(CpuConfig::default(), &[0x02]); // JAM, never reached
    memory.load(0x9000, &[0xA9, 0x07]);
    cpu.add_breakpoint(0x8000, |_, _| jump_to(0x9000));

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x07);
    assert_eq!(cpu.pc(), 0x9002);
}

#[test]
fn test_breakpoint_substitutes_opcode() {
    let (mut cpu, mut memory) = setup_cpu(CpuConfig::default(), &[0x02]);
    cpu.add_breakpoint(0x8000, |_, _| BreakpointAction {
        change_opcode: Some(0xE8), // INX
        ..Default::default()
    });

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.x(), 1);
    assert_eq!(cpu.pc(), 0x8001);
    // Memory is untouched
    assert_eq!(memory.read(0x8000), 0x02);
}

#[test]
fn test_breakpoint_causes_brk() {
    let (mut cpu, mut memory) = setup_cpu(CpuConfig::default(), &[0xEA]);
    cpu.add_breakpoint(0x8000, |_, _| BreakpointAction {
        cause_brk: true,
        ..Default::default()
    });

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(memory.read(0x01FC), 0x02);
    assert_eq!(memory.read(0x01FB) & 0x10, 0x10);
}

#[test]
fn test_change_pc_wins_over_other_actions() {
    let (mut cpu, mut memory) = setup_cpu(CpuConfig::default(), &[0xEA]);
    memory.write(0x9000, 0xC8); // INY
    cpu.add_breakpoint(0x8000, |_, _| BreakpointAction {
        change_pc: Some(0x9000),
        change_opcode: Some(0xE8),
        cause_brk: true,
    });

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.y(), 1);
    assert_eq!(cpu.x(), 0);
    assert_eq!(cpu.pc(), 0x9001);
}

#[test]
fn test_remove_breakpoint() {
    let (mut cpu, mut memory) = setup_cpu(CpuConfig::default(), &[0xEA, 0xEA]);
    cpu.add_breakpoint(0x8000, |_, _| jump_to(0x8001));

    assert!(cpu.remove_breakpoint(0x8000));
    assert!(!cpu.remove_breakpoint(0x8000));

    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.pc(), 0x8001);
}

#[test_log::test]
fn test_redirect_loop_is_bounded() {
    let (mut cpu, mut memory) = setup_cpu(CpuConfig::default(), &[0xE8]); // INX
    memory.write(0x9000, 0xC8); // INY
    let calls = Rc::new(RefCell::new(0usize));

    let counter = calls.clone();
    cpu.add_breakpoint(0x8000, move |_, _| {
        *counter.borrow_mut() += 1;
        jump_to(0x9000)
    });
    let counter = calls.clone();
    cpu.add_breakpoint(0x9000, move |_, _| {
        *counter.borrow_mut() += 1;
        jump_to(0x8000)
    });

    cpu.step(&mut memory).unwrap();

    // An even number of redirects lands back on $8000, which then runs unchecked
    assert_eq!(MAX_BREAKPOINT_REDIRECTS % 2, 0);
    assert_eq!(*calls.borrow(), MAX_BREAKPOINT_REDIRECTS);
    assert_eq!(cpu.x(), 1);
    assert_eq!(cpu.y(), 0);
    assert_eq!(cpu.pc(), 0x8001);
}

// ========== BRK Tests ==========

#[test]
fn test_brk_handler_skips_brk() {
    // BRK; signature byte; LDA #$05
    let (mut cpu, mut memory) = setup_cpu(CpuConfig::default(), &[0x00, 0x42, 0xA9, 0x05]);
    let signatures = Rc::new(RefCell::new(Vec::new()));
    let seen = signatures.clone();
    let memory_copy = memory.clone();

    cpu.set_brk_handler(Some(Box::new(move |_, pc| {
        seen.borrow_mut().push(memory_copy.read(pc.wrapping_add(1)));
        jump_to(pc.wrapping_add(2))
    })));

    cpu.step(&mut memory).unwrap();

    assert_eq!(*signatures.borrow(), vec![0x42]);
    assert_eq!(cpu.a(), 0x05);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_brk_handler_cleared() {
    let (mut cpu, mut memory) = setup_cpu(CpuConfig::default(), &[0x00, 0x00]);
    cpu.set_brk_handler(Some(Box::new(|_, pc| jump_to(pc + 2))));
    cpu.set_brk_handler(None);

    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.pc(), 0xA000);
}

#[test]
fn test_stop_on_brk() {
    let config = CpuConfig {
        stop_on_brk: true,
        ..Default::default()
    };
    let (mut cpu, mut memory) = setup_cpu(config, &[0xEA, 0x00]);

    cpu.step(&mut memory).unwrap();
    let cycles = cpu.cycles();

    let err = cpu.step(&mut memory).unwrap_err();
    assert_eq!(err, ExecutionError::StoppedOnBrk { pc: 0x8001 });
    assert_eq!(err.to_string(), "stopped on BRK instruction at $8001");
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.cycles(), cycles);
    assert_eq!(cpu.sp(), 0xFD);
}

// ========== Error Tests ==========

#[test]
fn test_jam_opcode_is_an_error() {
    let (mut cpu, mut memory) = setup_cpu(CpuConfig::default(), &[0x02]);

    for _ in 0..2 {
        assert_eq!(
            cpu.step(&mut memory),
            Err(ExecutionError::InvalidOpcode {
                opcode: 0x02,
                pc: 0x8000
            })
        );
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.instr_cycles(), 0);
        assert_eq!(cpu.cycles(), 8);
    }
}

#[test]
fn test_undocumented_opcode_is_unimplemented() {
    let (mut cpu, mut memory) = setup_cpu(CpuConfig::default(), &[0xA7, 0x10]);

    let err = cpu.step(&mut memory).unwrap_err();
    assert_eq!(
        err,
        ExecutionError::UnimplementedOpcode {
            opcode: 0xA7,
            mnemonic: "LAX",
            pc: 0x8000
        }
    );
    assert_eq!(err.to_string(), "opcode 0xA7 (LAX) at $8000 is not implemented");
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_run_for_cycles_propagates_errors() {
    // INX; INX; JAM
    let (mut cpu, mut memory) = setup_cpu(CpuConfig::default(), &[0xE8, 0xE8, 0x12]);

    let err = cpu.run_for_cycles(&mut memory, 1000).unwrap_err();
    assert_eq!(
        err,
        ExecutionError::InvalidOpcode {
            opcode: 0x12,
            pc: 0x8002
        }
    );
    assert_eq!(cpu.x(), 2);
}
