//! Tests for NMI/IRQ servicing and the BRK instruction.
//!
//! Tests cover:
//! - IRQ masking by the I flag, NMI ignoring it
//! - What BRK pushes versus what a hardware interrupt pushes
//! - Servicing only at instruction boundaries
//! - RTI returning to the interrupted code

use sim6502::{CpuConfig, FlatMemory, MemoryBus, Variant, CPU};

const NMI_HANDLER: u16 = 0x9000;
const IRQ_HANDLER: u16 = 0xA000;

/// Helper with vectors installed and `program` at 0x8000, past the reset cycles
fn setup_cpu(variant: Variant, program: &[u8]) -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.load(0xFFFA, &[0x00, 0x90, 0x00, 0x80, 0x00, 0xA0]);
    memory.load(0x8000, program);
    memory.write(NMI_HANDLER, 0x40); // RTI
    memory.write(IRQ_HANDLER, 0x40); // RTI

    let mut cpu = CPU::new(CpuConfig {
        variant,
        ..Default::default()
    });
    cpu.reset(&mut memory);
    while cpu.instr_cycles() > 0 {
        cpu.clock(&mut memory).unwrap();
    }
    (cpu, memory)
}

// ========== IRQ Tests ==========

#[test]
fn test_irq_masked_until_cli() {
    // NOP; CLI; NOP
    let (mut cpu, mut memory) = setup_cpu(Variant::Nmos, &[0xEA, 0x58, 0xEA]);
    let line = cpu.interrupt_line();
    line.request_irq("test");

    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.pc(), 0x8001);
    assert!(line.is_asserted());

    cpu.step(&mut memory).unwrap(); // CLI
    assert!(!cpu.flag_i());

    let before = cpu.cycles();
    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.cycles() - before, 7);
    assert_eq!(cpu.pc(), IRQ_HANDLER);
    assert!(cpu.flag_i());
    assert!(!line.is_asserted());

    // Return address is the instruction that was about to run; B clear in the pushed status
    assert_eq!(memory.read(0x01FD), 0x80);
    assert_eq!(memory.read(0x01FC), 0x02);
    assert_eq!(memory.read(0x01FB), 0x20);
    assert_eq!(cpu.sp(), 0xFA);
}

#[test]
fn test_rti_resumes_interrupted_code() {
    // CLI; NOP; LDA #$01
    let (mut cpu, mut memory) = setup_cpu(Variant::Nmos, &[0x58, 0xEA, 0xA9, 0x01]);
    cpu.step(&mut memory).unwrap();

    cpu.interrupt_line().request_irq("test");
    cpu.step(&mut memory).unwrap(); // serviced
    assert_eq!(cpu.pc(), IRQ_HANDLER);

    cpu.step(&mut memory).unwrap(); // RTI
    assert_eq!(cpu.pc(), 0x8001);
    assert!(!cpu.flag_i());
    assert_eq!(cpu.sp(), 0xFD);

    cpu.step(&mut memory).unwrap();
    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.a(), 0x01);
}

#[test]
fn test_irq_waits_for_instruction_boundary() {
    // CLI; LDA $2000
    let (mut cpu, mut memory) = setup_cpu(Variant::Nmos, &[0x58, 0xAD, 0x00, 0x20]);
    cpu.step(&mut memory).unwrap();

    cpu.clock(&mut memory).unwrap(); // LDA executes
    cpu.interrupt_line().request_irq("test");
    for _ in 0..3 {
        cpu.clock(&mut memory).unwrap();
        assert_eq!(cpu.pc(), 0x8004);
    }

    cpu.clock(&mut memory).unwrap();
    assert_eq!(cpu.pc(), IRQ_HANDLER);
    assert_eq!(memory.read(0x01FC), 0x04);
}

// ========== NMI Tests ==========

#[test]
fn test_nmi_ignores_interrupt_disable() {
    let (mut cpu, mut memory) = setup_cpu(Variant::Nmos, &[0xEA]);
    assert!(cpu.flag_i());

    cpu.interrupt_line().request_nmi("test");
    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.pc(), NMI_HANDLER);
    assert_eq!(memory.read(0x01FD), 0x80);
    assert_eq!(memory.read(0x01FC), 0x00);
    assert_eq!(memory.read(0x01FB) & 0x10, 0x00);
}

#[test]
fn test_nmi_before_irq() {
    let (mut cpu, mut memory) = setup_cpu(Variant::Nmos, &[0x58, 0xEA]);
    cpu.step(&mut memory).unwrap(); // CLI

    let line = cpu.interrupt_line();
    line.request_irq("irq source");
    line.request_nmi("nmi source");

    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.pc(), NMI_HANDLER);
    // I is now set, so the IRQ stays pending
    assert!(line.is_asserted());

    cpu.step(&mut memory).unwrap(); // RTI restores I=0
    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.pc(), IRQ_HANDLER);
    assert!(!line.is_asserted());
}

// ========== BRK Tests ==========

#[test_log::test]
fn test_brk_pushes_pc_plus_two_with_break_flag() {
    let (mut cpu, mut memory) = setup_cpu(Variant::Nmos, &[0x00, 0xFF]);

    let before = cpu.cycles();
    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.cycles() - before, 7);
    assert_eq!(cpu.pc(), IRQ_HANDLER);
    assert_eq!(memory.read(0x01FD), 0x80);
    assert_eq!(memory.read(0x01FC), 0x02);
    assert_eq!(memory.read(0x01FB), 0x34);
    assert!(cpu.flag_i());

    cpu.step(&mut memory).unwrap(); // RTI skips the padding byte
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_brk_decimal_flag_by_variant() {
    // SED; BRK
    let (mut cpu, mut memory) = setup_cpu(Variant::Nmos, &[0xF8, 0x00, 0x00]);
    cpu.step(&mut memory).unwrap();
    cpu.step(&mut memory).unwrap();
    assert!(cpu.flag_d());

    let (mut cpu, mut memory) = setup_cpu(Variant::Cmos, &[0xF8, 0x00, 0x00]);
    cpu.step(&mut memory).unwrap();
    cpu.step(&mut memory).unwrap();
    assert!(!cpu.flag_d());
    assert_eq!(memory.read(0x01FB) & 0x08, 0x08);
}
