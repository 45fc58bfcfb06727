//! Tests for the 2A03 variant used in the NES.
//!
//! Tests cover:
//! - The 7-cycle reset sequence
//! - NMOS behaviour it shares: the opcode table and the indirect JMP page bug
//! - Decimal mode being absent while the D flag itself still works

use sim6502::{
    decode_instruction, CpuConfig, ExecutionError, FlatMemory, MemoryBus, Variant, CPU,
};

/// Helper that loads `program` at 0x8000 and resets a 2A03
fn setup_cpu(program: &[u8]) -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.load(0xFFFC, &[0x00, 0x80]);
    memory.load(0x8000, program);

    let mut cpu = CPU::new(CpuConfig {
        variant: Variant::Nes,
        ..Default::default()
    });
    cpu.reset(&mut memory);
    (cpu, memory)
}

#[test]
fn test_reset_takes_seven_cycles() {
    let (mut cpu, mut memory) = setup_cpu(&[0xEA]);
    assert_eq!(cpu.instr_cycles(), 7);

    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.cycles(), 7 + 2);
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_display_name() {
    assert_eq!(Variant::Nes.to_string(), "2A03");
}

#[test]
fn test_jmp_indirect_page_bug() {
    let (mut cpu, mut memory) = setup_cpu(&[0x6C, 0xFF, 0x10]);
    memory.write(0x10FF, 0x34);
    memory.write(0x1000, 0x12);
    memory.write(0x1100, 0x56);

    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_decodes_with_nmos_table() {
    let instr = decode_instruction(&[0x1A], 0, Variant::Nes).unwrap();
    assert_eq!(instr.mnemonic, "NOP");
    assert!(decode_instruction(&[0x02], 0, Variant::Nes).is_none());

    let (mut cpu, mut memory) = setup_cpu(&[0xA7, 0x10]);
    assert_eq!(
        cpu.step(&mut memory),
        Err(ExecutionError::UnimplementedOpcode {
            opcode: 0xA7,
            mnemonic: "LAX",
            pc: 0x8000
        })
    );
}

#[test]
fn test_sed_sets_flag_but_adc_stays_binary() {
    // SED; CLC; LDA #$19; ADC #$28; PHP
    let (mut cpu, mut memory) = setup_cpu(&[0xF8, 0x18, 0xA9, 0x19, 0x69, 0x28, 0x08]);
    for _ in 0..5 {
        cpu.step(&mut memory).unwrap();
    }

    assert_eq!(cpu.a(), 0x41);
    assert!(cpu.flag_d());
    assert_eq!(memory.read(0x01FD) & 0x08, 0x08);
}

#[test]
fn test_brk_keeps_decimal_flag() {
    // SED; BRK
    let (mut cpu, mut memory) = setup_cpu(&[0xF8, 0x00]);
    memory.load(0xFFFE, &[0x00, 0x90]);
    cpu.step(&mut memory).unwrap();
    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.pc(), 0x9000);
    assert!(cpu.flag_d());
}
