//! Tests for ADC/SBC in decimal mode on every variant.
//!
//! The accumulator and carry agree between the NMOS and CMOS parts for valid BCD
//! input; N, V and Z do not always. The 2A03 ignores D entirely.
//!
//! The exhaustive tests compare every (A, operand, carry) input against the
//! algorithms in the "Decimal Mode" appendix on 6502.org: sequences 1 and 2 for
//! ADC, sequence 3 for NMOS SBC and sequence 4 for 65C02 SBC.

use sim6502::{CpuConfig, FlatMemory, MemoryBus, Variant, CPU};

const ADC_IMMEDIATE: u8 = 0x69;
const SBC_IMMEDIATE: u8 = 0xE9;

/// Runs SED; SEC/CLC; LDA #a; <op> #value and returns the CPU
fn run_decimal(variant: Variant, op: u8, a: u8, value: u8, carry: bool) -> CPU {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let set_carry = if carry { 0x38 } else { 0x18 };
    memory.load(0x8000, &[0xF8, set_carry, 0xA9, a, op, value]);

    let mut cpu = CPU::new(CpuConfig {
        variant,
        ..Default::default()
    });
    cpu.reset(&mut memory);
    for _ in 0..4 {
        cpu.step(&mut memory).unwrap();
    }
    cpu
}

// ========== Shared Vectors ==========

#[test]
fn test_adc_decimal_vectors() {
    // (a, value, carry in, result, carry out)
    let vectors = [
        (0x09, 0x01, false, 0x10, false),
        (0x12, 0x34, true, 0x47, false),
        (0x58, 0x46, false, 0x04, true),
        (0x50, 0x50, false, 0x00, true),
        (0x99, 0x01, false, 0x00, true),
        (0x79, 0x00, true, 0x80, false),
    ];

    for variant in [Variant::Nmos, Variant::Cmos] {
        for (a, value, carry, result, carry_out) in vectors {
            let cpu = run_decimal(variant, ADC_IMMEDIATE, a, value, carry);
            assert_eq!(cpu.a(), result, "{variant}: {a:02X} + {value:02X} + {carry}");
            assert_eq!(cpu.flag_c(), carry_out, "{variant}: carry of {a:02X} + {value:02X}");
        }
    }
}

#[test]
fn test_sbc_decimal_vectors() {
    // (a, value, carry in, result, carry out)
    let vectors = [
        (0x46, 0x12, true, 0x34, true),
        (0x40, 0x13, true, 0x27, true),
        (0x32, 0x02, false, 0x29, true),
        (0x00, 0x01, true, 0x99, false),
        (0x12, 0x21, true, 0x91, false),
    ];

    for variant in [Variant::Nmos, Variant::Cmos] {
        for (a, value, carry, result, carry_out) in vectors {
            let cpu = run_decimal(variant, SBC_IMMEDIATE, a, value, carry);
            assert_eq!(cpu.a(), result, "{variant}: {a:02X} - {value:02X} - {}", !carry);
            assert_eq!(cpu.flag_c(), carry_out, "{variant}: carry of {a:02X} - {value:02X}");
        }
    }
}

// ========== Variant Differences ==========

#[test]
fn test_nmos_flags_from_binary_sum() {
    // 0x99 + 0x01: BCD result 0x00, binary sum 0x9A
    let cpu = run_decimal(Variant::Nmos, ADC_IMMEDIATE, 0x99, 0x01, false);
    assert_eq!(cpu.a(), 0x00);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_v());
}

#[test]
fn test_cmos_flags_from_bcd_result() {
    let cpu = run_decimal(Variant::Cmos, ADC_IMMEDIATE, 0x99, 0x01, false);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_nmos_overflow_from_intermediate() {
    let cpu = run_decimal(Variant::Nmos, ADC_IMMEDIATE, 0x58, 0x46, false);
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());

    let cpu = run_decimal(Variant::Cmos, ADC_IMMEDIATE, 0x58, 0x46, false);
    assert!(!cpu.flag_n());
    assert!(cpu.flag_v());
}

#[test]
fn test_sbc_flags_by_variant() {
    // 0x00 - 0x01 borrows: N set on both, Z clear on both
    for variant in [Variant::Nmos, Variant::Cmos] {
        let cpu = run_decimal(variant, SBC_IMMEDIATE, 0x00, 0x01, true);
        assert!(cpu.flag_n(), "{variant}");
        assert!(!cpu.flag_z(), "{variant}");
    }

    // 0x21 - 0x21 = 0 everywhere
    for variant in [Variant::Nmos, Variant::Cmos] {
        let cpu = run_decimal(variant, SBC_IMMEDIATE, 0x21, 0x21, true);
        assert_eq!(cpu.a(), 0x00);
        assert!(cpu.flag_z(), "{variant}");
        assert!(cpu.flag_c(), "{variant}");
    }
}

#[test]
fn test_binary_mode_unaffected_by_variant() {
    for variant in [Variant::Nmos, Variant::Cmos] {
        let mut memory = FlatMemory::new();
        // CLD; CLC; LDA #$50; ADC #$50
        memory.load(0x0000, &[0xD8, 0x18, 0xA9, 0x50, 0x69, 0x50]);
        let mut cpu = CPU::new(CpuConfig {
            variant,
            ..Default::default()
        });
        for _ in 0..4 {
            cpu.step(&mut memory).unwrap();
        }
        assert_eq!(cpu.a(), 0xA0);
        assert!(cpu.flag_v());
        assert!(cpu.flag_n());
        assert!(!cpu.flag_c());
    }
}

// ========== 2A03 ==========

#[test]
fn test_nes_ignores_decimal_flag() {
    let cpu = run_decimal(Variant::Nes, ADC_IMMEDIATE, 0x09, 0x01, false);
    assert_eq!(cpu.a(), 0x0A);
    assert!(cpu.flag_d());

    let cpu = run_decimal(Variant::Nes, SBC_IMMEDIATE, 0x10, 0x01, true);
    assert_eq!(cpu.a(), 0x0F);
    assert!(cpu.flag_c());
}

// ========== Reference Tables ==========

/// Flags and accumulator after one ADC/SBC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Outcome {
    a: u8,
    c: bool,
    n: bool,
    v: bool,
    z: bool,
}

/// A CPU parked on a single `<op> #imm` at $0200 with D set
struct DecimalRig {
    cpu: CPU,
    memory: FlatMemory,
}

impl DecimalRig {
    fn new(variant: Variant, op: u8) -> Self {
        let mut memory = FlatMemory::new();
        memory.load(0x0200, &[op, 0x00]);
        let cpu = CPU::new(CpuConfig {
            variant,
            ..Default::default()
        });
        Self { cpu, memory }
    }

    fn run(&mut self, a: u8, b: u8, carry: bool) -> Outcome {
        self.memory.write(0x0201, b);
        self.cpu.set_pc(0x0200);
        self.cpu.set_a(a);
        self.cpu.set_flag_d(true);
        self.cpu.set_flag_c(carry);
        self.cpu.step(&mut self.memory).unwrap();
        Outcome {
            a: self.cpu.a(),
            c: self.cpu.flag_c(),
            n: self.cpu.flag_n(),
            v: self.cpu.flag_v(),
            z: self.cpu.flag_z(),
        }
    }
}

/// Sequence 1 steps 1a-1b: the adjusted low nibble
fn adc_low_nibble(a: u8, b: u8, c: i32) -> i32 {
    let al = (a & 0x0F) as i32 + (b & 0x0F) as i32 + c;
    if al >= 0x0A {
        ((al + 0x06) & 0x0F) + 0x10
    } else {
        al
    }
}

/// Sequence 1: accumulator and carry
fn adc_seq1(a: u8, b: u8, c: i32) -> (u8, bool) {
    let mut sum = (a & 0xF0) as i32 + (b & 0xF0) as i32 + adc_low_nibble(a, b, c);
    if sum >= 0xA0 {
        sum += 0x60;
    }
    (sum as u8, sum >= 0x100)
}

/// Sequence 2: NMOS N and V, and the V of the 65C02
fn adc_seq2(a: u8, b: u8, c: i32) -> (bool, bool) {
    let sum = (a & 0xF0) as i8 as i32 + (b & 0xF0) as i8 as i32 + adc_low_nibble(a, b, c);
    (sum & 0x80 != 0, !(-128..=127).contains(&sum))
}

/// Sequence 3: NMOS SBC accumulator
fn sbc_seq3(a: u8, b: u8, c: i32) -> u8 {
    let mut al = (a & 0x0F) as i32 - (b & 0x0F) as i32 + c - 1;
    if al < 0 {
        al = ((al - 0x06) & 0x0F) - 0x10;
    }
    let mut diff = (a & 0xF0) as i32 - (b & 0xF0) as i32 + al;
    if diff < 0 {
        diff -= 0x60;
    }
    diff as u8
}

/// Sequence 4: 65C02 SBC accumulator
fn sbc_seq4(a: u8, b: u8, c: i32) -> u8 {
    let al = (a & 0x0F) as i32 - (b & 0x0F) as i32 + c - 1;
    let mut diff = a as i32 - b as i32 + c - 1;
    if diff < 0 {
        diff -= 0x60;
    }
    if al < 0 {
        diff -= 0x06;
    }
    diff as u8
}

/// Plain two's complement ADC, which also supplies every SBC flag but N/Z on the 65C02
fn binary_adc(a: u8, b: u8, c: i32) -> Outcome {
    let sum = a as i32 + b as i32 + c;
    let result = sum as u8;
    Outcome {
        a: result,
        c: sum > 0xFF,
        n: result & 0x80 != 0,
        v: (a ^ result) & (b ^ result) & 0x80 != 0,
        z: result == 0,
    }
}

fn expected_adc(variant: Variant, a: u8, b: u8, c: i32) -> Outcome {
    let (result, carry) = adc_seq1(a, b, c);
    let (n, v) = adc_seq2(a, b, c);
    match variant {
        Variant::Nmos => Outcome {
            a: result,
            c: carry,
            n,
            v,
            z: binary_adc(a, b, c).z,
        },
        Variant::Cmos => Outcome {
            a: result,
            c: carry,
            n: result & 0x80 != 0,
            v,
            z: result == 0,
        },
        Variant::Nes => binary_adc(a, b, c),
    }
}

fn expected_sbc(variant: Variant, a: u8, b: u8, c: i32) -> Outcome {
    let binary = binary_adc(a, !b, c);
    match variant {
        Variant::Nmos => Outcome {
            a: sbc_seq3(a, b, c),
            ..binary
        },
        Variant::Cmos => {
            let result = sbc_seq4(a, b, c);
            Outcome {
                a: result,
                n: result & 0x80 != 0,
                z: result == 0,
                ..binary
            }
        }
        Variant::Nes => binary,
    }
}

fn check_every_input(variant: Variant, op: u8, expected: fn(Variant, u8, u8, i32) -> Outcome) {
    let mut rig = DecimalRig::new(variant, op);
    let mut mismatches = Vec::new();

    for a in 0..=255u8 {
        for b in 0..=255u8 {
            for carry in [false, true] {
                let want = expected(variant, a, b, carry as i32);
                let got = rig.run(a, b, carry);
                if got != want {
                    mismatches.push((a, b, carry, got, want));
                }
            }
        }
    }

    assert!(
        mismatches.is_empty(),
        "{variant} {op:02X}: {} mismatches, first {:?}",
        mismatches.len(),
        mismatches.first()
    );
}

#[test]
fn test_adc_matches_reference_for_every_input() {
    for variant in [Variant::Nmos, Variant::Cmos, Variant::Nes] {
        check_every_input(variant, ADC_IMMEDIATE, expected_adc);
    }
}

#[test]
fn test_sbc_matches_reference_for_every_input() {
    for variant in [Variant::Nmos, Variant::Cmos, Variant::Nes] {
        check_every_input(variant, SBC_IMMEDIATE, expected_sbc);
    }
}
