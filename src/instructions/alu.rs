//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic
//! - CMP, CPX, CPY: Comparisons
//! - BIT: Bit test
//!
//! ## Decimal mode
//!
//! ADC and SBC honour the D flag on both variants, but the flags differ:
//!
//! - **NMOS**: Z reflects the binary result, N and V the intermediate result after
//!   the low-nibble correction. For SBC all flags come from the binary difference.
//! - **CMOS**: N and Z reflect the corrected BCD result.
//!
//! The NMOS formulas reproduce the behaviour of real silicon for every input,
//! including invalid BCD digits. The 2A03 has no decimal mode at all: D can be set
//! but ADC and SBC stay binary.

use super::read_operand;
use crate::addressing::Operand;
use crate::{MemoryBus, Variant, CPU};

/// Executes the ADC (Add with Carry) instruction.
pub(crate) fn execute_adc<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let value = read_operand(cpu, mem, operand);
    if !cpu.flag_d {
        add_binary(cpu, value);
    } else {
        match cpu.config.variant {
            Variant::Nmos => add_decimal_nmos(cpu, value),
            Variant::Cmos => add_decimal_cmos(cpu, value),
            Variant::Nes => add_binary(cpu, value),
        }
    }
}

/// Executes the SBC (Subtract with Carry) instruction.
pub(crate) fn execute_sbc<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let value = read_operand(cpu, mem, operand);
    match cpu.config.variant {
        Variant::Nmos => subtract_nmos(cpu, value),
        Variant::Cmos if cpu.flag_d => subtract_decimal_cmos(cpu, value),
        // Binary SBC is ADC of the one's complement
        Variant::Cmos | Variant::Nes => add_binary(cpu, !value),
    }
}

fn add_binary(cpu: &mut CPU, value: u8) {
    let a = cpu.a;
    let result16 = a as u16 + value as u16 + cpu.flag_c as u16;
    let result = result16 as u8;

    cpu.flag_c = result16 > 0xFF;
    // Overflow: both operands share a sign the result does not
    cpu.flag_v = ((a ^ result) & (value ^ result) & 0x80) != 0;
    cpu.update_zn(result);
    cpu.a = result;
}

fn add_decimal_nmos(cpu: &mut CPU, value: u8) {
    let a = cpu.a as u16;
    let value = value as u16;
    let carry = cpu.flag_c as u16;

    let mut tmp = (a & 0x0F) + (value & 0x0F) + carry;
    if tmp > 0x09 {
        tmp += 0x06;
    }
    tmp = if tmp <= 0x0F {
        (tmp & 0x0F) + (a & 0xF0) + (value & 0xF0)
    } else {
        (tmp & 0x0F) + (a & 0xF0) + (value & 0xF0) + 0x10
    };

    cpu.flag_z = (a + value + carry) & 0xFF == 0;
    cpu.flag_n = tmp & 0x80 != 0;
    cpu.flag_v = ((a ^ tmp) & 0x80) != 0 && ((a ^ value) & 0x80) == 0;
    if tmp & 0x1F0 > 0x90 {
        tmp += 0x60;
    }
    cpu.flag_c = tmp > 0xF0;
    cpu.a = tmp as u8;
}

fn add_decimal_cmos(cpu: &mut CPU, value: u8) {
    let a = cpu.a as u16;
    let value = value as u16;

    let mut lo = (a & 0x0F) + (value & 0x0F) + cpu.flag_c as u16;
    let mut hi = (a & 0xF0) + (value & 0xF0);
    if lo > 0x09 {
        hi += 0x10;
        lo += 0x06;
    }
    cpu.flag_v = (!(a ^ value) & (a ^ hi) & 0x80) != 0;
    if hi > 0x90 {
        hi += 0x60;
    }
    cpu.flag_c = hi >= 0x100;

    let result = ((lo & 0x0F) + (hi & 0xF0)) as u8;
    cpu.update_zn(result);
    cpu.a = result;
}

fn subtract_nmos(cpu: &mut CPU, value: u8) {
    let a = cpu.a as u16;
    let value = value as u16;
    let borrow = !cpu.flag_c as u16;
    let tmp = a.wrapping_sub(value).wrapping_sub(borrow);

    cpu.flag_v = ((a ^ value) & (a ^ tmp) & 0x80) != 0;
    if cpu.flag_d {
        let mut tmp_a = (a & 0x0F).wrapping_sub(value & 0x0F).wrapping_sub(borrow);
        tmp_a = if tmp_a & 0x10 != 0 {
            (tmp_a.wrapping_sub(6) & 0x0F) | (a & 0xF0).wrapping_sub(value & 0xF0).wrapping_sub(0x10)
        } else {
            (tmp_a & 0x0F) | (a & 0xF0).wrapping_sub(value & 0xF0)
        };
        if tmp_a & 0x100 != 0 {
            tmp_a = tmp_a.wrapping_sub(0x60);
        }
        cpu.a = tmp_a as u8;
    } else {
        cpu.a = tmp as u8;
    }

    // Flags always come from the binary difference
    cpu.flag_c = tmp < 0x100;
    cpu.flag_z = tmp & 0xFF == 0;
    cpu.flag_n = tmp & 0x80 != 0;
}

fn subtract_decimal_cmos(cpu: &mut CPU, value: u8) {
    let a = cpu.a as u16;
    let value = value as u16;
    let borrow = !cpu.flag_c as u16;
    let mut tmp = a.wrapping_sub(value).wrapping_sub(borrow);

    cpu.flag_v = ((a ^ tmp) & (a ^ value) & 0x80) != 0;
    if tmp > 0xFF {
        tmp = tmp.wrapping_sub(0x60);
    }
    let lo = (a & 0x0F).wrapping_sub(value & 0x0F).wrapping_sub(borrow);
    if lo > 0xFF {
        tmp = tmp.wrapping_sub(0x06);
    }

    cpu.flag_c = a.wrapping_sub(borrow) >= value && a >= borrow;
    let result = tmp as u8;
    cpu.update_zn(result);
    cpu.a = result;
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let result = cpu.a & read_operand(cpu, mem, operand);
    cpu.update_zn(result);
    cpu.a = result;
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let result = cpu.a | read_operand(cpu, mem, operand);
    cpu.update_zn(result);
    cpu.a = result;
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let result = cpu.a ^ read_operand(cpu, mem, operand);
    cpu.update_zn(result);
    cpu.a = result;
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let value = read_operand(cpu, mem, operand);
    let register = cpu.a;
    compare(cpu, register, value);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let value = read_operand(cpu, mem, operand);
    let register = cpu.x;
    compare(cpu, register, value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let value = read_operand(cpu, mem, operand);
    let register = cpu.y;
    compare(cpu, register, value);
}

// C = register >= value, Z = equal, N = bit 7 of the difference
fn compare(cpu: &mut CPU, register: u8, value: u8) {
    cpu.flag_c = register >= value;
    cpu.update_zn(register.wrapping_sub(value));
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from A AND memory; N and V are copied from bits 7 and 6 of memory.
/// The 65C02 immediate form has no memory byte to copy from and only sets Z.
pub(crate) fn execute_bit<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let value = read_operand(cpu, mem, operand);
    cpu.flag_z = cpu.a & value == 0;
    if !matches!(operand, Operand::Immediate(_)) {
        cpu.flag_n = value & 0x80 != 0;
        cpu.flag_v = value & 0x40 != 0;
    }
}
