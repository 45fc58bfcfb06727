//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works either on the accumulator or as a read-modify-write on memory, and
//! updates C, Z and N.

use super::{read_operand, write_operand};
use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let value = read_operand(cpu, mem, operand);
    cpu.flag_c = value & 0x80 != 0;
    finish(cpu, mem, operand, value << 1);
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag.
pub(crate) fn execute_lsr<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let value = read_operand(cpu, mem, operand);
    cpu.flag_c = value & 0x01 != 0;
    finish(cpu, mem, operand, value >> 1);
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0; bit 7 becomes the new carry.
pub(crate) fn execute_rol<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let value = read_operand(cpu, mem, operand);
    let carry_in = cpu.flag_c as u8;
    cpu.flag_c = value & 0x80 != 0;
    finish(cpu, mem, operand, (value << 1) | carry_in);
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7; bit 0 becomes the new carry.
pub(crate) fn execute_ror<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let value = read_operand(cpu, mem, operand);
    let carry_in = (cpu.flag_c as u8) << 7;
    cpu.flag_c = value & 0x01 != 0;
    finish(cpu, mem, operand, (value >> 1) | carry_in);
}

fn finish<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand, result: u8) {
    cpu.update_zn(result);
    write_operand(cpu, mem, operand, result);
}
