//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC, DEC: Memory (and, on the 65C02, the accumulator)
//! - INX, INY, DEX, DEY: Index registers
//!
//! All wrap at 8 bits and update Z and N. Carry is not affected.

use super::{read_operand, write_operand};
use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the INC (Increment) instruction.
pub(crate) fn execute_inc<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let result = read_operand(cpu, mem, operand).wrapping_add(1);
    cpu.update_zn(result);
    write_operand(cpu, mem, operand, result);
}

/// Executes the DEC (Decrement) instruction.
pub(crate) fn execute_dec<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let result = read_operand(cpu, mem, operand).wrapping_sub(1);
    cpu.update_zn(result);
    write_operand(cpu, mem, operand, result);
}

pub(crate) fn execute_inx(cpu: &mut CPU) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zn(cpu.x);
}

pub(crate) fn execute_iny(cpu: &mut CPU) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zn(cpu.y);
}

pub(crate) fn execute_dex(cpu: &mut CPU) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zn(cpu.x);
}

pub(crate) fn execute_dey(cpu: &mut CPU) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zn(cpu.y);
}
