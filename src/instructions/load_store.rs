//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//! - STZ: Store Zero (65C02)
//!
//! Loads set Z and N from the loaded value; stores affect no flags.

use super::read_operand;
use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let value = read_operand(cpu, mem, operand);
    cpu.a = value;
    cpu.update_zn(value);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let value = read_operand(cpu, mem, operand);
    cpu.x = value;
    cpu.update_zn(value);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let value = read_operand(cpu, mem, operand);
    cpu.y = value;
    cpu.update_zn(value);
}

/// Writes a register (or zero for STZ) to the effective address.
pub(crate) fn store<M: MemoryBus + ?Sized>(mem: &mut M, operand: Operand, value: u8) {
    mem.write(operand.address(), value);
}
