//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA, PLA: Push/pull the accumulator
//! - PHP, PLP: Push/pull the processor status
//! - PHX, PLX, PHY, PLY: Push/pull the index registers (65C02)
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP. SP wraps silently
//! in both directions.

use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M) {
    let value = cpu.a;
    cpu.push(mem, value);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy always has B set; the B flag itself is left alone.
pub(crate) fn execute_php<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M) {
    let status = cpu.status() | 0b0001_0000;
    cpu.push(mem, status);
}

/// Executes the PLA (Pull Accumulator) instruction.
pub(crate) fn execute_pla<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M) {
    cpu.a = cpu.pop(mem);
    cpu.update_zn(cpu.a);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// B always reads back as set after the pull.
pub(crate) fn execute_plp<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M) {
    let status = cpu.pop(mem);
    cpu.set_status(status);
    cpu.flag_b = true;
}

pub(crate) fn execute_phx<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M) {
    let value = cpu.x;
    cpu.push(mem, value);
}

pub(crate) fn execute_phy<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M) {
    let value = cpu.y;
    cpu.push(mem, value);
}

pub(crate) fn execute_plx<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M) {
    cpu.x = cpu.pop(mem);
    cpu.update_zn(cpu.x);
}

pub(crate) fn execute_ply<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M) {
    cpu.y = cpu.pop(mem);
    cpu.update_zn(cpu.y);
}
