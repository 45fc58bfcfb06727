//! # 65C02 Instructions
//!
//! Instructions only the CMOS part has, other than the register variants that
//! live with their NMOS relatives (STZ, PHX/PLY, BRA, INC A):
//! - TSB, TRB: Test and set/reset memory bits against A
//! - RMB0-7, SMB0-7: Reset/set one bit of a zero page byte
//! - BBR0-7, BBS0-7: Branch on one bit of a zero page byte
//! - WAI: Wait for interrupt
//! - STP: Stop the processor

use super::read_operand;
use crate::addressing::Operand;
use crate::{MemoryBus, RunState, CPU};

/// Executes TSB. Z reflects `A & memory` before the bits of A are set in memory.
pub(crate) fn execute_tsb<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let value = read_operand(cpu, mem, operand);
    cpu.flag_z = value & cpu.a == 0;
    mem.write(operand.address(), value | cpu.a);
}

/// Executes TRB. Z reflects `A & memory` before the bits of A are cleared in memory.
pub(crate) fn execute_trb<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let value = read_operand(cpu, mem, operand);
    cpu.flag_z = value & cpu.a == 0;
    mem.write(operand.address(), value & !cpu.a);
}

pub(crate) fn execute_rmb<M: MemoryBus + ?Sized>(mem: &mut M, operand: Operand, bit: u8) {
    let address = operand.address();
    let value = mem.read(address);
    mem.write(address, value & !(1 << bit));
}

pub(crate) fn execute_smb<M: MemoryBus + ?Sized>(mem: &mut M, operand: Operand, bit: u8) {
    let address = operand.address();
    let value = mem.read(address);
    mem.write(address, value | (1 << bit));
}

/// Executes BBRn: branch when bit `bit` of the zero page byte is clear.
pub(crate) fn execute_bbr<M: MemoryBus + ?Sized>(
    cpu: &mut CPU,
    mem: &mut M,
    operand: Operand,
    bit: u8,
) {
    let value = read_operand(cpu, mem, operand);
    branch_on_bit(cpu, operand, value & (1 << bit) == 0);
}

/// Executes BBSn: branch when bit `bit` of the zero page byte is set.
pub(crate) fn execute_bbs<M: MemoryBus + ?Sized>(
    cpu: &mut CPU,
    mem: &mut M,
    operand: Operand,
    bit: u8,
) {
    let value = read_operand(cpu, mem, operand);
    branch_on_bit(cpu, operand, value & (1 << bit) != 0);
}

// A taken bit branch costs one extra cycle.
fn branch_on_bit(cpu: &mut CPU, operand: Operand, taken: bool) {
    if let (true, Operand::ZeroPageBranch { target, .. }) = (taken, operand) {
        cpu.pc = target;
        cpu.instr_cycles += 1;
    }
}

/// Executes WAI: idle until an interrupt is requested.
///
/// Sleeping clocks never count down, so nothing is left pending.
pub(crate) fn execute_wai(cpu: &mut CPU) {
    log::debug!("WAI at ${:04X}", cpu.pc.wrapping_sub(1));
    cpu.run_state = RunState::Waiting;
    cpu.instr_cycles = 0;
}

/// Executes STP: idle until an interrupt is requested, then restart.
pub(crate) fn execute_stp(cpu: &mut CPU) {
    log::debug!("STP at ${:04X}", cpu.pc.wrapping_sub(1));
    cpu.run_state = RunState::Stopped;
    cpu.instr_cycles = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CpuConfig, FlatMemory, Variant};

    fn cmos() -> CPU {
        CPU::new(CpuConfig {
            variant: Variant::Cmos,
            ..CpuConfig::default()
        })
    }

    #[test]
    fn test_tsb_trb() {
        let mut cpu = cmos();
        let mut mem = FlatMemory::new();
        cpu.a = 0x0F;
        mem.write(0x20, 0xF0);

        execute_tsb(&mut cpu, &mut mem, Operand::Address(0x20));
        assert!(cpu.flag_z);
        assert_eq!(mem.read(0x20), 0xFF);

        execute_trb(&mut cpu, &mut mem, Operand::Address(0x20));
        assert!(!cpu.flag_z);
        assert_eq!(mem.read(0x20), 0xF0);
    }

    #[test]
    fn test_rmb_smb() {
        let mut mem = FlatMemory::new();
        mem.write(0x10, 0x00);
        execute_smb(&mut mem, Operand::Address(0x10), 7);
        assert_eq!(mem.read(0x10), 0x80);
        execute_rmb(&mut mem, Operand::Address(0x10), 7);
        assert_eq!(mem.read(0x10), 0x00);
    }

    #[test]
    fn test_bbs_taken_costs_extra_cycle() {
        let mut cpu = cmos();
        let mut mem = FlatMemory::new();
        mem.write(0x12, 0x01);
        cpu.pc = 0x0203;
        cpu.instr_cycles = 5;
        let operand = Operand::ZeroPageBranch {
            address: 0x12,
            target: 0x0250,
        };

        execute_bbr(&mut cpu, &mut mem, operand, 0);
        assert_eq!(cpu.pc, 0x0203);
        assert_eq!(cpu.instr_cycles, 5);

        execute_bbs(&mut cpu, &mut mem, operand, 0);
        assert_eq!(cpu.pc, 0x0250);
        assert_eq!(cpu.instr_cycles, 6);
    }
}
