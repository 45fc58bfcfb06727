//! # Register Transfer Instructions
//!
//! This module implements register-to-register transfers:
//! - TAX, TAY: Accumulator to index register
//! - TXA, TYA: Index register to accumulator
//! - TSX: Stack pointer to X
//! - TXS: X to stack pointer
//!
//! All set Z and N from the copied value except TXS, which affects no flags.

use crate::CPU;

pub(crate) fn execute_tax(cpu: &mut CPU) {
    cpu.x = cpu.a;
    cpu.update_zn(cpu.x);
}

pub(crate) fn execute_tay(cpu: &mut CPU) {
    cpu.y = cpu.a;
    cpu.update_zn(cpu.y);
}

pub(crate) fn execute_txa(cpu: &mut CPU) {
    cpu.a = cpu.x;
    cpu.update_zn(cpu.a);
}

pub(crate) fn execute_tya(cpu: &mut CPU) {
    cpu.a = cpu.y;
    cpu.update_zn(cpu.a);
}

pub(crate) fn execute_tsx(cpu: &mut CPU) {
    cpu.x = cpu.sp;
    cpu.update_zn(cpu.x);
}

/// Executes TXS. Unlike the other transfers, no flags change.
pub(crate) fn execute_txs(cpu: &mut CPU) {
    cpu.sp = cpu.x;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CpuConfig;

    #[test]
    fn test_txs_leaves_flags() {
        let mut cpu = CPU::new(CpuConfig::default());
        cpu.x = 0x00;
        cpu.flag_z = false;
        execute_txs(&mut cpu);
        assert_eq!(cpu.sp, 0x00);
        assert!(!cpu.flag_z);

        execute_tsx(&mut cpu);
        assert!(cpu.flag_z);
    }
}
