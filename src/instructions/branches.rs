//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC, BCS: Branch on carry clear/set
//! - BEQ, BNE: Branch on zero set/clear
//! - BMI, BPL: Branch on negative set/clear
//! - BVC, BVS: Branch on overflow clear/set
//! - BRA: Branch always (65C02)
//!
//! All branch instructions use relative addressing with a signed 8-bit offset,
//! already resolved to the target address by the time they execute. The extra
//! cycles for a taken branch and for crossing a page are not modeled.

use crate::addressing::Operand;
use crate::CPU;

/// Jumps to the resolved branch target when `condition` holds.
///
/// No flags are affected.
pub(crate) fn branch_if(condition: bool, cpu: &mut CPU, operand: Operand) {
    if condition {
        cpu.pc = operand.address();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CpuConfig;

    #[test]
    fn test_branch_taken_and_not_taken() {
        let mut cpu = CPU::new(CpuConfig::default());
        cpu.pc = 0x0202;

        branch_if(false, &mut cpu, Operand::Address(0x0300));
        assert_eq!(cpu.pc, 0x0202);

        branch_if(true, &mut cpu, Operand::Address(0x0300));
        assert_eq!(cpu.pc, 0x0300);
    }
}
