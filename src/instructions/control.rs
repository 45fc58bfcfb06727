//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt, also used to service NMI/IRQ
//! - JMP: Jump to address
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - RTI: Return from Interrupt
//!
//! BRK is a software interrupt that:
//! 1. Pushes PC+1 to the stack (high byte first, then low byte)
//! 2. Pushes processor status to stack with B flag set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from IRQ vector at $FFFE/F
//!
//! A hardware interrupt runs the same sequence, except that the PC of the
//! interrupted instruction is pushed unchanged, B is clear in the pushed status,
//! and an NMI loads its vector from $FFFA/B.

use crate::addressing::Operand;
use crate::cpu::{IRQ_VECTOR, NMI_VECTOR};
use crate::devices::InterruptKind;
use crate::{MemoryBus, Variant, CPU};

/// Executes the BRK (Force Interrupt) instruction, or services the pending
/// hardware interrupt the CPU fetched it for.
///
/// Cycle timing: 7 cycles (fixed)
///
/// Flags affected:
/// - B: Set for BRK, cleared for NMI/IRQ
/// - I: Set to 1
/// - D: Cleared on the 65C02 only
pub(crate) fn execute_brk<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M) {
    let (return_address, vector, break_flag) = match cpu.servicing.take() {
        Some((kind, source)) => {
            log::debug!("servicing {:?} from {} at ${:04X}", kind, source, cpu.pc);
            cpu.interrupts.clear(kind);
            let vector = match kind {
                InterruptKind::Nmi => NMI_VECTOR,
                InterruptKind::Irq => IRQ_VECTOR,
            };
            (cpu.pc, vector, false)
        }
        // The byte after BRK is skipped on return
        None => (cpu.pc.wrapping_add(1), IRQ_VECTOR, true),
    };

    cpu.push_word(mem, return_address);
    cpu.flag_b = break_flag;
    let status = cpu.status();
    cpu.push(mem, status);

    cpu.flag_i = true;
    if cpu.config.variant == Variant::Cmos {
        cpu.flag_d = false;
    }
    cpu.pc = mem.read_word(vector);
}

/// Executes the JMP (Jump) instruction.
///
/// The indirect forms (including the NMOS page bug) are resolved by the
/// addressing mode, so JMP only loads the target.
pub(crate) fn execute_jmp(cpu: &mut CPU, operand: Operand) {
    cpu.pc = operand.address();
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction, so RTS adds one.
pub(crate) fn execute_jsr<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M, operand: Operand) {
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(mem, return_address);
    cpu.pc = operand.address();
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M) {
    cpu.pc = cpu.pop_word(mem).wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Restores the status register (B reads back as set afterwards), then PC.
pub(crate) fn execute_rti<M: MemoryBus + ?Sized>(cpu: &mut CPU, mem: &mut M) {
    let status = cpu.pop(mem);
    cpu.set_status(status);
    cpu.flag_b = true;
    cpu.pc = cpu.pop_word(mem);
}
