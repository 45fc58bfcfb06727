//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 and 65C02 instructions,
//! organized by category. Each instruction is a standalone function that takes the
//! CPU, the memory it runs against, and the operand already resolved from the
//! addressing mode.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS, BRA)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY, STZ)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP, PHX, PHY, PLX, PLY)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)
//! - **cmos**: 65C02 bit operations and run-state instructions (TSB, TRB, RMB, SMB,
//!   BBR, BBS, WAI, STP)

pub mod alu;
pub mod branches;
pub mod cmos;
pub mod control;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::addressing::Operand;
use crate::{MemoryBus, Operation, CPU};

/// Runs the operation of the instruction just fetched.
pub(crate) fn execute<M: MemoryBus + ?Sized>(
    cpu: &mut CPU,
    mem: &mut M,
    operation: Operation,
    operand: Operand,
) {
    match operation {
        Operation::Adc => alu::execute_adc(cpu, mem, operand),
        Operation::Sbc => alu::execute_sbc(cpu, mem, operand),
        Operation::And => alu::execute_and(cpu, mem, operand),
        Operation::Ora => alu::execute_ora(cpu, mem, operand),
        Operation::Eor => alu::execute_eor(cpu, mem, operand),
        Operation::Cmp => alu::execute_cmp(cpu, mem, operand),
        Operation::Cpx => alu::execute_cpx(cpu, mem, operand),
        Operation::Cpy => alu::execute_cpy(cpu, mem, operand),
        Operation::Bit => alu::execute_bit(cpu, mem, operand),

        Operation::Bcc => branches::branch_if(!cpu.flag_c, cpu, operand),
        Operation::Bcs => branches::branch_if(cpu.flag_c, cpu, operand),
        Operation::Beq => branches::branch_if(cpu.flag_z, cpu, operand),
        Operation::Bne => branches::branch_if(!cpu.flag_z, cpu, operand),
        Operation::Bmi => branches::branch_if(cpu.flag_n, cpu, operand),
        Operation::Bpl => branches::branch_if(!cpu.flag_n, cpu, operand),
        Operation::Bvc => branches::branch_if(!cpu.flag_v, cpu, operand),
        Operation::Bvs => branches::branch_if(cpu.flag_v, cpu, operand),
        Operation::Bra => branches::branch_if(true, cpu, operand),

        Operation::Asl => shifts::execute_asl(cpu, mem, operand),
        Operation::Lsr => shifts::execute_lsr(cpu, mem, operand),
        Operation::Rol => shifts::execute_rol(cpu, mem, operand),
        Operation::Ror => shifts::execute_ror(cpu, mem, operand),

        Operation::Lda => load_store::execute_lda(cpu, mem, operand),
        Operation::Ldx => load_store::execute_ldx(cpu, mem, operand),
        Operation::Ldy => load_store::execute_ldy(cpu, mem, operand),
        Operation::Sta => load_store::store(mem, operand, cpu.a),
        Operation::Stx => load_store::store(mem, operand, cpu.x),
        Operation::Sty => load_store::store(mem, operand, cpu.y),
        Operation::Stz => load_store::store(mem, operand, 0),

        Operation::Inc => inc_dec::execute_inc(cpu, mem, operand),
        Operation::Dec => inc_dec::execute_dec(cpu, mem, operand),
        Operation::Inx => inc_dec::execute_inx(cpu),
        Operation::Iny => inc_dec::execute_iny(cpu),
        Operation::Dex => inc_dec::execute_dex(cpu),
        Operation::Dey => inc_dec::execute_dey(cpu),

        Operation::Jmp => control::execute_jmp(cpu, operand),
        Operation::Jsr => control::execute_jsr(cpu, mem, operand),
        Operation::Rts => control::execute_rts(cpu, mem),
        Operation::Rti => control::execute_rti(cpu, mem),
        Operation::Brk => control::execute_brk(cpu, mem),
        Operation::Nop => {}

        Operation::Pha => stack::execute_pha(cpu, mem),
        Operation::Php => stack::execute_php(cpu, mem),
        Operation::Pla => stack::execute_pla(cpu, mem),
        Operation::Plp => stack::execute_plp(cpu, mem),
        Operation::Phx => stack::execute_phx(cpu, mem),
        Operation::Phy => stack::execute_phy(cpu, mem),
        Operation::Plx => stack::execute_plx(cpu, mem),
        Operation::Ply => stack::execute_ply(cpu, mem),

        // Flag instructions
        Operation::Clc => cpu.flag_c = false,
        Operation::Sec => cpu.flag_c = true,
        Operation::Cli => cpu.flag_i = false,
        Operation::Sei => cpu.flag_i = true,
        Operation::Cld => cpu.flag_d = false,
        Operation::Sed => cpu.flag_d = true,
        Operation::Clv => cpu.flag_v = false,

        Operation::Tax => transfer::execute_tax(cpu),
        Operation::Tay => transfer::execute_tay(cpu),
        Operation::Txa => transfer::execute_txa(cpu),
        Operation::Tya => transfer::execute_tya(cpu),
        Operation::Tsx => transfer::execute_tsx(cpu),
        Operation::Txs => transfer::execute_txs(cpu),

        Operation::Tsb => cmos::execute_tsb(cpu, mem, operand),
        Operation::Trb => cmos::execute_trb(cpu, mem, operand),
        Operation::Rmb(bit) => cmos::execute_rmb(mem, operand, bit),
        Operation::Smb(bit) => cmos::execute_smb(mem, operand, bit),
        Operation::Bbr(bit) => cmos::execute_bbr(cpu, mem, operand, bit),
        Operation::Bbs(bit) => cmos::execute_bbs(cpu, mem, operand, bit),
        Operation::Wai => cmos::execute_wai(cpu),
        Operation::Stp => cmos::execute_stp(cpu),

        // Rejected at fetch time
        Operation::Jam | Operation::Illegal => {}
    }
}

/// Value an instruction reads: the accumulator, an immediate, or a memory byte.
pub(crate) fn read_operand<M: MemoryBus + ?Sized>(cpu: &CPU, mem: &M, operand: Operand) -> u8 {
    match operand {
        Operand::None | Operand::Accumulator => cpu.a,
        Operand::Immediate(value) => value,
        Operand::Address(address) | Operand::ZeroPageBranch { address, .. } => mem.read(address),
    }
}

/// Stores the result of a read-modify-write instruction back where it came from.
pub(crate) fn write_operand<M: MemoryBus + ?Sized>(
    cpu: &mut CPU,
    mem: &mut M,
    operand: Operand,
    value: u8,
) {
    match operand {
        Operand::Accumulator => cpu.a = value,
        _ => mem.write(operand.address(), value),
    }
}
