//! # Opcode Metadata Tables
//!
//! This module contains the two 256-entry opcode tables that serve as the single
//! source of truth for instruction decoding, shared by the CPU and the disassembler:
//!
//! - [`NMOS_OPCODES`] - the original MOS 6502, including the undocumented opcodes
//! - [`CMOS_OPCODES`] - the WDC 65C02, which replaces the undocumented slots with
//!   new instructions and NOPs of defined width
//!
//! Each opcode entry includes:
//! - Mnemonic (instruction name)
//! - Addressing mode
//! - Base cycle cost (page-crossing penalties are not modeled)
//! - Instruction size in bytes
//! - The operation the CPU dispatches on
//!
//! Cycle counts follow the published NMOS/65C02 timing charts.

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode as M;

/// What an opcode does, independent of how its operand is addressed.
///
/// The CPU dispatches on this value; the bit-indexed 65C02 operations carry the
/// bit number (0-7) they test, set or clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,

    // 65C02 additions
    Bra,
    Phx,
    Phy,
    Plx,
    Ply,
    Stz,
    Trb,
    Tsb,
    Wai,
    Stp,
    Bbr(u8),
    Bbs(u8),
    Rmb(u8),
    Smb(u8),

    /// Locks up NMOS silicon (JAM/KIL). Executing it is an error.
    Jam,
    /// Undocumented NMOS opcode with data side effects that is not emulated.
    Illegal,
}

use Operation as O;

/// Metadata for a single opcode.
///
/// This struct contains all static information about an instruction needed for
/// decoding and execution planning.
///
/// # Examples
///
/// ```
/// use sim6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "BBR3", "???" for JAM opcodes).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands), 1-3.
    pub size_bytes: u8,

    /// Operation dispatched by the CPU.
    pub operation: Operation,
}

const fn op(
    mnemonic: &'static str,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    operation: Operation,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
        size_bytes: 1 + addressing_mode.operand_bytes(),
        operation,
    }
}

/// Opcode table of the NMOS 6502, indexed by opcode byte value.
///
/// Undocumented opcodes keep their community mnemonics so they disassemble
/// legibly. The NOP variants execute; the ones with data side effects are
/// marked [`Operation::Illegal`] and fault when executed.
pub const NMOS_OPCODES: [OpcodeMetadata; 256] = [
    /* 0x00 */ op("BRK", M::Implicit, 7, O::Brk),
    /* 0x01 */ op("ORA", M::IndirectX, 6, O::Ora),
    /* 0x02 */ op("???", M::Implicit, 2, O::Jam),
    /* 0x03 */ op("SLO", M::IndirectX, 8, O::Illegal),
    /* 0x04 */ op("NOP", M::ZeroPage, 3, O::Nop),
    /* 0x05 */ op("ORA", M::ZeroPage, 3, O::Ora),
    /* 0x06 */ op("ASL", M::ZeroPage, 5, O::Asl),
    /* 0x07 */ op("SLO", M::ZeroPage, 5, O::Illegal),
    /* 0x08 */ op("PHP", M::Implicit, 3, O::Php),
    /* 0x09 */ op("ORA", M::Immediate, 2, O::Ora),
    /* 0x0A */ op("ASL", M::Accumulator, 2, O::Asl),
    /* 0x0B */ op("ANC", M::Immediate, 2, O::Illegal),
    /* 0x0C */ op("NOP", M::Absolute, 4, O::Nop),
    /* 0x0D */ op("ORA", M::Absolute, 4, O::Ora),
    /* 0x0E */ op("ASL", M::Absolute, 6, O::Asl),
    /* 0x0F */ op("SLO", M::Absolute, 6, O::Illegal),
    /* 0x10 */ op("BPL", M::Relative, 2, O::Bpl),
    /* 0x11 */ op("ORA", M::IndirectY, 5, O::Ora),
    /* 0x12 */ op("???", M::Implicit, 2, O::Jam),
    /* 0x13 */ op("SLO", M::IndirectY, 8, O::Illegal),
    /* 0x14 */ op("NOP", M::ZeroPageX, 4, O::Nop),
    /* 0x15 */ op("ORA", M::ZeroPageX, 4, O::Ora),
    /* 0x16 */ op("ASL", M::ZeroPageX, 6, O::Asl),
    /* 0x17 */ op("SLO", M::ZeroPageX, 6, O::Illegal),
    /* 0x18 */ op("CLC", M::Implicit, 2, O::Clc),
    /* 0x19 */ op("ORA", M::AbsoluteY, 4, O::Ora),
    /* 0x1A */ op("NOP", M::Implicit, 2, O::Nop),
    /* 0x1B */ op("SLO", M::AbsoluteY, 7, O::Illegal),
    /* 0x1C */ op("NOP", M::AbsoluteX, 4, O::Nop),
    /* 0x1D */ op("ORA", M::AbsoluteX, 4, O::Ora),
    /* 0x1E */ op("ASL", M::AbsoluteX, 7, O::Asl),
    /* 0x1F */ op("SLO", M::AbsoluteX, 7, O::Illegal),
    /* 0x20 */ op("JSR", M::Absolute, 6, O::Jsr),
    /* 0x21 */ op("AND", M::IndirectX, 6, O::And),
    /* 0x22 */ op("???", M::Implicit, 2, O::Jam),
    /* 0x23 */ op("RLA", M::IndirectX, 8, O::Illegal),
    /* 0x24 */ op("BIT", M::ZeroPage, 3, O::Bit),
    /* 0x25 */ op("AND", M::ZeroPage, 3, O::And),
    /* 0x26 */ op("ROL", M::ZeroPage, 5, O::Rol),
    /* 0x27 */ op("RLA", M::ZeroPage, 5, O::Illegal),
    /* 0x28 */ op("PLP", M::Implicit, 4, O::Plp),
    /* 0x29 */ op("AND", M::Immediate, 2, O::And),
    /* 0x2A */ op("ROL", M::Accumulator, 2, O::Rol),
    /* 0x2B */ op("ANC", M::Immediate, 2, O::Illegal),
    /* 0x2C */ op("BIT", M::Absolute, 4, O::Bit),
    /* 0x2D */ op("AND", M::Absolute, 4, O::And),
    /* 0x2E */ op("ROL", M::Absolute, 6, O::Rol),
    /* 0x2F */ op("RLA", M::Absolute, 6, O::Illegal),
    /* 0x30 */ op("BMI", M::Relative, 2, O::Bmi),
    /* 0x31 */ op("AND", M::IndirectY, 5, O::And),
    /* 0x32 */ op("???", M::Implicit, 2, O::Jam),
    /* 0x33 */ op("RLA", M::IndirectY, 8, O::Illegal),
    /* 0x34 */ op("NOP", M::ZeroPageX, 4, O::Nop),
    /* 0x35 */ op("AND", M::ZeroPageX, 4, O::And),
    /* 0x36 */ op("ROL", M::ZeroPageX, 6, O::Rol),
    /* 0x37 */ op("RLA", M::ZeroPageX, 6, O::Illegal),
    /* 0x38 */ op("SEC", M::Implicit, 2, O::Sec),
    /* 0x39 */ op("AND", M::AbsoluteY, 4, O::And),
    /* 0x3A */ op("NOP", M::Implicit, 2, O::Nop),
    /* 0x3B */ op("RLA", M::AbsoluteY, 7, O::Illegal),
    /* 0x3C */ op("NOP", M::AbsoluteX, 4, O::Nop),
    /* 0x3D */ op("AND", M::AbsoluteX, 4, O::And),
    /* 0x3E */ op("ROL", M::AbsoluteX, 7, O::Rol),
    /* 0x3F */ op("RLA", M::AbsoluteX, 7, O::Illegal),
    /* 0x40 */ op("RTI", M::Implicit, 6, O::Rti),
    /* 0x41 */ op("EOR", M::IndirectX, 6, O::Eor),
    /* 0x42 */ op("???", M::Implicit, 2, O::Jam),
    /* 0x43 */ op("SRE", M::IndirectX, 8, O::Illegal),
    /* 0x44 */ op("NOP", M::ZeroPage, 3, O::Nop),
    /* 0x45 */ op("EOR", M::ZeroPage, 3, O::Eor),
    /* 0x46 */ op("LSR", M::ZeroPage, 5, O::Lsr),
    /* 0x47 */ op("SRE", M::ZeroPage, 5, O::Illegal),
    /* 0x48 */ op("PHA", M::Implicit, 3, O::Pha),
    /* 0x49 */ op("EOR", M::Immediate, 2, O::Eor),
    /* 0x4A */ op("LSR", M::Accumulator, 2, O::Lsr),
    /* 0x4B */ op("ALR", M::Immediate, 2, O::Illegal),
    /* 0x4C */ op("JMP", M::Absolute, 3, O::Jmp),
    /* 0x4D */ op("EOR", M::Absolute, 4, O::Eor),
    /* 0x4E */ op("LSR", M::Absolute, 6, O::Lsr),
    /* 0x4F */ op("SRE", M::Absolute, 6, O::Illegal),
    /* 0x50 */ op("BVC", M::Relative, 2, O::Bvc),
    /* 0x51 */ op("EOR", M::IndirectY, 5, O::Eor),
    /* 0x52 */ op("???", M::Implicit, 2, O::Jam),
    /* 0x53 */ op("SRE", M::IndirectY, 8, O::Illegal),
    /* 0x54 */ op("NOP", M::ZeroPageX, 4, O::Nop),
    /* 0x55 */ op("EOR", M::ZeroPageX, 4, O::Eor),
    /* 0x56 */ op("LSR", M::ZeroPageX, 6, O::Lsr),
    /* 0x57 */ op("SRE", M::ZeroPageX, 6, O::Illegal),
    /* 0x58 */ op("CLI", M::Implicit, 2, O::Cli),
    /* 0x59 */ op("EOR", M::AbsoluteY, 4, O::Eor),
    /* 0x5A */ op("NOP", M::Implicit, 2, O::Nop),
    /* 0x5B */ op("SRE", M::AbsoluteY, 7, O::Illegal),
    /* 0x5C */ op("NOP", M::AbsoluteX, 4, O::Nop),
    /* 0x5D */ op("EOR", M::AbsoluteX, 4, O::Eor),
    /* 0x5E */ op("LSR", M::AbsoluteX, 7, O::Lsr),
    /* 0x5F */ op("SRE", M::AbsoluteX, 7, O::Illegal),
    /* 0x60 */ op("RTS", M::Implicit, 6, O::Rts),
    /* 0x61 */ op("ADC", M::IndirectX, 6, O::Adc),
    /* 0x62 */ op("???", M::Implicit, 2, O::Jam),
    /* 0x63 */ op("RRA", M::IndirectX, 8, O::Illegal),
    /* 0x64 */ op("NOP", M::ZeroPage, 3, O::Nop),
    /* 0x65 */ op("ADC", M::ZeroPage, 3, O::Adc),
    /* 0x66 */ op("ROR", M::ZeroPage, 5, O::Ror),
    /* 0x67 */ op("RRA", M::ZeroPage, 5, O::Illegal),
    /* 0x68 */ op("PLA", M::Implicit, 4, O::Pla),
    /* 0x69 */ op("ADC", M::Immediate, 2, O::Adc),
    /* 0x6A */ op("ROR", M::Accumulator, 2, O::Ror),
    /* 0x6B */ op("ARR", M::Immediate, 2, O::Illegal),
    /* 0x6C */ op("JMP", M::Indirect, 5, O::Jmp),
    /* 0x6D */ op("ADC", M::Absolute, 4, O::Adc),
    /* 0x6E */ op("ROR", M::Absolute, 6, O::Ror),
    /* 0x6F */ op("RRA", M::Absolute, 6, O::Illegal),
    /* 0x70 */ op("BVS", M::Relative, 2, O::Bvs),
    /* 0x71 */ op("ADC", M::IndirectY, 5, O::Adc),
    /* 0x72 */ op("???", M::Implicit, 2, O::Jam),
    /* 0x73 */ op("RRA", M::IndirectY, 8, O::Illegal),
    /* 0x74 */ op("NOP", M::ZeroPageX, 4, O::Nop),
    /* 0x75 */ op("ADC", M::ZeroPageX, 4, O::Adc),
    /* 0x76 */ op("ROR", M::ZeroPageX, 6, O::Ror),
    /* 0x77 */ op("RRA", M::ZeroPageX, 6, O::Illegal),
    /* 0x78 */ op("SEI", M::Implicit, 2, O::Sei),
    /* 0x79 */ op("ADC", M::AbsoluteY, 4, O::Adc),
    /* 0x7A */ op("NOP", M::Implicit, 2, O::Nop),
    /* 0x7B */ op("RRA", M::AbsoluteY, 7, O::Illegal),
    /* 0x7C */ op("NOP", M::AbsoluteX, 4, O::Nop),
    /* 0x7D */ op("ADC", M::AbsoluteX, 4, O::Adc),
    /* 0x7E */ op("ROR", M::AbsoluteX, 7, O::Ror),
    /* 0x7F */ op("RRA", M::AbsoluteX, 7, O::Illegal),
    /* 0x80 */ op("NOP", M::Immediate, 2, O::Nop),
    /* 0x81 */ op("STA", M::IndirectX, 6, O::Sta),
    /* 0x82 */ op("NOP", M::Immediate, 2, O::Nop),
    /* 0x83 */ op("SAX", M::IndirectX, 6, O::Illegal),
    /* 0x84 */ op("STY", M::ZeroPage, 3, O::Sty),
    /* 0x85 */ op("STA", M::ZeroPage, 3, O::Sta),
    /* 0x86 */ op("STX", M::ZeroPage, 3, O::Stx),
    /* 0x87 */ op("SAX", M::ZeroPage, 3, O::Illegal),
    /* 0x88 */ op("DEY", M::Implicit, 2, O::Dey),
    /* 0x89 */ op("NOP", M::Immediate, 2, O::Nop),
    /* 0x8A */ op("TXA", M::Implicit, 2, O::Txa),
    /* 0x8B */ op("XAA", M::Immediate, 2, O::Illegal),
    /* 0x8C */ op("STY", M::Absolute, 4, O::Sty),
    /* 0x8D */ op("STA", M::Absolute, 4, O::Sta),
    /* 0x8E */ op("STX", M::Absolute, 4, O::Stx),
    /* 0x8F */ op("SAX", M::Absolute, 4, O::Illegal),
    /* 0x90 */ op("BCC", M::Relative, 2, O::Bcc),
    /* 0x91 */ op("STA", M::IndirectY, 6, O::Sta),
    /* 0x92 */ op("???", M::Implicit, 2, O::Jam),
    /* 0x93 */ op("AHX", M::IndirectY, 6, O::Illegal),
    /* 0x94 */ op("STY", M::ZeroPageX, 4, O::Sty),
    /* 0x95 */ op("STA", M::ZeroPageX, 4, O::Sta),
    /* 0x96 */ op("STX", M::ZeroPageY, 4, O::Stx),
    /* 0x97 */ op("SAX", M::ZeroPageY, 4, O::Illegal),
    /* 0x98 */ op("TYA", M::Implicit, 2, O::Tya),
    /* 0x99 */ op("STA", M::AbsoluteY, 5, O::Sta),
    /* 0x9A */ op("TXS", M::Implicit, 2, O::Txs),
    /* 0x9B */ op("TAS", M::AbsoluteY, 5, O::Illegal),
    /* 0x9C */ op("SHY", M::AbsoluteX, 5, O::Illegal),
    /* 0x9D */ op("STA", M::AbsoluteX, 5, O::Sta),
    /* 0x9E */ op("SHX", M::AbsoluteY, 5, O::Illegal),
    /* 0x9F */ op("AHX", M::AbsoluteY, 5, O::Illegal),
    /* 0xA0 */ op("LDY", M::Immediate, 2, O::Ldy),
    /* 0xA1 */ op("LDA", M::IndirectX, 6, O::Lda),
    /* 0xA2 */ op("LDX", M::Immediate, 2, O::Ldx),
    /* 0xA3 */ op("LAX", M::IndirectX, 6, O::Illegal),
    /* 0xA4 */ op("LDY", M::ZeroPage, 3, O::Ldy),
    /* 0xA5 */ op("LDA", M::ZeroPage, 3, O::Lda),
    /* 0xA6 */ op("LDX", M::ZeroPage, 3, O::Ldx),
    /* 0xA7 */ op("LAX", M::ZeroPage, 3, O::Illegal),
    /* 0xA8 */ op("TAY", M::Implicit, 2, O::Tay),
    /* 0xA9 */ op("LDA", M::Immediate, 2, O::Lda),
    /* 0xAA */ op("TAX", M::Implicit, 2, O::Tax),
    /* 0xAB */ op("LAX", M::Immediate, 2, O::Illegal),
    /* 0xAC */ op("LDY", M::Absolute, 4, O::Ldy),
    /* 0xAD */ op("LDA", M::Absolute, 4, O::Lda),
    /* 0xAE */ op("LDX", M::Absolute, 4, O::Ldx),
    /* 0xAF */ op("LAX", M::Absolute, 4, O::Illegal),
    /* 0xB0 */ op("BCS", M::Relative, 2, O::Bcs),
    /* 0xB1 */ op("LDA", M::IndirectY, 5, O::Lda),
    /* 0xB2 */ op("???", M::Implicit, 2, O::Jam),
    /* 0xB3 */ op("LAX", M::IndirectY, 5, O::Illegal),
    /* 0xB4 */ op("LDY", M::ZeroPageX, 4, O::Ldy),
    /* 0xB5 */ op("LDA", M::ZeroPageX, 4, O::Lda),
    /* 0xB6 */ op("LDX", M::ZeroPageY, 4, O::Ldx),
    /* 0xB7 */ op("LAX", M::ZeroPageY, 4, O::Illegal),
    /* 0xB8 */ op("CLV", M::Implicit, 2, O::Clv),
    /* 0xB9 */ op("LDA", M::AbsoluteY, 4, O::Lda),
    /* 0xBA */ op("TSX", M::Implicit, 2, O::Tsx),
    /* 0xBB */ op("LAS", M::AbsoluteY, 4, O::Illegal),
    /* 0xBC */ op("LDY", M::AbsoluteX, 4, O::Ldy),
    /* 0xBD */ op("LDA", M::AbsoluteX, 4, O::Lda),
    /* 0xBE */ op("LDX", M::AbsoluteY, 4, O::Ldx),
    /* 0xBF */ op("LAX", M::AbsoluteY, 4, O::Illegal),
    /* 0xC0 */ op("CPY", M::Immediate, 2, O::Cpy),
    /* 0xC1 */ op("CMP", M::IndirectX, 6, O::Cmp),
    /* 0xC2 */ op("NOP", M::Immediate, 2, O::Nop),
    /* 0xC3 */ op("DCP", M::IndirectX, 8, O::Illegal),
    /* 0xC4 */ op("CPY", M::ZeroPage, 3, O::Cpy),
    /* 0xC5 */ op("CMP", M::ZeroPage, 3, O::Cmp),
    /* 0xC6 */ op("DEC", M::ZeroPage, 5, O::Dec),
    /* 0xC7 */ op("DCP", M::ZeroPage, 5, O::Illegal),
    /* 0xC8 */ op("INY", M::Implicit, 2, O::Iny),
    /* 0xC9 */ op("CMP", M::Immediate, 2, O::Cmp),
    /* 0xCA */ op("DEX", M::Implicit, 2, O::Dex),
    /* 0xCB */ op("AXS", M::Immediate, 2, O::Illegal),
    /* 0xCC */ op("CPY", M::Absolute, 4, O::Cpy),
    /* 0xCD */ op("CMP", M::Absolute, 4, O::Cmp),
    /* 0xCE */ op("DEC", M::Absolute, 6, O::Dec),
    /* 0xCF */ op("DCP", M::Absolute, 6, O::Illegal),
    /* 0xD0 */ op("BNE", M::Relative, 2, O::Bne),
    /* 0xD1 */ op("CMP", M::IndirectY, 5, O::Cmp),
    /* 0xD2 */ op("???", M::Implicit, 2, O::Jam),
    /* 0xD3 */ op("DCP", M::IndirectY, 8, O::Illegal),
    /* 0xD4 */ op("NOP", M::ZeroPageX, 4, O::Nop),
    /* 0xD5 */ op("CMP", M::ZeroPageX, 4, O::Cmp),
    /* 0xD6 */ op("DEC", M::ZeroPageX, 6, O::Dec),
    /* 0xD7 */ op("DCP", M::ZeroPageX, 6, O::Illegal),
    /* 0xD8 */ op("CLD", M::Implicit, 2, O::Cld),
    /* 0xD9 */ op("CMP", M::AbsoluteY, 4, O::Cmp),
    /* 0xDA */ op("NOP", M::Implicit, 2, O::Nop),
    /* 0xDB */ op("DCP", M::AbsoluteY, 7, O::Illegal),
    /* 0xDC */ op("NOP", M::AbsoluteX, 4, O::Nop),
    /* 0xDD */ op("CMP", M::AbsoluteX, 4, O::Cmp),
    /* 0xDE */ op("DEC", M::AbsoluteX, 7, O::Dec),
    /* 0xDF */ op("DCP", M::AbsoluteX, 7, O::Illegal),
    /* 0xE0 */ op("CPX", M::Immediate, 2, O::Cpx),
    /* 0xE1 */ op("SBC", M::IndirectX, 6, O::Sbc),
    /* 0xE2 */ op("NOP", M::Immediate, 2, O::Nop),
    /* 0xE3 */ op("ISC", M::IndirectX, 8, O::Illegal),
    /* 0xE4 */ op("CPX", M::ZeroPage, 3, O::Cpx),
    /* 0xE5 */ op("SBC", M::ZeroPage, 3, O::Sbc),
    /* 0xE6 */ op("INC", M::ZeroPage, 5, O::Inc),
    /* 0xE7 */ op("ISC", M::ZeroPage, 5, O::Illegal),
    /* 0xE8 */ op("INX", M::Implicit, 2, O::Inx),
    /* 0xE9 */ op("SBC", M::Immediate, 2, O::Sbc),
    /* 0xEA */ op("NOP", M::Implicit, 2, O::Nop),
    /* 0xEB */ op("SBC", M::Immediate, 2, O::Sbc),
    /* 0xEC */ op("CPX", M::Absolute, 4, O::Cpx),
    /* 0xED */ op("SBC", M::Absolute, 4, O::Sbc),
    /* 0xEE */ op("INC", M::Absolute, 6, O::Inc),
    /* 0xEF */ op("ISC", M::Absolute, 6, O::Illegal),
    /* 0xF0 */ op("BEQ", M::Relative, 2, O::Beq),
    /* 0xF1 */ op("SBC", M::IndirectY, 5, O::Sbc),
    /* 0xF2 */ op("???", M::Implicit, 2, O::Jam),
    /* 0xF3 */ op("ISC", M::IndirectY, 8, O::Illegal),
    /* 0xF4 */ op("NOP", M::ZeroPageX, 4, O::Nop),
    /* 0xF5 */ op("SBC", M::ZeroPageX, 4, O::Sbc),
    /* 0xF6 */ op("INC", M::ZeroPageX, 6, O::Inc),
    /* 0xF7 */ op("ISC", M::ZeroPageX, 6, O::Illegal),
    /* 0xF8 */ op("SED", M::Implicit, 2, O::Sed),
    /* 0xF9 */ op("SBC", M::AbsoluteY, 4, O::Sbc),
    /* 0xFA */ op("NOP", M::Implicit, 2, O::Nop),
    /* 0xFB */ op("ISC", M::AbsoluteY, 7, O::Illegal),
    /* 0xFC */ op("NOP", M::AbsoluteX, 4, O::Nop),
    /* 0xFD */ op("SBC", M::AbsoluteX, 4, O::Sbc),
    /* 0xFE */ op("INC", M::AbsoluteX, 7, O::Inc),
    /* 0xFF */ op("ISC", M::AbsoluteX, 7, O::Illegal),
];

/// Opcode table of the CMOS 65C02, indexed by opcode byte value.
pub const CMOS_OPCODES: [OpcodeMetadata; 256] = [
    /* 0x00 */ op("BRK", M::Implicit, 7, O::Brk),
    /* 0x01 */ op("ORA", M::IndirectX, 6, O::Ora),
    /* 0x02 */ op("NOP", M::Immediate, 2, O::Nop),
    /* 0x03 */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x04 */ op("TSB", M::ZeroPage, 5, O::Tsb),
    /* 0x05 */ op("ORA", M::ZeroPage, 3, O::Ora),
    /* 0x06 */ op("ASL", M::ZeroPage, 5, O::Asl),
    /* 0x07 */ op("RMB0", M::ZeroPage, 5, O::Rmb(0)),
    /* 0x08 */ op("PHP", M::Implicit, 3, O::Php),
    /* 0x09 */ op("ORA", M::Immediate, 2, O::Ora),
    /* 0x0A */ op("ASL", M::Accumulator, 2, O::Asl),
    /* 0x0B */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x0C */ op("TSB", M::Absolute, 6, O::Tsb),
    /* 0x0D */ op("ORA", M::Absolute, 4, O::Ora),
    /* 0x0E */ op("ASL", M::Absolute, 6, O::Asl),
    /* 0x0F */ op("BBR0", M::ZeroPageRelative, 5, O::Bbr(0)),
    /* 0x10 */ op("BPL", M::Relative, 2, O::Bpl),
    /* 0x11 */ op("ORA", M::IndirectY, 5, O::Ora),
    /* 0x12 */ op("ORA", M::ZeroPageIndirect, 5, O::Ora),
    /* 0x13 */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x14 */ op("TRB", M::ZeroPage, 5, O::Trb),
    /* 0x15 */ op("ORA", M::ZeroPageX, 4, O::Ora),
    /* 0x16 */ op("ASL", M::ZeroPageX, 6, O::Asl),
    /* 0x17 */ op("RMB1", M::ZeroPage, 5, O::Rmb(1)),
    /* 0x18 */ op("CLC", M::Implicit, 2, O::Clc),
    /* 0x19 */ op("ORA", M::AbsoluteY, 4, O::Ora),
    /* 0x1A */ op("INC", M::Accumulator, 2, O::Inc),
    /* 0x1B */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x1C */ op("TRB", M::Absolute, 6, O::Trb),
    /* 0x1D */ op("ORA", M::AbsoluteX, 4, O::Ora),
    /* 0x1E */ op("ASL", M::AbsoluteX, 6, O::Asl),
    /* 0x1F */ op("BBR1", M::ZeroPageRelative, 5, O::Bbr(1)),
    /* 0x20 */ op("JSR", M::Absolute, 6, O::Jsr),
    /* 0x21 */ op("AND", M::IndirectX, 6, O::And),
    /* 0x22 */ op("NOP", M::Immediate, 2, O::Nop),
    /* 0x23 */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x24 */ op("BIT", M::ZeroPage, 3, O::Bit),
    /* 0x25 */ op("AND", M::ZeroPage, 3, O::And),
    /* 0x26 */ op("ROL", M::ZeroPage, 5, O::Rol),
    /* 0x27 */ op("RMB2", M::ZeroPage, 5, O::Rmb(2)),
    /* 0x28 */ op("PLP", M::Implicit, 4, O::Plp),
    /* 0x29 */ op("AND", M::Immediate, 2, O::And),
    /* 0x2A */ op("ROL", M::Accumulator, 2, O::Rol),
    /* 0x2B */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x2C */ op("BIT", M::Absolute, 4, O::Bit),
    /* 0x2D */ op("AND", M::Absolute, 4, O::And),
    /* 0x2E */ op("ROL", M::Absolute, 6, O::Rol),
    /* 0x2F */ op("BBR2", M::ZeroPageRelative, 5, O::Bbr(2)),
    /* 0x30 */ op("BMI", M::Relative, 2, O::Bmi),
    /* 0x31 */ op("AND", M::IndirectY, 5, O::And),
    /* 0x32 */ op("AND", M::ZeroPageIndirect, 5, O::And),
    /* 0x33 */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x34 */ op("BIT", M::ZeroPageX, 4, O::Bit),
    /* 0x35 */ op("AND", M::ZeroPageX, 4, O::And),
    /* 0x36 */ op("ROL", M::ZeroPageX, 6, O::Rol),
    /* 0x37 */ op("RMB3", M::ZeroPage, 5, O::Rmb(3)),
    /* 0x38 */ op("SEC", M::Implicit, 2, O::Sec),
    /* 0x39 */ op("AND", M::AbsoluteY, 4, O::And),
    /* 0x3A */ op("DEC", M::Accumulator, 2, O::Dec),
    /* 0x3B */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x3C */ op("BIT", M::AbsoluteX, 4, O::Bit),
    /* 0x3D */ op("AND", M::AbsoluteX, 4, O::And),
    /* 0x3E */ op("ROL", M::AbsoluteX, 6, O::Rol),
    /* 0x3F */ op("BBR3", M::ZeroPageRelative, 5, O::Bbr(3)),
    /* 0x40 */ op("RTI", M::Implicit, 6, O::Rti),
    /* 0x41 */ op("EOR", M::IndirectX, 6, O::Eor),
    /* 0x42 */ op("NOP", M::Immediate, 2, O::Nop),
    /* 0x43 */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x44 */ op("NOP", M::ZeroPage, 3, O::Nop),
    /* 0x45 */ op("EOR", M::ZeroPage, 3, O::Eor),
    /* 0x46 */ op("LSR", M::ZeroPage, 5, O::Lsr),
    /* 0x47 */ op("RMB4", M::ZeroPage, 5, O::Rmb(4)),
    /* 0x48 */ op("PHA", M::Implicit, 3, O::Pha),
    /* 0x49 */ op("EOR", M::Immediate, 2, O::Eor),
    /* 0x4A */ op("LSR", M::Accumulator, 2, O::Lsr),
    /* 0x4B */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x4C */ op("JMP", M::Absolute, 3, O::Jmp),
    /* 0x4D */ op("EOR", M::Absolute, 4, O::Eor),
    /* 0x4E */ op("LSR", M::Absolute, 6, O::Lsr),
    /* 0x4F */ op("BBR4", M::ZeroPageRelative, 5, O::Bbr(4)),
    /* 0x50 */ op("BVC", M::Relative, 2, O::Bvc),
    /* 0x51 */ op("EOR", M::IndirectY, 5, O::Eor),
    /* 0x52 */ op("EOR", M::ZeroPageIndirect, 5, O::Eor),
    /* 0x53 */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x54 */ op("NOP", M::ZeroPageX, 4, O::Nop),
    /* 0x55 */ op("EOR", M::ZeroPageX, 4, O::Eor),
    /* 0x56 */ op("LSR", M::ZeroPageX, 6, O::Lsr),
    /* 0x57 */ op("RMB5", M::ZeroPage, 5, O::Rmb(5)),
    /* 0x58 */ op("CLI", M::Implicit, 2, O::Cli),
    /* 0x59 */ op("EOR", M::AbsoluteY, 4, O::Eor),
    /* 0x5A */ op("PHY", M::Implicit, 3, O::Phy),
    /* 0x5B */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x5C */ op("NOP", M::Absolute, 8, O::Nop),
    /* 0x5D */ op("EOR", M::AbsoluteX, 4, O::Eor),
    /* 0x5E */ op("LSR", M::AbsoluteX, 6, O::Lsr),
    /* 0x5F */ op("BBR5", M::ZeroPageRelative, 5, O::Bbr(5)),
    /* 0x60 */ op("RTS", M::Implicit, 6, O::Rts),
    /* 0x61 */ op("ADC", M::IndirectX, 6, O::Adc),
    /* 0x62 */ op("NOP", M::Immediate, 2, O::Nop),
    /* 0x63 */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x64 */ op("STZ", M::ZeroPage, 3, O::Stz),
    /* 0x65 */ op("ADC", M::ZeroPage, 3, O::Adc),
    /* 0x66 */ op("ROR", M::ZeroPage, 5, O::Ror),
    /* 0x67 */ op("RMB6", M::ZeroPage, 5, O::Rmb(6)),
    /* 0x68 */ op("PLA", M::Implicit, 4, O::Pla),
    /* 0x69 */ op("ADC", M::Immediate, 2, O::Adc),
    /* 0x6A */ op("ROR", M::Accumulator, 2, O::Ror),
    /* 0x6B */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x6C */ op("JMP", M::Indirect, 6, O::Jmp),
    /* 0x6D */ op("ADC", M::Absolute, 4, O::Adc),
    /* 0x6E */ op("ROR", M::Absolute, 6, O::Ror),
    /* 0x6F */ op("BBR6", M::ZeroPageRelative, 5, O::Bbr(6)),
    /* 0x70 */ op("BVS", M::Relative, 2, O::Bvs),
    /* 0x71 */ op("ADC", M::IndirectY, 5, O::Adc),
    /* 0x72 */ op("ADC", M::ZeroPageIndirect, 5, O::Adc),
    /* 0x73 */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x74 */ op("STZ", M::ZeroPageX, 4, O::Stz),
    /* 0x75 */ op("ADC", M::ZeroPageX, 4, O::Adc),
    /* 0x76 */ op("ROR", M::ZeroPageX, 6, O::Ror),
    /* 0x77 */ op("RMB7", M::ZeroPage, 5, O::Rmb(7)),
    /* 0x78 */ op("SEI", M::Implicit, 2, O::Sei),
    /* 0x79 */ op("ADC", M::AbsoluteY, 4, O::Adc),
    /* 0x7A */ op("PLY", M::Implicit, 4, O::Ply),
    /* 0x7B */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x7C */ op("JMP", M::AbsoluteIndexedIndirect, 6, O::Jmp),
    /* 0x7D */ op("ADC", M::AbsoluteX, 4, O::Adc),
    /* 0x7E */ op("ROR", M::AbsoluteX, 6, O::Ror),
    /* 0x7F */ op("BBR7", M::ZeroPageRelative, 5, O::Bbr(7)),
    /* 0x80 */ op("BRA", M::Relative, 3, O::Bra),
    /* 0x81 */ op("STA", M::IndirectX, 6, O::Sta),
    /* 0x82 */ op("NOP", M::Immediate, 2, O::Nop),
    /* 0x83 */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x84 */ op("STY", M::ZeroPage, 3, O::Sty),
    /* 0x85 */ op("STA", M::ZeroPage, 3, O::Sta),
    /* 0x86 */ op("STX", M::ZeroPage, 3, O::Stx),
    /* 0x87 */ op("SMB0", M::ZeroPage, 5, O::Smb(0)),
    /* 0x88 */ op("DEY", M::Implicit, 2, O::Dey),
    /* 0x89 */ op("BIT", M::Immediate, 2, O::Bit),
    /* 0x8A */ op("TXA", M::Implicit, 2, O::Txa),
    /* 0x8B */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x8C */ op("STY", M::Absolute, 4, O::Sty),
    /* 0x8D */ op("STA", M::Absolute, 4, O::Sta),
    /* 0x8E */ op("STX", M::Absolute, 4, O::Stx),
    /* 0x8F */ op("BBS0", M::ZeroPageRelative, 5, O::Bbs(0)),
    /* 0x90 */ op("BCC", M::Relative, 2, O::Bcc),
    /* 0x91 */ op("STA", M::IndirectY, 6, O::Sta),
    /* 0x92 */ op("STA", M::ZeroPageIndirect, 5, O::Sta),
    /* 0x93 */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x94 */ op("STY", M::ZeroPageX, 4, O::Sty),
    /* 0x95 */ op("STA", M::ZeroPageX, 4, O::Sta),
    /* 0x96 */ op("STX", M::ZeroPageY, 4, O::Stx),
    /* 0x97 */ op("SMB1", M::ZeroPage, 5, O::Smb(1)),
    /* 0x98 */ op("TYA", M::Implicit, 2, O::Tya),
    /* 0x99 */ op("STA", M::AbsoluteY, 5, O::Sta),
    /* 0x9A */ op("TXS", M::Implicit, 2, O::Txs),
    /* 0x9B */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0x9C */ op("STZ", M::Absolute, 4, O::Stz),
    /* 0x9D */ op("STA", M::AbsoluteX, 5, O::Sta),
    /* 0x9E */ op("STZ", M::AbsoluteX, 5, O::Stz),
    /* 0x9F */ op("BBS1", M::ZeroPageRelative, 5, O::Bbs(1)),
    /* 0xA0 */ op("LDY", M::Immediate, 2, O::Ldy),
    /* 0xA1 */ op("LDA", M::IndirectX, 6, O::Lda),
    /* 0xA2 */ op("LDX", M::Immediate, 2, O::Ldx),
    /* 0xA3 */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0xA4 */ op("LDY", M::ZeroPage, 3, O::Ldy),
    /* 0xA5 */ op("LDA", M::ZeroPage, 3, O::Lda),
    /* 0xA6 */ op("LDX", M::ZeroPage, 3, O::Ldx),
    /* 0xA7 */ op("SMB2", M::ZeroPage, 5, O::Smb(2)),
    /* 0xA8 */ op("TAY", M::Implicit, 2, O::Tay),
    /* 0xA9 */ op("LDA", M::Immediate, 2, O::Lda),
    /* 0xAA */ op("TAX", M::Implicit, 2, O::Tax),
    /* 0xAB */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0xAC */ op("LDY", M::Absolute, 4, O::Ldy),
    /* 0xAD */ op("LDA", M::Absolute, 4, O::Lda),
    /* 0xAE */ op("LDX", M::Absolute, 4, O::Ldx),
    /* 0xAF */ op("BBS2", M::ZeroPageRelative, 5, O::Bbs(2)),
    /* 0xB0 */ op("BCS", M::Relative, 2, O::Bcs),
    /* 0xB1 */ op("LDA", M::IndirectY, 5, O::Lda),
    /* 0xB2 */ op("LDA", M::ZeroPageIndirect, 5, O::Lda),
    /* 0xB3 */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0xB4 */ op("LDY", M::ZeroPageX, 4, O::Ldy),
    /* 0xB5 */ op("LDA", M::ZeroPageX, 4, O::Lda),
    /* 0xB6 */ op("LDX", M::ZeroPageY, 4, O::Ldx),
    /* 0xB7 */ op("SMB3", M::ZeroPage, 5, O::Smb(3)),
    /* 0xB8 */ op("CLV", M::Implicit, 2, O::Clv),
    /* 0xB9 */ op("LDA", M::AbsoluteY, 4, O::Lda),
    /* 0xBA */ op("TSX", M::Implicit, 2, O::Tsx),
    /* 0xBB */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0xBC */ op("LDY", M::AbsoluteX, 4, O::Ldy),
    /* 0xBD */ op("LDA", M::AbsoluteX, 4, O::Lda),
    /* 0xBE */ op("LDX", M::AbsoluteY, 4, O::Ldx),
    /* 0xBF */ op("BBS3", M::ZeroPageRelative, 5, O::Bbs(3)),
    /* 0xC0 */ op("CPY", M::Immediate, 2, O::Cpy),
    /* 0xC1 */ op("CMP", M::IndirectX, 6, O::Cmp),
    /* 0xC2 */ op("NOP", M::Immediate, 2, O::Nop),
    /* 0xC3 */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0xC4 */ op("CPY", M::ZeroPage, 3, O::Cpy),
    /* 0xC5 */ op("CMP", M::ZeroPage, 3, O::Cmp),
    /* 0xC6 */ op("DEC", M::ZeroPage, 5, O::Dec),
    /* 0xC7 */ op("SMB4", M::ZeroPage, 5, O::Smb(4)),
    /* 0xC8 */ op("INY", M::Implicit, 2, O::Iny),
    /* 0xC9 */ op("CMP", M::Immediate, 2, O::Cmp),
    /* 0xCA */ op("DEX", M::Implicit, 2, O::Dex),
    /* 0xCB */ op("WAI", M::Implicit, 3, O::Wai),
    /* 0xCC */ op("CPY", M::Absolute, 4, O::Cpy),
    /* 0xCD */ op("CMP", M::Absolute, 4, O::Cmp),
    /* 0xCE */ op("DEC", M::Absolute, 6, O::Dec),
    /* 0xCF */ op("BBS4", M::ZeroPageRelative, 5, O::Bbs(4)),
    /* 0xD0 */ op("BNE", M::Relative, 2, O::Bne),
    /* 0xD1 */ op("CMP", M::IndirectY, 5, O::Cmp),
    /* 0xD2 */ op("CMP", M::ZeroPageIndirect, 5, O::Cmp),
    /* 0xD3 */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0xD4 */ op("NOP", M::ZeroPageX, 4, O::Nop),
    /* 0xD5 */ op("CMP", M::ZeroPageX, 4, O::Cmp),
    /* 0xD6 */ op("DEC", M::ZeroPageX, 6, O::Dec),
    /* 0xD7 */ op("SMB5", M::ZeroPage, 5, O::Smb(5)),
    /* 0xD8 */ op("CLD", M::Implicit, 2, O::Cld),
    /* 0xD9 */ op("CMP", M::AbsoluteY, 4, O::Cmp),
    /* 0xDA */ op("PHX", M::Implicit, 3, O::Phx),
    /* 0xDB */ op("STP", M::Implicit, 3, O::Stp),
    /* 0xDC */ op("NOP", M::Absolute, 4, O::Nop),
    /* 0xDD */ op("CMP", M::AbsoluteX, 4, O::Cmp),
    /* 0xDE */ op("DEC", M::AbsoluteX, 7, O::Dec),
    /* 0xDF */ op("BBS5", M::ZeroPageRelative, 5, O::Bbs(5)),
    /* 0xE0 */ op("CPX", M::Immediate, 2, O::Cpx),
    /* 0xE1 */ op("SBC", M::IndirectX, 6, O::Sbc),
    /* 0xE2 */ op("NOP", M::Immediate, 2, O::Nop),
    /* 0xE3 */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0xE4 */ op("CPX", M::ZeroPage, 3, O::Cpx),
    /* 0xE5 */ op("SBC", M::ZeroPage, 3, O::Sbc),
    /* 0xE6 */ op("INC", M::ZeroPage, 5, O::Inc),
    /* 0xE7 */ op("SMB6", M::ZeroPage, 5, O::Smb(6)),
    /* 0xE8 */ op("INX", M::Implicit, 2, O::Inx),
    /* 0xE9 */ op("SBC", M::Immediate, 2, O::Sbc),
    /* 0xEA */ op("NOP", M::Implicit, 2, O::Nop),
    /* 0xEB */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0xEC */ op("CPX", M::Absolute, 4, O::Cpx),
    /* 0xED */ op("SBC", M::Absolute, 4, O::Sbc),
    /* 0xEE */ op("INC", M::Absolute, 6, O::Inc),
    /* 0xEF */ op("BBS6", M::ZeroPageRelative, 5, O::Bbs(6)),
    /* 0xF0 */ op("BEQ", M::Relative, 2, O::Beq),
    /* 0xF1 */ op("SBC", M::IndirectY, 5, O::Sbc),
    /* 0xF2 */ op("SBC", M::ZeroPageIndirect, 5, O::Sbc),
    /* 0xF3 */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0xF4 */ op("NOP", M::ZeroPageX, 4, O::Nop),
    /* 0xF5 */ op("SBC", M::ZeroPageX, 4, O::Sbc),
    /* 0xF6 */ op("INC", M::ZeroPageX, 6, O::Inc),
    /* 0xF7 */ op("SMB7", M::ZeroPage, 5, O::Smb(7)),
    /* 0xF8 */ op("SED", M::Implicit, 2, O::Sed),
    /* 0xF9 */ op("SBC", M::AbsoluteY, 4, O::Sbc),
    /* 0xFA */ op("PLX", M::Implicit, 4, O::Plx),
    /* 0xFB */ op("NOP", M::Implicit, 1, O::Nop),
    /* 0xFC */ op("NOP", M::AbsoluteX, 4, O::Nop),
    /* 0xFD */ op("SBC", M::AbsoluteX, 4, O::Sbc),
    /* 0xFE */ op("INC", M::AbsoluteX, 7, O::Inc),
    /* 0xFF */ op("BBS7", M::ZeroPageRelative, 5, O::Bbs(7)),
];

/// The default (NMOS) opcode table.
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = NMOS_OPCODES;
