//! 6502 / 65C02 Disassembler Module
//!
//! Converts binary machine code into human-readable assembly mnemonics. The
//! decoder reads the same opcode tables the CPU executes from, so the listing
//! for a [`Variant`] always agrees with what that variant would run.

pub mod decoder;
pub mod formatter;

pub use decoder::decode_instruction;
pub use formatter::{format_instruction, format_listing_line};

use crate::addressing::AddressingMode;
use crate::cpu::Variant;

/// Mnemonic used for bytes that do not decode to an instruction.
pub const DATA_BYTE: &str = ".byte";

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "BBR3"), or `.byte` for raw data
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost
    pub base_cycles: u8,
}

impl Instruction {
    /// A one-byte `.byte` directive standing in for an undecodable byte.
    pub fn data_byte(address: u16, value: u8) -> Self {
        Self {
            address,
            opcode: value,
            mnemonic: DATA_BYTE,
            addressing_mode: AddressingMode::Implicit,
            operand_bytes: Vec::new(),
            size_bytes: 1,
            base_cycles: 0,
        }
    }

    pub fn is_data(&self) -> bool {
        self.mnemonic == DATA_BYTE
    }

    /// Opcode followed by the operand bytes, as they appear in memory.
    pub fn raw_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        std::iter::once(self.opcode).chain(self.operand_bytes.iter().copied())
    }
}

/// Options controlling disassembly
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisassemblyOptions {
    /// Address of the first byte (affects address display and branch targets)
    pub start_address: u16,

    /// Which opcode table to decode with
    pub variant: Variant,
}

/// Disassemble a byte slice into a vector of instructions
///
/// Bytes that do not form a complete instruction (JAM opcodes, or an
/// instruction cut off by the end of the slice) come out as one `.byte`
/// entry each, so the entries always cover `bytes` exactly.
///
/// # Examples
///
/// ```rust
/// use sim6502::{disassemble, format_instruction, DisassemblyOptions, Variant};
///
/// let code = [0xA9, 0x42, 0x1A, 0x6C, 0xFF, 0x10];
/// let options = DisassemblyOptions { start_address: 0x8000, variant: Variant::Cmos };
/// let lines: Vec<String> = disassemble(&code, options).iter().map(format_instruction).collect();
/// assert_eq!(lines, ["LDA #$42", "INC A", "JMP ($10FF)"]);
/// ```
pub fn disassemble(bytes: &[u8], options: DisassemblyOptions) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut pc = 0;
    let mut address = options.start_address;

    while pc < bytes.len() {
        let instr = decode_instruction(&bytes[pc..], address, options.variant)
            .unwrap_or_else(|| Instruction::data_byte(address, bytes[pc]));
        pc += instr.size_bytes as usize;
        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disassemble_empty() {
        let bytes = &[];
        let instructions = disassemble(bytes, DisassemblyOptions::default());
        assert_eq!(instructions.len(), 0);
    }

    #[test]
    fn test_truncated_tail_becomes_data() {
        let instructions = disassemble(&[0xEA, 0x8D, 0x00], DisassemblyOptions::default());
        assert_eq!(instructions.len(), 3);
        assert_eq!(instructions[0].mnemonic, "NOP");
        assert!(instructions[1].is_data());
        assert_eq!(instructions[1].address, 0x0001);
        assert!(instructions[2].is_data());
        assert_eq!(instructions[2].opcode, 0x00);
    }

    #[test]
    fn test_variant_changes_decoding() {
        let nmos = disassemble(&[0xB2, 0x12], DisassemblyOptions::default());
        assert!(nmos[0].is_data());

        let cmos = disassemble(
            &[0xB2, 0x12],
            DisassemblyOptions {
                variant: Variant::Cmos,
                ..Default::default()
            },
        );
        assert_eq!(cmos.len(), 1);
        assert_eq!(cmos[0].mnemonic, "LDA");
        assert_eq!(cmos[0].addressing_mode, AddressingMode::ZeroPageIndirect);
    }

    #[test]
    fn test_addresses_wrap() {
        let instructions = disassemble(
            &[0xEA, 0xEA],
            DisassemblyOptions {
                start_address: 0xFFFF,
                ..Default::default()
            },
        );
        assert_eq!(instructions[1].address, 0x0000);
    }
}
