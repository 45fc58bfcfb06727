//! Instruction decoder for the disassembler

use crate::cpu::Variant;
use crate::disassembler::Instruction;
use crate::opcodes::Operation;

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
/// * `variant` - Which opcode table to decode with
///
/// # Returns
///
/// `None` for an empty slice, a JAM opcode, or an instruction whose operand
/// bytes run past the end of `bytes`.
pub fn decode_instruction(bytes: &[u8], address: u16, variant: Variant) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let metadata = &variant.opcode_table()[opcode as usize];

    if metadata.operation == Operation::Jam {
        return None;
    }

    let operand_len = metadata.size_bytes as usize - 1;
    let operand_bytes = rest.get(..operand_len)?.to_vec();

    Some(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        addressing_mode: metadata.addressing_mode,
        operand_bytes,
        size_bytes: metadata.size_bytes,
        base_cycles: metadata.base_cycles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::AddressingMode;

    #[test]
    fn test_decode_lda_immediate() {
        let instr = decode_instruction(&[0xA9, 0x42], 0x8000, Variant::Nmos).unwrap();

        assert_eq!(instr.address, 0x8000);
        assert_eq!(instr.opcode, 0xA9);
        assert_eq!(instr.mnemonic, "LDA");
        assert_eq!(instr.addressing_mode, AddressingMode::Immediate);
        assert_eq!(instr.operand_bytes, vec![0x42]);
        assert_eq!(instr.size_bytes, 2);
        assert_eq!(instr.base_cycles, 2);
    }

    #[test]
    fn test_decode_sta_absolute() {
        let instr = decode_instruction(&[0x8D, 0x00, 0x80, 0xFF], 0x0000, Variant::Nmos).unwrap();

        assert_eq!(instr.mnemonic, "STA");
        assert_eq!(instr.addressing_mode, AddressingMode::Absolute);
        assert_eq!(instr.operand_bytes, vec![0x00, 0x80]);
        assert_eq!(instr.size_bytes, 3);
    }

    #[test]
    fn test_decode_rejects_jam_and_truncation() {
        assert!(decode_instruction(&[], 0, Variant::Nmos).is_none());
        assert!(decode_instruction(&[0x02], 0, Variant::Nmos).is_none());
        assert!(decode_instruction(&[0xAD, 0x00], 0, Variant::Nmos).is_none());
    }

    #[test]
    fn test_decode_undocumented_nmos_opcode() {
        let instr = decode_instruction(&[0xA7, 0x10], 0, Variant::Nmos).unwrap();
        assert_eq!(instr.mnemonic, "LAX");
        assert_eq!(instr.addressing_mode, AddressingMode::ZeroPage);
    }

    #[test]
    fn test_decode_cmos_bit_branch() {
        let instr = decode_instruction(&[0x8F, 0x12, 0xFE], 0x0300, Variant::Cmos).unwrap();
        assert_eq!(instr.mnemonic, "BBS0");
        assert_eq!(instr.addressing_mode, AddressingMode::ZeroPageRelative);
        assert_eq!(instr.size_bytes, 3);
    }

    #[test]
    fn test_decode_cmos_nop_width() {
        // 0x02 is JAM on the NMOS part but a two-byte NOP on the 65C02
        let instr = decode_instruction(&[0x02, 0x99], 0, Variant::Cmos).unwrap();
        assert_eq!(instr.mnemonic, "NOP");
        assert_eq!(instr.size_bytes, 2);
    }
}
