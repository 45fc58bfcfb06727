//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;

/// Format a single instruction as assembly text
///
/// # Examples
///
/// ```rust
/// use sim6502::{decode_instruction, format_instruction, Variant};
///
/// let instr = decode_instruction(&[0x0F, 0x12, 0x4A], 0x0200, Variant::Cmos).unwrap();
/// assert_eq!(format_instruction(&instr), "BBR0 $12,$024D");
/// ```
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

/// Format an instruction as a listing line: address, raw bytes, then the
/// assembly text, e.g. `$8000  A9 42     LDA #$42`.
pub fn format_listing_line(instr: &Instruction) -> String {
    let raw: Vec<String> = instr.raw_bytes().map(|b| format!("{:02X}", b)).collect();
    format!(
        "${:04X}  {:<10}{}",
        instr.address,
        raw.join(" "),
        format_instruction(instr)
    )
}

fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    if instr.is_data() {
        return format!("${:02X}", instr.opcode);
    }

    let bytes = &instr.operand_bytes;
    let zp = || bytes.first().copied().unwrap_or(0);
    let word = || match bytes.as_slice() {
        [lo, hi, ..] => u16::from_le_bytes([*lo, *hi]),
        _ => 0,
    };

    match instr.addressing_mode {
        Implicit => String::new(),
        Accumulator => "A".to_string(),
        Immediate => format!("#${:02X}", zp()),
        ZeroPage => format!("${:02X}", zp()),
        ZeroPageX => format!("${:02X},X", zp()),
        ZeroPageY => format!("${:02X},Y", zp()),
        ZeroPageIndirect => format!("(${:02X})", zp()),
        IndirectX => format!("(${:02X},X)", zp()),
        IndirectY => format!("(${:02X}),Y", zp()),
        Relative => {
            let target = branch_target(instr.address, 2, zp());
            format!("${:04X}", target)
        }
        ZeroPageRelative => {
            let offset = bytes.get(1).copied().unwrap_or(0);
            let target = branch_target(instr.address, 3, offset);
            format!("${:02X},${:04X}", zp(), target)
        }
        Absolute => format!("${:04X}", word()),
        AbsoluteX => format!("${:04X},X", word()),
        AbsoluteY => format!("${:04X},Y", word()),
        Indirect => format!("(${:04X})", word()),
        AbsoluteIndexedIndirect => format!("(${:04X},X)", word()),
    }
}

// Branch offsets count from the byte after the instruction.
fn branch_target(address: u16, size: u16, offset: u8) -> u16 {
    address
        .wrapping_add(size)
        .wrapping_add(offset as i8 as i16 as u16)
}
