//! Instruction encoder for the 6502 assembler
//!
//! Chooses the addressing mode for a parsed operand by looking the mnemonic up in
//! the variant's opcode table. Zero page forms win whenever the value fits in a
//! byte and the instruction has one.

use crate::addressing::AddressingMode;
use crate::assembler::parser::{Operand, Register, Value};
use crate::assembler::AssemblerError;
use crate::cpu::Variant;
use crate::opcodes::Operation;

/// Opcode for `mnemonic` in `mode`. Opcodes that jam or fault are never chosen,
/// and implied NOP is always 0xEA.
pub fn find_opcode(variant: Variant, mnemonic: &str, mode: AddressingMode) -> Option<u8> {
    if mnemonic == "NOP" && mode == AddressingMode::Implicit {
        return Some(0xEA);
    }

    (0..=u8::MAX).find(|&opcode| {
        let meta = &variant.opcode_table()[opcode as usize];
        meta.mnemonic == mnemonic
            && meta.addressing_mode == mode
            && !matches!(meta.operation, Operation::Jam | Operation::Illegal)
    })
}

/// Encode one instruction assembled at `address`.
pub fn encode(
    variant: Variant,
    address: u16,
    mnemonic: &str,
    operand: Operand,
) -> Result<Vec<u8>, AssemblerError> {
    use AddressingMode as M;

    let lookup = |mode| find_opcode(variant, mnemonic, mode);
    let require = |mode| {
        lookup(mode).ok_or_else(|| AssemblerError::InvalidInstruction {
            mnemonic: mnemonic.to_string(),
            mode,
        })
    };
    let resolve = |value: Value| value.resolve(address);

    let bytes = match operand {
        Operand::None => match lookup(M::Implicit) {
            Some(opcode) => vec![opcode],
            None => vec![require(M::Accumulator)?],
        },
        Operand::Accumulator => vec![require(M::Accumulator)?],
        Operand::Immediate(value) => vec![require(M::Immediate)?, byte(resolve(value))?],
        Operand::Direct(value) => match lookup(M::Relative) {
            Some(opcode) => vec![opcode, branch_offset(address, 2, resolve(value))?],
            None => zero_page_or_absolute(resolve(value), M::ZeroPage, M::Absolute, &require)?,
        },
        Operand::Indexed(value, Register::X) => {
            zero_page_or_absolute(resolve(value), M::ZeroPageX, M::AbsoluteX, &require)?
        }
        Operand::Indexed(value, Register::Y) => {
            zero_page_or_absolute(resolve(value), M::ZeroPageY, M::AbsoluteY, &require)?
        }
        Operand::Indirect(value) => {
            let pointer = resolve(value);
            match lookup(M::Indirect) {
                Some(opcode) => word(opcode, pointer),
                None => vec![require(M::ZeroPageIndirect)?, byte(pointer)?],
            }
        }
        Operand::IndexedIndirect(value) => {
            let pointer = resolve(value);
            match (u8::try_from(pointer), lookup(M::IndirectX)) {
                (Ok(zero_page), Some(opcode)) => vec![opcode, zero_page],
                _ => word(require(M::AbsoluteIndexedIndirect)?, pointer),
            }
        }
        Operand::IndirectIndexed(value) => vec![require(M::IndirectY)?, byte(resolve(value))?],
        Operand::BitBranch(zero_page, target) => vec![
            require(M::ZeroPageRelative)?,
            byte(resolve(zero_page))?,
            branch_offset(address, 3, resolve(target))?,
        ],
    };
    Ok(bytes)
}

fn zero_page_or_absolute(
    value: u16,
    zero_page: AddressingMode,
    absolute: AddressingMode,
    require: &dyn Fn(AddressingMode) -> Result<u8, AssemblerError>,
) -> Result<Vec<u8>, AssemblerError> {
    if let (Ok(low), Ok(opcode)) = (u8::try_from(value), require(zero_page)) {
        return Ok(vec![opcode, low]);
    }
    Ok(word(require(absolute)?, value))
}

fn word(opcode: u8, value: u16) -> Vec<u8> {
    let [lo, hi] = value.to_le_bytes();
    vec![opcode, lo, hi]
}

fn byte(value: u16) -> Result<u8, AssemblerError> {
    u8::try_from(value).map_err(|_| AssemblerError::OperandTooLarge(value))
}

// Offsets count from the byte after the instruction.
fn branch_offset(address: u16, size: u16, target: u16) -> Result<u8, AssemblerError> {
    let next = address.wrapping_add(size);
    let offset = target.wrapping_sub(next) as i16;
    i8::try_from(offset)
        .map(|offset| offset as u8)
        .map_err(|_| AssemblerError::BranchOutOfRange { address, target })
}
