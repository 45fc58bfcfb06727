//! Addressing modes of the NMOS 6502 and the three the 65C02 adds.
//!
//! Extra cycles for indexed accesses that cross a page boundary are not modeled;
//! every instruction costs exactly its base cycle count.

/// How an instruction finds its operand.
///
/// The operand width follows from the mode, see [`AddressingMode::operand_bytes`].
/// Zero page forms wrap inside page zero; absolute forms wrap at 0xFFFF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddressingMode {
    /// `CLC`, `RTS`
    Implicit,
    /// `ROL A`, and `INC A` on the 65C02
    Accumulator,
    /// `LDA #$10`
    Immediate,
    /// `LDA $80`
    ZeroPage,
    /// `LDA $80,X`
    ZeroPageX,
    /// `LDX $80,Y`
    ZeroPageY,
    /// Branch displacement, counted from the byte after the operand.
    Relative,
    /// `JMP $1234`
    Absolute,
    /// `LDA $1234,X`
    AbsoluteX,
    /// `LDA $1234,Y`
    AbsoluteY,
    /// `JMP ($FFFC)`.
    ///
    /// NMOS parts fetch the high byte of a pointer at $xxFF from $xx00.
    Indirect,
    /// `LDA ($40,X)`: index and pointer fetch both stay in page zero.
    IndirectX,
    /// `LDA ($40),Y`
    IndirectY,
    /// `BBR0 $12,label` (65C02)
    ZeroPageRelative,
    /// `LDA ($40)` (65C02)
    ZeroPageIndirect,
    /// `JMP ($2000,X)` (65C02)
    AbsoluteIndexedIndirect,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY
            | AddressingMode::ZeroPageIndirect => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect
            | AddressingMode::ZeroPageRelative
            | AddressingMode::AbsoluteIndexedIndirect => 2,
        }
    }
}

/// The operand an instruction works on, after its addressing mode has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    /// Implicit instructions; nothing to read or write.
    None,
    /// The accumulator is both source and destination.
    Accumulator,
    /// A constant taken from the instruction stream.
    Immediate(u8),
    /// An effective memory address (also used for branch and jump targets).
    Address(u16),
    /// 65C02 bit branches: the zero page byte to test and the branch target.
    ZeroPageBranch { address: u16, target: u16 },
}

impl Operand {
    /// Effective address of the operand.
    ///
    /// Accumulator/implicit/immediate operands have none; 0 is returned and the
    /// opcode tables never pair such modes with a memory-writing operation.
    pub(crate) fn address(self) -> u16 {
        match self {
            Operand::Address(address) | Operand::ZeroPageBranch { address, .. } => address,
            Operand::None | Operand::Accumulator | Operand::Immediate(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_byte_counts() {
        assert_eq!(AddressingMode::Implicit.operand_bytes(), 0);
        assert_eq!(AddressingMode::Accumulator.operand_bytes(), 0);
        assert_eq!(AddressingMode::IndirectY.operand_bytes(), 1);
        assert_eq!(AddressingMode::ZeroPageIndirect.operand_bytes(), 1);
        assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
        assert_eq!(AddressingMode::ZeroPageRelative.operand_bytes(), 2);
        assert_eq!(AddressingMode::AbsoluteIndexedIndirect.operand_bytes(), 2);
    }

    #[test]
    fn test_operand_address() {
        assert_eq!(Operand::Address(0x1234).address(), 0x1234);
        assert_eq!(
            Operand::ZeroPageBranch {
                address: 0x12,
                target: 0x0300
            }
            .address(),
            0x12
        );
        assert_eq!(Operand::Immediate(0x55).address(), 0);
    }
}
