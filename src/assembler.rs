//! # Line Assembler
//!
//! Assembles 6502 source one line at a time straight into memory, the way a
//! machine-code monitor does. There are no labels: branch and jump targets are
//! addresses, or offsets from the address being assembled (`*-2`).
//!
//! ```text
//! * = $0200             ; move the assembly address
//! 0200  LDX #10         ; optional address column
//!       STA $D000,X
//!       DEX
//!       BNE *-4
//! ```
//!
//! Bare numbers in addresses and operands are hexadecimal. After `#` they are
//! decimal; `$` and `%` select hexadecimal and binary anywhere.

pub mod encoder;
pub mod parser;

use crate::cpu::Variant;
use crate::memory::MemoryBus;
use crate::AddressingMode;
use parser::Statement;

/// An error in a single line of source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssemblerError {
    /// The line does not have the shape of an instruction or origin.
    #[error("syntax error in `{0}`")]
    Syntax(String),

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    /// The mnemonic is unknown, or it has no form taking this operand.
    #[error("{mnemonic} has no {mode:?} form")]
    InvalidInstruction {
        mnemonic: String,
        mode: AddressingMode,
    },

    /// A byte-sized operand (immediate, zero page pointer) got a larger value.
    #[error("operand ${0:04X} does not fit in a byte")]
    OperandTooLarge(u16),

    #[error("branch at ${address:04X} cannot reach ${target:04X}")]
    BranchOutOfRange { address: u16, target: u16 },
}

/// An [`AssemblerError`] together with the 1-based line it occurred on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {error}")]
pub struct SourceError {
    pub line: usize,
    #[source]
    pub error: AssemblerError,
}

/// Machine code produced by one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled {
    /// Where the code was written (the assembly address, for lines without code)
    pub address: u16,
    /// Empty for blank, comment and origin lines
    pub bytes: Vec<u8>,
}

/// Assembles lines into memory, advancing its address past each instruction.
///
/// # Examples
///
/// ```
/// use sim6502::{Assembler, FlatMemory, MemoryBus, Variant};
///
/// let mut memory = FlatMemory::new();
/// let mut asm = Assembler::new(Variant::Nmos, 0x0200);
///
/// asm.assemble_line("LDA #$42", &mut memory).unwrap();
/// asm.assemble_line("STA $80", &mut memory).unwrap();
///
/// assert_eq!(memory.read(0x0200), 0xA9);
/// assert_eq!(memory.read(0x0203), 0x80);
/// assert_eq!(asm.address(), 0x0204);
/// ```
#[derive(Debug, Clone)]
pub struct Assembler {
    variant: Variant,
    address: u16,
}

impl Assembler {
    pub fn new(variant: Variant, origin: u16) -> Self {
        Assembler {
            variant,
            address: origin,
        }
    }

    /// Address the next instruction will be assembled at.
    pub fn address(&self) -> u16 {
        self.address
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Assemble one line and write its machine code to `memory`.
    ///
    /// Nothing is written when the line has an error. A leading address column
    /// moves the assembly address even then.
    pub fn assemble_line<M: MemoryBus + ?Sized>(
        &mut self,
        line: &str,
        memory: &mut M,
    ) -> Result<Assembled, AssemblerError> {
        let (mnemonic, operand) = match parser::parse_line(line)? {
            Statement::Empty => return Ok(self.nothing()),
            Statement::Origin(address) => {
                log::debug!("assembling at ${:04X}", address);
                self.address = address;
                return Ok(self.nothing());
            }
            Statement::Instruction {
                address,
                mnemonic,
                operand,
            } => {
                if let Some(address) = address {
                    self.address = address;
                }
                (mnemonic, operand)
            }
        };

        let bytes = encoder::encode(self.variant, self.address, &mnemonic, operand)?;
        let start = self.address;
        for &byte in &bytes {
            memory.write(self.address, byte);
            self.address = self.address.wrapping_add(1);
        }
        log::trace!("${:04X}: {} -> {:02X?}", start, line.trim(), bytes);

        Ok(Assembled {
            address: start,
            bytes,
        })
    }

    /// Assemble every line of `source`, stopping at the first error.
    ///
    /// Returns the lines that produced code, in order.
    pub fn assemble<M: MemoryBus + ?Sized>(
        &mut self,
        source: &str,
        memory: &mut M,
    ) -> Result<Vec<Assembled>, SourceError> {
        let mut output = Vec::new();
        for (index, line) in source.lines().enumerate() {
            let assembled = self
                .assemble_line(line, memory)
                .map_err(|error| SourceError {
                    line: index + 1,
                    error,
                })?;
            if !assembled.bytes.is_empty() {
                output.push(assembled);
            }
        }
        Ok(output)
    }

    fn nothing(&self) -> Assembled {
        Assembled {
            address: self.address,
            bytes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;

    #[test]
    fn test_address_advances() {
        let mut memory = FlatMemory::new();
        let mut asm = Assembler::new(Variant::Nmos, 0x1000);

        let out = asm.assemble_line("JMP $1234", &mut memory).unwrap();
        assert_eq!(out.address, 0x1000);
        assert_eq!(out.bytes, vec![0x4C, 0x34, 0x12]);
        assert_eq!(asm.address(), 0x1003);
    }

    #[test]
    fn test_origin_and_address_column() {
        let mut memory = FlatMemory::new();
        let mut asm = Assembler::new(Variant::Nmos, 0);

        let out = asm.assemble_line("* = $0300", &mut memory).unwrap();
        assert_eq!(out.address, 0x0300);
        assert!(out.bytes.is_empty());

        asm.assemble_line("0400 INX", &mut memory).unwrap();
        assert_eq!(memory.read(0x0400), 0xE8);
        assert_eq!(memory.read(0x0300), 0x00);
        assert_eq!(asm.address(), 0x0401);
    }

    #[test]
    fn test_error_writes_nothing() {
        let mut memory = FlatMemory::new();
        memory.write(0x0200, 0x55);
        let mut asm = Assembler::new(Variant::Nmos, 0x0200);

        assert!(matches!(
            asm.assemble_line("FOO #1", &mut memory),
            Err(AssemblerError::InvalidInstruction { .. })
        ));
        assert_eq!(memory.read(0x0200), 0x55);
        assert_eq!(asm.address(), 0x0200);
    }

    #[test]
    fn test_source_error_reports_line() {
        let mut memory = FlatMemory::new();
        let mut asm = Assembler::new(Variant::Nmos, 0x0200);

        let err = asm
            .assemble("LDA #1\n\nLDA #300\n", &mut memory)
            .unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.error, AssemblerError::OperandTooLarge(300));
        assert_eq!(err.to_string(), "line 3: operand $012C does not fit in a byte");
    }

    #[test]
    fn test_writes_wrap_at_top_of_memory() {
        let mut memory = FlatMemory::new();
        let mut asm = Assembler::new(Variant::Nmos, 0xFFFF);

        asm.assemble_line("LDA #$07", &mut memory).unwrap();
        assert_eq!(memory.read(0xFFFF), 0xA9);
        assert_eq!(memory.read(0x0000), 0x07);
        assert_eq!(asm.address(), 0x0001);
    }
}
