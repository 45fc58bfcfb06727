//! Line syntax of the assembler

use crate::assembler::AssemblerError;

/// A number in an operand, or a position relative to the current address (`*-2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Literal(u16),
    Here(i32),
}

impl Value {
    /// The address or number this value stands for when assembling at `here`.
    pub fn resolve(self, here: u16) -> u16 {
        match self {
            Value::Literal(value) => value,
            // Truncation wraps around the 64K address space
            Value::Here(offset) => (i32::from(here) + offset) as u16,
        }
    }
}

/// Index register named after a comma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    X,
    Y,
}

/// The operand as written, before an addressing mode is chosen.
///
/// Whether `$80` means zero page, absolute or a branch target depends on the
/// mnemonic and the value, so that choice is left to the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    None,
    Accumulator,
    /// `#10`, `#$0A`, `#%1010`
    Immediate(Value),
    /// `$80`, `$1234`, `*+4`
    Direct(Value),
    /// `$80,X`, `$1234,Y`
    Indexed(Value, Register),
    /// `($1234)`, `($80)`
    Indirect(Value),
    /// `($80,X)`, `($1234,X)`
    IndexedIndirect(Value),
    /// `($80),Y`
    IndirectIndexed(Value),
    /// `$12,$0240`: zero page byte and branch target
    BitBranch(Value, Value),
}

/// One parsed source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Blank or comment-only
    Empty,
    /// `* = $0200`
    Origin(u16),
    Instruction {
        /// Address column in front of the mnemonic, if any
        address: Option<u16>,
        /// Upper-cased
        mnemonic: String,
        operand: Operand,
    },
}

/// Parse a number. `$` marks hexadecimal and `%` binary; anything else is read
/// in `radix`.
pub fn parse_number(text: &str, radix: u32) -> Result<u16, AssemblerError> {
    let text = text.trim();
    let (digits, radix) = if let Some(hex) = text.strip_prefix('$') {
        (hex, 16)
    } else if let Some(bin) = text.strip_prefix('%') {
        (bin, 2)
    } else {
        (text, radix)
    };

    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(AssemblerError::InvalidNumber(text.to_string()));
    }
    u16::from_str_radix(digits, radix).map_err(|_| AssemblerError::InvalidNumber(text.to_string()))
}

/// Parse one line of source. Everything after `;` is a comment.
pub fn parse_line(line: &str) -> Result<Statement, AssemblerError> {
    let line = line.split(';').next().unwrap_or_default().trim();
    if line.is_empty() {
        return Ok(Statement::Empty);
    }

    if let Some(rest) = line.strip_prefix('*') {
        let address = rest
            .trim_start()
            .strip_prefix('=')
            .ok_or_else(|| AssemblerError::Syntax(line.to_string()))?;
        return parse_number(address, 16).map(Statement::Origin);
    }

    let mut tokens = line.split_whitespace();
    let mut first = tokens.next().unwrap_or_default();
    let mut address = None;
    if is_address_column(first) {
        address = Some(parse_number(first.trim_start_matches('$'), 16)?);
        first = tokens
            .next()
            .ok_or_else(|| AssemblerError::Syntax(line.to_string()))?;
    }

    if !first.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AssemblerError::Syntax(line.to_string()));
    }

    // Operands may carry spaces, as in `($80), Y`
    let operand: String = tokens.collect();
    Ok(Statement::Instruction {
        address,
        mnemonic: first.to_ascii_uppercase(),
        operand: parse_operand(&operand)?,
    })
}

/// `0200` or `$0200`. No mnemonic is four hex digits.
fn is_address_column(token: &str) -> bool {
    let digits = token.strip_prefix('$').unwrap_or(token);
    digits.len() == 4 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

fn parse_operand(text: &str) -> Result<Operand, AssemblerError> {
    let upper = text.to_ascii_uppercase();
    let syntax = || AssemblerError::Syntax(text.to_string());

    if upper.is_empty() {
        return Ok(Operand::None);
    }
    if upper == "A" {
        return Ok(Operand::Accumulator);
    }
    if let Some(immediate) = upper.strip_prefix('#') {
        return parse_value(immediate, 10).map(Operand::Immediate);
    }

    if let Some(inner) = upper.strip_prefix('(') {
        return if let Some(pointer) = inner.strip_suffix(",X)") {
            parse_value(pointer, 16).map(Operand::IndexedIndirect)
        } else if let Some(pointer) = inner.strip_suffix("),Y") {
            parse_value(pointer, 16).map(Operand::IndirectIndexed)
        } else if let Some(pointer) = inner.strip_suffix(')') {
            parse_value(pointer, 16).map(Operand::Indirect)
        } else {
            Err(syntax())
        };
    }

    match upper.split_once(',') {
        Some((value, "X")) => Ok(Operand::Indexed(parse_value(value, 16)?, Register::X)),
        Some((value, "Y")) => Ok(Operand::Indexed(parse_value(value, 16)?, Register::Y)),
        Some((zero_page, target)) => Ok(Operand::BitBranch(
            parse_value(zero_page, 16)?,
            parse_value(target, 16)?,
        )),
        None => parse_value(&upper, 16).map(Operand::Direct),
    }
}

fn parse_value(text: &str, radix: u32) -> Result<Value, AssemblerError> {
    let Some(offset) = text.strip_prefix('*') else {
        return parse_number(text, radix).map(Value::Literal);
    };

    let offset = offset.trim();
    if offset.is_empty() {
        Ok(Value::Here(0))
    } else if let Some(forward) = offset.strip_prefix('+') {
        Ok(Value::Here(i32::from(parse_number(forward, 16)?)))
    } else if let Some(back) = offset.strip_prefix('-') {
        Ok(Value::Here(-i32::from(parse_number(back, 16)?)))
    } else {
        Err(AssemblerError::Syntax(text.to_string()))
    }
}
