//! Fuzz target for the line assembler.
//!
//! Feeds arbitrary text to both instruction sets. Whatever assembles must
//! disassemble back to an instruction of the same size.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sim6502::{decode_instruction, Assembler, FlatMemory, Variant};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    source: String,
    origin: u16,
    cmos: bool,
}

fuzz_target!(|input: FuzzInput| {
    let variant = if input.cmos { Variant::Cmos } else { Variant::Nmos };
    let mut memory = FlatMemory::new();
    let mut assembler = Assembler::new(variant, input.origin);

    let Ok(lines) = assembler.assemble(&input.source, &mut memory) else {
        return;
    };
    for line in lines {
        let instr = decode_instruction(&line.bytes, line.address, variant)
            .expect("assembled bytes decode");
        assert_eq!(usize::from(instr.size_bytes), line.bytes.len());
    }
});
