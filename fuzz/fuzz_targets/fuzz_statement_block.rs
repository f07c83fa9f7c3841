#![no_main]

use std::io::Cursor;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mbdecomp::{DecompileContext, Mode, TokenReader, decompile_block};

/// Structured input for statement block fuzzing.
#[derive(Arbitrary, Debug)]
struct BlockInput {
    /// Selects the opcode table.
    mode: u8,
    /// Raw block text.
    text: Vec<u8>,
}

fuzz_target!(|input: BlockInput| {
    let mode = Mode::ALL[usize::from(input.mode) % Mode::ALL.len()];
    let ctx = DecompileContext::for_mode(mode);
    let mut reader = TokenReader::new(Cursor::new(input.text));
    if let Ok(block) = decompile_block(&mut reader, &ctx) {
        // Rendering must never fail for a decoded block.
        let rendered = block.render("  ");
        assert_eq!(rendered.lines().count(), block.len());
    }
});
