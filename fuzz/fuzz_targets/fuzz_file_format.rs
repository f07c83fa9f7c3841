#![no_main]

use std::io::Cursor;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mbdecomp::{DecompileContext, FileFormat, Mode, TokenReader};

/// Structured input for whole-file fuzzing.
#[derive(Arbitrary, Debug)]
struct FileInput {
    /// Selects the driver.
    format: u8,
    /// File body after the signature line.
    body: Vec<u8>,
}

fuzz_target!(|input: FileInput| {
    let format = FileFormat::ALL[usize::from(input.format) % FileFormat::ALL.len()];
    let ctx = DecompileContext::for_mode(Mode::Warband);
    let mut reader = TokenReader::new(Cursor::new(input.body));
    // Any outcome is fine; decoding must not panic.
    let _ = format.decompile(&mut reader, &ctx);
});
