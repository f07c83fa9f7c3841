//! `scripts.txt` → `module_scripts.py`.

use super::{begin_module, check_cancelled, count, end_module, push_block};
use crate::context::DecompileContext;
use crate::error::DecodeError;
use crate::reader::TokenReader;
use crate::statement::decompile_block;
use std::io::BufRead;

/// Flags value of a script compiled without flags.
const NO_FLAGS: &str = "-1";

pub(crate) fn decompile<R: BufRead>(
    reader: &mut TokenReader<R>,
    ctx: &DecompileContext,
) -> Result<String, DecodeError> {
    let mut out = begin_module(&[], "scripts");
    let records = count(reader.next_i64()?);
    for _ in 0..records {
        check_cancelled(ctx)?;
        let name = reader.next_word()?;
        let flags = reader.next_word()?;
        out.push_str(&format!("  (\"{name}\","));
        if flags != NO_FLAGS {
            out.push_str(&format!(" {flags},"));
        }
        out.push_str("\n    ");
        push_block(&mut out, &decompile_block(reader, ctx)?, "    ");
        out.push_str("),\n\n");
    }
    end_module(&mut out);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::CancelToken;
    use crate::ops::{Mode, OperatorTable};
    use crate::symbols::{SymbolKind, SymbolTable, SymbolTables};
    use std::io::Cursor;

    #[test]
    fn test_scripts() {
        let mut symbols = SymbolTables::new();
        symbols.insert(SymbolKind::Script, SymbolTable::new(["game_start", "helper"]));
        let ctx = DecompileContext::new(
            OperatorTable::load(Mode::Warband),
            symbols,
            CancelToken::new(),
        );
        let text = "2\ngame_start -1\n 2 1 2 1 5 -1507 1 7\nhelper 1\n 0\n";
        let mut reader = TokenReader::new(Cursor::new(text.as_bytes()));
        let out = decompile(&mut reader, &ctx).unwrap();
        assert!(out.contains(
            "scripts = [\n  (\"game_start\",\n    [\n      call_script(script_helper, 5),\n      neg|troop_is_hero(7),\n    ]),\n\n"
        ));
        assert!(out.contains("  (\"helper\", 1,\n    []),\n\n]\n"));
    }

    #[test]
    fn test_truncated_script_fails() {
        let ctx = DecompileContext::for_mode(Mode::Warband);
        let mut reader = TokenReader::new(Cursor::new("1\ngame_start -1\n 2 4 0".as_bytes()));
        let err = decompile(&mut reader, &ctx).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedStatement { record: 1, .. }));
    }
}
