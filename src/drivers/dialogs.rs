//! `conversation.txt` → `module_dialogs.py`.

use super::{begin_module, check_cancelled, count, display_text, end_module, push_block};
use crate::context::DecompileContext;
use crate::error::DecodeError;
use crate::flags::{self, FlagSpec, ScalarField, ScalarRender};
use crate::reader::TokenReader;
use crate::statement::decompile_block;
use crate::symbols::SymbolKind;
use std::io::BufRead;

const NO_VOICEOVER: &str = "NO_VOICEOVER";

const REPEATS: &[&str] = &[
    "repeat_for_factions",
    "repeat_for_parties",
    "repeat_for_troops",
    "repeat_for_100",
    "repeat_for_1000",
];

/// Dialog partner word: repeat selector, partner troop, "other" troop and
/// speaker flags.
pub(crate) const PARTNER: FlagSpec = FlagSpec {
    fields: &[
        ScalarField::new(0x7000, 12, ScalarRender::Indexed(REPEATS)),
        ScalarField::new(0xFFF, 0, ScalarRender::Symbol(SymbolKind::Troop))
            .with_sentinel(0xFFF, "anyone"),
        ScalarField::new(0xFFF0_0000, 20, ScalarRender::Wrapped("other", SymbolKind::Troop)),
    ],
    overrides: &[],
    flags: &[
        (0x1_0000, "plyr"),
        (0x2_0000, "party_tpl"),
        (0x4_0000, "auto_proceed"),
        (0x8_0000, "multi_line"),
    ],
};

pub(crate) fn decompile<R: BufRead>(
    reader: &mut TokenReader<R>,
    ctx: &DecompileContext,
) -> Result<String, DecodeError> {
    let symbols = ctx.symbols();
    let mut out = begin_module(&["header_dialogs", "header_parties"], "dialogs");
    let records = count(reader.next_i64()?);
    for _ in 0..records {
        check_cancelled(ctx)?;
        reader.next_word()?;
        let partner = flags::decode(u64::from(reader.next_u32()?), &PARTNER, symbols);
        let start = symbols.resolve(SymbolKind::DialogState, reader.next_i64()?);
        out.push_str(&format!("  [{partner}, \"{start}\",\n    "));
        push_block(&mut out, &decompile_block(reader, ctx)?, "    ");
        out.push_str(",\n");

        let text = display_text(&reader.next_word()?);
        let end = symbols.resolve(SymbolKind::DialogState, reader.next_i64()?);
        out.push_str(&format!("    \"{text}\",\n    \"{end}\",\n    "));
        push_block(&mut out, &decompile_block(reader, ctx)?, "    ");

        let voice = reader.next_word()?;
        if voice != NO_VOICEOVER {
            out.push_str(&format!(",\n    [\"{voice}\"]"));
        }
        out.push_str("],\n\n");
    }
    end_module(&mut out);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::CancelToken;
    use crate::ops::{Mode, OperatorTable};
    use crate::symbols::{SymbolTable, SymbolTables};
    use std::io::Cursor;

    fn symbols() -> SymbolTables {
        let mut symbols = SymbolTables::new();
        symbols.insert(
            SymbolKind::Troop,
            SymbolTable::new(["player", "multiplayer_profile_troop_male", "temp_troop", "ramun"]),
        );
        symbols.insert(SymbolKind::DialogState, SymbolTable::new(["start", "close_window"]));
        symbols
    }

    #[test]
    fn test_partner_repeat_and_troop() {
        let symbols = symbols();
        assert_eq!(
            flags::decode(0x0000_2003, &PARTNER, &symbols),
            "repeat_for_parties|trp_ramun"
        );
        assert_eq!(
            flags::decode(0x0000_2003, &PARTNER, &SymbolTables::new()),
            "repeat_for_parties|3"
        );
    }

    #[test]
    fn test_partner_anyone_other_and_flags() {
        let symbols = symbols();
        assert_eq!(flags::decode(0x0000_0FFF, &PARTNER, &symbols), "anyone");
        assert_eq!(
            flags::decode(0x0021_0FFF, &PARTNER, &symbols),
            "anyone|other(trp_temp_troop)|plyr"
        );
        assert_eq!(flags::decode(0, &PARTNER, &symbols), "0");
        assert_eq!(flags::decode(0x0005_0000, &PARTNER, &symbols), "plyr|auto_proceed");
    }

    #[test]
    fn test_dialog_record() {
        let ctx = DecompileContext::new(
            OperatorTable::load(Mode::Warband),
            symbols(),
            CancelToken::new(),
        );
        let text = "2\n\
            dlga_start:close_window 4095 0 1 37 0 Surrender_or_die! 1 0 NO_VOICEOVER\n\
            dlga_start:close_window.1 65539 0 0 Hello. 1 1 2133 2 1 0 vo_hello\n";
        let mut reader = TokenReader::new(Cursor::new(text.as_bytes()));
        let out = decompile(&mut reader, &ctx).unwrap();
        assert!(out.contains(
            "  [anyone, \"start\",\n    [\n      map_free(),\n    ],\n    \"Surrender or die!\",\n    \"close_window\",\n    []],\n\n"
        ));
        assert!(out.contains(
            "  [trp_ramun|plyr, \"start\",\n    [],\n    \"Hello.\",\n    \"close_window\",\n    [\n      assign(1, 0),\n    ],\n    [\"vo_hello\"]],\n"
        ));
        assert!(out.ends_with("]\n"));
    }
}
