//! Property-based tests for symbol resolution, flag decoding and statement
//! blocks.
//!
//! Run with: cargo test --release prop_decode

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::io::Cursor;

use proptest::prelude::*;

use mbdecomp::flags::{self, FlagSpec, ScalarField, ScalarRender};
use mbdecomp::{
    DecompileContext, Mode, SymbolKind, SymbolTable, SymbolTables, TokenReader, decompile_block,
    resolve,
};

const OVERRIDE_SPEC: FlagSpec = FlagSpec {
    fields: &[ScalarField::new(0xF, 0, ScalarRender::Call("size"))],
    overrides: &[(0x30, "both"), (0x10, "low")],
    flags: &[(0x10, "bit_low"), (0x20, "bit_high"), (0x40, "extra")],
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// In-range indices resolve to prefixed names; everything else is a numeral.
    #[test]
    fn prop_resolve_bounds(len in 0usize..20, index in -100i64..100) {
        let names: Vec<String> = (0..len).map(|i| format!("n{i}")).collect();
        let table = SymbolTable::new(names);
        let rendered = resolve(&table, index, "trp_");
        let in_range = index >= 0 && usize::try_from(index).unwrap() < len;
        if in_range {
            prop_assert_eq!(rendered, format!("trp_n{index}"));
        } else {
            prop_assert_eq!(rendered, index.to_string());
        }
    }

    /// An override group fires only when its whole mask is set, and its bits
    /// are never reported again as independent flags.
    #[test]
    fn prop_override_requires_full_mask(word in 0u64..0x80) {
        let out = flags::decode(word, &OVERRIDE_SPEC, &SymbolTables::new());
        let tokens: Vec<&str> = out.split('|').collect();
        if word & 0x30 == 0x30 {
            prop_assert!(tokens.contains(&"both"));
            prop_assert!(!tokens.contains(&"low"));
            prop_assert!(!tokens.contains(&"bit_low"));
            prop_assert!(!tokens.contains(&"bit_high"));
        } else if word & 0x10 != 0 {
            prop_assert!(tokens.contains(&"low"));
            prop_assert!(!tokens.contains(&"bit_low"));
        }
        prop_assert_eq!(tokens.contains(&"extra"), word & 0x40 != 0);
    }

    /// Bits outside every rule are dropped, and a word with no known bits
    /// renders as `0`.
    #[test]
    fn prop_unknown_bits_dropped(known in 0u64..0x80, unknown in 0u64..0xFFFF) {
        let symbols = SymbolTables::new();
        let noisy = known | (unknown << 8);
        prop_assert_eq!(
            flags::decode(noisy, &OVERRIDE_SPEC, &symbols),
            flags::decode(known, &OVERRIDE_SPEC, &symbols)
        );
        prop_assert_eq!(flags::decode(unknown << 8, &OVERRIDE_SPEC, &symbols), "0");
    }

    /// Blocks of unknown opcodes decode to one statement per record with the
    /// operands in stream order.
    #[test]
    fn prop_block_preserves_records(
        records in prop::collection::vec(
            (90_000i64..90_100, prop::collection::vec(-1000i64..1000, 0..5)),
            0..12,
        )
    ) {
        let mut text = format!("{}", records.len());
        for (code, operands) in &records {
            text.push_str(&format!(" {code} {}", operands.len()));
            for operand in operands {
                text.push_str(&format!(" {operand}"));
            }
        }
        let ctx = DecompileContext::for_mode(Mode::Warband);
        let mut reader = TokenReader::new(Cursor::new(text.into_bytes()));
        let block = decompile_block(&mut reader, &ctx).unwrap();

        prop_assert_eq!(block.len(), records.len());
        for (statement, (code, operands)) in block.statements.iter().zip(&records) {
            let expected: Vec<String> = operands.iter().map(ToString::to_string).collect();
            prop_assert_eq!(&statement.operands, &expected);
            prop_assert_eq!(statement.to_string(), format!("{code}({})", expected.join(", ")));
        }
    }

    /// Truncating a block anywhere yields an error, never a panic or a
    /// silently shortened block.
    #[test]
    fn prop_truncated_block_errors(operands in prop::collection::vec(0i64..100, 1..6), cut in 0usize..8) {
        let mut tokens = vec!["1".to_string(), "2133".to_string(), operands.len().to_string()];
        tokens.extend(operands.iter().map(ToString::to_string));
        let keep = cut.min(tokens.len() - 1);
        let text = tokens[..keep].join(" ");
        let ctx = DecompileContext::for_mode(Mode::Warband);
        let mut reader = TokenReader::new(Cursor::new(text.into_bytes()));
        prop_assert!(decompile_block(&mut reader, &ctx).is_err());
    }
}

#[test]
fn test_symbol_field_resolves_through_tables() {
    const SPEC: FlagSpec = FlagSpec {
        fields: &[ScalarField::new(0xFFF, 0, ScalarRender::Symbol(SymbolKind::Troop))
            .with_sentinel(0xFFF, "anyone")],
        overrides: &[],
        flags: &[(0x1000, "plyr")],
    };
    let mut symbols = SymbolTables::new();
    symbols.insert(SymbolKind::Troop, SymbolTable::new(["player", "guard"]));
    assert_eq!(flags::decode(0x1001, &SPEC, &symbols), "trp_guard|plyr");
    assert_eq!(flags::decode(0xFFF, &SPEC, &symbols), "anyone");
    assert_eq!(flags::decode(0x7, &SPEC, &symbols), "7");
}
