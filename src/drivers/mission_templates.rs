//! `mission_templates.txt` → `module_mission_templates.py`.

use super::{begin_module, check_cancelled, count, display_text, end_module, push_block, trigger_param};
use crate::context::DecompileContext;
use crate::error::DecodeError;
use crate::flags::{self, FlagSpec, ScalarField, ScalarRender};
use crate::reader::TokenReader;
use crate::statement::decompile_block;
use crate::symbols::SymbolKind;
use std::io::BufRead;

const START_ALARMED: u32 = 0x10;

/// Mission template flag word.
pub(crate) const MISSION_FLAGS: FlagSpec = FlagSpec::bits(&[
    (0x0000_0001, "mtf_arena_fight"),
    (0x0000_0002, "mtf_battle_mode"),
    (0x0000_0010, "mtf_commit_casualties"),
    (0x0000_0100, "mtf_no_blood"),
    (0x0001_0000, "mtf_synch_inventory"),
]);

/// Team field value `v` is `mtef_team_{v - 1}`, except 8.
const TEAMS: &[&str] = &[
    "mtef_team_0",
    "mtef_team_1",
    "mtef_team_2",
    "mtef_team_3",
    "mtef_team_4",
    "mtef_team_5",
    "mtef_team_6",
    "mtef_team_member_2",
    "mtef_team_8",
    "mtef_team_9",
    "mtef_team_10",
    "mtef_team_11",
    "mtef_team_12",
    "mtef_team_13",
    "mtef_team_14",
];

/// Spawn record flag word: team field plus `mtef_*` bits.
pub(crate) const SPAWN_FLAGS: FlagSpec = FlagSpec {
    fields: &[ScalarField::new(0xF000, 12, ScalarRender::Indexed(TEAMS))],
    overrides: &[],
    flags: &[
        (0x0000_0001, "mtef_enemy_party"),
        (0x0000_0002, "mtef_ally_party"),
        (0x0000_0004, "mtef_scene_source"),
        (0x0000_0008, "mtef_conversation_source"),
        (0x0000_0010, "mtef_visitor_source"),
        (0x0000_0040, "mtef_defenders"),
        (0x0000_0080, "mtef_attackers"),
        (0x0000_0100, "mtef_no_leader"),
        (0x0000_0200, "mtef_no_companions"),
        (0x0000_0400, "mtef_no_regulars"),
        (0x0001_0000, "mtef_infantry_first"),
        (0x0002_0000, "mtef_archers_first"),
        (0x0004_0000, "mtef_cavalry_first"),
        (0x0008_0000, "mtef_no_auto_reset"),
        (0x0100_0000, "mtef_reverse_order"),
        (0x0200_0000, "mtef_use_exact_number"),
    ],
};

/// Equipment override word. Override groups are tried widest first.
pub(crate) const ALTER_FLAGS: FlagSpec = FlagSpec {
    fields: &[],
    overrides: &[
        (0x1FF, "af_override_everything"),
        (0x1BF, "af_override_all"),
        (0x0BF, "af_override_all_but_horse"),
        (0x00F, "af_override_weapons"),
    ],
    flags: &[
        (0x1000_0000, "af_require_civilian"),
        (0x0000_0200, "af_override_fullhelm"),
        (0x0000_0100, "af_override_horse"),
        (0x0000_0080, "af_override_gloves"),
        (0x0000_0040, "af_override_foot"),
        (0x0000_0020, "af_override_body"),
        (0x0000_0010, "af_override_head"),
        (0x0000_0008, "af_override_weapon_3"),
        (0x0000_0004, "af_override_weapon_2"),
        (0x0000_0002, "af_override_weapon_1"),
        (0x0000_0001, "af_override_weapon_0"),
    ],
};

fn mission_type(value: i64) -> String {
    match value {
        8 => "charge".to_string(),
        10 => "charge_with_ally".to_string(),
        other => other.to_string(),
    }
}

pub(crate) fn decompile<R: BufRead>(
    reader: &mut TokenReader<R>,
    ctx: &DecompileContext,
) -> Result<String, DecodeError> {
    let symbols = ctx.symbols();
    let mut out = begin_module(&["header_mission_templates"], "mission_templates");
    let records = count(reader.next_i64()?);
    for _ in 0..records {
        check_cancelled(ctx)?;
        reader.next_word()?;
        let name = reader.next_word()?;
        let mission_flags = flags::decode(u64::from(reader.next_u32()?), &MISSION_FLAGS, symbols);
        let kind = mission_type(reader.next_i64()?);
        let description = display_text(&reader.next_word()?);
        out.push_str(&format!(
            "  (\"{name}\", {mission_flags}, {kind},\n  \"{description}\",\n  [\n"
        ));

        for _ in 0..count(reader.next_i64()?) {
            let number = reader.next_i64()?;
            let spawn = flags::decode(u64::from(reader.next_u32()?), &SPAWN_FLAGS, symbols);
            let alter = flags::decode(u64::from(reader.next_u32()?), &ALTER_FLAGS, symbols);
            let ai = match reader.next_u32()? {
                START_ALARMED => "aif_start_alarmed".to_string(),
                other => other.to_string(),
            };
            let troops = reader.next_i64()?;
            let item_count = count(reader.next_i64()?);
            let mut items = Vec::with_capacity(item_count.min(64));
            for _ in 0..item_count {
                items.push(symbols.resolve(SymbolKind::Item, reader.next_i64()?));
            }
            out.push_str(&format!(
                "    ({number}, {spawn}, {alter}, {ai}, {troops}, [{}]),\n",
                items.join(", ")
            ));
        }
        out.push_str("  ],\n  [\n");

        for _ in 0..count(reader.next_i64()?) {
            let params = [reader.next_f64()?, reader.next_f64()?, reader.next_f64()?];
            out.push_str(&format!(
                "    ({}, {}, {},\n    ",
                trigger_param(params[0]),
                trigger_param(params[1]),
                trigger_param(params[2])
            ));
            push_block(&mut out, &decompile_block(reader, ctx)?, "    ");
            out.push_str(",\n    ");
            push_block(&mut out, &decompile_block(reader, ctx)?, "    ");
            out.push_str("),\n\n");
        }
        out.push_str("  ]),\n\n");
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

    #[test]
    fn test_alter_override_exact_mask() {
        let symbols = SymbolTables::new();
        assert_eq!(flags::decode(0x1FF, &ALTER_FLAGS, &symbols), "af_override_everything");
        assert_eq!(flags::decode(0x1BF, &ALTER_FLAGS, &symbols), "af_override_all");
        assert_eq!(
            flags::decode(0x1000_020F, &ALTER_FLAGS, &symbols),
            "af_override_weapons|af_require_civilian|af_override_fullhelm"
        );
        assert_eq!(flags::decode(0x4000_0000, &ALTER_FLAGS, &symbols), "0");
    }

    #[test]
    fn test_spawn_team_field() {
        let symbols = SymbolTables::new();
        assert_eq!(flags::decode(0x1001, &SPAWN_FLAGS, &symbols), "mtef_team_0|mtef_enemy_party");
        assert_eq!(flags::decode(0x8000, &SPAWN_FLAGS, &symbols), "mtef_team_member_2");
        assert_eq!(flags::decode(0x3000, &SPAWN_FLAGS, &symbols), "mtef_team_2");
    }

    #[test]
    fn test_mission_record() {
        let mut symbols = SymbolTables::new();
        symbols.insert(SymbolKind::Item, SymbolTable::new(["no_item", "practice_sword"]));
        let ctx = DecompileContext::new(
            OperatorTable::load(Mode::Warband),
            symbols,
            CancelToken::new(),
        );
        let text = "1\n\
            mst_arena arena 1 8 Arena_fight\n\
            1\n\
            0 4097 15 16 1 2 1 7\n\
            1\n\
            0.0 0.0 100000000.0 0 1 37 0\n";
        let mut reader = TokenReader::new(Cursor::new(text.as_bytes()));
        let out = decompile(&mut reader, &ctx).unwrap();
        assert!(out.contains(
            "  (\"arena\", mtf_arena_fight, charge,\n  \"Arena fight\",\n  [\n    (0, mtef_team_0|mtef_enemy_party, af_override_weapons, aif_start_alarmed, 1, [itm_practice_sword, 7]),\n  ],\n  [\n"
        ));
        assert!(out.contains(
            "    (0, 0, ti_once,\n    [],\n    [\n      map_free(),\n    ]),\n\n  ]),\n"
        ));
    }
}
