//! `party_templates.txt` → `module_party_templates.py`.

use super::{begin_module, check_cancelled, count, end_module};
use crate::context::DecompileContext;
use crate::error::DecodeError;
use crate::flags::{self, FlagSpec, ScalarField, ScalarRender};
use crate::reader::TokenReader;
use crate::symbols::SymbolKind;
use std::io::BufRead;

/// Troop stacks per template; unused stacks hold troop `-1`.
const STACKS: usize = 6;

const PRISONER: u32 = 1;

/// Party flag word: map icon, carried goods and gold, `pf_*` bits.
pub(crate) const PARTY_FLAGS: FlagSpec = FlagSpec {
    fields: &[
        ScalarField::new(0xFF, 0, ScalarRender::Symbol(SymbolKind::MapIcon)),
        ScalarField::new(0x00FF_0000_0000_0000, 48, ScalarRender::Call("carries_goods")),
        ScalarField::new(0xFF00_0000_0000_0000, 56, ScalarRender::Call("carries_gold")),
    ],
    overrides: &[],
    flags: &[
        (0x0000_0100, "pf_disabled"),
        (0x0000_0200, "pf_is_ship"),
        (0x0000_0400, "pf_is_static"),
        (0x0000_1000, "pf_label_medium"),
        (0x0000_2000, "pf_label_large"),
        (0x0000_4000, "pf_always_visible"),
        (0x0001_0000, "pf_default_behavior"),
        (0x0002_0000, "pf_auto_remove_in_town"),
        (0x0004_0000, "pf_quest_party"),
        (0x0008_0000, "pf_no_label"),
        (0x0010_0000, "pf_limit_members"),
        (0x0020_0000, "pf_hide_defenders"),
        (0x0040_0000, "pf_show_faction"),
        (0x0200_0000, "pf_dont_attack_civilians"),
        (0x0400_0000, "pf_civilian"),
    ],
};

const PERSONALITY_PRESETS: &[(u32, &str)] = &[
    (0x89, "soldier_personality"),
    (0x07, "merchant_personality"),
    (0x0B, "escorted_merchant_personality"),
    (0x138, "bandit_personality"),
];

/// Personality word: a named preset, or banditness, courage and
/// aggressiveness components.
pub(crate) fn personality(word: u32) -> String {
    if let Some((_, name)) = PERSONALITY_PRESETS.iter().find(|(w, _)| *w == word) {
        return (*name).to_string();
    }
    let mut tokens = Vec::new();
    if word & 0x100 != 0 {
        tokens.push("banditness".to_string());
    }
    // Courage below 4 has no named constant.
    let courage = word & 0x0F;
    if courage >= 4 {
        tokens.push(format!("courage_{courage}"));
    }
    let aggressiveness = (word & 0xF0) >> 4;
    if aggressiveness > 0 {
        tokens.push(format!("aggressiveness_{aggressiveness}"));
    }
    if tokens.is_empty() {
        "0".to_string()
    } else {
        tokens.join("|")
    }
}

pub(crate) fn decompile<R: BufRead>(
    reader: &mut TokenReader<R>,
    ctx: &DecompileContext,
) -> Result<String, DecodeError> {
    let symbols = ctx.symbols();
    let mut out = begin_module(&["header_parties"], "party_templates");
    let records = count(reader.next_i64()?);
    for _ in 0..records {
        check_cancelled(ctx)?;
        let id = reader.next_word()?;
        let id = id.strip_prefix("pt_").unwrap_or(&id);
        let name = reader.next_word()?;
        let party_flags = flags::decode(reader.next_u64()?, &PARTY_FLAGS, symbols);
        let menu = reader.next_i64()?;
        let faction = symbols.resolve(SymbolKind::Faction, reader.next_i64()?);
        let personality = personality(reader.next_u32()?);

        let mut stacks = Vec::with_capacity(STACKS);
        for _ in 0..STACKS {
            let troop = reader.next_i64()?;
            if troop == -1 {
                continue;
            }
            let min = reader.next_i64()?;
            let max = reader.next_i64()?;
            let member = reader.next_u32()?;
            let troop = symbols.resolve(SymbolKind::Troop, troop);
            if member == PRISONER {
                stacks.push(format!("({troop}, {min}, {max}, pmf_is_prisoner)"));
            } else {
                stacks.push(format!("({troop}, {min}, {max})"));
            }
        }
        out.push_str(&format!(
            "  (\"{id}\", \"{name}\", {party_flags}, {menu}, {faction}, {personality}, [{}]),\n",
            stacks.join(", ")
        ));
    }
    end_module(&mut out);
    Ok(out)
}
