//! `skins.txt` → `module_skins.py`.

use super::{begin_module, check_cancelled, count, display_text, end_module};
use crate::context::DecompileContext;
use crate::error::{DecodeError, ReadError};
use crate::reader::TokenReader;
use crate::symbols::SymbolKind;
use std::io::BufRead;

const VOICES: &[&str] = &[
    "voice_die",
    "voice_hit",
    "voice_grunt",
    "voice_grunt_long",
    "voice_yell",
    "voice_warcry",
    "voice_victory",
    "voice_stun",
];

/// `N` words, rendered as a quoted list.
fn quoted_list<R: BufRead>(reader: &mut TokenReader<R>) -> Result<String, ReadError> {
    let n = count(reader.next_i64()?);
    let mut words = Vec::with_capacity(n.min(64));
    for _ in 0..n {
        words.push(format!("\"{}\"", reader.next_word()?));
    }
    Ok(format!("[{}]", words.join(", ")))
}

fn comparison(value: i64) -> String {
    match value {
        1 => "comp_greater_than".to_string(),
        -1 => "comp_less_than".to_string(),
        other => other.to_string(),
    }
}

fn face_keys<R: BufRead>(reader: &mut TokenReader<R>, out: &mut String) -> Result<(), ReadError> {
    out.push_str("    [\n");
    for _ in 0..count(reader.next_i64()?) {
        reader.next_word()?;
        let mut values = Vec::with_capacity(4);
        for _ in 0..4 {
            values.push(reader.next_f64()?.to_string());
        }
        let text = display_text(&reader.next_word()?);
        out.push_str(&format!("      ({}, \"{text}\"),\n", values.join(", ")));
    }
    out.push_str("    ],\n");
    Ok(())
}

fn face_textures<R: BufRead>(
    reader: &mut TokenReader<R>,
    out: &mut String,
) -> Result<(), ReadError> {
    out.push_str("    [\n");
    for _ in 0..count(reader.next_i64()?) {
        let name = reader.next_word()?;
        let color = reader.next_u32()?;
        let materials = count(reader.next_i64()?);
        let colors = count(reader.next_i64()?);
        out.push_str(&format!("      (\"{name}\", 0x{color:X}, "));
        for _ in 0..materials {
            out.push_str(&format!("[\"{}\"], ", reader.next_word()?));
        }
        let mut hair = Vec::with_capacity(colors.min(64));
        for _ in 0..colors {
            hair.push(format!("0x{:x}", reader.next_u64()?));
        }
        out.push_str(&format!("[{}]),\n", hair.join(", ")));
    }
    out.push_str("    ],\n");
    Ok(())
}

fn voices<R: BufRead>(reader: &mut TokenReader<R>) -> Result<String, ReadError> {
    let n = count(reader.next_i64()?);
    let mut entries = Vec::with_capacity(n.min(16));
    for _ in 0..n {
        let kind = reader.next_u32()?;
        let kind = usize::try_from(kind)
            .ok()
            .and_then(|i| VOICES.get(i))
            .map_or_else(|| kind.to_string(), |name| (*name).to_string());
        entries.push(format!("({kind}, \"{}\")", reader.next_word()?));
    }
    Ok(format!("[{}]", entries.join(", ")))
}

fn constraints<R: BufRead>(reader: &mut TokenReader<R>) -> Result<String, ReadError> {
    let mut out = String::from("    [");
    for _ in 0..count(reader.next_i64()?) {
        let value = reader.next_f64()?;
        let op = comparison(reader.next_i64()?);
        let n = count(reader.next_i64()?);
        let mut pairs = Vec::with_capacity(n.min(16));
        for _ in 0..n {
            let weight = reader.next_f64()?;
            let key = reader.next_i64()?;
            pairs.push(format!("({weight}, {key})"));
        }
        out.push_str(&format!("\n      [{value}, {op}, {}],", pairs.join(", ")));
    }
    out.push_str("\n    ]");
    Ok(out)
}

pub(crate) fn decompile<R: BufRead>(
    reader: &mut TokenReader<R>,
    ctx: &DecompileContext,
) -> Result<String, DecodeError> {
    let symbols = ctx.symbols();
    let mut out = begin_module(&["header_skins"], "skins");
    let records = count(reader.next_i64()?);
    for _ in 0..records {
        check_cancelled(ctx)?;
        let name = reader.next_word()?;
        let flags = reader.next_i64()?;
        let body = reader.next_word()?;
        let calf = reader.next_word()?;
        let hand = reader.next_word()?;
        let head = reader.next_word()?;
        out.push_str(&format!(
            "  (\n    \"{name}\", {flags},\n    \"{body}\", \"{calf}\", \"{hand}\",\n    \"{head}\",\n"
        ));
        face_keys(reader, &mut out)?;

        let hair = quoted_list(reader)?;
        let beard = quoted_list(reader)?;
        let hair_textures = quoted_list(reader)?;
        let beard_textures = quoted_list(reader)?;
        out.push_str(&format!(
            "    {hair},\n    {beard},\n    {hair_textures},\n    {beard_textures},\n"
        ));
        face_textures(reader, &mut out)?;
        out.push_str(&format!("    {},\n", voices(reader)?));

        let skeleton = reader.next_word()?;
        let scale = reader.next_word()?;
        let blood = symbols.resolve(SymbolKind::ParticleSystem, reader.next_i64()?);
        let blood_2 = symbols.resolve(SymbolKind::ParticleSystem, reader.next_i64()?);
        out.push_str(&format!(
            "    \"{skeleton}\", {scale},\n    {blood}, {blood_2},\n"
        ));
        out.push_str(&constraints(reader)?);
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
    use crate::symbols::{SymbolTable, SymbolTables};
    use std::io::Cursor;

    #[test]
    fn test_skin_record() {
        let mut symbols = SymbolTables::new();
        symbols.insert(
            SymbolKind::ParticleSystem,
            SymbolTable::new(["game_rain", "game_blood", "game_blood_2"]),
        );
        let ctx = DecompileContext::new(
            OperatorTable::load(Mode::Warband),
            symbols,
            CancelToken::new(),
        );
        let text = "1\n\
            man 0 man_body man_calf_l m_handL male_head\n\
            1 skinkey_chin_size 1 0.0 1.0 0.5 Chin_Size\n\
            2 man_hair_s man_hair_m 0 1 hair_blonde 0\n\
            1 manface_young 4291603199 1 2 manface_young_hair 4291603199 4294967295\n\
            2 0 snd_man_die 7 snd_man_stun\n\
            skel_human 1.0 1 2\n\
            1 0.8 1 2 1.0 3 0.5 4\n";
        let mut reader = TokenReader::new(Cursor::new(text.as_bytes()));
        let out = decompile(&mut reader, &ctx).unwrap();
        let expected = "  (\n    \"man\", 0,\n    \"man_body\", \"man_calf_l\", \"m_handL\",\n    \"male_head\",\n\
            \x20   [\n      (1, 0, 1, 0.5, \"Chin Size\"),\n    ],\n\
            \x20   [\"man_hair_s\", \"man_hair_m\"],\n    [],\n    [\"hair_blonde\"],\n    [],\n\
            \x20   [\n      (\"manface_young\", 0xFFCCAAFF, [\"manface_young_hair\"], [0xffccaaff, 0xffffffff]),\n    ],\n\
            \x20   [(voice_die, \"snd_man_die\"), (voice_stun, \"snd_man_stun\")],\n\
            \x20   \"skel_human\", 1.0,\n    psys_game_blood, psys_game_blood_2,\n\
            \x20   [\n      [0.8, comp_greater_than, (1, 3), (0.5, 4)],\n    ]),\n\n";
        assert!(out.contains(expected), "{out}");
    }

    #[test]
    fn test_unknown_voice_and_comparison() {
        assert_eq!(comparison(0), "0");
        let mut reader = TokenReader::new(Cursor::new("1 9 snd_x".as_bytes()));
        assert_eq!(voices(&mut reader).unwrap(), "[(9, \"snd_x\")]");
    }
}
