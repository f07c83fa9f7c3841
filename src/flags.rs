//! Decoding of packed flag words into pipe-joined flag expressions.
//!
//! A [`FlagSpec`] lists three kinds of rules, always applied in this order:
//!
//! 1. scalar sub-fields extracted with a mask and shift,
//! 2. override groups, where the first fully-set combined mask wins and its
//!    bits are cleared before the next stage,
//! 3. independent boolean bits, in table order.
//!
//! Bits no rule covers are dropped. An empty result renders as `0`.

use crate::symbols::{SymbolKind, SymbolTables};

/// How a non-zero scalar sub-field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarRender {
    /// `name(N)`.
    Call(&'static str),
    /// Resolved through a symbol table with the table's prefix.
    Symbol(SymbolKind),
    /// `wrapper(<resolved symbol>)`.
    Wrapped(&'static str, SymbolKind),
    /// `names[N - 1]`; the numeral when out of range.
    Indexed(&'static [&'static str]),
}

/// A masked sub-field of a flag word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarField {
    /// Bits of the field.
    pub mask: u64,
    /// Right shift applied after masking.
    pub shift: u32,
    /// Rendering of non-zero values.
    pub render: ScalarRender,
    /// Value rendered as a fixed name instead of through `render`.
    pub sentinel: Option<(u64, &'static str)>,
}

impl ScalarField {
    /// Field without a sentinel value.
    #[must_use]
    pub const fn new(mask: u64, shift: u32, render: ScalarRender) -> Self {
        Self {
            mask,
            shift,
            render,
            sentinel: None,
        }
    }

    /// Render `value` as a fixed name.
    #[must_use]
    pub const fn with_sentinel(mut self, value: u64, name: &'static str) -> Self {
        self.sentinel = Some((value, name));
        self
    }

    fn render(&self, word: u64, symbols: &SymbolTables) -> Option<String> {
        let value = (word & self.mask) >> self.shift;
        if value == 0 {
            return None;
        }
        if let Some((_, name)) = self.sentinel.filter(|(sentinel, _)| *sentinel == value) {
            return Some(name.to_string());
        }
        // Fields are at most 32 bits wide in every engine layout, so the
        // value always fits.
        let index = i64::try_from(value).unwrap_or(i64::MAX);
        Some(match self.render {
            ScalarRender::Call(name) => format!("{name}({value})"),
            ScalarRender::Symbol(kind) => symbols.resolve(kind, index),
            ScalarRender::Wrapped(wrapper, kind) => {
                format!("{wrapper}({})", symbols.resolve(kind, index))
            }
            ScalarRender::Indexed(names) => usize::try_from(value - 1)
                .ok()
                .and_then(|i| names.get(i))
                .map_or_else(|| value.to_string(), |name| (*name).to_string()),
        })
    }
}

/// Ordered decode rules for one kind of flag word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    /// Scalar sub-fields, rendered first.
    pub fields: &'static [ScalarField],
    /// Override groups `(combined mask, name)`; first full match wins.
    pub overrides: &'static [(u64, &'static str)],
    /// Independent bits `(mask, name)`.
    pub flags: &'static [(u64, &'static str)],
}

impl FlagSpec {
    /// Spec with only independent bits.
    #[must_use]
    pub const fn bits(flags: &'static [(u64, &'static str)]) -> Self {
        Self {
            fields: &[],
            overrides: &[],
            flags,
        }
    }
}

/// Decode `word` according to `spec`.
#[must_use]
pub fn decode(word: u64, spec: &FlagSpec, symbols: &SymbolTables) -> String {
    let mut tokens: Vec<String> = spec
        .fields
        .iter()
        .filter_map(|field| field.render(word, symbols))
        .collect();

    let mut word = word;
    if let Some(&(mask, name)) = spec.overrides.iter().find(|(mask, _)| word & mask == *mask) {
        tokens.push(name.to_string());
        word &= !mask;
    }

    tokens.extend(
        spec.flags
            .iter()
            .filter(|(mask, _)| word & mask != 0)
            .map(|(_, name)| (*name).to_string()),
    );

    if tokens.is_empty() {
        "0".to_string()
    } else {
        tokens.join("|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::SymbolTable;

    const ALTER: FlagSpec = FlagSpec {
        fields: &[],
        overrides: &[(0x1FF, "af_override_everything"), (0x0F, "af_override_weapons")],
        flags: &[(0x100, "af_override_horse"), (0x01, "af_override_weapon_0")],
    };

    #[test]
    fn test_empty_word_is_zero() {
        assert_eq!(decode(0, &ALTER, &SymbolTables::new()), "0");
    }

    #[test]
    fn test_override_subsumes_bits() {
        let symbols = SymbolTables::new();
        assert_eq!(decode(0x1FF, &ALTER, &symbols), "af_override_everything");
        assert_eq!(decode(0x10F, &ALTER, &symbols), "af_override_weapons|af_override_horse");
    }

    #[test]
    fn test_unknown_bits_dropped() {
        let symbols = SymbolTables::new();
        assert_eq!(decode(0x8000_0001, &ALTER, &symbols), "af_override_weapon_0");
        assert_eq!(decode(0x8000_0000, &ALTER, &symbols), "0");
    }

    #[test]
    fn test_scalar_renderings() {
        const SPEC: FlagSpec = FlagSpec {
            fields: &[
                ScalarField::new(0xFF, 0, ScalarRender::Symbol(SymbolKind::MapIcon)),
                ScalarField::new(0xFF00, 8, ScalarRender::Call("carries_gold")),
                ScalarField::new(0x7_0000, 16, ScalarRender::Indexed(&["first", "second"])),
                ScalarField::new(0xFF0_0000, 20, ScalarRender::Wrapped("other", SymbolKind::Troop))
                    .with_sentinel(0xFF, "anyone_else"),
            ],
            overrides: &[],
            flags: &[],
        };
        let mut symbols = SymbolTables::new();
        symbols.insert(SymbolKind::MapIcon, SymbolTable::new(["player", "town"]));
        symbols.insert(SymbolKind::Troop, SymbolTable::new(["player", "knight"]));

        assert_eq!(
            decode(0x0012_0501, &SPEC, &symbols),
            "icon_town|carries_gold(5)|second|other(trp_knight)"
        );
        assert_eq!(decode(0x0002_0009, &SPEC, &symbols), "9|second");
        assert_eq!(decode(0x0003_0000, &SPEC, &symbols), "3");
        assert_eq!(decode(0x0FF0_0000, &SPEC, &symbols), "anyone_else");
        assert_eq!(decode(0x0050_0000, &SPEC, &symbols), "other(5)");
    }
}
