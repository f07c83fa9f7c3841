//! Symbol tables and bounds-checked cross-reference resolution.
//!
//! Module files refer to troops, items, factions and every other entity by
//! index. Each entity category has its own table, loaded once per run and
//! read-only afterwards. Resolution never fails: an index outside the table
//! is emitted as a plain numeral, because the same operand slots also carry
//! non-entity values.

mod loader;

pub use loader::{Loader, load_table};

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Entity category a numeric reference points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// `troops.txt`.
    Troop,
    /// `item_kinds1.txt`.
    Item,
    /// `factions.txt`.
    Faction,
    /// `map_icons.txt`.
    MapIcon,
    /// `particle_systems.txt`.
    ParticleSystem,
    /// `party_templates.txt`.
    PartyTemplate,
    /// `parties.txt`.
    Party,
    /// `scenes.txt`.
    Scene,
    /// `quests.txt`.
    Quest,
    /// `skills.txt`.
    Skill,
    /// `strings.txt`.
    Str,
    /// `sounds.txt`.
    Sound,
    /// `meshes.txt`.
    Mesh,
    /// `scene_props.txt`.
    SceneProp,
    /// `scripts.txt`.
    Script,
    /// `dialog_states.txt`.
    DialogState,
}

impl SymbolKind {
    /// Every category, in load order.
    pub const ALL: [SymbolKind; 16] = [
        SymbolKind::Script,
        SymbolKind::Str,
        SymbolKind::Item,
        SymbolKind::Troop,
        SymbolKind::Faction,
        SymbolKind::Quest,
        SymbolKind::PartyTemplate,
        SymbolKind::Party,
        SymbolKind::Sound,
        SymbolKind::Skill,
        SymbolKind::Mesh,
        SymbolKind::DialogState,
        SymbolKind::Scene,
        SymbolKind::ParticleSystem,
        SymbolKind::SceneProp,
        SymbolKind::MapIcon,
    ];

    /// Prefix prepended to resolved names in generated source.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            SymbolKind::Troop => "trp_",
            SymbolKind::Item => "itm_",
            SymbolKind::Faction => "fac_",
            SymbolKind::MapIcon => "icon_",
            SymbolKind::ParticleSystem => "psys_",
            SymbolKind::PartyTemplate => "pt_",
            SymbolKind::Party => "p_",
            SymbolKind::Scene => "scn_",
            SymbolKind::Quest => "qst_",
            SymbolKind::Skill => "skl_",
            SymbolKind::Str => "str_",
            SymbolKind::Sound => "snd_",
            SymbolKind::Mesh => "mesh_",
            SymbolKind::SceneProp => "spr_",
            SymbolKind::Script => "script_",
            SymbolKind::DialogState => "",
        }
    }

    /// Data file the table is built from.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            SymbolKind::Troop => "troops.txt",
            SymbolKind::Item => "item_kinds1.txt",
            SymbolKind::Faction => "factions.txt",
            SymbolKind::MapIcon => "map_icons.txt",
            SymbolKind::ParticleSystem => "particle_systems.txt",
            SymbolKind::PartyTemplate => "party_templates.txt",
            SymbolKind::Party => "parties.txt",
            SymbolKind::Scene => "scenes.txt",
            SymbolKind::Quest => "quests.txt",
            SymbolKind::Skill => "skills.txt",
            SymbolKind::Str => "strings.txt",
            SymbolKind::Sound => "sounds.txt",
            SymbolKind::Mesh => "meshes.txt",
            SymbolKind::SceneProp => "scene_props.txt",
            SymbolKind::Script => "scripts.txt",
            SymbolKind::DialogState => "dialog_states.txt",
        }
    }

    /// How names are extracted from [`Self::file_name`].
    #[must_use]
    pub const fn loader(self) -> Loader {
        match self {
            SymbolKind::DialogState => Loader::Lines,
            SymbolKind::MapIcon => Loader::Leading,
            SymbolKind::Script => Loader::Scripts,
            // Every other file tags its record ids with the same prefix the
            // generated source uses.
            other => Loader::Tagged(other.prefix()),
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.file_name();
        f.write_str(file.strip_suffix(".txt").unwrap_or(file))
    }
}

/// Immutable index-to-name table for one entity category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    names: Vec<String>,
}

impl SymbolTable {
    /// Build a table from names in index order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: i64) -> Option<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.names.get(i))
            .map(String::as_str)
    }
}

/// Resolve `index` against `table`.
///
/// Returns `prefix` followed by the entry when `0 <= index < table.len()`,
/// and the decimal numeral of `index` otherwise.
#[must_use]
pub fn resolve(table: &SymbolTable, index: i64, prefix: &str) -> String {
    match table.get(index) {
        Some(name) => format!("{prefix}{name}"),
        None => index.to_string(),
    }
}

static EMPTY_TABLE: SymbolTable = SymbolTable { names: Vec::new() };

/// All symbol tables available to a run.
#[derive(Debug, Clone, Default)]
pub struct SymbolTables {
    tables: HashMap<SymbolKind, SymbolTable>,
}

impl SymbolTables {
    /// No tables loaded; every reference renders as a numeral.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every table whose source file exists in `dir`.
    ///
    /// Missing files leave their table empty. A file that exists but cannot
    /// be read is also left empty and logged, since a lost cross-reference only
    /// degrades output to numerals.
    #[must_use]
    pub fn load(dir: &Path) -> Self {
        let mut tables = Self::new();
        for kind in SymbolKind::ALL {
            let path = dir.join(kind.file_name());
            if !path.is_file() {
                tracing::debug!(table = %kind, "no source file, table left empty");
                continue;
            }
            match load_table(&path, kind.loader()) {
                Ok(table) => {
                    tracing::debug!(table = %kind, entries = table.len(), "loaded symbol table");
                    tables.insert(kind, table);
                }
                Err(e) => {
                    tracing::warn!(table = %kind, error = %e, "failed to load symbol table");
                }
            }
        }
        tables
    }

    /// Install or replace the table for `kind`.
    pub fn insert(&mut self, kind: SymbolKind, table: SymbolTable) {
        self.tables.insert(kind, table);
    }

    /// Table for `kind`; empty when none was loaded.
    #[must_use]
    pub fn get(&self, kind: SymbolKind) -> &SymbolTable {
        self.tables.get(&kind).unwrap_or(&EMPTY_TABLE)
    }

    /// Resolve `index` in the `kind` table with the kind's own prefix.
    #[must_use]
    pub fn resolve(&self, kind: SymbolKind, index: i64) -> String {
        resolve(self.get(kind), index, kind.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_in_range() {
        let table = SymbolTable::new(["player", "multiplayer_profile_troop_male"]);
        assert_eq!(resolve(&table, 0, "trp_"), "trp_player");
        assert_eq!(
            resolve(&table, 1, "trp_"),
            "trp_multiplayer_profile_troop_male"
        );
    }

    #[test]
    fn test_resolve_out_of_range_is_numeral() {
        let table = SymbolTable::new(["player"]);
        assert_eq!(resolve(&table, 1, "trp_"), "1");
        assert_eq!(resolve(&table, -1, "trp_"), "-1");
        assert_eq!(resolve(&table, i64::MAX, "trp_"), i64::MAX.to_string());
        assert_eq!(resolve(&SymbolTable::default(), 0, "trp_"), "0");
    }

    #[test]
    fn test_tables_resolve_with_kind_prefix() {
        let mut tables = SymbolTables::new();
        tables.insert(SymbolKind::Faction, SymbolTable::new(["no_faction", "commoners"]));
        assert_eq!(tables.resolve(SymbolKind::Faction, 1), "fac_commoners");
        assert_eq!(tables.resolve(SymbolKind::Faction, 2), "2");
        assert_eq!(tables.resolve(SymbolKind::Troop, 0), "0");
    }

    #[test]
    fn test_dialog_states_have_no_prefix() {
        let mut tables = SymbolTables::new();
        tables.insert(SymbolKind::DialogState, SymbolTable::new(["start", "close_window"]));
        assert_eq!(tables.resolve(SymbolKind::DialogState, 1), "close_window");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(SymbolKind::Item.to_string(), "item_kinds1");
        assert_eq!(SymbolKind::DialogState.to_string(), "dialog_states");
    }

    #[test]
    fn test_load_leaves_corrupt_table_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("scripts.txt"),
            "scriptsfile version 1\n 900000000000000\ngame_start -1\n 0\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("factions.txt"), "fac_no_faction 0\nfac_commoners 0\n")
            .unwrap();
        let tables = SymbolTables::load(dir.path());
        assert!(tables.get(SymbolKind::Script).is_empty());
        assert_eq!(tables.resolve(SymbolKind::Faction, 1), "fac_commoners");
    }
}
