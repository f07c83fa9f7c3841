//! Engine build modes and their opcode tables.
//!
//! Every mode layers a few definition lists on top of each other. A later
//! list replaces earlier entries with the same code, which is how builds
//! that reuse a code for a different operator are expressed. Within one list
//! codes are unique.

mod common;
mod extensions;
mod operator;
mod warband;

pub use operator::{Arity, OperandRole, Operator};

use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Engine build variant whose opcode table and format quirks apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Mount&Blade 1.010/1.011.
    Vanilla,
    /// Mount&Blade: Warband.
    Warband,
    /// Warband with script enhancer 3.x.
    WarbandScriptEnhancer320,
    /// Warband with script enhancer 4.5.
    #[default]
    WarbandScriptEnhancer450,
    /// Caribbean!
    Caribbean,
}

impl Mode {
    /// All modes, in selection order.
    pub const ALL: [Mode; 5] = [
        Mode::Vanilla,
        Mode::Warband,
        Mode::WarbandScriptEnhancer320,
        Mode::WarbandScriptEnhancer450,
        Mode::Caribbean,
    ];

    /// Short name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Vanilla => "vanilla",
            Mode::Warband => "warband",
            Mode::WarbandScriptEnhancer320 => "wse-320",
            Mode::WarbandScriptEnhancer450 => "wse-450",
            Mode::Caribbean => "caribbean",
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Mode::Vanilla => "Mount&Blade 1.010/1.011",
            Mode::Warband => "Mount&Blade: Warband",
            Mode::WarbandScriptEnhancer320 => "Warband + script enhancer 3.2",
            Mode::WarbandScriptEnhancer450 => "Warband + script enhancer 4.5",
            Mode::Caribbean => "Caribbean!",
        }
    }

    /// Whether this is the pre-Warband engine.
    #[must_use]
    pub const fn is_vanilla(self) -> bool {
        matches!(self, Mode::Vanilla)
    }

    fn layers(self) -> &'static [&'static [Operator]] {
        match self {
            Mode::Vanilla => VANILLA_LAYERS,
            Mode::Warband => WARBAND_LAYERS,
            Mode::WarbandScriptEnhancer320 => WSE_320_LAYERS,
            Mode::WarbandScriptEnhancer450 => WSE_450_LAYERS,
            Mode::Caribbean => CARIBBEAN_LAYERS,
        }
    }
}

const VANILLA_LAYERS: &[&[Operator]] = &[common::OPERATORS, warband::VANILLA];
const WARBAND_LAYERS: &[&[Operator]] = &[common::OPERATORS, warband::WARBAND];
const WSE_320_LAYERS: &[&[Operator]] = &[common::OPERATORS, warband::WARBAND, extensions::WSE];
const WSE_450_LAYERS: &[&[Operator]] = &[
    common::OPERATORS,
    warband::WARBAND,
    extensions::WSE,
    extensions::WSE_450,
];
const CARIBBEAN_LAYERS: &[&[Operator]] =
    &[common::OPERATORS, warband::WARBAND, extensions::CARIBBEAN];

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown module type `{}`", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

/// Immutable opcode table for one mode.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    mode: Mode,
    operators: HashMap<u32, Operator>,
}

impl OperatorTable {
    /// Build the table for `mode`.
    #[must_use]
    pub fn load(mode: Mode) -> Self {
        let mut operators = HashMap::new();
        for layer in mode.layers() {
            for operator in *layer {
                operators.insert(operator.code, *operator);
            }
        }
        tracing::debug!(%mode, operators = operators.len(), "loaded operator table");
        Self { mode, operators }
    }

    /// Build a table from an explicit operator list (later entries win).
    #[must_use]
    pub fn from_operators(mode: Mode, list: &[Operator]) -> Self {
        Self {
            mode,
            operators: list.iter().map(|op| (op.code, *op)).collect(),
        }
    }

    /// Mode the table was built for.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Look up an opcode (negation already stripped).
    #[must_use]
    pub fn lookup(&self, code: u32) -> Option<&Operator> {
        self.operators.get(&code)
    }

    /// Number of operators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}
