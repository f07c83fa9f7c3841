//! Per-format drivers.
//!
//! Each driver walks the fixed field layout of one data file, starting right
//! after the signature line, and hands statement blocks and flag words to the
//! core decoders. The result is the complete text of the generated module.

pub(crate) mod dialogs;
pub(crate) mod mission_templates;
pub(crate) mod party_templates;
pub(crate) mod scripts;
pub(crate) mod skins;
pub(crate) mod triggers;

use crate::context::DecompileContext;
use crate::error::DecodeError;
use crate::statement::{RecordBlock, render_float};

const STANDARD_HEADER: &str = "# -*- coding: utf-8 -*-\n\
from header_common import *\n\
from header_operations import *\n\
from module_constants import *\n";

/// Special trigger intervals and their constant names.
const TRIGGER_CONSTANTS: &[(f64, &str)] = &[
    (100_000_000.0, "ti_once"),
    (-5.0, "ti_simulate_battle"),
    (-6.0, "ti_on_party_encounter"),
    (-8.0, "ti_question_answered"),
    (-15.0, "ti_server_player_joined"),
    (-16.0, "ti_on_multiplayer_mission_end"),
    (-19.0, "ti_before_mission_start"),
    (-20.0, "ti_after_mission_start"),
    (-21.0, "ti_tab_pressed"),
    (-22.0, "ti_inventory_key_pressed"),
    (-23.0, "ti_escape_pressed"),
    (-24.0, "ti_battle_window_opened"),
    (-25.0, "ti_on_agent_spawn"),
    (-26.0, "ti_on_agent_killed_or_wounded"),
    (-27.0, "ti_on_agent_knocked_down"),
    (-28.0, "ti_on_agent_hit"),
    (-29.0, "ti_on_player_exit"),
    (-30.0, "ti_on_leave_area"),
];

/// Start a module: shared imports, format imports, then `<list> = [`.
pub(crate) fn begin_module(imports: &[&str], list: &str) -> String {
    let mut out = String::from(STANDARD_HEADER);
    for import in imports {
        out.push_str("from ");
        out.push_str(import);
        out.push_str(" import *\n");
    }
    out.push('\n');
    out.push_str(list);
    out.push_str(" = [\n");
    out
}

/// Close the list opened by [`begin_module`].
pub(crate) fn end_module(out: &mut String) {
    out.push_str("]\n");
}

/// Append `block` as a bracketed list.
///
/// An empty block stays on one line as `[]`; otherwise statements go one per
/// line, indented two spaces deeper than `indent`, and the closing bracket is
/// aligned with `indent`.
pub(crate) fn push_block(out: &mut String, block: &RecordBlock, indent: &str) {
    out.push('[');
    if !block.is_empty() {
        out.push('\n');
        out.push_str(&block.render(&format!("{indent}  ")));
        out.push_str(indent);
    }
    out.push(']');
}

/// Render a trigger interval, naming the engine's special values.
#[allow(clippy::float_cmp)]
pub(crate) fn trigger_param(value: f64) -> String {
    if let Some((_, name)) = TRIGGER_CONSTANTS.iter().find(|(v, _)| *v == value) {
        return (*name).to_string();
    }
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        render_float(value)
    }
}

/// Display text is stored with underscores for spaces.
pub(crate) fn display_text(word: &str) -> String {
    word.replace('_', " ")
}

pub(crate) fn check_cancelled(ctx: &DecompileContext) -> Result<(), DecodeError> {
    if ctx.is_cancelled() {
        Err(DecodeError::Cancelled)
    } else {
        Ok(())
    }
}

/// Record count that precedes every list; negative counts are empty.
pub(crate) fn count(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}
