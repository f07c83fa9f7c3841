//! Operators that differ between Mount&Blade 1.011 and Warband.

use super::operator::Arity::{AtLeast, Exact};
use super::operator::{I, ICON, Operator, PTY, SPR, STR, op};

/// Mount&Blade 1.010/1.011 specifics.
pub(super) const VANILLA: &[Operator] = &[
    op(1106, "display_message", Exact(1), &[STR]),
    op(1676, "party_set_icon", Exact(2), &[PTY, ICON]),
];

/// Warband additions and revisions.
pub(super) const WARBAND: &[Operator] = &[
    op(12, "try_for_agents", AtLeast(1), &[I, I]),
    op(16, "try_for_prop_instances", AtLeast(1), &[I, SPR]),
    op(17, "try_for_players", AtLeast(1), &[I, I]),
    op(388, "multiplayer_send_int_to_server", Exact(2), &[I, I]),
    op(389, "multiplayer_send_2_int_to_server", Exact(3), &[I, I, I]),
    op(508, "player_set_slot", Exact(3), &[I, I, I]),
    op(509, "team_set_slot", Exact(3), &[I, I, I]),
    op(510, "scene_prop_set_slot", Exact(3), &[I, I, I]),
    op(528, "player_get_slot", Exact(3), &[I, I, I]),
    op(529, "team_get_slot", Exact(3), &[I, I, I]),
    op(530, "scene_prop_get_slot", Exact(3), &[I, I, I]),
    op(548, "player_slot_eq", Exact(3), &[I, I, I]),
    op(549, "team_slot_eq", Exact(3), &[I, I, I]),
    op(550, "scene_prop_slot_eq", Exact(3), &[I, I, I]),
    op(568, "player_slot_ge", Exact(3), &[I, I, I]),
    op(569, "team_slot_ge", Exact(3), &[I, I, I]),
    op(570, "scene_prop_slot_ge", Exact(3), &[I, I, I]),
    op(1106, "display_message", AtLeast(1), &[STR, I]),
    op(1676, "party_set_icon", Exact(2), &[PTY, ICON]),
    op(2124, "set_fixed_point_multiplier", Exact(1), &[I]),
    op(2125, "store_sqrt", Exact(2), &[I, I]),
    op(2126, "store_pow", Exact(3), &[I, I, I]),
    op(2127, "store_sin", Exact(2), &[I, I]),
    op(2128, "store_cos", Exact(2), &[I, I]),
    op(2129, "store_tan", Exact(2), &[I, I]),
    op(2130, "convert_to_fixed_point", Exact(1), &[I]),
    op(2131, "convert_from_fixed_point", Exact(1), &[I]),
];
