//! Operators added by the script enhancer builds and by Caribbean.

use super::operator::Arity::{AtLeast, Exact};
use super::operator::{F, I, Operator, PTY, SCRIPT, op};

/// Script enhancer 3.x additions.
pub(super) const WSE: &[Operator] = &[
    op(2800, "val_shr", Exact(2), &[I, I]),
    op(2801, "store_shr", Exact(3), &[I, I, I]),
    op(2802, "val_shl", Exact(2), &[I, I]),
    op(2803, "store_shl", Exact(3), &[I, I, I]),
    op(2804, "val_xor", Exact(2), &[I, I]),
    op(2805, "store_xor", Exact(3), &[I, I, I]),
    op(2806, "val_not", Exact(1), &[I]),
    op(2807, "store_not", Exact(2), &[I, I]),
    op(3000, "is_vanilla_warband", Exact(0), &[]),
    op(3001, "store_trigger_param", Exact(2), &[I, I]),
    op(3002, "register_get", Exact(2), &[I, I]),
    op(3003, "register_set", Exact(2), &[I, I]),
    op(3010, "call_script_with_result", AtLeast(2), &[I, SCRIPT]),
];

/// Script enhancer 4.5 additions on top of [`WSE`].
pub(super) const WSE_450: &[Operator] = &[
    op(2700, "fld", Exact(2), &[I, F]),
    op(2701, "fst", Exact(2), &[I, I]),
    op(2702, "fcpy", Exact(2), &[I, I]),
    op(2703, "feq", AtLeast(2), &[I, I, F]),
    op(2704, "fgt", Exact(2), &[I, I]),
    op(2705, "fadd", Exact(3), &[I, I, I]),
    op(2706, "fsub", Exact(3), &[I, I, I]),
    op(2707, "fmul", Exact(3), &[I, I, I]),
    op(2708, "fdiv", Exact(3), &[I, I, I]),
    op(3020, "dict_create", Exact(1), &[I]),
    op(3021, "dict_free", Exact(1), &[I]),
    op(3022, "dict_load_file", AtLeast(2), &[I, I, I]),
    op(3023, "dict_get_int", AtLeast(3), &[I, I, I, I]),
    op(3024, "dict_set_int", Exact(3), &[I, I, I]),
    // 4.5 turned the register accessors variadic.
    op(3002, "register_get", AtLeast(2), &[I, I]),
    op(3003, "register_set", AtLeast(2), &[I, I]),
];

/// Caribbean additions; several codes collide with the script enhancer.
pub(super) const CARIBBEAN: &[Operator] = &[
    op(2800, "scene_prop_set_sail_state", Exact(2), &[I, I]),
    op(2801, "scene_prop_get_sail_state", Exact(2), &[I, I]),
    op(3500, "party_get_ship_type", Exact(2), &[I, PTY]),
    op(3501, "party_set_ship_type", Exact(2), &[PTY, I]),
    op(3502, "ship_add_cannons", Exact(2), &[I, I]),
    op(3503, "ship_fire_cannons", AtLeast(1), &[I, I]),
];
