//! Operators shared by every supported engine build.

use super::operator::Arity::{AtLeast, Exact};
use super::operator::{
    FAC, I, ITM, MESH, Operator, PSYS, PT, PTY, QST, SCN, SCRIPT, SKL, SND, SPR, STR, TRP, op,
};

pub(super) const OPERATORS: &[Operator] = &[
    // Control flow
    op(1, "call_script", AtLeast(1), &[SCRIPT]),
    op(3, "try_end", Exact(0), &[]),
    op(4, "try_begin", Exact(0), &[]),
    op(5, "else_try", Exact(0), &[]),
    op(6, "try_for_range", Exact(3), &[I, I, I]),
    op(7, "try_for_range_backwards", Exact(3), &[I, I, I]),
    op(11, "try_for_parties", Exact(1), &[I]),
    op(21, "store_script_param_1", Exact(1), &[I]),
    op(22, "store_script_param_2", Exact(1), &[I]),
    op(23, "store_script_param", Exact(2), &[I, I]),
    // Conditions
    op(30, "ge", Exact(2), &[I, I]),
    op(31, "eq", Exact(2), &[I, I]),
    op(32, "gt", Exact(2), &[I, I]),
    op(33, "is_between", Exact(3), &[I, I, I]),
    op(36, "entering_town", Exact(1), &[PTY]),
    op(37, "map_free", Exact(0), &[]),
    op(39, "encountered_party_is_attacker", Exact(0), &[]),
    op(42, "conversation_screen_is_active", Exact(0), &[]),
    op(47, "set_player_troop", Exact(1), &[TRP]),
    op(50, "store_repeat_object", Exact(1), &[I]),
    op(60, "set_result_string", Exact(1), &[STR]),
    op(70, "key_is_down", Exact(1), &[I]),
    op(71, "key_clicked", Exact(1), &[I]),
    op(110, "main_party_has_troop", Exact(1), &[TRP]),
    op(130, "party_is_in_town", Exact(2), &[PTY, PTY]),
    op(131, "party_is_in_any_town", Exact(1), &[PTY]),
    op(132, "party_is_active", Exact(1), &[PTY]),
    op(150, "player_has_item", Exact(1), &[ITM]),
    op(151, "troop_has_item_equipped", Exact(2), &[TRP, ITM]),
    op(152, "troop_is_mounted", Exact(1), &[TRP]),
    op(200, "check_quest_active", Exact(1), &[QST]),
    op(201, "check_quest_finished", Exact(1), &[QST]),
    op(202, "check_quest_succeeded", Exact(1), &[QST]),
    op(203, "check_quest_failed", Exact(1), &[QST]),
    op(204, "check_quest_concluded", Exact(1), &[QST]),
    // Slots
    op(500, "troop_set_slot", Exact(3), &[TRP, I, I]),
    op(501, "party_set_slot", Exact(3), &[PTY, I, I]),
    op(502, "faction_set_slot", Exact(3), &[FAC, I, I]),
    op(503, "scene_set_slot", Exact(3), &[SCN, I, I]),
    op(504, "party_template_set_slot", Exact(3), &[PT, I, I]),
    op(505, "agent_set_slot", Exact(3), &[I, I, I]),
    op(506, "quest_set_slot", Exact(3), &[QST, I, I]),
    op(507, "item_set_slot", Exact(3), &[ITM, I, I]),
    op(520, "troop_get_slot", Exact(3), &[I, TRP, I]),
    op(521, "party_get_slot", Exact(3), &[I, PTY, I]),
    op(522, "faction_get_slot", Exact(3), &[I, FAC, I]),
    op(523, "scene_get_slot", Exact(3), &[I, SCN, I]),
    op(524, "party_template_get_slot", Exact(3), &[I, PT, I]),
    op(525, "agent_get_slot", Exact(3), &[I, I, I]),
    op(526, "quest_get_slot", Exact(3), &[I, QST, I]),
    op(527, "item_get_slot", Exact(3), &[I, ITM, I]),
    op(540, "troop_slot_eq", Exact(3), &[TRP, I, I]),
    op(541, "party_slot_eq", Exact(3), &[PTY, I, I]),
    op(542, "faction_slot_eq", Exact(3), &[FAC, I, I]),
    op(543, "scene_slot_eq", Exact(3), &[SCN, I, I]),
    op(544, "party_template_slot_eq", Exact(3), &[PT, I, I]),
    op(545, "agent_slot_eq", Exact(3), &[I, I, I]),
    op(546, "quest_slot_eq", Exact(3), &[QST, I, I]),
    op(547, "item_slot_eq", Exact(3), &[ITM, I, I]),
    op(560, "troop_slot_ge", Exact(3), &[TRP, I, I]),
    op(561, "party_slot_ge", Exact(3), &[PTY, I, I]),
    op(562, "faction_slot_ge", Exact(3), &[FAC, I, I]),
    op(563, "scene_slot_ge", Exact(3), &[SCN, I, I]),
    op(564, "party_template_slot_ge", Exact(3), &[PT, I, I]),
    op(565, "agent_slot_ge", Exact(3), &[I, I, I]),
    op(566, "quest_slot_ge", Exact(3), &[QST, I, I]),
    op(567, "item_slot_ge", Exact(3), &[ITM, I, I]),
    // Sound
    op(600, "play_sound", AtLeast(1), &[SND, I]),
    op(601, "play_track", AtLeast(1), &[I, I]),
    op(609, "stop_all_sounds", AtLeast(0), &[I]),
    // Positions
    op(700, "copy_position", Exact(2), &[I, I]),
    op(701, "init_position", Exact(1), &[I]),
    op(710, "get_distance_between_positions", Exact(3), &[I, I, I]),
    op(720, "position_move_x", AtLeast(2), &[I, I, I]),
    op(721, "position_move_y", AtLeast(2), &[I, I, I]),
    op(722, "position_move_z", AtLeast(2), &[I, I, I]),
    op(723, "position_rotate_x", Exact(2), &[I, I]),
    op(724, "position_rotate_y", Exact(2), &[I, I]),
    op(725, "position_rotate_z", AtLeast(2), &[I, I, I]),
    op(726, "position_get_x", Exact(2), &[I, I]),
    op(727, "position_get_y", Exact(2), &[I, I]),
    op(728, "position_get_z", Exact(2), &[I, I]),
    op(729, "position_set_x", Exact(2), &[I, I]),
    op(730, "position_set_y", Exact(2), &[I, I]),
    op(731, "position_set_z", Exact(2), &[I, I]),
    // World map and messages
    op(1100, "spawn_around_party", Exact(2), &[PTY, PT]),
    op(1103, "set_spawn_radius", Exact(1), &[I]),
    op(1104, "display_debug_message", AtLeast(1), &[STR, I]),
    op(1105, "display_log_message", AtLeast(1), &[STR, I]),
    op(1270, "set_relation", Exact(3), &[FAC, FAC, I]),
    // Quests
    op(1280, "start_quest", AtLeast(1), &[QST, TRP]),
    op(1281, "complete_quest", Exact(1), &[QST]),
    op(1282, "succeed_quest", Exact(1), &[QST]),
    op(1283, "fail_quest", Exact(1), &[QST]),
    op(1284, "cancel_quest", Exact(1), &[QST]),
    op(1285, "set_quest_progression", Exact(2), &[QST, I]),
    op(1286, "conclude_quest", Exact(1), &[QST]),
    op(1290, "setup_quest_text", Exact(1), &[QST]),
    op(1291, "setup_quest_giver", Exact(2), &[QST, STR]),
    // Scenes
    op(1500, "jump_to_scene", AtLeast(1), &[SCN, I]),
    // Troops
    op(1507, "troop_is_hero", Exact(1), &[TRP]),
    op(1508, "troop_is_wounded", Exact(1), &[TRP]),
    op(1520, "troop_raise_attribute", Exact(3), &[TRP, I, I]),
    op(1521, "troop_raise_skill", Exact(3), &[TRP, SKL, I]),
    op(1522, "troop_raise_proficiency", Exact(3), &[TRP, I, I]),
    op(1528, "troop_add_gold", Exact(2), &[TRP, I]),
    op(1529, "troop_remove_gold", Exact(2), &[TRP, I]),
    op(1530, "troop_add_item", AtLeast(2), &[TRP, ITM, I]),
    op(1531, "troop_remove_item", Exact(2), &[TRP, ITM]),
    op(1532, "troop_clear_inventory", Exact(1), &[TRP]),
    op(1533, "troop_equip_items", Exact(1), &[TRP]),
    op(1550, "troop_set_faction", Exact(2), &[TRP, FAC]),
    // Parties
    op(1601, "party_get_num_companions", Exact(2), &[I, PTY]),
    op(1602, "party_get_num_prisoners", Exact(2), &[I, PTY]),
    op(1609, "party_get_template_id", Exact(2), &[I, PTY]),
    op(1610, "party_add_members", Exact(3), &[PTY, TRP, I]),
    op(1611, "party_add_prisoners", Exact(3), &[PTY, TRP, I]),
    op(1612, "party_add_leader", AtLeast(2), &[PTY, TRP, I]),
    op(1615, "party_remove_members", Exact(3), &[PTY, TRP, I]),
    op(1616, "party_remove_prisoners", Exact(3), &[PTY, TRP, I]),
    op(1617, "party_clear", Exact(1), &[PTY]),
    // Agents
    op(1702, "agent_is_alive", Exact(1), &[I]),
    op(1704, "agent_is_human", Exact(1), &[I]),
    op(1710, "agent_get_position", Exact(2), &[I, I]),
    op(1711, "agent_set_position", Exact(2), &[I, I]),
    op(1718, "agent_get_troop_id", Exact(2), &[I, I]),
    // Scene props and particles
    op(1810, "scene_prop_get_num_instances", Exact(2), &[I, SPR]),
    op(1830, "scene_prop_get_instance", Exact(3), &[I, SPR, I]),
    op(1907, "finish_mission", AtLeast(0), &[I]),
    op(1965, "particle_system_add_new", AtLeast(1), &[PSYS, I]),
    op(1968, "particle_system_emit", Exact(3), &[PSYS, I, I]),
    op(1969, "particle_system_burst", AtLeast(2), &[PSYS, I, I]),
    op(1974, "spawn_scene_prop", AtLeast(1), &[SPR, I]),
    // Menus and screens
    op(2031, "set_background_mesh", Exact(1), &[MESH]),
    op(2040, "change_screen_return", AtLeast(0), &[I]),
    op(2060, "jump_to_menu", Exact(1), &[I]),
    op(2075, "set_trigger_result", Exact(1), &[I]),
    // Arithmetic
    op(2105, "val_add", Exact(2), &[I, I]),
    op(2106, "val_sub", Exact(2), &[I, I]),
    op(2107, "val_mul", Exact(2), &[I, I]),
    op(2108, "val_div", Exact(2), &[I, I]),
    op(2109, "val_mod", Exact(2), &[I, I]),
    op(2110, "val_min", Exact(2), &[I, I]),
    op(2111, "val_max", Exact(2), &[I, I]),
    op(2112, "val_clamp", Exact(3), &[I, I, I]),
    op(2113, "val_abs", Exact(1), &[I]),
    op(2114, "val_or", Exact(2), &[I, I]),
    op(2115, "val_and", Exact(2), &[I, I]),
    op(2116, "store_or", Exact(3), &[I, I, I]),
    op(2117, "store_and", Exact(3), &[I, I, I]),
    op(2119, "store_mod", Exact(3), &[I, I, I]),
    op(2120, "store_add", Exact(3), &[I, I, I]),
    op(2121, "store_sub", Exact(3), &[I, I, I]),
    op(2122, "store_mul", Exact(3), &[I, I, I]),
    op(2123, "store_div", Exact(3), &[I, I, I]),
    op(2133, "assign", Exact(2), &[I, I]),
    op(2134, "shuffle_range", Exact(2), &[I, I]),
    op(2135, "store_random", Exact(2), &[I, I]),
    op(2136, "store_random_in_range", Exact(3), &[I, I, I]),
    // Stores
    op(2149, "store_troop_gold", Exact(2), &[I, TRP]),
    op(2165, "store_item_kind_count", AtLeast(2), &[I, ITM, TRP]),
    op(2170, "store_skill_level", AtLeast(2), &[I, SKL, TRP]),
    op(2171, "store_character_level", AtLeast(1), &[I, TRP]),
    op(2172, "store_attribute_level", Exact(3), &[I, TRP, I]),
    op(2173, "store_troop_faction", Exact(2), &[I, TRP]),
    op(2270, "store_current_hours", Exact(1), &[I]),
    op(2271, "store_time_of_day", Exact(1), &[I]),
    op(2272, "store_current_day", Exact(1), &[I]),
    // Strings
    op(2320, "str_store_string", Exact(2), &[I, STR]),
    op(2321, "str_store_string_reg", Exact(2), &[I, I]),
    op(2322, "str_store_troop_name", Exact(2), &[I, TRP]),
    op(2323, "str_store_troop_name_plural", Exact(2), &[I, TRP]),
    op(2324, "str_store_troop_name_by_count", Exact(3), &[I, TRP, I]),
    op(2325, "str_store_item_name", Exact(2), &[I, ITM]),
    op(2326, "str_store_item_name_plural", Exact(2), &[I, ITM]),
    op(2330, "str_store_party_name", Exact(2), &[I, PTY]),
    op(2332, "str_store_agent_name", Exact(2), &[I, I]),
    op(2335, "str_store_faction_name", Exact(2), &[I, FAC]),
    op(2336, "str_store_quest_name", Exact(2), &[I, QST]),
];
