//! Procedural layout generation.

use super::types::{Layout, RoomKind};
use crate::core::constants::{
    LAYOUT_MAX_ENEMIES, LAYOUT_MAX_ROOMS, LAYOUT_MIN_ENEMIES, LAYOUT_MIN_ROOMS,
};
use crate::core::dice::Dice;
use log::debug;

/// Generates a fresh linear layout.
///
/// Length is uniform in 7..=10. The first room is the start, the last the
/// exit, and 2..=4 distinct interior rooms (never more than the interior
/// holds) get an enemy. Everything else is empty.
pub fn generate_layout(dice: &mut impl Dice) -> Layout {
    let length = dice.roll_range(LAYOUT_MIN_ROOMS, LAYOUT_MAX_ROOMS);
    let interior = length - 2;

    let mut rooms = vec![RoomKind::Empty; length];
    rooms[0] = RoomKind::Start;
    rooms[length - 1] = RoomKind::Exit;

    let enemy_count = dice
        .roll_range(LAYOUT_MIN_ENEMIES, LAYOUT_MAX_ENEMIES)
        .min(interior);
    for offset in dice.sample_indices(interior, enemy_count) {
        rooms[offset + 1] = RoomKind::Enemy;
    }

    let layout = Layout::new(rooms);
    debug!("generated layout {} ({} rooms, {} enemies)", layout, length, enemy_count);
    layout
}
