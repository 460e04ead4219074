//! Text health bars shown during battles.

use crate::combat::types::Side;
use crate::core::constants::HEALTH_BAR_LENGTH;
use crossterm::style::Stylize;

/// Number of filled cells for `current` out of `max`.
pub fn filled_cells(current: i32, max: i32) -> usize {
    if max <= 0 {
        return 0;
    }
    let current = current.clamp(0, max) as i64;
    (HEALTH_BAR_LENGTH as i64 * current / max as i64) as usize
}

/// Coloured bar: green for the hero, red for enemies.
pub fn draw_health_bar(side: Side, name: &str, current: i32, max: i32) -> String {
    render(side, name, current, max, true)
}

/// Same layout as [`draw_health_bar`] without terminal escape codes.
pub fn draw_plain_health_bar(side: Side, name: &str, current: i32, max: i32) -> String {
    render(side, name, current, max, false)
}

fn render(side: Side, name: &str, current: i32, max: i32, color: bool) -> String {
    let filled = filled_cells(current, max);
    let full = "█".repeat(filled);
    let empty = "_".repeat(HEALTH_BAR_LENGTH - filled);

    let heading = match side {
        Side::Hero => "Your health:",
        Side::Enemy => "Enemy health:",
    };
    let bar = match (color, side) {
        (false, _) => format!("{full}{empty}"),
        (true, Side::Hero) => format!("{}{}", full.green(), empty.green()),
        (true, Side::Enemy) => format!("{}{}", full.red(), empty.red()),
    };

    format!("{heading}\n {name}. {current}/{max}\n|{bar}|")
}
