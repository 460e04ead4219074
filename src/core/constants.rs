// Dungeon layout
pub const LAYOUT_MIN_ROOMS: usize = 7;
pub const LAYOUT_MAX_ROOMS: usize = 10;
pub const LAYOUT_MIN_ENEMIES: usize = 2;
pub const LAYOUT_MAX_ENEMIES: usize = 4;

// Presentation
pub const HEALTH_BAR_LENGTH: usize = 20;
pub const MENU_PROMPT: &str = ">> ";
pub const SEPARATOR: &str =
    "--------------------------------------------------------------------";

// Configuration defaults
pub const DEFAULT_DATA_PATH: &str = "data/game_data.json";
pub const DATA_PATH_ENV: &str = "DELVE_DATA";
