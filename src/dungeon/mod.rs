//! Dungeon layout generation and room-by-room traversal.

pub mod generation;
pub mod logic;
pub mod types;

pub use generation::generate_layout;
pub use logic::resolve_room;
pub use types::{DungeonRun, Layout, Outcome, RoomCache, RoomKind};
