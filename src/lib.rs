//! Delve - a turn-based text dungeon crawler.
//!
//! The library holds the game rules so they can be tested without a
//! terminal; `src/main.rs` wires them to stdin/stdout.

pub mod build_info;
pub mod catalog;
pub mod combat;
pub mod core;
pub mod dungeon;
pub mod ui;
