//! Fighters, their equipment, and the auto-battle resolver.

pub mod logic;
pub mod types;

pub use logic::{auto_battle, fight, strike, BattleEvent, BattleReport, Strike, Vitals};
pub use types::{Armor, CombatStats, Combatant, Enemy, Hero, Side, Weapon};
