//! Game content: hero and enemy templates, equipment pools and room flavor.

pub mod loader;
pub mod types;

pub use loader::JsonCatalog;
pub use types::{ArmorTemplate, CharacterTemplate, GameData, WeaponTemplate};

use crate::combat::types::{Enemy, Hero};
use crate::core::dice::Dice;
use crate::core::error::CatalogError;

/// Where heroes, enemies and room descriptions come from.
pub trait ContentCatalog {
    /// Selectable hero keys, in a stable order.
    fn hero_keys(&self) -> &[String];

    fn enemy_keys(&self) -> &[String];

    /// Builds a hero at full health with a random weapon and armor.
    fn instantiate_hero(&self, key: &str, dice: &mut dyn Dice) -> Result<Hero, CatalogError>;

    /// Builds an enemy at full health with a random weapon and armor.
    fn instantiate_enemy(&self, key: &str, dice: &mut dyn Dice) -> Result<Enemy, CatalogError>;

    fn room_descriptions(&self) -> &[String];
}
