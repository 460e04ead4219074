//! Loads and validates the JSON content catalog.

use super::types::GameData;
use super::ContentCatalog;
use crate::combat::types::{Armor, Enemy, Hero, Weapon};
use crate::core::dice::Dice;
use crate::core::error::CatalogError;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Catalog backed by a `game_data.json` document.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    data: GameData,
    hero_keys: Vec<String>,
    enemy_keys: Vec<String>,
    weapons: Vec<Weapon>,
    armor: Vec<Armor>,
}

impl JsonCatalog {
    /// Reads and validates the catalog at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&contents, path)?;
        info!(
            "loaded catalog {}: {} heroes, {} enemies, {} weapons, {} armor, {} room descriptions",
            path.display(),
            catalog.hero_keys.len(),
            catalog.enemy_keys.len(),
            catalog.weapons.len(),
            catalog.armor.len(),
            catalog.data.room_definitions.len()
        );
        Ok(catalog)
    }

    /// Parses an in-memory JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::parse(json, Path::new("<memory>"))
    }

    /// Validates already-deserialized data.
    pub fn from_data(data: GameData) -> Result<Self, CatalogError> {
        validate(&data)?;

        Ok(Self {
            hero_keys: data.heroes.keys().cloned().collect(),
            enemy_keys: data.enemies.keys().cloned().collect(),
            weapons: data.weapons.values().map(Weapon::from).collect(),
            armor: data.armor.values().map(Armor::from).collect(),
            data,
        })
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }

    fn parse(json: &str, path: &Path) -> Result<Self, CatalogError> {
        let data: GameData = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            path: PathBuf::from(path),
            source,
        })?;
        Self::from_data(data)
    }

    fn random_weapon(&self, dice: &mut dyn Dice) -> Weapon {
        self.weapons[dice.pick_index(self.weapons.len())].clone()
    }

    fn random_armor(&self, dice: &mut dyn Dice) -> Armor {
        self.armor[dice.pick_index(self.armor.len())].clone()
    }
}

impl ContentCatalog for JsonCatalog {
    fn hero_keys(&self) -> &[String] {
        &self.hero_keys
    }

    fn enemy_keys(&self) -> &[String] {
        &self.enemy_keys
    }

    fn instantiate_hero(&self, key: &str, dice: &mut dyn Dice) -> Result<Hero, CatalogError> {
        let template = self
            .data
            .heroes
            .get(key)
            .ok_or_else(|| CatalogError::UnknownHero(key.to_string()))?;
        let weapon = self.random_weapon(dice);
        let armor = self.random_armor(dice);
        debug!("hero {key} equipped with {} and {}", weapon.name, armor.name);
        Ok(template.to_hero().equipped(weapon, armor))
    }

    fn instantiate_enemy(&self, key: &str, dice: &mut dyn Dice) -> Result<Enemy, CatalogError> {
        let template = self
            .data
            .enemies
            .get(key)
            .ok_or_else(|| CatalogError::UnknownEnemy(key.to_string()))?;
        let weapon = self.random_weapon(dice);
        let armor = self.random_armor(dice);
        debug!("enemy {key} equipped with {} and {}", weapon.name, armor.name);
        Ok(template.to_enemy().equipped(weapon, armor))
    }

    fn room_descriptions(&self) -> &[String] {
        &self.data.room_definitions
    }
}

fn validate(data: &GameData) -> Result<(), CatalogError> {
    if data.heroes.is_empty() {
        return Err(CatalogError::EmptyPool("heroes"));
    }
    if data.enemies.is_empty() {
        return Err(CatalogError::EmptyPool("enemies"));
    }
    if data.weapons.is_empty() {
        return Err(CatalogError::EmptyPool("weapons"));
    }
    if data.armor.is_empty() {
        return Err(CatalogError::EmptyPool("armor"));
    }
    if data.room_definitions.is_empty() {
        return Err(CatalogError::EmptyPool("room_definitions"));
    }

    for (key, template) in data.heroes.iter().chain(data.enemies.iter()) {
        non_negative(key, "health", template.health)?;
    }
    for (key, weapon) in &data.weapons {
        non_negative(key, "damage", weapon.damage)?;
        if !(0.0..=1.0).contains(&weapon.success_probability) {
            return Err(CatalogError::InvalidProbability {
                key: key.clone(),
                value: weapon.success_probability,
            });
        }
    }
    for (key, armor) in &data.armor {
        non_negative(key, "defense", armor.defense)?;
    }

    check_every_weapon_wounds(data)
}

/// Weapon and armor are drawn independently for both sides, so a single
/// weapon that cannot get through a single armor is enough for two
/// combatants to trade blows forever.
fn check_every_weapon_wounds(data: &GameData) -> Result<(), CatalogError> {
    for (weapon_key, weapon) in &data.weapons {
        for (armor_key, armor) in &data.armor {
            if weapon.success_probability <= 0.0 || weapon.damage <= armor.defense {
                return Err(CatalogError::Stalemate {
                    weapon: weapon_key.clone(),
                    armor: armor_key.clone(),
                });
            }
        }
    }
    Ok(())
}

fn non_negative(key: &str, stat: &'static str, value: i32) -> Result<(), CatalogError> {
    if value < 0 {
        return Err(CatalogError::NegativeStat {
            key: key.to_string(),
            stat,
            value,
        });
    }
    Ok(())
}
