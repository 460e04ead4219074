//! On-disk catalog records.

use crate::combat::types::{Armor, Enemy, Hero, Weapon};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hero or enemy template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterTemplate {
    pub name: String,
    pub definition: String,
    pub health: i32,
    pub death_definition: String,
}

impl CharacterTemplate {
    pub fn to_hero(&self) -> Hero {
        Hero::new(
            &self.name,
            &self.definition,
            self.health,
            &self.death_definition,
        )
    }

    pub fn to_enemy(&self) -> Enemy {
        Enemy::new(
            &self.name,
            &self.definition,
            self.health,
            &self.death_definition,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponTemplate {
    pub name: String,
    pub definition: String,
    pub damage: i32,
    pub success_probability: f64,
}

impl From<&WeaponTemplate> for Weapon {
    fn from(t: &WeaponTemplate) -> Self {
        Weapon::new(&t.name, &t.definition, t.damage, t.success_probability)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorTemplate {
    pub name: String,
    pub definition: String,
    pub defense: i32,
}

impl From<&ArmorTemplate> for Armor {
    fn from(t: &ArmorTemplate) -> Self {
        Armor::new(&t.name, &t.definition, t.defense)
    }
}

/// Top-level layout of `game_data.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    #[serde(default)]
    pub heroes: BTreeMap<String, CharacterTemplate>,
    #[serde(default)]
    pub enemies: BTreeMap<String, CharacterTemplate>,
    #[serde(default)]
    pub weapons: BTreeMap<String, WeaponTemplate>,
    #[serde(default)]
    pub armor: BTreeMap<String, ArmorTemplate>,
    #[serde(default)]
    pub room_definitions: Vec<String>,
}
