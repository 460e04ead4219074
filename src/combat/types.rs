/// Combat numbers contributed by a piece of equipment.
///
/// Stats a piece of equipment does not carry read as zero, so an empty
/// weapon slot never hits and an empty armor slot absorbs nothing.
pub trait CombatStats {
    fn damage(&self) -> i32 {
        0
    }

    fn success_probability(&self) -> f64 {
        0.0
    }

    fn defense(&self) -> i32 {
        0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    pub name: String,
    pub definition: String,
    pub damage: i32,
    /// Chance in `[0, 1]` that a swing lands.
    pub success_probability: f64,
}

impl Weapon {
    pub fn new(name: &str, definition: &str, damage: i32, success_probability: f64) -> Self {
        Self {
            name: name.to_string(),
            definition: definition.to_string(),
            damage,
            success_probability,
        }
    }
}

impl CombatStats for Weapon {
    fn damage(&self) -> i32 {
        self.damage
    }

    fn success_probability(&self) -> f64 {
        self.success_probability
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Armor {
    pub name: String,
    pub definition: String,
    pub defense: i32,
}

impl Armor {
    pub fn new(name: &str, definition: &str, defense: i32) -> Self {
        Self {
            name: name.to_string(),
            definition: definition.to_string(),
            defense,
        }
    }
}

impl CombatStats for Armor {
    fn defense(&self) -> i32 {
        self.defense
    }
}

/// Which side of a fight an entity is on. Drives health bar colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Hero,
    Enemy,
}

/// Shared view of anything that can stand in a fight.
pub trait Combatant {
    const SIDE: Side;

    fn name(&self) -> &str;
    fn death_definition(&self) -> &str;
    fn max_health(&self) -> i32;
    fn current_health(&self) -> i32;
    fn weapon(&self) -> Option<&Weapon>;
    fn armor(&self) -> Option<&Armor>;
    fn set_current_health(&mut self, health: i32);

    fn is_defeated(&self) -> bool {
        self.current_health() <= 0
    }

    /// Health may go below zero; only a victory restores it.
    fn take_damage(&mut self, amount: i32) {
        let health = self.current_health() - amount;
        self.set_current_health(health);
    }

    fn restore_health(&mut self) {
        let max = self.max_health();
        self.set_current_health(max);
    }

    fn attack_damage(&self) -> i32 {
        self.weapon().map_or(0, CombatStats::damage)
    }

    fn hit_chance(&self) -> f64 {
        self.weapon().map_or(0.0, CombatStats::success_probability)
    }

    fn defense(&self) -> i32 {
        self.armor().map_or(0, CombatStats::defense)
    }
}

/// The player's character.
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub name: String,
    pub definition: String,
    pub death_definition: String,
    pub max_health: i32,
    pub current_health: i32,
    pub weapon: Option<Weapon>,
    pub armor: Option<Armor>,
}

impl Hero {
    pub fn new(name: &str, definition: &str, health: i32, death_definition: &str) -> Self {
        Self {
            name: name.to_string(),
            definition: definition.to_string(),
            death_definition: death_definition.to_string(),
            max_health: health,
            current_health: health,
            weapon: None,
            armor: None,
        }
    }

    pub fn equipped(mut self, weapon: Weapon, armor: Armor) -> Self {
        self.weapon = Some(weapon);
        self.armor = Some(armor);
        self
    }
}

/// A monster waiting in a dungeon room.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub name: String,
    pub definition: String,
    pub death_definition: String,
    pub max_health: i32,
    pub current_health: i32,
    pub weapon: Option<Weapon>,
    pub armor: Option<Armor>,
}

impl Enemy {
    pub fn new(name: &str, definition: &str, health: i32, death_definition: &str) -> Self {
        Self {
            name: name.to_string(),
            definition: definition.to_string(),
            death_definition: death_definition.to_string(),
            max_health: health,
            current_health: health,
            weapon: None,
            armor: None,
        }
    }

    pub fn equipped(mut self, weapon: Weapon, armor: Armor) -> Self {
        self.weapon = Some(weapon);
        self.armor = Some(armor);
        self
    }
}

macro_rules! impl_combatant {
    ($ty:ty, $side:expr) => {
        impl Combatant for $ty {
            const SIDE: Side = $side;

            fn name(&self) -> &str {
                &self.name
            }

            fn death_definition(&self) -> &str {
                &self.death_definition
            }

            fn max_health(&self) -> i32 {
                self.max_health
            }

            fn current_health(&self) -> i32 {
                self.current_health
            }

            fn weapon(&self) -> Option<&Weapon> {
                self.weapon.as_ref()
            }

            fn armor(&self) -> Option<&Armor> {
                self.armor.as_ref()
            }

            fn set_current_health(&mut self, health: i32) {
                self.current_health = health;
            }
        }
    };
}

impl_combatant!(Hero, Side::Hero);
impl_combatant!(Enemy, Side::Enemy);
