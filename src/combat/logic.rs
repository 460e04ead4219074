use super::types::{Combatant, Enemy, Hero};
use crate::core::dice::Dice;
use log::{info, trace};

/// Result of a single swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strike {
    /// The swing landed and got through the armor.
    Hit { damage: i32 },
    /// The swing landed but the armor took all of it.
    Absorbed,
    /// The defender dodged.
    Dodged,
}

/// Health snapshot used for the per-turn status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vitals {
    pub current: i32,
    pub max: i32,
}

impl Vitals {
    pub fn of(combatant: &impl Combatant) -> Self {
        Self {
            current: combatant.current_health(),
            max: combatant.max_health(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    /// Emitted once before the first swing
    Engaged,
    /// Health of both sides at the start of a turn
    Status { hero: Vitals, enemy: Vitals },
    HeroStrike(Strike),
    EnemyStrike(Strike),
    /// The enemy fell. `health_restored` is false when the hero was untouched.
    Victory { health_restored: bool },
    /// The hero fell
    Defeat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleReport {
    pub hero_won: bool,
    pub events: Vec<BattleEvent>,
}

impl BattleReport {
    pub fn hero_turns(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, BattleEvent::HeroStrike(_)))
            .count()
    }

    pub fn enemy_turns(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, BattleEvent::EnemyStrike(_)))
            .count()
    }
}

/// Resolves one swing of `attacker` against `defender`.
///
/// The attack lands when a uniform roll is at or below the weapon's hit
/// probability. A landed attack deals `damage - defense` only when damage
/// strictly exceeds defense.
pub fn strike(
    attacker: &impl Combatant,
    defender: &mut impl Combatant,
    dice: &mut impl Dice,
) -> Strike {
    let roll = dice.next_uniform();
    if roll > attacker.hit_chance() {
        return Strike::Dodged;
    }

    let damage = attacker.attack_damage();
    let defense = defender.defense();
    if damage > defense {
        let dealt = damage - defense;
        defender.take_damage(dealt);
        Strike::Hit { damage: dealt }
    } else {
        Strike::Absorbed
    }
}

/// Fights until one side drops to zero health or below.
///
/// The hero swings on odd steps and the enemy on even steps. The battle
/// ends the moment a defender falls, so the loser never gets a last swing.
/// A winning hero is healed back to full.
pub fn auto_battle(hero: &mut Hero, enemy: &mut Enemy, dice: &mut impl Dice) -> BattleReport {
    let mut events = vec![BattleEvent::Engaged];
    let mut step: u32 = 1;

    let hero_won = loop {
        if enemy.is_defeated() {
            break true;
        }
        if hero.is_defeated() {
            break false;
        }

        events.push(BattleEvent::Status {
            hero: Vitals::of(hero),
            enemy: Vitals::of(enemy),
        });

        if step % 2 == 1 {
            let outcome = strike(hero, enemy, dice);
            trace!("step {}: {} -> {}: {:?}", step, hero.name, enemy.name, outcome);
            events.push(BattleEvent::HeroStrike(outcome));
        } else {
            let outcome = strike(enemy, hero, dice);
            trace!("step {}: {} -> {}: {:?}", step, enemy.name, hero.name, outcome);
            events.push(BattleEvent::EnemyStrike(outcome));
        }
        step += 1;
    };

    if hero_won {
        let health_restored = hero.current_health < hero.max_health;
        hero.restore_health();
        events.push(BattleEvent::Victory { health_restored });
        info!("{} defeated {} after {} steps", hero.name, enemy.name, step - 1);
    } else {
        events.push(BattleEvent::Defeat);
        info!("{} was slain by {} after {} steps", hero.name, enemy.name, step - 1);
    }

    BattleReport { hero_won, events }
}

/// Runs a battle and only reports whether the hero survived.
pub fn fight(hero: &mut Hero, enemy: &mut Enemy, dice: &mut impl Dice) -> bool {
    auto_battle(hero, enemy, dice).hero_won
}
