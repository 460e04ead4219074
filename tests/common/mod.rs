//! Shared fixtures for integration tests: a scripted frontend and small catalogs.

#![allow(dead_code)]

use delve::catalog::{ContentCatalog, JsonCatalog};
use delve::combat::{BattleEvent, Enemy, Hero};
use delve::core::{Choice, CatalogError, Dice, Frontend, GameEvent, Menu, RngDice, Scene};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cell::Cell;
use std::collections::VecDeque;
use std::io;

/// Catalog where every weapon lands (damage 15, always hits) and every armor blocks 5.
pub fn catalog_json(hero_health: i32, enemy_health: i32) -> String {
    format!(
        r#"{{
            "heroes": {{
                "tester": {{"name": "Tester", "definition": "a test hero", "health": {hero_health}, "death_definition": "The tester has fallen"}}
            }},
            "enemies": {{
                "dummy": {{"name": "Dummy", "definition": "a training dummy", "health": {enemy_health}, "death_definition": "the dummy is straw again"}}
            }},
            "weapons": {{
                "sword": {{"name": "Sword", "definition": "sure to hit", "damage": 15, "success_probability": 1.0}}
            }},
            "armor": {{
                "mail": {{"name": "Mail", "definition": "sturdy", "defense": 5}}
            }},
            "room_definitions": ["Test room one", "Test room two", "Test room three"]
        }}"#
    )
}

pub fn catalog(hero_health: i32, enemy_health: i32) -> JsonCatalog {
    JsonCatalog::from_json_str(&catalog_json(hero_health, enemy_health)).unwrap()
}

pub fn dice(seed: u64) -> RngDice<ChaCha8Rng> {
    RngDice::new(ChaCha8Rng::seed_from_u64(seed))
}

/// Wraps a catalog and counts enemy instantiations.
pub struct CountingCatalog<C> {
    pub inner: C,
    pub enemies_spawned: Cell<usize>,
}

impl<C> CountingCatalog<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            enemies_spawned: Cell::new(0),
        }
    }
}

impl<C: ContentCatalog> ContentCatalog for CountingCatalog<C> {
    fn hero_keys(&self) -> &[String] {
        self.inner.hero_keys()
    }

    fn enemy_keys(&self) -> &[String] {
        self.inner.enemy_keys()
    }

    fn instantiate_hero(&self, key: &str, dice: &mut dyn Dice) -> Result<Hero, CatalogError> {
        self.inner.instantiate_hero(key, dice)
    }

    fn instantiate_enemy(&self, key: &str, dice: &mut dyn Dice) -> Result<Enemy, CatalogError> {
        self.enemies_spawned.set(self.enemies_spawned.get() + 1);
        self.inner.instantiate_enemy(key, dice)
    }

    fn room_descriptions(&self) -> &[String] {
        self.inner.room_descriptions()
    }
}

/// Short label for a scene, used to assert on what the player was shown.
pub fn scene_name(scene: &Scene<'_>) -> String {
    match scene {
        Scene::Gate => "gate".to_string(),
        Scene::Start => "start".to_string(),
        Scene::EmptyRoom { description } => format!("empty:{description}"),
        Scene::EnemyRoom { enemy } => format!("enemy:{}:{}", enemy.name, enemy.current_health),
        Scene::DefeatedEnemy { enemy } => format!("defeated:{}", enemy.name),
        Scene::AfterBattle { enemy } => format!("after:{}", enemy.name),
        Scene::Exit => "exit".to_string(),
    }
}

/// Replays queued answers and records everything it is shown.
///
/// Running out of answers behaves like a closed terminal.
#[derive(Default)]
pub struct ScriptedFrontend {
    pub heroes: VecDeque<Option<usize>>,
    pub choices: VecDeque<Option<Choice>>,
    pub scenes: Vec<String>,
    pub battle_events: Vec<BattleEvent>,
    pub selected: Vec<String>,
    pub endings: Vec<delve::core::RunEnding>,
}

impl ScriptedFrontend {
    pub fn new(heroes: &[Option<usize>], choices: &[Option<Choice>]) -> Self {
        Self {
            heroes: heroes.iter().copied().collect(),
            choices: choices.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn with_choices(choices: &[Option<Choice>]) -> Self {
        Self::new(&[], choices)
    }
}

fn closed() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
}

impl Frontend for ScriptedFrontend {
    fn choose_hero(&mut self, _keys: &[String]) -> io::Result<Option<usize>> {
        self.heroes.pop_front().ok_or_else(closed)
    }

    fn choose(&mut self, menu: &Menu<'_>) -> io::Result<Option<Choice>> {
        self.scenes.push(scene_name(&menu.scene));
        self.choices.pop_front().ok_or_else(closed)
    }

    fn report(&mut self, event: &GameEvent<'_>) -> io::Result<()> {
        match event {
            GameEvent::HeroSelected { hero } => self.selected.push(hero.name.clone()),
            GameEvent::Battle { event, .. } => self.battle_events.push((*event).clone()),
            GameEvent::RunEnded { ending, .. } => self.endings.push(*ending),
        }
        Ok(())
    }
}

/// Always pushes forward: enter, proceed, attack, and leave at the exit.
#[derive(Default)]
pub struct BoldFrontend {
    pub scenes: Vec<String>,
    pub battles_won: usize,
    pub battles_lost: usize,
}

impl Frontend for BoldFrontend {
    fn choose_hero(&mut self, _keys: &[String]) -> io::Result<Option<usize>> {
        Ok(Some(0))
    }

    fn choose(&mut self, menu: &Menu<'_>) -> io::Result<Option<Choice>> {
        self.scenes.push(scene_name(&menu.scene));
        let choice = match menu.scene {
            Scene::Gate => Choice::EnterDungeon,
            Scene::EnemyRoom { .. } => Choice::Attack,
            Scene::Exit => Choice::ExitDungeon,
            _ => Choice::Proceed,
        };
        Ok(Some(choice))
    }

    fn report(&mut self, event: &GameEvent<'_>) -> io::Result<()> {
        if let GameEvent::Battle { event, .. } = event {
            match event {
                BattleEvent::Victory { .. } => self.battles_won += 1,
                BattleEvent::Defeat => self.battles_lost += 1,
                _ => {}
            }
        }
        Ok(())
    }
}
