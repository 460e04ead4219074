//! Top-level game loop: pick a hero, decide at the gate, walk the dungeon.

use crate::catalog::ContentCatalog;
use crate::combat::types::Hero;
use crate::core::dice::Dice;
use crate::core::error::{CatalogError, GameError};
use crate::core::frontend::{ask, Choice, Frontend, GameEvent, Menu, Scene};
use crate::dungeon::generation::generate_layout;
use crate::dungeon::logic::resolve_room;
use crate::dungeon::types::{DungeonRun, Outcome};
use log::{debug, info};

const GATE_OPTIONS: &[Choice] = &[Choice::EnterDungeon, Choice::PassBy];

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnding {
    /// Left through the exit alive
    Escaped,
    Died,
    /// Never went in
    PassedBy,
}

/// Summary handed back when a session ends.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub ending: RunEnding,
    pub hero: Hero,
    /// Room entries during the dungeon attempt, start room included (0 if passed by)
    pub rooms_entered: u32,
    pub enemies_defeated: usize,
}

/// Drives one game session against a catalog, a dice source and a frontend.
pub struct RunController<C, D, F> {
    catalog: C,
    dice: D,
    frontend: F,
}

impl<C, D, F> RunController<C, D, F>
where
    C: ContentCatalog,
    D: Dice,
    F: Frontend,
{
    pub fn new(catalog: C, dice: D, frontend: F) -> Self {
        Self {
            catalog,
            dice,
            frontend,
        }
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn into_frontend(self) -> F {
        self.frontend
    }

    /// Plays until the hero escapes, dies, or walks past the dungeon.
    ///
    /// A missing answer at the gate starts over with hero selection.
    pub fn play(&mut self) -> Result<RunReport, GameError> {
        loop {
            let hero = self.select_hero()?;

            let gate = Menu::new(Scene::Gate, GATE_OPTIONS);
            match ask(&mut self.frontend, &gate)? {
                Some(Choice::EnterDungeon) => return self.explore(hero),
                Some(Choice::PassBy) => {
                    info!("{} passed the dungeon by", hero.name);
                    return self.finish(hero, RunEnding::PassedBy, 0, 0);
                }
                _ => debug!("no decision at the gate, starting over"),
            }
        }
    }

    /// Asks for a hero until the frontend names a valid one.
    pub fn select_hero(&mut self) -> Result<Hero, GameError> {
        let keys = self.catalog.hero_keys();
        if keys.is_empty() {
            return Err(CatalogError::EmptyPool("heroes").into());
        }

        loop {
            match self.frontend.choose_hero(keys)? {
                Some(index) if index < keys.len() => {
                    let hero = self.catalog.instantiate_hero(&keys[index], &mut self.dice)?;
                    info!("hero selected: {} ({})", hero.name, keys[index]);
                    self.frontend.report(&GameEvent::HeroSelected { hero: &hero })?;
                    return Ok(hero);
                }
                Some(index) => debug!("hero index {index} out of range, asking again"),
                None => debug!("no hero chosen, asking again"),
            }
        }
    }

    fn explore(&mut self, mut hero: Hero) -> Result<RunReport, GameError> {
        let mut run = DungeonRun::new(generate_layout(&mut self.dice));
        info!("{} enters a dungeon of {} rooms", hero.name, run.layout.len());

        let ending = loop {
            let outcome = resolve_room(
                &mut run,
                &mut hero,
                &self.catalog,
                &mut self.dice,
                &mut self.frontend,
            )?;
            if !run.apply(outcome) {
                break match outcome {
                    Outcome::Death => RunEnding::Died,
                    _ => RunEnding::Escaped,
                };
            }
        };

        let defeated = run.cache.defeated_enemies();
        self.finish(hero, ending, run.rooms_entered, defeated)
    }

    fn finish(
        &mut self,
        hero: Hero,
        ending: RunEnding,
        rooms_entered: u32,
        enemies_defeated: usize,
    ) -> Result<RunReport, GameError> {
        info!(
            "run over: {:?} after {} rooms, {} enemies defeated",
            ending, rooms_entered, enemies_defeated
        );
        self.frontend.report(&GameEvent::RunEnded {
            hero: &hero,
            ending,
        })?;
        Ok(RunReport {
            ending,
            hero,
            rooms_entered,
            enemies_defeated,
        })
    }
}
