//! Room resolution: what each room shows and where the hero goes next.

use super::types::{DungeonRun, Outcome, RoomKind};
use crate::catalog::ContentCatalog;
use crate::combat::logic::auto_battle;
use crate::combat::types::{Combatant, Enemy, Hero};
use crate::core::dice::Dice;
use crate::core::error::{CatalogError, GameError};
use crate::core::frontend::{ask, Choice, Frontend, GameEvent, Menu, Scene};
use log::debug;

const START_OPTIONS: &[Choice] = &[Choice::Proceed];
const ROOM_OPTIONS: &[Choice] = &[Choice::Proceed, Choice::Retreat];
const ENEMY_OPTIONS: &[Choice] = &[Choice::Attack, Choice::Retreat];
const EXIT_OPTIONS: &[Choice] = &[Choice::ExitDungeon, Choice::Retreat];

/// Plays out the room the hero currently stands in.
///
/// Empty rooms draw their description and enemy rooms spawn their enemy on
/// the first visit only; both are kept in the run's cache, so an enemy
/// wounded or killed earlier is met again in the same state.
pub fn resolve_room(
    run: &mut DungeonRun,
    hero: &mut Hero,
    catalog: &impl ContentCatalog,
    dice: &mut impl Dice,
    frontend: &mut impl Frontend,
) -> Result<Outcome, GameError> {
    let position = run.position;

    let outcome = match run.current_kind() {
        RoomKind::Start => {
            let choice = ask(frontend, &Menu::new(Scene::Start, START_OPTIONS))?;
            outcome_for(choice)
        }
        RoomKind::Empty => {
            let pool = catalog.room_descriptions();
            if pool.is_empty() {
                return Err(CatalogError::EmptyPool("room_definitions").into());
            }
            let description = run.cache.description_or_insert_with(position, || {
                let drawn = pool[dice.pick_index(pool.len())].clone();
                debug!("room {position}: drew description {drawn:?}");
                drawn
            });
            let menu = Menu::new(Scene::EmptyRoom { description }, ROOM_OPTIONS);
            outcome_for(ask(frontend, &menu)?)
        }
        RoomKind::Enemy => {
            let enemy = run
                .cache
                .enemy_or_try_insert_with(position, || spawn_enemy(catalog, &mut *dice))?;
            debug!(
                "room {position}: {} at {}/{}",
                enemy.name, enemy.current_health, enemy.max_health
            );
            resolve_enemy_room(hero, enemy, dice, frontend)?
        }
        RoomKind::Exit => {
            let choice = ask(frontend, &Menu::new(Scene::Exit, EXIT_OPTIONS))?;
            outcome_for(choice)
        }
    };

    debug!("room {position} ({:?}) resolved to {:?}", run.current_kind(), outcome);
    Ok(outcome)
}

fn spawn_enemy(catalog: &impl ContentCatalog, dice: &mut impl Dice) -> Result<Enemy, CatalogError> {
    let keys = catalog.enemy_keys();
    if keys.is_empty() {
        return Err(CatalogError::EmptyPool("enemies"));
    }
    let key = &keys[dice.pick_index(keys.len())];
    catalog.instantiate_enemy(key, dice)
}

fn resolve_enemy_room(
    hero: &mut Hero,
    enemy: &mut Enemy,
    dice: &mut impl Dice,
    frontend: &mut impl Frontend,
) -> Result<Outcome, GameError> {
    if enemy.is_defeated() {
        let menu = Menu::new(Scene::DefeatedEnemy { enemy }, ROOM_OPTIONS);
        return Ok(outcome_for(ask(frontend, &menu)?));
    }

    let menu = Menu::new(Scene::EnemyRoom { enemy }, ENEMY_OPTIONS);
    match ask(frontend, &menu)? {
        Some(Choice::Attack) => {}
        other => return Ok(outcome_for(other)),
    }

    let report = auto_battle(hero, enemy, dice);
    for event in &report.events {
        frontend.report(&GameEvent::Battle { hero, enemy, event })?;
    }
    if !report.hero_won {
        return Ok(Outcome::Death);
    }

    let menu = Menu::new(Scene::AfterBattle { enemy }, ROOM_OPTIONS);
    Ok(outcome_for(ask(frontend, &menu)?))
}

/// Movement choices map straight to outcomes; no answer means stay put.
fn outcome_for(choice: Option<Choice>) -> Outcome {
    match choice {
        Some(Choice::Proceed) => Outcome::Advance,
        Some(Choice::Retreat) => Outcome::Retreat,
        Some(Choice::ExitDungeon) => Outcome::Exit,
        Some(Choice::Attack | Choice::EnterDungeon | Choice::PassBy) | None => Outcome::Stay,
    }
}
