//! The boundary between the game rules and whoever is playing.
//!
//! The core never prints or reads anything itself. It hands a [`Menu`] to a
//! [`Frontend`] when it needs a decision and a [`GameEvent`] when something
//! worth telling the player happened.

use crate::combat::logic::BattleEvent;
use crate::combat::types::{Enemy, Hero};
use crate::core::run::RunEnding;
use std::io;

/// Every decision the player can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    EnterDungeon,
    PassBy,
    Proceed,
    Retreat,
    Attack,
    ExitDungeon,
}

/// What the player is looking at while deciding.
#[derive(Debug, Clone, Copy)]
pub enum Scene<'a> {
    /// Outside the dungeon, before entering
    Gate,
    Start,
    EmptyRoom { description: &'a str },
    EnemyRoom { enemy: &'a Enemy },
    /// The room's enemy is already dead
    DefeatedEnemy { enemy: &'a Enemy },
    /// Right after winning a fight
    AfterBattle { enemy: &'a Enemy },
    Exit,
}

#[derive(Debug, Clone, Copy)]
pub struct Menu<'a> {
    pub scene: Scene<'a>,
    pub options: &'static [Choice],
}

impl<'a> Menu<'a> {
    pub fn new(scene: Scene<'a>, options: &'static [Choice]) -> Self {
        Self { scene, options }
    }

    pub fn offers(&self, choice: Choice) -> bool {
        self.options.contains(&choice)
    }
}

/// Narration the core hands to the frontend.
#[derive(Debug, Clone, Copy)]
pub enum GameEvent<'a> {
    HeroSelected {
        hero: &'a Hero,
    },
    Battle {
        hero: &'a Hero,
        enemy: &'a Enemy,
        event: &'a BattleEvent,
    },
    RunEnded {
        hero: &'a Hero,
        ending: RunEnding,
    },
}

/// Player-facing input and output.
///
/// `Ok(None)` from either chooser means "no usable answer": the core asks
/// again without changing any state. Errors end the session.
pub trait Frontend {
    /// Picks an index into `keys`.
    fn choose_hero(&mut self, keys: &[String]) -> io::Result<Option<usize>>;

    fn choose(&mut self, menu: &Menu<'_>) -> io::Result<Option<Choice>>;

    fn report(&mut self, event: &GameEvent<'_>) -> io::Result<()>;
}

/// Asks `frontend` for a decision and drops answers the menu does not offer.
pub fn ask(frontend: &mut impl Frontend, menu: &Menu<'_>) -> io::Result<Option<Choice>> {
    let choice = frontend.choose(menu)?;
    Ok(choice.filter(|c| {
        let offered = menu.offers(*c);
        if !offered {
            log::warn!("frontend answered {:?}, not one of {:?}", c, menu.options);
        }
        offered
    }))
}
