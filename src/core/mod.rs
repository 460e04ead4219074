//! Game-wide plumbing: constants, randomness, errors, the frontend boundary
//! and the session loop.

pub mod config;
pub mod constants;
pub mod dice;
pub mod error;
pub mod frontend;
pub mod run;

pub use config::GameConfig;
pub use dice::{Dice, RngDice};
pub use error::{CatalogError, GameError};
pub use frontend::{Choice, Frontend, GameEvent, Menu, Scene};
pub use run::{RunController, RunEnding, RunReport};
