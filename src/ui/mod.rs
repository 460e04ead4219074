//! Terminal presentation. Nothing in here affects game rules.

pub mod health_bar;
pub mod terminal;

pub use health_bar::{draw_health_bar, draw_plain_health_bar};
pub use terminal::TerminalFrontend;
