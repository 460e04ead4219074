//! Line-oriented terminal frontend: numbered menus on stdout, answers on stdin.

use super::health_bar::{draw_health_bar, draw_plain_health_bar};
use crate::combat::logic::{BattleEvent, Strike};
use crate::combat::types::{Enemy, Hero, Side};
use crate::core::constants::{MENU_PROMPT, SEPARATOR};
use crate::core::frontend::{Choice, Frontend, GameEvent, Menu, Scene};
use crate::core::run::RunEnding;
use std::io::{self, BufRead, Write};

/// Why a typed answer was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    NotANumber,
    OutOfRange,
}

/// Parses a 1-based menu answer into a 0-based index below `len`.
pub fn parse_selection(line: &str, len: usize) -> Result<usize, InputError> {
    let number: usize = line.trim().parse().map_err(|_| InputError::NotANumber)?;
    if number == 0 || number > len {
        return Err(InputError::OutOfRange);
    }
    Ok(number - 1)
}

pub fn choice_label(choice: Choice) -> &'static str {
    match choice {
        Choice::EnterDungeon => "Enter the dungeon",
        Choice::PassBy => "Walk on by",
        Choice::Proceed => "Go further",
        Choice::Retreat => "Go back",
        Choice::Attack => "Attack",
        Choice::ExitDungeon => "Leave the dungeon",
    }
}

fn scene_text(scene: &Scene<'_>) -> Option<String> {
    let text = match scene {
        Scene::Gate => "You approach a moss-covered dungeon that inspires no trust at all. \
                        Take the risk, or walk on by?"
            .to_string(),
        Scene::Start => {
            "Before you: the beginning of the dungeon. Its gates no longer open from the inside..."
                .to_string()
        }
        Scene::EmptyRoom { description } => format!("Before you: {description}"),
        Scene::EnemyRoom { enemy } => {
            format!("You step into the room and right in front of you stands {}!", enemy.name)
        }
        Scene::DefeatedEnemy { enemy } => {
            format!("You step into the room and see: {}", enemy.death_definition)
        }
        Scene::AfterBattle { .. } => return None,
        Scene::Exit => "The dungeon is cleared and the exit is right ahead, \
                        but you may still wander its halls:"
            .to_string(),
    };
    Some(text)
}

/// Plays the game over any reader/writer pair.
pub struct TerminalFrontend<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints the prompt and reads one answer. End of input is an error.
    fn read_answer(&mut self) -> io::Result<String> {
        write!(self.output, "{MENU_PROMPT}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game ended",
            ));
        }
        Ok(line)
    }

    fn health_bar(&self, side: Side, name: &str, current: i32, max: i32) -> String {
        if self.color {
            draw_health_bar(side, name, current, max)
        } else {
            draw_plain_health_bar(side, name, current, max)
        }
    }

    fn report_battle(&mut self, hero: &Hero, enemy: &Enemy, event: &BattleEvent) -> io::Result<()> {
        match event {
            BattleEvent::Engaged => {
                writeln!(self.output, "You charge at the enemy. The fight is on:")?;
            }
            BattleEvent::Status { hero: h, enemy: e } => {
                let hero_bar = self.health_bar(Side::Hero, &hero.name, h.current, h.max);
                let enemy_bar = self.health_bar(Side::Enemy, &enemy.name, e.current, e.max);
                writeln!(self.output, "{hero_bar}\n{enemy_bar}")?;
            }
            BattleEvent::HeroStrike(strike) => {
                writeln!(self.output, "You strike!")?;
                match strike {
                    Strike::Hit { damage } => writeln!(
                        self.output,
                        "A clean hit! You dealt {damage} damage to \"{}\"",
                        enemy.name
                    )?,
                    Strike::Absorbed => writeln!(
                        self.output,
                        "The enemy's armor holds, you dealt no damage."
                    )?,
                    Strike::Dodged => {
                        writeln!(self.output, "{} dodged your blow!", enemy.name)?
                    }
                }
            }
            BattleEvent::EnemyStrike(strike) => {
                writeln!(self.output, "{} strikes back. Watch out!", enemy.name)?;
                match strike {
                    Strike::Hit { damage } => writeln!(
                        self.output,
                        "This time you could not dodge, \"{}\" dealt you {damage} damage",
                        enemy.name
                    )?,
                    Strike::Absorbed => writeln!(
                        self.output,
                        "\"{}\" could not pierce your armor!",
                        enemy.name
                    )?,
                    Strike::Dodged => writeln!(
                        self.output,
                        "The blow came suddenly, but you managed to dodge!"
                    )?,
                }
            }
            BattleEvent::Victory { health_restored } => {
                let bar = self.health_bar(Side::Enemy, &enemy.name, 0, enemy.max_health);
                writeln!(self.output, "{bar}")?;
                writeln!(
                    self.output,
                    "You defeated {}! {}",
                    enemy.name, enemy.death_definition
                )?;
                if *health_restored {
                    writeln!(self.output, "Your health has been restored!")?;
                }
                writeln!(self.output, "{SEPARATOR}")?;
            }
            BattleEvent::Defeat => {
                let bar = self.health_bar(Side::Hero, &hero.name, 0, hero.max_health);
                writeln!(self.output, "{bar}")?;
                writeln!(self.output, "{}", hero.death_definition)?;
                writeln!(self.output, "{SEPARATOR}")?;
            }
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Frontend for TerminalFrontend<R, W> {
    fn choose_hero(&mut self, keys: &[String]) -> io::Result<Option<usize>> {
        for (i, key) in keys.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, key)?;
        }
        writeln!(self.output, "Choose your hero:")?;

        let answer = self.read_answer()?;
        match parse_selection(&answer, keys.len()) {
            Ok(index) => Ok(Some(index)),
            Err(InputError::NotANumber) => {
                writeln!(self.output, "Invalid input! Enter a number.")?;
                Ok(None)
            }
            Err(InputError::OutOfRange) => {
                writeln!(self.output, "Hero number out of range!")?;
                Ok(None)
            }
        }
    }

    fn choose(&mut self, menu: &Menu<'_>) -> io::Result<Option<Choice>> {
        if !matches!(menu.scene, Scene::AfterBattle { .. }) {
            writeln!(self.output, "{SEPARATOR}")?;
        }
        if let Some(text) = scene_text(&menu.scene) {
            writeln!(self.output, "{text}")?;
        }
        for (i, choice) in menu.options.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice_label(*choice))?;
        }

        let answer = self.read_answer()?;
        match parse_selection(&answer, menu.options.len()) {
            Ok(index) => Ok(Some(menu.options[index])),
            Err(_) => {
                writeln!(
                    self.output,
                    "Please answer with a number from 1 to {}.",
                    menu.options.len()
                )?;
                Ok(None)
            }
        }
    }

    fn report(&mut self, event: &GameEvent<'_>) -> io::Result<()> {
        match event {
            GameEvent::HeroSelected { hero } => {
                writeln!(
                    self.output,
                    "You chose \"{}\", {}",
                    hero.name, hero.definition
                )?;
                writeln!(self.output, "{SEPARATOR}")?;
            }
            GameEvent::Battle { hero, enemy, event } => self.report_battle(hero, enemy, event)?,
            GameEvent::RunEnded { ending, .. } => match ending {
                RunEnding::Escaped | RunEnding::PassedBy => {
                    writeln!(self.output, "Leaving the game")?;
                }
                RunEnding::Died => writeln!(self.output, "Your journey ends here.")?,
            },
        }
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::logic::Vitals;
    use std::io::Cursor;

    fn frontend(input: &str) -> TerminalFrontend<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalFrontend::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    fn output_of(frontend: TerminalFrontend<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(frontend.into_output()).unwrap()
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1\n", 2), Ok(0));
        assert_eq!(parse_selection("  2 ", 2), Ok(1));
        assert_eq!(parse_selection("3", 2), Err(InputError::OutOfRange));
        assert_eq!(parse_selection("0", 2), Err(InputError::OutOfRange));
        assert_eq!(parse_selection("two", 2), Err(InputError::NotANumber));
        assert_eq!(parse_selection("-1", 2), Err(InputError::NotANumber));
        assert_eq!(parse_selection("", 2), Err(InputError::NotANumber));
    }

    #[test]
    fn test_menu_lists_numbered_options() {
        let mut ui = frontend("2\n");
        let menu = Menu::new(Scene::Exit, &[Choice::ExitDungeon, Choice::Retreat]);

        assert_eq!(ui.choose(&menu).unwrap(), Some(Choice::Retreat));
        let out = output_of(ui);
        assert!(out.contains("1. Leave the dungeon\n2. Go back\n>> "));
        assert!(out.starts_with(SEPARATOR));
    }

    #[test]
    fn test_empty_room_shows_description() {
        let mut ui = frontend("1\n");
        let menu = Menu::new(
            Scene::EmptyRoom {
                description: "a dripping cellar",
            },
            &[Choice::Proceed, Choice::Retreat],
        );

        assert_eq!(ui.choose(&menu).unwrap(), Some(Choice::Proceed));
        assert!(output_of(ui).contains("Before you: a dripping cellar"));
    }

    #[test]
    fn test_bad_answer_yields_no_choice() {
        let mut ui = frontend("seven\n");
        let menu = Menu::new(Scene::Start, &[Choice::Proceed]);

        assert_eq!(ui.choose(&menu).unwrap(), None);
        assert!(output_of(ui).contains("Please answer with a number from 1 to 1."));
    }

    #[test]
    fn test_hero_selection_reports_input_errors() {
        let keys = vec!["assassin".to_string(), "warrior".to_string()];

        let mut ui = frontend("abc\n");
        assert_eq!(ui.choose_hero(&keys).unwrap(), None);
        assert!(output_of(ui).contains("Invalid input! Enter a number."));

        let mut ui = frontend("5\n");
        assert_eq!(ui.choose_hero(&keys).unwrap(), None);
        assert!(output_of(ui).contains("Hero number out of range!"));

        let mut ui = frontend("2\n");
        assert_eq!(ui.choose_hero(&keys).unwrap(), Some(1));
        assert!(output_of(ui).starts_with("1. assassin\n2. warrior\nChoose your hero:\n"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut ui = frontend("");
        let err = ui
            .choose(&Menu::new(Scene::Start, &[Choice::Proceed]))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_battle_narration() {
        let hero = Hero::new("Knight", "", 40, "The knight falls silent");
        let enemy = Enemy::new("Ghoul", "", 30, "The ghoul turns to dust");
        let mut ui = frontend("");

        let events = [
            BattleEvent::Engaged,
            BattleEvent::Status {
                hero: Vitals { current: 40, max: 40 },
                enemy: Vitals { current: 30, max: 30 },
            },
            BattleEvent::HeroStrike(Strike::Hit { damage: 12 }),
            BattleEvent::EnemyStrike(Strike::Absorbed),
            BattleEvent::HeroStrike(Strike::Dodged),
            BattleEvent::Victory {
                health_restored: true,
            },
        ];
        for event in &events {
            ui.report(&GameEvent::Battle {
                hero: &hero,
                enemy: &enemy,
                event,
            })
            .unwrap();
        }

        let out = output_of(ui);
        assert!(out.contains("Your health:\n Knight. 40/40"));
        assert!(out.contains("You dealt 12 damage to \"Ghoul\""));
        assert!(out.contains("\"Ghoul\" could not pierce your armor!"));
        assert!(out.contains("Ghoul dodged your blow!"));
        assert!(out.contains("Enemy health:\n Ghoul. 0/30"));
        assert!(out.contains("You defeated Ghoul! The ghoul turns to dust"));
        assert!(out.contains("Your health has been restored!"));
    }

    #[test]
    fn test_defeat_prints_death_definition() {
        let hero = Hero::new("Knight", "", 40, "The knight falls silent");
        let enemy = Enemy::new("Ghoul", "", 30, "");
        let mut ui = frontend("");

        ui.report(&GameEvent::Battle {
            hero: &hero,
            enemy: &enemy,
            event: &BattleEvent::Defeat,
        })
        .unwrap();

        let out = output_of(ui);
        assert!(out.contains("Knight. 0/40"));
        assert!(out.contains("The knight falls silent"));
    }
}
