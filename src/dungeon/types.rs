//! Dungeon layout and per-run room state.

use crate::combat::types::Enemy;
use std::fmt;

/// Kind of room at a layout position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomKind {
    /// Position 0 - the gate the hero came through
    Start,
    /// Nothing but flavor text
    Empty,
    /// One enemy guards the room
    Enemy,
    /// Last position - the way out
    Exit,
}

impl RoomKind {
    /// Returns the map character for this room kind
    pub fn icon(&self) -> char {
        match self {
            RoomKind::Start => 'S',
            RoomKind::Empty => '.',
            RoomKind::Enemy => 'E',
            RoomKind::Exit => 'X',
        }
    }
}

/// Immutable room sequence for one dungeon attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rooms: Vec<RoomKind>,
}

impl Layout {
    /// Wraps a room sequence. The first room must be `Start`, the last `Exit`
    /// and nothing in between may be either.
    pub fn new(rooms: Vec<RoomKind>) -> Self {
        debug_assert!(rooms.len() >= 2, "a layout needs at least start and exit");
        debug_assert_eq!(rooms.first(), Some(&RoomKind::Start));
        debug_assert_eq!(rooms.last(), Some(&RoomKind::Exit));
        debug_assert!(
            rooms[1..rooms.len() - 1]
                .iter()
                .all(|k| matches!(k, RoomKind::Empty | RoomKind::Enemy)),
            "start/exit may only appear at the ends"
        );
        Self { rooms }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.rooms.len().saturating_sub(1)
    }

    pub fn kind(&self, position: usize) -> Option<RoomKind> {
        self.rooms.get(position).copied()
    }

    pub fn count(&self, kind: RoomKind) -> usize {
        self.rooms.iter().filter(|&&k| k == kind).count()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for room in &self.rooms {
            write!(f, "{}", room.icon())?;
        }
        Ok(())
    }
}

/// Lazily filled room contents, one slot per layout position.
///
/// A slot is written at most once; later visits read the same value back.
#[derive(Debug, Clone, Default)]
pub struct RoomCache {
    descriptions: Vec<Option<String>>,
    enemies: Vec<Option<Enemy>>,
}

impl RoomCache {
    pub fn new(len: usize) -> Self {
        Self {
            descriptions: vec![None; len],
            enemies: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }

    pub fn description(&self, position: usize) -> Option<&str> {
        self.descriptions.get(position)?.as_deref()
    }

    pub fn enemy(&self, position: usize) -> Option<&Enemy> {
        self.enemies.get(position)?.as_ref()
    }

    /// Enemies met so far that are down.
    pub fn defeated_enemies(&self) -> usize {
        self.enemies
            .iter()
            .flatten()
            .filter(|enemy| enemy.current_health <= 0)
            .count()
    }

    /// Returns the cached description, drawing one with `draw` on first use.
    pub fn description_or_insert_with(
        &mut self,
        position: usize,
        draw: impl FnOnce() -> String,
    ) -> &str {
        self.descriptions[position].get_or_insert_with(draw)
    }

    /// Returns the cached enemy, spawning one with `spawn` on first use.
    /// A failed spawn leaves the slot empty.
    pub fn enemy_or_try_insert_with<E>(
        &mut self,
        position: usize,
        spawn: impl FnOnce() -> Result<Enemy, E>,
    ) -> Result<&mut Enemy, E> {
        let slot = &mut self.enemies[position];
        let enemy = match slot.take() {
            Some(enemy) => enemy,
            None => spawn()?,
        };
        Ok(slot.insert(enemy))
    }
}

/// Result of resolving one room interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Move to position + 1
    Advance,
    /// Move to position - 1
    Retreat,
    /// No movement; ask again
    Stay,
    /// Leave the dungeon alive
    Exit,
    /// The hero died
    Death,
}

/// State of one dungeon attempt: where the hero stands and what each room holds.
#[derive(Debug, Clone)]
pub struct DungeonRun {
    pub layout: Layout,
    pub cache: RoomCache,
    pub position: usize,
    /// Room entries so far, the start room included
    pub rooms_entered: u32,
}

impl DungeonRun {
    pub fn new(layout: Layout) -> Self {
        let cache = RoomCache::new(layout.len());
        Self {
            layout,
            cache,
            position: 0,
            rooms_entered: 1,
        }
    }

    pub fn current_kind(&self) -> RoomKind {
        // Position is kept inside the layout by `apply`.
        self.layout.rooms[self.position]
    }

    /// Moves the hero according to `outcome`.
    /// Returns false once the run is over (`Exit` or `Death`).
    pub fn apply(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Advance => {
                debug_assert!(
                    self.position < self.layout.last_index(),
                    "cannot advance past the exit"
                );
                if self.position < self.layout.last_index() {
                    self.position += 1;
                    self.rooms_entered += 1;
                }
                true
            }
            Outcome::Retreat => {
                debug_assert!(self.position > 0, "cannot retreat out of the start room");
                if self.position > 0 {
                    self.position -= 1;
                    self.rooms_entered += 1;
                }
                true
            }
            Outcome::Stay => true,
            Outcome::Exit | Outcome::Death => false,
        }
    }
}
