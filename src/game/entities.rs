//! # Entities
//!
//! The player entity and the spawn-point interface the generator writes through.

use crate::Position;
use serde::{Deserialize, Serialize};

/// Anything that can receive the player's starting position.
///
/// Dungeon generation calls [`SpawnSink::set_spawn`] at most once, with the
/// center of the first room it accepts.
pub trait SpawnSink {
    /// Records the spawn position.
    fn set_spawn(&mut self, pos: Position);
}

impl SpawnSink for Position {
    fn set_spawn(&mut self, pos: Position) {
        *self = pos;
    }
}

impl SpawnSink for Option<Position> {
    fn set_spawn(&mut self, pos: Position) {
        *self = Some(pos);
    }
}

/// The player character, as far as map generation is concerned.
///
/// # Examples
///
/// ```
/// use delve::{Player, Position, SpawnSink};
///
/// let mut player = Player::new("Hero".to_string(), Position::origin());
/// player.set_spawn(Position::new(4, 9));
/// assert_eq!(player.position(), Position::new(4, 9));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name
    pub name: String,
    /// Current map position
    pub position: Position,
}

impl Player {
    /// Creates a new player at the given position.
    pub fn new(name: String, position: Position) -> Self {
        Self { name, position }
    }

    /// Gets the player's current position.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl SpawnSink for Player {
    fn set_spawn(&mut self, pos: Position) {
        self.position = pos;
    }
}
