//! # Game Module
//!
//! The world-facing types the generator writes into.
//!
//! This module contains the small set of game types the dungeon generator needs:
//! - Grid coordinates
//! - The floor/wall tile grid
//! - The player entity and the spawn-point sink it implements

pub mod entities;
pub mod map;

pub use entities::*;
pub use map::*;

use serde::{Deserialize, Serialize};

/// Represents a 2D coordinate on the map grid.
///
/// # Examples
///
/// ```
/// use delve::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
///
/// let neighbours = pos.cardinal_adjacent_positions();
/// assert!(neighbours.contains(&Position::new(10, 4)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Calculates the Chebyshev (king-move) distance to another position.
    ///
    /// Two cells are 8-connected neighbours exactly when this is 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::Position;
    ///
    /// let pos1 = Position::new(0, 0);
    /// let pos2 = Position::new(3, 4);
    /// assert_eq!(pos1.chebyshev_distance(pos2), 4);
    /// ```
    pub fn chebyshev_distance(self, other: Position) -> u32 {
        (self.x - other.x)
            .unsigned_abs()
            .max((self.y - other.y).unsigned_abs())
    }

    /// Calculates the squared Euclidean distance to another position.
    pub fn distance_squared(self, other: Position) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }

    /// Calculates the Euclidean distance to another position.
    pub fn euclidean_distance(self, other: Position) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns only the 4 cardinal adjacent positions (no diagonals).
    pub fn cardinal_adjacent_positions(self) -> Vec<Position> {
        vec![
            Position::new(self.x, self.y - 1), // N
            Position::new(self.x - 1, self.y), // W
            Position::new(self.x + 1, self.y), // E
            Position::new(self.x, self.y + 1), // S
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_distances() {
        let a = Position::new(1, 1);
        let b = Position::new(4, 5);

        assert_eq!(a.chebyshev_distance(b), 4);
        assert_eq!(a.distance_squared(b), 25);
        assert!((a.euclidean_distance(b) - 5.0).abs() < f64::EPSILON);
        assert_eq!(a.chebyshev_distance(a), 0);
    }

    #[test]
    fn test_cardinal_neighbours_are_one_step_away() {
        let center = Position::new(3, 3);
        let neighbours = center.cardinal_adjacent_positions();

        assert_eq!(neighbours.len(), 4);
        for pos in neighbours {
            assert_eq!(center.distance_squared(pos), 1);
            assert_eq!(center.chebyshev_distance(pos), 1);
        }
    }
}
