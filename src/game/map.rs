//! # Map Grid
//!
//! The fixed-size floor/wall grid produced by dungeon generation.

use crate::{DelveError, DelveResult, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two states a map cell can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileType {
    /// Solid rock; the state every cell starts in
    #[default]
    Wall,
    /// Carved, walkable ground
    Floor,
}

impl TileType {
    /// Whether entities can walk on this tile.
    pub fn is_walkable(self) -> bool {
        matches!(self, TileType::Floor)
    }

    /// Single-character form used by the plain-text dump.
    pub fn glyph(self) -> char {
        match self {
            TileType::Wall => '#',
            TileType::Floor => '.',
        }
    }
}

/// A `width × height` grid of tiles, indexed as `tiles[y][x]`.
///
/// # Examples
///
/// ```
/// use delve::{GameMap, Position, TileType};
///
/// let mut map = GameMap::new(10, 5);
/// assert_eq!(map.get_tile(Position::new(3, 2)), Some(TileType::Wall));
///
/// assert!(map.carve(Position::new(3, 2)).unwrap());
/// assert_eq!(map.get_tile(Position::new(3, 2)), Some(TileType::Floor));
/// assert_eq!(map.get_tile(Position::new(10, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    /// Width of the map in tiles
    pub width: u32,
    /// Height of the map in tiles
    pub height: u32,
    /// Row-major tile storage
    pub tiles: Vec<Vec<TileType>>,
}

impl GameMap {
    /// Creates a map filled entirely with walls.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![vec![TileType::Wall; width as usize]; height as usize],
        }
    }

    /// Checks if a position lies inside the map.
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// Gets the tile at a position, or `None` outside the map.
    pub fn get_tile(&self, pos: Position) -> Option<TileType> {
        if !self.is_valid_position(pos) {
            return None;
        }
        Some(self.tiles[pos.y as usize][pos.x as usize])
    }

    /// Overwrites the tile at a position.
    pub fn set_tile(&mut self, pos: Position, tile: TileType) -> DelveResult<()> {
        if !self.is_valid_position(pos) {
            return Err(DelveError::OutOfBounds { x: pos.x, y: pos.y });
        }
        self.tiles[pos.y as usize][pos.x as usize] = tile;
        Ok(())
    }

    /// Turns a cell into floor. Returns whether the cell changed.
    pub fn carve(&mut self, pos: Position) -> DelveResult<bool> {
        let changed = self.get_tile(pos) != Some(TileType::Floor);
        self.set_tile(pos, TileType::Floor)?;
        Ok(changed)
    }

    /// Carves every position yielded by `cells`. Returns how many cells changed.
    pub fn carve_all<I>(&mut self, cells: I) -> DelveResult<usize>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut changed = 0;
        for pos in cells {
            if self.carve(pos)? {
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// Checks if the tile at a position can be walked on.
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.get_tile(pos).is_some_and(TileType::is_walkable)
    }

    /// Counts the floor tiles on the map.
    pub fn floor_count(&self) -> usize {
        self.tiles
            .iter()
            .flat_map(|row| row.iter())
            .filter(|tile| tile.is_walkable())
            .count()
    }

    /// Lists every floor position in row-major order.
    pub fn floor_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();

        for (y, row) in self.tiles.iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                if tile.is_walkable() {
                    positions.push(Position::new(x as i32, y as i32));
                }
            }
        }

        positions
    }
}

impl fmt::Display for GameMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.tiles {
            let line: String = row.iter().map(|tile| tile.glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
