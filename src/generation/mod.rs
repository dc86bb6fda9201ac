//! # Generation Module
//!
//! Procedural dungeon generation: room shapes, corridors, placement and assembly.
//!
//! This module provides the configuration that drives generation, the
//! [`Generator`] trait implemented by the dungeon assembler, and helpers for
//! seeding the random number generator so runs can be reproduced exactly.

pub mod corridor;
pub mod dungeon;
pub mod placement;
pub mod shapes;

pub use corridor::*;
pub use dungeon::*;
pub use placement::*;
pub use shapes::*;

use crate::config::*;
use crate::{DelveError, DelveResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// How circular room centers are bounded when sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircleBounds {
    /// Bound the center by the size of the most recently placed rectangular
    /// room, exactly like rectangles bound their own corner. The circle's
    /// radius plays no part, so circles may hang off the top and left edges
    /// (their carved cells are clipped to the map). This coupling looks
    /// unintended but is kept as the default for layout compatibility.
    #[default]
    PreviousRoom,
    /// Bound the center by the circle's own radius so the whole disc fits.
    Radius,
}

impl FromStr for CircleBounds {
    type Err = DelveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "previous-room" => Ok(CircleBounds::PreviousRoom),
            "radius" => Ok(CircleBounds::Radius),
            other => Err(DelveError::InvalidConfig(format!(
                "unknown circle bounds '{}', expected 'previous-room' or 'radius'",
                other
            ))),
        }
    }
}

/// Configuration for dungeon generation.
///
/// Sizes are measured in tiles. Rectangular room sizes include the one-tile
/// wall on each side, so a room of size 4 carves a 3×3 floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Number of rectangular room slots
    pub rect_rooms: u32,
    /// Minimum rectangular room side
    pub room_min_size: u32,
    /// Maximum rectangular room side
    pub room_max_size: u32,
    /// Map width in tiles
    pub map_width: u32,
    /// Map height in tiles
    pub map_height: u32,
    /// Circular room slots attempted after each placed rectangular room
    pub circ_rooms: u32,
    /// Maximum circular room radius
    pub max_radius: u32,
    /// Minimum circular room radius
    pub min_radius: u32,
    /// Candidates sampled per room slot before the slot is abandoned
    pub placement_attempts: u32,
    /// How circular room centers are bounded
    pub circle_bounds: CircleBounds,
}

impl GenerationConfig {
    /// Creates a configuration with the default parameters and the given seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(42);
    /// assert_eq!(config.seed, 42);
    /// assert!(config.room_max_size >= config.room_min_size);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rect_rooms: DEFAULT_RECT_ROOMS,
            room_min_size: DEFAULT_ROOM_MIN_SIZE,
            room_max_size: DEFAULT_ROOM_MAX_SIZE,
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            circ_rooms: DEFAULT_CIRC_ROOMS,
            max_radius: DEFAULT_MAX_RADIUS,
            min_radius: DEFAULT_MIN_RADIUS,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            circle_bounds: CircleBounds::PreviousRoom,
        }
    }

    /// Creates a configuration for testing with a smaller map.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            rect_rooms: 4,
            room_min_size: 3,
            room_max_size: 6,
            map_width: 40,
            map_height: 24,
            circ_rooms: 1,
            max_radius: 3,
            min_radius: 1,
            placement_attempts: 1,
            circle_bounds: CircleBounds::PreviousRoom,
        }
    }

    /// Parses a JSON configuration and validates it. Missing fields take
    /// their default values.
    pub fn from_json_str(json: &str) -> DelveResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON configuration file and validates it.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> DelveResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Checks every precondition generation relies on.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::GenerationConfig;
    ///
    /// let mut config = GenerationConfig::new(1);
    /// config.room_min_size = 12;
    /// config.room_max_size = 8;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> DelveResult<()> {
        let smaller_side = self.map_width.min(self.map_height);

        if self.room_min_size < 1 {
            return Err(invalid("room_min_size must be at least 1".to_string()));
        }
        if self.room_min_size > self.room_max_size {
            return Err(invalid(format!(
                "room_min_size ({}) exceeds room_max_size ({})",
                self.room_min_size, self.room_max_size
            )));
        }
        if self.room_max_size >= smaller_side {
            return Err(invalid(format!(
                "room_max_size ({}) must be smaller than both map dimensions ({}x{})",
                self.room_max_size, self.map_width, self.map_height
            )));
        }
        if self.map_width > i32::MAX as u32 || self.map_height > i32::MAX as u32 {
            return Err(invalid(format!(
                "map dimensions {}x{} exceed the coordinate range",
                self.map_width, self.map_height
            )));
        }
        if self.min_radius < 1 {
            return Err(invalid("min_radius must be at least 1".to_string()));
        }
        if self.min_radius > self.max_radius {
            return Err(invalid(format!(
                "min_radius ({}) exceeds max_radius ({})",
                self.min_radius, self.max_radius
            )));
        }
        if self.max_radius > MAX_RADIUS {
            return Err(invalid(format!(
                "max_radius ({}) exceeds the coordinate range (at most {})",
                self.max_radius, MAX_RADIUS
            )));
        }
        if self.placement_attempts < 1 {
            return Err(invalid("placement_attempts must be at least 1".to_string()));
        }
        if self.circle_bounds == CircleBounds::Radius
            && self.max_radius.saturating_mul(2) >= smaller_side
        {
            return Err(invalid(format!(
                "max_radius ({}) is too large for a {}x{} map with radius-bounded circles",
                self.max_radius, self.map_width, self.map_height
            )));
        }

        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Largest radius whose disc bounds stay inside `i32` coordinates.
const MAX_RADIUS: u32 = i32::MAX as u32 / 2;

fn invalid(message: String) -> DelveError {
    DelveError::InvalidConfig(message)
}

/// Trait for procedural generators.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> DelveResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> DelveResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }
}
