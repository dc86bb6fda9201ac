//! # Delve
//!
//! Procedural dungeon generation for grid-based roguelikes.
//!
//! ## Architecture Overview
//!
//! Delve builds a walkable grid out of non-overlapping rooms of two shapes and
//! links them with L-shaped corridors. The pieces, leaf first:
//!
//! - **Shapes**: rectangular and circular rooms with a center, the set of cells
//!   they carve, and intersection tests against every other shape
//! - **Corridors**: Bresenham-rasterized L-shaped tunnels between two points
//! - **Placement**: samples a candidate room, rejects it on overlap, carves it on
//!   acceptance and links it to the previous room
//! - **Assembly**: alternates rectangular rooms with nested circular rooms and
//!   records the player's spawn point
//!
//! ## Example
//!
//! ```
//! use delve::{generate_dungeon, GenerationConfig, Position};
//!
//! let config = GenerationConfig::for_testing(7);
//! let mut rng = delve::generation::utils::create_rng(&config);
//! let mut spawn = Position::origin();
//!
//! let map = generate_dungeon(&config, &mut rng, &mut spawn).unwrap();
//! assert_eq!(map.width, config.map_width);
//! assert_eq!(map.height, config.map_height);
//! ```

pub mod game;
pub mod generation;

pub use game::*;
pub use generation::*;

pub use generation::{
    generate_dungeon, tunnel_between, CircleBounds, CircularRoom, Dungeon, DungeonGenerator,
    GenerationConfig, Generator, Line, PlacementEngine, RectangularRoom, Room, RoomKind, Tunnel,
};

/// Core error type for the Delve generator.
#[derive(thiserror::Error, Debug)]
pub enum DelveError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Generation parameters violate a precondition
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A tile write fell outside the grid
    #[error("Position ({x}, {y}) is outside the map")]
    OutOfBounds { x: i32, y: i32 },

    /// Generated content failed validation
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Delve codebase.
pub type DelveResult<T> = Result<T, DelveError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default generation constants.
pub mod config {
    /// Default map width in tiles
    pub const DEFAULT_MAP_WIDTH: u32 = 80;

    /// Default map height in tiles
    pub const DEFAULT_MAP_HEIGHT: u32 = 45;

    /// Default number of rectangular room slots
    pub const DEFAULT_RECT_ROOMS: u32 = 3;

    /// Default number of circular room slots nested under each rectangular room
    pub const DEFAULT_CIRC_ROOMS: u32 = 2;

    /// Default minimum rectangular room side, walls included
    pub const DEFAULT_ROOM_MIN_SIZE: u32 = 2;

    /// Default maximum rectangular room side, walls included
    pub const DEFAULT_ROOM_MAX_SIZE: u32 = 10;

    /// Default minimum circular room radius
    pub const DEFAULT_MIN_RADIUS: u32 = 1;

    /// Default maximum circular room radius
    pub const DEFAULT_MAX_RADIUS: u32 = 4;

    /// Default number of placement attempts per room slot
    pub const DEFAULT_PLACEMENT_ATTEMPTS: u32 = 1;
}
