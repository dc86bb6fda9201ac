//! # Dungeon Generation
//!
//! Assembles a full dungeon from rectangular and circular rooms.
//!
//! Each rectangular room slot gets one placement. Every time a rectangle is
//! accepted, `circ_rooms` circular slots are attempted right after it, bounded
//! by that rectangle's footprint (see [`CircleBounds`]). Consecutive accepted
//! rooms are joined by L-shaped tunnels and the player spawns at the center of
//! the first room accepted.

use crate::generation::{sample_circle, sample_rectangle};
use crate::{
    CircleBounds, DelveError, DelveResult, GameMap, GenerationConfig, Generator, PlacementEngine,
    Position, Room, SpawnSink, TileType,
};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// A generated map together with the rooms that shaped it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    /// The carved floor/wall grid
    pub map: GameMap,
    /// Accepted rooms in placement order
    pub rooms: Vec<Room>,
    /// Center of the first accepted room, if any room was accepted
    pub spawn: Option<Position>,
}

/// Room-and-corridor dungeon assembler.
///
/// # Examples
///
/// ```
/// use delve::{DungeonGenerator, GenerationConfig, Generator};
///
/// let config = GenerationConfig::for_testing(12345);
/// let mut rng = delve::generation::utils::create_rng(&config);
///
/// let dungeon = DungeonGenerator::new().generate(&config, &mut rng).unwrap();
/// assert_eq!(dungeon.spawn, dungeon.rooms.first().map(|room| room.center()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DungeonGenerator;

impl DungeonGenerator {
    /// Creates a new dungeon generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates a dungeon, writing the spawn point into `player`.
    ///
    /// The sink is written at most once: when the first room is accepted.
    pub fn assemble<R, S>(
        &self,
        config: &GenerationConfig,
        rng: &mut R,
        player: &mut S,
    ) -> DelveResult<Dungeon>
    where
        R: Rng + ?Sized,
        S: SpawnSink + ?Sized,
    {
        config.validate()?;

        let mut map = GameMap::new(config.map_width, config.map_height);
        let mut engine = PlacementEngine::from_config(config);
        let mut spawn = None;

        for slot in 0..config.rect_rooms {
            let Some(placed) =
                engine.place(&mut map, rng, |rng| sample_rectangle(rng, config))?
            else {
                debug!("Rectangular slot {} left empty", slot);
                continue;
            };
            if placed.first {
                spawn = Some(Self::record_spawn(placed.room.center(), player));
            }

            let anchor = placed.room;
            for _ in 0..config.circ_rooms {
                let placed =
                    engine.place(&mut map, rng, |rng| sample_circle(rng, config, &anchor))?;
                if let Some(placed) = placed.filter(|placed| placed.first) {
                    spawn = Some(Self::record_spawn(placed.room.center(), player));
                }
            }
        }

        let rooms = engine.into_rooms();
        info!(
            "Generated {}x{} dungeon with {} rooms ({} floor tiles)",
            map.width,
            map.height,
            rooms.len(),
            map.floor_count()
        );
        if rooms.is_empty() && config.rect_rooms > 0 {
            warn!("No rooms were placed; the map is solid wall");
        }

        Ok(Dungeon { map, rooms, spawn })
    }

    fn record_spawn<S: SpawnSink + ?Sized>(center: Position, player: &mut S) -> Position {
        debug!("Player spawn set to {:?}", center);
        player.set_spawn(center);
        center
    }

    /// Checks that every floor tile is reachable from the spawn point.
    fn validate_connectivity(&self, dungeon: &Dungeon) -> DelveResult<()> {
        let floor_count = dungeon.map.floor_count();
        if floor_count == 0 {
            return Ok(());
        }

        let start = match dungeon.spawn {
            Some(pos) if dungeon.map.is_walkable(pos) => pos,
            _ => {
                return Err(DelveError::GenerationFailed(
                    "Map has floor tiles but the spawn point is not on one".to_string(),
                ))
            }
        };

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(pos) = queue.pop_front() {
            for adjacent_pos in pos.cardinal_adjacent_positions() {
                if dungeon.map.is_walkable(adjacent_pos) && visited.insert(adjacent_pos) {
                    queue.push_back(adjacent_pos);
                }
            }
        }

        if visited.len() != floor_count {
            return Err(DelveError::GenerationFailed(format!(
                "{} of {} floor tiles are unreachable from the spawn point",
                floor_count - visited.len(),
                floor_count
            )));
        }

        Ok(())
    }
}

impl Generator<Dungeon> for DungeonGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> DelveResult<Dungeon> {
        let mut spawn: Option<Position> = None;
        let dungeon = self.assemble(config, rng, &mut spawn)?;
        self.validate(&dungeon, config)?;
        Ok(dungeon)
    }

    fn validate(&self, dungeon: &Dungeon, config: &GenerationConfig) -> DelveResult<()> {
        let map = &dungeon.map;
        if map.width != config.map_width
            || map.height != config.map_height
            || map.tiles.len() != config.map_height as usize
            || map.tiles.iter().any(|row| row.len() != config.map_width as usize)
        {
            return Err(DelveError::GenerationFailed(format!(
                "Map is not {}x{}",
                config.map_width, config.map_height
            )));
        }

        for (i, room) in dungeon.rooms.iter().enumerate() {
            if let Some(other) = dungeon.rooms[i + 1..].iter().find(|other| room.intersects(other)) {
                return Err(DelveError::GenerationFailed(format!(
                    "Rooms at {:?} and {:?} overlap",
                    room.center(),
                    other.center()
                )));
            }
        }

        if dungeon.spawn != dungeon.rooms.first().map(Room::center) {
            return Err(DelveError::GenerationFailed(
                "Spawn point is not the center of the first room".to_string(),
            ));
        }

        if config.circle_bounds == CircleBounds::Radius {
            let out_of_bounds = dungeon.rooms.iter().any(|room| match room {
                Room::Circular(circle) => !fits(circle.center, circle.radius, map),
                Room::Rectangular(_) => false,
            });
            if out_of_bounds {
                return Err(DelveError::GenerationFailed(
                    "A radius-bounded circular room leaves the map".to_string(),
                ));
            }
        }

        self.validate_connectivity(dungeon)
    }

    fn generator_type(&self) -> &'static str {
        "DungeonGenerator"
    }
}

fn fits(center: Position, radius: u32, map: &GameMap) -> bool {
    let r = radius as i32;
    map.is_valid_position(Position::new(center.x - r, center.y - r))
        && map.is_valid_position(Position::new(center.x + r, center.y + r))
}

/// Generates a dungeon map and writes the player's spawn point into `player`.
///
/// This is the main entry point. The configuration is validated first; the
/// returned map always has the configured dimensions.
///
/// # Examples
///
/// ```
/// use delve::{generate_dungeon, GenerationConfig, Player, Position};
///
/// let config = GenerationConfig::new(2024);
/// let mut rng = delve::generation::utils::create_rng(&config);
/// let mut player = Player::new("Hero".to_string(), Position::origin());
///
/// let map = generate_dungeon(&config, &mut rng, &mut player).unwrap();
/// assert!(map.is_walkable(player.position()));
/// ```
pub fn generate_dungeon<R, S>(
    config: &GenerationConfig,
    rng: &mut R,
    player: &mut S,
) -> DelveResult<GameMap>
where
    R: Rng + ?Sized,
    S: SpawnSink + ?Sized,
{
    let dungeon = DungeonGenerator::new().assemble(config, rng, player)?;
    Ok(dungeon.map)
}

impl Dungeon {
    /// Counts accepted rooms of each shape as `(rectangular, circular)`.
    pub fn room_counts(&self) -> (usize, usize) {
        let rectangular = self
            .rooms
            .iter()
            .filter(|room| matches!(room, Room::Rectangular(_)))
            .count();
        (rectangular, self.rooms.len() - rectangular)
    }

    /// The tile under the spawn point, if there is one.
    pub fn spawn_tile(&self) -> Option<TileType> {
        self.spawn.and_then(|pos| self.map.get_tile(pos))
    }
}
