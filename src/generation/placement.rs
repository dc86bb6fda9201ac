//! # Room Placement
//!
//! Generate-and-test placement of rooms onto the map.
//!
//! A room slot samples a candidate, throws it away if it touches any room
//! already accepted, and otherwise carves it and links it to the previously
//! accepted room with a tunnel. By default a slot gets exactly one candidate:
//! a rejected slot simply contributes nothing to the map.

use crate::{
    tunnel_between, CircleBounds, CircularRoom, DelveResult, GameMap, GenerationConfig, Position,
    RectangularRoom, Room,
};
use log::debug;
use rand::Rng;

/// Outcome of a successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed<T = Room> {
    /// The accepted room, as the sampler produced it
    pub room: T,
    /// Whether this is the first room accepted in the session
    pub first: bool,
}

/// Tracks the rooms accepted during one generation session.
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    attempts: u32,
    rooms: Vec<Room>,
}

impl PlacementEngine {
    /// Creates an engine that samples up to `attempts` candidates per slot.
    pub fn new(attempts: u32) -> Self {
        Self {
            attempts: attempts.max(1),
            rooms: Vec::new(),
        }
    }

    /// Creates an engine configured from generation parameters.
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(config.placement_attempts)
    }

    /// Rooms accepted so far, in placement order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Consumes the engine and returns the accepted rooms.
    pub fn into_rooms(self) -> Vec<Room> {
        self.rooms
    }

    /// Fills one room slot.
    ///
    /// `sample` is called once per attempt to produce a candidate. Returns
    /// `None` when every candidate overlapped an accepted room.
    pub fn place<T, R, F>(
        &mut self,
        map: &mut GameMap,
        rng: &mut R,
        mut sample: F,
    ) -> DelveResult<Option<Placed<T>>>
    where
        T: Copy + Into<Room>,
        R: Rng + ?Sized,
        F: FnMut(&mut R) -> T,
    {
        for attempt in 1..=self.attempts {
            let shape = sample(rng);
            let candidate: Room = shape.into();

            if let Some(blocker) = self.rooms.iter().find(|room| room.intersects(&candidate)) {
                debug!(
                    "Rejected {:?} room at {:?} (attempt {}/{}): overlaps room at {:?}",
                    candidate.kind(),
                    candidate.center(),
                    attempt,
                    self.attempts,
                    blocker.center()
                );
                continue;
            }

            let first = self.accept(map, rng, candidate)?;
            return Ok(Some(Placed { room: shape, first }));
        }

        Ok(None)
    }

    /// Carves an accepted room and tunnels to it from the previous one.
    /// Returns whether it is the first room of the session.
    fn accept<R: Rng + ?Sized>(
        &mut self,
        map: &mut GameMap,
        rng: &mut R,
        room: Room,
    ) -> DelveResult<bool> {
        map.carve_all(room.interior_cells(map.width, map.height))?;

        let first = match self.rooms.last() {
            None => true,
            Some(previous) => {
                map.carve_all(tunnel_between(previous.center(), room.center(), rng))?;
                false
            }
        };

        debug!(
            "Placed {:?} room #{} centered at {:?}",
            room.kind(),
            self.rooms.len(),
            room.center()
        );
        self.rooms.push(room);

        Ok(first)
    }
}

/// Samples a rectangular room whose whole footprint lies inside the map.
///
/// Draws width, height, x and y in that order.
pub fn sample_rectangle<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GenerationConfig,
) -> RectangularRoom {
    let width = rng.gen_range(config.room_min_size..=config.room_max_size);
    let height = rng.gen_range(config.room_min_size..=config.room_max_size);

    let x = rng.gen_range(0..=config.map_width - width - 1);
    let y = rng.gen_range(0..=config.map_height - height - 1);

    RectangularRoom::new(x as i32, y as i32, width, height)
}

/// Samples a circular room. Draws the radius, then the center x and y.
///
/// With [`CircleBounds::PreviousRoom`] the center range is the one the
/// `previous` rectangle was sampled from; with [`CircleBounds::Radius`] it
/// keeps the whole disc on the map.
pub fn sample_circle<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GenerationConfig,
    previous: &RectangularRoom,
) -> CircularRoom {
    let radius = rng.gen_range(config.min_radius..=config.max_radius);

    let center = match config.circle_bounds {
        CircleBounds::PreviousRoom => Position::new(
            rng.gen_range(0..=config.map_width - previous.width() - 1) as i32,
            rng.gen_range(0..=config.map_height - previous.height() - 1) as i32,
        ),
        CircleBounds::Radius => Position::new(
            rng.gen_range(radius..=config.map_width - radius - 1) as i32,
            rng.gen_range(radius..=config.map_height - radius - 1) as i32,
        ),
    };

    CircularRoom::new(center, radius)
}
