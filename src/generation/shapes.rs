//! # Room Shapes
//!
//! Rectangular and circular room primitives and the intersection rules between them.
//!
//! Every shape exposes the same three capabilities: a center point, the set of
//! cells it carves to floor, and an overlap test against any other shape. The
//! [`Room`] enum ties the variants together; adding a shape means adding one
//! variant and its arms in [`Room::intersects`].

use crate::Position;
use serde::{Deserialize, Serialize};

/// An axis-aligned room described by its corners.
///
/// `(x1, y1)` is the top-left corner and `(x2, y2)` is `origin + size`. Both
/// corners are wall cells; only the cells strictly between them are carved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RectangularRoom {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RectangularRoom {
    /// Creates a room from its top-left corner and size.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Position, RectangularRoom};
    ///
    /// let room = RectangularRoom::new(5, 5, 10, 8);
    /// assert_eq!((room.x2, room.y2), (15, 13));
    /// assert_eq!(room.center(), Position::new(10, 9));
    /// ```
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width as i32,
            y2: y + height as i32,
        }
    }

    /// Width of the room, walls included.
    pub fn width(&self) -> u32 {
        (self.x2 - self.x1) as u32
    }

    /// Height of the room, walls included.
    pub fn height(&self) -> u32 {
        (self.y2 - self.y1) as u32
    }

    /// Integer midpoint of the two corners.
    pub fn center(&self) -> Position {
        Position::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Cells strictly inside the border, in row-major order.
    pub fn interior_cells(&self) -> Vec<Position> {
        let mut cells = Vec::new();

        for y in (self.y1 + 1)..self.y2 {
            for x in (self.x1 + 1)..self.x2 {
                cells.push(Position::new(x, y));
            }
        }

        cells
    }

    /// Overlap test against another rectangle. Shared edges count as overlap,
    /// which keeps a wall between neighbouring rooms.
    pub fn intersects_rectangle(&self, other: &RectangularRoom) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    /// Overlap test against a circle, using the point of this rectangle
    /// closest to the circle's center.
    pub fn intersects_circle(&self, circle: &CircularRoom) -> bool {
        let closest = Position::new(
            circle.center.x.clamp(self.x1, self.x2),
            circle.center.y.clamp(self.y1, self.y2),
        );
        closest.distance_squared(circle.center) <= circle.radius_squared()
    }
}

/// A round room described by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CircularRoom {
    pub center: Position,
    pub radius: u32,
}

impl CircularRoom {
    /// Creates a room from its center and radius.
    pub fn new(center: Position, radius: u32) -> Self {
        Self { center, radius }
    }

    /// The stored center point.
    pub fn center(&self) -> Position {
        self.center
    }

    fn radius_squared(&self) -> i64 {
        let r = i64::from(self.radius);
        r.saturating_mul(r)
    }

    /// Cells whose Euclidean distance to the center is strictly below the
    /// radius, restricted to a `width × height` grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{CircularRoom, Position};
    ///
    /// let room = CircularRoom::new(Position::new(5, 5), 3);
    /// let cells = room.interior_cells(20, 20);
    /// assert!(cells.contains(&Position::new(7, 5)));
    /// assert!(!cells.contains(&Position::new(8, 5)));
    /// ```
    pub fn interior_cells(&self, width: u32, height: u32) -> Vec<Position> {
        let r = i64::from(self.radius);
        let (cx, cy) = (i64::from(self.center.x), i64::from(self.center.y));
        let x_start = (cx - r).max(0);
        let x_end = (cx + r + 1).min(i64::from(width));
        let y_start = (cy - r).max(0);
        let y_end = (cy + r + 1).min(i64::from(height));

        let mut cells = Vec::new();
        for y in y_start..y_end {
            for x in x_start..x_end {
                // Clamped to the grid, so both fit in i32
                let pos = Position::new(x as i32, y as i32);
                if pos.euclidean_distance(self.center) < self.radius as f64 {
                    cells.push(pos);
                }
            }
        }

        cells
    }

    /// Overlap test against another circle.
    pub fn intersects_circle(&self, other: &CircularRoom) -> bool {
        let combined = i64::from(self.radius) + i64::from(other.radius);
        self.center.distance_squared(other.center) <= combined.saturating_mul(combined)
    }
}

/// The shape kinds a placement can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    Rectangular,
    Circular,
}

/// A placed room of any shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Room {
    Rectangular(RectangularRoom),
    Circular(CircularRoom),
}

impl Room {
    /// Which shape this room is.
    pub fn kind(&self) -> RoomKind {
        match self {
            Room::Rectangular(_) => RoomKind::Rectangular,
            Room::Circular(_) => RoomKind::Circular,
        }
    }

    /// The room's center point, used for spawning and corridor endpoints.
    pub fn center(&self) -> Position {
        match self {
            Room::Rectangular(rect) => rect.center(),
            Room::Circular(circle) => circle.center(),
        }
    }

    /// Cells this room carves on a `width × height` grid.
    pub fn interior_cells(&self, width: u32, height: u32) -> Vec<Position> {
        match self {
            Room::Rectangular(rect) => rect.interior_cells(),
            Room::Circular(circle) => circle.interior_cells(width, height),
        }
    }

    /// Symmetric overlap test across every pair of shapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{CircularRoom, Position, RectangularRoom, Room};
    ///
    /// let rect = Room::from(RectangularRoom::new(0, 0, 4, 4));
    /// let near = Room::from(CircularRoom::new(Position::new(6, 2), 2));
    /// let far = Room::from(CircularRoom::new(Position::new(9, 2), 2));
    ///
    /// assert!(rect.intersects(&near) && near.intersects(&rect));
    /// assert!(!rect.intersects(&far) && !far.intersects(&rect));
    /// ```
    pub fn intersects(&self, other: &Room) -> bool {
        match (self, other) {
            (Room::Rectangular(a), Room::Rectangular(b)) => a.intersects_rectangle(b),
            (Room::Rectangular(rect), Room::Circular(circle))
            | (Room::Circular(circle), Room::Rectangular(rect)) => rect.intersects_circle(circle),
            (Room::Circular(a), Room::Circular(b)) => a.intersects_circle(b),
        }
    }
}

impl From<RectangularRoom> for Room {
    fn from(room: RectangularRoom) -> Self {
        Room::Rectangular(room)
    }
}

impl From<CircularRoom> for Room {
    fn from(room: CircularRoom) -> Self {
        Room::Circular(room)
    }
}
