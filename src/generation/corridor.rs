//! # Corridor Rasterization
//!
//! L-shaped tunnels between two points, built from Bresenham line segments.

use crate::Position;
use log::trace;
use rand::Rng;
use std::iter::Chain;

/// Iterator over the cells of a Bresenham line, both endpoints included.
///
/// Consecutive cells are always 8-connected, whatever the slope.
///
/// # Examples
///
/// ```
/// use delve::{Line, Position};
///
/// let cells: Vec<_> = Line::new(Position::new(0, 0), Position::new(3, 1)).collect();
/// assert_eq!(cells.first(), Some(&Position::new(0, 0)));
/// assert_eq!(cells.last(), Some(&Position::new(3, 1)));
/// assert_eq!(cells.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Line {
    current: Position,
    end: Position,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl Line {
    /// Creates a line from `start` to `end`.
    pub fn new(start: Position, end: Position) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = -(end.y - start.y).abs();
        Self {
            current: start,
            end,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for Line {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.done {
            return None;
        }

        let cell = self.current;
        if cell == self.end {
            self.done = true;
            return Some(cell);
        }

        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.current.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.current.y += self.sy;
        }

        Some(cell)
    }
}

impl std::iter::FusedIterator for Line {}

/// An L-shaped tunnel: a line to the corner, then a line from the corner.
///
/// The corner cell is yielded twice, once as the end of the first leg and once
/// as the start of the second. Carving is idempotent so the repeat is harmless.
#[derive(Debug, Clone)]
pub struct Tunnel {
    corner: Position,
    cells: Chain<Line, Line>,
}

impl Tunnel {
    /// Builds a tunnel through an explicit corner.
    pub fn with_corner(start: Position, corner: Position, end: Position) -> Self {
        Self {
            corner,
            cells: Line::new(start, corner).chain(Line::new(corner, end)),
        }
    }

    /// The bend of the L.
    pub fn corner(&self) -> Position {
        self.corner
    }
}

impl Iterator for Tunnel {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        self.cells.next()
    }
}

/// Returns an L-shaped tunnel from `start` to `end`.
///
/// A fair coin picks the bend: horizontal-then-vertical through
/// `(end.x, start.y)`, or vertical-then-horizontal through `(start.x, end.y)`.
///
/// # Examples
///
/// ```
/// use delve::{tunnel_between, Position};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let start = Position::new(2, 2);
/// let end = Position::new(6, 5);
/// let cells: Vec<_> = tunnel_between(start, end, &mut rng).collect();
///
/// assert_eq!(cells.first(), Some(&start));
/// assert_eq!(cells.last(), Some(&end));
/// ```
pub fn tunnel_between<R: Rng + ?Sized>(start: Position, end: Position, rng: &mut R) -> Tunnel {
    let corner = if rng.gen_bool(0.5) {
        Position::new(end.x, start.y)
    } else {
        Position::new(start.x, end.y)
    };
    trace!(
        "Tunnel from {:?} to {:?} via corner {:?}",
        start,
        end,
        corner
    );

    Tunnel::with_corner(start, corner, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_connected(cells: &[Position]) {
        for pair in cells.windows(2) {
            assert!(
                pair[0].chebyshev_distance(pair[1]) <= 1,
                "gap between {:?} and {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_line_single_point() {
        let pos = Position::new(4, 4);
        let cells: Vec<_> = Line::new(pos, pos).collect();
        assert_eq!(cells, vec![pos]);
    }

    #[test]
    fn test_line_horizontal_and_vertical() {
        let cells: Vec<_> = Line::new(Position::new(5, 2), Position::new(1, 2)).collect();
        assert_eq!(
            cells,
            vec![
                Position::new(5, 2),
                Position::new(4, 2),
                Position::new(3, 2),
                Position::new(2, 2),
                Position::new(1, 2),
            ]
        );

        let cells: Vec<_> = Line::new(Position::new(0, 0), Position::new(0, 3)).collect();
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|pos| pos.x == 0));
    }

    #[test]
    fn test_line_steep_and_shallow_slopes() {
        let targets = [
            Position::new(7, 2),
            Position::new(-7, 2),
            Position::new(2, -7),
            Position::new(-2, -7),
            Position::new(5, 5),
        ];

        for target in targets {
            let cells: Vec<_> = Line::new(Position::origin(), target).collect();
            assert_eq!(cells.first(), Some(&Position::origin()));
            assert_eq!(cells.last(), Some(&target));
            assert_eq!(
                cells.len() as u32,
                Position::origin().chebyshev_distance(target) + 1
            );
            assert_connected(&cells);
        }
    }

    #[test]
    fn test_line_is_fused() {
        let mut line = Line::new(Position::origin(), Position::new(1, 0));
        assert!(line.next().is_some());
        assert!(line.next().is_some());
        assert!(line.next().is_none());
        assert!(line.next().is_none());
    }

    #[test]
    fn test_tunnel_with_corner_repeats_corner() {
        let start = Position::new(1, 1);
        let corner = Position::new(4, 1);
        let end = Position::new(4, 3);

        let cells: Vec<_> = Tunnel::with_corner(start, corner, end).collect();
        assert_eq!(
            cells,
            vec![
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(3, 1),
                Position::new(4, 1),
                Position::new(4, 1),
                Position::new(4, 2),
                Position::new(4, 3),
            ]
        );
    }

    #[test]
    fn test_tunnel_between_picks_one_of_two_corners() {
        let mut rng = StdRng::seed_from_u64(12345);
        let start = Position::new(3, 10);
        let end = Position::new(12, 4);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..64 {
            let tunnel = tunnel_between(start, end, &mut rng);
            let corner = tunnel.corner();
            assert!(corner == Position::new(12, 10) || corner == Position::new(3, 4));
            seen.insert(corner);

            let cells: Vec<_> = tunnel.collect();
            assert_eq!(cells.first(), Some(&start));
            assert_eq!(cells.last(), Some(&end));
            assert_connected(&cells);
        }

        // 64 fair flips landing on one side has probability 2^-63
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_tunnel_between_same_point() {
        let mut rng = StdRng::seed_from_u64(3);
        let pos = Position::new(6, 6);
        let cells: Vec<_> = tunnel_between(pos, pos, &mut rng).collect();
        assert_eq!(cells, vec![pos, pos]);
    }
}
