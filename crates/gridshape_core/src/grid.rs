//! Grid geometry primitives
//!
//! This module provides the integer coordinate types used everywhere else:
//! - `GridPoint` - An `(x, y)` cell coordinate with lexicographic ordering
//! - `Direction` - The four orthogonal directions in neighbor order
//! - `neighbors` - The four orthogonal neighbors of a cell
//! - `is_outside` - Bounds check against a rectangular map

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Integer cell coordinate on a 2D grid.
///
/// Ordering is lexicographic: `x` first, then `y`. Field order matters for
/// the derived `Ord`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Component-wise addition, `None` if either coordinate leaves `i32`
    pub fn checked_add(self, rhs: GridPoint) -> Option<GridPoint> {
        Some(Self::new(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }

    /// True for the four orthogonal unit offsets
    pub fn is_unit(self) -> bool {
        matches!((self.x, self.y), (1, 0) | (-1, 0) | (0, 1) | (0, -1))
    }
}

impl Add for GridPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for GridPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for GridPoint {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<GridPoint> for (i32, i32) {
    fn from(point: GridPoint) -> Self {
        (point.x, point.y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orthogonal direction, declared in neighbor enumeration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// +x
    East,
    /// +y
    North,
    /// -x
    West,
    /// -y
    South,
}

impl Direction {
    /// All directions in the order `neighbors` returns them
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    /// Unit offset for this direction
    pub const fn offset(self) -> GridPoint {
        match self {
            Direction::East => GridPoint::new(1, 0),
            Direction::North => GridPoint::new(0, 1),
            Direction::West => GridPoint::new(-1, 0),
            Direction::South => GridPoint::new(0, -1),
        }
    }

    /// Direction matching a unit offset, if it is one
    pub fn from_offset(offset: GridPoint) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.offset() == offset)
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
        }
    }

    /// Get the display name of this direction
    pub fn name(&self) -> &'static str {
        match self {
            Direction::East => "East",
            Direction::North => "North",
            Direction::West => "West",
            Direction::South => "South",
        }
    }
}

/// The four orthogonal neighbors of `cell` in fixed order `[+x, +y, -x, -y]`.
///
/// Callers index into the result positionally, so the order is part of the
/// contract.
///
/// # Panics
///
/// If `cell` sits on the edge of the `i32` range, where a neighbor has no
/// coordinate. Use [`checked_neighbors`] for arbitrary cells.
pub fn neighbors(cell: GridPoint) -> [GridPoint; 4] {
    Direction::ALL.map(|d| cell + d.offset())
}

/// [`neighbors`] with `None` in place of any neighbor outside the `i32` range
pub fn checked_neighbors(cell: GridPoint) -> [Option<GridPoint>; 4] {
    Direction::ALL.map(|d| cell.checked_add(d.offset()))
}

/// Check if a cell lies outside a `map_width` x `map_height` map anchored at the origin
pub fn is_outside(cell: GridPoint, map_height: i32, map_width: i32) -> bool {
    cell.x < 0 || cell.x >= map_width || cell.y < 0 || cell.y >= map_height
}
