//! Shape categories and the neighbor-count classifier
//!
//! A cell's shape is decided only by which of its four orthogonal neighbors
//! are filled. Diagonals are never consulted.

use gridshape_core::GridPoint;
use serde::{Deserialize, Serialize};

/// Shape of a cell's filled-neighbor configuration.
///
/// Declaration order is the matcher's search order, so the derived `Ord`
/// is relied upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShapeCategory {
    /// All four neighbors filled
    Inner,
    /// Three neighbors filled
    ThreeSide,
    /// Two opposite neighbors filled
    Side,
    /// Two perpendicular neighbors filled
    BigAngle,
    /// One neighbor filled
    Angle,
    /// No neighbors filled, or the cell is off the map
    Outside,
}

impl ShapeCategory {
    /// Categories that carry a canonical template, in search order
    pub const TEMPLATED: [ShapeCategory; 5] = [
        ShapeCategory::Inner,
        ShapeCategory::ThreeSide,
        ShapeCategory::Side,
        ShapeCategory::BigAngle,
        ShapeCategory::Angle,
    ];

    /// Number of filled neighbors this category describes
    pub fn neighbor_count(&self) -> usize {
        match self {
            ShapeCategory::Inner => 4,
            ShapeCategory::ThreeSide => 3,
            ShapeCategory::Side | ShapeCategory::BigAngle => 2,
            ShapeCategory::Angle => 1,
            ShapeCategory::Outside => 0,
        }
    }

    /// Get the display name of this category
    pub fn name(&self) -> &'static str {
        match self {
            ShapeCategory::Inner => "Inner",
            ShapeCategory::ThreeSide => "ThreeSide",
            ShapeCategory::Side => "Side",
            ShapeCategory::BigAngle => "BigAngle",
            ShapeCategory::Angle => "Angle",
            ShapeCategory::Outside => "Outside",
        }
    }
}

/// Two neighbors of `cell` are collinear when their offsets cancel out,
/// e.g. `(1, 0)` and `(-1, 0)`.
fn is_collinear_pair(cell: GridPoint, a: GridPoint, b: GridPoint) -> bool {
    let sum = |u: i32, v: i32| i64::from(u) + i64::from(v);
    sum(a.x, b.x) == 2 * i64::from(cell.x) && sum(a.y, b.y) == 2 * i64::from(cell.y)
}

/// Classify `cell` from its present neighbors.
///
/// `present` holds absolute neighbor coordinates, a subset of
/// [`neighbors`](gridshape_core::neighbors) in the same relative order.
/// Total over every count: anything other than 1..=4 is `Outside`.
pub fn classify(cell: GridPoint, present: &[GridPoint]) -> ShapeCategory {
    match present {
        [_] => ShapeCategory::Angle,
        [a, b] if is_collinear_pair(cell, *a, *b) => ShapeCategory::Side,
        [_, _] => ShapeCategory::BigAngle,
        [_, _, _] => ShapeCategory::ThreeSide,
        [_, _, _, _] => ShapeCategory::Inner,
        _ => ShapeCategory::Outside,
    }
}
