//! Read-only view of which cells are filled
//!
//! The map storage owns the occupancy data; everything in this workspace
//! only asks membership questions of it for the duration of one call.

use crate::grid::{checked_neighbors, GridPoint};
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// Membership query over the currently filled cells of a map
pub trait Occupancy {
    fn is_occupied(&self, point: GridPoint) -> bool;
}

impl<S: BuildHasher> Occupancy for HashSet<GridPoint, S> {
    fn is_occupied(&self, point: GridPoint) -> bool {
        self.contains(&point)
    }
}

impl Occupancy for BTreeSet<GridPoint> {
    fn is_occupied(&self, point: GridPoint) -> bool {
        self.contains(&point)
    }
}

/// Linear scan. Fine for small caches, prefer a set for whole maps.
impl Occupancy for [GridPoint] {
    fn is_occupied(&self, point: GridPoint) -> bool {
        self.contains(&point)
    }
}

impl Occupancy for Vec<GridPoint> {
    fn is_occupied(&self, point: GridPoint) -> bool {
        self.as_slice().is_occupied(point)
    }
}

impl<T: Occupancy + ?Sized> Occupancy for &T {
    fn is_occupied(&self, point: GridPoint) -> bool {
        (**self).is_occupied(point)
    }
}

/// Neighbors of `cell` that are occupied, keeping `neighbors` order.
/// Neighbors past the edge of the `i32` range count as empty.
pub fn present_neighbors<O>(cell: GridPoint, occupancy: &O) -> Vec<GridPoint>
where
    O: Occupancy + ?Sized,
{
    checked_neighbors(cell)
        .into_iter()
        .flatten()
        .filter(|&n| occupancy.is_occupied(n))
        .collect()
}
