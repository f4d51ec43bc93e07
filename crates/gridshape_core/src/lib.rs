//! Core grid types for gridshape
//!
//! This crate provides the plain data every autotile query is built from:
//! - `GridPoint` - Integer cell coordinate with lexicographic ordering
//! - `Direction` - The four orthogonal directions in neighbor order
//! - `neighbors` / `checked_neighbors` / `is_outside` - Neighbor enumeration and bounds checks
//! - `Occupancy` - Read-only membership view over filled cells

mod grid;
mod occupancy;

pub use grid::{checked_neighbors, is_outside, neighbors, Direction, GridPoint};
pub use occupancy::{present_neighbors, Occupancy};
