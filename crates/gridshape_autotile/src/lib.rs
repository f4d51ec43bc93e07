//! Four-neighbor shape autotiling
//!
//! This crate decides which edge or corner tile a grid cell should show and
//! how far that tile is turned, from nothing but its filled orthogonal
//! neighbors.
//!
//! # Features
//! - Six-way shape classification (`Inner`, `ThreeSide`, `Side`, `BigAngle`,
//!   `Angle`, `Outside`)
//! - Rotation lookup for a classified cell
//! - Template search over every category and quarter turn
//! - Validated, JSON-backed canonical template sets
//!
//! # Example
//!
//! ```rust,ignore
//! use gridshape_autotile::{GridPoint, MatchResult, TemplateMatcher};
//! use std::collections::HashSet;
//!
//! let filled: HashSet<GridPoint> = [(0, 0), (1, 0), (0, 1)]
//!     .into_iter()
//!     .map(GridPoint::from)
//!     .collect();
//!
//! let matcher = TemplateMatcher::default();
//! match matcher.match_cell(GridPoint::new(0, 0), &filled) {
//!     MatchResult::Matched { category, rotation } => println!("{category:?} at {rotation}"),
//!     MatchResult::NoMatch => println!("nothing to draw"),
//! }
//! ```

pub mod angle;
pub mod detect;
pub mod matcher;
pub mod rotation;
pub mod shape;
pub mod templates;

#[cfg(test)]
mod fixtures;

// Re-export main types at crate root
pub use angle::{find_angle, AngleError, MAX_SEARCH_STEPS};
pub use detect::{detect_cell, CellShape};
pub use matcher::{match_pattern_and_rotation, MatchResult, TemplateMatcher};
pub use rotation::{rotate_about_origin, rotate_point, Rotation};
pub use shape::{classify, ShapeCategory};
pub use templates::{
    load_templates, load_templates_from_bytes, parse_templates, save_templates, TemplateError,
    TemplateSet,
};

pub use gridshape_core::{
    checked_neighbors, is_outside, neighbors, present_neighbors, Direction, GridPoint, Occupancy,
};

// Re-export gridshape_core
pub use gridshape_core;
