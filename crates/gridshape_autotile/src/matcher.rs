//! Template search over an occupancy view
//!
//! [`TemplateMatcher`] tries every canonical template at every quarter turn
//! and reports the first one whose cells are all filled around the query
//! cell. Categories are tried from most neighbors to fewest, so the first
//! hit is also the tightest fit.

use crate::rotation::Rotation;
use crate::shape::ShapeCategory;
use crate::templates::TemplateSet;
use gridshape_core::{GridPoint, Occupancy};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Outcome of a template search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    /// A template matched at this rotation
    Matched {
        category: ShapeCategory,
        rotation: Rotation,
    },
    /// No template matched at any rotation (the cell has no filled neighbors
    /// covered by the template set)
    NoMatch,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }

    pub fn category(&self) -> Option<ShapeCategory> {
        match self {
            MatchResult::Matched { category, .. } => Some(*category),
            MatchResult::NoMatch => None,
        }
    }

    pub fn rotation(&self) -> Option<Rotation> {
        match self {
            MatchResult::Matched { rotation, .. } => Some(*rotation),
            MatchResult::NoMatch => None,
        }
    }
}

/// Search `templates` for the first category and rotation whose rotated
/// offsets, placed around `cell`, are all occupied.
///
/// Categories are tried in ascending order and rotations in
/// [`Rotation::SEARCH_ORDER`]; the first hit wins. A neighbor past the edge
/// of the `i32` range counts as empty.
pub fn match_pattern_and_rotation<O>(
    cell: GridPoint,
    occupancy: &O,
    templates: &TemplateSet,
) -> MatchResult
where
    O: Occupancy + ?Sized,
{
    for (category, offsets) in templates.iter() {
        for rotation in Rotation::SEARCH_ORDER {
            let mut rotated: Vec<GridPoint> = offsets
                .iter()
                .map(|&offset| rotation.apply(offset, GridPoint::ORIGIN))
                .collect();

            let mut present: Vec<GridPoint> = rotated
                .iter()
                .copied()
                .filter(|&offset| {
                    cell.checked_add(offset)
                        .is_some_and(|neighbor| occupancy.is_occupied(neighbor))
                })
                .collect();

            present.sort();
            rotated.sort();

            if present == rotated {
                trace!(%cell, ?category, %rotation, "template matched");
                return MatchResult::Matched { category, rotation };
            }
        }
    }

    debug!(%cell, "no template matches");
    MatchResult::NoMatch
}

/// Owns a validated [`TemplateSet`] and runs searches against it
#[derive(Debug, Clone, Default)]
pub struct TemplateMatcher {
    templates: TemplateSet,
}

impl TemplateMatcher {
    pub fn new(templates: TemplateSet) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// See [`match_pattern_and_rotation`]
    pub fn match_cell<O>(&self, cell: GridPoint, occupancy: &O) -> MatchResult
    where
        O: Occupancy + ?Sized,
    {
        match_pattern_and_rotation(cell, occupancy, &self.templates)
    }

    /// Match every occupied cell of a `map_width` x `map_height` map.
    ///
    /// Cells are visited row by row from `y = 0`, `x` ascending within a row.
    pub fn match_region<O>(
        &self,
        occupancy: &O,
        map_height: i32,
        map_width: i32,
    ) -> Vec<(GridPoint, MatchResult)>
    where
        O: Occupancy + ?Sized,
    {
        let mut results = Vec::new();

        for y in 0..map_height {
            for x in 0..map_width {
                let cell = GridPoint::new(x, y);
                if !occupancy.is_occupied(cell) {
                    continue;
                }
                results.push((cell, self.match_cell(cell, occupancy)));
            }
        }

        results
    }
}
