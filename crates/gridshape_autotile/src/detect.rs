//! Classify-then-rotate detection for a single map cell

use crate::angle::{find_angle, AngleError};
use crate::rotation::Rotation;
use crate::shape::{classify, ShapeCategory};
use gridshape_core::{is_outside, present_neighbors, GridPoint, Occupancy};
use serde::{Deserialize, Serialize};

/// Shape and rotation detected for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellShape {
    pub category: ShapeCategory,
    /// `None` only for `Outside`
    pub rotation: Option<Rotation>,
}

impl CellShape {
    pub const OUTSIDE: Self = Self {
        category: ShapeCategory::Outside,
        rotation: None,
    };

    /// Whether there is anything to draw for this cell
    pub fn is_drawable(&self) -> bool {
        self.category != ShapeCategory::Outside
    }
}

/// Detect the shape of `cell` on a `map_width` x `map_height` map.
///
/// Off-map cells and cells without filled neighbors come back as
/// [`CellShape::OUTSIDE`]. Otherwise the present neighbors are classified
/// and the rotation is taken from [`find_angle`].
pub fn detect_cell<O>(
    cell: GridPoint,
    occupancy: &O,
    map_height: i32,
    map_width: i32,
) -> Result<CellShape, AngleError>
where
    O: Occupancy + ?Sized,
{
    if is_outside(cell, map_height, map_width) {
        return Ok(CellShape::OUTSIDE);
    }

    let present = present_neighbors(cell, occupancy);
    let category = classify(cell, &present);
    if category == ShapeCategory::Outside {
        return Ok(CellShape::OUTSIDE);
    }

    let rotation = find_angle(&present, cell, category)?;
    Ok(CellShape {
        category,
        rotation: Some(rotation),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{l_shaped_cache, HEIGHT, WIDTH};
    use crate::matcher::TemplateMatcher;

    fn p(x: i32, y: i32) -> GridPoint {
        GridPoint::new(x, y)
    }

    fn shape(category: ShapeCategory, quarter_turns: i32) -> CellShape {
        CellShape {
            category,
            rotation: Some(Rotation::from_quarter_turns(quarter_turns)),
        }
    }

    #[test]
    fn test_detect_reference_cells() {
        use ShapeCategory::*;

        let cache = l_shaped_cache();
        let cases = [
            (p(5, 3), shape(Side, 3)),
            (p(0, 0), shape(BigAngle, 7)),
            (p(5, 0), shape(BigAngle, 6)),
            (p(1, 0), shape(ThreeSide, 0)),
            (p(2, 1), shape(Inner, 4)),
            (p(5, 4), shape(Angle, 1)),
            (p(0, 2), shape(Angle, 1)),
            (p(2, 3), shape(Angle, 1)),
        ];

        for (cell, expected) in cases {
            assert_eq!(detect_cell(cell, &cache, HEIGHT, WIDTH), Ok(expected), "cell {cell}");
        }
    }

    #[test]
    fn test_detect_outside() {
        let cache = l_shaped_cache();

        let off_map = detect_cell(p(6, 0), &cache, HEIGHT, WIDTH).unwrap();
        assert_eq!(off_map, CellShape::OUTSIDE);
        assert!(!off_map.is_drawable());

        let isolated = detect_cell(p(2, 5), &cache, HEIGHT, WIDTH).unwrap();
        assert_eq!(isolated, CellShape::OUTSIDE);
    }

    #[test]
    fn test_detection_agrees_with_matcher_on_category() {
        let cache = l_shaped_cache();
        let matcher = TemplateMatcher::default();

        for x in 0..WIDTH {
            for y in 0..HEIGHT {
                let cell = p(x, y);
                let detected = detect_cell(cell, &cache, HEIGHT, WIDTH).unwrap();
                let matched = matcher.match_cell(cell, &cache);
                assert_eq!(
                    matched.category().unwrap_or(ShapeCategory::Outside),
                    detected.category,
                    "cell {cell}"
                );
            }
        }
    }
}
