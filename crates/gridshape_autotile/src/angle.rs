//! Rotation lookup for an already classified cell
//!
//! Given the present neighbors of a cell and its [`ShapeCategory`], find how
//! far the category's reference configuration is turned. Each category has a
//! couple of direct checks and falls back to stepping through quarter turns
//! starting at 360°.

use crate::rotation::{rotate_offset, Rotation};
use crate::shape::ShapeCategory;
use gridshape_core::GridPoint;
use thiserror::Error;
use tracing::warn;

/// Quarter turns tried by a brute-force search. Rotation is periodic in four
/// steps, so anything past this would repeat.
pub const MAX_SEARCH_STEPS: i32 = 4;

/// Errors raised when the neighbor list does not fit its category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AngleError {
    #[error("{category:?} needs {needed} present neighbors, got {found}")]
    MissingNeighbors {
        category: ShapeCategory,
        needed: usize,
        found: usize,
    },
    #[error("no quarter turn aligns the {category:?} neighbors of {cell}")]
    NoAlignment {
        category: ShapeCategory,
        cell: GridPoint,
    },
    #[error("{0:?} cells have no rotation")]
    NoRotation(ShapeCategory),
}

/// First `N` present neighbors as an array
fn leading<const N: usize>(
    present: &[GridPoint],
    category: ShapeCategory,
) -> Result<[GridPoint; N], AngleError> {
    present
        .get(..N)
        .and_then(|head| <[GridPoint; N]>::try_from(head).ok())
        .ok_or(AngleError::MissingNeighbors {
            category,
            needed: N,
            found: present.len(),
        })
}

/// Offset of `point` from `cell`, wide enough for any pair of `i32` points
fn offset_from(cell: GridPoint, point: GridPoint) -> (i64, i64) {
    (
        i64::from(point.x) - i64::from(cell.x),
        i64::from(point.y) - i64::from(cell.y),
    )
}

/// Turn an offset about the cell it was taken from
fn turn(offset: (i64, i64), rotation: Rotation) -> (i64, i64) {
    rotate_offset(offset.0, offset.1, rotation.radians())
}

/// Step from 360° in quarter turns until `aligned` holds
fn search<F>(
    category: ShapeCategory,
    cell: GridPoint,
    mut aligned: F,
) -> Result<Rotation, AngleError>
where
    F: FnMut(Rotation) -> bool,
{
    (0..MAX_SEARCH_STEPS)
        .map(|step| Rotation::FULL.plus(Rotation::from_quarter_turns(step)))
        .find(|&rotation| aligned(rotation))
        .ok_or_else(|| {
            warn!(%cell, ?category, "rotation search exhausted without alignment");
            AngleError::NoAlignment { category, cell }
        })
}

/// Find the rotation describing `present` around `cell`.
///
/// `present` holds absolute neighbor coordinates in
/// [`neighbors`](gridshape_core::neighbors) order, as returned by
/// [`present_neighbors`](gridshape_core::present_neighbors). Results are not
/// normalized: `BigAngle` may report up to 630° and `ThreeSide` may report a
/// negative angle.
pub fn find_angle(
    present: &[GridPoint],
    cell: GridPoint,
    category: ShapeCategory,
) -> Result<Rotation, AngleError> {
    match category {
        ShapeCategory::Inner => Ok(Rotation::FULL),
        ShapeCategory::Side => Ok(Rotation::THREE_QUARTERS),
        ShapeCategory::ThreeSide => {
            let [first, second, third] = leading::<3>(present, category)?;
            let [first, second, third] = [first, second, third].map(|n| offset_from(cell, n));

            if second.0 == third.0 && first == (1, 0) {
                return Ok(Rotation::THREE_QUARTERS);
            }
            if first == (0, 1) {
                return Ok(Rotation::QUARTER);
            }

            // Stops as soon as either test holds
            let found = search(category, cell, |r| {
                turn(first, r).1 == turn(third, r).1 || turn(second, r).0 == 1
            })?;
            Ok(Rotation::FULL.minus(found))
        }
        ShapeCategory::Angle => {
            let [only] = leading::<1>(present, category)?;
            let only = offset_from(cell, only);
            let found = search(category, cell, |r| turn(only, r).0 == 1)?;
            Ok(found.minus(Rotation::FULL))
        }
        ShapeCategory::BigAngle => {
            let [first, second] = leading::<2>(present, category)?;
            let [first, second] = [first, second].map(|n| offset_from(cell, n));

            if second.1 == -1 && first.0 == 1 {
                return Ok(Rotation::FULL.minus(Rotation::FULL));
            }
            search(category, cell, |r| turn(first, r).1 == -1)
        }
        ShapeCategory::Outside => Err(AngleError::NoRotation(category)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridshape_core::{neighbors, Direction};

    fn p(x: i32, y: i32) -> GridPoint {
        GridPoint::new(x, y)
    }

    fn turns(n: i32) -> Rotation {
        Rotation::from_quarter_turns(n)
    }

    /// Absolute neighbors of `cell` in the given directions, enumeration order
    fn present(cell: GridPoint, dirs: &[Direction]) -> Vec<GridPoint> {
        Direction::ALL
            .into_iter()
            .filter(|d| dirs.contains(d))
            .map(|d| cell + d.offset())
            .collect()
    }

    #[test]
    fn test_reference_angles() {
        assert_eq!(
            find_angle(&[p(5, 4)], p(5, 3), ShapeCategory::Side),
            Ok(Rotation::THREE_QUARTERS)
        );
        assert_eq!(
            find_angle(&[p(5, 3)], p(5, 4), ShapeCategory::Angle),
            Ok(Rotation::QUARTER)
        );
        assert_eq!(
            find_angle(&[p(4, 4)], p(5, 4), ShapeCategory::Angle),
            Ok(Rotation::HALF)
        );
        assert_eq!(
            find_angle(&[p(5, 4)], p(4, 4), ShapeCategory::Angle),
            Ok(Rotation::ZERO)
        );
    }

    #[test]
    fn test_angle_every_direction() {
        use Direction::*;
        let cell = p(-3, 8);
        let cases = [(East, 0), (North, 3), (West, 2), (South, 1)];
        for (dir, expected) in cases {
            let got = find_angle(&present(cell, &[dir]), cell, ShapeCategory::Angle);
            assert_eq!(got, Ok(turns(expected)), "{}", dir.name());
        }
    }

    #[test]
    fn test_inner_and_side_are_fixed() {
        let cell = p(1, 1);
        let all = neighbors(cell);
        assert_eq!(find_angle(&all, cell, ShapeCategory::Inner), Ok(Rotation::FULL));
        assert_eq!(
            find_angle(&all[..2], cell, ShapeCategory::Side),
            Ok(Rotation::THREE_QUARTERS)
        );
    }

    #[test]
    fn test_three_side_every_gap() {
        use Direction::*;
        let cell = p(2, 2);
        // (filled directions, expected quarter turns)
        let cases = [
            (vec![East, North, West], 0),  // gap south: search hits at 360°
            (vec![East, North, South], 3), // gap west: first shortcut
            (vec![North, West, South], 1), // gap east: second shortcut
            (vec![East, West, South], -2), // gap north: search hits at 540°
        ];
        for (dirs, expected) in cases {
            let got = find_angle(&present(cell, &dirs), cell, ShapeCategory::ThreeSide);
            assert_eq!(got, Ok(turns(expected)), "{dirs:?}");
        }
    }

    #[test]
    fn test_big_angle_every_corner() {
        use Direction::*;
        let cell = p(0, 0);
        let cases = [
            (vec![East, South], 0), // shortcut
            (vec![East, North], 7),
            (vec![North, West], 6),
            (vec![West, South], 5),
        ];
        for (dirs, expected) in cases {
            let got = find_angle(&present(cell, &dirs), cell, ShapeCategory::BigAngle);
            assert_eq!(got, Ok(turns(expected)), "{dirs:?}");
        }
    }

    #[test]
    fn test_cells_on_the_i32_edge() {
        let east_edge = p(i32::MAX, 0);
        assert_eq!(
            find_angle(&[p(i32::MAX - 1, 0)], east_edge, ShapeCategory::Angle),
            Ok(Rotation::HALF)
        );

        // North and west of the bottom-right corner of the coordinate range
        let corner = p(i32::MAX, i32::MIN);
        let present = [p(i32::MAX, i32::MIN + 1), p(i32::MAX - 1, i32::MIN)];
        assert_eq!(find_angle(&present, corner, ShapeCategory::BigAngle), Ok(turns(6)));

        // Gap north, one step from the bottom of the range
        let cell = p(0, i32::MIN + 1);
        let present = [p(1, i32::MIN + 1), p(-1, i32::MIN + 1), p(0, i32::MIN)];
        assert_eq!(find_angle(&present, cell, ShapeCategory::ThreeSide), Ok(turns(-2)));
    }

    #[test]
    fn test_missing_neighbors() {
        let cell = p(0, 0);
        assert_eq!(
            find_angle(&[p(1, 0), p(0, 1)], cell, ShapeCategory::ThreeSide),
            Err(AngleError::MissingNeighbors {
                category: ShapeCategory::ThreeSide,
                needed: 3,
                found: 2,
            })
        );
        assert!(matches!(
            find_angle(&[], cell, ShapeCategory::Angle),
            Err(AngleError::MissingNeighbors { needed: 1, found: 0, .. })
        ));
    }

    #[test]
    fn test_malformed_input_stops_after_four_steps() {
        let cell = p(0, 0);
        assert_eq!(
            find_angle(&[p(7, 7)], cell, ShapeCategory::Angle),
            Err(AngleError::NoAlignment {
                category: ShapeCategory::Angle,
                cell,
            })
        );
        assert!(matches!(
            find_angle(&[p(5, 5), p(5, 5), p(9, 0)], cell, ShapeCategory::ThreeSide),
            Err(AngleError::NoAlignment { .. })
        ));
        assert!(matches!(
            find_angle(&[p(0, 0), p(3, 3)], cell, ShapeCategory::BigAngle),
            Err(AngleError::NoAlignment { .. })
        ));
    }

    #[test]
    fn test_outside_has_no_rotation() {
        assert_eq!(
            find_angle(&[], p(0, 0), ShapeCategory::Outside),
            Err(AngleError::NoRotation(ShapeCategory::Outside))
        );
    }
}
