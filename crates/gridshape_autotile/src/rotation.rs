//! Quarter-turn rotations and the point rotator
//!
//! `rotate_point` is the only place floating point enters the system. Every
//! result is snapped back to the grid before anyone compares it.

use gridshape_core::GridPoint;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::fmt;

/// Signed number of counter-clockwise quarter turns.
///
/// Values are kept as produced: angle searches may report 450° or -180°
/// and callers see exactly that. Use [`Rotation::normalized`] to fold into
/// the canonical `90°..=360°` range.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Rotation(i32);

impl Rotation {
    pub const ZERO: Self = Self(0);
    pub const QUARTER: Self = Self(1);
    pub const HALF: Self = Self(2);
    pub const THREE_QUARTERS: Self = Self(3);
    pub const FULL: Self = Self(4);

    /// Candidate angles tried by the template matcher, ascending
    pub const SEARCH_ORDER: [Rotation; 4] = [
        Rotation::QUARTER,
        Rotation::HALF,
        Rotation::THREE_QUARTERS,
        Rotation::FULL,
    ];

    pub const fn from_quarter_turns(quarter_turns: i32) -> Self {
        Self(quarter_turns)
    }

    pub const fn quarter_turns(self) -> i32 {
        self.0
    }

    pub fn radians(self) -> f64 {
        f64::from(self.0) * FRAC_PI_2
    }

    pub const fn degrees(self) -> i32 {
        self.0 * 90
    }

    /// Fold into `{90°, 180°, 270°, 360°}`; a whole number of turns is 360°
    pub const fn normalized(self) -> Self {
        match self.0.rem_euclid(4) {
            0 => Self::FULL,
            n => Self(n),
        }
    }

    pub const fn plus(self, other: Rotation) -> Self {
        Self(self.0 + other.0)
    }

    pub const fn minus(self, other: Rotation) -> Self {
        Self(self.0 - other.0)
    }

    /// Rotate `point` about `center` by this angle
    pub fn apply(self, point: GridPoint, center: GridPoint) -> GridPoint {
        rotate_point(point, self.radians(), center)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Round half away from zero
fn snap(value: f64) -> i64 {
    value.round() as i64
}

/// Rotate the offset `(dx, dy)` counter-clockwise about the origin by
/// `radians` and snap it to the grid.
pub(crate) fn rotate_offset(dx: i64, dy: i64, radians: f64) -> (i64, i64) {
    let (dx, dy) = (dx as f64, dy as f64);
    let (sin, cos) = radians.sin_cos();

    (snap(dx * cos - dy * sin), snap(dx * sin + dy * cos))
}

fn clamp_to_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Rotate `point` counter-clockwise about `center` by `radians`, then snap
/// each coordinate to the nearest integer (halves round away from zero).
///
/// Arithmetic is done in `i64`; a result beyond the `i32` range is clamped
/// to its edge.
pub fn rotate_point(point: GridPoint, radians: f64, center: GridPoint) -> GridPoint {
    let dx = i64::from(point.x) - i64::from(center.x);
    let dy = i64::from(point.y) - i64::from(center.y);
    let (rx, ry) = rotate_offset(dx, dy, radians);

    GridPoint::new(
        clamp_to_i32(rx + i64::from(center.x)),
        clamp_to_i32(ry + i64::from(center.y)),
    )
}

/// [`rotate_point`] about the origin
pub fn rotate_about_origin(point: GridPoint, radians: f64) -> GridPoint {
    rotate_point(point, radians, GridPoint::ORIGIN)
}
