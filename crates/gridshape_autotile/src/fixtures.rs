//! Shared test map
//!
//! ```text
//!   5  . . . . . .
//!   4  . . . . . #
//!   3  . . # . . #
//!   2  # . # # # #
//!   1  # # # # # #
//!   0  # # # # # #
//!
//!      0 1 2 3 4 5
//! ```

use gridshape_core::GridPoint;

pub const WIDTH: i32 = 6;
pub const HEIGHT: i32 = 6;

pub fn l_shaped_cache() -> Vec<GridPoint> {
    let rows: [(i32, &[i32]); 5] = [
        (4, &[5]),
        (3, &[2, 5]),
        (2, &[0, 2, 3, 4, 5]),
        (1, &[0, 1, 2, 3, 4, 5]),
        (0, &[0, 1, 2, 3, 4, 5]),
    ];

    rows.iter()
        .flat_map(|&(y, xs)| xs.iter().map(move |&x| GridPoint::new(x, y)))
        .collect()
}
