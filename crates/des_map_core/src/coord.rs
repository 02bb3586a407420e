//! Grid coordinates

use std::fmt;

/// A cell position on the editing grid.
///
/// The grid is unbounded: any `i32` pair is a valid cell, including negative
/// ones. `y` grows upwards, so the cell "above" `(x, y)` is `(x, y + 1)`.
///
/// Ordering is lexicographic on `(x, y)`. Every scan over a [`GridState`](crate::GridState)
/// follows this order, which makes "first placement of a category" well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift this coordinate by the given delta
    ///
    /// Returns `None` when the result falls outside the `i32` range.
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// The four orthogonal neighbors, in the order above, below, `x + 1`, `x - 1`
    ///
    /// A neighbor past the edge of the `i32` range is `None`.
    pub fn orthogonal_neighbors(self) -> [Option<Coord>; 4] {
        [
            self.checked_offset(0, 1),
            self.checked_offset(0, -1),
            self.checked_offset(1, 0),
            self.checked_offset(-1, 0),
        ]
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Formats as the placement key `[x,y]`
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}
