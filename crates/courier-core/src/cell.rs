//! Grid coordinates.

use std::fmt;

/// A coordinate on the city grid.
///
/// `x` grows eastward (columns), `y` grows southward (rows). Coordinates
/// are signed so that neighbor arithmetic at the grid border cannot
/// underflow; validity against a particular grid's bounds is checked by
/// the environment, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Cell {
    /// Create a cell at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// This is the graph geodesic on an unobstructed 4-connected grid,
    /// which makes it an admissible A* heuristic whenever every move
    /// costs at least 1.
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The cell offset by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn manhattan_basic() {
        assert_eq!(Cell::new(0, 0).manhattan(Cell::new(3, 4)), 7);
        assert_eq!(Cell::new(2, 3).manhattan(Cell::new(5, 7)), 7);
        assert_eq!(Cell::new(5, 5).manhattan(Cell::new(5, 5)), 0);
    }

    #[test]
    fn manhattan_handles_negative_coordinates() {
        assert_eq!(Cell::new(-2, -2).manhattan(Cell::new(1, 1)), 6);
    }

    #[test]
    fn offset_moves_both_axes() {
        assert_eq!(Cell::new(4, 4).offset(-1, 2), Cell::new(3, 6));
    }

    #[test]
    fn display_format() {
        assert_eq!(Cell::new(3, 9).to_string(), "(3, 9)");
    }

    proptest! {
        #[test]
        fn manhattan_is_metric(
            ax in -50i32..50, ay in -50i32..50,
            bx in -50i32..50, by in -50i32..50,
            cx in -50i32..50, cy in -50i32..50,
        ) {
            let a = Cell::new(ax, ay);
            let b = Cell::new(bx, by);
            let c = Cell::new(cx, cy);
            prop_assert_eq!(a.manhattan(a), 0);
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
            prop_assert!(a.manhattan(c) <= a.manhattan(b) + b.manhattan(c));
        }
    }
}
