//! Error types for grid construction.

use courier_core::Cell;
use std::fmt;

/// Errors arising while building a [`Grid`](crate::Grid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds the coordinate range.
    DimensionTooLarge {
        /// Which dimension ("width" or "height").
        name: &'static str,
        /// The configured value.
        value: u32,
        /// The maximum allowed.
        max: u32,
    },
    /// A builder operation referenced a cell outside the grid.
    OutOfBounds {
        /// The offending cell.
        cell: Cell,
    },
    /// A terrain cost below the minimum of 1.
    BadTerrainCost {
        /// The cell the cost was for.
        cell: Cell,
        /// The rejected cost.
        cost: u32,
    },
    /// A dynamic obstacle's origin sits on a static obstacle.
    OriginBlocked {
        /// The origin cell.
        cell: Cell,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds the maximum of {max}")
            }
            Self::OutOfBounds { cell } => write!(f, "cell {cell} is out of bounds"),
            Self::BadTerrainCost { cell, cost } => {
                write!(f, "terrain cost {cost} at {cell} is below the minimum of 1")
            }
            Self::OriginBlocked { cell } => {
                write!(f, "dynamic obstacle origin {cell} is a static obstacle")
            }
        }
    }
}

impl std::error::Error for GridError {}
