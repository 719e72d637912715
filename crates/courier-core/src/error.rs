//! Error types shared across the workspace.
//!
//! Organized by subsystem: cell queries (environment) and planning calls.
//! "No path" is a reported outcome of a planning call, never a panic;
//! the agent converts it into its terminal `Failed` state.

use std::error::Error;
use std::fmt;

use crate::Cell;

/// Errors from environment cost queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellError {
    /// The coordinate lies outside the grid bounds.
    OutOfBounds {
        /// The offending cell.
        cell: Cell,
    },
    /// The cell is a static obstacle; its terrain cost is undefined.
    StaticObstacle {
        /// The offending cell.
        cell: Cell,
    },
}

impl CellError {
    /// The cell the query was about.
    pub fn cell(&self) -> Cell {
        match *self {
            Self::OutOfBounds { cell } | Self::StaticObstacle { cell } => cell,
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell } => write!(f, "cell {cell} is out of bounds"),
            Self::StaticObstacle { cell } => write!(f, "cell {cell} is a static obstacle"),
        }
    }
}

impl Error for CellError {}

/// Which endpoint of a planning request was invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The start cell.
    Start,
    /// The goal cell.
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Goal => write!(f, "goal"),
        }
    }
}

/// Errors from a planning call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanError {
    /// Start or goal is out of bounds or a static obstacle. Detected
    /// before any search begins.
    InvalidEndpoint {
        /// Which endpoint was rejected.
        endpoint: Endpoint,
        /// Why the endpoint cell is unusable.
        reason: CellError,
    },
    /// The frontier exhausted without reaching the goal.
    NoPathFound,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint { endpoint, reason } => {
                write!(f, "invalid {endpoint}: {reason}")
            }
            Self::NoPathFound => write!(f, "no path found"),
        }
    }
}

impl Error for PlanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEndpoint { reason, .. } => Some(reason),
            Self::NoPathFound => None,
        }
    }
}
