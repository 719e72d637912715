//! Grid city environment for the Courier delivery simulator.
//!
//! A [`Grid`] holds static terrain costs, static obstacles, and compiled
//! dynamic-obstacle schedules, and answers validity, cost, neighbor, and
//! time-indexed occupancy queries. It is a pure query surface: immutable
//! once built, with the simulation clock passed explicitly into every
//! time-dependent call.
//!
//! The [`map`] module loads the flat ASCII map format and produces a
//! validated grid plus start and goal cells.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod grid;
pub mod map;
mod schedule;

pub use error::GridError;
pub use grid::Grid;
pub use map::{load_map, load_map_path, MapError, MapFile};
pub use schedule::DynamicObstacle;
