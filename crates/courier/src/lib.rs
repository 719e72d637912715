//! Courier: a 2D grid path-planning delivery simulator.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Courier sub-crates. For most users, adding `courier` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use courier::prelude::*;
//!
//! // A 10x10 grid with a small wall the courier must route around.
//! let mut grid = Grid::new(10, 10).unwrap();
//! for y in 0..8 {
//!     grid.add_static_obstacle(Cell::new(5, y)).unwrap();
//! }
//!
//! let mut agent = DeliveryAgent::new(&grid, Planner::AStar, Cell::new(0, 0), Cell::new(9, 0));
//! let report = agent.run(1_000);
//! assert_eq!(report.outcome, AgentState::Arrived);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `courier-core` | Cells, ticks, paths, error types |
//! | [`grid`] | `courier-grid` | Grid environment, obstacles, map loading |
//! | [`plan`] | `courier-plan` | BFS, UCS, A*, and local-search planners |
//! | [`agent`] | `courier-agent` | Delivery agent state machine and run reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: cells, ticks, paths, and shared errors (`courier-core`).
pub use courier_core as types;

/// The grid environment and map loading (`courier-grid`).
///
/// Provides [`grid::Grid`] with terrain costs, static obstacles, and
/// scheduled dynamic obstacles, plus the [`grid::load_map`] text format.
pub use courier_grid as grid;

/// Path planners (`courier-plan`).
///
/// The [`plan::Planner`] enum is the single planning entry point.
pub use courier_plan as plan;

/// The delivery agent (`courier-agent`).
///
/// [`agent::DeliveryAgent`] executes a committed plan tick by tick and
/// replans when the world gets in the way.
pub use courier_agent as agent;

/// Common imports for typical Courier usage.
///
/// ```rust
/// use courier::prelude::*;
/// ```
pub mod prelude {
    pub use courier_agent::{AgentState, DeliveryAgent, RunReport};
    pub use courier_core::{Cell, CellError, Path, PlanError, Tick};
    pub use courier_grid::{load_map, load_map_path, Grid, GridError, MapError, MapFile};
    pub use courier_plan::{LocalSearchConfig, Plan, Planner};
}
