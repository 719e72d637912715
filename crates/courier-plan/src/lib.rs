//! Search-based path planners for the Courier delivery simulator.
//!
//! Four classic algorithms behind one closed [`Planner`] contract:
//! breadth-first search, uniform-cost search, A* with a Manhattan
//! heuristic, and hill-climbing local search with seeded random restarts.
//!
//! All planners are time-aware: a path step `k` (1-based) of a plan made
//! at tick `now` arrives at `now + k`, and expansion rejects any neighbor
//! occupied by a dynamic obstacle at its arrival tick. A planner that
//! only checked occupancy at `now` would happily route the agent into an
//! obstacle scheduled to arrive later.
//!
//! Every planning call is a pure function of `(grid, start, goal, now)`
//! (plus an explicit seed for local search) and reports the number of
//! nodes it expanded, so experiment harnesses can compare algorithms.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod astar;
mod bfs;
mod frontier;
mod local;
mod planner;
mod ucs;

pub use local::LocalSearchConfig;
pub use planner::{Plan, Planner};
