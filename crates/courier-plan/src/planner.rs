//! The closed planner contract and shared search plumbing.

use std::fmt;
use std::str::FromStr;

use courier_core::{Cell, Endpoint, Path, PlanError, Tick};
use courier_grid::Grid;
use indexmap::IndexMap;

use crate::local::LocalSearchConfig;
use crate::{astar, bfs, local, ucs};

/// The outcome of a successful planning call.
///
/// Besides the path itself, carries the number of nodes the search
/// expanded so experiment harnesses can compare algorithms without
/// instrumenting them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    /// The committed path, start first.
    pub path: Path,
    /// Nodes expanded (popped and processed) during the search.
    pub nodes_expanded: u64,
}

/// The closed set of planning strategies.
///
/// One variant per algorithm, sharing the single
/// [`find_path`](Planner::find_path) contract. There is no runtime
/// extension point, so an enum fits better than a trait hierarchy.
#[derive(Clone, Debug, PartialEq)]
pub enum Planner {
    /// Breadth-first search: minimum step count, terrain costs ignored
    /// during the search.
    Bfs,
    /// Uniform-cost search: minimum terrain cost.
    Ucs,
    /// A* with the Manhattan heuristic: minimum terrain cost, usually
    /// expanding far fewer nodes than UCS.
    AStar,
    /// Hill climbing with seeded random restarts: best effort, no
    /// optimality or completeness guarantee.
    Local(LocalSearchConfig),
}

impl Planner {
    /// Short lowercase name, matching the CLI selector.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Ucs => "ucs",
            Self::AStar => "astar",
            Self::Local(_) => "local",
        }
    }

    /// Plan a path from `start` to `goal` on `grid`, starting at tick
    /// `now`.
    ///
    /// Endpoints are validated before any search begins:
    /// [`PlanError::InvalidEndpoint`] if either is out of bounds or a
    /// static obstacle. `start == goal` short-circuits to the trivial
    /// zero-step path. A search that exhausts its frontier (or, for local
    /// search, its restart budget) reports [`PlanError::NoPathFound`].
    pub fn find_path(
        &self,
        grid: &Grid,
        start: Cell,
        goal: Cell,
        now: Tick,
    ) -> Result<Plan, PlanError> {
        validate_endpoint(grid, Endpoint::Start, start)?;
        validate_endpoint(grid, Endpoint::Goal, goal)?;
        if start == goal {
            return Ok(Plan {
                path: Path::trivial(start),
                nodes_expanded: 0,
            });
        }
        match self {
            Self::Bfs => bfs::plan(grid, start, goal, now),
            Self::Ucs => ucs::plan(grid, start, goal, now),
            Self::AStar => astar::plan(grid, start, goal, now),
            Self::Local(config) => local::plan(grid, start, goal, now, config),
        }
    }
}

impl fmt::Display for Planner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Self::Bfs),
            "ucs" => Ok(Self::Ucs),
            "astar" => Ok(Self::AStar),
            "local" => Ok(Self::Local(LocalSearchConfig::default())),
            other => Err(format!(
                "unknown planner `{other}` (expected bfs|ucs|astar|local)"
            )),
        }
    }
}

fn validate_endpoint(grid: &Grid, endpoint: Endpoint, cell: Cell) -> Result<(), PlanError> {
    match grid.cost(cell) {
        Ok(_) => Ok(()),
        Err(reason) => Err(PlanError::InvalidEndpoint { endpoint, reason }),
    }
}

// ── Shared search bookkeeping ───────────────────────────────────

/// Per-cell record in the visited map: best known cost, the step depth
/// that cost was reached at, and the parent for path reconstruction.
///
/// `IndexMap` keeps iteration (and hence any residual ordering effects)
/// deterministic across runs.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Visit {
    pub g: u64,
    pub depth: u64,
    pub parent: Option<Cell>,
}

/// Walk parent links back from `goal` and reverse into a start-first
/// cell sequence.
pub(crate) fn reconstruct(visited: &IndexMap<Cell, Visit>, goal: Cell) -> Vec<Cell> {
    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(visit) = visited.get(&current) {
        match visit.parent {
            Some(parent) => {
                cells.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    cells.reverse();
    cells
}
