//! Breadth-first search.

use std::collections::VecDeque;

use courier_core::{Cell, Path, PlanError, Tick};
use courier_grid::Grid;
use indexmap::IndexMap;

use crate::planner::{reconstruct, Plan, Visit};

/// Find the minimum-step-count path, treating every move as unit cost.
///
/// The FIFO frontier guarantees nodes are expanded in discovery order,
/// so the first path to reach the goal has the fewest steps; ties go to
/// the first-discovered route. Terrain costs are ignored by the search
/// but still summed into the returned path's cost annotation.
pub(crate) fn plan(grid: &Grid, start: Cell, goal: Cell, now: Tick) -> Result<Plan, PlanError> {
    let mut queue: VecDeque<Cell> = VecDeque::new();
    let mut visited: IndexMap<Cell, Visit> = IndexMap::new();
    let mut nodes_expanded = 0u64;

    visited.insert(
        start,
        Visit {
            g: 0,
            depth: 0,
            parent: None,
        },
    );
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        nodes_expanded += 1;
        if current == goal {
            let cells = reconstruct(&visited, goal);
            let cost = visited[&goal].g;
            return Ok(Plan {
                path: Path::new(cells, cost),
                nodes_expanded,
            });
        }

        let Visit { g, depth, .. } = visited[&current];
        for neighbor in grid.neighbors(current) {
            if visited.contains_key(&neighbor) {
                continue;
            }
            // Arrival tick of the candidate step, for dynamic obstacles.
            if grid.is_occupied(neighbor, now.plus(depth + 1)) {
                continue;
            }
            let step_cost = match grid.cost(neighbor) {
                Ok(c) => u64::from(c),
                Err(_) => continue,
            };
            visited.insert(
                neighbor,
                Visit {
                    g: g + step_cost,
                    depth: depth + 1,
                    parent: Some(current),
                },
            );
            queue.push_back(neighbor);
        }
    }

    Err(PlanError::NoPathFound)
}
