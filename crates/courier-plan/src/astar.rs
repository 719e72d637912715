//! A* search with the Manhattan-distance heuristic.

use courier_core::{Cell, Path, PlanError, Tick};
use courier_grid::Grid;
use indexmap::IndexMap;

use crate::frontier::Frontier;
use crate::planner::{reconstruct, Plan, Visit};

/// Find the minimum-terrain-cost path, guided by Manhattan distance.
///
/// Manhattan distance never overestimates the true remaining cost on a
/// 4-connected grid whose every move costs at least 1, so the heuristic
/// is admissible and the returned cost equals UCS's. The frontier key is
/// `(g + h, h)`: equal priorities break toward the lower heuristic (the
/// node closer to the goal), then insertion order.
pub(crate) fn plan(grid: &Grid, start: Cell, goal: Cell, now: Tick) -> Result<Plan, PlanError> {
    plan_observed(grid, start, goal, now, |_, _| {})
}

/// Like [`plan`], reporting each expanded node and its `f = g + h` key to
/// `observed`, in expansion order. Tests use the hook to check expansion
/// ordering without instrumenting the search itself.
pub(crate) fn plan_observed(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    now: Tick,
    mut observed: impl FnMut(Cell, u64),
) -> Result<Plan, PlanError> {
    let mut frontier: Frontier<(u64, u32), (Cell, u64)> = Frontier::new();
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
    let h0 = start.manhattan(goal);
    frontier.push((u64::from(h0), h0), (start, 0));

    while let Some((current, g)) = frontier.pop() {
        if visited[&current].g < g {
            continue; // stale entry
        }
        nodes_expanded += 1;
        observed(current, g + u64::from(current.manhattan(goal)));
        if current == goal {
            let cells = reconstruct(&visited, goal);
            return Ok(Plan {
                path: Path::new(cells, g),
                nodes_expanded,
            });
        }

        let depth = visited[&current].depth;
        for neighbor in grid.neighbors(current) {
            if grid.is_occupied(neighbor, now.plus(depth + 1)) {
                continue;
            }
            let step_cost = match grid.cost(neighbor) {
                Ok(c) => u64::from(c),
                Err(_) => continue,
            };
            let candidate = g + step_cost;
            let improved = match visited.get(&neighbor) {
                Some(v) => candidate < v.g,
                None => true,
            };
            if improved {
                visited.insert(
                    neighbor,
                    Visit {
                        g: candidate,
                        depth: depth + 1,
                        parent: Some(current),
                    },
                );
                let h = neighbor.manhattan(goal);
                frontier.push((candidate + u64::from(h), h), (neighbor, candidate));
            }
        }
    }

    Err(PlanError::NoPathFound)
}
