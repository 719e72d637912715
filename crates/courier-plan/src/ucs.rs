//! Uniform-cost search.

use courier_core::{Cell, Path, PlanError, Tick};
use courier_grid::Grid;
use indexmap::IndexMap;

use crate::frontier::Frontier;
use crate::planner::{reconstruct, Plan, Visit};

/// Find the minimum-terrain-cost path.
///
/// The frontier is keyed on accumulated terrain cost with stable FIFO
/// order among equal costs, so results are deterministic. A popped entry
/// whose recorded cost is stale (the cell was since improved) is skipped
/// without counting as an expansion.
pub(crate) fn plan(grid: &Grid, start: Cell, goal: Cell, now: Tick) -> Result<Plan, PlanError> {
    let mut frontier: Frontier<u64, (Cell, u64)> = Frontier::new();
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
    frontier.push(0, (start, 0));

    while let Some((current, g)) = frontier.pop() {
        if visited[&current].g < g {
            continue; // stale entry, a cheaper route was found meanwhile
        }
        nodes_expanded += 1;
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
                frontier.push(candidate, (neighbor, candidate));
            }
        }
    }

    Err(PlanError::NoPathFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_test_utils::{blocked_corridor, open_grid, weighted_detour};

    fn c(x: i32, y: i32) -> Cell {
        Cell::new(x, y)
    }

    #[test]
    fn open_10x10_matches_bfs_scenario() {
        let grid = open_grid(10, 10);
        let plan = plan(&grid, c(0, 0), c(9, 9), Tick::ZERO).unwrap();
        assert_eq!(plan.path.step_count(), 18);
        assert_eq!(plan.path.cost(), 18);
    }

    #[test]
    fn prefers_cheap_detour_over_short_expensive_route() {
        let (grid, start, goal, optimal) = weighted_detour();
        let plan = plan(&grid, start, goal, Tick::ZERO).unwrap();
        assert_eq!(plan.path.cost(), optimal);
        assert!(plan.path.step_count() > start.manhattan(goal) as usize);
    }

    #[test]
    fn blocked_corridor_reports_no_path() {
        let (grid, start, goal) = blocked_corridor();
        assert_eq!(plan(&grid, start, goal, Tick::ZERO), Err(PlanError::NoPathFound));
    }

    #[test]
    fn equal_cost_ties_break_by_insertion_order() {
        // On a uniform grid many optimal routes exist; determinism means
        // two identical calls agree exactly.
        let grid = open_grid(6, 6);
        let a = plan(&grid, c(0, 0), c(5, 5), Tick::ZERO).unwrap();
        let b = plan(&grid, c(0, 0), c(5, 5), Tick::ZERO).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn reroutes_around_parked_dynamic_obstacle() {
        // An obstacle parked on the straight route pushes UCS onto a
        // slightly longer but collision-free route.
        let mut grid = open_grid(5, 3);
        // Straight route (0,1)..(4,1); obstacle sits on (2,1) forever.
        grid.add_dynamic_obstacle(c(2, 1), &[]).unwrap();
        let p = plan(&grid, c(0, 1), c(4, 1), Tick::ZERO).unwrap();
        for (k, &cell) in p.path.cells().iter().enumerate().skip(1) {
            assert!(!grid.is_occupied(cell, Tick::ZERO.plus(k as u64)));
        }
        assert_eq!(p.path.step_count(), 6);
    }
}
