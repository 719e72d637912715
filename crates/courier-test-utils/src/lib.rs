//! Shared test fixtures for Courier development.
//!
//! Standard grids and scenario maps used across the planner and agent
//! test suites, so every crate exercises the same well-understood
//! layouts.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use courier_core::Cell;
use courier_grid::Grid;

/// An unobstructed unit-cost grid.
pub fn open_grid(width: u32, height: u32) -> Grid {
    Grid::new(width, height).expect("fixture dimensions are valid")
}

/// A 5x5 grid whose middle column is a full wall: (0,2) and (4,2) are
/// disconnected, so every planner must report `NoPathFound`.
pub fn blocked_corridor() -> (Grid, Cell, Cell) {
    let mut grid = open_grid(5, 5);
    for y in 0..5 {
        grid.add_static_obstacle(Cell::new(2, y))
            .expect("wall cells are in bounds");
    }
    (grid, Cell::new(0, 2), Cell::new(4, 2))
}

/// A 4x2 grid where the straight route is expensive and a one-row detour
/// is cheap. Returns `(grid, start, goal, optimal_cost)`:
///
/// ```text
///   cost row 0:  1  9  9  1     start (0,0), goal (3,0)
///   cost row 1:  1  1  1  1
/// ```
///
/// The straight route costs 19; the detour through row 1 costs 5, and is
/// the unique optimum, which makes this map useful for tie-free
/// cost-optimality assertions.
pub fn weighted_detour() -> (Grid, Cell, Cell, u64) {
    let mut grid = open_grid(4, 2);
    grid.set_terrain_cost(Cell::new(1, 0), 9)
        .expect("terrain cells are in bounds");
    grid.set_terrain_cost(Cell::new(2, 0), 9)
        .expect("terrain cells are in bounds");
    (grid, Cell::new(0, 0), Cell::new(3, 0), 5)
}

/// A 7x2 corridor with a patrolling obstacle timed to block the agent.
///
/// Row 1 is the corridor from start (0,1) to goal (6,1). Row 0 is wall
/// except a pocket at (3,0). The obstacle rests in the pocket and steps
/// onto corridor cell (3,1) every third tick (`t % 3 == 2`):
///
/// - A plan made at tick 0 walks the corridor arriving at (3,1) at tick
///   3, when the cell is free, so the committed path is collision-free
///   at its own arrival ticks.
/// - Executing agents stand at (2,1) at tick 2, exactly when the
///   obstacle occupies (3,1), so the conservative pre-move check blocks
///   the move and forces a replanning (wait) tick, delaying arrival
///   beyond the undisturbed plan's tick 6.
pub fn corridor_with_patrol() -> (Grid, Cell, Cell) {
    let mut grid = open_grid(7, 2);
    for x in 0..7 {
        if x != 3 {
            grid.add_static_obstacle(Cell::new(x, 0))
                .expect("wall cells are in bounds");
        }
    }
    // Pocket rest, pocket rest, corridor step, wrap back to the pocket.
    grid.add_dynamic_obstacle(Cell::new(3, 0), &[(0, 0), (0, 1), (0, -1)])
        .expect("patrol origin is traversable");
    (grid, Cell::new(0, 1), Cell::new(6, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::Tick;

    #[test]
    fn patrol_timing_matches_the_documented_cycle() {
        let (grid, _, _) = corridor_with_patrol();
        for t in 0..12u64 {
            let on_corridor = grid.is_occupied(Cell::new(3, 1), Tick(t));
            assert_eq!(on_corridor, t % 3 == 2, "tick {t}");
            assert_eq!(!on_corridor, grid.is_occupied(Cell::new(3, 0), Tick(t)));
        }
    }

    #[test]
    fn blocked_corridor_really_disconnects() {
        let (grid, start, goal) = blocked_corridor();
        assert!(grid.is_traversable(start));
        assert!(grid.is_traversable(goal));
        for y in 0..5 {
            assert!(!grid.is_traversable(Cell::new(2, y)));
        }
    }
}
