//! Hill-climbing local search with seeded random restarts.

use courier_core::{Cell, Path, PlanError, Tick};
use courier_grid::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::planner::Plan;

/// Budgets and seed for the local-search planner.
///
/// The RNG for restart sampling is a ChaCha8 stream derived from
/// `seed XOR now`, so identical calls reproduce identical restarts while
/// successive replans within one run stay decorrelated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalSearchConfig {
    /// Random restarts attempted after the direct climb. Default: 10.
    pub max_restarts: u32,
    /// Moves allowed per individual climb. Default: 1000.
    pub max_steps: u32,
    /// Seed for restart sampling. Default: 0.
    pub seed: u64,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_restarts: 10,
            max_steps: 1000,
            seed: 0,
        }
    }
}

/// Best-effort planning by hill climbing toward the goal.
///
/// The climber greedily steps to the neighbor with the smallest Manhattan
/// distance to the goal, stopping at a local optimum. On failure it
/// restarts through a uniformly random traversable intermediate cell and
/// climbs start -> intermediate -> goal, keeping the cheapest complete
/// path found across all restarts. No optimality or completeness
/// guarantee: a blocked or deceptive map exhausts the restart budget and
/// reports [`PlanError::NoPathFound`].
pub(crate) fn plan(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    now: Tick,
    config: &LocalSearchConfig,
) -> Result<Plan, PlanError> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed ^ now.0);
    let mut nodes_expanded = 0u64;
    let mut best: Option<(Vec<Cell>, u64)> = None;

    // Direct climb first; restarts only refine or rescue it.
    if let Some(climb) = hill_climb(grid, start, goal, now, config.max_steps, &mut nodes_expanded)
    {
        best = Some(climb);
    }

    for _ in 0..config.max_restarts {
        let Some(intermediate) = random_traversable(grid, &mut rng) else {
            break;
        };
        let Some((head, _)) =
            hill_climb(grid, start, intermediate, now, config.max_steps, &mut nodes_expanded)
        else {
            continue;
        };
        let resume = now.plus(head.len() as u64 - 1);
        let Some((tail, _)) =
            hill_climb(grid, intermediate, goal, resume, config.max_steps, &mut nodes_expanded)
        else {
            continue;
        };

        let mut cells = head;
        cells.extend_from_slice(&tail[1..]);
        let cost = route_cost(grid, &cells);
        if best.as_ref().map_or(true, |(_, b)| cost < *b) {
            best = Some((cells, cost));
        }
    }

    match best {
        Some((cells, cost)) => Ok(Plan {
            path: Path::new(cells, cost),
            nodes_expanded,
        }),
        None => Err(PlanError::NoPathFound),
    }
}

/// Greedy climb from `from` to `to`, time-aware from tick `now`.
///
/// Moves only strictly downhill in Manhattan distance; returns the cell
/// sequence and its terrain cost, or `None` if a local optimum or the
/// step budget intervenes before `to` is reached.
fn hill_climb(
    grid: &Grid,
    from: Cell,
    to: Cell,
    now: Tick,
    max_steps: u32,
    nodes_expanded: &mut u64,
) -> Option<(Vec<Cell>, u64)> {
    let mut current = from;
    let mut cells = vec![from];
    let mut cost = 0u64;

    for _ in 0..max_steps {
        *nodes_expanded += 1;
        if current == to {
            return Some((cells, cost));
        }

        let arrival = now.plus(cells.len() as u64);
        let mut best_step: Option<(Cell, u32, u64)> = None;
        for neighbor in grid.neighbors(current) {
            if grid.is_occupied(neighbor, arrival) {
                continue;
            }
            let step_cost = match grid.cost(neighbor) {
                Ok(c) => u64::from(c),
                Err(_) => continue,
            };
            let dist = neighbor.manhattan(to);
            // First-wins among equal distances keeps climbs deterministic.
            if best_step.map_or(true, |(_, d, _)| dist < d) {
                best_step = Some((neighbor, dist, step_cost));
            }
        }

        match best_step {
            Some((cell, dist, step_cost)) if dist < current.manhattan(to) => {
                current = cell;
                cells.push(cell);
                cost += step_cost;
            }
            _ => return None, // local optimum
        }
    }
    None
}

/// Sample a uniformly random traversable cell, or `None` if the grid is
/// so obstructed that the attempt budget runs out.
fn random_traversable(grid: &Grid, rng: &mut ChaCha8Rng) -> Option<Cell> {
    for _ in 0..64 {
        let cell = Cell::new(
            rng.gen_range(0..grid.width() as i32),
            rng.gen_range(0..grid.height() as i32),
        );
        if grid.is_traversable(cell) {
            return Some(cell);
        }
    }
    None
}

fn route_cost(grid: &Grid, cells: &[Cell]) -> u64 {
    cells[1..]
        .iter()
        .map(|&c| grid.cost(c).map(u64::from).unwrap_or(0))
        .sum()
}
