//! The grid environment.

use courier_core::{Cell, CellError, Tick};
use smallvec::SmallVec;

use crate::error::GridError;
use crate::schedule::DynamicObstacle;

/// Per-cell static state.
#[derive(Clone, Copy, Debug, PartialEq)]
struct CellState {
    terrain_cost: u32,
    obstacle: bool,
}

impl Default for CellState {
    fn default() -> Self {
        Self {
            terrain_cost: 1,
            obstacle: false,
        }
    }
}

/// A fixed-size 2D city grid with terrain costs, static obstacles, and
/// dynamic-obstacle schedules.
///
/// Cells are addressed `(x, y)` with `0 <= x < width` and `0 <= y <
/// height`; every cell defaults to terrain cost 1. The grid is built once
/// (by hand or via [`crate::map::load_map`]) and is read-only during
/// planning and execution; the advancing clock is passed into
/// [`is_occupied`](Grid::is_occupied) rather than stored here.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<CellState>,
    dynamics: Vec<DynamicObstacle>,
}

impl Grid {
    /// Maximum dimension size: coordinates are `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an empty grid of `width * height` unit-cost cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            width,
            height,
            cells: vec![CellState::default(); (width as usize) * (height as usize)],
            dynamics: Vec::new(),
        })
    }

    /// Grid width (number of columns).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height (number of rows).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total cell count.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some((cell.y as usize) * (self.width as usize) + cell.x as usize)
        } else {
            None
        }
    }

    // ── Builder operations ──────────────────────────────────────
    //
    // Applied before the grid is handed to planners. Static layout must
    // be final before any dynamic obstacle is added, because schedule
    // compilation consults the static obstacle map.

    /// Override the terrain cost of `cell`. Cost must be at least 1.
    pub fn set_terrain_cost(&mut self, cell: Cell, cost: u32) -> Result<(), GridError> {
        if cost < 1 {
            return Err(GridError::BadTerrainCost { cell, cost });
        }
        let idx = self.index(cell).ok_or(GridError::OutOfBounds { cell })?;
        self.cells[idx].terrain_cost = cost;
        Ok(())
    }

    /// Mark `cell` as a static obstacle.
    pub fn add_static_obstacle(&mut self, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(cell).ok_or(GridError::OutOfBounds { cell })?;
        self.cells[idx].obstacle = true;
        Ok(())
    }

    /// Add a dynamic obstacle at `origin` with a cyclic move list.
    ///
    /// The moves are compiled into a closed position cycle against the
    /// current static layout; see [`DynamicObstacle`].
    pub fn add_dynamic_obstacle(
        &mut self,
        origin: Cell,
        moves: &[(i32, i32)],
    ) -> Result<(), GridError> {
        if !self.contains(origin) {
            return Err(GridError::OutOfBounds { cell: origin });
        }
        if !self.is_traversable(origin) {
            return Err(GridError::OriginBlocked { cell: origin });
        }
        let obstacle = DynamicObstacle::compile(origin, moves, |c| self.is_traversable(c));
        self.dynamics.push(obstacle);
        Ok(())
    }

    // ── Query surface ───────────────────────────────────────────

    /// Whether `cell` lies within the grid bounds.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    /// Whether `cell` is in bounds and not a static obstacle.
    pub fn is_traversable(&self, cell: Cell) -> bool {
        match self.index(cell) {
            Some(idx) => !self.cells[idx].obstacle,
            None => false,
        }
    }

    /// Terrain cost of entering `cell`.
    ///
    /// Fails with [`CellError::OutOfBounds`] or
    /// [`CellError::StaticObstacle`]; an obstacle's cost is undefined,
    /// never infinite.
    pub fn cost(&self, cell: Cell) -> Result<u32, CellError> {
        let idx = self.index(cell).ok_or(CellError::OutOfBounds { cell })?;
        let state = self.cells[idx];
        if state.obstacle {
            return Err(CellError::StaticObstacle { cell });
        }
        Ok(state.terrain_cost)
    }

    /// Whether any dynamic obstacle occupies `cell` at `tick`.
    ///
    /// Dynamic occupancy is deliberately not part of
    /// [`neighbors`](Grid::neighbors): planners must evaluate it at the
    /// tick a path would actually arrive, not at expansion time.
    pub fn is_occupied(&self, cell: Cell, tick: Tick) -> bool {
        self.dynamics.iter().any(|d| d.occupies(cell, tick))
    }

    /// The up to 4 orthogonally adjacent cells that are in bounds and not
    /// static obstacles, in fixed N/S/W/E order.
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        let offsets: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
        let mut result = SmallVec::new();
        for (dx, dy) in offsets {
            let n = cell.offset(dx, dy);
            if self.is_traversable(n) {
                result.push(n);
            }
        }
        result
    }

    /// The registered dynamic obstacles.
    pub fn dynamic_obstacles(&self) -> &[DynamicObstacle] {
        &self.dynamics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> Cell {
        Cell::new(x, y)
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_rejects_zero_dimension() {
        assert_eq!(Grid::new(0, 5), Err(GridError::EmptyGrid));
        assert_eq!(Grid::new(5, 0), Err(GridError::EmptyGrid));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Grid::new(big, 1),
            Err(GridError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            Grid::new(1, big),
            Err(GridError::DimensionTooLarge { name: "height", .. })
        ));
    }

    #[test]
    fn default_terrain_cost_is_one() {
        let g = Grid::new(4, 4).unwrap();
        assert_eq!(g.cost(c(2, 3)), Ok(1));
    }

    // ── Builder validation ──────────────────────────────────────

    #[test]
    fn set_terrain_cost_rejects_zero() {
        let mut g = Grid::new(4, 4).unwrap();
        assert_eq!(
            g.set_terrain_cost(c(1, 1), 0),
            Err(GridError::BadTerrainCost {
                cell: c(1, 1),
                cost: 0
            })
        );
    }

    #[test]
    fn builder_ops_reject_out_of_bounds() {
        let mut g = Grid::new(4, 4).unwrap();
        assert!(matches!(
            g.set_terrain_cost(c(4, 0), 2),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            g.add_static_obstacle(c(-1, 2)),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            g.add_dynamic_obstacle(c(0, 9), &[]),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn dynamic_origin_on_static_obstacle_is_rejected() {
        let mut g = Grid::new(4, 4).unwrap();
        g.add_static_obstacle(c(2, 2)).unwrap();
        assert_eq!(
            g.add_dynamic_obstacle(c(2, 2), &[]),
            Err(GridError::OriginBlocked { cell: c(2, 2) })
        );
    }

    // ── Cost queries ────────────────────────────────────────────

    #[test]
    fn cost_fails_out_of_bounds_and_on_obstacles() {
        let mut g = Grid::new(4, 4).unwrap();
        g.add_static_obstacle(c(1, 1)).unwrap();
        g.set_terrain_cost(c(2, 2), 7).unwrap();

        assert_eq!(g.cost(c(2, 2)), Ok(7));
        assert_eq!(g.cost(c(9, 0)), Err(CellError::OutOfBounds { cell: c(9, 0) }));
        assert_eq!(
            g.cost(c(1, 1)),
            Err(CellError::StaticObstacle { cell: c(1, 1) })
        );
    }

    // ── Neighbors ───────────────────────────────────────────────

    #[test]
    fn neighbors_interior_has_four() {
        let g = Grid::new(5, 5).unwrap();
        let n = g.neighbors(c(2, 2));
        assert_eq!(n.len(), 4);
        assert!(n.contains(&c(2, 1))); // north
        assert!(n.contains(&c(2, 3))); // south
        assert!(n.contains(&c(1, 2))); // west
        assert!(n.contains(&c(3, 2))); // east
    }

    #[test]
    fn neighbors_corner_has_two() {
        let g = Grid::new(5, 5).unwrap();
        let n = g.neighbors(c(0, 0));
        assert_eq!(n.len(), 2);
        assert!(n.contains(&c(0, 1)));
        assert!(n.contains(&c(1, 0)));
    }

    #[test]
    fn neighbors_filters_static_but_not_dynamic() {
        let mut g = Grid::new(5, 5).unwrap();
        g.add_static_obstacle(c(2, 1)).unwrap();
        g.add_dynamic_obstacle(c(2, 3), &[]).unwrap();

        let n = g.neighbors(c(2, 2));
        assert!(!n.contains(&c(2, 1)));
        // Dynamic occupancy is the planner's job, at the right tick.
        assert!(n.contains(&c(2, 3)));
        assert_eq!(n.len(), 3);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let g = Grid::new(1, 1).unwrap();
        assert!(g.neighbors(c(0, 0)).is_empty());
    }

    // ── Occupancy ───────────────────────────────────────────────

    #[test]
    fn is_occupied_follows_schedule() {
        let mut g = Grid::new(5, 5).unwrap();
        g.add_dynamic_obstacle(c(1, 1), &[(1, 0), (-1, 0)]).unwrap();

        assert!(g.is_occupied(c(1, 1), Tick(0)));
        assert!(g.is_occupied(c(2, 1), Tick(1)));
        assert!(!g.is_occupied(c(1, 1), Tick(1)));
        assert!(g.is_occupied(c(1, 1), Tick(2)));
    }

    #[test]
    fn schedule_compilation_respects_static_layout() {
        let mut g = Grid::new(5, 5).unwrap();
        g.add_static_obstacle(c(2, 1)).unwrap();
        g.add_dynamic_obstacle(c(1, 1), &[(1, 0), (-1, 0)]).unwrap();

        // The eastward move is blocked, so the obstacle never leaves (1,1).
        assert!(g.is_occupied(c(1, 1), Tick(1)));
        assert!(!g.is_occupied(c(2, 1), Tick(1)));
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbors_are_traversable_and_adjacent(
            w in 1u32..12, h in 1u32..12,
            x in 0i32..12, y in 0i32..12,
        ) {
            let g = Grid::new(w, h).unwrap();
            let cell = c(x % w as i32, y % h as i32);
            for n in g.neighbors(cell) {
                prop_assert!(g.is_traversable(n));
                prop_assert_eq!(cell.manhattan(n), 1);
            }
        }

        #[test]
        fn neighbor_relation_is_symmetric(
            w in 2u32..10, h in 2u32..10,
            x in 0i32..10, y in 0i32..10,
        ) {
            let g = Grid::new(w, h).unwrap();
            let cell = c(x % w as i32, y % h as i32);
            for n in g.neighbors(cell) {
                prop_assert!(g.neighbors(n).contains(&cell));
            }
        }
    }
}
