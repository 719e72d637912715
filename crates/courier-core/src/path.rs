//! Committed paths.

use crate::Cell;

/// An ordered sequence of 4-connected cells from start to goal, annotated
/// with cumulative terrain cost.
///
/// The cost convention is the terrain cost of every *entered* cell, all
/// cells after the first. A trivial path (start == goal) therefore has
/// cost 0 and zero steps. Planners are responsible for the 4-connectivity
/// invariant; `Path` only stores the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
    cost: u64,
}

impl Path {
    /// Build a path from its cell sequence and precomputed cost.
    ///
    /// `cells` must be non-empty; the single-cell case is the trivial
    /// start-equals-goal path.
    pub fn new(cells: Vec<Cell>, cost: u64) -> Self {
        debug_assert!(!cells.is_empty(), "a path always contains its start");
        Self { cells, cost }
    }

    /// The zero-length path for start == goal.
    pub fn trivial(at: Cell) -> Self {
        Self {
            cells: vec![at],
            cost: 0,
        }
    }

    /// The cell sequence, start first.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cumulative terrain cost of all entered cells.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Number of moves (cells minus one).
    pub fn step_count(&self) -> usize {
        self.cells.len() - 1
    }

    /// The starting cell.
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    /// The final cell.
    pub fn goal(&self) -> Cell {
        // Constructors guarantee at least one cell.
        self.cells[self.cells.len() - 1]
    }

    /// The cell at plan index `i`, if any.
    pub fn get(&self, i: usize) -> Option<Cell> {
        self.cells.get(i).copied()
    }

    /// Whether this is the trivial zero-step path.
    pub fn is_trivial(&self) -> bool {
        self.cells.len() == 1
    }
}
