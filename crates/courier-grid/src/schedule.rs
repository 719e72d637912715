//! Dynamic obstacles with compiled cyclic schedules.

use courier_core::{Cell, Tick};

/// A moving obstacle whose position is a pure function of the clock.
///
/// The map format describes a dynamic obstacle as an origin plus a cyclic
/// list of relative unit moves (a patrol loop). At grid-build time the
/// move list is compiled into a closed cycle of absolute positions: entry
/// `k` is where the obstacle sits at tick `t` with `t % period == k`.
/// Moves that would leave the grid or enter a static obstacle are skipped,
/// leaving the obstacle in place for that step, so the compiled cycle is
/// always fully traversable.
///
/// The schedule is deterministic and known in advance: planners may
/// query occupancy at any future tick without simulating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DynamicObstacle {
    origin: Cell,
    cycle: Vec<Cell>,
}

impl DynamicObstacle {
    /// Compile a move list into a position cycle.
    ///
    /// `traversable` reports whether a candidate cell is in bounds and
    /// free of static obstacles; the grid supplies it so this module
    /// stays independent of grid internals. An empty move list yields a
    /// stationary obstacle pinned to `origin`.
    pub(crate) fn compile<F>(origin: Cell, moves: &[(i32, i32)], traversable: F) -> Self
    where
        F: Fn(Cell) -> bool,
    {
        let mut cycle = Vec::with_capacity(moves.len().max(1));
        cycle.push(origin);
        let mut pos = origin;
        // Position k is reached after applying the first k moves; the
        // final move wraps the patrol back toward the origin slot.
        for &(dx, dy) in moves.iter().take(moves.len().saturating_sub(1)) {
            let candidate = pos.offset(dx, dy);
            if traversable(candidate) {
                pos = candidate;
            }
            cycle.push(pos);
        }
        Self { origin, cycle }
    }

    /// The obstacle's tick-zero position.
    pub fn origin(&self) -> Cell {
        self.origin
    }

    /// Length of the patrol cycle in ticks.
    pub fn period(&self) -> u64 {
        self.cycle.len() as u64
    }

    /// Where the obstacle sits at `tick`.
    pub fn position_at(&self, tick: Tick) -> Cell {
        self.cycle[(tick.0 % self.period()) as usize]
    }

    /// Whether the obstacle occupies `cell` at `tick`.
    pub fn occupies(&self, cell: Cell, tick: Tick) -> bool {
        self.position_at(tick) == cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(_: Cell) -> bool {
        true
    }

    #[test]
    fn empty_move_list_is_stationary() {
        let o = DynamicObstacle::compile(Cell::new(3, 3), &[], open);
        assert_eq!(o.period(), 1);
        for t in 0..10 {
            assert_eq!(o.position_at(Tick(t)), Cell::new(3, 3));
        }
    }

    #[test]
    fn square_patrol_cycles() {
        // Right, down, left, up: a 2x2 patrol loop.
        let moves = [(1, 0), (0, 1), (-1, 0), (0, -1)];
        let o = DynamicObstacle::compile(Cell::new(1, 1), &moves, open);
        assert_eq!(o.period(), 4);
        assert_eq!(o.position_at(Tick(0)), Cell::new(1, 1));
        assert_eq!(o.position_at(Tick(1)), Cell::new(2, 1));
        assert_eq!(o.position_at(Tick(2)), Cell::new(2, 2));
        assert_eq!(o.position_at(Tick(3)), Cell::new(1, 2));
        // Wraps back to the origin slot.
        assert_eq!(o.position_at(Tick(4)), Cell::new(1, 1));
        assert_eq!(o.position_at(Tick(7)), Cell::new(1, 2));
    }

    #[test]
    fn blocked_move_keeps_obstacle_in_place() {
        let wall = Cell::new(2, 1);
        let moves = [(1, 0), (-1, 0)];
        let o = DynamicObstacle::compile(Cell::new(1, 1), &moves, |c| c != wall);
        assert_eq!(o.period(), 2);
        assert_eq!(o.position_at(Tick(0)), Cell::new(1, 1));
        // The move into the wall is skipped.
        assert_eq!(o.position_at(Tick(1)), Cell::new(1, 1));
    }

    #[test]
    fn occupies_matches_position() {
        let moves = [(0, 1), (0, -1)];
        let o = DynamicObstacle::compile(Cell::new(0, 0), &moves, open);
        assert!(o.occupies(Cell::new(0, 0), Tick(0)));
        assert!(o.occupies(Cell::new(0, 1), Tick(1)));
        assert!(!o.occupies(Cell::new(0, 1), Tick(0)));
    }
}
