//! ASCII rendering of a finished run.

use courier_core::Cell;
use courier_grid::Grid;

/// Render the grid with the agent's traveled route.
///
/// Legend: `S` start, `G` goal, `*` traveled cell, `#` static obstacle,
/// `2`..`9` terrain cost (capped at 9), `.` unit-cost terrain. Dynamic
/// obstacle origins render as `o` when nothing else claims the cell.
pub fn render(grid: &Grid, trail: &[Cell], start: Cell, goal: Cell) -> String {
    let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            out.push(glyph(grid, trail, start, goal, Cell::new(x, y)));
        }
        out.push('\n');
    }
    out
}

fn glyph(grid: &Grid, trail: &[Cell], start: Cell, goal: Cell, cell: Cell) -> char {
    if cell == start {
        return 'S';
    }
    if cell == goal {
        return 'G';
    }
    if trail.contains(&cell) {
        return '*';
    }
    if !grid.is_traversable(cell) {
        return '#';
    }
    if grid.dynamic_obstacles().iter().any(|d| d.origin() == cell) {
        return 'o';
    }
    match grid.cost(cell) {
        Ok(1) => '.',
        Ok(cost) => char::from_digit(cost.min(9), 10).unwrap_or('9'),
        Err(_) => '#',
    }
}
