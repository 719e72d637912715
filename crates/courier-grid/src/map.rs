//! ASCII map-file loading.
//!
//! Line-oriented text format; blank lines and `#` comments are ignored:
//!
//! ```text
//! width height
//! S x y             start cell (exactly once)
//! G x y             goal cell (exactly once)
//! T x y cost        terrain cost override, cost >= 1 (default is 1)
//! O x y             static obstacle
//! D x y dx:dy,...   dynamic obstacle: origin + cyclic unit-move list
//! ```
//!
//! A `D` schedule is a closed patrol loop: its unit moves must sum to
//! zero displacement, and the position at tick `t` is entry `t % period`
//! of the compiled cycle. A move that would leave the grid or enter a
//! static obstacle keeps the obstacle in place for that step.
//!
//! The loader is generic over [`BufRead`] so tests can parse from byte
//! slices and production code from files. Errors carry 1-based line
//! numbers. The returned [`MapFile`] holds a fully built [`Grid`] plus
//! in-bounds start and goal cells; whether those cells are traversable is
//! the planner's endpoint check, made at call time.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path as FsPath;

use courier_core::Cell;

use crate::error::GridError;
use crate::grid::Grid;

/// A parsed and validated map: the grid plus delivery endpoints.
#[derive(Clone, Debug)]
pub struct MapFile {
    /// The built environment.
    pub grid: Grid,
    /// The agent's starting cell.
    pub start: Cell,
    /// The delivery goal cell.
    pub goal: Cell,
}

/// Errors from map parsing and validation.
#[derive(Debug)]
pub enum MapError {
    /// Underlying I/O failure.
    Io(io::Error),
    /// A line could not be parsed.
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        reason: String,
    },
    /// The first content line must be `width height`.
    MissingDimensions,
    /// A `S` or `G` line appeared more than once.
    DuplicateTag {
        /// 1-based line number of the repeat.
        line: usize,
        /// The repeated tag character.
        tag: char,
    },
    /// No `S` line in the file.
    MissingStart,
    /// No `G` line in the file.
    MissingGoal,
    /// A coordinate fell outside the declared dimensions.
    OutOfBounds {
        /// 1-based line number.
        line: usize,
        /// The offending cell.
        cell: Cell,
    },
    /// Grid construction rejected the parsed content.
    Grid {
        /// 1-based line number of the offending entry.
        line: usize,
        /// The underlying grid error.
        source: GridError,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Parse { line, reason } => write!(f, "line {line}: {reason}"),
            Self::MissingDimensions => {
                write!(f, "first content line must be `width height`")
            }
            Self::DuplicateTag { line, tag } => {
                write!(f, "line {line}: duplicate `{tag}` entry")
            }
            Self::MissingStart => write!(f, "map declares no start (`S x y`)"),
            Self::MissingGoal => write!(f, "map declares no goal (`G x y`)"),
            Self::OutOfBounds { line, cell } => {
                write!(f, "line {line}: cell {cell} is out of bounds")
            }
            Self::Grid { line, source } => write!(f, "line {line}: {source}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for MapError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Load a map from a filesystem path.
pub fn load_map_path(path: &FsPath) -> Result<MapFile, MapError> {
    load_map(BufReader::new(File::open(path)?))
}

/// Load a map from any buffered reader.
pub fn load_map<R: BufRead>(reader: R) -> Result<MapFile, MapError> {
    let mut dims: Option<(u32, u32)> = None;
    let mut start: Option<(usize, Cell)> = None;
    let mut goal: Option<(usize, Cell)> = None;
    let mut terrain: Vec<(usize, Cell, u32)> = Vec::new();
    let mut statics: Vec<(usize, Cell)> = Vec::new();
    let mut dynamics: Vec<(usize, Cell, Vec<(i32, i32)>)> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = content.split_whitespace().collect();

        match fields[0] {
            "S" => {
                if start.is_some() {
                    return Err(MapError::DuplicateTag {
                        line: lineno,
                        tag: 'S',
                    });
                }
                start = Some((lineno, parse_cell(&fields[1..], lineno)?));
            }
            "G" => {
                if goal.is_some() {
                    return Err(MapError::DuplicateTag {
                        line: lineno,
                        tag: 'G',
                    });
                }
                goal = Some((lineno, parse_cell(&fields[1..], lineno)?));
            }
            "T" => {
                if fields.len() != 4 {
                    return Err(parse_err(lineno, "expected `T x y cost`"));
                }
                let cell = parse_cell(&fields[1..3], lineno)?;
                let cost = parse_num::<u32>(fields[3], lineno, "cost")?;
                terrain.push((lineno, cell, cost));
            }
            "O" => {
                statics.push((lineno, parse_cell(&fields[1..], lineno)?));
            }
            "D" => {
                if fields.len() < 3 || fields.len() > 4 {
                    return Err(parse_err(lineno, "expected `D x y [schedule]`"));
                }
                let cell = parse_cell(&fields[1..3], lineno)?;
                let moves = match fields.get(3) {
                    Some(spec) => parse_schedule(spec, lineno)?,
                    None => Vec::new(),
                };
                dynamics.push((lineno, cell, moves));
            }
            _ => {
                // The untagged line carries the dimensions, once.
                if dims.is_some() {
                    return Err(parse_err(
                        lineno,
                        &format!("unrecognized tag `{}`", fields[0]),
                    ));
                }
                if fields.len() != 2 {
                    return Err(parse_err(lineno, "expected `width height`"));
                }
                let w = parse_num::<u32>(fields[0], lineno, "width")?;
                let h = parse_num::<u32>(fields[1], lineno, "height")?;
                dims = Some((w, h));
            }
        }
    }

    let (width, height) = dims.ok_or(MapError::MissingDimensions)?;
    let mut grid = Grid::new(width, height).map_err(|source| MapError::Grid { line: 1, source })?;

    // Static layout first: schedule compilation consults it.
    for (line, cell, cost) in terrain {
        grid.set_terrain_cost(cell, cost)
            .map_err(|source| grid_err(line, source))?;
    }
    for (line, cell) in statics {
        grid.add_static_obstacle(cell)
            .map_err(|source| grid_err(line, source))?;
    }
    for (line, cell, moves) in dynamics {
        grid.add_dynamic_obstacle(cell, &moves)
            .map_err(|source| grid_err(line, source))?;
    }

    let (start_line, start) = start.ok_or(MapError::MissingStart)?;
    let (goal_line, goal) = goal.ok_or(MapError::MissingGoal)?;
    for (line, cell) in [(start_line, start), (goal_line, goal)] {
        if !grid.contains(cell) {
            return Err(MapError::OutOfBounds { line, cell });
        }
    }

    Ok(MapFile { grid, start, goal })
}

fn parse_err(line: usize, reason: &str) -> MapError {
    MapError::Parse {
        line,
        reason: reason.to_string(),
    }
}

fn grid_err(line: usize, source: GridError) -> MapError {
    match source {
        GridError::OutOfBounds { cell } => MapError::OutOfBounds { line, cell },
        source => MapError::Grid { line, source },
    }
}

fn parse_num<T: std::str::FromStr>(s: &str, line: usize, what: &str) -> Result<T, MapError> {
    s.parse()
        .map_err(|_| parse_err(line, &format!("invalid {what} `{s}`")))
}

fn parse_cell(fields: &[&str], line: usize) -> Result<Cell, MapError> {
    if fields.len() != 2 {
        return Err(parse_err(line, "expected `x y`"));
    }
    Ok(Cell::new(
        parse_num(fields[0], line, "x")?,
        parse_num(fields[1], line, "y")?,
    ))
}

/// Parse a `dx:dy,dx:dy,...` schedule. Each component must be -1, 0, or
/// 1, and the moves must sum to zero so the cycle closes back on the
/// origin instead of teleporting there at wrap-around.
fn parse_schedule(spec: &str, line: usize) -> Result<Vec<(i32, i32)>, MapError> {
    let mut moves = Vec::new();
    let (mut net_dx, mut net_dy) = (0i32, 0i32);
    for token in spec.split(',') {
        let (dx, dy) = token
            .split_once(':')
            .ok_or_else(|| parse_err(line, &format!("invalid schedule move `{token}`")))?;
        let dx = parse_num::<i32>(dx, line, "dx")?;
        let dy = parse_num::<i32>(dy, line, "dy")?;
        if dx.abs() > 1 || dy.abs() > 1 {
            return Err(parse_err(
                line,
                &format!("schedule move `{token}` is not a unit step"),
            ));
        }
        net_dx += dx;
        net_dy += dy;
        moves.push((dx, dy));
    }
    if net_dx != 0 || net_dy != 0 {
        return Err(parse_err(
            line,
            &format!("schedule does not return to its origin (net displacement {net_dx}:{net_dy})"),
        ));
    }
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::Tick;

    fn load(text: &str) -> Result<MapFile, MapError> {
        load_map(text.as_bytes())
    }

    const BASIC: &str = "\
# delivery test map
10 10
S 0 0
G 9 9
T 3 3 5
O 4 4
D 5 5 1:0,-1:0
";

    // ── Happy path ──────────────────────────────────────────────

    #[test]
    fn loads_a_complete_map() {
        let map = load(BASIC).unwrap();
        assert_eq!(map.grid.width(), 10);
        assert_eq!(map.grid.height(), 10);
        assert_eq!(map.start, Cell::new(0, 0));
        assert_eq!(map.goal, Cell::new(9, 9));
        assert_eq!(map.grid.cost(Cell::new(3, 3)), Ok(5));
        assert!(!map.grid.is_traversable(Cell::new(4, 4)));
        assert!(map.grid.is_occupied(Cell::new(5, 5), Tick(0)));
        assert!(map.grid.is_occupied(Cell::new(6, 5), Tick(1)));
    }

    #[test]
    fn stationary_dynamic_obstacle_needs_no_schedule() {
        let map = load("3 3\nS 0 0\nG 2 2\nD 1 1\n").unwrap();
        assert!(map.grid.is_occupied(Cell::new(1, 1), Tick(7)));
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let map = load("\n# hi\n\n2 2\nS 0 0\n# mid\nG 1 1\n").unwrap();
        assert_eq!(map.grid.cell_count(), 4);
    }

    // ── Structural errors ───────────────────────────────────────

    #[test]
    fn missing_dimensions_is_an_error() {
        assert!(matches!(
            load("S 0 0\nG 1 1\n"),
            Err(MapError::MissingDimensions)
        ));
        assert!(matches!(load(""), Err(MapError::MissingDimensions)));
    }

    #[test]
    fn out_of_bounds_start_carries_its_line() {
        let r = load("3 3\nS 7 7\nG 2 2\n");
        assert!(matches!(r, Err(MapError::OutOfBounds { line: 2, .. })));
    }

    #[test]
    fn missing_endpoints_are_errors() {
        assert!(matches!(load("3 3\nG 1 1\n"), Err(MapError::MissingStart)));
        assert!(matches!(load("3 3\nS 0 0\n"), Err(MapError::MissingGoal)));
    }

    #[test]
    fn duplicate_start_is_an_error() {
        let r = load("3 3\nS 0 0\nS 1 1\nG 2 2\n");
        assert!(matches!(
            r,
            Err(MapError::DuplicateTag { line: 3, tag: 'S' })
        ));
    }

    #[test]
    fn unknown_tag_is_an_error() {
        assert!(matches!(
            load("3 3\nS 0 0\nG 2 2\nQ 1 1\n"),
            Err(MapError::Parse { line: 4, .. })
        ));
    }

    // ── Content errors ──────────────────────────────────────────

    #[test]
    fn terrain_cost_below_one_is_rejected() {
        let r = load("3 3\nS 0 0\nG 2 2\nT 1 1 0\n");
        assert!(matches!(
            r,
            Err(MapError::Grid {
                line: 4,
                source: GridError::BadTerrainCost { .. }
            })
        ));
    }

    #[test]
    fn obstacle_out_of_bounds_carries_line_number() {
        let r = load("3 3\nS 0 0\nG 2 2\nO 5 5\n");
        assert!(matches!(r, Err(MapError::OutOfBounds { line: 4, .. })));
    }

    #[test]
    fn non_unit_schedule_move_is_rejected() {
        let r = load("5 5\nS 0 0\nG 4 4\nD 2 2 2:0\n");
        assert!(matches!(r, Err(MapError::Parse { line: 4, .. })));
    }

    #[test]
    fn malformed_schedule_token_is_rejected() {
        let r = load("5 5\nS 0 0\nG 4 4\nD 2 2 10\n");
        assert!(matches!(r, Err(MapError::Parse { line: 4, .. })));
    }

    #[test]
    fn schedule_that_does_not_close_its_loop_is_rejected() {
        // A lone eastward move would teleport the obstacle back to its
        // origin at wrap-around; the format requires a closed patrol.
        let r = load("5 5\nS 0 0\nG 4 4\nD 2 2 1:0\n");
        assert!(matches!(r, Err(MapError::Parse { line: 4, .. })));

        let r = load("5 5\nS 0 0\nG 4 4\nD 2 2 1:0,0:1,-1:0\n");
        assert!(matches!(r, Err(MapError::Parse { line: 4, .. })));
    }

    #[test]
    fn schedule_compiles_against_static_layout_regardless_of_line_order() {
        // The `O` line comes after the `D` line, but compilation still
        // sees the wall because static layout is applied first.
        let map = load("5 5\nS 0 0\nG 4 4\nD 1 1 1:0,-1:0\nO 2 1\n").unwrap();
        assert!(!map.grid.is_occupied(Cell::new(2, 1), Tick(1)));
        assert!(map.grid.is_occupied(Cell::new(1, 1), Tick(1)));
    }
}
