//! The puzzle model: grid geometry, slot variables, and the overlap
//! relation between crossing slots.
//!
//! A [`Grid`] is a rectangular matrix of open (fillable) and blocked cells.
//! Building a [`Puzzle`] scans the grid once for maximal runs of open cells
//! in each direction; every run of length two or more becomes a
//! [`Variable`]. Variables are identified from then on by their index into
//! [`Puzzle::variables`] (a [`VariableId`]), so the rest of the crate can
//! use plain arena indexing instead of hashing variables repeatedly.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};

/// Stable index of a variable within its [`Puzzle`], assigned in discovery
/// order at construction time.
pub type VariableId = usize;

/// Orientation of a slot in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A crossword slot: a maximal run of open cells with a fixed start,
/// direction, and length. Two variables are equal iff all fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Variable {
    /// Row of the first cell.
    pub row: usize,
    /// Column of the first cell.
    pub col: usize,
    pub direction: Direction,
    /// Number of cells; always at least 2.
    pub length: usize,
}

impl Variable {
    /// The grid position of the `k`-th cell of this slot.
    pub fn cell(&self, k: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        }
    }

    /// Iterates over the grid positions covered by this slot.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |k| self.cell(k))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} [{}]",
            self.row, self.col, self.direction, self.length
        )
    }
}

/// A rectangular matrix of open and blocked cells, stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    open: Vec<bool>,
}

impl Grid {
    /// Parses a structure description: `_` marks an open cell, any other
    /// character a blocked one. Lines shorter than the widest line are
    /// padded with blocked cells.
    pub fn parse(contents: &str) -> Result<Self> {
        let lines: Vec<&str> = contents.lines().collect();
        let height = lines.len();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(Error::EmptyGrid);
        }

        let mut open = Vec::with_capacity(width * height);
        for line in &lines {
            let mut cells = 0;
            for ch in line.chars() {
                open.push(ch == '_');
                cells += 1;
            }
            for _ in cells..width {
                open.push(false);
            }
        }

        Ok(Self {
            width,
            height,
            open,
        })
    }

    /// Reads and parses a structure file from disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at (`row`, `col`) is fillable.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.open[row * self.width + col]
    }
}

/// The full puzzle model: the grid, its slot variables, and the overlap and
/// neighbor relations between them.
///
/// Construction is pure and never fails for a well-formed grid. The overlap
/// map is keyed by the canonical ordered pair of variable ids (lower id
/// first); [`Puzzle::overlap`] flips the index pair when queried in the
/// other direction.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    variables: Vec<Variable>,
    overlaps: HashMap<(VariableId, VariableId), (usize, usize)>,
    neighbors: Vec<Vec<VariableId>>,
}

impl Puzzle {
    pub fn new(grid: Grid) -> Self {
        let variables = find_variables(&grid);

        let mut overlaps = HashMap::new();
        for (x, a) in variables.iter().enumerate() {
            for (offset, b) in variables[x + 1..].iter().enumerate() {
                let y = x + 1 + offset;
                if let Some(indices) = crossing(a, b) {
                    overlaps.insert((x, y), indices);
                }
            }
        }

        let mut neighbors = vec![Vec::new(); variables.len()];
        for &(x, y) in overlaps.keys() {
            neighbors[x].push(y);
            neighbors[y].push(x);
        }
        for list in &mut neighbors {
            list.sort_unstable();
        }

        Self {
            grid,
            variables,
            overlaps,
            neighbors,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id]
    }

    /// The overlap between `x` and `y`, if they cross: the index into `x`'s
    /// word and the index into `y`'s word where the shared cell falls.
    pub fn overlap(&self, x: VariableId, y: VariableId) -> Option<(usize, usize)> {
        if x < y {
            self.overlaps.get(&(x, y)).copied()
        } else {
            self.overlaps.get(&(y, x)).map(|&(i, j)| (j, i))
        }
    }

    /// The variables overlapping `x`, in ascending id order. Never contains
    /// `x` itself.
    pub fn neighbors(&self, x: VariableId) -> &[VariableId] {
        &self.neighbors[x]
    }
}

/// Computes the single shared cell between two slots, if any. Slots of the
/// same orientation never share a cell: maximal runs in one direction are
/// disjoint.
fn crossing(a: &Variable, b: &Variable) -> Option<(usize, usize)> {
    let (across, down, flipped) = match (a.direction, b.direction) {
        (Direction::Across, Direction::Down) => (a, b, false),
        (Direction::Down, Direction::Across) => (b, a, true),
        _ => return None,
    };

    let row_hit = down.row <= across.row && across.row < down.row + down.length;
    let col_hit = across.col <= down.col && down.col < across.col + across.length;
    if !row_hit || !col_hit {
        return None;
    }

    let across_index = down.col - across.col;
    let down_index = across.row - down.row;
    if flipped {
        Some((down_index, across_index))
    } else {
        Some((across_index, down_index))
    }
}

/// Scans the grid for maximal runs of open cells, across slots first
/// (row-major), then down slots (column-major). Runs of length 1 are not
/// slots.
fn find_variables(grid: &Grid) -> Vec<Variable> {
    let mut variables = Vec::new();

    for row in 0..grid.height() {
        let mut col = 0;
        while col < grid.width() {
            if grid.is_open(row, col) {
                let start = col;
                while col < grid.width() && grid.is_open(row, col) {
                    col += 1;
                }
                let length = col - start;
                if length >= 2 {
                    variables.push(Variable {
                        row,
                        col: start,
                        direction: Direction::Across,
                        length,
                    });
                }
            } else {
                col += 1;
            }
        }
    }

    for col in 0..grid.width() {
        let mut row = 0;
        while row < grid.height() {
            if grid.is_open(row, col) {
                let start = row;
                while row < grid.height() && grid.is_open(row, col) {
                    row += 1;
                }
                let length = row - start;
                if length >= 2 {
                    variables.push(Variable {
                        row: start,
                        col,
                        direction: Direction::Down,
                        length,
                    });
                }
            } else {
                row += 1;
            }
        }
    }

    variables
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn puzzle(structure: &str) -> Puzzle {
        Puzzle::new(Grid::parse(structure).unwrap())
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(Grid::parse(""), Err(Error::EmptyGrid)));
    }

    #[test]
    fn parse_pads_short_lines_with_blocked_cells() {
        let grid = Grid::parse("___\n_\n").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.is_open(1, 0));
        assert!(!grid.is_open(1, 1));
        assert!(!grid.is_open(1, 2));
    }

    #[test]
    fn finds_across_and_down_variables() {
        // ___
        // _##
        // _##
        let p = puzzle("___\n_##\n_##\n");
        assert_eq!(
            p.variables(),
            &[
                Variable {
                    row: 0,
                    col: 0,
                    direction: Direction::Across,
                    length: 3
                },
                Variable {
                    row: 0,
                    col: 0,
                    direction: Direction::Down,
                    length: 3
                },
            ]
        );
    }

    #[test]
    fn length_one_runs_are_not_variables() {
        // An isolated open cell produces no variable at all.
        let p = puzzle("#_#\n###\n");
        assert!(p.variables().is_empty());
    }

    #[test]
    fn overlap_reports_indices_in_query_order() {
        // ___
        // #_#
        // #_#
        let p = puzzle("___\n#_#\n#_#\n");
        let across = 0;
        let down = 1;
        assert_eq!(p.variable(across).direction, Direction::Across);
        assert_eq!(p.variable(down).direction, Direction::Down);

        // The down slot starts at (0, 1) and crosses the across slot in its
        // second cell.
        assert_eq!(p.overlap(across, down), Some((1, 0)));
        assert_eq!(p.overlap(down, across), Some((0, 1)));
    }

    #[test]
    fn non_crossing_variables_have_no_overlap() {
        // __#
        // ###
        // #__
        let p = puzzle("__#\n###\n#__\n");
        assert_eq!(p.variables().len(), 2);
        assert_eq!(p.overlap(0, 1), None);
        assert!(p.neighbors(0).is_empty());
        assert!(p.neighbors(1).is_empty());
    }

    #[test]
    fn neighbors_exclude_self_and_are_sorted() {
        // ____
        // _##_
        // _##_
        // ____
        let p = puzzle("____\n_##_\n_##_\n____\n");
        for (id, _) in p.variables().iter().enumerate() {
            assert!(!p.neighbors(id).contains(&id));
            let mut sorted = p.neighbors(id).to_vec();
            sorted.sort_unstable();
            assert_eq!(p.neighbors(id), &sorted[..]);
        }
    }

    #[test]
    fn variable_cells_follow_direction() {
        let across = Variable {
            row: 2,
            col: 1,
            direction: Direction::Across,
            length: 3,
        };
        assert_eq!(
            across.cells().collect::<Vec<_>>(),
            vec![(2, 1), (2, 2), (2, 3)]
        );

        let down = Variable {
            row: 2,
            col: 1,
            direction: Direction::Down,
            length: 2,
        };
        assert_eq!(down.cells().collect::<Vec<_>>(), vec![(2, 1), (3, 1)]);
    }
}
