//! Rendering a solved puzzle for humans and machines.
//!
//! Everything here treats the [`Solution`] as read-only; rendering never
//! touches solver state.

use serde::Serialize;

use crate::puzzle::{Direction, Puzzle};
use crate::solver::engine::Solution;

/// The per-cell letters of a solved grid. Blocked cells and open cells not
/// covered by any slot stay `None`.
pub fn letter_grid(puzzle: &Puzzle, solution: &Solution) -> Vec<Vec<Option<char>>> {
    let grid = puzzle.grid();
    let mut letters = vec![vec![None; grid.width()]; grid.height()];
    for (var, variable) in puzzle.variables().iter().enumerate() {
        let word = solution.word(var);
        for (k, (row, col)) in variable.cells().enumerate() {
            letters[row][col] = Some(word.as_bytes()[k] as char);
        }
    }
    letters
}

/// Renders the solved grid as text: blocked cells as `█`, uncovered open
/// cells as spaces, one line per row.
pub fn to_text(puzzle: &Puzzle, solution: &Solution) -> String {
    let grid = puzzle.grid();
    let letters = letter_grid(puzzle, solution);

    let mut out = String::new();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.is_open(row, col) {
                out.push(letters[row][col].unwrap_or(' '));
            } else {
                out.push('█');
            }
        }
        out.push('\n');
    }
    out
}

/// One filled slot, in a serialization-friendly shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement<'a> {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub word: &'a str,
}

/// The filled slots in variable-id order, for the JSON output surface.
pub fn placements<'a>(puzzle: &Puzzle, solution: &'a Solution) -> Vec<Placement<'a>> {
    puzzle
        .variables()
        .iter()
        .enumerate()
        .map(|(var, variable)| Placement {
            row: variable.row,
            col: variable.col,
            direction: variable.direction,
            word: solution.word(var),
        })
        .collect()
}
