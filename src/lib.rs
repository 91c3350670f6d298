//! Crossfill fills crossword grids: given a grid structure and a word
//! list, it assigns a word to every slot so that lengths match and
//! crossing slots agree on their shared letter.
//!
//! The filler is a constraint-satisfaction solver in three stages:
//!
//! - **Node consistency**: each slot's candidate set is reduced to the
//!   words of the right length.
//! - **Arc consistency (AC-3)**: a worklist loop removes every candidate
//!   with no compatible partner in a crossing slot's domain, to a fixpoint
//!   or an early proof of unsatisfiability.
//! - **Backtracking search**: a depth-first search over the pruned
//!   domains, picking the most constrained slot first (minimum remaining
//!   values, ties by degree) and trying the least constraining word first.
//!
//! # Example
//!
//! ```
//! use crossfill::puzzle::{Grid, Puzzle};
//! use crossfill::solver::engine::Solver;
//! use crossfill::wordlist::Wordlist;
//!
//! // A corner: one across slot and one down slot sharing their first cell.
//! let grid = Grid::parse("___\n_##\n_##\n").unwrap();
//! let puzzle = Puzzle::new(grid);
//! let wordlist = Wordlist::parse_from_str("cat\ncar\n").unwrap();
//!
//! let (solution, stats) = Solver::default().solve(&puzzle, &wordlist);
//! let solution = solution.expect("this corner is fillable");
//!
//! // Distinct entries that agree at the crossing.
//! assert_ne!(solution.word(0), solution.word(1));
//! assert_eq!(solution.word(0).as_bytes()[0], solution.word(1).as_bytes()[0]);
//! assert!(stats.nodes_visited > 0);
//! ```

pub mod error;
pub mod puzzle;
pub mod render;
pub mod solver;
pub mod wordlist;
