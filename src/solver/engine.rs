use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::puzzle::{Puzzle, VariableId};
use crate::solver::domains::DomainStore;
use crate::solver::heuristics::value::{LeastConstrainingValueHeuristic, ValueOrderingHeuristic};
use crate::solver::heuristics::variable::{
    MinimumRemainingValuesHeuristic, VariableSelectionHeuristic,
};
use crate::solver::propagate::{ac3, enforce_node_consistency};
use crate::solver::search::{Assignment, BacktrackingSearch};
use crate::solver::stats::SearchStats;
use crate::wordlist::{Word, Wordlist};

/// A complete, consistent assignment: one word per variable, indexed by
/// [`VariableId`]. The only success output of a solve — a partial
/// assignment is never returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    words: Vec<Word>,
}

impl Solution {
    fn from_assignment(mut assignment: Assignment, variable_count: usize) -> Self {
        let words = (0..variable_count)
            .map(|var| assignment.remove(&var).expect("assignment is complete"))
            .collect();
        Self { words }
    }

    /// The word filled into the given slot.
    pub fn word(&self, var: VariableId) -> &str {
        &self.words[var]
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

/// The main engine for filling crossword grids.
///
/// Solving proceeds in three stages: the domain store is seeded from the
/// vocabulary and made node-consistent, the AC-3 loop propagates the
/// overlap constraints to a fixpoint, and the backtracking search extends
/// the pruned domains to a complete assignment. If propagation empties a
/// domain the search is never entered — it could not do better once a
/// domain is empty.
pub struct Solver {
    search: BacktrackingSearch,
}

impl Solver {
    /// Creates a solver with an explicit pair of heuristics.
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            search: BacktrackingSearch::new(variable_heuristic, value_heuristic),
        }
    }

    /// Attempts to fill the puzzle from the given vocabulary.
    ///
    /// Returns the solution — or `None` if the puzzle is unsatisfiable —
    /// together with the counters collected along the way. Unsatisfiability
    /// is an answer, not an error; malformed input is rejected earlier, by
    /// the loaders.
    pub fn solve(&self, puzzle: &Puzzle, wordlist: &Wordlist) -> (Option<Solution>, SearchStats) {
        let mut stats = SearchStats::default();
        let mut domains = DomainStore::seed(puzzle.variables().len(), &wordlist.words);

        let started = Instant::now();
        enforce_node_consistency(puzzle, &mut domains, &mut stats);
        let satisfiable = ac3(puzzle, &mut domains, None, &mut stats);
        stats.propagation_micros += started.elapsed().as_micros() as u64;

        if !satisfiable {
            debug!("propagation emptied a domain, reporting no solution");
            return (None, stats);
        }
        debug!(
            pruned = stats.words_pruned,
            "propagation finished, starting search"
        );

        let solution = self
            .search
            .search(puzzle, &domains, &mut stats)
            .map(|assignment| Solution::from_assignment(assignment, puzzle.variables().len()));
        (solution, stats)
    }
}

impl Default for Solver {
    /// Minimum-remaining-values selection with least-constraining-value
    /// ordering.
    fn default() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }
}
