//! Backtracking search over partial assignments.
//!
//! The search explores word choices variable by variable, guided by the
//! heuristics it was built with. Each recursion frame owns its tentative
//! binding: the binding is inserted, validated, and removed again on every
//! path that does not end in overall success, so a failed branch hands its
//! caller an assignment identical to the one it received. The domain store
//! is read for candidate sets and heuristic scoring but never written;
//! validity is rechecked through the [`consistent`] predicate instead of
//! re-running propagation mid-search.

use std::collections::HashMap;

use tracing::debug;

use crate::puzzle::{Puzzle, VariableId};
use crate::solver::domains::DomainStore;
use crate::solver::heuristics::value::ValueOrderingHeuristic;
use crate::solver::heuristics::variable::VariableSelectionHeuristic;
use crate::solver::stats::SearchStats;
use crate::wordlist::Word;

/// A partial mapping from variables to chosen words.
pub type Assignment = HashMap<VariableId, Word>;

/// Whether every variable in the puzzle has been assigned a word.
pub fn assignment_complete(puzzle: &Puzzle, assignment: &Assignment) -> bool {
    assignment.len() == puzzle.variables().len()
}

/// Whether the (possibly partial) assignment violates no crossword rule:
/// all assigned words are pairwise distinct — a global rule over every
/// assigned variable, not just crossing ones — every word's length matches
/// its slot, and crossing slots agree at their shared cell.
pub fn consistent(puzzle: &Puzzle, assignment: &Assignment) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(assignment.len());
    for word in assignment.values() {
        if !seen.insert(word.as_str()) {
            return false;
        }
    }

    for (&var, word) in assignment {
        if word.len() != puzzle.variable(var).length {
            return false;
        }
    }

    for (&var, word) in assignment {
        for &neighbor in puzzle.neighbors(var) {
            let Some(other) = assignment.get(&neighbor) else {
                continue;
            };
            let (i, j) = puzzle
                .overlap(var, neighbor)
                .expect("neighboring variables always overlap");
            if word.as_bytes()[i] != other.as_bytes()[j] {
                return false;
            }
        }
    }

    true
}

/// Depth-first search with chronological backtracking.
///
/// Failure inside the search is purely exploratory: an exhausted candidate
/// list backtracks to the caller, and exhaustion at the root is the
/// puzzle's "no solution" outcome.
pub struct BacktrackingSearch {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
}

impl BacktrackingSearch {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
        }
    }

    /// Runs the search from an empty assignment, returning a complete
    /// consistent assignment, or `None` once every choice is exhausted.
    pub fn search(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        stats: &mut SearchStats,
    ) -> Option<Assignment> {
        let mut assignment = Assignment::new();
        if self.backtrack(puzzle, domains, &mut assignment, stats) {
            Some(assignment)
        } else {
            None
        }
    }

    fn backtrack(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &mut Assignment,
        stats: &mut SearchStats,
    ) -> bool {
        stats.nodes_visited += 1;

        if assignment_complete(puzzle, assignment) {
            return true;
        }

        let Some(var) = self
            .variable_heuristic
            .select_variable(puzzle, domains, assignment)
        else {
            // Not reachable while the assignment is incomplete.
            return true;
        };

        for word in self
            .value_heuristic
            .order_values(var, puzzle, domains, assignment)
        {
            assignment.insert(var, word);
            if consistent(puzzle, assignment)
                && self.backtrack(puzzle, domains, assignment, stats)
            {
                return true;
            }
            // Undo the tentative binding on every failing path.
            assignment.remove(&var);
            stats.backtracks += 1;
        }

        debug!(var, "candidates exhausted, backtracking");
        false
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::puzzle::Grid;
    use crate::solver::heuristics::value::LeastConstrainingValueHeuristic;
    use crate::solver::heuristics::variable::MinimumRemainingValuesHeuristic;
    use crate::solver::propagate::enforce_node_consistency;
    use crate::wordlist::Wordlist;

    fn setup(structure: &str, words: &str) -> (Puzzle, DomainStore) {
        let puzzle = Puzzle::new(Grid::parse(structure).unwrap());
        let wordlist = Wordlist::parse_from_str(words).unwrap();
        let mut domains = DomainStore::seed(puzzle.variables().len(), &wordlist.words);
        let mut stats = SearchStats::default();
        enforce_node_consistency(&puzzle, &mut domains, &mut stats);
        (puzzle, domains)
    }

    fn searcher() -> BacktrackingSearch {
        BacktrackingSearch::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }

    #[test]
    fn consistent_rejects_duplicate_words() {
        let (puzzle, _) = setup("___\n_##\n_##\n", "cat\ncar\n");
        let mut assignment = Assignment::new();
        assignment.insert(0, "CAT".to_string());
        assignment.insert(1, "CAT".to_string());
        // The letters agree at the crossing, but entries must be distinct.
        assert!(!consistent(&puzzle, &assignment));
    }

    #[test]
    fn consistent_rejects_length_mismatch() {
        let (puzzle, _) = setup("___\n_##\n_##\n", "cat\ncar\n");
        let mut assignment = Assignment::new();
        assignment.insert(0, "TOAD".to_string());
        assert!(!consistent(&puzzle, &assignment));
    }

    #[test]
    fn consistent_rejects_overlap_disagreement() {
        let (puzzle, _) = setup("___\n_##\n_##\n", "cat\ntar\n");
        let mut assignment = Assignment::new();
        assignment.insert(0, "CAT".to_string());
        assignment.insert(1, "TAR".to_string());
        assert!(!consistent(&puzzle, &assignment));
    }

    #[test]
    fn consistent_accepts_a_valid_partial_assignment() {
        let (puzzle, _) = setup("___\n_##\n_##\n", "cat\ncar\n");
        let mut assignment = Assignment::new();
        assignment.insert(0, "CAT".to_string());
        assert!(consistent(&puzzle, &assignment));

        assignment.insert(1, "CAR".to_string());
        assert!(consistent(&puzzle, &assignment));
    }

    #[test]
    fn search_fills_two_crossing_slots() {
        let (puzzle, domains) = setup("___\n_##\n_##\n", "cat\ncar\n");
        let mut stats = SearchStats::default();
        let assignment = searcher().search(&puzzle, &domains, &mut stats).unwrap();

        assert!(assignment_complete(&puzzle, &assignment));
        assert!(consistent(&puzzle, &assignment));
        assert!(stats.nodes_visited > 0);
    }

    #[test]
    fn search_reports_failure_without_leaking_bindings() {
        // Both slots cross at their first cell but the only two words
        // disagree there, so the search must exhaust and report failure.
        let (puzzle, domains) = setup("___\n_##\n_##\n", "cat\ntar\n");
        let domains_before = domains.clone();
        let mut stats = SearchStats::default();

        assert!(searcher().search(&puzzle, &domains, &mut stats).is_none());
        // The store is untouched by search, and every tentative binding was
        // unwound on the way out.
        assert_eq!(domains, domains_before);
        assert!(stats.backtracks > 0);
    }

    #[test]
    fn search_succeeds_immediately_on_a_puzzle_with_no_variables() {
        let (puzzle, domains) = setup("#_#\n###\n", "cat\n");
        let mut stats = SearchStats::default();
        let assignment = searcher().search(&puzzle, &domains, &mut stats).unwrap();
        assert!(assignment.is_empty());
    }
}
