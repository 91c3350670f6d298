//! Defines a collection of standard heuristics for selecting which variable
//! to branch on next during the search process.

use std::cmp::Reverse;

use crate::puzzle::{Puzzle, VariableId};
use crate::solver::domains::DomainStore;
use crate::solver::search::Assignment;

/// A trait for variable-selection heuristics.
///
/// Implementors define a strategy for choosing which unassigned variable
/// the solver should branch on next. A good heuristic can dramatically
/// improve solver performance.
pub trait VariableSelectionHeuristic {
    /// Selects the next variable to assign, or `None` if every variable is
    /// already assigned.
    fn select_variable(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<VariableId>;
}

/// A simple heuristic that selects the unassigned variable with the lowest
/// [`VariableId`]. Deterministic, and a useful baseline.
pub struct SelectFirstHeuristic;

impl VariableSelectionHeuristic for SelectFirstHeuristic {
    fn select_variable(
        &self,
        puzzle: &Puzzle,
        _domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<VariableId> {
        (0..puzzle.variables().len()).find(|var| !assignment.contains_key(var))
    }
}

/// Minimum remaining values with a degree tie-break.
///
/// A "fail-first" strategy: branch on the unassigned variable with the
/// fewest candidates left, resolving the most constrained choice early.
/// Ties go to the variable with the most neighbors, whose assignment is
/// expected to prune the most future options; remaining ties go to the
/// lower [`VariableId`] so selection is deterministic.
pub struct MinimumRemainingValuesHeuristic;

impl VariableSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_variable(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<VariableId> {
        (0..puzzle.variables().len())
            .filter(|var| !assignment.contains_key(var))
            .min_by_key(|&var| (domains.len(var), Reverse(puzzle.neighbors(var).len()), var))
    }
}
