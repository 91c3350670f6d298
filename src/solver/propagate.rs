//! Consistency enforcement: the single node-consistency pass and the AC-3
//! propagation loop.
//!
//! Both narrow the [`DomainStore`] permanently. Node consistency runs once
//! (the removal criterion is length-only, so nothing needs re-checking);
//! arc consistency is a worklist algorithm that drains to a fixpoint or
//! detects an emptied domain on the way.

use tracing::debug;

use crate::puzzle::{Puzzle, VariableId};
use crate::solver::domains::DomainStore;
use crate::solver::stats::SearchStats;
use crate::solver::work_list::WorkList;

/// Removes from every variable's domain the words whose length does not
/// match the variable's declared length. One pass suffices.
pub fn enforce_node_consistency(
    puzzle: &Puzzle,
    domains: &mut DomainStore,
    stats: &mut SearchStats,
) {
    for (var, variable) in puzzle.variables().iter().enumerate() {
        let before = domains.len(var);
        let length = variable.length;
        domains.retain(var, |word| word.len() == length);
        stats.words_pruned += (before - domains.len(var)) as u64;
    }
}

/// Makes `x` arc-consistent with `y`: removes from `x`'s domain every word
/// with no supporting candidate in `y`'s current domain at the overlapping
/// positions. Returns whether anything was removed. A no-op when `x` and
/// `y` do not overlap.
pub fn revise(
    puzzle: &Puzzle,
    domains: &mut DomainStore,
    x: VariableId,
    y: VariableId,
    stats: &mut SearchStats,
) -> bool {
    stats.revise_calls += 1;

    let Some((i, j)) = puzzle.overlap(x, y) else {
        return false;
    };

    let before = domains.len(x);
    let support = domains.candidates(y).clone();
    domains.retain(x, |word| {
        support
            .iter()
            .any(|other| word.as_bytes()[i] == other.as_bytes()[j])
    });

    let removed = before - domains.len(x);
    if removed == 0 {
        return false;
    }
    stats.words_pruned += removed as u64;
    debug!(x, y, removed, "revise pruned candidates");
    true
}

/// The AC-3 propagation loop.
///
/// Starts from `arcs`, or from every (variable, neighbor) pair when `arcs`
/// is `None`, and drains the worklist FIFO. Whenever a revision shrinks
/// `x`'s domain, every arc (z, x) for a neighbor `z` other than `y` is
/// re-queued, since the change may re-violate z's consistency with `x`.
///
/// Returns `false` as soon as a revision empties a domain (the puzzle is
/// unsatisfiable), `true` once the queue drains with every domain still
/// non-empty. The final sweep also catches domains emptied before the loop
/// ran — a slot with no neighbors has no arc that would expose it.
pub fn ac3(
    puzzle: &Puzzle,
    domains: &mut DomainStore,
    arcs: Option<Vec<(VariableId, VariableId)>>,
    stats: &mut SearchStats,
) -> bool {
    let mut worklist = WorkList::new();
    match arcs {
        Some(list) => {
            for (x, y) in list {
                worklist.push_back(x, y);
            }
        }
        None => {
            for x in 0..puzzle.variables().len() {
                for &y in puzzle.neighbors(x) {
                    worklist.push_back(x, y);
                }
            }
        }
    }

    while let Some((x, y)) = worklist.pop_front() {
        if revise(puzzle, domains, x, y, stats) {
            if domains.is_empty(x) {
                debug!(x, "domain emptied during propagation");
                return false;
            }
            for &z in puzzle.neighbors(x) {
                if z != y {
                    worklist.push_back(z, x);
                }
            }
        }
    }

    (0..puzzle.variables().len()).all(|var| !domains.is_empty(var))
}
