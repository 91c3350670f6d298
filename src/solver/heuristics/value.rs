use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use crate::puzzle::{Puzzle, VariableId};
use crate::solver::domains::DomainStore;
use crate::solver::search::Assignment;
use crate::wordlist::Word;

/// A trait for strategies that determine the order in which a variable's
/// candidate words are tried during search.
pub trait ValueOrderingHeuristic {
    /// Returns `var`'s current candidates in the order they should be
    /// tried. Implementations inspect domains but never mutate them.
    fn order_values(
        &self,
        var: VariableId,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Vec<Word>;
}

/// Tries candidates in alphabetical order. A deterministic baseline.
pub struct LexicographicValueHeuristic;

impl ValueOrderingHeuristic for LexicographicValueHeuristic {
    fn order_values(
        &self,
        var: VariableId,
        _puzzle: &Puzzle,
        domains: &DomainStore,
        _assignment: &Assignment,
    ) -> Vec<Word> {
        let mut words: Vec<Word> = domains.candidates(var).iter().cloned().collect();
        words.sort_unstable();
        words
    }
}

/// Least-constraining value: tries first the words that eliminate the
/// fewest candidates from unassigned neighbors' current domains.
///
/// For each candidate, counts the neighbor words that would mismatch at
/// the shared cell; lower counts sort first, ties alphabetically. The
/// ordering is computed fresh at every search node against whatever the
/// neighbors' domains hold at that point.
pub struct LeastConstrainingValueHeuristic;

impl ValueOrderingHeuristic for LeastConstrainingValueHeuristic {
    fn order_values(
        &self,
        var: VariableId,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Vec<Word> {
        let mut scored: Vec<(usize, Word)> = domains
            .candidates(var)
            .iter()
            .map(|word| {
                let mut conflicts = 0;
                for &neighbor in puzzle.neighbors(var) {
                    if assignment.contains_key(&neighbor) {
                        continue;
                    }
                    let Some((i, j)) = puzzle.overlap(var, neighbor) else {
                        continue;
                    };
                    conflicts += domains
                        .candidates(neighbor)
                        .iter()
                        .filter(|other| word.as_bytes()[i] != other.as_bytes()[j])
                        .count();
                }
                (conflicts, word.clone())
            })
            .collect();

        scored.sort_unstable();
        scored.into_iter().map(|(_, word)| word).collect()
    }
}

/// Tries candidates in a seeded pseudo-random order.
///
/// Deterministic for a given seed. The seed is mixed with the variable id
/// so each variable gets its own stream regardless of visit order. Useful
/// for measuring how much the least-constraining-value ordering buys.
pub struct ShuffledValueHeuristic {
    seed: u64,
}

impl ShuffledValueHeuristic {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl ValueOrderingHeuristic for ShuffledValueHeuristic {
    fn order_values(
        &self,
        var: VariableId,
        _puzzle: &Puzzle,
        domains: &DomainStore,
        _assignment: &Assignment,
    ) -> Vec<Word> {
        let mut words: Vec<Word> = domains.candidates(var).iter().cloned().collect();
        words.sort_unstable();
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed.wrapping_add(var as u64));
        words.shuffle(&mut rng);
        words
    }
}
