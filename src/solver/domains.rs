//! The domain store: per-variable candidate word sets.
//!
//! This is the shared mutable state the consistency algorithms act on. It
//! holds no algorithmic logic of its own — only set membership, removal,
//! and filtering. Each variable's candidates live in a persistent
//! [`im::HashSet`], so cloning the whole store shares structure and stays
//! cheap, which the reversibility tests and benchmarks rely on.

use im::HashSet;

use crate::puzzle::VariableId;
use crate::wordlist::Word;

/// Candidate word sets, indexed by [`VariableId`].
///
/// Seeded as a full copy of the vocabulary per variable, then narrowed
/// permanently by node and arc consistency. The backtracking search reads
/// the store but never writes it.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainStore {
    domains: Vec<HashSet<Word>>,
}

impl DomainStore {
    /// Creates a store with one copy of the vocabulary per variable.
    pub fn seed(variable_count: usize, vocabulary: &[Word]) -> Self {
        let all: HashSet<Word> = vocabulary.iter().cloned().collect();
        Self {
            domains: vec![all; variable_count],
        }
    }

    /// The current candidate set for `var`.
    pub fn candidates(&self, var: VariableId) -> &HashSet<Word> {
        &self.domains[var]
    }

    /// Removes a single word from `var`'s domain. Returns whether the word
    /// was present.
    pub fn remove(&mut self, var: VariableId, word: &str) -> bool {
        self.domains[var].remove(word).is_some()
    }

    /// Keeps only the candidates of `var` satisfying the predicate.
    pub fn retain(&mut self, var: VariableId, keep: impl Fn(&Word) -> bool) {
        let filtered: HashSet<Word> = self.domains[var]
            .iter()
            .filter(|word| keep(word))
            .cloned()
            .collect();
        self.domains[var] = filtered;
    }

    pub fn len(&self, var: VariableId) -> usize {
        self.domains[var].len()
    }

    pub fn is_empty(&self, var: VariableId) -> bool {
        self.domains[var].is_empty()
    }
}
