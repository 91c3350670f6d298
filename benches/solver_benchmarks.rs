use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use crossfill::puzzle::{Grid, Puzzle};
use crossfill::solver::domains::DomainStore;
use crossfill::solver::engine::Solver;
use crossfill::solver::heuristics::value::{
    LeastConstrainingValueHeuristic, LexicographicValueHeuristic, ShuffledValueHeuristic,
    ValueOrderingHeuristic,
};
use crossfill::solver::heuristics::variable::{
    MinimumRemainingValuesHeuristic, SelectFirstHeuristic, VariableSelectionHeuristic,
};
use crossfill::solver::propagate::{ac3, enforce_node_consistency};
use crossfill::solver::stats::SearchStats;
use crossfill::wordlist::Wordlist;

// ladder: three across rows crossed by two full-height down columns
const STRUCTURE: &str = "_____\n_###_\n_____\n_###_\n_____\n";
const WORDS: &str = "rotor\nmadam\nrealm\ntread\nrearm\nquilt\nzebra\nspoon\ncrumb\nwheat\nstove\nplank\n";

fn fixture() -> (Puzzle, Wordlist) {
    let puzzle = Puzzle::new(Grid::parse(STRUCTURE).unwrap());
    let wordlist = Wordlist::parse_from_str(WORDS).unwrap();
    (puzzle, wordlist)
}

fn heuristic_pair(name: &str) -> (Box<dyn VariableSelectionHeuristic>, Box<dyn ValueOrderingHeuristic>) {
    match name {
        "mrv+lcv" => (
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        ),
        "mrv+shuffle" => (
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(ShuffledValueHeuristic::with_seed(42)),
        ),
        "first+lex" => (
            Box::new(SelectFirstHeuristic),
            Box::new(LexicographicValueHeuristic),
        ),
        _ => unreachable!(),
    }
}

fn bench_full_solve(c: &mut Criterion) {
    let (puzzle, wordlist) = fixture();

    let mut group = c.benchmark_group("solve_ladder");
    for name in ["mrv+lcv", "mrv+shuffle", "first+lex"] {
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| {
                let (variable_heuristic, value_heuristic) = heuristic_pair(name);
                let solver = Solver::new(variable_heuristic, value_heuristic);
                black_box(solver.solve(black_box(&puzzle), black_box(&wordlist)))
            })
        });
    }
    group.finish();
}

fn bench_propagation(c: &mut Criterion) {
    let (puzzle, wordlist) = fixture();

    let mut seeded = DomainStore::seed(puzzle.variables().len(), &wordlist.words);
    let mut stats = SearchStats::default();
    enforce_node_consistency(&puzzle, &mut seeded, &mut stats);

    c.bench_function("ac3_ladder", |b| {
        b.iter(|| {
            let mut domains = seeded.clone();
            let mut stats = SearchStats::default();
            black_box(ac3(&puzzle, &mut domains, None, &mut stats))
        })
    });
}

criterion_group!(benches, bench_full_solve, bench_propagation);
criterion_main!(benches);
