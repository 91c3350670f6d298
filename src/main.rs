use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crossfill::error::Result;
use crossfill::puzzle::{Grid, Puzzle};
use crossfill::render;
use crossfill::solver::engine::Solver;
use crossfill::solver::heuristics::value::ShuffledValueHeuristic;
use crossfill::solver::heuristics::variable::MinimumRemainingValuesHeuristic;
use crossfill::solver::stats::render_stats_table;
use crossfill::wordlist::Wordlist;

/// Crossword grid filler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the grid structure file ('_' marks a fillable cell)
    structure: PathBuf,

    /// Path to the word list file (one word per line)
    words: PathBuf,

    /// Emit the filled slots as JSON instead of the text grid
    #[arg(long)]
    json: bool,

    /// Print solver counters to stderr after solving
    #[arg(long)]
    stats: bool,

    /// Try words in a seeded random order instead of least-constraining-first
    #[arg(long, value_name = "SEED")]
    shuffle_seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    if let Err(e) = try_main() {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let grid = Grid::load_from_path(&cli.structure)?;
    let puzzle = Puzzle::new(grid);
    let wordlist = Wordlist::load_from_path(&cli.words)?;

    let solver = match cli.shuffle_seed {
        Some(seed) => Solver::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(ShuffledValueHeuristic::with_seed(seed)),
        ),
        None => Solver::default(),
    };

    let (solution, stats) = solver.solve(&puzzle, &wordlist);

    if cli.stats {
        eprintln!("{}", render_stats_table(&stats));
    }

    match solution {
        Some(solution) => {
            if cli.json {
                let placed = render::placements(&puzzle, &solution);
                println!("{}", serde_json::to_string_pretty(&placed)?);
            } else {
                print!("{}", render::to_text(&puzzle, &solution));
            }
        }
        None => println!("No solution."),
    }

    Ok(())
}
