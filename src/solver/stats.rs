use prettytable::{Cell, Row, Table};

/// Counters collected across one solve: propagation work, then search work.
///
/// `nodes_visited` counts entries into the backtracking recursion, so a
/// solve that is settled by propagation alone (including an unsatisfiable
/// one) leaves it at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls to `revise`, including no-op calls on non-overlapping pairs.
    pub revise_calls: u64,
    /// Words removed from domains by node and arc consistency.
    pub words_pruned: u64,
    /// Wall-clock time spent in the propagation phase.
    pub propagation_micros: u64,
    /// Entries into the backtracking recursion.
    pub nodes_visited: u64,
    /// Abandoned value choices during search.
    pub backtracks: u64,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));

    table.add_row(Row::new(vec![
        Cell::new("Revise calls"),
        Cell::new(&stats.revise_calls.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Words pruned"),
        Cell::new(&stats.words_pruned.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Propagation time (ms)"),
        Cell::new(&format!("{:.2}", stats.propagation_micros as f64 / 1000.0)),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes visited"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&stats.backtracks.to_string()),
    ]));

    table.to_string()
}
