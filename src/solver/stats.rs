use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters describing one search run.
///
/// Maintained entirely by the search strategy; heuristics and propagators
/// never touch them.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SearchStats {
    /// Search-tree nodes entered.
    pub nodes_visited: u64,
    /// Value trials that were undone.
    pub backtracks: u64,
    /// Calls into the propagator, including the preprocessing pass.
    pub propagation_calls: u64,
    /// Values removed by applied pruning lists.
    pub values_pruned: u64,
    /// Propagation calls that detected a wipeout.
    pub wipeouts: u64,
}

/// Renders the counters as a small table for terminal output.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));

    for (metric, count) in [
        ("Nodes visited", stats.nodes_visited),
        ("Backtracks", stats.backtracks),
        ("Propagation calls", stats.propagation_calls),
        ("Values pruned", stats.values_pruned),
        ("Wipeouts", stats.wipeouts),
    ] {
        table.add_row(Row::new(vec![
            Cell::new(metric),
            Cell::new(&count.to_string()),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_counter() {
        let stats = SearchStats {
            nodes_visited: 12,
            backtracks: 3,
            propagation_calls: 13,
            values_pruned: 40,
            wipeouts: 2,
        };
        let rendered = render_stats_table(&stats);
        for needle in ["Nodes visited", "12", "Backtracks", "Wipeouts", "40"] {
            assert!(rendered.contains(needle), "missing {needle:?}");
        }
    }
}
