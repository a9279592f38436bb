//! Demo driver: solve a built-in problem with heuristics and propagation
//! chosen on the command line.

use clap::{Parser, ValueEnum};
use nexo::{
    error::Result,
    examples::{map_colouring, n_queens},
    solver::{
        heuristics::{value_heuristic_by_name, variable_heuristic_by_name},
        network::Network,
        propagation::propagator_by_name,
        stats::render_stats_table,
        strategy::{BacktrackingSearch, SearchStrategy},
        value::ValueOrdering,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Problem {
    MapColouring,
    NQueens,
}

#[derive(Debug, Parser)]
#[command(name = "nexo", about = "Solve a built-in constraint problem")]
struct Args {
    /// Problem to solve.
    #[arg(long, value_enum, default_value_t = Problem::MapColouring)]
    problem: Problem,

    /// Board size, for n-queens.
    #[arg(long, default_value_t = 8)]
    size: i64,

    /// Variable-selection heuristic: lex, md, mrv, md-mrv, mrv-md, random.
    #[arg(long, default_value = "mrv")]
    variable_heuristic: String,

    /// Value-ordering heuristic: lex, lcv.
    #[arg(long, default_value = "lcv")]
    value_heuristic: String,

    /// Propagator: forward, arc, none.
    #[arg(long, default_value = "arc")]
    inference: String,

    /// Print statistics as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    match args.problem {
        Problem::MapColouring => {
            let (network, _regions) = map_colouring::australia();
            run(&network, &args)
        }
        Problem::NQueens => {
            let (network, _columns) = n_queens::n_queens(args.size);
            run(&network, &args)
        }
    }
}

fn run<V: ValueOrdering>(network: &Network<V>, args: &Args) -> Result<()> {
    let search = BacktrackingSearch::new(
        variable_heuristic_by_name(&args.variable_heuristic)?,
        value_heuristic_by_name(&args.value_heuristic)?,
        propagator_by_name(&args.inference)?,
    );

    let (solution, stats) = search.solve(network, network.initial_domains())?;
    match solution {
        Some(assignment) => {
            let mut entries: Vec<_> = assignment.into_iter().collect();
            entries.sort();
            for (var, val) in entries {
                println!("?{var} = {val:?}");
            }
        }
        None => println!("unsatisfiable"),
    }

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&stats).expect("stats always serialize");
        println!("{rendered}");
    } else {
        print!("{}", render_stats_table(&stats));
    }
    Ok(())
}
