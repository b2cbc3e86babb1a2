use anyhow::{Context, Result};
use clap::Parser;
use dijkstra_sweep::dimacs::read_graph_from_path;
use dijkstra_sweep::{FrontierKind, SourceRun, Sweep};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Load a DIMACS graph and run Dijkstra from every vertex, reporting distances and totals.", long_about = None)]
struct Cli {
    /// Path to the DIMACS .gr file (only `a <from> <to> <weight>` lines are read)
    #[arg(short, long)]
    graph: PathBuf,

    /// Frontier used by Dijkstra: "lazy" or "decrease-key"
    #[arg(short, long, default_value_t = FrontierKind::Lazy)]
    frontier: FrontierKind,

    /// Only print the per-source totals and the final summary.
    #[arg(long, default_value_t = false)]
    summary_only: bool,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn print_run(run: &SourceRun, summary_only: bool) {
    println!("Running Dijkstra from vertex {}...", run.source);
    if !summary_only {
        for (destination, distance) in run.paths.distances.finite() {
            println!(
                "Shortest distance from {} to {}: {}",
                run.source, destination, distance
            );
        }
    }
    println!(
        "Total cost of distances from vertex {}: {}",
        run.source, run.paths.total_cost
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if !cli.graph.is_file() {
        anyhow::bail!("graph file not found: {}", cli.graph.display());
    }
    let loaded = read_graph_from_path(&cli.graph)
        .with_context(|| format!("loading {}", cli.graph.display()))?;

    println!(
        "Graph loaded with {} vertices and {} edges.",
        loaded.graph.vertex_count(),
        loaded.edge_count
    );

    let summary = Sweep::new(cli.frontier).run(&loaded.graph, loaded.edge_count, |run| {
        print_run(run, cli.summary_only)
    })?;

    println!();
    println!("================================================================");
    println!("Vertices: {}", summary.vertex_count);
    println!("Edges: {}", summary.edge_count);
    println!("Grand total distance: {}", summary.grand_total);
    println!("Reached vertices: {}", summary.reached);
    println!("Elapsed: {} ms", summary.elapsed.as_millis());
    if let (Some(median), Some(mean)) = (summary.median_run_ms(), summary.mean_run_ms()) {
        println!("Median run: {:.3} ms (mean {:.3} ms)", median, mean);
    }
    println!("Done.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["sweep", "-g", "graph.gr"]).unwrap();
        assert_eq!(cli.graph, PathBuf::from("graph.gr"));
        assert_eq!(cli.frontier, FrontierKind::Lazy);
        assert!(!cli.summary_only);
    }

    #[test]
    fn has_no_file_output_flag() {
        assert!(Cli::try_parse_from(["sweep", "-g", "graph.gr", "-o", "out.csv"]).is_err());
        assert!(Cli::try_parse_from(["sweep", "-g", "graph.gr", "--out", "out.csv"]).is_err());
    }

    #[test]
    fn parses_frontier_kind() {
        let cli = Cli::try_parse_from(["sweep", "-g", "g.gr", "-f", "decrease-key"]).unwrap();
        assert_eq!(cli.frontier, FrontierKind::DecreaseKey);
        assert!(Cli::try_parse_from(["sweep", "-g", "g.gr", "-f", "fibonacci"]).is_err());
    }
}
