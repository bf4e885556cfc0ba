use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use heap_sssp::demo::{example_graph, load_graph, render_json, render_text};
use heap_sssp::{AdjacencyGraph, Dijkstra, DistanceTable, LinearScan, ShortestPathAlgorithm};
use log::{info, warn};

type StringGraph = AdjacencyGraph<String, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Binary heap with lazy deletion, O((V + E) log V)
    Heap,
    /// Linear scan for the closest node, O(V^2)
    Scan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Print shortest distances from a start node to every node of a graph
#[derive(Debug, Parser)]
#[command(name = "shortest_paths", version)]
struct Cli {
    /// Graph document: {"node": [["neighbor", weight], ...], ...}.
    /// Uses the built-in six-node example when omitted.
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Start node
    #[arg(long, default_value = "A")]
    start: String,

    #[arg(long, value_enum, default_value_t = Algorithm::Heap)]
    algorithm: Algorithm,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print search counters to stderr (heap algorithm only)
    #[arg(long)]
    stats: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> heap_sssp::Result<()> {
    let graph = match &cli.graph {
        Some(path) => {
            info!("loading graph from {}", path.display());
            load_graph(path)?
        }
        None => example_graph(),
    };

    let table = match cli.algorithm {
        Algorithm::Heap => {
            let (table, stats) = Dijkstra::new().compute_with_stats(&graph, &cli.start)?;
            if cli.stats {
                match cli.format {
                    OutputFormat::Text => eprintln!("{}", stats),
                    OutputFormat::Json => eprintln!("{}", serde_json::to_string(&stats)?),
                }
            }
            table
        }
        Algorithm::Scan => {
            if cli.stats {
                warn!("--stats is only collected by the heap algorithm");
            }
            compute(&LinearScan::new(), &graph, &cli.start)?
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => render_text(&table, &mut out)?,
        OutputFormat::Json => writeln!(out, "{}", render_json(&table)?)?,
    }
    Ok(())
}

fn compute<A>(
    algorithm: &A,
    graph: &StringGraph,
    start: &String,
) -> heap_sssp::Result<DistanceTable<String, f64>>
where
    A: ShortestPathAlgorithm<String, f64, StringGraph>,
{
    info!("running {}", algorithm.name());
    algorithm.compute_shortest_paths(graph, start)
}
