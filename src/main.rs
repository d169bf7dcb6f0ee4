//! Command line front end for `tracegraph`.
//!
//! ```bash
//! # run the standard report against input.txt
//! tracegraph
//!
//! # single queries
//! tracegraph --input graph.txt weight A-E-B-C-D
//! tracegraph max-hops C C 3
//! tracegraph exact-hops A C 4
//! tracegraph shortest B B
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracegraph::{loader, Error, Graph, Node};

#[derive(Parser)]
#[command(name = "tracegraph")]
#[command(about = "Path queries over a weighted, directed graph", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File whose first line is the edge list, e.g. "AB5, BC4, CD8"
    #[arg(short, long, env = "TRACEGRAPH_INPUT", default_value = "input.txt")]
    input: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the standard set of queries (default)
    Report,

    /// Total weight of an explicit trace such as A-B-C
    Weight { trace: String },

    /// Number of walks between two nodes using at most MAX hops
    MaxHops { from: Node, to: Node, max: usize },

    /// Number of walks between two nodes using exactly HOPS hops
    ExactHops { from: Node, to: Node, hops: usize },

    /// Shortest distance between two nodes (-1 if unreachable)
    Shortest { from: Node, to: Node },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let graph = loader::load_file(&cli.input)
        .with_context(|| format!("failed to load graph from {}", cli.input.display()))?;

    match cli.command.unwrap_or(Commands::Report) {
        Commands::Report => report(&graph, &mut io::stdout().lock())?,
        Commands::Weight { trace } => {
            let nodes = loader::parse_trace(&trace)?;
            println!("{}", render(graph.trace_weight(&nodes).map(|w| w.to_string()))?);
        }
        Commands::MaxHops { from, to, max } => {
            println!("{}", graph.count_with_max_hops(from, to, max));
        }
        Commands::ExactHops { from, to, hops } => {
            println!("{}", graph.count_with_exact_hops(from, to, hops));
        }
        Commands::Shortest { from, to } => {
            println!("{}", render(shortest(&graph, from, to))?);
        }
    }

    Ok(())
}

fn report(graph: &Graph, out: &mut impl Write) -> Result<()> {
    let traces: [&[Node]; 5] = [
        &['A', 'B', 'C'],
        &['A', 'D'],
        &['A', 'D', 'C'],
        &['A', 'E', 'B', 'C', 'D'],
        &['A', 'E', 'D'],
    ];

    for trace in traces.iter() {
        writeln!(out, "{}", render(graph.trace_weight(trace).map(|w| w.to_string()))?)?;
    }
    writeln!(out, "{}", graph.count_with_max_hops('C', 'C', 3))?;
    writeln!(out, "{}", graph.count_with_exact_hops('A', 'C', 4))?;
    writeln!(out, "{}", render(shortest(graph, 'A', 'C'))?)?;
    writeln!(out, "{}", render(shortest(graph, 'B', 'B'))?)?;

    Ok(())
}

fn shortest(graph: &Graph, from: Node, to: Node) -> tracegraph::Result<String> {
    graph
        .shortest_distance(from, to)
        .map(|d| d.map_or_else(|| "-1".to_string(), |d| d.to_string()))
}

/// Replace recoverable query failures with their fixed output text.
fn render(result: tracegraph::Result<String>) -> tracegraph::Result<String> {
    match result {
        Err(Error::NoSuchTrace { from, to }) => {
            tracing::debug!(%from, %to, "no edge in trace");
            Ok("NO SUCH TRACE".to_string())
        }
        Err(Error::NoCycleFound(node)) => {
            tracing::debug!(%node, "no cycle");
            Ok("NO SUCH ROUTE".to_string())
        }
        other => other,
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("tracegraph=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tracegraph=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
