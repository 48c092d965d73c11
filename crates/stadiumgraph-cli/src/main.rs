use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use stadiumgraph_cli::commands::analyze::{
    handle_check, handle_mst, handle_traverse, TraversalOrder,
};
use stadiumgraph_cli::commands::load_graph;
use stadiumgraph_cli::commands::query::{handle_distance, handle_neighbours, handle_stadiums};
use stadiumgraph_cli::commands::route::{handle_route, handle_trip, AlgorithmArg};
use stadiumgraph_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Stadium distance graph utilities")]
struct Cli {
    /// Distance CSV file to load (repeatable). Falls back to STADIUMGRAPH_DATA.
    #[arg(long = "data", global = true)]
    data: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every stadium key.
    Stadiums,
    /// List the direct neighbours of a stadium.
    Neighbours {
        #[arg(long)]
        stadium: String,
    },
    /// Report the direct edge distance between two stadiums.
    Distance {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
    /// Compute the shortest route between two stadiums.
    Route {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
        /// Shortest-path algorithm.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
        algorithm: AlgorithmArg,
    },
    /// Build the minimum spanning tree of the whole graph.
    Mst,
    /// Traverse the graph from a starting stadium.
    Traverse {
        #[arg(long)]
        start: String,
        #[arg(long, value_enum, default_value_t = TraversalOrder::Dfs)]
        order: TraversalOrder,
    },
    /// Plan a greedy nearest-stop trip over direct edges.
    Trip {
        #[arg(long)]
        start: String,
        /// Stadium to visit (repeatable).
        #[arg(long = "stop", required = true)]
        stops: Vec<String>,
    },
    /// Report connectivity, integrity and missing direct edges.
    Check,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let graph = load_graph(&cli.data)?;
    let format = cli.format;

    match cli.command {
        Command::Stadiums => handle_stadiums(&graph, format),
        Command::Neighbours { stadium } => handle_neighbours(&graph, &stadium, format),
        Command::Distance { from, to } => handle_distance(&graph, &from, &to, format),
        Command::Route {
            from,
            to,
            algorithm,
        } => handle_route(&graph, &from, &to, algorithm, format),
        Command::Mst => handle_mst(&graph, format),
        Command::Traverse { start, order } => handle_traverse(&graph, &start, order, format),
        Command::Trip { start, stops } => handle_trip(&graph, &start, &stops, format),
        Command::Check => handle_check(&graph, format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
