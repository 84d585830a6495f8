use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use graph_search::{Graph, LoggingConfig, Path, Strategy, Weight};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Bfs,
    Dfs,
    Ucs,
    Iddfs,
    /// Run all four strategies
    All,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "graph_search")]
#[command(about = "Find a path between two nodes with BFS, DFS, UCS or IDDFS", long_about = None)]
struct Args {
    /// Adjacency JSON file ({"A": {"B": 1.0}, ...}); uses a built-in sample graph if omitted
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Start node
    #[arg(short, long)]
    start: String,

    /// Goal node
    #[arg(short = 'e', long)]
    goal: String,

    /// Search strategy
    #[arg(short = 'a', long, value_enum, default_value = "all")]
    strategy: StrategyArg,

    /// Maximum depth for IDDFS (required for iddfs and all)
    #[arg(short = 'd', long, allow_negative_numbers = true)]
    max_depth: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// Result of one strategy run, as reported to the user
#[derive(Debug, Serialize)]
struct Report<'a> {
    strategy: &'static str,
    start: &'a str,
    goal: &'a str,
    path: Option<Path<String>>,
    /// Cost under the strategy's own cost model
    cost: Option<Weight>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    LoggingConfig::from_env()?.init()?;

    let graph = match &args.graph {
        Some(path) => load_graph(path)?,
        None => {
            tracing::info!("No graph file given, using built-in sample graph");
            sample_graph()?
        }
    };
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Graph loaded"
    );

    let strategies = select_strategies(args.strategy, args.max_depth)?;

    let mut reports = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let path = strategy
            .search(&graph, &args.start, &args.goal)
            .with_context(|| format!("{} search failed", strategy))?;

        let cost = path.as_ref().map(|p| p.cost(strategy.cost_model()));
        reports.push(Report {
            strategy: strategy.name(),
            start: &args.start,
            goal: &args.goal,
            path,
            cost,
        });
    }

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => {
            for report in &reports {
                print_report(report);
            }
        }
    }

    Ok(())
}

fn select_strategies(arg: StrategyArg, max_depth: Option<i64>) -> Result<Vec<Strategy>> {
    let iterative = || -> Result<Strategy> {
        let Some(max_depth) = max_depth else {
            bail!("--max-depth is required for IDDFS");
        };
        Ok(Strategy::iterative_deepening(max_depth)?)
    };

    Ok(match arg {
        StrategyArg::Bfs => vec![Strategy::BreadthFirst],
        StrategyArg::Dfs => vec![Strategy::DepthFirst],
        StrategyArg::Ucs => vec![Strategy::UniformCost],
        StrategyArg::Iddfs => vec![iterative()?],
        StrategyArg::All => vec![
            Strategy::BreadthFirst,
            Strategy::DepthFirst,
            Strategy::UniformCost,
            iterative()?,
        ],
    })
}

fn print_report(report: &Report<'_>) {
    match &report.path {
        Some(path) => {
            println!("{:<6} {} ({} edges)", report.strategy, path, path.len());
            if report.strategy == Strategy::UniformCost.name() {
                println!(
                    "       distance {} - {}: {}",
                    report.start,
                    report.goal,
                    path.total_cost()
                );
            }
        }
        None => println!("{:<6} no path found", report.strategy),
    }
}

fn load_graph(path: &std::path::Path) -> Result<Graph<String>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open graph file {}", path.display()))?;

    let adjacency: BTreeMap<String, BTreeMap<String, Weight>> =
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse graph file {}", path.display()))?;

    Graph::from_adjacency(adjacency).context("Invalid graph")
}

/// Small demo graph; Z is isolated
fn sample_graph() -> Result<Graph<String>> {
    let mut graph = Graph::from_edges(
        [
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("A", "C", 5.0),
            ("C", "D", 1.0),
        ]
        .map(|(a, b, w)| (a.to_string(), b.to_string(), w)),
    )?;
    graph.add_node("Z".to_string());
    Ok(graph)
}
