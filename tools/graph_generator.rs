use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use graph_search::LoggingConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
enum GraphType {
    Uniform,
    Grid,
    Tree,
}

#[derive(Parser, Debug)]
#[command(name = "graph_generator")]
#[command(about = "Generate weighted undirected graphs for graph_search", long_about = None)]
struct Args {
    /// Type of graph to generate
    #[arg(short, long, value_enum)]
    graph_type: GraphType,

    /// Number of nodes (uniform graphs)
    #[arg(short = 'n', long, default_value_t = 100)]
    nodes: usize,

    /// Average degree (uniform graphs)
    #[arg(short = 'd', long, default_value_t = 4)]
    avg_degree: usize,

    /// Grid side length (grid graphs, creates size×size grid)
    #[arg(short = 's', long, default_value_t = 10)]
    size: usize,

    /// Tree depth (tree graphs)
    #[arg(long, default_value_t = 4)]
    depth: usize,

    /// Tree branching factor
    #[arg(short = 'b', long, default_value_t = 3)]
    branching: usize,

    /// Edge weights are drawn uniformly from 1..=max_weight
    #[arg(short = 'w', long, default_value_t = 10)]
    max_weight: u32,

    /// Output file (adjacency JSON)
    #[arg(short, long)]
    output: PathBuf,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Symmetric adjacency mapping, node -> neighbor -> weight
type Adjacency = BTreeMap<String, BTreeMap<String, f64>>;

struct GraphGenerator {
    rng: StdRng,
    max_weight: u32,
    adjacency: Adjacency,
}

impl GraphGenerator {
    fn new(seed: u64, max_weight: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_weight,
            adjacency: Adjacency::new(),
        }
    }

    fn add_node(&mut self, node: &str) {
        self.adjacency.entry(node.to_string()).or_default();
    }

    fn add_edge(&mut self, a: &str, b: &str) {
        let weight = self.rng.gen_range(1..=self.max_weight) as f64;
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), weight);
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string(), weight);
    }

    /// Uniform random graph with a target average degree
    fn generate_uniform(mut self, n: usize, avg_degree: usize) -> Adjacency {
        tracing::info!(n, avg_degree, "Generating uniform random graph");

        for i in 0..n {
            self.add_node(&format!("N{}", i));
        }

        let num_edges = (n * avg_degree) / 2;
        let mut edge_set = HashSet::new();
        let mut attempts = 0;
        let max_attempts = num_edges * 10;

        while edge_set.len() < num_edges && attempts < max_attempts {
            let a = self.rng.gen_range(0..n);
            let b = self.rng.gen_range(0..n);

            if a != b && edge_set.insert((a.min(b), a.max(b))) {
                self.add_edge(&format!("N{}", a), &format!("N{}", b));
            }
            attempts += 1;
        }

        tracing::info!(edges = edge_set.len(), "Generated uniform graph");
        self.adjacency
    }

    /// size×size grid, nodes named `r{row}c{col}`
    fn generate_grid(mut self, size: usize) -> Adjacency {
        tracing::info!(size, "Generating grid graph");

        let name = |r: usize, c: usize| format!("r{}c{}", r, c);
        for r in 0..size {
            for c in 0..size {
                self.add_node(&name(r, c));
                if r + 1 < size {
                    self.add_edge(&name(r, c), &name(r + 1, c));
                }
                if c + 1 < size {
                    self.add_edge(&name(r, c), &name(r, c + 1));
                }
            }
        }

        self.adjacency
    }

    /// Complete tree, nodes named by their dotted child indices from the root `t`
    fn generate_tree(mut self, depth: usize, branching: usize) -> Adjacency {
        tracing::info!(depth, branching, "Generating tree graph");

        self.add_node("t");
        let mut level = vec!["t".to_string()];
        for _ in 0..depth {
            let mut next = Vec::with_capacity(level.len() * branching);
            for parent in &level {
                for child in 0..branching {
                    let name = format!("{}.{}", parent, child);
                    self.add_edge(parent, &name);
                    next.push(name);
                }
            }
            level = next;
        }

        self.adjacency
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    LoggingConfig::from_env()?.init()?;

    if args.max_weight == 0 {
        bail!("--max-weight must be at least 1");
    }

    let generator = GraphGenerator::new(args.seed, args.max_weight);
    let adjacency = match args.graph_type {
        GraphType::Uniform => generator.generate_uniform(args.nodes, args.avg_degree),
        GraphType::Grid => generator.generate_grid(args.size),
        GraphType::Tree => generator.generate_tree(args.depth, args.branching),
    };

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &adjacency)?;

    tracing::info!(
        nodes = adjacency.len(),
        output = %args.output.display(),
        "Graph written"
    );

    Ok(())
}
