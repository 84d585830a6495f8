/// Graph Search
///
/// Classical uninformed search strategies over weighted, undirected graphs.
///
/// # Architecture
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │           Graph Search                           │
/// ├──────────────────────────────────────────────────┤
/// │  ┌────────┐ ┌────────┐ ┌────────┐ ┌──────────┐   │
/// │  │  BFS   │ │  DFS   │ │  UCS   │ │  IDDFS   │   │
/// │  └───┬────┘ └───┬────┘ └───┬────┘ └────┬─────┘   │
/// │      └──────────┴────┬─────┴───────────┘         │
/// │                      ↓                           │
/// │  ┌────────────────────────────────┐              │
/// │  │   Graph (read-only) → Path     │              │
/// │  └────────────────────────────────┘              │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// # Modules
///
/// - `types`: Core data types (Graph, Path, CostModel)
/// - `algorithms`: Search strategies and parallel batch search
/// - `config`: Logging configuration
///
/// # Example
///
/// ```
/// use graph_search::{ucs, Graph};
///
/// let graph = Graph::from_edges([
///     ("A", "B", 1.0),
///     ("B", "C", 1.0),
///     ("A", "C", 5.0),
///     ("C", "D", 1.0),
/// ])
/// .unwrap();
///
/// let path = ucs(&graph, &"A", &"D").unwrap().unwrap();
/// assert_eq!(path.nodes(), &["A", "B", "C", "D"]);
/// assert_eq!(path.total_cost(), 3.0);
/// ```

pub mod algorithms;
pub mod config;
pub mod types;

// Re-export commonly used types
pub use types::{CostModel, Graph, GraphError, Neighbor, Path, PathError, Weight};

// Re-export algorithm types
pub use algorithms::{
    bfs, depth_limited_search, dfs, iddfs, search_batch, ucs, ucs_with_cost, DepthLimited, NodeRole,
    SearchError, SearchQuery, SearchResult, Strategy,
};

// Re-export configuration types
pub use config::{ConfigError, LogFormat, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
