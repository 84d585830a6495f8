/// Graph search algorithms
///
/// This module implements the four classical uninformed search strategies. Each
/// strategy is a free function of (graph, start, goal) that returns:
/// - `Ok(Some(path))` when the goal is reachable
/// - `Ok(None)` when both nodes exist but no path connects them
/// - `Err(SearchError)` when the call itself is invalid

pub mod bfs;
pub mod dfs;
pub mod iddfs;
pub mod parallel;
pub mod ucs;

pub use bfs::bfs;
pub use dfs::dfs;
pub use iddfs::{depth_limited_search, iddfs, DepthLimited};
pub use parallel::{search_batch, SearchQuery};
pub use ucs::{ucs, ucs_with_cost};

use crate::types::{CostModel, Graph, Path, Weight};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

/// Which endpoint of a search a node was passed as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Start,
    Goal,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::Start => write!(f, "Start"),
            NodeRole::Goal => write!(f, "Goal"),
        }
    }
}

/// Search errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("{role} node {node} not found in graph")]
    NodeNotFound { role: NodeRole, node: String },

    #[error("Invalid depth bound {0}: must be >= 0")]
    InvalidDepthBound(i64),
}

pub type SearchResult<T> = Result<T, SearchError>;

/// A search strategy, selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    IterativeDeepening { max_depth: usize },
}

impl Strategy {
    /// Iterative deepening bounded by `max_depth`
    ///
    /// # Errors
    /// Returns `SearchError::InvalidDepthBound` for negative bounds
    pub fn iterative_deepening(max_depth: i64) -> SearchResult<Self> {
        let max_depth =
            usize::try_from(max_depth).map_err(|_| SearchError::InvalidDepthBound(max_depth))?;
        Ok(Strategy::IterativeDeepening { max_depth })
    }

    /// Short display name
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "BFS",
            Strategy::DepthFirst => "DFS",
            Strategy::UniformCost => "UCS",
            Strategy::IterativeDeepening { .. } => "IDDFS",
        }
    }

    /// Cost model the strategy optimizes for (or, for DFS, reports under)
    pub fn cost_model(&self) -> CostModel {
        match self {
            Strategy::BreadthFirst => bfs::COST_MODEL,
            Strategy::DepthFirst => dfs::COST_MODEL,
            Strategy::UniformCost => ucs::COST_MODEL,
            Strategy::IterativeDeepening { .. } => iddfs::COST_MODEL,
        }
    }

    /// Run this strategy
    pub fn search<N>(&self, graph: &Graph<N>, start: &N, goal: &N) -> SearchResult<Option<Path<N>>>
    where
        N: Clone + Eq + Hash + fmt::Debug,
    {
        match *self {
            Strategy::BreadthFirst => bfs(graph, start, goal),
            Strategy::DepthFirst => dfs(graph, start, goal),
            Strategy::UniformCost => ucs(graph, start, goal),
            Strategy::IterativeDeepening { max_depth } => iddfs(graph, start, goal, max_depth),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Fail with `NodeNotFound` unless both endpoints are in the graph
pub(crate) fn ensure_endpoints<N>(graph: &Graph<N>, start: &N, goal: &N) -> SearchResult<()>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    if !graph.has_node(start) {
        return Err(SearchError::NodeNotFound {
            role: NodeRole::Start,
            node: format!("{:?}", start),
        });
    }
    if !graph.has_node(goal) {
        return Err(SearchError::NodeNotFound {
            role: NodeRole::Goal,
            node: format!("{:?}", goal),
        });
    }
    Ok(())
}

/// Reconstruct path from predecessors map
///
/// `predecessors` maps each reached node to the node it was reached from and the
/// weight of the connecting edge.
pub(crate) fn reconstruct_path<N>(
    start: &N,
    goal: &N,
    predecessors: &HashMap<N, (N, Weight)>,
) -> Path<N>
where
    N: Clone + Eq + Hash,
{
    let mut nodes = vec![goal.clone()];
    let mut weights = Vec::new();
    let mut current = goal;

    // Walk backwards from goal to start
    while current != start {
        match predecessors.get(current) {
            Some((prev, weight)) => {
                nodes.push(prev.clone());
                weights.push(*weight);
                current = prev;
            }
            None => break,
        }
    }

    // Reverse to get start -> goal order
    nodes.reverse();
    weights.reverse();

    let mut path = Path::trivial(nodes[0].clone());
    for (node, weight) in nodes.into_iter().skip(1).zip(weights) {
        path.push(node, weight);
    }
    path
}
