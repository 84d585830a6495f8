/// Breadth-first search
///
/// Finds the path with the fewest edges, ignoring weights.

use super::{ensure_endpoints, reconstruct_path, SearchResult};
use crate::types::{CostModel, Graph, Path, Weight};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

/// BFS optimizes edge count
pub const COST_MODEL: CostModel = CostModel::Unit;

/// Find a minimum edge-count path using breadth-first search
///
/// Nodes are marked visited when enqueued, so each node enters the frontier at
/// most once and the first time the goal is dequeued its path is the shortest.
///
/// # Returns
/// * `Ok(Some(path))` - Shortest path by edge count
/// * `Ok(None)` - Goal is unreachable from start
/// * `Err(SearchError::NodeNotFound)` - Start or goal not in graph
pub fn bfs<N>(graph: &Graph<N>, start: &N, goal: &N) -> SearchResult<Option<Path<N>>>
where
    N: Clone + Eq + Hash + Debug,
{
    ensure_endpoints(graph, start, goal)?;

    if start == goal {
        return Ok(Some(Path::trivial(start.clone())));
    }

    let mut queue = VecDeque::new();
    let mut visited: HashSet<N> = HashSet::new();
    let mut predecessors: HashMap<N, (N, Weight)> = HashMap::new();

    queue.push_back(start.clone());
    visited.insert(start.clone());

    while let Some(current) = queue.pop_front() {
        if &current == goal {
            let path = reconstruct_path(start, goal, &predecessors);
            tracing::debug!(?start, ?goal, hops = path.len(), "bfs found path");
            return Ok(Some(path));
        }

        tracing::trace!(node = ?current, "bfs expand");

        for neighbor in graph.neighbors(&current) {
            if visited.insert(neighbor.node.clone()) {
                predecessors.insert(neighbor.node.clone(), (current.clone(), neighbor.weight));
                queue.push_back(neighbor.node.clone());
            }
        }
    }

    tracing::debug!(?start, ?goal, explored = visited.len(), "bfs exhausted frontier");
    Ok(None)
}
