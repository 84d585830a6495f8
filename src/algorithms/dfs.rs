/// Depth-first search
///
/// Returns the first path found by depth-first exploration. No optimality guarantee.

use super::{ensure_endpoints, reconstruct_path, SearchResult};
use crate::types::{CostModel, Graph, Path, Weight};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// DFS reports paths by edge count
pub const COST_MODEL: CostModel = CostModel::Unit;

/// Frame on the DFS stack
struct StackEntry<N> {
    node: N,
    /// Node we came from and the edge weight, None for the start node
    via: Option<(N, Weight)>,
}

/// Find a path using depth-first search
///
/// Nodes are marked visited when popped and expanded, not when pushed. Neighbors
/// are pushed in reverse so they are explored in the graph's neighbor order, the
/// same order a recursive descent would take.
///
/// # Returns
/// * `Ok(Some(path))` - First path found
/// * `Ok(None)` - Goal is unreachable from start
/// * `Err(SearchError::NodeNotFound)` - Start or goal not in graph
pub fn dfs<N>(graph: &Graph<N>, start: &N, goal: &N) -> SearchResult<Option<Path<N>>>
where
    N: Clone + Eq + Hash + Debug,
{
    ensure_endpoints(graph, start, goal)?;

    if start == goal {
        return Ok(Some(Path::trivial(start.clone())));
    }

    let mut stack = vec![StackEntry {
        node: start.clone(),
        via: None,
    }];
    let mut visited: HashSet<N> = HashSet::new();
    let mut predecessors: HashMap<N, (N, Weight)> = HashMap::new();

    while let Some(StackEntry { node, via }) = stack.pop() {
        // Stale entry, the node was expanded through another branch
        if !visited.insert(node.clone()) {
            continue;
        }

        if let Some(via) = via {
            predecessors.insert(node.clone(), via);
        }

        if &node == goal {
            let path = reconstruct_path(start, goal, &predecessors);
            tracing::debug!(?start, ?goal, hops = path.len(), "dfs found path");
            return Ok(Some(path));
        }

        tracing::trace!(?node, "dfs expand");

        for neighbor in graph.neighbors(&node).iter().rev() {
            if !visited.contains(&neighbor.node) {
                stack.push(StackEntry {
                    node: neighbor.node.clone(),
                    via: Some((node.clone(), neighbor.weight)),
                });
            }
        }
    }

    tracing::debug!(?start, ?goal, explored = visited.len(), "dfs exhausted frontier");
    Ok(None)
}
