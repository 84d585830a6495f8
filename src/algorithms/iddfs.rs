/// Iterative-deepening depth-first search
///
/// Repeats a depth-limited DFS with limits 0, 1, 2, ... up to a caller-supplied bound.

use super::{ensure_endpoints, SearchResult};
use crate::types::{CostModel, Graph, Path};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// IDDFS reports paths by edge count
pub const COST_MODEL: CostModel = CostModel::Unit;

/// Outcome of one depth-limited run
#[derive(Debug, Clone, PartialEq)]
pub enum DepthLimited<N> {
    /// Goal reached within the limit
    Found(Path<N>),
    /// Goal not reached, but some branch was cut off by the limit
    CutOff,
    /// Goal not reached and no branch hit the limit; raising it cannot help
    Exhausted,
}

/// Run a DFS that never descends more than `limit` edges from `start`
///
/// Only nodes on the current branch count as visited, so a node reached through one
/// branch can still be reached again through another. This keeps diamond-shaped
/// subgraphs from being pruned before the shorter branch gets to them.
pub fn depth_limited_search<N>(
    graph: &Graph<N>,
    start: &N,
    goal: &N,
    limit: usize,
) -> SearchResult<DepthLimited<N>>
where
    N: Clone + Eq + Hash + Debug,
{
    ensure_endpoints(graph, start, goal)?;

    let mut walker = BranchWalker {
        graph,
        goal,
        path: Path::trivial(start.clone()),
        on_path: HashSet::from([start.clone()]),
        cut_off: false,
    };

    if walker.descend(start, limit) {
        return Ok(DepthLimited::Found(walker.path));
    }

    Ok(if walker.cut_off {
        DepthLimited::CutOff
    } else {
        DepthLimited::Exhausted
    })
}

/// State of one depth-limited run
struct BranchWalker<'g, N> {
    graph: &'g Graph<N>,
    goal: &'g N,
    /// Current branch from the start node
    path: Path<N>,
    /// Nodes on the current branch
    on_path: HashSet<N>,
    cut_off: bool,
}

impl<N> BranchWalker<'_, N>
where
    N: Clone + Eq + Hash + Debug,
{
    fn descend(&mut self, node: &N, remaining: usize) -> bool {
        if node == self.goal {
            return true;
        }

        let graph = self.graph;
        if remaining == 0 {
            if graph
                .neighbors(node)
                .iter()
                .any(|n| !self.on_path.contains(&n.node))
            {
                self.cut_off = true;
            }
            return false;
        }

        for neighbor in graph.neighbors(node) {
            if self.on_path.contains(&neighbor.node) {
                continue;
            }

            self.on_path.insert(neighbor.node.clone());
            self.path.push(neighbor.node.clone(), neighbor.weight);

            if self.descend(&neighbor.node, remaining - 1) {
                return true;
            }

            self.path.pop();
            self.on_path.remove(&neighbor.node);
        }

        false
    }
}

/// Find a path using iterative-deepening DFS
///
/// Returns the first path found at the smallest depth limit that reaches the goal.
/// Stops early once a run finishes without being cut off by its limit.
///
/// # Arguments
/// * `max_depth` - Largest depth limit to try (inclusive); there is no default
///
/// # Returns
/// * `Ok(Some(path))` - Path found, with `path.len()` equal to the limit that found it
/// * `Ok(None)` - Goal not reachable within `max_depth` edges
/// * `Err(SearchError::NodeNotFound)` - Start or goal not in graph
pub fn iddfs<N>(
    graph: &Graph<N>,
    start: &N,
    goal: &N,
    max_depth: usize,
) -> SearchResult<Option<Path<N>>>
where
    N: Clone + Eq + Hash + Debug,
{
    ensure_endpoints(graph, start, goal)?;

    for depth in 0..=max_depth {
        match depth_limited_search(graph, start, goal, depth)? {
            DepthLimited::Found(path) => {
                tracing::debug!(?start, ?goal, depth, "iddfs found path");
                return Ok(Some(path));
            }
            DepthLimited::Exhausted => {
                tracing::debug!(?start, ?goal, depth, "iddfs exhausted graph before max depth");
                return Ok(None);
            }
            DepthLimited::CutOff => {
                tracing::trace!(depth, "iddfs deepening");
            }
        }
    }

    tracing::debug!(?start, ?goal, max_depth, "iddfs reached max depth");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::SearchError;

    fn setup_test_graph() -> Graph<&'static str> {
        Graph::from_edges([
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("A", "C", 5.0),
            ("C", "D", 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_iddfs_finds_shallowest_depth() {
        let graph = setup_test_graph();

        let path = iddfs(&graph, &"A", &"D", 3).unwrap().unwrap();

        // A - B - C is cut off at limit 2, A - C - D fits
        assert_eq!(path.nodes(), &["A", "C", "D"]);
        assert!(path.validate_against(&graph).is_ok());
    }

    #[test]
    fn test_iddfs_bound_too_small() {
        let graph = setup_test_graph();

        assert_eq!(iddfs(&graph, &"A", &"D", 1).unwrap(), None);
    }

    #[test]
    fn test_iddfs_same_node_at_depth_zero() {
        let graph = setup_test_graph();

        let path = iddfs(&graph, &"B", &"B", 0).unwrap().unwrap();
        assert_eq!(path.nodes(), &["B"]);
    }

    #[test]
    fn test_iddfs_missing_node() {
        let graph = setup_test_graph();

        assert!(matches!(
            iddfs(&graph, &"A", &"Q", 3),
            Err(SearchError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn test_depth_limited_outcomes() {
        let graph = setup_test_graph();

        assert_eq!(
            depth_limited_search(&graph, &"A", &"D", 1).unwrap(),
            DepthLimited::CutOff
        );
        assert!(matches!(
            depth_limited_search(&graph, &"A", &"D", 2).unwrap(),
            DepthLimited::Found(_)
        ));

        let mut graph = graph;
        graph.add_node("Z");
        assert_eq!(
            depth_limited_search(&graph, &"A", &"Z", 10).unwrap(),
            DepthLimited::Exhausted
        );
    }

    #[test]
    fn test_diamond_not_pruned_by_earlier_branch() {
        // The first branch reaches C at depth 2 via B; the goal hangs off C.
        // A global visited set would block the depth-1 route A - C.
        let graph = Graph::from_edges([
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("A", "C", 1.0),
            ("C", "G", 1.0),
        ])
        .unwrap();

        let path = iddfs(&graph, &"A", &"G", 2).unwrap().unwrap();
        assert_eq!(path.nodes(), &["A", "C", "G"]);
    }

    #[test]
    fn test_iddfs_unreachable_stops_early() {
        let mut graph = setup_test_graph();
        graph.add_node("Z");

        assert_eq!(iddfs(&graph, &"A", &"Z", usize::MAX).unwrap(), None);
    }
}
