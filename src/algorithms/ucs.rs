/// Uniform-cost search
///
/// Implements a Dijkstra-style best-first search for the minimum total weight path.

use super::{ensure_endpoints, reconstruct_path, SearchResult};
use crate::types::{CostModel, Graph, Path, Weight};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// UCS optimizes summed edge weights
pub const COST_MODEL: CostModel = CostModel::Weighted;

/// Entry in the UCS priority queue
#[derive(Debug)]
struct FrontierEntry<N> {
    cost: Weight,
    /// Insertion sequence number, breaks ties between equal costs
    seq: u64,
    node: N,
    /// Node we came from and the edge weight, None for the start node
    via: Option<(N, Weight)>,
}

impl<N> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for FrontierEntry<N> {}

impl<N> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a minimum-cost path using uniform-cost search
///
/// # Returns
/// * `Ok(Some(path))` - Cheapest path; `path.total_cost()` is the distance
/// * `Ok(None)` - Goal is unreachable from start
/// * `Err(SearchError::NodeNotFound)` - Start or goal not in graph
pub fn ucs<N>(graph: &Graph<N>, start: &N, goal: &N) -> SearchResult<Option<Path<N>>>
where
    N: Clone + Eq + Hash + Debug,
{
    Ok(ucs_with_cost(graph, start, goal)?.map(|(path, _)| path))
}

/// Uniform-cost search returning the path together with its accumulated cost
///
/// Entries are pushed without checking whether the neighbor was already reached;
/// stale duplicates are discarded when extracted. A node's predecessor is fixed
/// at the moment it is first extracted, which is when its cheapest entry leaves
/// the queue.
pub fn ucs_with_cost<N>(
    graph: &Graph<N>,
    start: &N,
    goal: &N,
) -> SearchResult<Option<(Path<N>, Weight)>>
where
    N: Clone + Eq + Hash + Debug,
{
    ensure_endpoints(graph, start, goal)?;

    let mut heap = BinaryHeap::new();
    let mut visited: HashSet<N> = HashSet::new();
    let mut predecessors: HashMap<N, (N, Weight)> = HashMap::new();
    let mut seq: u64 = 0;

    // Initialize
    heap.push(FrontierEntry {
        cost: 0.0,
        seq,
        node: start.clone(),
        via: None,
    });

    while let Some(FrontierEntry { cost, node, via, .. }) = heap.pop() {
        // Skip stale entries for already settled nodes
        if visited.contains(&node) {
            continue;
        }

        visited.insert(node.clone());
        if let Some(via) = via {
            predecessors.insert(node.clone(), via);
        }

        // Found destination
        if &node == goal {
            let path = reconstruct_path(start, goal, &predecessors);
            tracing::debug!(?start, ?goal, cost, hops = path.len(), "ucs found path");
            return Ok(Some((path, cost)));
        }

        tracing::trace!(?node, cost, "ucs expand");

        for neighbor in graph.neighbors(&node) {
            if visited.contains(&neighbor.node) {
                continue;
            }

            seq += 1;
            heap.push(FrontierEntry {
                cost: cost + neighbor.weight,
                seq,
                node: neighbor.node.clone(),
                via: Some((node.clone(), neighbor.weight)),
            });
        }
    }

    tracing::debug!(?start, ?goal, explored = visited.len(), "ucs exhausted frontier");
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
    fn test_ucs_prefers_cheaper_longer_path() {
        let graph = setup_test_graph();

        let (path, cost) = ucs_with_cost(&graph, &"A", &"D").unwrap().unwrap();

        assert_eq!(path.nodes(), &["A", "B", "C", "D"]);
        assert_eq!(cost, 3.0);
        assert_eq!(path.total_cost(), cost);
    }

    #[test]
    fn test_ucs_stale_entry_replaced_by_cheaper_one() {
        // C is first pushed with cost 10 via A, later with cost 3 via B
        let graph = Graph::from_edges([
            ("A", "C", 10.0),
            ("A", "B", 1.0),
            ("B", "C", 2.0),
            ("C", "G", 1.0),
        ])
        .unwrap();

        let path = ucs(&graph, &"A", &"G").unwrap().unwrap();

        assert_eq!(path.nodes(), &["A", "B", "C", "G"]);
        assert_eq!(path.total_cost(), 4.0);
    }

    #[test]
    fn test_ucs_equal_cost_tie_break_by_insertion() {
        let graph = Graph::from_edges([
            ("S", "Y", 1.0),
            ("S", "X", 1.0),
            ("X", "G", 1.0),
            ("Y", "G", 1.0),
        ])
        .unwrap();

        let path = ucs(&graph, &"S", &"G").unwrap().unwrap();

        // Y was pushed first, so its route to G is pushed first too
        assert_eq!(path.nodes(), &["S", "Y", "G"]);
    }

    #[test]
    fn test_ucs_fractional_weights() {
        let graph = Graph::from_edges([("A", "B", 0.5), ("B", "C", 0.25), ("A", "C", 1.0)]).unwrap();

        let (path, cost) = ucs_with_cost(&graph, &"A", &"C").unwrap().unwrap();
        assert_eq!(path.nodes(), &["A", "B", "C"]);
        assert_eq!(cost, 0.75);
    }

    #[test]
    fn test_ucs_same_node() {
        let graph = setup_test_graph();

        let (path, cost) = ucs_with_cost(&graph, &"A", &"A").unwrap().unwrap();
        assert_eq!(path.nodes(), &["A"]);
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn test_ucs_unreachable() {
        let mut graph = setup_test_graph();
        graph.add_node("Z");

        assert_eq!(ucs(&graph, &"A", &"Z").unwrap(), None);
    }

    #[test]
    fn test_ucs_missing_node() {
        let graph = setup_test_graph();

        assert!(matches!(
            ucs(&graph, &"A", &"Q"),
            Err(SearchError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn test_frontier_ordering() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry { cost: 2.0, seq: 0, node: "late", via: None });
        heap.push(FrontierEntry { cost: 1.0, seq: 2, node: "second", via: None });
        heap.push(FrontierEntry { cost: 1.0, seq: 1, node: "first", via: None });

        let order: Vec<&str> = std::iter::from_fn(|| heap.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec!["first", "second", "late"]);
    }
}
