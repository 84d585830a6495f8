use super::graph::{Graph, Weight};
use serde::Serialize;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

/// Error types for Path operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("Path is empty")]
    EmptyPath,

    #[error("Path nodes and weights count mismatch: {nodes} nodes, {weights} weights")]
    CountMismatch { nodes: usize, weights: usize },

    #[error("Path step {pos} has no edge {from} - {to} in the graph")]
    MissingEdge { pos: usize, from: String, to: String },

    #[error("Path step {pos} records weight {recorded} but the graph edge weighs {actual}")]
    WeightMismatch {
        pos: usize,
        recorded: Weight,
        actual: Weight,
    },
}

/// How a strategy measures the cost of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostModel {
    /// Every edge costs 1 (topological view)
    Unit,
    /// Edges cost their weight
    Weighted,
}

/// Path represents a search result
///
/// A path is a non-empty node sequence together with the weight of every traversed edge:
/// (n0) -[w0]- (n1) -[w1]- (n2) ... -[wk]- (nk+1)
///
/// Invariants:
/// - nodes.len() = weights.len() + 1
/// - weights[i] is the weight of the edge between nodes[i] and nodes[i+1]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path<N> {
    nodes: Vec<N>,
    weights: Vec<Weight>,
}

impl<N> Path<N> {
    /// Create a single-node path (start == goal)
    pub fn trivial(node: N) -> Self {
        Self {
            nodes: vec![node],
            weights: Vec::new(),
        }
    }

    /// Create a path from nodes and edge weights
    ///
    /// # Errors
    /// Returns an error if the node list is empty or the counts don't line up
    pub fn from_parts(nodes: Vec<N>, weights: Vec<Weight>) -> Result<Self, PathError> {
        if nodes.is_empty() {
            return Err(PathError::EmptyPath);
        }
        if nodes.len() != weights.len() + 1 {
            return Err(PathError::CountMismatch {
                nodes: nodes.len(),
                weights: weights.len(),
            });
        }
        Ok(Self { nodes, weights })
    }

    /// Append a step to the path
    pub(crate) fn push(&mut self, node: N, weight: Weight) {
        self.nodes.push(node);
        self.weights.push(weight);
    }

    /// Remove the last step (never removes the start node)
    pub(crate) fn pop(&mut self) -> Option<N> {
        if self.weights.pop().is_some() {
            self.nodes.pop()
        } else {
            None
        }
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    /// First node of the path
    pub fn start(&self) -> &N {
        &self.nodes[0]
    }

    /// Last node of the path
    pub fn goal(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Get the length of the path (number of edges)
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the path is a single node with no edges
    pub fn is_trivial(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of the traversed edge weights
    pub fn total_cost(&self) -> Weight {
        self.weights.iter().sum()
    }

    /// Cost of the path under the given model
    pub fn cost(&self, model: CostModel) -> Weight {
        match model {
            CostModel::Unit => self.len() as Weight,
            CostModel::Weighted => self.total_cost(),
        }
    }

    /// Iterate over the traversed edges as (from, to, weight)
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, Weight)> {
        self.nodes
            .windows(2)
            .zip(self.weights.iter())
            .map(|(pair, &w)| (&pair[0], &pair[1], w))
    }

    /// Check if the path visits a node
    pub fn contains(&self, node: &N) -> bool
    where
        N: PartialEq,
    {
        self.nodes.contains(node)
    }
}

impl<N> Path<N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    /// Check that the path is a valid walk in `graph`
    ///
    /// Every consecutive node pair must be joined by an edge carrying the recorded weight.
    pub fn validate_against(&self, graph: &Graph<N>) -> Result<(), PathError> {
        for (pos, (from, to, recorded)) in self.edges().enumerate() {
            let actual = graph.weight(from, to).ok_or_else(|| PathError::MissingEdge {
                pos,
                from: format!("{:?}", from),
                to: format!("{:?}", to),
            })?;

            if actual != recorded {
                return Err(PathError::WeightMismatch {
                    pos,
                    recorded,
                    actual,
                });
            }
        }

        Ok(())
    }
}

impl<N: fmt::Display> fmt::Display for Path<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph<&'static str> {
        Graph::from_edges([("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)]).unwrap()
    }

    #[test]
    fn test_path_single_node() {
        let path = Path::trivial("A");

        assert_eq!(path.len(), 0);
        assert!(path.is_trivial());
        assert_eq!(path.start(), &"A");
        assert_eq!(path.goal(), &"A");
        assert_eq!(path.total_cost(), 0.0);
        assert!(path.validate_against(&sample_graph()).is_ok());
    }

    #[test]
    fn test_path_costs() {
        let path = Path::from_parts(vec!["A", "B", "C"], vec![1.0, 2.0]).unwrap();

        assert_eq!(path.len(), 2);
        assert_eq!(path.cost(CostModel::Unit), 2.0);
        assert_eq!(path.cost(CostModel::Weighted), 3.0);
        assert_eq!(path.to_string(), "A -> B -> C");
    }

    #[test]
    fn test_path_push_pop() {
        let mut path = Path::trivial("A");
        path.push("B", 1.0);
        path.push("C", 2.0);

        assert_eq!(path.goal(), &"C");
        assert_eq!(path.pop(), Some("C"));
        assert_eq!(path.pop(), Some("B"));
        assert_eq!(path.pop(), None);
        assert_eq!(path.nodes(), &["A"]);
    }

    #[test]
    fn test_path_count_mismatch() {
        let result = Path::from_parts(vec!["A", "B", "C"], vec![1.0]);
        assert!(matches!(
            result,
            Err(PathError::CountMismatch {
                nodes: 3,
                weights: 1
            })
        ));

        let result = Path::<&str>::from_parts(vec![], vec![]);
        assert!(matches!(result, Err(PathError::EmptyPath)));
    }

    #[test]
    fn test_path_missing_edge() {
        // B and D are not connected
        let path = Path::from_parts(vec!["A", "B", "D"], vec![1.0, 1.0]).unwrap();

        let result = path.validate_against(&sample_graph());
        assert!(matches!(result, Err(PathError::MissingEdge { pos: 1, .. })));
    }

    #[test]
    fn test_path_weight_mismatch() {
        let path = Path::from_parts(vec!["A", "C"], vec![1.0]).unwrap();

        let result = path.validate_against(&sample_graph());
        assert!(matches!(
            result,
            Err(PathError::WeightMismatch { pos: 0, .. })
        ));
    }

    #[test]
    fn test_path_edges_and_contains() {
        let path = Path::from_parts(vec!["A", "B", "C"], vec![1.0, 2.0]).unwrap();

        let edges: Vec<_> = path.edges().collect();
        assert_eq!(edges, vec![(&"A", &"B", 1.0), (&"B", &"C", 2.0)]);
        assert!(path.contains(&"B"));
        assert!(!path.contains(&"D"));
    }
}
