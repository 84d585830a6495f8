use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

/// Edge weight
pub type Weight = f64;

/// Error types for graph construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Edge {from} - {to} has invalid weight {weight} (must be finite and > 0)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: Weight,
    },

    #[error("Edge {from} - {to} listed with conflicting weights {first} and {second}")]
    AsymmetricWeight {
        from: String,
        to: String,
        first: Weight,
        second: Weight,
    },
}

/// Entry of a node's adjacency list
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<N> {
    /// Node at the other end of the edge
    pub node: N,
    /// Weight of the connecting edge
    pub weight: Weight,
}

/// Weighted, undirected graph
///
/// Every edge {a, b} is stored in the adjacency lists of both endpoints with the
/// same weight. Self-loops appear once in their node's list.
///
/// Neighbors are yielded in edge insertion order, so searches over a graph built
/// from the same sequence of calls are reproducible.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    adjacency: HashMap<N, Vec<Neighbor<N>>>,
    /// Nodes in first-insertion order
    order: Vec<N>,
    edge_count: usize,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<N> Graph<N>
where
    N: Clone + Eq + Hash + Debug,
{
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list
    ///
    /// A repeated edge keeps the weight of its last occurrence.
    pub fn from_edges<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (N, N, Weight)>,
    {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    /// Build a graph from an adjacency mapping `node -> [(neighbor, weight)]`
    ///
    /// An edge may be listed from one or both of its endpoints, but both listings
    /// must agree on the weight. Nodes without neighbors become isolated nodes.
    pub fn from_adjacency<I, A>(adjacency: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (N, A)>,
        A: IntoIterator<Item = (N, Weight)>,
    {
        let mut graph = Self::new();
        for (node, neighbors) in adjacency {
            graph.add_node(node.clone());
            for (neighbor, weight) in neighbors {
                if let Some(existing) = graph.weight(&node, &neighbor) {
                    if existing != weight {
                        return Err(GraphError::AsymmetricWeight {
                            from: format!("{:?}", node),
                            to: format!("{:?}", neighbor),
                            first: existing,
                            second: weight,
                        });
                    }
                    continue;
                }
                graph.add_edge(node.clone(), neighbor, weight)?;
            }
        }
        Ok(graph)
    }

    /// Add an isolated node (no-op if already present)
    pub fn add_node(&mut self, node: N) {
        if !self.adjacency.contains_key(&node) {
            self.order.push(node.clone());
            self.adjacency.insert(node, Vec::new());
        }
    }

    /// Add an undirected edge, updating both endpoints
    ///
    /// Re-adding an existing edge replaces its weight on both sides.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidWeight` if the weight is not finite and positive.
    /// The graph is left untouched in that case.
    pub fn add_edge(&mut self, a: N, b: N, weight: Weight) -> Result<(), GraphError> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(GraphError::InvalidWeight {
                from: format!("{:?}", a),
                to: format!("{:?}", b),
                weight,
            });
        }

        self.add_node(a.clone());
        self.add_node(b.clone());

        let existed = self
            .adjacency
            .get_mut(&a)
            .map(|list| Self::upsert(list, &b, weight))
            .unwrap_or(false);
        if a != b {
            if let Some(list) = self.adjacency.get_mut(&b) {
                Self::upsert(list, &a, weight);
            }
        }
        if !existed {
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Insert or update `target` in `list`, returning whether it was already present
    fn upsert(list: &mut Vec<Neighbor<N>>, target: &N, weight: Weight) -> bool {
        match list.iter_mut().find(|n| &n.node == target) {
            Some(entry) => {
                entry.weight = weight;
                true
            }
            None => {
                list.push(Neighbor {
                    node: target.clone(),
                    weight,
                });
                false
            }
        }
    }

    /// Neighbors of a node, in insertion order (empty if the node is absent)
    pub fn neighbors(&self, node: &N) -> &[Neighbor<N>] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check if the graph contains a node
    pub fn has_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Weight of the edge between `a` and `b`, if any
    pub fn weight(&self, a: &N, b: &N) -> Option<Weight> {
        self.neighbors(a)
            .iter()
            .find(|n| &n.node == b)
            .map(|n| n.weight)
    }

    /// All nodes, in first-insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.order.iter()
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges (self-loops count once)
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
