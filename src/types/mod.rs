/// Core data types for graph search
///
/// This module defines the values shared by every search strategy:
/// - Graph: weighted, undirected adjacency structure
/// - Path: node sequence returned by a search, with its edge weights
/// - CostModel: unit (edge count) or weighted path cost

pub mod graph;
pub mod path;

pub use graph::{Graph, GraphError, Neighbor, Weight};
pub use path::{CostModel, Path, PathError};
