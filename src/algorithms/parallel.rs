/// Parallel batch search
///
/// Runs many independent searches over one shared graph using rayon. Searches
/// only read the graph, so no synchronization is needed between them.

use super::{SearchResult, Strategy};
use crate::types::{Graph, Path};
use rayon::prelude::*;
use std::fmt::Debug;
use std::hash::Hash;

/// One search request in a batch
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery<N> {
    pub strategy: Strategy,
    pub start: N,
    pub goal: N,
}

impl<N> SearchQuery<N> {
    pub fn new(strategy: Strategy, start: N, goal: N) -> Self {
        Self {
            strategy,
            start,
            goal,
        }
    }
}

/// Run a batch of searches in parallel
///
/// # Arguments
/// * `graph` - The shared, read-only graph
/// * `queries` - Searches to run
///
/// # Returns
/// * One result per query, in query order
pub fn search_batch<N>(
    graph: &Graph<N>,
    queries: &[SearchQuery<N>],
) -> Vec<SearchResult<Option<Path<N>>>>
where
    N: Clone + Eq + Hash + Debug + Send + Sync,
{
    tracing::debug!(queries = queries.len(), "running search batch");

    queries
        .par_iter()
        .map(|query| query.strategy.search(graph, &query.start, &query.goal))
        .collect()
}
