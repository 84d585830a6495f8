use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_search::{bfs, dfs, iddfs, search_batch, ucs, Graph, SearchQuery, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// size×size grid with random weights in 1..=10
fn grid_graph(size: u32, seed: u64) -> Graph<(u32, u32)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new();

    for r in 0..size {
        for c in 0..size {
            if r + 1 < size {
                graph
                    .add_edge((r, c), (r + 1, c), rng.gen_range(1..=10) as f64)
                    .unwrap();
            }
            if c + 1 < size {
                graph
                    .add_edge((r, c), (r, c + 1), rng.gen_range(1..=10) as f64)
                    .unwrap();
            }
        }
    }

    graph
}

/// Complete tree with unit weights; node ids are heap indices
fn tree_graph(depth: u32, branching: u64) -> (Graph<u64>, u64) {
    let mut graph = Graph::new();
    let mut level_start = 0u64;
    let mut level_len = 1u64;

    for _ in 0..depth {
        for parent in level_start..level_start + level_len {
            for child in 0..branching {
                graph
                    .add_edge(parent, parent * branching + 1 + child, 1.0)
                    .unwrap();
            }
        }
        level_start = level_start * branching + 1;
        level_len *= branching;
    }

    // Deepest, rightmost leaf
    (graph, level_start + level_len - 1)
}

/// Benchmark BFS, DFS and UCS corner to corner on grids
fn bench_grid_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_search");

    for size in [10u32, 30, 50] {
        let graph = grid_graph(size, 42);
        let goal = (size - 1, size - 1);

        group.bench_with_input(BenchmarkId::new("bfs", size), &graph, |b, g| {
            b.iter(|| black_box(bfs(g, &(0, 0), &goal).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("dfs", size), &graph, |b, g| {
            b.iter(|| black_box(dfs(g, &(0, 0), &goal).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("ucs", size), &graph, |b, g| {
            b.iter(|| black_box(ucs(g, &(0, 0), &goal).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark IDDFS on trees, where every node has a single simple path from the root
fn bench_iddfs_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("iddfs_tree");

    for depth in [4u32, 6] {
        let (graph, goal) = tree_graph(depth, 3);

        group.bench_with_input(BenchmarkId::from_parameter(depth), &graph, |b, g| {
            b.iter(|| black_box(iddfs(g, &0, &goal, depth as usize).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark a parallel batch of UCS queries against one shared grid
fn bench_search_batch(c: &mut Criterion) {
    let size = 30u32;
    let graph = grid_graph(size, 7);
    let queries: Vec<SearchQuery<(u32, u32)>> = (0..size)
        .map(|i| SearchQuery::new(Strategy::UniformCost, (0, 0), (i, size - 1 - i)))
        .collect();

    c.bench_function("ucs_batch_30_queries", |b| {
        b.iter(|| black_box(search_batch(&graph, &queries)))
    });
}

criterion_group!(benches, bench_grid_search, bench_iddfs_tree, bench_search_batch);
criterion_main!(benches);
