use arbor::Graph;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_graph(nodes: usize, edges: usize, directed: bool) -> Graph<usize, u32> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut g = Graph::new(directed);
    for v in 0..nodes {
        g.add_node(v);
    }
    for _ in 0..edges {
        let u = rng.gen_range(0..nodes);
        let v = rng.gen_range(0..nodes);
        g.add_weighted_edge(u, v, rng.gen_range(1..100));
    }
    g
}

/// Chain 0 -> 1 -> ... -> n plus a skip edge every ten nodes; acyclic.
fn layered_dag(nodes: usize) -> Graph<usize, u32> {
    let mut g = Graph::directed();
    for i in 0..nodes - 1 {
        g.add_edge(i, i + 1);
        if i + 10 < nodes {
            g.add_edge(i, i + 10);
        }
    }
    g
}

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_traversal");

    for nodes in [1_000, 10_000] {
        let g = random_graph(nodes, nodes * 4, false);
        group.bench_with_input(BenchmarkId::new("bfs", nodes), &g, |b, g| {
            b.iter(|| black_box(g.bfs(&0)));
        });
        group.bench_with_input(BenchmarkId::new("dfs_iterative", nodes), &g, |b, g| {
            b.iter(|| black_box(g.dfs_iterative(&0)));
        });
        group.bench_with_input(BenchmarkId::new("components", nodes), &g, |b, g| {
            b.iter(|| black_box(g.connected_components()));
        });
    }

    group.finish();
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");

    for nodes in [1_000, 10_000] {
        let g = random_graph(nodes, nodes * 8, true);
        group.bench_with_input(BenchmarkId::new("arbor", nodes), &g, |b, g| {
            b.iter(|| black_box(g.dijkstra(&0).map(|paths| paths.distance(&(nodes - 1)))));
        });
    }

    group.finish();
}

fn bench_dag(c: &mut Criterion) {
    let g = layered_dag(10_000);

    c.bench_function("topological_sort_10k", |b| {
        b.iter(|| black_box(g.topological_sort()));
    });
    c.bench_function("has_cycle_10k", |b| {
        b.iter(|| black_box(g.has_cycle()));
    });
}

criterion_group!(benches, bench_traversals, bench_dijkstra, bench_dag);
criterion_main!(benches);
