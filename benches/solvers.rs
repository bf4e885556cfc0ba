use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heap_sssp::graph::generators::{grid_graph, random_graph};
use heap_sssp::{Dijkstra, LinearScan, ShortestPathAlgorithm};

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_graph");
    for &size in &[500usize, 2_000] {
        let graph = random_graph(size, 4.0, 100, 42);

        group.bench_with_input(BenchmarkId::new("heap", size), &graph, |b, g| {
            b.iter(|| Dijkstra::new().compute_shortest_paths(g, black_box(&0)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("scan", size), &graph, |b, g| {
            b.iter(|| LinearScan::new().compute_shortest_paths(g, black_box(&0)).unwrap())
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let graph = grid_graph(100, 100);
    c.bench_function("grid_100x100_heap", |b| {
        b.iter(|| Dijkstra::new().compute_shortest_paths(&graph, black_box(&0)).unwrap())
    });
}

criterion_group!(benches, bench_random, bench_grid);
criterion_main!(benches);
