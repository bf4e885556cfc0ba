use crate::graph::AdjacencyGraph;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph over nodes `0..nodes`
///
/// Roughly `edge_factor * nodes` edges are drawn with integral weights in
/// `0..=max_weight`. Self-loops and parallel edges are allowed. The same seed
/// always yields the same graph.
pub fn random_graph(
    nodes: usize,
    edge_factor: f64,
    max_weight: u32,
    seed: u64,
) -> AdjacencyGraph<usize, f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); nodes];

    if nodes > 0 {
        let edge_total = (edge_factor * nodes as f64) as usize;
        for _ in 0..edge_total {
            let u = rng.gen_range(0..nodes);
            let v = rng.gen_range(0..nodes);
            let weight = rng.gen_range(0..=max_weight) as f64;
            adjacency[u].push((v, weight));
        }
    }

    adjacency.into_iter().enumerate().collect()
}

/// Generates a `width` x `height` grid with unit weights between 4-neighbors
///
/// Node ids are `y * width + x`, so the distance from node 0 to `(x, y)` is `x + y`.
pub fn grid_graph(width: usize, height: usize) -> AdjacencyGraph<usize, f64> {
    let mut graph = AdjacencyGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let mut edges = Vec::with_capacity(4);
            if x > 0 {
                edges.push((y * width + x - 1, 1.0));
            }
            if x + 1 < width {
                edges.push((y * width + x + 1, 1.0));
            }
            if y > 0 {
                edges.push(((y - 1) * width + x, 1.0));
            }
            if y + 1 < height {
                edges.push(((y + 1) * width + x, 1.0));
            }
            graph.insert(y * width + x, edges);
        }
    }

    graph
}
