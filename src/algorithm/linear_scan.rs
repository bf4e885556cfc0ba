use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;
use num_traits::Float;
use ordered_float::OrderedFloat;

use crate::algorithm::traits::require_source;
use crate::algorithm::{DistanceTable, ShortestPathAlgorithm};
use crate::graph::Graph;
use crate::Result;

/// Dijkstra's algorithm without a heap
///
/// Each round scans every unsettled node for the smallest finite distance,
/// giving O(V^2 + E). Produces the same tables as [`super::dijkstra::Dijkstra`]
/// and is mostly useful as a cross-check and on small dense graphs.
#[derive(Debug, Default)]
pub struct LinearScan;

impl LinearScan {
    /// Creates a new linear scan instance
    pub fn new() -> Self {
        LinearScan
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for LinearScan
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "LinearScan"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<DistanceTable<N, W>> {
        require_source(graph, source)?;

        let mut distances: HashMap<N, W> = graph
            .nodes()
            .map(|node| (node.clone(), W::infinity()))
            .collect();
        distances.insert(source.clone(), W::zero());
        let mut settled: HashSet<N> = HashSet::with_capacity(distances.len());

        loop {
            // Closest unsettled node, ties broken on the node like the heap does
            let next = distances
                .iter()
                .filter(|(node, d)| d.is_finite() && !settled.contains(*node))
                .min_by(|(a, da), (b, db)| {
                    OrderedFloat(**da)
                        .cmp(&OrderedFloat(**db))
                        .then_with(|| a.cmp(b))
                })
                .map(|(node, d)| (node.clone(), *d));

            let Some((node, dist_u)) = next else {
                break;
            };
            settled.insert(node.clone());

            for (neighbor, weight) in graph.outgoing_edges(&node) {
                let candidate = dist_u + weight;
                let current = distances.get(neighbor).copied().unwrap_or_else(W::infinity);
                if candidate < current {
                    distances.insert(neighbor.clone(), candidate);
                }
            }
        }

        debug!("linear scan: settled {} nodes", settled.len());
        Ok(DistanceTable::from_search(graph, source.clone(), &distances))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::dijkstra::Dijkstra;
    use crate::graph::generators::random_graph;
    use crate::graph::AdjacencyGraph;

    #[test]
    fn chain_distances() {
        let graph: AdjacencyGraph<u8, f64> = [
            (1, vec![(2, 2.0)]),
            (2, vec![(3, 3.0), (2, 1.0)]),
            (3, vec![]),
            (4, vec![(1, 1.0)]),
        ]
        .into_iter()
        .collect();
        let table = LinearScan::new().compute_shortest_paths(&graph, &1).unwrap();
        let entries: Vec<_> = table.iter().map(|(n, d)| (*n, d)).collect();
        assert_eq!(entries, vec![(1, 0.0), (2, 2.0), (3, 5.0), (4, f64::INFINITY)]);
    }

    #[test]
    fn matches_heap_solver_on_random_graphs() {
        for seed in 0..20 {
            let graph = random_graph(40, 3.0, 25, seed);
            let heap = Dijkstra::new().compute_shortest_paths(&graph, &0).unwrap();
            let scan = LinearScan::new().compute_shortest_paths(&graph, &0).unwrap();
            assert_eq!(heap, scan, "solvers disagree for seed {}", seed);
        }
    }

    #[test]
    fn tolerates_neighbors_that_are_not_keys() {
        let graph: AdjacencyGraph<&str, f64> = [
            ("A", vec![("ghost", 1.0)]),
            ("B", vec![]),
        ]
        .into_iter()
        .collect();
        let table = LinearScan::new().compute_shortest_paths(&graph, &"A").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.distance(&"ghost"), None);
        assert_eq!(table.distance(&"B"), Some(f64::INFINITY));
    }
}
