use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;

use log::{debug, trace};
use num_traits::Float;
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::algorithm::traits::require_source;
use crate::algorithm::{DistanceTable, ShortestPathAlgorithm};
use crate::data_structures::Frontier;
use crate::graph::Graph;
use crate::Result;

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Entries popped with a distance equal to their table value
    pub nodes_settled: usize,

    /// Entries popped after being superseded by a shorter distance
    pub stale_entries_skipped: usize,

    /// Successful relaxations (each one pushes a frontier entry)
    pub edges_relaxed: usize,

    /// Largest frontier size observed, stale entries included
    pub max_frontier_len: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "settled={} stale_skipped={} relaxed={} max_frontier={}",
            self.nodes_settled,
            self.stale_entries_skipped,
            self.edges_relaxed,
            self.max_frontier_len
        )
    }
}

/// Classic Dijkstra's algorithm over a lazy-deletion binary heap
///
/// Runs in O((V + E) log V).
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Same as [`ShortestPathAlgorithm::compute_shortest_paths`], also
    /// returning the counters of the run.
    pub fn compute_with_stats<N, W, G>(
        &self,
        graph: &G,
        source: &N,
    ) -> Result<(DistanceTable<N, W>, SearchStats)>
    where
        N: Clone + Eq + Hash + Ord + Debug,
        W: Float + Debug,
        G: Graph<N, W>,
    {
        require_source(graph, source)?;
        debug!(
            "dijkstra: source={:?} nodes={} edges={}",
            source,
            graph.node_count(),
            graph.edge_count()
        );

        let mut stats = SearchStats::default();

        // Every key starts unreachable except the source
        let mut distances: HashMap<N, W> = graph
            .nodes()
            .map(|node| (node.clone(), W::infinity()))
            .collect();
        distances.insert(source.clone(), W::zero());

        let mut frontier = Frontier::new();
        frontier.push(source.clone(), OrderedFloat(W::zero()));
        stats.max_frontier_len = 1;

        while let Some((node, OrderedFloat(dist_u))) = frontier.pop() {
            let best = distances.get(&node).copied().unwrap_or_else(W::infinity);
            if dist_u > best {
                trace!("skip stale {:?} at {:?} (best {:?})", node, dist_u, best);
                stats.stale_entries_skipped += 1;
                continue;
            }

            trace!("settle {:?} at {:?}", node, dist_u);
            stats.nodes_settled += 1;

            // Relax all outgoing edges
            for (neighbor, weight) in graph.outgoing_edges(&node) {
                let candidate = dist_u + weight;
                // Neighbors that are not keys are tracked here but never reported
                let current = distances.get(neighbor).copied().unwrap_or_else(W::infinity);

                if candidate < current {
                    distances.insert(neighbor.clone(), candidate);
                    frontier.push(neighbor.clone(), OrderedFloat(candidate));
                    stats.edges_relaxed += 1;
                }
            }
            stats.max_frontier_len = stats.max_frontier_len.max(frontier.len());
        }

        debug!("dijkstra: finished, {}", stats);
        Ok((
            DistanceTable::from_search(graph, source.clone(), &distances),
            stats,
        ))
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<DistanceTable<N, W>> {
        self.compute_with_stats(graph, source).map(|(table, _)| table)
    }
}
