//! Heap SSSP - single-source shortest paths with a lazy-deletion binary heap
//!
//! Computes, for every node of a weighted directed graph, the minimum total edge
//! weight of a path from a start node. Edge weights must be non-negative; this is
//! a precondition of the solvers and is not checked at runtime.
//!
//! ```
//! use heap_sssp::{solve, AdjacencyGraph};
//!
//! let graph: AdjacencyGraph<&str, f64> = [
//!     ("A", vec![("B", 1.0)]),
//!     ("B", vec![]),
//!     ("C", vec![]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let table = solve(&graph, &"A").unwrap();
//! assert_eq!(table.distance(&"B"), Some(1.0));
//! assert!(!table.is_reachable(&"C"));
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod demo;
pub mod graph;

use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;

pub use algorithm::{
    dijkstra::Dijkstra, linear_scan::LinearScan, DistanceTable, SearchStats,
    ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, Graph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Start node {0} is not a key of the graph")]
    MissingStartNode(String),

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed graph document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Computes shortest distances from `start` to every key of `graph` with the
/// heap-based solver.
///
/// Unreachable keys map to positive infinity. Returns
/// [`Error::MissingStartNode`] if `start` is not a key of `graph`.
pub fn solve<N, W, G>(graph: &G, start: &N) -> Result<DistanceTable<N, W>>
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    Dijkstra::new().compute_shortest_paths(graph, start)
}
