pub mod traits;
pub mod dijkstra;
pub mod linear_scan;

pub use traits::{DistanceTable, ShortestPathAlgorithm};
pub use dijkstra::SearchStats;
