pub mod traits;
pub mod adjacency;
pub mod generators;

pub use traits::Graph;
pub use adjacency::AdjacencyGraph;
