use std::fmt::Debug;
use num_traits::Float;

/// Trait representing a weighted directed graph keyed by node identifiers
///
/// Nodes are reported in a stable order (the order they were added in), which
/// is the order distance tables are laid out in.
pub trait Graph<N, W>: Debug
where
    W: Float,
{
    /// Returns the number of nodes that are keys of the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges counted separately
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the keys of the graph in insertion order
    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = &'a N> + 'a>
    where
        N: 'a;

    /// Returns an iterator over the outgoing edges from a node.
    ///
    /// Nodes that are not keys of the graph have no outgoing edges.
    fn outgoing_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, W)> + 'a>
    where
        N: 'a;

    /// Returns true if the node is a key of the graph
    fn contains(&self, node: &N) -> bool;
}
