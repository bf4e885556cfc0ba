use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of `(distance, node)` entries for label-setting searches
///
/// There is no decrease-key: a better distance for a node is pushed as a new
/// entry and the superseded one stays in the heap until it is popped. Callers
/// discard such stale entries by comparing against their distance table.
///
/// Entries come out by ascending distance; equal distances come out by
/// ascending node.
#[derive(Debug)]
pub struct Frontier<N, D>
where
    N: Ord + Debug,
    D: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(D, N)>>,
}

impl<N, D> Frontier<N, D>
where
    N: Ord + Debug,
    D: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a node with the given tentative distance
    pub fn push(&mut self, node: N, distance: D) {
        self.heap.push(Reverse((distance, node)));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(N, D)> {
        self.heap.pop().map(|Reverse((distance, node))| (node, distance))
    }
}

impl<N, D> Default for Frontier<N, D>
where
    N: Ord + Debug,
    D: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
