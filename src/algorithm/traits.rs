use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::graph::Graph;
use crate::{Error, Result};

/// Final distances of one shortest path computation
///
/// Holds exactly one entry per key of the searched graph, in the graph's key
/// order. Unreachable keys hold positive infinity.
#[derive(Debug, Clone)]
pub struct DistanceTable<N, W> {
    /// Start node of the search
    source: N,

    /// (node, distance) in graph key order
    entries: Vec<(N, W)>,

    /// node -> position in `entries`
    index: HashMap<N, usize>,
}

impl<N, W> DistanceTable<N, W>
where
    N: Clone + Eq + Hash,
    W: Float,
{
    /// Lays out the working distances of a finished search over the keys of
    /// `graph`. Distances recorded for nodes that are not keys are dropped.
    pub(crate) fn from_search<G>(graph: &G, source: N, distances: &HashMap<N, W>) -> Self
    where
        G: Graph<N, W>,
    {
        let entries: Vec<(N, W)> = graph
            .nodes()
            .map(|node| {
                let distance = distances.get(node).copied().unwrap_or_else(W::infinity);
                (node.clone(), distance)
            })
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, (node, _))| (node.clone(), position))
            .collect();

        DistanceTable {
            source,
            entries,
            index,
        }
    }

    /// Returns the distance to `node`, or `None` if it is not a key of the graph
    pub fn distance(&self, node: &N) -> Option<W> {
        self.index.get(node).map(|&position| self.entries[position].1)
    }

    /// Returns true if `node` is a key with a finite distance
    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node).map_or(false, |distance| distance.is_finite())
    }

    /// Returns the number of keys with a finite distance
    pub fn reachable_count(&self) -> usize {
        self.entries.iter().filter(|(_, d)| d.is_finite()).count()
    }
}

impl<N, W> DistanceTable<N, W> {
    /// Returns the start node of the search
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Returns the number of entries (the key count of the searched graph)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(node, distance)` in graph key order
    pub fn iter(&self) -> impl Iterator<Item = (&N, W)> + '_
    where
        W: Copy,
    {
        self.entries.iter().map(|(node, distance)| (node, *distance))
    }
}

impl<N, W> PartialEq for DistanceTable<N, W>
where
    N: PartialEq,
    W: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.entries == other.entries
    }
}

// {"source": .., "distances": {node: distance | null}}, null meaning unreachable
impl<N, W> Serialize for DistanceTable<N, W>
where
    N: Serialize,
    W: Float + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        struct Distances<'a, N, W>(&'a [(N, W)]);

        impl<N, W> Serialize for Distances<'_, N, W>
        where
            N: Serialize,
            W: Float + Serialize,
        {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.collect_map(
                    self.0
                        .iter()
                        .map(|(node, d)| (node, if d.is_finite() { Some(*d) } else { None })),
                )
            }
        }

        let mut state = serializer.serialize_struct("DistanceTable", 2)?;
        state.serialize_field("source", &self.source)?;
        state.serialize_field("distances", &Distances(&self.entries))?;
        state.end()
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    /// Compute shortest distances from `source` to every key of `graph`.
    ///
    /// Edge weights must be non-negative; this is not checked.
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<DistanceTable<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Fails with [`Error::MissingStartNode`] unless `source` is a key of `graph`
pub(crate) fn require_source<N, W, G>(graph: &G, source: &N) -> Result<()>
where
    N: Debug,
    W: Float,
    G: Graph<N, W>,
{
    if graph.contains(source) {
        Ok(())
    } else {
        Err(Error::MissingStartNode(format!("{:?}", source)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyGraph;

    fn table() -> DistanceTable<&'static str, f64> {
        let graph: AdjacencyGraph<&str, f64> =
            [("A", vec![]), ("B", vec![]), ("C", vec![])].into_iter().collect();
        let distances = HashMap::from([("A", 0.0), ("B", 2.5), ("X", 1.0)]);
        DistanceTable::from_search(&graph, "A", &distances)
    }

    #[test]
    fn entries_follow_graph_keys() {
        let table = table();
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![(&"A", 0.0), (&"B", 2.5), (&"C", f64::INFINITY)]);
        assert_eq!(table.len(), 3);
        assert_eq!(*table.source(), "A");
    }

    #[test]
    fn non_key_distances_are_dropped() {
        let table = table();
        assert_eq!(table.distance(&"X"), None);
        assert!(!table.is_reachable(&"X"));
    }

    #[test]
    fn reachability() {
        let table = table();
        assert!(table.is_reachable(&"B"));
        assert!(!table.is_reachable(&"C"));
        assert_eq!(table.reachable_count(), 2);
    }

    #[test]
    fn serializes_unreachable_as_null() {
        let json = serde_json::to_value(table()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "source": "A",
                "distances": {"A": 0.0, "B": 2.5, "C": null}
            })
        );
    }

    #[test]
    fn missing_source_is_reported() {
        let graph: AdjacencyGraph<&str, f64> = [("A", vec![])].into_iter().collect();
        assert!(require_source::<_, f64, _>(&graph, &"A").is_ok());
        match require_source::<_, f64, _>(&graph, &"Q") {
            Err(Error::MissingStartNode(node)) => assert_eq!(node, "\"Q\""),
            other => panic!("expected MissingStartNode, got {:?}", other),
        }
    }
}
