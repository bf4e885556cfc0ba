use crate::graph::traits::Graph;
use crate::Error;
use num_traits::Float;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::marker::PhantomData;

/// A directed graph stored as adjacency lists keyed by node
///
/// Keys keep the order they were first inserted in, and each key owns an
/// ordered list of `(neighbor, weight)` edges. A neighbor does not have to be
/// a key itself.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N, W> {
    /// Keys in first-insertion order
    order: Vec<N>,

    /// Outgoing edges for each key: node -> [(target, weight)]
    adjacency: HashMap<N, Vec<(N, W)>>,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for `nodes` keys
    pub fn with_capacity(nodes: usize) -> Self {
        AdjacencyGraph {
            order: Vec::with_capacity(nodes),
            adjacency: HashMap::with_capacity(nodes),
        }
    }

    /// Sets the outgoing edges of `node`.
    ///
    /// A new key is appended to the key order. Re-inserting an existing key
    /// replaces its edge list and keeps its position.
    pub fn insert(&mut self, node: N, edges: Vec<(N, W)>) {
        if self.adjacency.insert(node.clone(), edges).is_none() {
            self.order.push(node);
        }
    }

    /// Builds a graph from undirected edges, expressed as symmetric directed edges.
    ///
    /// Keys appear in the order their endpoints are first mentioned.
    pub fn from_undirected_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, W)>,
        W: Copy,
    {
        let mut graph = AdjacencyGraph::new();
        for (a, b, weight) in edges {
            graph.ensure_key(&a);
            graph.ensure_key(&b);
            if let Some(list) = graph.adjacency.get_mut(&a) {
                list.push((b.clone(), weight));
            }
            if let Some(list) = graph.adjacency.get_mut(&b) {
                list.push((a, weight));
            }
        }
        graph
    }

    fn ensure_key(&mut self, node: &N) {
        if !self.adjacency.contains_key(node) {
            self.insert(node.clone(), Vec::new());
        }
    }
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Display,
    W: Float,
{
    /// Checks that no edge carries a negative (or NaN) weight.
    ///
    /// The solvers assume this holds and never call it themselves.
    pub fn validate_non_negative(&self) -> crate::Result<()> {
        for node in &self.order {
            let edges = self.adjacency.get(node).into_iter().flatten();
            for (target, weight) in edges {
                if !(*weight >= W::zero()) {
                    return Err(Error::NegativeWeight {
                        from: node.to_string(),
                        to: target.to_string(),
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<N, W> Default for AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> Graph<N, W> for AdjacencyGraph<N, W>
where
    N: Eq + Hash + Debug,
    W: Float + Debug,
{
    fn node_count(&self) -> usize {
        self.order.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = &'a N> + 'a>
    where
        N: 'a,
    {
        Box::new(self.order.iter())
    }

    fn outgoing_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, W)> + 'a>
    where
        N: 'a,
    {
        if let Some(edges) = self.adjacency.get(node) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }
}

impl<N, W> PartialEq for AdjacencyGraph<N, W>
where
    N: Eq + Hash,
    W: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.adjacency == other.adjacency
    }
}

impl<N, W> FromIterator<(N, Vec<(N, W)>)> for AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (N, Vec<(N, W)>)>>(iter: I) -> Self {
        let mut graph = AdjacencyGraph::new();
        for (node, edges) in iter {
            graph.insert(node, edges);
        }
        graph
    }
}

// Serialized as a map from node to `[[neighbor, weight], ...]`, in key order.
impl<N, W> Serialize for AdjacencyGraph<N, W>
where
    N: Serialize + Eq + Hash,
    W: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.order
                .iter()
                .filter_map(|node| self.adjacency.get(node).map(|edges| (node, edges))),
        )
    }
}

impl<'de, N, W> Deserialize<'de> for AdjacencyGraph<N, W>
where
    N: Deserialize<'de> + Clone + Eq + Hash,
    W: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AdjacencyVisitor<N, W>(PhantomData<fn() -> (N, W)>);

        impl<'de, N, W> Visitor<'de> for AdjacencyVisitor<N, W>
        where
            N: Deserialize<'de> + Clone + Eq + Hash,
            W: Deserialize<'de>,
        {
            type Value = AdjacencyGraph<N, W>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from node to a list of [neighbor, weight] pairs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut graph = AdjacencyGraph::with_capacity(access.size_hint().unwrap_or(0));
                // Document order becomes key order
                while let Some((node, edges)) = access.next_entry::<N, Vec<(N, W)>>()? {
                    graph.insert(node, edges);
                }
                Ok(graph)
            }
        }

        deserializer.deserialize_map(AdjacencyVisitor(PhantomData))
    }
}
