//! Demonstration graph and output formatting used by the `shortest_paths` binary

use std::fmt::Display;
use std::fs;
use std::io::Write;
use std::path::Path;

use num_traits::Float;
use serde::Serialize;

use crate::algorithm::DistanceTable;
use crate::graph::AdjacencyGraph;
use crate::Result;

/// The six-node example graph, keys `A` through `F` in order.
///
/// Undirected edges A-B:5, A-C:1, B-C:2, B-D:1, C-D:4, C-E:8, D-E:3, D-F:6,
/// stored as symmetric directed edges.
pub fn example_graph() -> AdjacencyGraph<String, f64> {
    let edges: [(&str, &[(&str, f64)]); 6] = [
        ("A", &[("B", 5.0), ("C", 1.0)]),
        ("B", &[("A", 5.0), ("C", 2.0), ("D", 1.0)]),
        ("C", &[("A", 1.0), ("B", 2.0), ("D", 4.0), ("E", 8.0)]),
        ("D", &[("B", 1.0), ("C", 4.0), ("E", 3.0), ("F", 6.0)]),
        ("E", &[("C", 8.0), ("D", 3.0)]),
        ("F", &[("D", 6.0)]),
    ];

    edges
        .iter()
        .map(|(node, out)| {
            let out: Vec<(String, f64)> = out
                .iter()
                .map(|(target, weight)| (target.to_string(), *weight))
                .collect();
            (node.to_string(), out)
        })
        .collect()
}

/// Reads a graph document (`{"node": [["neighbor", weight], ...], ...}`).
///
/// Unlike the solvers, loading rejects negative weights.
pub fn load_graph(path: &Path) -> Result<AdjacencyGraph<String, f64>> {
    let text = fs::read_to_string(path)?;
    let graph: AdjacencyGraph<String, f64> = serde_json::from_str(&text)?;
    graph.validate_non_negative()?;
    Ok(graph)
}

/// Writes the header line and one `  <node>: <distance>` line per key.
pub fn render_text<N, W, O>(table: &DistanceTable<N, W>, out: &mut O) -> std::io::Result<()>
where
    N: Display,
    W: Float + Display,
    O: Write,
{
    writeln!(out, "Shortest distances from node {}:", table.source())?;
    for (node, distance) in table.iter() {
        writeln!(out, "  {}: {}", node, distance)?;
    }
    Ok(())
}

/// Pretty-printed JSON form of the table, unreachable nodes as `null`.
pub fn render_json<N, W>(table: &DistanceTable<N, W>) -> Result<String>
where
    N: Serialize,
    W: Float + Serialize,
{
    Ok(serde_json::to_string_pretty(table)?)
}
