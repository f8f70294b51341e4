use std::fmt::Display;

use graph_adt::prelude::*;

pub(crate) struct Script {
    name: &'static str,
    vertices: [&'static str; 3],
    weights: [Weight; 4],
    updated: Weight,
}

pub(crate) const ADJACENCY: Script = Script {
    name: "AdjacencyGraph",
    vertices: ["A", "B", "C"],
    weights: [5, 3, 2, 7],
    updated: 10,
};

pub(crate) const EDGE_LIST: Script = Script {
    name: "EdgeListGraph",
    vertices: ["X", "Y", "Z"],
    weights: [8, 4, 6, 9],
    updated: 15,
};

pub(crate) fn run<G>(script: Script) -> Result<(), Error>
where
    G: Graph<&'static str> + Default + Display,
{
    let Script {
        name,
        vertices: [a, b, c],
        weights,
        updated,
    } = script;

    println!("=== {name} ===");
    println!();

    let mut graph = G::default();
    println!("Empty graph:\n{graph}");

    for vertex in [a, b, c] {
        graph.add(vertex)?;
    }
    println!("After adding vertices {a}, {b}, {c}:\n{graph}");

    let edges = [(a, b), (a, c), (b, c), (c, a)];
    println!("After adding edges:");
    for ((source, target), weight) in edges.into_iter().zip(weights) {
        graph.set(source, target, weight)?;
        println!("  {source} → {target} (weight {weight})");
    }
    println!("{graph}");

    let previous = graph.set(a, b, updated)?;
    println!("After updating {a} → {b} from {previous} to {updated}:\n{graph}");

    graph.set(b, c, 0)?;
    println!("After removing edge {b} → {c}:\n{graph}");

    graph.remove(&c);
    println!("After removing vertex {c} (and its edges):\n{graph}");

    Ok(())
}
