//! A directed, weighted graph abstract data type.
//!
//! The crate provides two structurally different representations of the same
//! abstract graph, both implementing the [`Graph`] contract:
//!
//! * [`EdgeListGraph`] stores a set of vertex labels and a flat list of
//!   immutable edges. Queries scan the edge list.
//! * [`AdjacencyGraph`] stores one record per vertex, each holding the
//!   outgoing and incoming weights of that vertex. Queries index directly into
//!   the record of the requested vertex.
//!
//! Callers are expected to program against [`Graph`] only; the two
//! representations are observably indistinguishable.
//!
//! # What is a graph?
//!
//! A graph is a set of vertices `V` together with a partial function
//! `E: V × V → positive integer`. For every pair `(s, t)` for which `E` is
//! defined, both `s` and `t` are in `V`. Edges are directed, i.e., `(u, v)` and
//! `(v, u)` are different edges, and there is at most one edge per ordered
//! pair. Self-loops are allowed.
//!
//! A weight of `0` is never stored. Passing `0` to [`Graph::set`] is the signal
//! to delete an edge.
//!
//! # How to use a graph
//!
//! ```
//! use graph_adt::prelude::*;
//!
//! let mut graph = AdjacencyGraph::<&str>::new();
//!
//! assert!(graph.add("A").unwrap());
//! assert!(!graph.add("A").unwrap());
//!
//! // `set` creates missing vertices and returns the previous weight.
//! assert_eq!(graph.set("A", "B", 5).unwrap(), 0);
//! assert_eq!(graph.set("A", "B", 10).unwrap(), 5);
//! assert_eq!(graph.targets(&"A").get("B"), Some(&10));
//!
//! // A weight of zero removes the edge but keeps its endpoints.
//! assert_eq!(graph.set("A", "B", 0).unwrap(), 10);
//! assert!(graph.targets(&"A").is_empty());
//! assert_eq!(graph.vertex_count(), 2);
//!
//! // Removing a vertex removes every edge touching it.
//! graph.set("C", "A", 2).unwrap();
//! assert!(graph.remove(&"A"));
//! assert!(graph.targets(&"C").is_empty());
//! ```
//!
//! Both representations can be created from a list of weighted edges using the
//! [`GraphBuilder`]:
//!
//! ```
//! use graph_adt::prelude::*;
//!
//! let graph: EdgeListGraph<u32> = GraphBuilder::new()
//!     .vertices([7])
//!     .edges([(0, 1, 3), (0, 2, 1), (1, 2, 4), (2, 0, 9)])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.vertex_count(), 4);
//! assert_eq!(graph.edge_count(), 4);
//! assert_eq!(graph.sources(&2).len(), 2);
//! assert!(graph.targets(&7).is_empty());
//! ```
//!
//! Every accessor returns an owned snapshot. Changing it does not change the
//! graph:
//!
//! ```
//! use graph_adt::prelude::*;
//!
//! let mut graph = EdgeListGraph::new();
//! graph.set("A", "B", 1).unwrap();
//!
//! let mut targets = graph.targets(&"A");
//! targets.insert("C", 42);
//!
//! assert_eq!(graph.targets(&"A").len(), 1);
//! ```
//!
//! It is also possible to load a graph from a text file using the
//! [`EdgeListInput`](crate::input::EdgeListInput) format, where each line
//! contains `source target weight`:
//!
//! ```
//! use std::path::PathBuf;
//!
//! use graph_adt::prelude::*;
//!
//! let path = [env!("CARGO_MANIFEST_DIR"), "resources", "example.wel"]
//!     .iter()
//!     .collect::<PathBuf>();
//!
//! let graph: AdjacencyGraph<String> = GraphBuilder::new()
//!     .file_format(EdgeListInput::default())
//!     .path(path)
//!     .build()
//!     .expect("loading failed");
//!
//! assert_eq!(graph.vertex_count(), 5);
//! assert_eq!(graph.edge_count(), 5);
//! assert_eq!(graph.targets(&"a".to_string()).len(), 2);
//! ```

pub mod builder;
pub mod graph;
pub mod graph_ops;
pub mod input;
pub mod invariant;
pub mod label;
pub mod prelude;

pub use crate::builder::GraphBuilder;
pub use crate::graph::adj_list::AdjacencyGraph;
pub use crate::graph::edge_list::EdgeListGraph;
pub use crate::graph::Weight;

use std::collections::{HashMap, HashSet};

use crate::label::Label;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("error while loading graph")]
    IoError {
        #[from]
        source: std::io::Error,
    },
    #[error("invalid vertex label {label}")]
    InvalidLabel { label: String },
    #[error("weight of edge {from} → {to} must be positive")]
    NonPositiveWeight { from: String, to: String },
    #[error("invalid input at line {line}: {reason}")]
    InvalidInput { line: usize, reason: String },
}

impl Error {
    pub(crate) fn invalid_label<L: Label>(label: &L) -> Self {
        Error::InvalidLabel {
            label: format!("{label:?}"),
        }
    }
}

/// Fails with [`Error::InvalidLabel`] unless `label` may name a vertex.
pub(crate) fn validate<L: Label>(label: &L) -> Result<(), Error> {
    if label.is_valid() {
        Ok(())
    } else {
        Err(Error::invalid_label(label))
    }
}

/// A mutable, directed graph with positive integer edge weights.
///
/// `Graph` is parameterized over the vertex label type `L`. Every method that
/// returns a collection returns an independent snapshot; no reference to the
/// internal state of a graph is ever handed out.
///
/// Mutating methods either apply completely or, if they fail, leave the graph
/// unchanged.
pub trait Graph<L: Label> {
    /// Adds `vertex` without any edges.
    ///
    /// Returns `true` if the vertex was newly added and `false` if it was
    /// already part of the graph, in which case the graph is not modified.
    fn add(&mut self, vertex: L) -> Result<bool, Error>;

    /// Creates, updates or removes the edge `source → target`.
    ///
    /// If `weight` is positive, missing endpoints are added and the edge is
    /// inserted or its weight is replaced. If `weight` is zero, the edge is
    /// removed if present; its endpoints stay in the graph.
    ///
    /// Returns the previous weight of the edge, or zero if it did not exist.
    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight, Error>;

    /// Removes `vertex` together with every edge it is the source or the target
    /// of.
    ///
    /// Returns `true` if the vertex was part of the graph.
    fn remove(&mut self, vertex: &L) -> bool;

    /// Returns the labels of all vertices in the graph.
    fn vertices(&self) -> HashSet<L>;

    /// Returns every vertex with an edge into `target`, mapped to the weight of
    /// that edge.
    ///
    /// Returns an empty map if `target` has no incoming edges or is not part of
    /// the graph.
    fn sources(&self, target: &L) -> HashMap<L, Weight>;

    /// Returns every vertex with an edge from `source`, mapped to the weight of
    /// that edge.
    ///
    /// Returns an empty map if `source` has no outgoing edges or is not part of
    /// the graph.
    fn targets(&self, source: &L) -> HashMap<L, Weight>;

    /// Returns every edge as a `(source, target, weight)` triple, in no
    /// particular order.
    fn edges(&self) -> Vec<(L, L, Weight)>;

    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph.
    fn edge_count(&self) -> usize;

    /// Returns `true` if `vertex` is part of the graph.
    fn contains(&self, vertex: &L) -> bool {
        self.vertices().contains(vertex)
    }
}
