use log::info;

use crate::input::EdgeList;
use crate::label::Label;
use crate::{Error, Graph};

use std::time::Instant;

/// Rebuild a graph in another representation.
pub trait CopyGraphOp<L: Label> {
    /// Creates a graph of type `G` that contains the same vertices and edges
    /// as `self`.
    ///
    /// # Example
    ///
    /// ```
    /// # use graph_adt::prelude::*;
    /// let mut edge_list = EdgeListGraph::new();
    /// edge_list.set("a", "b", 3).unwrap();
    /// edge_list.add("c").unwrap();
    ///
    /// let adjacency: AdjacencyGraph<_> = edge_list.copy_into().unwrap();
    ///
    /// assert_eq!(adjacency.vertex_count(), 3);
    /// assert_eq!(adjacency.sources(&"b").get("a"), Some(&3));
    /// ```
    fn copy_into<G>(&self) -> Result<G, Error>
    where
        G: Graph<L> + Default;
}

/// Compare two graphs through the [`Graph`] contract only.
pub trait EquivalentOp<L: Label> {
    /// Returns `true` if both graphs have the same vertices and every vertex
    /// has the same sources and targets, with the same weights, in both.
    ///
    /// # Example
    ///
    /// ```
    /// # use graph_adt::prelude::*;
    /// let mut edge_list = EdgeListGraph::new();
    /// edge_list.set("a", "b", 1).unwrap();
    /// edge_list.set("b", "a", 2).unwrap();
    ///
    /// let mut adjacency = AdjacencyGraph::new();
    /// adjacency.set("b", "a", 2).unwrap();
    /// adjacency.set("a", "b", 1).unwrap();
    ///
    /// assert!(edge_list.equivalent(&adjacency));
    ///
    /// adjacency.set("b", "a", 3).unwrap();
    ///
    /// assert!(!edge_list.equivalent(&adjacency));
    /// ```
    fn equivalent<G>(&self, other: &G) -> bool
    where
        G: Graph<L>;
}

impl<L, T> CopyGraphOp<L> for T
where
    L: Label,
    T: Graph<L>,
{
    fn copy_into<G>(&self) -> Result<G, Error>
    where
        G: Graph<L> + Default,
    {
        let start = Instant::now();
        let edge_list = EdgeList::new(self.vertices().into_iter().collect(), self.edges());
        let graph = edge_list.into_graph::<G>()?;

        info!(
            "Copied graph (vertex_count = {}, edge_count = {}) in {:?}",
            graph.vertex_count(),
            graph.edge_count(),
            start.elapsed()
        );

        Ok(graph)
    }
}

impl<L, T> EquivalentOp<L> for T
where
    L: Label,
    T: Graph<L>,
{
    fn equivalent<G>(&self, other: &G) -> bool
    where
        G: Graph<L>,
    {
        let vertices = self.vertices();

        vertices == other.vertices()
            && vertices
                .iter()
                .all(|v| self.targets(v) == other.targets(v) && self.sources(v) == other.sources(v))
    }
}
