use std::collections::{HashMap, HashSet};
use std::fmt;
use std::num::NonZeroU32;

use fxhash::FxHashSet;
use log::{debug, trace};

use crate::invariant::{assert_rep, CheckRep, RepViolation};
use crate::label::Label;
use crate::{validate, Error, Graph, Weight};

/// An immutable, directed edge with a positive weight.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge<L> {
    source: L,
    target: L,
    weight: NonZeroU32,
}

impl<L: Label> Edge<L> {
    /// Creates the edge `source → target`.
    ///
    /// Fails if either label is invalid or if `weight` is zero.
    pub fn new(source: L, target: L, weight: Weight) -> Result<Self, Error> {
        validate(&source)?;
        validate(&target)?;

        let weight = NonZeroU32::new(weight).ok_or_else(|| Error::NonPositiveWeight {
            from: format!("{source:?}"),
            to: format!("{target:?}"),
        })?;

        Ok(Self {
            source,
            target,
            weight,
        })
    }

    pub fn source(&self) -> &L {
        &self.source
    }

    pub fn target(&self) -> &L {
        &self.target
    }

    pub fn weight(&self) -> Weight {
        self.weight.get()
    }

    /// Returns `true` if this is the edge `source → target`.
    pub fn connects(&self, source: &L, target: &L) -> bool {
        &self.source == source && &self.target == target
    }

    fn touches(&self, vertex: &L) -> bool {
        &self.source == vertex || &self.target == vertex
    }

    fn to_triple(&self) -> (L, L, Weight) {
        (self.source.clone(), self.target.clone(), self.weight())
    }
}

impl<L: Label> fmt::Display for Edge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {} ({})", self.source, self.target, self.weight)
    }
}

/// A graph stored as a set of vertex labels and a list of edges.
///
/// Edges are immutable: changing the weight of an edge replaces it. Every
/// query scans the whole edge list, i.e., `sources` and `targets` run in
/// `O(|E|)`.
#[derive(Clone, Debug)]
pub struct EdgeListGraph<L> {
    vertices: FxHashSet<L>,
    edges: Vec<Edge<L>>,
}

impl<L: Label> Default for EdgeListGraph<L> {
    fn default() -> Self {
        Self {
            vertices: FxHashSet::default(),
            edges: Vec::new(),
        }
    }
}

impl<L: Label> EdgeListGraph<L> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, source: &L, target: &L) -> Option<usize> {
        self.edges.iter().position(|e| e.connects(source, target))
    }
}

impl<L: Label> Graph<L> for EdgeListGraph<L> {
    fn add(&mut self, vertex: L) -> Result<bool, Error> {
        validate(&vertex)?;

        if self.vertices.contains(&vertex) {
            return Ok(false);
        }

        trace!("adding vertex {vertex:?}");
        self.vertices.insert(vertex);
        assert_rep(self);

        Ok(true)
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight, Error> {
        validate(&source)?;
        validate(&target)?;

        // Built before touching any state so that a rejected edge leaves the
        // graph as it was.
        let replacement = match weight {
            0 => None,
            _ => Some(Edge::new(source.clone(), target.clone(), weight)?),
        };

        let previous = match self.position(&source, &target) {
            Some(idx) => self.edges.swap_remove(idx).weight(),
            None => 0,
        };

        trace!("setting edge {source:?} → {target:?} from {previous} to {weight}");

        self.vertices.insert(source);
        self.vertices.insert(target);

        if let Some(edge) = replacement {
            self.edges.push(edge);
        }

        assert_rep(self);

        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        if !self.vertices.remove(vertex) {
            return false;
        }

        let edge_count = self.edges.len();
        self.edges.retain(|e| !e.touches(vertex));

        debug!(
            "removed vertex {vertex:?} and {} incident edges",
            edge_count - self.edges.len()
        );

        assert_rep(self);

        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.vertices.iter().cloned().collect()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.target() == target)
            .map(|e| (e.source().clone(), e.weight()))
            .collect()
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.source() == source)
            .map(|e| (e.target().clone(), e.weight()))
            .collect()
    }

    fn edges(&self) -> Vec<(L, L, Weight)> {
        self.edges.iter().map(Edge::to_triple).collect()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn contains(&self, vertex: &L) -> bool {
        self.vertices.contains(vertex)
    }
}

impl<L: Label> CheckRep for EdgeListGraph<L> {
    fn check_rep(&self) -> Result<(), RepViolation> {
        if let Some(invalid) = self.vertices.iter().find(|v| !v.is_valid()) {
            return Err(RepViolation::InvalidLabel {
                label: format!("{invalid:?}"),
            });
        }

        // Weights are positive by construction of `Edge`.
        let mut seen = FxHashSet::default();
        for edge in &self.edges {
            for endpoint in [edge.source(), edge.target()] {
                if !self.vertices.contains(endpoint) {
                    return Err(RepViolation::DanglingEndpoint {
                        source_label: format!("{:?}", edge.source()),
                        target_label: format!("{:?}", edge.target()),
                        missing: format!("{endpoint:?}"),
                    });
                }
            }

            if !seen.insert((edge.source(), edge.target())) {
                return Err(RepViolation::DuplicateEdge {
                    source_label: format!("{:?}", edge.source()),
                    target_label: format!("{:?}", edge.target()),
                });
            }
        }

        Ok(())
    }
}

impl<L: Label> fmt::Display for EdgeListGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::render(
            f,
            self.vertices.iter().cloned(),
            self.edges.iter().map(Edge::to_triple),
        )
    }
}
