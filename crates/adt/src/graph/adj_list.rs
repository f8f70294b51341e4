use std::collections::{HashMap, HashSet};
use std::fmt;
use std::num::NonZeroU32;

use fxhash::{FxHashMap, FxHashSet};
use log::{debug, trace};

use crate::invariant::{assert_rep, CheckRep, RepViolation};
use crate::label::Label;
use crate::{validate, Error, Graph, Weight};

/// A vertex together with its outgoing and incoming edges.
///
/// The record only ever changes through [`AdjacencyGraph`], which keeps the
/// outgoing map of every vertex consistent with the incoming maps of its
/// targets.
#[derive(Clone, Debug)]
pub struct Vertex<L> {
    label: L,
    outgoing: FxHashMap<L, NonZeroU32>,
    incoming: FxHashMap<L, NonZeroU32>,
}

impl<L: Label> Vertex<L> {
    /// Creates a vertex without any edges.
    ///
    /// Fails if `label` is not a valid vertex label.
    pub fn new(label: L) -> Result<Self, Error> {
        validate(&label)?;

        Ok(Self {
            label,
            outgoing: FxHashMap::default(),
            incoming: FxHashMap::default(),
        })
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    /// Returns a copy of the outgoing edges, keyed by target.
    pub fn outgoing(&self) -> HashMap<L, Weight> {
        snapshot(&self.outgoing)
    }

    /// Returns a copy of the incoming edges, keyed by source.
    pub fn incoming(&self) -> HashMap<L, Weight> {
        snapshot(&self.incoming)
    }

    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    fn put_target(&mut self, target: L, weight: NonZeroU32) -> Weight {
        self.outgoing.insert(target, weight).map_or(0, NonZeroU32::get)
    }

    fn put_source(&mut self, source: L, weight: NonZeroU32) -> Weight {
        self.incoming.insert(source, weight).map_or(0, NonZeroU32::get)
    }

    fn take_target(&mut self, target: &L) -> Weight {
        self.outgoing.remove(target).map_or(0, NonZeroU32::get)
    }

    fn take_source(&mut self, source: &L) -> Weight {
        self.incoming.remove(source).map_or(0, NonZeroU32::get)
    }
}

impl<L: Label> fmt::Display for Vertex<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut targets = self.outgoing.iter().collect::<Vec<_>>();
        targets.sort_unstable_by(|(t1, _), (t2, _)| t1.cmp(t2));

        write!(f, "{}: [", self.label)?;
        for (i, (target, weight)) in targets.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "→{target}({weight})")?;
        }
        write!(f, "]")
    }
}

fn snapshot<L: Label>(edges: &FxHashMap<L, NonZeroU32>) -> HashMap<L, Weight> {
    edges.iter().map(|(l, w)| (l.clone(), w.get())).collect()
}

/// A graph stored as a list of vertex records.
///
/// Each record carries the outgoing and incoming edges of its vertex, so that
/// `sources` and `targets` only need to copy the edges of a single vertex. An
/// index from label to record position makes locating a record `O(1)`.
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<L> {
    records: Vec<Vertex<L>>,
    index: FxHashMap<L, usize>,
}

impl<L: Label> Default for AdjacencyGraph<L> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<L: Label> AdjacencyGraph<L> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record of `label`.
    pub fn vertex(&self, label: &L) -> Option<&Vertex<L>> {
        self.index.get(label).map(|&idx| &self.records[idx])
    }

    fn push(&mut self, vertex: Vertex<L>) {
        self.index.insert(vertex.label.clone(), self.records.len());
        self.records.push(vertex);
    }

    /// Sets the edge `records[source] → records[target]` to `weight` on both of
    /// its sides, or removes it from both sides if `weight` is `None`.
    ///
    /// This is the only place where edges are written.
    fn link(&mut self, source: usize, target: usize, weight: Option<NonZeroU32>) -> Weight {
        let source_label = self.records[source].label.clone();
        let target_label = self.records[target].label.clone();

        match weight {
            Some(weight) => {
                let previous = self.records[source].put_target(target_label, weight);
                self.records[target].put_source(source_label, weight);
                previous
            }
            None => {
                let previous = self.records[source].take_target(&target_label);
                self.records[target].take_source(&source_label);
                previous
            }
        }
    }

    /// Removes every edge that `removed` shares with a remaining vertex.
    fn unlink(&mut self, removed: &Vertex<L>) {
        for target in removed.outgoing.keys() {
            if let Some(&idx) = self.index.get(target) {
                self.records[idx].take_source(&removed.label);
            }
        }
        for source in removed.incoming.keys() {
            if let Some(&idx) = self.index.get(source) {
                self.records[idx].take_target(&removed.label);
            }
        }
    }
}

impl<L: Label> Graph<L> for AdjacencyGraph<L> {
    fn add(&mut self, vertex: L) -> Result<bool, Error> {
        if self.index.contains_key(&vertex) {
            return Ok(false);
        }

        let vertex = Vertex::new(vertex)?;
        trace!("adding vertex {:?}", vertex.label);
        self.push(vertex);
        assert_rep(self);

        Ok(true)
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight, Error> {
        validate(&source)?;
        validate(&target)?;

        // Records for missing endpoints are created up front, so that no
        // failure can happen after the first write.
        let new_source = match self.index.contains_key(&source) {
            true => None,
            false => Some(Vertex::new(source.clone())?),
        };
        let new_target = match self.index.contains_key(&target) || source == target {
            true => None,
            false => Some(Vertex::new(target.clone())?),
        };

        trace!("setting edge {source:?} → {target:?} to {weight}");

        for vertex in [new_source, new_target].into_iter().flatten() {
            self.push(vertex);
        }

        let (s, t) = (self.index[&source], self.index[&target]);
        let previous = self.link(s, t, NonZeroU32::new(weight));

        assert_rep(self);

        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        let Some(idx) = self.index.remove(vertex) else {
            return false;
        };

        let removed = self.records.swap_remove(idx);
        if let Some(moved) = self.records.get(idx) {
            self.index.insert(moved.label.clone(), idx);
        }

        self.unlink(&removed);

        debug!(
            "removed vertex {vertex:?} with {} outgoing and {} incoming edges",
            removed.out_degree(),
            removed.in_degree()
        );

        assert_rep(self);

        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.records.iter().map(|v| v.label.clone()).collect()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.vertex(target).map(Vertex::incoming).unwrap_or_default()
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.vertex(source).map(Vertex::outgoing).unwrap_or_default()
    }

    fn edges(&self) -> Vec<(L, L, Weight)> {
        self.records
            .iter()
            .flat_map(|v| {
                v.outgoing
                    .iter()
                    .map(|(t, w)| (v.label.clone(), t.clone(), w.get()))
            })
            .collect()
    }

    fn vertex_count(&self) -> usize {
        self.records.len()
    }

    fn edge_count(&self) -> usize {
        self.records.iter().map(Vertex::out_degree).sum()
    }

    fn contains(&self, vertex: &L) -> bool {
        self.index.contains_key(vertex)
    }
}

impl<L: Label> CheckRep for AdjacencyGraph<L> {
    fn check_rep(&self) -> Result<(), RepViolation> {
        let mut labels = FxHashSet::default();
        for vertex in &self.records {
            if !vertex.label.is_valid() {
                return Err(RepViolation::InvalidLabel {
                    label: format!("{:?}", vertex.label),
                });
            }
            if !labels.insert(&vertex.label) {
                return Err(RepViolation::DuplicateVertex {
                    label: format!("{:?}", vertex.label),
                });
            }
        }

        if self.index.len() != self.records.len() {
            return Err(RepViolation::IndexSize {
                expected: self.records.len(),
                actual: self.index.len(),
            });
        }

        for (label, &position) in &self.index {
            match self.records.get(position) {
                Some(vertex) if &vertex.label == label => {}
                found => {
                    return Err(RepViolation::IndexMismatch {
                        label: format!("{label:?}"),
                        position,
                        found: found.map_or_else(
                            || String::from("missing"),
                            |v| format!("{:?}", v.label),
                        ),
                    })
                }
            }
        }

        // Weights are positive by construction of `NonZeroU32`.
        for vertex in &self.records {
            for (target, weight) in &vertex.outgoing {
                let mirror = self.mirror(vertex, target, |other| &other.incoming)?;
                if mirror != Some(*weight) {
                    return Err(RepViolation::AsymmetricAdjacency {
                        source_label: format!("{:?}", vertex.label),
                        target_label: format!("{target:?}"),
                        outgoing: Some(weight.get()),
                        incoming: mirror.map(NonZeroU32::get),
                    });
                }
            }
            for (source, weight) in &vertex.incoming {
                let mirror = self.mirror(vertex, source, |other| &other.outgoing)?;
                if mirror != Some(*weight) {
                    return Err(RepViolation::AsymmetricAdjacency {
                        source_label: format!("{source:?}"),
                        target_label: format!("{:?}", vertex.label),
                        outgoing: mirror.map(NonZeroU32::get),
                        incoming: Some(weight.get()),
                    });
                }
            }
        }

        Ok(())
    }
}

impl<L: Label> AdjacencyGraph<L> {
    /// Looks up the weight that `other`'s record stores for `vertex` in the
    /// map selected by `side`.
    fn mirror<F>(
        &self,
        vertex: &Vertex<L>,
        other: &L,
        side: F,
    ) -> Result<Option<NonZeroU32>, RepViolation>
    where
        F: Fn(&Vertex<L>) -> &FxHashMap<L, NonZeroU32>,
    {
        let other = self
            .vertex(other)
            .ok_or_else(|| RepViolation::DanglingReference {
                label: format!("{:?}", vertex.label),
                missing: format!("{other:?}"),
            })?;

        Ok(side(other).get(&vertex.label).copied())
    }
}

impl<L: Label> fmt::Display for AdjacencyGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::render(
            f,
            self.records.iter().map(|v| v.label.clone()),
            self.edges(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tap::prelude::*;

    #[test]
    fn vertex_rejects_empty_label() {
        assert!(matches!(
            Vertex::new(String::new()),
            Err(Error::InvalidLabel { .. })
        ));
    }

    #[test]
    fn new_vertex_has_no_edges() {
        let vertex = Vertex::new("A").unwrap();

        assert_eq!(vertex.label(), &"A");
        assert_eq!(vertex.out_degree(), 0);
        assert_eq!(vertex.in_degree(), 0);
        assert!(vertex.outgoing().is_empty());
        assert!(vertex.incoming().is_empty());
    }

    #[test]
    fn vertex_half_updates_return_previous_weight() {
        let mut vertex = Vertex::new("A").unwrap();
        let five = NonZeroU32::new(5).unwrap();
        let six = NonZeroU32::new(6).unwrap();

        assert_eq!(vertex.put_target("B", five), 0);
        assert_eq!(vertex.put_target("B", six), 5);
        assert_eq!(vertex.take_target(&"B"), 6);
        assert_eq!(vertex.take_target(&"B"), 0);
        assert_eq!(vertex.put_source("C", five), 0);
        assert_eq!(vertex.take_source(&"C"), 5);
    }

    #[test]
    fn vertex_display() {
        let mut g = AdjacencyGraph::new();
        g.set("A", "C", 3).unwrap();
        g.set("A", "B", 5).unwrap();

        assert_eq!(g.vertex(&"A").unwrap().to_string(), "A: [→B(5), →C(3)]");
        assert_eq!(g.vertex(&"B").unwrap().to_string(), "B: []");
    }

    #[test]
    fn set_updates_both_sides() {
        let mut g = AdjacencyGraph::new();
        g.set("A", "B", 4).unwrap();

        assert_eq!(g.vertex(&"A").unwrap().outgoing(), HashMap::from([("B", 4)]));
        assert_eq!(g.vertex(&"B").unwrap().incoming(), HashMap::from([("A", 4)]));

        g.set("A", "B", 0).unwrap();

        assert!(g.vertex(&"A").unwrap().outgoing().is_empty());
        assert!(g.vertex(&"B").unwrap().incoming().is_empty());
    }

    #[test]
    fn self_loop_is_stored_in_a_single_record() {
        let mut g = AdjacencyGraph::new();
        g.set("A", "A", 3).unwrap();

        assert_eq!(g.records.len(), 1);
        assert_eq!(g.vertex(&"A").unwrap().outgoing(), HashMap::from([("A", 3)]));
        assert_eq!(g.vertex(&"A").unwrap().incoming(), HashMap::from([("A", 3)]));

        assert!(g.remove(&"A"));
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn remove_keeps_index_consistent() {
        let mut g = AdjacencyGraph::new();
        for v in ["A", "B", "C", "D"] {
            g.add(v).unwrap();
        }
        g.set("D", "B", 2).unwrap();

        // "D" is moved into the slot of "A".
        assert!(g.remove(&"A"));

        assert_eq!(g.index.get(&"D"), Some(&0));
        assert_eq!(g.targets(&"D"), HashMap::from([("B", 2)]));
        assert!(g.check_rep().is_ok());
    }

    #[test]
    fn remove_only_touches_neighbors() {
        let mut g = AdjacencyGraph::new();
        g.set("A", "B", 1).unwrap();
        g.set("C", "A", 2).unwrap();
        g.set("C", "D", 3).unwrap();

        assert!(g.remove(&"A"));

        assert!(g.vertex(&"B").unwrap().incoming().is_empty());
        assert_eq!(
            g.vertex(&"C")
                .unwrap()
                .outgoing()
                .into_keys()
                .collect::<Vec<_>>(),
            vec!["D"]
        );
    }

    #[test]
    fn rejected_set_leaves_graph_unchanged() {
        let mut g = AdjacencyGraph::<String>::new();
        g.add("A".to_string()).unwrap();

        assert!(g.set("B".to_string(), String::new(), 1).is_err());
        assert!(g.set(String::new(), "B".to_string(), 1).is_err());

        assert_eq!(g.vertices(), HashSet::from(["A".to_string()]));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn check_rep_detects_asymmetric_edges() {
        let mut g = AdjacencyGraph::new();
        g.set("A", "B", 1).unwrap();
        let b = g.index[&"B"];
        g.records[b].take_source(&"A");

        assert_eq!(
            g.check_rep(),
            Err(RepViolation::AsymmetricAdjacency {
                source_label: "\"A\"".to_string(),
                target_label: "\"B\"".to_string(),
                outgoing: Some(1),
                incoming: None,
            })
        );
    }

    #[test]
    fn check_rep_detects_dangling_references() {
        let mut g = AdjacencyGraph::new();
        g.add("A").unwrap();
        let a = g.index[&"A"];
        g.records[a].put_target("Z", NonZeroU32::new(1).unwrap());

        assert!(matches!(
            g.check_rep(),
            Err(RepViolation::DanglingReference { .. })
        ));
    }

    #[test]
    fn check_rep_detects_duplicate_records() {
        let mut g = AdjacencyGraph::new();
        g.add("A").unwrap();
        g.records.push(Vertex::new("A").unwrap());

        assert!(matches!(
            g.check_rep(),
            Err(RepViolation::DuplicateVertex { .. })
        ));
    }

    #[test]
    fn check_rep_detects_stale_index() {
        let mut g = AdjacencyGraph::new();
        g.add("A").unwrap();
        g.add("B").unwrap();
        g.index.insert("A", 1);

        assert!(matches!(
            g.check_rep(),
            Err(RepViolation::IndexMismatch { position: 1, .. })
        ));
    }

    #[test]
    fn edges_snapshot() {
        let mut g = AdjacencyGraph::new();
        g.set("A", "B", 1).unwrap();
        g.set("B", "C", 2).unwrap();
        g.set("C", "A", 3).unwrap();

        assert_eq!(
            g.edges().tap_mut(|e| e.sort_unstable()),
            vec![("A", "B", 1), ("B", "C", 2), ("C", "A", 3)]
        );
    }
}
