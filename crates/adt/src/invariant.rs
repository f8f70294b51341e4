use thiserror::Error;

/// A broken representation invariant.
///
/// A violation always indicates a defect inside a graph implementation, never
/// caller misuse. Labels are stored in their `Debug` form so that the type does
/// not depend on the label type of the graph that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepViolation {
    #[error("edge {source_label} → {target_label} references vertex {missing} which is not in the graph")]
    DanglingEndpoint {
        source_label: String,
        target_label: String,
        missing: String,
    },
    #[error("edge {source_label} → {target_label} is stored more than once")]
    DuplicateEdge {
        source_label: String,
        target_label: String,
    },
    #[error("vertex {label} is an invalid label")]
    InvalidLabel { label: String },
    #[error("vertex {label} is stored in more than one record")]
    DuplicateVertex { label: String },
    #[error("vertex {label} is indexed at position {position} but the record there is {found}")]
    IndexMismatch {
        label: String,
        position: usize,
        found: String,
    },
    #[error("expected {expected} indexed vertices, found {actual}")]
    IndexSize { expected: usize, actual: usize },
    #[error("vertex {label} refers to {missing} which is not in the graph")]
    DanglingReference { label: String, missing: String },
    #[error("edge {source_label} → {target_label} is recorded as {outgoing:?} outgoing but {incoming:?} incoming")]
    AsymmetricAdjacency {
        source_label: String,
        target_label: String,
        outgoing: Option<u32>,
        incoming: Option<u32>,
    },
}

/// Exposes the representation invariant of a graph as a pure function of its
/// current state.
pub trait CheckRep {
    /// Returns the first broken invariant, if any.
    fn check_rep(&self) -> Result<(), RepViolation>;
}

/// Validates the representation after a mutation.
///
/// Only evaluated when `debug_assertions` are enabled; release builds compile
/// this to nothing.
#[inline]
pub(crate) fn assert_rep<G: CheckRep>(graph: &G) {
    if cfg!(debug_assertions) {
        if let Err(violation) = graph.check_rep() {
            panic!("representation invariant violated: {violation}");
        }
    }
}
