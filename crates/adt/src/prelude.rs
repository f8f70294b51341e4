pub use crate::builder::GraphBuilder;

pub use crate::graph::adj_list::AdjacencyGraph;
pub use crate::graph::adj_list::Vertex;
pub use crate::graph::edge_list::Edge;
pub use crate::graph::edge_list::EdgeListGraph;
pub use crate::graph::Weight;

pub use crate::graph_ops::CopyGraphOp;
pub use crate::graph_ops::EquivalentOp;

pub use crate::invariant::CheckRep;
pub use crate::invariant::RepViolation;

pub use crate::label::Label;

pub use crate::input::*;

pub use crate::Graph;

pub use crate::Error;
