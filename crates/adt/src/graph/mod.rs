pub mod adj_list;
pub mod edge_list;

use std::fmt;

use crate::label::Label;

/// The weight of an edge.
///
/// Stored weights are always positive. A weight of zero passed to
/// [`crate::Graph::set`] means "no edge".
pub type Weight = u32;

/// Renders the human readable description shared by all representations.
///
/// Vertices and edges are sorted so that equal graphs render equally,
/// regardless of their representation.
pub(crate) fn render<L, V, E>(f: &mut fmt::Formatter<'_>, vertices: V, edges: E) -> fmt::Result
where
    L: Label,
    V: IntoIterator<Item = L>,
    E: IntoIterator<Item = (L, L, Weight)>,
{
    let mut vertices = vertices.into_iter().collect::<Vec<_>>();
    vertices.sort_unstable();

    let mut edges = edges.into_iter().collect::<Vec<_>>();
    edges.sort_unstable_by(|(s1, t1, _), (s2, t2, _)| s1.cmp(s2).then_with(|| t1.cmp(t2)));

    writeln!(
        f,
        "Graph with {} vertices and {} edges:",
        vertices.len(),
        edges.len()
    )?;

    write!(f, "Vertices: [")?;
    for (i, vertex) in vertices.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{vertex}")?;
    }
    writeln!(f, "]")?;

    writeln!(f, "Edges:")?;
    for (source, target, weight) in edges {
        writeln!(f, "  {source} → {target} ({weight})")?;
    }

    Ok(())
}
