use std::{fs::File, marker::PhantomData, path::Path, time::Instant};

use log::info;

use crate::{label::Label, Error, Graph, Weight};

use super::{parse_integer, InputCapabilities, InputPath, ParseLabel};

/// Reads a graph from a file that contains one entry per line.
///
/// An entry is either a single vertex label, which declares a vertex without
/// edges, or a source label, a target label and a positive weight, which
/// declares an edge. Tokens are separated by ASCII whitespace. Empty lines and
/// lines starting with `#` are skipped.
///
/// If the same edge is declared more than once, the last declaration wins.
///
/// # Example
///
/// ```ignore
/// > cat my_graph.wel
/// # source target weight
/// a b 5
/// a c 3
/// c a 7
/// d
/// ```
pub struct EdgeListInput<L: Label> {
    _label: PhantomData<L>,
}

impl<L: Label> Default for EdgeListInput<L> {
    fn default() -> Self {
        Self {
            _label: PhantomData,
        }
    }
}

impl<L: ParseLabel> InputCapabilities<L> for EdgeListInput<L> {
    type GraphInput = EdgeList<L>;
}

/// Vertices and weighted edges in the order they were declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeList<L> {
    vertices: Vec<L>,
    edges: Vec<(L, L, Weight)>,
}

impl<L: Label> EdgeList<L> {
    pub fn new(vertices: Vec<L>, edges: Vec<(L, L, Weight)>) -> Self {
        Self { vertices, edges }
    }

    pub fn vertices(&self) -> &[L] {
        &self.vertices
    }

    pub fn edges(&self) -> &[(L, L, Weight)] {
        &self.edges
    }

    /// Replays the declarations on an empty graph: first every vertex is
    /// added, then every edge is set.
    pub fn into_graph<G>(self) -> Result<G, Error>
    where
        G: Graph<L> + Default,
    {
        let mut graph = G::default();

        for vertex in self.vertices {
            graph.add(vertex)?;
        }

        for (source, target, weight) in self.edges {
            graph.set(source, target, weight)?;
        }

        Ok(graph)
    }
}

impl<L, P> TryFrom<InputPath<P>> for EdgeList<L>
where
    P: AsRef<Path>,
    L: ParseLabel,
{
    type Error = Error;

    fn try_from(path: InputPath<P>) -> Result<Self, Self::Error> {
        let file = File::open(path.0.as_ref())?;

        // Mapping an empty file is an error on some platforms.
        if file.metadata()?.len() == 0 {
            return Ok(EdgeList::new(Vec::new(), Vec::new()));
        }

        let mmap = unsafe { memmap2::MmapOptions::new().populate().map(&file)? };
        EdgeList::try_from(mmap.as_ref())
    }
}

impl<L> TryFrom<&[u8]> for EdgeList<L>
where
    L: ParseLabel,
{
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let start = Instant::now();

        let mut vertices = Vec::new();
        let mut edges = Vec::new();

        for (idx, line) in bytes.split(|b| *b == b'\n').enumerate() {
            let line_number = idx + 1;
            let line = line.strip_suffix(b"\r").unwrap_or(line);

            let mut tokens = line
                .split(u8::is_ascii_whitespace)
                .filter(|token| !token.is_empty());

            match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
                (None, ..) => {}
                (Some(first), ..) if first.starts_with(b"#") => {}
                (Some(vertex), None, ..) => vertices.push(label(vertex, line_number)?),
                (Some(source), Some(target), Some(weight), None) => edges.push((
                    label(source, line_number)?,
                    label(target, line_number)?,
                    positive_weight(weight, line_number)?,
                )),
                (Some(_), Some(_), None, _) => {
                    return Err(invalid(line_number, "missing edge weight"));
                }
                (Some(_), Some(_), Some(_), Some(_)) => {
                    return Err(invalid(line_number, "expected at most three tokens"));
                }
            }
        }

        info!(
            "Read {} vertices and {} edges in {:?}",
            vertices.len(),
            edges.len(),
            start.elapsed()
        );

        Ok(EdgeList::new(vertices, edges))
    }
}

fn label<L: ParseLabel>(token: &[u8], line: usize) -> Result<L, Error> {
    L::parse(token).ok_or_else(|| {
        invalid(
            line,
            format!("invalid vertex label {:?}", String::from_utf8_lossy(token)),
        )
    })
}

fn positive_weight(token: &[u8], line: usize) -> Result<Weight, Error> {
    match parse_integer::<Weight>(token) {
        Some(0) => Err(invalid(line, "edge weight must be positive")),
        Some(weight) => Ok(weight),
        None => Err(invalid(
            line,
            format!("invalid edge weight {:?}", String::from_utf8_lossy(token)),
        )),
    }
}

fn invalid(line: usize, reason: impl Into<String>) -> Error {
    Error::InvalidInput {
        line,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::input::InputPath;
    use crate::{AdjacencyGraph, EdgeListGraph};

    use super::*;

    fn resource(name: &str) -> PathBuf {
        [env!("CARGO_MANIFEST_DIR"), "resources", name]
            .iter()
            .collect::<PathBuf>()
    }

    #[test]
    fn edge_list_from_linux_file() {
        let expected = EdgeList::new(
            vec![String::from("e")],
            vec![
                (String::from("a"), String::from("b"), 5),
                (String::from("a"), String::from("c"), 3),
                (String::from("b"), String::from("c"), 2),
                (String::from("c"), String::from("a"), 7),
                (String::from("d"), String::from("d"), 1),
            ],
        );

        let edge_list = EdgeList::<String>::try_from(InputPath(resource("example.wel"))).unwrap();

        assert_eq!(expected, edge_list);
    }

    #[test]
    fn edge_list_from_windows_file() {
        let edge_list = EdgeList::<u32>::try_from(InputPath(resource("windows.wel"))).unwrap();

        assert_eq!(edge_list.vertices(), &[3]);
        assert_eq!(edge_list.edges(), &[(0, 1, 4), (1, 2, 5), (2, 0, 6)]);
    }

    #[test]
    fn edge_list_from_empty_file() {
        let edge_list = EdgeList::<u32>::try_from(InputPath(resource("empty.wel"))).unwrap();

        assert!(edge_list.vertices().is_empty());
        assert!(edge_list.edges().is_empty());
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            EdgeList::<u32>::try_from(InputPath(resource("missing.wel"))),
            Err(Error::IoError { .. })
        ));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let input = b"# header\n\n   \n0 1 2\n# 1 2 3\n";
        let edge_list = EdgeList::<u32>::try_from(&input[..]).unwrap();

        assert!(edge_list.vertices().is_empty());
        assert_eq!(edge_list.edges(), &[(0, 1, 2)]);
    }

    #[test]
    fn zero_weight_is_rejected() {
        let input = b"0 1 2\n1 2 0\n";
        let err = EdgeList::<u32>::try_from(&input[..]).unwrap_err();

        assert!(matches!(err, Error::InvalidInput { line: 2, .. }));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let input = b"a b -3\n";
        let err = EdgeList::<String>::try_from(&input[..]).unwrap_err();

        assert!(matches!(err, Error::InvalidInput { line: 1, .. }));
    }

    #[test]
    fn missing_weight_is_rejected() {
        let input = b"a b\n";
        let err = EdgeList::<String>::try_from(&input[..]).unwrap_err();

        assert!(matches!(err, Error::InvalidInput { line: 1, .. }));
    }

    #[test]
    fn too_many_tokens_are_rejected() {
        let input = b"a b 1\n\na b 1 2\n";
        let err = EdgeList::<String>::try_from(&input[..]).unwrap_err();

        assert!(matches!(err, Error::InvalidInput { line: 3, .. }));
    }

    #[test]
    fn invalid_label_is_rejected() {
        let input = b"0 x 1\n";
        let err = EdgeList::<u32>::try_from(&input[..]).unwrap_err();

        assert!(matches!(err, Error::InvalidInput { line: 1, .. }));
    }

    #[test]
    fn later_edges_overwrite_earlier_ones() {
        let input = b"a b 1\na b 9\n";
        let graph: EdgeListGraph<String> = EdgeList::try_from(&input[..])
            .unwrap()
            .into_graph()
            .unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.targets(&String::from("a"))[&String::from("b")], 9);
    }

    #[test]
    fn into_graph() {
        let edge_list = EdgeList::new(vec![9], vec![(0, 1, 2), (1, 0, 3)]);
        let graph: AdjacencyGraph<u32> = edge_list.into_graph().unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.sources(&0)[&1], 3);
    }
}
