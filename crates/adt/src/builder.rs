use std::{marker::PhantomData, path::Path as StdPath, time::Instant};

use log::info;

use crate::{
    input::{EdgeList, InputCapabilities, InputPath},
    label::Label,
    Error, Graph, Weight,
};

pub struct Uninitialized;

pub struct FromEdges<L, Edges>
where
    L: Label,
    Edges: IntoIterator<Item = (L, L, Weight)>,
{
    vertices: Vec<L>,
    edges: Edges,
}

pub struct FromInput<L, P, Format>
where
    L: Label,
    P: AsRef<StdPath>,
    Format: InputCapabilities<L>,
    Format::GraphInput: TryFrom<InputPath<P>>,
{
    _label: PhantomData<L>,
    _path: PhantomData<P>,
    _format: PhantomData<Format>,
}

pub struct FromPath<L, P, Format>
where
    L: Label,
    P: AsRef<StdPath>,
    Format: InputCapabilities<L>,
    Format::GraphInput: TryFrom<InputPath<P>>,
{
    path: P,
    _label: PhantomData<L>,
    _format: PhantomData<Format>,
}

/// Edges used when only vertices have been given to the builder.
pub type NoEdges<L> = std::iter::Empty<(L, L, Weight)>;

/// A builder to create graphs in a type-safe way.
///
/// The builder implementation uses different states to allow staged building of
/// graphs. Each individual state enables stage-specific methods on the builder.
/// Every graph implementing [`Graph`] and [`Default`] can be built.
///
/// # Examples
///
/// Create a graph from a vec of weighted edges:
///
/// ```
/// use graph_adt::prelude::*;
///
/// let graph: AdjacencyGraph<&str> = GraphBuilder::new()
///     .edges(vec![("a", "b", 1), ("b", "c", 2), ("c", "a", 3)])
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.vertex_count(), 3);
/// ```
///
/// Vertices without edges are declared separately:
///
/// ```
/// use graph_adt::prelude::*;
///
/// let graph: EdgeListGraph<&str> = GraphBuilder::new()
///     .vertices(["x", "y"])
///     .edges(vec![("a", "b", 1)])
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.edge_count(), 1);
/// ```
pub struct GraphBuilder<State> {
    state: State,
}

impl Default for GraphBuilder<Uninitialized> {
    fn default() -> Self {
        GraphBuilder::new()
    }
}

impl GraphBuilder<Uninitialized> {
    /// Creates a new builder
    pub fn new() -> Self {
        Self {
            state: Uninitialized,
        }
    }

    /// Declares vertices that are added to the graph before any edge.
    pub fn vertices<L, I>(self, vertices: I) -> GraphBuilder<FromEdges<L, NoEdges<L>>>
    where
        L: Label,
        I: IntoIterator<Item = L>,
    {
        GraphBuilder {
            state: FromEdges {
                vertices: vertices.into_iter().collect(),
                edges: std::iter::empty(),
            },
        }
    }

    /// Create a graph from the given `(source, target, weight)` tuples.
    ///
    /// The tuples are applied in order using [`Graph::set`], so a later tuple
    /// overwrites an earlier one for the same pair and a weight of `0` removes
    /// an edge declared before.
    ///
    /// # Example
    ///
    /// ```
    /// use graph_adt::prelude::*;
    ///
    /// let graph: EdgeListGraph<u32> = GraphBuilder::new()
    ///     .edges(vec![(0, 1, 4), (0, 2, 1), (0, 1, 2), (0, 2, 0)])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edges(), vec![(0, 1, 2)]);
    /// ```
    pub fn edges<L, Edges>(self, edges: Edges) -> GraphBuilder<FromEdges<L, Edges>>
    where
        L: Label,
        Edges: IntoIterator<Item = (L, L, Weight)>,
    {
        GraphBuilder {
            state: FromEdges {
                vertices: Vec::new(),
                edges,
            },
        }
    }

    /// Creates a graph by reading it from the given file format.
    ///
    /// # Example
    ///
    /// ```
    /// use std::path::PathBuf;
    ///
    /// use graph_adt::prelude::*;
    ///
    /// let path = [env!("CARGO_MANIFEST_DIR"), "resources", "example.wel"]
    ///     .iter()
    ///     .collect::<PathBuf>();
    ///
    /// let graph: EdgeListGraph<String> = GraphBuilder::new()
    ///     .file_format(EdgeListInput::default())
    ///     .path(path)
    ///     .build()
    ///     .expect("loading failed");
    ///
    /// assert_eq!(graph.vertex_count(), 5);
    /// ```
    pub fn file_format<Format, P, L>(self, _format: Format) -> GraphBuilder<FromInput<L, P, Format>>
    where
        L: Label,
        P: AsRef<StdPath>,
        Format: InputCapabilities<L>,
        Format::GraphInput: TryFrom<InputPath<P>>,
    {
        GraphBuilder {
            state: FromInput {
                _label: PhantomData,
                _path: PhantomData,
                _format: PhantomData,
            },
        }
    }
}

impl<L> GraphBuilder<FromEdges<L, NoEdges<L>>>
where
    L: Label,
{
    /// Adds the given `(source, target, weight)` tuples to the declared
    /// vertices.
    pub fn edges<Edges>(self, edges: Edges) -> GraphBuilder<FromEdges<L, Edges>>
    where
        Edges: IntoIterator<Item = (L, L, Weight)>,
    {
        GraphBuilder {
            state: FromEdges {
                vertices: self.state.vertices,
                edges,
            },
        }
    }
}

impl<L, Edges> GraphBuilder<FromEdges<L, Edges>>
where
    L: Label,
    Edges: IntoIterator<Item = (L, L, Weight)>,
{
    /// Build the graph from the given vertices and edges.
    ///
    /// Fails if a label is invalid.
    pub fn build<G>(self) -> Result<G, Error>
    where
        G: Graph<L> + Default,
    {
        let edge_list = EdgeList::new(self.state.vertices, self.state.edges.into_iter().collect());
        build(edge_list)
    }
}

impl<L, P, Format> GraphBuilder<FromInput<L, P, Format>>
where
    L: Label,
    P: AsRef<StdPath>,
    Format: InputCapabilities<L>,
    Format::GraphInput: TryFrom<InputPath<P>>,
{
    /// Set the location where the graph is stored.
    pub fn path(self, path: P) -> GraphBuilder<FromPath<L, P, Format>> {
        GraphBuilder {
            state: FromPath {
                path,
                _label: PhantomData,
                _format: PhantomData,
            },
        }
    }
}

impl<L, P, Format> GraphBuilder<FromPath<L, P, Format>>
where
    L: Label,
    P: AsRef<StdPath>,
    Format: InputCapabilities<L>,
    Format::GraphInput: TryFrom<InputPath<P>>,
    Error: From<<Format::GraphInput as TryFrom<InputPath<P>>>::Error>,
{
    /// Build the graph from the given input format and path.
    pub fn build<G>(self) -> Result<G, Error>
    where
        G: Graph<L> + Default,
    {
        let input = Format::GraphInput::try_from(InputPath(self.state.path))?;
        build(input.into())
    }
}

fn build<L, G>(edge_list: EdgeList<L>) -> Result<G, Error>
where
    L: Label,
    G: Graph<L> + Default,
{
    let start = Instant::now();
    let graph: G = edge_list.into_graph()?;

    info!(
        "Created graph (vertex_count = {}, edge_count = {}) in {:?}",
        graph.vertex_count(),
        graph.edge_count(),
        start.elapsed()
    );

    Ok(graph)
}
