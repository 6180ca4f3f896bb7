//! Simple undirected graph stored as adjacency sets.
//!
//! Vertices are `u32` handles, edges are canonicalized pairs (smaller id first).
//! The store rejects self-loops and silently ignores parallel edges, so it always holds a simple graph.
//! Neighbour sets are [IndexSet] so membership tests needed by triangle intersection are O(1) on average
//! and iteration order is deterministic (insertion order).

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use petgraph::graph::{Graph, IndexType};
use petgraph::visit::EdgeRef;
use petgraph::Undirected;

use crate::error::{DecompError, Result};

/// vertex handle
pub type Vertex = u32;

/// An undirected edge. The smaller vertex is always stored first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(Vertex, Vertex);

impl Edge {
    /// canonical edge between u and v, fails on a self-loop
    pub fn new(u: Vertex, v: Vertex) -> Result<Self> {
        if u == v {
            return Err(DecompError::InvalidEdge(u, v));
        }
        Ok(Edge::canonical(u, v))
    }

    // caller guarantees u != v
    pub(crate) fn canonical(u: Vertex, v: Vertex) -> Self {
        if u < v {
            Edge(u, v)
        } else {
            Edge(v, u)
        }
    }

    /// smaller endpoint
    pub fn source(&self) -> Vertex {
        self.0
    }

    /// larger endpoint
    pub fn target(&self) -> Vertex {
        self.1
    }

    /// the endpoint opposite to v, None if v is not an endpoint
    pub fn other(&self, v: Vertex) -> Option<Vertex> {
        if v == self.0 {
            Some(self.1)
        } else if v == self.1 {
            Some(self.0)
        } else {
            None
        }
    }
} // end of impl Edge

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// The graph store. Built once, then only read by decomposers which work on their own copy of the adjacency.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphStore {
    adjacency: IndexMap<Vertex, IndexSet<Vertex>>,
    nb_edges: usize,
}

impl GraphStore {
    pub fn new() -> Self {
        GraphStore::default()
    }

    /// preallocate for nb_vertices vertices
    pub fn with_capacity(nb_vertices: usize) -> Self {
        GraphStore {
            adjacency: IndexMap::with_capacity(nb_vertices),
            nb_edges: 0,
        }
    }

    /// inserts an isolated vertex. Returns true if the vertex was not already present
    pub fn add_vertex(&mut self, v: Vertex) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, IndexSet::new());
        true
    }

    /// inserts edge (u,v), adding missing endpoints.
    /// Returns true if the edge is new, false if it was already there. Fails on a self-loop.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<bool> {
        if u == v {
            log::error!("GraphStore::add_edge rejecting self-loop on {}", u);
            return Err(DecompError::InvalidEdge(u, v));
        }
        let inserted = self.adjacency.entry(u).or_insert_with(IndexSet::new).insert(v);
        self.adjacency.entry(v).or_insert_with(IndexSet::new).insert(u);
        if inserted {
            self.nb_edges += 1;
        }
        Ok(inserted)
    } // end of add_edge

    pub fn has_vertex(&self, v: Vertex) -> bool {
        self.adjacency.contains_key(&v)
    }

    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.adjacency
            .get(&u)
            .map_or(false, |neighbours| neighbours.contains(&v))
    }

    pub fn degree(&self, v: Vertex) -> Result<usize> {
        self.neighbors(v).map(|n| n.len())
    }

    pub fn neighbors(&self, v: Vertex) -> Result<&IndexSet<Vertex>> {
        self.adjacency.get(&v).ok_or(DecompError::UnknownVertex(v))
    }

    /// vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency.keys().copied()
    }

    /// each edge is returned once, in canonical form
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().flat_map(|(&u, neighbours)| {
            neighbours
                .iter()
                .filter(move |&&v| u < v)
                .map(move |&v| Edge(u, v))
        })
    }

    pub fn nb_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn nb_edges(&self) -> usize {
        self.nb_edges
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn max_degree(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).max().unwrap_or(0)
    }

    // decomposers clone this to get their working copy
    pub(crate) fn adjacency(&self) -> &IndexMap<Vertex, IndexSet<Vertex>> {
        &self.adjacency
    }

    /// subgraph induced by the given vertices. Vertices absent from the graph are ignored.
    pub fn induced_subgraph<I>(&self, vertices: I) -> GraphStore
    where
        I: IntoIterator<Item = Vertex>,
    {
        let kept: IndexSet<Vertex> = vertices
            .into_iter()
            .filter(|v| self.has_vertex(*v))
            .collect();
        let mut subgraph = GraphStore::with_capacity(kept.len());
        for &u in &kept {
            subgraph.add_vertex(u);
            for &v in &self.adjacency[&u] {
                if u < v && kept.contains(&v) {
                    // u != v holds in a simple graph
                    let _ = subgraph.add_edge(u, v);
                }
            }
        }
        subgraph
    } // end of induced_subgraph

    /// subgraph made of the given edges and their endpoints. Fails if an edge is not in the graph.
    pub fn edge_subgraph<I>(&self, edges: I) -> Result<GraphStore>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut subgraph = GraphStore::new();
        for e in edges {
            if !self.has_edge(e.source(), e.target()) {
                return Err(DecompError::UnknownEdge(e.source(), e.target()));
            }
            subgraph.add_edge(e.source(), e.target())?;
        }
        Ok(subgraph)
    } // end of edge_subgraph

    /// converts a petgraph undirected graph. Node ranks become vertex ids, isolated nodes are kept.
    /// Parallel edges collapse into one, a self-loop is an error.
    pub fn from_petgraph<N, E, Ix>(graph: &Graph<N, E, Undirected, Ix>) -> Result<Self>
    where
        Ix: IndexType,
    {
        let mut store = GraphStore::with_capacity(graph.node_count());
        for node in graph.node_indices() {
            store.add_vertex(vertex_of(node.index())?);
        }
        for edge in graph.edge_references() {
            store.add_edge(vertex_of(edge.source().index())?, vertex_of(edge.target().index())?)?;
        }
        log::debug!(
            "GraphStore::from_petgraph nb_vertices : {}, nb_edges : {}",
            store.nb_vertices(),
            store.nb_edges()
        );
        Ok(store)
    } // end of from_petgraph
} // end of impl GraphStore

/// converts a node index into a vertex id, failing instead of truncating
pub(crate) fn vertex_of(index: usize) -> Result<Vertex> {
    Vertex::try_from(index).map_err(|_| DecompError::VertexOverflow(index))
}

/// builds a graph from a list of vertex pairs. Duplicated pairs (in any orientation) give one edge.
pub fn build_graph<I>(edges: I) -> Result<GraphStore>
where
    I: IntoIterator<Item = (Vertex, Vertex)>,
{
    let mut graph = GraphStore::new();
    for (u, v) in edges {
        graph.add_edge(u, v)?;
    }
    log::debug!(
        "build_graph nb_vertices : {}, nb_edges : {}",
        graph.nb_vertices(),
        graph.nb_edges()
    );
    Ok(graph)
} // end of build_graph

//=========================================================================

// end of mod tests
