//! Result of a decomposition.
//!
//! A [Report] produced by [core_decompose](super::kcore::core_decompose) holds a core number for every vertex,
//! one produced by [truss_decompose](super::ktruss::truss_decompose) a truss number for every edge.
//! [Report::merge] puts both together.

use indexmap::IndexMap;

use crate::error::{DecompError, Result};
use crate::structure::graph::{Edge, GraphStore, Vertex};

/// Immutable decomposition result. Maxima are 0 when no value was computed (or the graph is empty).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    cores: IndexMap<Vertex, u32>,
    truss: IndexMap<Edge, u32>,
    max_core: u32,
    max_truss: u32,
}

impl Report {
    /// checks that every vertex of graph got a core number and nothing else did
    pub(crate) fn from_cores(graph: &GraphStore, cores: IndexMap<Vertex, u32>) -> Result<Self> {
        let complete =
            cores.len() == graph.nb_vertices() && graph.vertices().all(|v| cores.contains_key(&v));
        if !complete {
            log::error!(
                "Report::from_cores got {} core numbers for {} vertices",
                cores.len(),
                graph.nb_vertices()
            );
            return Err(DecompError::IncompleteDecomposition {
                kind: "core",
                assigned: cores.len(),
                expected: graph.nb_vertices(),
            });
        }
        let max_core = cores.values().copied().max().unwrap_or(0);
        Ok(Report {
            cores,
            max_core,
            ..Default::default()
        })
    } // end of from_cores

    /// checks that every edge of graph got a truss number and nothing else did
    pub(crate) fn from_truss(graph: &GraphStore, truss: IndexMap<Edge, u32>) -> Result<Self> {
        let complete = truss.len() == graph.nb_edges()
            && truss.keys().all(|e| graph.has_edge(e.source(), e.target()));
        if !complete {
            log::error!(
                "Report::from_truss got {} truss numbers for {} edges",
                truss.len(),
                graph.nb_edges()
            );
            return Err(DecompError::IncompleteDecomposition {
                kind: "truss",
                assigned: truss.len(),
                expected: graph.nb_edges(),
            });
        }
        let max_truss = truss.values().copied().max().unwrap_or(0);
        Ok(Report {
            truss,
            max_truss,
            ..Default::default()
        })
    } // end of from_truss

    /// takes core numbers from the first report and truss numbers from the second
    pub fn merge(core_report: Report, truss_report: Report) -> Report {
        Report {
            cores: core_report.cores,
            max_core: core_report.max_core,
            truss: truss_report.truss,
            max_truss: truss_report.max_truss,
        }
    }

    pub fn core_of(&self, v: Vertex) -> Result<u32> {
        self.cores.get(&v).copied().ok_or(DecompError::UnknownVertex(v))
    }

    pub fn truss_of(&self, e: &Edge) -> Result<u32> {
        self.truss
            .get(e)
            .copied()
            .ok_or(DecompError::UnknownEdge(e.source(), e.target()))
    }

    /// truss number of the edge joining u and v, in either order
    pub fn truss_of_pair(&self, u: Vertex, v: Vertex) -> Result<u32> {
        self.truss_of(&Edge::new(u, v)?)
    }

    pub fn max_core(&self) -> u32 {
        self.max_core
    }

    pub fn max_truss(&self) -> u32 {
        self.max_truss
    }

    /// (vertex, core number) in peeling order
    pub fn cores(&self) -> impl Iterator<Item = (Vertex, u32)> + '_ {
        self.cores.iter().map(|(v, c)| (*v, *c))
    }

    /// (edge, truss number) in peeling order
    pub fn trusses(&self) -> impl Iterator<Item = (Edge, u32)> + '_ {
        self.truss.iter().map(|(e, t)| (*e, *t))
    }

    pub fn nb_vertices(&self) -> usize {
        self.cores.len()
    }

    pub fn nb_edges(&self) -> usize {
        self.truss.len()
    }

    /// vertices of the k-core, i.e with core number >= k
    pub fn k_core(&self, k: u32) -> Vec<Vertex> {
        self.cores
            .iter()
            .filter(|(_, c)| **c >= k)
            .map(|(v, _)| *v)
            .collect()
    }

    /// edges of the k-truss, i.e with truss number >= k
    pub fn k_truss(&self, k: u32) -> Vec<Edge> {
        self.truss
            .iter()
            .filter(|(_, t)| **t >= k)
            .map(|(e, _)| *e)
            .collect()
    }
} // end of impl Report

//=========================================================================

// end of mod tests
