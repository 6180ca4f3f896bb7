//! Truss decomposition by minimum support peeling.
//!
//! The algorithm mirrors the core decomposition, on edges keyed by their triangle support instead of vertices
//! keyed by their degree. An edge of support s is in a (s+2)-truss at most.
//!
//! When an edge (u,v) is peeled, the only triangles destroyed are (u,v,w) for w a common neighbour of u and v
//! **in the working graph**, so only those decrement the supports of (u,w) and (v,w).
//! Edges already peeled are absent from the working adjacency and cannot be counted twice.
//!
//! Convention: every edge belongs at least to the 2-truss, even when it is in no triangle.
//! So a triangle-free graph gets truss number 2 on all of its edges.

use std::time::SystemTime;

use cpu_time::ProcessTime;

use indexmap::IndexMap;

use crate::error::{DecompError, Result};
use crate::structure::bucket::BucketQueue;
use crate::structure::graph::{Edge, GraphStore, Vertex};
use crate::structure::triangles::edge_supports;

use super::report::Report;

/// truss number of an edge in no triangle
pub const TRUSS_BASE: u32 = 2;

/// computes the truss number of every edge. The graph is not modified.
pub fn truss_decompose(graph: &GraphStore) -> Result<Report> {
    //
    log::info!(
        "truss_decompose nb_vertices : {}, nb_edges : {}",
        graph.nb_vertices(),
        graph.nb_edges()
    );
    let cpu_start = ProcessTime::now();
    let sys_start = SystemTime::now();
    //
    let supports = edge_supports(graph);
    let max_support = supports.values().copied().max().unwrap_or(0) as usize;
    let mut queue = BucketQueue::<Edge>::with_max_key(max_support, supports.len());
    for (e, s) in &supports {
        queue.insert(*e, *s as usize);
    }
    //
    let mut working = graph.adjacency().clone();
    let mut truss = IndexMap::<Edge, u32>::with_capacity(supports.len());
    let mut current = TRUSS_BASE;
    let mut common = Vec::<Vertex>::new();
    while let Some((edge, support)) = queue.pop_min() {
        let level = support as u32 + TRUSS_BASE;
        if level > current {
            log::debug!("truss_decompose reached level {}", level);
            current = level;
        }
        truss.insert(edge, current);
        //
        let (u, v) = (edge.source(), edge.target());
        common.clear();
        if let (Some(nu), Some(nv)) = (working.get(&u), working.get(&v)) {
            let (small, large) = if nu.len() <= nv.len() { (nu, nv) } else { (nv, nu) };
            common.extend(small.iter().copied().filter(|w| large.contains(w)));
        }
        log::trace!("peeling edge {}, support {}, common : {:?}", edge, support, common);
        for &w in &common {
            for side in [Edge::canonical(u, w), Edge::canonical(v, w)] {
                if queue.decrement(&side).is_none() {
                    log::error!("truss_decompose support of {} corrupted while peeling {}", side, edge);
                    return Err(DecompError::IncompleteDecomposition {
                        kind: "truss",
                        assigned: truss.len(),
                        expected: graph.nb_edges(),
                    });
                }
            }
        }
        if let Some(nu) = working.get_mut(&u) {
            nu.swap_remove(&v);
        }
        if let Some(nv) = working.get_mut(&v) {
            nv.swap_remove(&u);
        }
    } // end of peeling loop
    //
    log::info!(
        "truss_decompose max truss : {}, sys time(s) {:.2e} cpu time(s) {:.2e}",
        if truss.is_empty() { 0 } else { current },
        sys_start.elapsed().map(|d| d.as_secs_f64()).unwrap_or(0.),
        cpu_start.elapsed().as_secs_f64()
    );
    Report::from_truss(graph, truss)
} // end of truss_decompose

//=========================================================================

// end of mod tests
