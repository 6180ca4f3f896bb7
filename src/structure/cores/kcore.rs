//! Core decomposition by minimum degree peeling (Batagelj Zaversnik, degeneracy ordering).
//!
//! Vertices are removed one at a time by increasing current degree. A removed vertex gets as core number
//! the maximum of its current degree and the core number of the previously removed vertex,
//! so core numbers never decrease along the peeling order.

use std::time::SystemTime;

use cpu_time::ProcessTime;

use indexmap::IndexMap;

use crate::error::{DecompError, Result};
use crate::structure::bucket::BucketQueue;
use crate::structure::graph::{GraphStore, Vertex};

use super::report::Report;

/// computes the core number of every vertex. The graph is not modified.
pub fn core_decompose(graph: &GraphStore) -> Result<Report> {
    //
    log::info!(
        "core_decompose nb_vertices : {}, nb_edges : {}",
        graph.nb_vertices(),
        graph.nb_edges()
    );
    let cpu_start = ProcessTime::now();
    let sys_start = SystemTime::now();
    //
    let mut working = graph.adjacency().clone();
    let mut queue = BucketQueue::<Vertex>::with_max_key(graph.max_degree(), graph.nb_vertices());
    for (v, neighbours) in &working {
        queue.insert(*v, neighbours.len());
    }
    //
    let mut cores = IndexMap::<Vertex, u32>::with_capacity(graph.nb_vertices());
    let mut current: usize = 0;
    while let Some((v, degree)) = queue.pop_min() {
        if degree > current {
            log::debug!("core_decompose reached level {}", degree);
            current = degree;
        }
        cores.insert(v, current as u32);
        // neighbours still in working are exactly the vertices not yet peeled
        if let Some(neighbours) = working.swap_remove(&v) {
            for w in &neighbours {
                if let Some(w_neighbours) = working.get_mut(w) {
                    w_neighbours.swap_remove(&v);
                }
                if queue.decrement(w).is_none() {
                    log::error!("core_decompose degree of {} corrupted while peeling {}", w, v);
                    return Err(DecompError::IncompleteDecomposition {
                        kind: "core",
                        assigned: cores.len(),
                        expected: graph.nb_vertices(),
                    });
                }
            }
        }
    } // end of peeling loop
    //
    log::info!(
        "core_decompose max core : {}, sys time(s) {:.2e} cpu time(s) {:.2e}",
        current,
        sys_start.elapsed().map(|d| d.as_secs_f64()).unwrap_or(0.),
        cpu_start.elapsed().as_secs_f64()
    );
    Report::from_cores(graph, cores)
} // end of core_decompose

//=========================================================================

// end of mod tests
