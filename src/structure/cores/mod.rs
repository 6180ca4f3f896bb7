//! Core and truss decompositions by peeling.
//!
//! - [kcore::core_decompose] : Batagelj Zaversnik minimum degree peeling, a core number per vertex.
//! - [ktruss::truss_decompose] : the same peeling on edges keyed by triangle support, a truss number per edge.
//!
//! Each call owns its working copy of the adjacency and its bucket queue, so decompositions of the same
//! [GraphStore] can run concurrently. [decompose_all] runs both with rayon and merges the reports.

use crate::error::Result;
use crate::structure::graph::GraphStore;

pub mod kcore;
pub mod ktruss;
pub mod report;

pub use kcore::core_decompose;
pub use ktruss::{truss_decompose, TRUSS_BASE};
pub use report::Report;

/// core and truss decompositions computed in parallel, gathered in one report
pub fn decompose_all(graph: &GraphStore) -> Result<Report> {
    let (cores, truss) = rayon::join(|| core_decompose(graph), || truss_decompose(graph));
    Ok(Report::merge(cores?, truss?))
} // end of decompose_all

// end of mod tests
