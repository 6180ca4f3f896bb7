//! To ease access to most frequently items
//!

pub use crate::error::{DecompError, Result};

pub use crate::structure::graph::{build_graph, Edge, GraphStore, Vertex};
pub use crate::structure::triangles::{edge_supports, triangle_count};
pub use crate::structure::cores::*;

pub use crate::io::csv::{dump_cores_csv, dump_truss_csv, graph_from_csv, graph_from_csv_guess_delim};
pub use crate::io::output::{Mode, Output};
