//! lib target
//!
//! Core numbers of vertices and truss numbers of edges of simple undirected graphs.
//!
//! A [GraphStore](structure::graph::GraphStore) is built once, with [build_graph](structure::graph::build_graph),
//! from a csv edge list ([io::csv]) or from a petgraph graph.
//! Then [core_decompose](structure::cores::core_decompose) and [truss_decompose](structure::cores::truss_decompose)
//! each return a [Report](structure::cores::Report) and leave the graph untouched.

pub mod error;

pub mod structure;

pub mod io;

pub mod prelude;
