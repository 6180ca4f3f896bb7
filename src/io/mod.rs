//! Loading edge lists and dumping decomposition results.
//!
//! This is outside the decomposition core: it only builds a [GraphStore](crate::structure::graph::GraphStore)
//! and reads a [Report](crate::structure::cores::report::Report).

pub mod csv;

pub mod output;
