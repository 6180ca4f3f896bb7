//! Error type of the decomposition library.
//!
//! Decomposition itself is total on a valid [GraphStore](crate::structure::graph::GraphStore),
//! so errors come either from construction (self-loops, oversized node indexes) or from queries on entities a report does not hold.
//! [DecompError::IncompleteDecomposition] signals a bug in peeling, not a user error.

use thiserror::Error;

use crate::structure::graph::Vertex;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecompError {
    /// self-loop given at construction
    #[error("invalid edge ({0}, {1}) : self-loops are not allowed")]
    InvalidEdge(Vertex, Vertex),
    /// node index that does not fit in a [Vertex]
    #[error("node index {0} does not fit in a u32 vertex id")]
    VertexOverflow(usize),
    /// vertex absent from the graph or the report
    #[error("unknown vertex {0}")]
    UnknownVertex(Vertex),
    /// edge absent from the graph or the report
    #[error("unknown edge ({0}, {1})")]
    UnknownEdge(Vertex, Vertex),
    /// a decomposer did not assign a value to every entity of the graph
    #[error("incomplete {kind} decomposition : {assigned} values assigned, {expected} expected")]
    IncompleteDecomposition {
        kind: &'static str,
        assigned: usize,
        expected: usize,
    },
}

pub type Result<T> = std::result::Result<T, DecompError>;
