//! This module is devoted to graph decomposition.
//!
//! Algorithms implemented are, for simple undirected graphs:
//!
//!   - core decomposition, Batagelj Zaversnik _An O(m) Algorithm for Cores Decomposition of Networks_ [2003](https://arxiv.org/abs/cs/0310049)
//!
//!   - truss decomposition, Wang Cheng _Truss decomposition in massive networks_ [2012](https://arxiv.org/abs/1205.6693)
//!
//! Both are peelings driven by a [bucket::BucketQueue], on vertices keyed by degree for cores
//! and on edges keyed by triangle support ([triangles::edge_supports]) for trusses.
//!
//!  See also:  
//!     - _Cohen Trusses: Cohesive subgraphs for social network analysis_ 2008

/// adjacency set storage of the graph
pub mod graph;

pub mod bucket;

/// triangle support of edges
pub mod triangles;

/// core and truss decompositions
pub mod cores;

#[cfg(test)]
pub(crate) mod fixtures;
