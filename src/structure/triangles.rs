//! Triangle support of edges.
//!
//! The support of an edge (u,v) is the number of triangles containing it, i.e $|N(u) \cap N(v)|$.
//!
//! Edges are oriented from the endpoint of lower (degree, id) rank to the higher one, and each vertex intersects
//! its forward neighbourhood with the forward neighbourhoods of its forward neighbours.
//! Each triangle is discovered exactly once, from its lowest ranked vertex, and total work is bounded
//! by the arboricity of the graph instead of $V \cdot d_{max}^2$.

use std::time::SystemTime;

use cpu_time::ProcessTime;

use indexmap::{IndexMap, IndexSet};

use super::graph::{Edge, GraphStore, Vertex};

/// returns the support of every edge of the graph. Triangle-free graphs get 0 everywhere.
pub fn edge_supports(graph: &GraphStore) -> IndexMap<Edge, u32> {
    //
    let cpu_start = ProcessTime::now();
    let sys_start = SystemTime::now();
    //
    let adjacency = graph.adjacency();
    let mut order: Vec<Vertex> = adjacency.keys().copied().collect();
    order.sort_unstable_by_key(|v| (adjacency[v].len(), *v));
    let rank: IndexMap<Vertex, usize> = order.iter().enumerate().map(|(r, &v)| (v, r)).collect();
    // forward[r] : neighbours of order[r] with higher rank
    let forward: Vec<IndexSet<Vertex>> = order
        .iter()
        .enumerate()
        .map(|(r, u)| {
            adjacency[u]
                .iter()
                .copied()
                .filter(|w| rank[w] > r)
                .collect()
        })
        .collect();
    //
    let mut supports: IndexMap<Edge, u32> = graph.edges().map(|e| (e, 0)).collect();
    let mut increment = |a: Vertex, b: Vertex| {
        if let Some(s) = supports.get_mut(&Edge::canonical(a, b)) {
            *s += 1;
        }
    };
    let mut nb_triangles: u64 = 0;
    for (r, &u) in order.iter().enumerate() {
        let forward_u = &forward[r];
        for &v in forward_u {
            for &w in &forward[rank[&v]] {
                if forward_u.contains(&w) {
                    nb_triangles += 1;
                    increment(u, v);
                    increment(u, w);
                    increment(v, w);
                }
            }
        }
    }
    //
    log::info!(
        "edge_supports nb_edges : {}, nb_triangles : {}, sys time(s) {:.2e} cpu time(s) {:.2e}",
        graph.nb_edges(),
        nb_triangles,
        sys_start.elapsed().map(|d| d.as_secs_f64()).unwrap_or(0.),
        cpu_start.elapsed().as_secs_f64()
    );
    supports
} // end of edge_supports

/// number of triangles of the graph
pub fn triangle_count(graph: &GraphStore) -> u64 {
    let total: u64 = edge_supports(graph).values().map(|&s| s as u64).sum();
    total / 3
}

//=========================================================================

// end of mod tests
