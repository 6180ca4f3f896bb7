//! Small graphs and brute force references shared by the tests.
//!
//! References are computed from the definitions by iterated pruning for each k, without buckets
//! nor the oriented triangle counter.

use indexmap::{IndexMap, IndexSet};

use rand::distributions::{Distribution, Uniform};
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use super::cores::report::Report;
use super::graph::{build_graph, Edge, GraphStore, Vertex};

/// complete graph on 0..n
pub(crate) fn complete(n: Vertex) -> GraphStore {
    let edges = (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v)));
    build_graph(edges).unwrap()
}

/// path 0 - 1 - ... - (n-1)
pub(crate) fn path(n: Vertex) -> GraphStore {
    build_graph((1..n).map(|v| (v - 1, v))).unwrap()
}

/// two triangles sharing vertex 0
pub(crate) fn bowtie() -> GraphStore {
    build_graph(vec![(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)]).unwrap()
}

/// hub 0 joined to a cycle 1..=rim
pub(crate) fn wheel(rim: Vertex) -> GraphStore {
    let mut edges: Vec<(Vertex, Vertex)> = (1..=rim).map(|v| (0, v)).collect();
    edges.extend((1..=rim).map(|v| (v, v % rim + 1)));
    build_graph(edges).unwrap()
}

/// Zachary karate club, 34 vertices, 78 edges
pub(crate) fn karate() -> GraphStore {
    let adjacency: Vec<(Vertex, Vec<Vertex>)> = vec![
        (0, vec![1, 2, 3, 4, 5, 6, 7, 8, 10, 11, 12, 13, 17, 19, 21, 31]),
        (1, vec![2, 3, 7, 13, 17, 19, 21, 30]),
        (2, vec![3, 7, 8, 9, 13, 27, 28, 32]),
        (3, vec![7, 12, 13]),
        (4, vec![6, 10]),
        (5, vec![6, 10, 16]),
        (6, vec![16]),
        (8, vec![30, 32, 33]),
        (9, vec![33]),
        (13, vec![33]),
        (14, vec![32, 33]),
        (15, vec![32, 33]),
        (18, vec![32, 33]),
        (19, vec![33]),
        (20, vec![32, 33]),
        (22, vec![32, 33]),
        (23, vec![25, 27, 29, 32, 33]),
        (24, vec![25, 27, 31]),
        (25, vec![31]),
        (26, vec![29, 33]),
        (27, vec![33]),
        (28, vec![31, 33]),
        (29, vec![32, 33]),
        (30, vec![32, 33]),
        (31, vec![32, 33]),
        (32, vec![33]),
    ];
    let graph = build_graph(
        adjacency
            .into_iter()
            .flat_map(|(u, nbrs)| nbrs.into_iter().map(move |v| (u, v))),
    )
    .unwrap();
    assert_eq!(graph.nb_edges(), 78);
    graph
}

/// a mix of shapes exercising ties, isolated vertices and nested trusses
pub(crate) fn assorted() -> Vec<GraphStore> {
    let mut with_isolated = bowtie();
    with_isolated.add_vertex(10);
    with_isolated.add_vertex(11);
    vec![
        GraphStore::new(),
        complete(6),
        path(7),
        bowtie(),
        with_isolated,
        wheel(3),
        wheel(8),
        // two K4 joined by a path, and a chord creating an extra triangle
        build_graph(vec![
            (0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3),
            (3, 4), (4, 5),
            (5, 6), (5, 7), (5, 8), (6, 7), (6, 8), (7, 8),
            (3, 5),
        ])
        .unwrap(),
        // octahedron: 4-regular, every edge in 2 triangles
        build_graph(vec![
            (0, 2), (0, 3), (0, 4), (0, 5),
            (1, 2), (1, 3), (1, 4), (1, 5),
            (2, 4), (2, 5), (3, 4), (3, 5),
        ])
        .unwrap(),
        karate(),
    ]
}

/// nb random simple graphs on 2 to 15 vertices, each with its own edge density in [0,1).
/// Pairs are given in random orientation so that canonicalisation is exercised.
/// The same seed gives the same graphs.
pub(crate) fn random_graphs(nb: usize, seed: u64) -> Vec<GraphStore> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let size = Uniform::<Vertex>::new_inclusive(2, 15);
    let unif = Uniform::<f64>::new(0., 1.);
    let mut graphs = Vec::with_capacity(nb);
    for _ in 0..nb {
        let n = size.sample(&mut rng);
        let density = unif.sample(&mut rng);
        let mut graph = GraphStore::with_capacity(n as usize);
        for v in 0..n {
            graph.add_vertex(v);
        }
        for u in 0..n {
            for v in u + 1..n {
                if unif.sample(&mut rng) >= density {
                    continue;
                }
                if unif.sample(&mut rng) < 0.5 {
                    graph.add_edge(u, v).unwrap();
                } else {
                    graph.add_edge(v, u).unwrap();
                }
            }
        }
        graphs.push(graph);
    }
    graphs
} // end of random_graphs

/// core numbers from the definition
pub(crate) fn reference_cores(graph: &GraphStore) -> IndexMap<Vertex, u32> {
    let mut cores: IndexMap<Vertex, u32> = graph.vertices().map(|v| (v, 0)).collect();
    let mut k = 1;
    loop {
        let mut alive: IndexSet<Vertex> = graph.vertices().collect();
        loop {
            let subgraph = graph.induced_subgraph(alive.iter().copied());
            let low: Vec<Vertex> = alive
                .iter()
                .copied()
                .filter(|v| subgraph.degree(*v).unwrap() < k as usize)
                .collect();
            if low.is_empty() {
                break;
            }
            for v in low {
                alive.swap_remove(&v);
            }
        }
        if alive.is_empty() {
            break;
        }
        for v in &alive {
            cores[v] = k;
        }
        k += 1;
    }
    cores
} // end of reference_cores

fn support_in(graph: &GraphStore, e: &Edge) -> usize {
    let nu = graph.neighbors(e.source()).unwrap();
    let nv = graph.neighbors(e.target()).unwrap();
    nu.iter().filter(|w| nv.contains(*w)).count()
}

/// truss numbers from the definition, 2 for every edge in no triangle
pub(crate) fn reference_truss(graph: &GraphStore) -> IndexMap<Edge, u32> {
    let mut truss: IndexMap<Edge, u32> = graph.edges().map(|e| (e, 2)).collect();
    let mut k = 3;
    loop {
        let mut alive: IndexSet<Edge> = graph.edges().collect();
        loop {
            let subgraph = graph.edge_subgraph(alive.iter().copied()).unwrap();
            let low: Vec<Edge> = alive
                .iter()
                .copied()
                .filter(|e| support_in(&subgraph, e) + 2 < k as usize)
                .collect();
            if low.is_empty() {
                break;
            }
            for e in low {
                alive.swap_remove(&e);
            }
        }
        if alive.is_empty() {
            break;
        }
        for e in &alive {
            truss[e] = k;
        }
        k += 1;
    }
    truss
} // end of reference_truss

/// vertices of core number >= k induce a subgraph of minimum degree >= k
pub(crate) fn check_core_property(graph: &GraphStore, report: &Report) {
    assert_eq!(report.nb_vertices(), graph.nb_vertices());
    for v in graph.vertices() {
        assert!(report.core_of(v).unwrap() <= report.max_core());
    }
    for k in 0..=report.max_core() {
        let subgraph = graph.induced_subgraph(report.k_core(k));
        for v in subgraph.vertices() {
            assert!(subgraph.degree(v).unwrap() >= k as usize, "vertex {} in {}-core", v, k);
        }
    }
}

/// edges of truss number >= k are each in at least k-2 triangles of the subgraph they form
pub(crate) fn check_truss_property(graph: &GraphStore, report: &Report) {
    assert_eq!(report.nb_edges(), graph.nb_edges());
    for e in graph.edges() {
        let t = report.truss_of(&e).unwrap();
        assert!(t >= 2 && t <= report.max_truss());
    }
    for k in 2..=report.max_truss() {
        let subgraph = graph.edge_subgraph(report.k_truss(k)).unwrap();
        for e in subgraph.edges() {
            assert!(support_in(&subgraph, &e) + 2 >= k as usize, "edge {} in {}-truss", e, k);
        }
    }
}
