//! Verification predicates.
//!
//! Each predicate depends only on the instance data and the certificate, so
//! a certificate can be checked without trusting the solver that built it.

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::graph::{Edge, Graph, Vertex};
use crate::instance::{Certificate, Instance};
use crate::parity::Parity;
use crate::path::path_cost;
use crate::zarankiewicz::check_edge_set;

/// Does `certificate` satisfy `instance`?
pub fn verify(instance: &Instance, certificate: &Certificate) -> bool {
    match (instance, certificate) {
        (Instance::AnyEdge { edges }, Certificate::Edge(edge)) => edges.contains(edge),

        (Instance::AnyTriangle { edges }, Certificate::Triangle(tri)) => {
            is_triangle(&Graph::from_edges(edges.iter().copied()), *tri)
        }

        (Instance::PlantedClique { edges, size }, Certificate::Clique(nodes)) => {
            nodes.len() == *size && is_clique(&Graph::from_edges(edges.iter().copied()), nodes)
        }

        (
            Instance::ShortestPath {
                weights,
                source,
                target,
                bound,
            },
            Certificate::Path(path),
        ) => {
            let Ok(graph) = Graph::from_weight_table(weights) else {
                return false;
            };
            connects(path, *source, *target)
                && path_cost(&graph, path).is_some_and(|cost| bound.map_or(true, |b| cost <= b))
        }

        (Instance::UnweightedShortestPath { edges, u, v, bound }, Certificate::Path(path)) => {
            let graph = Graph::from_edges(edges.iter().copied());
            is_path(&graph, path, *u, *v) && bound.map_or(true, |b| path.len() <= b)
        }

        (Instance::AnyPath { edges }, Certificate::Path(path)) => {
            let (start, end) = Instance::any_path_endpoints(edges);
            is_path(&Graph::from_edges(edges.iter().copied()), path, start, end)
        }

        (Instance::EvenPath { edges, .. } | Instance::OddPath { edges, .. }, Certificate::Path(path)) => {
            let Some((start, end, parity)) = instance.parity_endpoints() else {
                return false;
            };
            Parity::of_len(path.len()) == parity
                && is_path(&Graph::from_edges(edges.iter().copied()), path, start, end)
        }

        (Instance::GraphIsomorphism { g1, g2 }, Certificate::Permutation(pi)) => {
            is_isomorphism(g1, g2, pi)
        }

        (Instance::Zarankiewicz { z, n, t }, Certificate::EdgeSet(edges)) => {
            check_edge_set(edges, *z, *n, *t)
        }

        _ => false,
    }
}

fn connects(path: &[Vertex], from: Vertex, to: Vertex) -> bool {
    path.first() == Some(&from) && path.last() == Some(&to)
}

/// Starts at `from`, ends at `to`, and every hop is a directed edge.
pub fn is_path(graph: &Graph, path: &[Vertex], from: Vertex, to: Vertex) -> bool {
    connects(path, from, to) && path.windows(2).all(|hop| graph.has_edge(hop[0], hop[1]))
}

/// Pairwise distinct, closed by `a->b`, `b->c`, `c->a`.
pub fn is_triangle(graph: &Graph, [a, b, c]: [Vertex; 3]) -> bool {
    a != b
        && b != c
        && a != c
        && graph.has_edge(a, b)
        && graph.has_edge(b, c)
        && graph.has_edge(c, a)
}

/// Distinct vertices, every pair adjacent in some orientation.
pub fn is_clique(graph: &Graph, nodes: &[Vertex]) -> bool {
    nodes.iter().all_unique()
        && nodes
            .iter()
            .tuple_combinations::<(_, _)>()
            .all(|(&a, &b)| graph.adjacent(a, b))
}

/// `pi` is injective and maps the edge set of `g2` exactly onto that of `g1`.
pub fn is_isomorphism(g1: &[Edge], g2: &[Edge], pi: &[Vertex]) -> bool {
    if !pi.iter().all_unique() {
        return false;
    }
    let target: BTreeSet<Edge> = g1.iter().copied().collect();
    let mut mapped = BTreeSet::new();
    for &(i, j) in g2 {
        match (pi.get(i), pi.get(j)) {
            (Some(&a), Some(&b)) => {
                mapped.insert((a, b));
            }
            _ => return false,
        }
    }
    target == mapped
}
