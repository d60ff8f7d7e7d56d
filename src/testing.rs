//! Helpers shared by the randomized solver tests.

use std::collections::VecDeque;

use rand::Rng;

use crate::graph::{Edge, Graph, Vertex};

/// At most `m_ub` random directed edges over vertices `0..n`.
/// Self-loops and duplicates are kept on purpose.
pub fn random_edges<R: Rng>(rng: &mut R, n: usize, m_ub: usize) -> Vec<Edge> {
    (0..m_ub)
        .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
        .collect()
}

/// Hop distances from `source` by plain BFS over the outgoing sets.
pub fn reference_hops(graph: &Graph, source: Vertex, n: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; n];
    let mut queue = VecDeque::new();
    dist[source] = Some(0);
    queue.push_back(source);
    while let Some(u) = queue.pop_front() {
        let d = dist[u].unwrap();
        for &w in graph.neighbors_out(u) {
            if dist[w].is_none() {
                dist[w] = Some(d + 1);
                queue.push_back(w);
            }
        }
    }
    dist
}

/// All-pairs shortest costs by Floyd–Warshall, `None` when unreachable.
pub fn reference_costs(graph: &Graph, n: usize) -> Vec<Vec<Option<f64>>> {
    let mut dist = vec![vec![None; n]; n];
    for (v, row) in dist.iter_mut().enumerate() {
        row[v] = Some(0.0);
    }
    for u in 0..n {
        for &v in graph.neighbors_out(u) {
            if let Some(w) = graph.weight(u, v) {
                if u != v {
                    dist[u][v] = Some(dist[u][v].map_or(w, |d: f64| d.min(w)));
                }
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |d| a + b < d) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    dist
}
