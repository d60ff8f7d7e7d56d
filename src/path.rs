//! Shortest paths between two designated vertices.
//!
//! Weighted graphs use Dijkstra over non-negative costs; unweighted graphs
//! use BFS by hop count. Both rebuild the path from predecessor links and
//! return `None` when the target is unreachable.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, VecDeque};

use tracing::debug;

use crate::graph::{Graph, Vertex};

/// A path together with its total edge cost.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath {
    pub vertices: Vec<Vertex>,
    pub cost: f64,
}

/// Frontier entry. Equal distances pop in push order.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    dist: f64,
    seq: u64,
    vertex: Vertex,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Minimum-cost path from `source` to `target`.
///
/// Edges without a recorded weight are not traversed. Weights are validated
/// when the graph is built, so every cost here is finite and non-negative.
pub fn dijkstra(graph: &Graph, source: Vertex, target: Vertex) -> Option<WeightedPath> {
    debug!(source, target, vertices = graph.vertex_count(), "dijkstra");

    if source == target {
        return Some(WeightedPath {
            vertices: vec![source],
            cost: 0.0,
        });
    }

    let mut dist: HashMap<Vertex, f64> = HashMap::new();
    let mut parent: HashMap<Vertex, Vertex> = HashMap::new();
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    dist.insert(source, 0.0);
    heap.push(Reverse(Frontier {
        dist: 0.0,
        seq,
        vertex: source,
    }));

    while let Some(Reverse(Frontier { dist: d, vertex, .. })) = heap.pop() {
        if dist.get(&vertex).is_some_and(|&best| d > best) {
            continue;
        }
        if vertex == target {
            return Some(WeightedPath {
                vertices: reconstruct(&parent, source, target),
                cost: d,
            });
        }

        for &next in graph.neighbors_out(vertex) {
            let Some(w) = graph.weight(vertex, next) else {
                continue;
            };
            let candidate = d + w;
            if dist.get(&next).map_or(true, |&best| candidate < best) {
                dist.insert(next, candidate);
                parent.insert(next, vertex);
                seq += 1;
                heap.push(Reverse(Frontier {
                    dist: candidate,
                    seq,
                    vertex: next,
                }));
            }
        }
    }

    None
}

/// Fewest-hop path from `source` to `target`.
pub fn bfs_path(graph: &Graph, source: Vertex, target: Vertex) -> Option<Vec<Vertex>> {
    debug!(source, target, vertices = graph.vertex_count(), "bfs path");

    if source == target {
        return Some(vec![source]);
    }

    let mut parent: HashMap<Vertex, Vertex> = HashMap::new();
    let mut queue: VecDeque<Vertex> = VecDeque::new();
    parent.insert(source, source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for &next in graph.neighbors_out(current) {
            if parent.contains_key(&next) {
                continue;
            }
            parent.insert(next, current);
            // Level order: the first arrival is a shortest path.
            if next == target {
                return Some(reconstruct(&parent, source, target));
            }
            queue.push_back(next);
        }
    }

    None
}

/// Sum of edge weights along `path`, or `None` if some hop is not a
/// weighted edge.
pub fn path_cost(graph: &Graph, path: &[Vertex]) -> Option<f64> {
    path.windows(2)
        .map(|hop| graph.weight(hop[0], hop[1]))
        .sum()
}

fn reconstruct(parent: &HashMap<Vertex, Vertex>, source: Vertex, target: Vertex) -> Vec<Vertex> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        current = parent[&current];
        path.push(current);
    }
    path.reverse();
    path
}
