//! Directed 3-cycles.

use tracing::debug;

use crate::graph::{Graph, Vertex};

/// Find `[a, b, c]`, pairwise distinct, with edges `a->b`, `b->c`, `c->a`.
///
/// Scans `a` ascending, then each successor `b` ascending, and closes the
/// cycle with the smallest `c` in `out(b) ∩ in(a)`. Self-loops never
/// participate. Returns `None` for a triangle-free graph.
pub fn find_triangle(graph: &Graph) -> Option<[Vertex; 3]> {
    debug!(vertices = graph.vertex_count(), edges = graph.edge_count(), "triangle search");

    for a in graph.vertices() {
        let closing = graph.neighbors_in(a);
        for &b in graph.neighbors_out(a) {
            if b == a {
                continue;
            }
            let c = graph
                .neighbors_out(b)
                .intersection(closing)
                .find(|&&c| c != a && c != b);
            if let Some(&c) = c {
                return Some([a, b, c]);
            }
        }
    }

    None
}
