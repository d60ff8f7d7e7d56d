//! Exact-size clique search.
//!
//! Depth-first over an explicit stack of candidate pools. Each frame holds
//! the vertices still compatible with every pick above it, ascending; picking
//! `v` pushes a frame containing only the later pool members adjacent to `v`.
//! A frame whose remaining candidates cannot complete the clique is popped
//! together with the pick that created it.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::error::{Result, SolveError};
use crate::graph::{Graph, Vertex};

/// Picks rarely exceed this before spilling to the heap.
type Picks = SmallVec<[Vertex; 16]>;

#[derive(Debug)]
struct PoolFrame {
    pool: Vec<Vertex>,
    next: usize,
}

impl PoolFrame {
    fn remaining(&self) -> usize {
        self.pool.len() - self.next
    }
}

/// Find `size` vertices that are pairwise adjacent in either orientation.
///
/// `size == 0` yields the empty clique. If the search exhausts, the instance
/// is malformed and [`SolveError::NoClique`] is returned.
pub fn find_clique(graph: &Graph, size: usize) -> Result<Vec<Vertex>> {
    debug!(size, vertices = graph.vertex_count(), "clique search");

    if size == 0 {
        return Ok(Vec::new());
    }

    let mut picks = Picks::new();
    let mut stack = vec![PoolFrame {
        pool: graph.vertices().collect(),
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        if frame.remaining() == 0 || picks.len() + frame.remaining() < size {
            stack.pop();
            picks.pop();
            continue;
        }

        let v = frame.pool[frame.next];
        frame.next += 1;

        // Later pool entries are all greater than v.
        let pool: Vec<Vertex> = frame.pool[frame.next..]
            .iter()
            .copied()
            .filter(|&w| w != v && graph.adjacent(v, w))
            .collect();

        picks.push(v);
        if picks.len() == size {
            info!(size, clique = ?picks.as_slice(), "clique found");
            return Ok(picks.into_vec());
        }
        stack.push(PoolFrame { pool, next: 0 });
    }

    Err(SolveError::NoClique { size })
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::random_edges;
    use crate::verify::is_clique;

    #[test]
    fn test_planted_triangle() {
        let graph = Graph::from_edges([(0, 17), (0, 22), (17, 22), (17, 31), (22, 31), (31, 17)]);

        let clique = find_clique(&graph, 3).unwrap();
        assert_eq!(clique.len(), 3);
        assert!(is_clique(&graph, &clique));
    }

    #[test]
    fn test_size_zero_is_empty_clique() {
        let graph = Graph::from_edges([(0, 1)]);

        assert_eq!(find_clique(&graph, 0), Ok(Vec::new()));
        assert_eq!(find_clique(&Graph::new(), 0), Ok(Vec::new()));
    }

    #[test]
    fn test_size_one_and_two() {
        let graph = Graph::from_edges([(5, 2)]);

        assert_eq!(find_clique(&graph, 1), Ok(vec![2]));
        assert_eq!(find_clique(&graph, 2), Ok(vec![2, 5]));
    }

    #[test]
    fn test_missing_clique_is_fatal() {
        // 4-cycle: no triangle.
        let graph = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);

        assert_eq!(find_clique(&graph, 3), Err(SolveError::NoClique { size: 3 }));
        assert_eq!(find_clique(&Graph::new(), 1), Err(SolveError::NoClique { size: 1 }));
    }

    #[test]
    fn test_self_loop_does_not_count() {
        let graph = Graph::from_edges([(0, 0), (1, 1), (0, 1)]);

        assert!(find_clique(&graph, 3).is_err());
        assert_eq!(find_clique(&graph, 2), Ok(vec![0, 1]));
    }

    #[test]
    fn test_planted_clique_in_noise() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let planted = [3usize, 8, 14, 19, 25];
        let mut edges = random_edges(rng, 30, 60);
        edges.extend(planted.iter().copied().tuple_combinations::<(_, _)>());
        let graph = Graph::from_edges(edges);

        let clique = find_clique(&graph, planted.len()).unwrap();
        assert_eq!(clique.len(), planted.len());
        assert!(is_clique(&graph, &clique));
    }

    #[test]
    fn test_agrees_with_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);
        for n in [4usize, 6, 9] {
            for m_ub in [n, 2 * n, 4 * n] {
                let graph = Graph::from_edges(random_edges(rng, n, m_ub));
                let vertices: Vec<Vertex> = graph.vertices().collect();
                for size in 1..=4 {
                    let exists = vertices
                        .iter()
                        .copied()
                        .combinations(size)
                        .any(|c| is_clique(&graph, &c));
                    match find_clique(&graph, size) {
                        Ok(clique) => {
                            assert_eq!(clique.len(), size);
                            assert!(is_clique(&graph, &clique));
                        }
                        Err(err) => {
                            assert!(!exists);
                            assert_eq!(err, SolveError::NoClique { size });
                        }
                    }
                }
            }
        }
    }
}
