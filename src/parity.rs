//! Shortest walks whose vertex count has a required parity.
//!
//! The search runs over `(vertex, parity)` states: a walk with an even
//! vertex count extends to an odd one at a successor and vice versa. A
//! level-synchronous BFS over this doubled space visits each state once, so
//! it finishes within `2 * (max vertex + 1)` levels and the first arrival at
//! `(end, parity)` is the shortest such walk. Walks may revisit vertices.

use std::collections::HashMap;

use tracing::debug;

use crate::graph::{Graph, Vertex};

/// Required parity of the number of vertices on the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of_len(len: usize) -> Self {
        if len % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }
}

type State = (Vertex, Parity);

/// Shortest walk from `start` to `end` with `parity` many vertices.
pub fn parity_path(graph: &Graph, start: Vertex, end: Vertex, parity: Parity) -> Option<Vec<Vertex>> {
    let level_cap = 2 * graph.max_vertex().map_or(start.max(end), |m| m.max(start).max(end)) + 2;
    debug!(start, end, ?parity, level_cap, "parity path");

    // The single-vertex walk [start] has odd length.
    let origin: State = (start, Parity::Odd);
    let goal: State = (end, parity);
    if origin == goal {
        return Some(vec![start]);
    }

    let mut parent: HashMap<State, State> = HashMap::new();
    parent.insert(origin, origin);
    let mut frontier = vec![origin];
    let mut level = 0;

    while !frontier.is_empty() && level < level_cap {
        level += 1;
        let mut next_frontier = Vec::new();
        for &(vertex, p) in &frontier {
            for &next in graph.neighbors_out(vertex) {
                let state = (next, p.flip());
                if parent.contains_key(&state) {
                    continue;
                }
                parent.insert(state, (vertex, p));
                if state == goal {
                    return Some(reconstruct(&parent, origin, goal));
                }
                next_frontier.push(state);
            }
        }
        frontier = next_frontier;
    }

    None
}

fn reconstruct(parent: &HashMap<State, State>, origin: State, goal: State) -> Vec<Vertex> {
    let mut walk = vec![goal.0];
    let mut current = goal;
    while current != origin {
        current = parent[&current];
        walk.push(current.0);
    }
    walk.reverse();
    walk
}
