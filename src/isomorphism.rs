//! Vertex relabelings between two directed edge sets.
//!
//! The search is factorial in the vertex count, so it is refused outright
//! above a configured size and otherwise walks the permutations of
//! `0..n` lazily, consulting the budget before each candidate.

use std::collections::BTreeSet;

use itertools::Itertools;
use tracing::{debug, info, warn};

use crate::graph::{max_vertex_of, Edge, Vertex};
use crate::search::{BudgetLimit, SearchBudget, SearchOutcome};

/// Find `pi` with `{(pi[i], pi[j]) : (i, j) in g2} == g1` as edge sets.
///
/// `pi[i]` is the `g1` vertex identified with `g2` vertex `i`. Vertices are
/// `0..n` where `n` is one more than the largest id in either graph.
pub fn find_isomorphism(
    g1: &[Edge],
    g2: &[Edge],
    max_vertices: usize,
    budget: &mut SearchBudget,
) -> SearchOutcome<Vec<Vertex>> {
    let n = max_vertex_of([g1, g2]).map_or(0, |m| m + 1);
    debug!(vertices = n, g1 = g1.len(), g2 = g2.len(), "isomorphism search");

    if n > max_vertices {
        let limit = BudgetLimit::VertexCount {
            vertices: n,
            max: max_vertices,
        };
        warn!(%limit, "isomorphism search refused");
        return SearchOutcome::BudgetExceeded(limit);
    }

    let target: BTreeSet<Edge> = g1.iter().copied().collect();
    let source: BTreeSet<Edge> = g2.iter().copied().collect();

    // A bijection maps distinct edges to distinct edges.
    if target.len() != source.len() || degree_profile(&target, n) != degree_profile(&source, n) {
        info!("isomorphism ruled out by degree profile");
        return SearchOutcome::Exhausted;
    }

    for pi in (0..n).permutations(n) {
        if let Some(limit) = budget.tick() {
            warn!(%limit, iterations = budget.iterations(), "isomorphism search stopped");
            return SearchOutcome::BudgetExceeded(limit);
        }
        if source.iter().all(|&(i, j)| target.contains(&(pi[i], pi[j]))) {
            info!(iterations = budget.iterations(), "isomorphism found");
            return SearchOutcome::Found(pi);
        }
    }

    SearchOutcome::Exhausted
}

/// Sorted `(out, in)` degree pairs; invariant under relabeling.
fn degree_profile(edges: &BTreeSet<Edge>, n: usize) -> Vec<(usize, usize)> {
    let mut degrees = vec![(0, 0); n];
    for &(a, b) in edges {
        degrees[a].0 += 1;
        degrees[b].1 += 1;
    }
    degrees.sort_unstable();
    degrees
}
