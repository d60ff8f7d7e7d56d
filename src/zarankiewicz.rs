//! Bipartite edge sets that avoid a complete K(t,t).
//!
//! Left and right sides are both `0..n`; an edge `(a, b)` joins left `a` to
//! right `b`. The search enumerates `z`-subsets of the `n * n` edge universe
//! in lexicographic order and is only meant for small parameters: it refuses
//! outright when either the subset count or the per-candidate side-pair count
//! is above the iteration cap.

use std::collections::BTreeSet;

use itertools::Itertools;
use tracing::{debug, info, warn};

use crate::graph::Edge;
use crate::search::{BudgetLimit, SearchBudget, SearchOutcome};

/// Side pairs examined per budget tick inside one K(t,t) scan.
const PAIRS_PER_TICK: u64 = 1024;

/// `C(n, k)`, or `None` when it does not fit in a `u64`.
fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    // C(n, i) grows with i up to n / 2, so no intermediate exceeds the result.
    for i in 0..k {
        acc = acc * u128::from(n - i) / u128::from(i + 1);
        if acc > u128::from(u64::MAX) {
            return None;
        }
    }
    u64::try_from(acc).ok()
}

/// The first worst-case count (`z`-subsets, then `t × t` side pairs) that
/// exceeds `max`.
fn search_space_limit(z: usize, n: usize, t: usize, max: u64) -> Option<BudgetLimit> {
    let (z, n, t) = (z as u64, n as u64, t as u64);
    let subsets = n.checked_mul(n).and_then(|cells| binomial(cells, z));
    let pairs = binomial(n, t).and_then(|sides| sides.checked_mul(sides));

    [subsets, pairs]
        .into_iter()
        .map(|count| count.unwrap_or(u64::MAX))
        .find(|&count| count > max)
        .map(|candidates| BudgetLimit::SearchSpace { candidates, max })
}

/// `Ok(true)` if no `t` left and `t` right vertices are fully joined.
/// Ticks `budget` once per [`PAIRS_PER_TICK`] side pairs.
fn scan_complete_bipartite(
    edges: &BTreeSet<Edge>,
    n: usize,
    t: usize,
    budget: &mut SearchBudget,
) -> Result<bool, BudgetLimit> {
    let mut pairs: u64 = 0;
    for left in (0..n).combinations(t) {
        for right in (0..n).combinations(t) {
            pairs += 1;
            if pairs % PAIRS_PER_TICK == 0 {
                if let Some(limit) = budget.tick() {
                    return Err(limit);
                }
            }
            if left
                .iter()
                .all(|&a| right.iter().all(|&b| edges.contains(&(a, b))))
            {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// True if for every `t` left vertices and `t` right vertices at least one
/// of the `t * t` cross edges is missing. Unbounded; callers check
/// certificates whose search already ran the same scan under a budget.
fn avoids_complete_bipartite(edges: &BTreeSet<Edge>, n: usize, t: usize) -> bool {
    scan_complete_bipartite(edges, n, t, &mut SearchBudget::unlimited()).unwrap_or(false)
}

/// Check a candidate: at least `z` distinct edges, all inside `[0, n)²`,
/// with no K(t,t).
pub fn check_edge_set(edges: &[Edge], z: usize, n: usize, t: usize) -> bool {
    let set: BTreeSet<Edge> = edges.iter().copied().collect();
    set.len() >= z
        && set.iter().all(|&(a, b)| a < n && b < n)
        && avoids_complete_bipartite(&set, n, t)
}

/// First `z`-edge subset of the complete `n × n` bipartite graph that avoids
/// K(t,t), in lexicographic order.
pub fn find_edge_set(z: usize, n: usize, t: usize, budget: &mut SearchBudget) -> SearchOutcome<Vec<Edge>> {
    debug!(z, n, t, "zarankiewicz search");

    // Every edge set contains the empty K(0,0).
    if t == 0 || n.checked_mul(n).is_some_and(|cells| z > cells) {
        info!(z, n, t, "zarankiewicz parameters admit no edge set");
        return SearchOutcome::Exhausted;
    }

    if let Some(limit) = search_space_limit(z, n, t, budget.max_iterations()) {
        warn!(%limit, "zarankiewicz search refused");
        return SearchOutcome::BudgetExceeded(limit);
    }

    for subset in (0..n).cartesian_product(0..n).combinations(z) {
        if let Some(limit) = budget.tick() {
            warn!(%limit, iterations = budget.iterations(), "zarankiewicz search stopped");
            return SearchOutcome::BudgetExceeded(limit);
        }
        let set: BTreeSet<Edge> = subset.iter().copied().collect();
        match scan_complete_bipartite(&set, n, t, budget) {
            Ok(true) => {
                info!(iterations = budget.iterations(), "zarankiewicz edge set found");
                return SearchOutcome::Found(subset);
            }
            Ok(false) => {}
            Err(limit) => {
                warn!(%limit, iterations = budget.iterations(), "zarankiewicz search stopped");
                return SearchOutcome::BudgetExceeded(limit);
            }
        }
    }

    SearchOutcome::Exhausted
}
