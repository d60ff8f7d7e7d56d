//! Adjacency structures built from raw edge lists.
//!
//! The vertex set is implicit: every id that appears in an edge. Duplicate
//! edges and self-loops are accepted; neighbor sets deduplicate them.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::{Result, SolveError};

/// Vertex identifier as it appears in the instance.
pub type Vertex = usize;

/// An ordered pair `(from, to)`. Undirected instances look edges up in
/// either orientation.
pub type Edge = (Vertex, Vertex);

static NO_NEIGHBORS: BTreeSet<Vertex> = BTreeSet::new();

/// Read-only snapshot of a graph: outgoing and incoming neighbor sets plus
/// an optional weight per directed edge.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    outgoing: BTreeMap<Vertex, BTreeSet<Vertex>>,
    incoming: BTreeMap<Vertex, BTreeSet<Vertex>>,
    weights: HashMap<Edge, f64>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an unweighted edge list.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// Build from a weight table where entry `u` maps each successor `v`
    /// to the cost of `u -> v`.
    pub fn from_weight_table(table: &[BTreeMap<Vertex, f64>]) -> Result<Self> {
        let mut graph = Self::new();
        for (from, row) in table.iter().enumerate() {
            for (&to, &weight) in row {
                graph.add_weighted_edge(from, to, weight)?;
            }
        }
        Ok(graph)
    }

    /// Add a directed edge. Also inserts into the incoming sets.
    pub fn add_edge(&mut self, from: Vertex, to: Vertex) {
        self.outgoing.entry(from).or_default().insert(to);
        self.incoming.entry(to).or_default().insert(from);
        // Keep isolated endpoints visible in the vertex set.
        self.outgoing.entry(to).or_default();
        self.incoming.entry(from).or_default();
    }

    /// Add a weighted directed edge. A duplicate keeps the cheaper weight.
    pub fn add_weighted_edge(&mut self, from: Vertex, to: Vertex, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(SolveError::InvalidWeight { from, to, weight });
        }
        self.add_edge(from, to);
        self.weights
            .entry((from, to))
            .and_modify(|w| *w = w.min(weight))
            .or_insert(weight);
        Ok(())
    }

    /// Successors of `v`, ascending.
    pub fn neighbors_out(&self, v: Vertex) -> &BTreeSet<Vertex> {
        self.outgoing.get(&v).unwrap_or(&NO_NEIGHBORS)
    }

    /// Predecessors of `v`, ascending.
    pub fn neighbors_in(&self, v: Vertex) -> &BTreeSet<Vertex> {
        self.incoming.get(&v).unwrap_or(&NO_NEIGHBORS)
    }

    pub fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.neighbors_out(from).contains(&to)
    }

    /// Edge present in at least one orientation.
    pub fn adjacent(&self, a: Vertex, b: Vertex) -> bool {
        self.has_edge(a, b) || self.has_edge(b, a)
    }

    /// Cost of `from -> to`, or `None` if the edge has no weight.
    pub fn weight(&self, from: Vertex, to: Vertex) -> Option<f64> {
        self.weights.get(&(from, to)).copied()
    }

    /// All vertices that appear in some edge, ascending.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.outgoing.keys().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn max_vertex(&self) -> Option<Vertex> {
        self.outgoing.keys().next_back().copied()
    }

    /// Number of distinct directed edges.
    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(|s| s.len()).sum()
    }
}

/// Largest vertex id mentioned by any of the edge lists.
pub fn max_vertex_of<'a, I>(edge_lists: I) -> Option<Vertex>
where
    I: IntoIterator<Item = &'a [Edge]>,
{
    edge_lists
        .into_iter()
        .flat_map(|edges| edges.iter().flat_map(|&(a, b)| [a, b]))
        .max()
}
