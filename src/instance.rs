//! Puzzle instances and their certificates, as exchanged in JSON.
//!
//! An instance is tagged by its puzzle family:
//!
//! ```json
//! { "puzzle": "UnweightedShortestPath", "edges": [[0, 11], [11, 33]], "u": 0, "v": 33 }
//! ```

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::graph::{max_vertex_of, Edge, Vertex};
use crate::parity::Parity;

fn default_target() -> Vertex {
    1
}

/// Weight rows arrive as JSON objects keyed by vertex id strings. Parsed by
/// hand because tagged enums buffer their content and lose integer keys.
fn weight_table<'de, D>(deserializer: D) -> Result<Vec<BTreeMap<Vertex, f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<BTreeMap<String, f64>> = Deserialize::deserialize(deserializer)?;
    raw.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(key, weight)| {
                    key.parse::<Vertex>()
                        .map(|v| (v, weight))
                        .map_err(|_| D::Error::custom(format!("invalid vertex id {:?}", key)))
                })
                .collect()
        })
        .collect()
}

/// One problem to solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "puzzle")]
pub enum Instance {
    /// Any edge of the graph.
    AnyEdge { edges: Vec<Edge> },

    /// A directed 3-cycle.
    AnyTriangle { edges: Vec<Edge> },

    /// `size` pairwise-adjacent vertices of an undirected graph.
    PlantedClique { edges: Vec<Edge>, size: usize },

    /// Cheapest path; `weights[u]` maps each successor of `u` to its cost.
    ShortestPath {
        #[serde(deserialize_with = "weight_table")]
        weights: Vec<BTreeMap<Vertex, f64>>,
        #[serde(default)]
        source: Vertex,
        #[serde(default = "default_target")]
        target: Vertex,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bound: Option<f64>,
    },

    /// Fewest-vertex path from `u` to `v`; `bound` caps the vertex count.
    UnweightedShortestPath {
        edges: Vec<Edge>,
        u: Vertex,
        v: Vertex,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bound: Option<usize>,
    },

    /// Any path from 0 to the largest vertex.
    AnyPath { edges: Vec<Edge> },

    /// Walk with an even number of vertices, from `start` (default 0) to
    /// `end` (default the largest vertex).
    EvenPath {
        edges: Vec<Edge>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<Vertex>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        end: Option<Vertex>,
    },

    /// Walk with an odd number of vertices, from `start` (default 0) to
    /// `end` (default 1).
    OddPath {
        edges: Vec<Edge>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<Vertex>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        end: Option<Vertex>,
    },

    /// Relabeling of `g2` onto `g1`.
    GraphIsomorphism { g1: Vec<Edge>, g2: Vec<Edge> },

    /// `z` edges of the `n × n` bipartite graph without a K(t,t).
    Zarankiewicz { z: usize, n: usize, t: usize },
}

impl Instance {
    /// Puzzle family name, as used for the JSON tag.
    pub fn name(&self) -> &'static str {
        match self {
            Instance::AnyEdge { .. } => "AnyEdge",
            Instance::AnyTriangle { .. } => "AnyTriangle",
            Instance::PlantedClique { .. } => "PlantedClique",
            Instance::ShortestPath { .. } => "ShortestPath",
            Instance::UnweightedShortestPath { .. } => "UnweightedShortestPath",
            Instance::AnyPath { .. } => "AnyPath",
            Instance::EvenPath { .. } => "EvenPath",
            Instance::OddPath { .. } => "OddPath",
            Instance::GraphIsomorphism { .. } => "GraphIsomorphism",
            Instance::Zarankiewicz { .. } => "Zarankiewicz",
        }
    }

    /// Endpoints and parity for the parity-path families.
    pub fn parity_endpoints(&self) -> Option<(Vertex, Vertex, Parity)> {
        match self {
            Instance::EvenPath { edges, start, end } => Some((
                start.unwrap_or(0),
                end.unwrap_or_else(|| max_vertex_of([edges.as_slice()]).unwrap_or(0)),
                Parity::Even,
            )),
            Instance::OddPath { start, end, .. } => Some((
                start.unwrap_or(0),
                end.unwrap_or_else(default_target),
                Parity::Odd,
            )),
            _ => None,
        }
    }

    /// Endpoints for `AnyPath`: 0 to the largest vertex.
    pub fn any_path_endpoints(edges: &[Edge]) -> (Vertex, Vertex) {
        (0, max_vertex_of([edges]).unwrap_or(0))
    }
}

/// A solver's answer, checkable against its instance in isolation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Certificate {
    Edge(Edge),
    Triangle([Vertex; 3]),
    Clique(Vec<Vertex>),
    Path(Vec<Vertex>),
    /// `pi[i]` is the `g1` vertex for `g2` vertex `i`.
    Permutation(Vec<Vertex>),
    EdgeSet(Vec<Edge>),
}
