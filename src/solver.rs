//! Instance dispatch.
//!
//! [`solve`] picks the solver for an instance's puzzle family, runs it under
//! the configured budget, and re-verifies the certificate before returning
//! it. No state survives between calls.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::clique::find_clique;
use crate::error::{Result, SolveError};
use crate::graph::Graph;
use crate::instance::{Certificate, Instance};
use crate::isomorphism::find_isomorphism;
use crate::parity::parity_path;
use crate::path::{bfs_path, dijkstra};
use crate::search::{BudgetLimit, SearchBudget, SearchOutcome};
use crate::triangle::find_triangle;
use crate::verify::verify;
use crate::zarankiewicz::find_edge_set;

/// Configuration for the solvers
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum time for an exhaustive search
    pub timeout: Duration,
    /// Maximum candidates an exhaustive search may test
    pub max_iterations: u64,
    /// Largest vertex count the isomorphism search will attempt
    pub max_isomorphism_vertices: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            max_iterations: 10_000_000,
            max_isomorphism_vertices: 9,
        }
    }
}

/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Solved,
    /// No certificate exists (the search covered everything).
    NoSolution,
    /// Refused or stopped early; treated as no solution.
    BudgetExceeded(BudgetLimit),
}

/// Result of one solver invocation
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub status: SolveStatus,
    /// Present exactly when `status` is `Solved`
    pub certificate: Option<Certificate>,
    /// Candidates tested by exhaustive searches
    pub iterations: u64,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

impl SolverResult {
    pub fn solved(&self) -> bool {
        self.status == SolveStatus::Solved
    }
}

/// Solve one instance.
///
/// Returns `Ok` with a `NoSolution`/`BudgetExceeded` status when no
/// certificate is available, and `Err` only for precondition violations.
pub fn solve(instance: &Instance, config: &SolverConfig) -> Result<SolverResult> {
    let puzzle = instance.name();
    let mut budget = SearchBudget::new(config.timeout, config.max_iterations);
    debug!(puzzle, "solving");

    let outcome = run(instance, config, &mut budget)?;

    let (status, certificate) = match outcome {
        SearchOutcome::Found(certificate) => {
            if !verify(instance, &certificate) {
                return Err(SolveError::CertificateRejected { puzzle });
            }
            info!(puzzle, iterations = budget.iterations(), "certificate found");
            (SolveStatus::Solved, Some(certificate))
        }
        SearchOutcome::Exhausted => {
            info!(puzzle, "no certificate exists");
            (SolveStatus::NoSolution, None)
        }
        SearchOutcome::BudgetExceeded(limit) => {
            warn!(puzzle, %limit, "search gave up");
            (SolveStatus::BudgetExceeded(limit), None)
        }
    };

    Ok(SolverResult {
        status,
        certificate,
        iterations: budget.iterations(),
        time_elapsed_ms: budget.elapsed_ms(),
    })
}

fn from_option<T>(found: Option<T>) -> SearchOutcome<T> {
    found.map_or(SearchOutcome::Exhausted, SearchOutcome::Found)
}

fn run(
    instance: &Instance,
    config: &SolverConfig,
    budget: &mut SearchBudget,
) -> Result<SearchOutcome<Certificate>> {
    let outcome = match instance {
        Instance::AnyEdge { edges } => from_option(edges.first().copied()).map(Certificate::Edge),

        Instance::AnyTriangle { edges } => {
            let graph = Graph::from_edges(edges.iter().copied());
            from_option(find_triangle(&graph)).map(Certificate::Triangle)
        }

        Instance::PlantedClique { edges, size } => {
            let graph = Graph::from_edges(edges.iter().copied());
            SearchOutcome::Found(Certificate::Clique(find_clique(&graph, *size)?))
        }

        Instance::ShortestPath {
            weights,
            source,
            target,
            bound,
        } => {
            let graph = Graph::from_weight_table(weights)?;
            // The optimum is the best any certificate can do.
            let path = dijkstra(&graph, *source, *target)
                .filter(|path| bound.map_or(true, |b| path.cost <= b));
            from_option(path).map(|path| Certificate::Path(path.vertices))
        }

        Instance::UnweightedShortestPath { edges, u, v, bound } => {
            let graph = Graph::from_edges(edges.iter().copied());
            let path = bfs_path(&graph, *u, *v).filter(|path| bound.map_or(true, |b| path.len() <= b));
            from_option(path).map(Certificate::Path)
        }

        Instance::AnyPath { edges } => {
            let graph = Graph::from_edges(edges.iter().copied());
            let (start, end) = Instance::any_path_endpoints(edges);
            from_option(bfs_path(&graph, start, end)).map(Certificate::Path)
        }

        Instance::EvenPath { edges, .. } | Instance::OddPath { edges, .. } => {
            let graph = Graph::from_edges(edges.iter().copied());
            let walk = instance
                .parity_endpoints()
                .and_then(|(start, end, parity)| parity_path(&graph, start, end, parity));
            from_option(walk).map(Certificate::Path)
        }

        Instance::GraphIsomorphism { g1, g2 } => {
            find_isomorphism(g1, g2, config.max_isomorphism_vertices, budget)
                .map(Certificate::Permutation)
        }

        Instance::Zarankiewicz { z, n, t } => {
            find_edge_set(*z, *n, *t, budget).map(Certificate::EdgeSet)
        }
    };

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Instance {
        serde_json::from_str(json).unwrap()
    }

    fn solve_default(json: &str) -> SolverResult {
        solve(&parse(json), &SolverConfig::default()).unwrap()
    }

    #[test]
    fn test_triangle_instance() {
        let result = solve_default(r#"{"puzzle": "AnyTriangle", "edges": [[0, 1], [1, 2], [2, 0]]}"#);

        assert!(result.solved());
        assert_eq!(result.certificate, Some(Certificate::Triangle([0, 1, 2])));
    }

    #[test]
    fn test_triangle_free_is_no_solution() {
        let result = solve_default(r#"{"puzzle": "AnyTriangle", "edges": [[0, 1], [1, 2], [0, 2]]}"#);

        assert_eq!(result.status, SolveStatus::NoSolution);
        assert_eq!(result.certificate, None);
    }

    #[test]
    fn test_shortest_path_instance() {
        let result = solve_default(
            r#"{"puzzle": "ShortestPath", "weights": [{"1": 20, "2": 1}, {"2": 2, "3": 5}, {"1": 10}], "bound": 11}"#,
        );

        assert_eq!(result.certificate, Some(Certificate::Path(vec![0, 2, 1])));
    }

    #[test]
    fn test_shortest_path_over_bound() {
        let result = solve_default(
            r#"{"puzzle": "ShortestPath", "weights": [{"1": 20, "2": 1}, {"2": 2, "3": 5}, {"1": 10}], "bound": 10}"#,
        );

        assert_eq!(result.status, SolveStatus::NoSolution);
    }

    #[test]
    fn test_negative_weight_is_precondition_error() {
        let instance = parse(r#"{"puzzle": "ShortestPath", "weights": [{"1": -3}]}"#);

        let err = solve(&instance, &SolverConfig::default()).unwrap_err();
        assert!(matches!(err, SolveError::InvalidWeight { from: 0, to: 1, .. }));
    }

    #[test]
    fn test_unweighted_shortest_path_instance() {
        let result = solve_default(
            r#"{"puzzle": "UnweightedShortestPath",
                "edges": [[0, 11], [0, 7], [7, 5], [0, 22], [11, 22], [11, 33], [22, 33]],
                "u": 0, "v": 33, "bound": 3}"#,
        );

        match result.certificate {
            Some(Certificate::Path(path)) => assert_eq!(path.len(), 3),
            other => panic!("unexpected certificate {:?}", other),
        }
    }

    #[test]
    fn test_endpoint_outside_graph_is_no_solution() {
        let unweighted = solve_default(
            r#"{"puzzle": "UnweightedShortestPath", "edges": [[0, 1], [1, 2]], "u": 0, "v": 99}"#,
        );
        assert_eq!(unweighted.status, SolveStatus::NoSolution);

        let odd = solve_default(r#"{"puzzle": "OddPath", "edges": [[0, 2]], "start": 7}"#);
        assert_eq!(odd.status, SolveStatus::NoSolution);
    }

    #[test]
    fn test_any_edge_and_any_path() {
        let edge = solve_default(r#"{"puzzle": "AnyEdge", "edges": [[4, 2], [1, 1]]}"#);
        assert_eq!(edge.certificate, Some(Certificate::Edge((4, 2))));

        let none = solve_default(r#"{"puzzle": "AnyEdge", "edges": []}"#);
        assert_eq!(none.status, SolveStatus::NoSolution);

        let path = solve_default(r#"{"puzzle": "AnyPath", "edges": [[0, 1], [1, 2], [2, 3]]}"#);
        assert_eq!(path.certificate, Some(Certificate::Path(vec![0, 1, 2, 3])));
    }

    #[test]
    fn test_parity_instances() {
        let even = solve_default(
            r#"{"puzzle": "EvenPath", "edges": [[0, 2], [0, 1], [2, 1], [2, 3], [1, 3]]}"#,
        );
        match even.certificate {
            Some(Certificate::Path(path)) => assert_eq!(path.len() % 2, 0),
            other => panic!("unexpected certificate {:?}", other),
        }

        let odd = solve_default(
            r#"{"puzzle": "OddPath", "edges": [[0, 1], [1, 2], [2, 3], [3, 1]], "end": 1}"#,
        );
        assert_eq!(odd.certificate, Some(Certificate::Path(vec![0, 1, 2, 3, 1])));
    }

    #[test]
    fn test_odd_path_ends_at_one_by_default() {
        // Largest vertex is 3; an odd walk 0 -> 3 would be [0, 1, 2, 3, 1, 2, 3].
        let result = solve_default(
            r#"{"puzzle": "OddPath", "edges": [[0, 1], [1, 2], [2, 3], [3, 1]]}"#,
        );

        assert_eq!(result.certificate, Some(Certificate::Path(vec![0, 1, 2, 3, 1])));
    }

    #[test]
    fn test_even_path_ends_at_largest_vertex_by_default() {
        let result = solve_default(r#"{"puzzle": "EvenPath", "edges": [[0, 1], [1, 2], [2, 3]]}"#);

        assert_eq!(result.certificate, Some(Certificate::Path(vec![0, 1, 2, 3])));
    }

    #[test]
    fn test_clique_instances() {
        let found = solve_default(
            r#"{"puzzle": "PlantedClique", "size": 3,
                "edges": [[0, 17], [0, 22], [17, 22], [17, 31], [22, 31], [31, 17]]}"#,
        );
        assert!(found.solved());

        let empty = solve_default(r#"{"puzzle": "PlantedClique", "size": 0, "edges": [[0, 1]]}"#);
        assert_eq!(empty.certificate, Some(Certificate::Clique(Vec::new())));

        let missing = parse(r#"{"puzzle": "PlantedClique", "size": 3, "edges": [[0, 1]]}"#);
        assert_eq!(
            solve(&missing, &SolverConfig::default()).unwrap_err(),
            SolveError::NoClique { size: 3 }
        );
    }

    #[test]
    fn test_isomorphism_instance() {
        let result = solve_default(
            r#"{"puzzle": "GraphIsomorphism",
                "g1": [[0, 1], [1, 2], [2, 3], [3, 4], [2, 5]],
                "g2": [[0, 4], [1, 5], [4, 1], [1, 2], [2, 3]]}"#,
        );

        assert!(result.solved());
        assert!(result.iterations > 0);
    }

    #[test]
    fn test_isomorphism_refused_when_too_large() {
        let instance = parse(r#"{"puzzle": "GraphIsomorphism", "g1": [[0, 5]], "g2": [[5, 0]]}"#);
        let config = SolverConfig {
            max_isomorphism_vertices: 4,
            ..SolverConfig::default()
        };

        let result = solve(&instance, &config).unwrap();
        assert_eq!(
            result.status,
            SolveStatus::BudgetExceeded(BudgetLimit::VertexCount { vertices: 6, max: 4 })
        );
        assert_eq!(result.certificate, None);
    }

    #[test]
    fn test_zarankiewicz_instance() {
        let result = solve_default(r#"{"puzzle": "Zarankiewicz", "z": 6, "n": 3, "t": 2}"#);
        assert!(result.solved());

        let config = SolverConfig {
            max_iterations: 3,
            ..SolverConfig::default()
        };
        let instance = parse(r#"{"puzzle": "Zarankiewicz", "z": 7, "n": 3, "t": 2}"#);
        let result = solve(&instance, &config).unwrap();
        assert_eq!(
            result.status,
            SolveStatus::BudgetExceeded(BudgetLimit::SearchSpace { candidates: 36, max: 3 })
        );
    }

    #[test]
    fn test_zarankiewicz_timeout_is_honored() {
        let config = SolverConfig {
            timeout: Duration::from_millis(100),
            max_iterations: u64::MAX,
            ..SolverConfig::default()
        };
        let instance = parse(r#"{"puzzle": "Zarankiewicz", "z": 1, "n": 22, "t": 11}"#);

        let result = solve(&instance, &config).unwrap();
        assert_eq!(result.status, SolveStatus::BudgetExceeded(BudgetLimit::Deadline));
        assert!(result.time_elapsed_ms < 5_000);
    }

    #[test]
    fn test_huge_timeout_is_accepted() {
        let config = SolverConfig {
            timeout: Duration::from_secs(u64::MAX),
            ..SolverConfig::default()
        };
        let instance = parse(r#"{"puzzle": "Zarankiewicz", "z": 6, "n": 3, "t": 2}"#);

        assert!(solve(&instance, &config).unwrap().solved());
    }

    #[test]
    fn test_rerun_is_stable() {
        let json = r#"{"puzzle": "UnweightedShortestPath",
                       "edges": [[0, 11], [0, 7], [7, 5], [0, 22], [11, 22], [11, 33], [22, 33]],
                       "u": 0, "v": 33}"#;

        assert_eq!(solve_default(json).certificate, solve_default(json).certificate);
    }
}
