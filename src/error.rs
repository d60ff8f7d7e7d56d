//! Solver error types.
//!
//! Only precondition violations are errors. An instance that simply has no
//! certificate is reported through `Option` / [`crate::search::SearchOutcome`],
//! never through this type.

use thiserror::Error;

use crate::graph::Vertex;

/// Misuse of a solver: malformed input or parameters that break the
/// guarantees the solver relies on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// Edge weight that Dijkstra cannot handle.
    #[error("Invalid weight {weight} on edge ({from}, {to}): weights must be finite and non-negative")]
    InvalidWeight { from: Vertex, to: Vertex, weight: f64 },

    /// The clique search exhausted without reaching the requested size.
    #[error("No clique of size {size} exists in the graph")]
    NoClique { size: usize },

    /// A solver produced a certificate its verification predicate rejects.
    #[error("Certificate for {puzzle} failed verification")]
    CertificateRejected { puzzle: &'static str },
}

pub type Result<T> = std::result::Result<T, SolveError>;
