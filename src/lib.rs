//! Exact certificate-finding solvers for graph puzzle instances.
//!
//! Each solver takes a graph description (edge pairs, optional weights) plus
//! scalar parameters and returns a certificate (a path, triangle, clique,
//! permutation or edge set) that the matching predicate in [`verify`]
//! accepts, or an explicit "no solution". Exhaustive searches run under a
//! [`SearchBudget`] and give up rather than guess.

pub mod clique;
pub mod error;
pub mod graph;
pub mod instance;
pub mod isomorphism;
pub mod parity;
pub mod path;
pub mod search;
pub mod solver;
pub mod triangle;
pub mod verify;
pub mod zarankiewicz;

#[cfg(test)]
mod testing;

// Re-export main types
pub use error::SolveError;
pub use graph::{Edge, Graph, Vertex};
pub use instance::{Certificate, Instance};
pub use parity::Parity;
pub use search::{BudgetLimit, SearchBudget, SearchOutcome};
pub use solver::{solve, SolveStatus, SolverConfig, SolverResult};
