//! Budgets for exhaustive searches.
//!
//! Permutation and subset searches consult a [`SearchBudget`] once per
//! candidate (and once per block of work inside a costly candidate check), so
//! a search that would run past its deadline or iteration cap stops and
//! reports [`SearchOutcome::BudgetExceeded`] instead of hanging.

use std::fmt;
use std::time::{Duration, Instant};

/// Which limit stopped a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetLimit {
    /// Wall-clock deadline passed.
    Deadline,
    /// Candidate count reached the cap.
    Iterations,
    /// Instance too large for the solver to attempt at all.
    VertexCount { vertices: usize, max: usize },
    /// Worst-case candidate count above the iteration cap; not attempted.
    SearchSpace { candidates: u64, max: u64 },
}

impl fmt::Display for BudgetLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetLimit::Deadline => write!(f, "deadline reached"),
            BudgetLimit::Iterations => write!(f, "iteration cap reached"),
            BudgetLimit::VertexCount { vertices, max } => {
                write!(f, "{} vertices exceeds the limit of {}", vertices, max)
            }
            BudgetLimit::SearchSpace { candidates, max } => {
                write!(f, "{} candidates exceeds the iteration cap of {}", candidates, max)
            }
        }
    }
}

/// Result of a bounded search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<T> {
    Found(T),
    /// Every candidate was tried; none qualifies.
    Exhausted,
    /// Stopped (or refused) before the search space was covered.
    BudgetExceeded(BudgetLimit),
}

impl<T> SearchOutcome<T> {
    pub fn found(self) -> Option<T> {
        match self {
            SearchOutcome::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> SearchOutcome<U> {
        match self {
            SearchOutcome::Found(value) => SearchOutcome::Found(f(value)),
            SearchOutcome::Exhausted => SearchOutcome::Exhausted,
            SearchOutcome::BudgetExceeded(limit) => SearchOutcome::BudgetExceeded(limit),
        }
    }
}

/// Deadline plus iteration cap, shared by one solver invocation.
#[derive(Debug, Clone)]
pub struct SearchBudget {
    start: Instant,
    /// `None` when the timeout reaches past what `Instant` can represent.
    deadline: Option<Instant>,
    max_iterations: u64,
    iterations: u64,
}

impl SearchBudget {
    pub fn new(timeout: Duration, max_iterations: u64) -> Self {
        let start = Instant::now();
        Self {
            start,
            deadline: start.checked_add(timeout),
            max_iterations,
            iterations: 0,
        }
    }

    /// No deadline and no cap.
    pub fn unlimited() -> Self {
        Self {
            start: Instant::now(),
            deadline: None,
            max_iterations: u64::MAX,
            iterations: 0,
        }
    }

    /// Count one candidate. Returns the limit hit, if any.
    pub fn tick(&mut self) -> Option<BudgetLimit> {
        if self.iterations >= self.max_iterations {
            return Some(BudgetLimit::Iterations);
        }
        if self.deadline.is_some_and(|deadline| Instant::now() > deadline) {
            return Some(BudgetLimit::Deadline);
        }
        self.iterations += 1;
        None
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
