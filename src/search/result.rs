//! Driver result type.

use serde::Serialize;

use crate::models::Tour;

/// Outcome of one driver run.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Objective evaluations spent.
    pub evaluations: u64,
    /// Best objective seen (negative tour length).
    pub score: f64,
    /// Best tour found.
    pub best: Tour,
}

impl SearchResult {
    /// Length of the best tour (the negated score).
    pub fn best_length(&self) -> f64 {
        -self.score
    }
}
