//! Edge recombination crossover.
//!
//! - [`RouteChoices`] — adjacency union of two parents' edges
//! - [`recombine`] — greedy edge-preserving child construction

mod crossover;
mod route_choices;

pub use crossover::recombine;
pub use route_choices::RouteChoices;
