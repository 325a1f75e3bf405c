//! Optimization drivers.
//!
//! - [`TspProblem`] — instance facade (points, distances, objective)
//! - [`hillclimb`] / [`hillclimb_restarts`] — first-improvement ascent
//! - [`anneal`] — simulated annealing with geometric cooling
//! - [`evolve`] — genetic algorithm with edge recombination

mod anneal;
mod evolve;
mod hillclimb;
mod problem;
mod result;

pub use anneal::{anneal, AnnealConfig};
pub use evolve::{evolve, EvolveConfig};
pub use hillclimb::{hillclimb, hillclimb_restarts, HillclimbConfig};
pub use problem::TspProblem;
pub use result::SearchResult;
