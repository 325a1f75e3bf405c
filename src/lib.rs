//! # tsp-search
//!
//! Local-search solver for the Euclidean Traveling Salesman Problem:
//! neighborhood generation, edge-recombination crossover, and the drivers
//! that consume them.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Point, Tour)
//! - [`distance`] — Precomputed distance matrix and tour cost
//! - [`sampler`] — Lazy randomized index and index-pair enumeration
//! - [`neighborhood`] — Move operators (segment reversal, pairwise swap)
//! - [`recombine`] — Edge recombination crossover
//! - [`search`] — Hill climbing, simulated annealing, genetic drivers
//! - [`io`] — Coordinate file parsing
//! - [`render`] — SVG tour drawing

pub mod distance;
pub mod error;
pub mod io;
pub mod models;
pub mod neighborhood;
pub mod recombine;
pub mod render;
pub mod sampler;
pub mod search;

pub use error::{Error, Result};
