//! Domain model types.
//!
//! - [`Point`] — city coordinates
//! - [`Tour`] — validated cyclic permutation of city indices

mod point;
mod tour;

pub use point::Point;
pub use tour::Tour;
