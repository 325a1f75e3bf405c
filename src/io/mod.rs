//! Coordinate file parsing.

mod coords;

pub use coords::read_coords;
