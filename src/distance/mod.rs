//! Distance matrix and tour cost evaluation.

mod matrix;

pub use matrix::DistanceMatrix;
