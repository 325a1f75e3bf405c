//! Randomized index sampling.
//!
//! - [`RandomSequence`] — lazy Fisher-Yates permutation of `0..n`
//! - [`AllPairs`] — all `n²` ordered index pairs in randomized order

mod pairs;
mod sequence;

pub use pairs::AllPairs;
pub use sequence::RandomSequence;
