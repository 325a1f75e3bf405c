//! Neighborhood move operators.
//!
//! - [`MoveOperator`] — the closed set of move strategies
//! - [`Neighbors`] — lazy iterator over a tour's neighbors

mod operator;
mod reversal;
mod swap;

pub use operator::{MoveOperator, Neighbors};
pub(crate) use reversal::reverse_section;
pub(crate) use swap::swap_positions;
