//! Pairwise city exchange.

/// Builds the tour with the cities at positions `i` and `j` exchanged.
pub(crate) fn swap_positions(cities: &[usize], i: usize, j: usize) -> Vec<usize> {
    let mut copy = cities.to_vec();
    copy.swap(i, j);
    copy
}
