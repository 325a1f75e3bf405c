//! Segment reversal on a closed loop.

/// Builds the tour obtained by reversing the closed-loop segment between
/// positions `i` and `j` inclusive.
///
/// For `i < j` this reverses the contiguous slice `[i..=j]`. For `i > j`
/// the reversed segment wraps past the end: it starts at `i + 1`, runs to
/// the last position, and continues from the first position up to `j - 1`.
/// The wraparound case is built as two sub-reversals laid out as
/// `rev(tail) ++ middle ++ rev(head)`, which reverses the wrapping segment
/// up to rotation of the closed loop.
///
/// `i == j` is the caller's responsibility to skip.
pub(crate) fn reverse_section(cities: &[usize], i: usize, j: usize) -> Vec<usize> {
    if i < j {
        let mut copy = cities.to_vec();
        copy[i..=j].reverse();
        copy
    } else {
        let mut copy = Vec::with_capacity(cities.len());
        copy.extend(cities[i + 1..].iter().rev());
        copy.extend(&cities[j..=i]);
        copy.extend(cities[..j].iter().rev());
        copy
    }
}
