//! Lazy random permutation of `0..n`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Yields the values `0..n` in uniformly random order, one at a time.
///
/// This is a Fisher-Yates shuffle performed incrementally: each `next()`
/// swaps one more position into place, so stopping early costs nothing
/// beyond the O(n) value buffer. Each construction produces an independent
/// fresh permutation; the iterator is not restartable.
///
/// The iterator owns a [`SmallRng`] forked from the caller's generator, so
/// the caller's generator stays usable while the sequence is being drawn.
///
/// # Examples
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use tsp_search::sampler::RandomSequence;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let mut seen: Vec<usize> = RandomSequence::new(5, &mut rng).collect();
/// seen.sort_unstable();
/// assert_eq!(seen, vec![0, 1, 2, 3, 4]);
/// ```
#[derive(Debug)]
pub struct RandomSequence {
    values: Vec<usize>,
    next: usize,
    rng: SmallRng,
}

impl RandomSequence {
    /// Creates a fresh random sequence over `0..n`.
    pub fn new<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self {
            values: (0..n).collect(),
            next: 0,
            rng: SmallRng::from_rng(rng),
        }
    }
}

impl Iterator for RandomSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next >= self.values.len() {
            return None;
        }
        let j = self.rng.random_range(self.next..self.values.len());
        self.values.swap(self.next, j);
        let value = self.values[self.next];
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RandomSequence {}
