//! Randomized enumeration of ordered index pairs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::RandomSequence;

/// Yields every ordered pair `(i, j)` with `i, j < n` exactly once, in
/// randomized order.
///
/// For each `i` drawn from one [`RandomSequence`], a fresh independent
/// sequence is iterated for `j`. This is a full enumeration of the pair
/// space — not sampling with replacement — but it never materializes the
/// `n²` cross product: memory stays O(n) no matter how early the consumer
/// stops pulling.
///
/// # Examples
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use tsp_search::sampler::AllPairs;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// assert_eq!(AllPairs::new(3, &mut rng).count(), 9);
/// assert_eq!(AllPairs::new(0, &mut rng).count(), 0);
/// ```
#[derive(Debug)]
pub struct AllPairs {
    n: usize,
    outer: RandomSequence,
    current: Option<(usize, RandomSequence)>,
    rng: SmallRng,
}

impl AllPairs {
    /// Creates a fresh randomized pair enumeration over `0..n`.
    pub fn new<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut rng = SmallRng::from_rng(rng);
        let outer = RandomSequence::new(n, &mut rng);
        Self {
            n,
            outer,
            current: None,
            rng,
        }
    }
}

impl Iterator for AllPairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        loop {
            if let Some((i, inner)) = &mut self.current {
                if let Some(j) = inner.next() {
                    return Some((*i, j));
                }
            }
            let i = self.outer.next()?;
            let inner = RandomSequence::new(self.n, &mut self.rng);
            self.current = Some((i, inner));
        }
    }
}
