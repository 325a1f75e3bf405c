//! Move operator selection and the lazy neighbor iterator.

use rand::Rng;

use crate::models::Tour;
use crate::sampler::AllPairs;

use super::{reverse_section, swap_positions};

/// The available neighborhood move strategies.
///
/// Selected once at startup; every strategy maps a tour to a lazy sequence
/// of distinct neighboring tours.
///
/// # Examples
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use tsp_search::models::Tour;
/// use tsp_search::neighborhood::MoveOperator;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let tour = Tour::new(vec![0, 1, 2, 3]).unwrap();
///
/// for neighbor in MoveOperator::SwappedCities.neighbors(&tour, &mut rng) {
///     assert_ne!(neighbor, tour);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOperator {
    /// Reverse the closed-loop segment between two positions (2-opt style).
    ReversedSections,
    /// Exchange the cities at two positions.
    SwappedCities,
}

impl MoveOperator {
    /// Returns a fresh lazy iterator over the tour's neighbors.
    ///
    /// The iterator draws its position pairs from a randomized [`AllPairs`]
    /// enumeration, so candidates arrive in a different order on every call.
    /// It owns an RNG forked from `rng`, leaving the caller's generator free
    /// while candidates are being pulled.
    pub fn neighbors<R: Rng>(&self, tour: &Tour, rng: &mut R) -> Neighbors {
        Neighbors {
            pairs: AllPairs::new(tour.len(), rng),
            tour: tour.clone(),
            operator: *self,
        }
    }
}

/// Lazy iterator over the distinct neighbors of one tour.
///
/// Finite and exhaustible: `ReversedSections` yields up to `n(n-1)`
/// candidates, `SwappedCities` exactly `n(n-1)/2`. Consumers typically stop
/// pulling long before exhaustion. Never yields the input tour itself, and
/// every yielded tour is a valid permutation.
#[derive(Debug)]
pub struct Neighbors {
    pairs: AllPairs,
    tour: Tour,
    operator: MoveOperator,
}

impl Iterator for Neighbors {
    type Item = Tour;

    fn next(&mut self) -> Option<Tour> {
        loop {
            let (i, j) = self.pairs.next()?;
            match self.operator {
                MoveOperator::ReversedSections => {
                    if i == j {
                        continue;
                    }
                    let candidate = reverse_section(self.tour.cities(), i, j);
                    // Wraparound reversals can reproduce the input tour.
                    if candidate != self.tour.cities() {
                        return Some(Tour::from_permutation(candidate));
                    }
                }
                MoveOperator::SwappedCities => {
                    // Only i < j; the symmetric pair builds the same tour.
                    if i < j {
                        let candidate = swap_positions(self.tour.cities(), i, j);
                        return Some(Tour::from_permutation(candidate));
                    }
                }
            }
        }
    }
}
