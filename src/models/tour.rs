//! Immutable tour representation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A closed tour: a permutation of the city indices `0..n`.
///
/// The last city is implicitly connected back to the first. Tours are
/// immutable value objects — every transformation produces a new `Tour`,
/// so they can be shared freely between search branches.
///
/// # Examples
///
/// ```
/// use tsp_search::models::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1]).unwrap();
/// assert_eq!(tour.cities(), &[2, 0, 1]);
/// assert_eq!(tour.len(), 3);
///
/// // Not a permutation of 0..3:
/// assert!(Tour::new(vec![0, 0, 1]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<usize>", try_from = "Vec<usize>")]
pub struct Tour {
    cities: Vec<usize>,
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = Error;

    /// Deserialization funnels through [`Tour::new`], so a decoded tour
    /// satisfies the same permutation invariant as a constructed one.
    fn try_from(cities: Vec<usize>) -> Result<Self> {
        Tour::new(cities)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.cities
    }
}

impl Tour {
    /// Creates a tour from a city sequence, validating that it is a
    /// permutation of `0..n`.
    pub fn new(cities: Vec<usize>) -> Result<Self> {
        let n = cities.len();
        let mut seen = vec![false; n];
        for &city in &cities {
            if city >= n {
                return Err(Error::invalid_input(format!(
                    "city index {city} out of range for a {n}-city tour"
                )));
            }
            if seen[city] {
                return Err(Error::invalid_input(format!(
                    "city {city} appears more than once in tour"
                )));
            }
            seen[city] = true;
        }
        Ok(Self { cities })
    }

    /// Creates a uniformly random tour over `n` cities (Fisher-Yates).
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut cities: Vec<usize> = (0..n).collect();
        for i in (1..n).rev() {
            let j = rng.random_range(0..=i);
            cities.swap(i, j);
        }
        Self { cities }
    }

    /// Wraps a sequence already known to be a permutation.
    ///
    /// Used by the neighborhood and recombination operators, which construct
    /// permutations from permutations.
    pub(crate) fn from_permutation(cities: Vec<usize>) -> Self {
        debug_assert!({
            let mut sorted = cities.clone();
            sorted.sort_unstable();
            sorted.iter().copied().eq(0..cities.len())
        });
        Self { cities }
    }

    /// Returns the city sequence.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if the tour has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Iterates the undirected edges of the closed loop in canonical
    /// `(min, max)` form, including the wrapping edge from the last city
    /// back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.cities.len();
        (0..n).map(move |i| {
            let a = self.cities[i];
            let b = self.cities[(i + 1) % n];
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        })
    }
}
