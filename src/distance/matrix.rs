//! Dense distance matrix.

use crate::error::{Error, Result};
use crate::models::{Point, Tour};

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Built once from a point set and immutable thereafter. Symmetric in value
/// (`get(i, j) == get(j, i)`) though both orderings are stored and queryable.
///
/// # Examples
///
/// ```
/// use tsp_search::models::{Point, Tour};
/// use tsp_search::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points).unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
///
/// let tour = Tour::new(vec![0, 1, 2]).unwrap();
/// assert!((dm.tour_length(&tour) - 20.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the pairwise Euclidean distance matrix for a point set.
    ///
    /// Returns `InvalidInput` if `points` is empty: a tour over zero cities
    /// has no defined length, so the failure happens here rather than being
    /// silently carried through as 0.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::invalid_input(
                "cannot build a distance matrix from an empty point set",
            ));
        }
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Ok(Self { data, size: n })
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total length of the closed tour `tour[0] → ... → tour[n-1] → tour[0]`.
    ///
    /// Tours with fewer than two cities have length 0.
    ///
    /// # Panics
    ///
    /// Panics if the tour references a city index outside this matrix.
    pub fn tour_length(&self, tour: &Tour) -> f64 {
        let cities = tour.cities();
        let n = cities.len();
        if n < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        for i in 0..n {
            total += self.get(cities[i], cities[(i + 1) % n]);
        }
        total
    }
}
