//! Problem instance facade for the search drivers.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::{Point, Tour};

/// A TSP instance: the city coordinates plus their precomputed distance
/// matrix.
///
/// Built once per point set; the matrix is never recomputed or mutated.
/// Drivers maximize [`objective`](Self::objective), which is the negative
/// tour length, so shorter tours score higher.
///
/// # Examples
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use tsp_search::models::Point;
/// use tsp_search::search::TspProblem;
///
/// let problem = TspProblem::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 3.0),
///     Point::new(4.0, 3.0),
///     Point::new(4.0, 0.0),
/// ]).unwrap();
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let tour = problem.random_tour(&mut rng);
/// assert_eq!(tour.len(), 4);
/// assert!(problem.objective(&tour) <= -14.0);
/// ```
#[derive(Debug, Clone)]
pub struct TspProblem {
    points: Vec<Point>,
    distances: DistanceMatrix,
}

impl TspProblem {
    /// Builds an instance from city coordinates.
    ///
    /// Input order defines the city indices `0..n`. Returns `InvalidInput`
    /// when `points` is empty.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        let distances = DistanceMatrix::from_points(&points)?;
        Ok(Self { points, distances })
    }

    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.points.len()
    }

    /// The city coordinates, in index order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The precomputed distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Draws a uniformly random tour over this instance's cities.
    pub fn random_tour<R: Rng>(&self, rng: &mut R) -> Tour {
        Tour::random(self.points.len(), rng)
    }

    /// Total length of the closed tour.
    pub fn tour_length(&self, tour: &Tour) -> f64 {
        self.distances.tour_length(tour)
    }

    /// Search objective: negative tour length (maximized by drivers).
    pub fn objective(&self, tour: &Tour) -> f64 {
        -self.distances.tour_length(tour)
    }
}
