//! Greedy edge recombination crossover.
//!
//! # Algorithm
//!
//! 1. Build [`RouteChoices`]: the union of both parents' closed-loop edges.
//! 2. Walk greedily from a uniformly random start city. At each step the
//!    candidates are the current city's unvisited parent-edge neighbors;
//!    the one with the fewest *remaining unvisited* neighbors is taken
//!    (fewest options left, so it is least likely to strand later), with
//!    ties broken by a pre-shuffle of the candidate list.
//! 3. On a dead end (all parent-edge neighbors visited), fall back to a
//!    uniformly random unvisited city.
//!
//! The constructed child is what gets returned: handing back a copy of
//! `parent1` instead would reduce the crossover to a clone and leave the
//! genetic driver with mutation as its only source of variation.
//!
//! # Reference
//!
//! Whitley, Starkweather & Fuquay (1989). "Scheduling problems and traveling
//! salesmen: the genetic edge recombination operator", *ICGA '89*, 133-140.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::models::Tour;

use super::RouteChoices;

/// Combines two parent tours into a child tour that, fallback steps aside,
/// uses only edges present in at least one parent.
///
/// Returns `InvalidInput` if the parents differ in length or are empty.
/// (Each `Tour` is already a valid permutation of `0..n` by construction,
/// so equal length implies the same city set.)
///
/// # Examples
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use tsp_search::models::Tour;
/// use tsp_search::recombine::recombine;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let a = Tour::new(vec![0, 1, 2, 3, 4]).unwrap();
/// let b = Tour::new(vec![0, 2, 4, 1, 3]).unwrap();
/// let child = recombine(&a, &b, &mut rng).unwrap();
/// assert_eq!(child.len(), 5);
/// ```
pub fn recombine<R: Rng>(parent1: &Tour, parent2: &Tour, rng: &mut R) -> Result<Tour> {
    if parent1.len() != parent2.len() {
        return Err(Error::invalid_input(format!(
            "cannot recombine parents of different lengths ({} vs {})",
            parent1.len(),
            parent2.len()
        )));
    }
    if parent1.is_empty() {
        return Err(Error::invalid_input("cannot recombine empty tours"));
    }

    let choices = RouteChoices::from_parents(parent1, parent2);
    let cities = common_route(&choices, parent1, rng);
    Ok(Tour::from_permutation(cities))
}

/// Performs the greedy walk over the parent adjacency structure.
fn common_route<R: Rng>(choices: &RouteChoices, parent1: &Tour, rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    let start = parent1.cities()[rng.random_range(0..n)];

    let mut tour = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    tour.push(start);
    visited[start] = true;

    let mut current = start;
    while tour.len() < n {
        let next = match choose_next_neighbor(choices, &visited, current, rng) {
            Some(city) => city,
            None => {
                // Dead end: no unvisited city shares a parent edge with the
                // current one, so take any remaining city.
                let unvisited: Vec<usize> = (0..n).filter(|&c| !visited[c]).collect();
                unvisited[rng.random_range(0..unvisited.len())]
            }
        };
        tour.push(next);
        visited[next] = true;
        current = next;
    }
    tour
}

/// Picks the unvisited parent-edge neighbor of `city` with the fewest
/// remaining unvisited options, ties broken by shuffle order.
fn choose_next_neighbor<R: Rng>(
    choices: &RouteChoices,
    visited: &[bool],
    city: usize,
    rng: &mut R,
) -> Option<usize> {
    let mut candidates: Vec<usize> = choices
        .neighbors_of(city)
        .iter()
        .copied()
        .filter(|&c| !visited[c])
        .collect();
    if candidates.is_empty() {
        return None;
    }
    candidates.shuffle(rng);

    // First-encountered minimum wins, so the tie-break is the shuffle.
    let mut best = candidates[0];
    let mut best_degree = choices.remaining_degree(best, visited);
    for &candidate in &candidates[1..] {
        let degree = choices.remaining_degree(candidate, visited);
        if degree < best_degree {
            best = candidate;
            best_degree = degree;
        }
    }
    Some(best)
}
