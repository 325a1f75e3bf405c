//! Parent adjacency structure for edge recombination.

use std::collections::HashSet;

use crate::models::Tour;

/// For each city, the set of cities reachable by a single edge in either
/// of two parent tours.
///
/// Derived and ephemeral: rebuilt for every recombination call. Duplicate
/// edges across the parents collapse (sets, not multisets).
///
/// # Examples
///
/// ```
/// use tsp_search::models::Tour;
/// use tsp_search::recombine::RouteChoices;
///
/// let a = Tour::new(vec![0, 1, 2, 3]).unwrap();
/// let b = Tour::new(vec![0, 2, 1, 3]).unwrap();
/// let choices = RouteChoices::from_parents(&a, &b);
///
/// // 0 neighbors 1 and 3 in parent a, 2 and 3 in parent b.
/// let mut from_zero: Vec<usize> = choices.neighbors_of(0).iter().copied().collect();
/// from_zero.sort_unstable();
/// assert_eq!(from_zero, vec![1, 2, 3]);
/// ```
#[derive(Debug)]
pub struct RouteChoices {
    choices: Vec<HashSet<usize>>,
}

impl RouteChoices {
    /// Builds the adjacency union of both parents' closed-loop edges.
    ///
    /// Both parents must have the same length; [`recombine`](super::recombine)
    /// validates this before construction.
    pub fn from_parents(parent1: &Tour, parent2: &Tour) -> Self {
        let mut choices = vec![HashSet::new(); parent1.len()];
        for parent in [parent1, parent2] {
            for (a, b) in parent.edges() {
                choices[a].insert(b);
                choices[b].insert(a);
            }
        }
        Self { choices }
    }

    /// Cities reachable from `city` via a parent edge.
    pub fn neighbors_of(&self, city: usize) -> &HashSet<usize> {
        &self.choices[city]
    }

    /// Count of `city`'s parent-edge neighbors not yet visited.
    pub(crate) fn remaining_degree(&self, city: usize, visited: &[bool]) -> usize {
        self.choices[city].iter().filter(|&&c| !visited[c]).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(set: &HashSet<usize>) -> Vec<usize> {
        let mut v: Vec<usize> = set.iter().copied().collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_identical_parents_give_cycle() {
        let tour = Tour::new(vec![0, 1, 2, 3, 4]).unwrap();
        let choices = RouteChoices::from_parents(&tour, &tour);
        assert_eq!(sorted(choices.neighbors_of(0)), vec![1, 4]);
        assert_eq!(sorted(choices.neighbors_of(2)), vec![1, 3]);
        assert_eq!(sorted(choices.neighbors_of(4)), vec![0, 3]);
    }

    #[test]
    fn test_union_of_parents() {
        let a = Tour::new(vec![0, 1, 2, 3]).unwrap();
        let b = Tour::new(vec![0, 2, 1, 3]).unwrap();
        let choices = RouteChoices::from_parents(&a, &b);
        assert_eq!(sorted(choices.neighbors_of(1)), vec![0, 2, 3]);
        assert_eq!(sorted(choices.neighbors_of(2)), vec![0, 1, 3]);
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let a = Tour::new(vec![0, 1, 2]).unwrap();
        let choices = RouteChoices::from_parents(&a, &a);
        // Triangle: every city has exactly the two other cities.
        for city in 0..3 {
            assert_eq!(choices.neighbors_of(city).len(), 2);
        }
    }

    #[test]
    fn test_remaining_degree() {
        let tour = Tour::new(vec![0, 1, 2, 3]).unwrap();
        let choices = RouteChoices::from_parents(&tour, &tour);
        let mut visited = vec![false; 4];
        assert_eq!(choices.remaining_degree(0, &visited), 2);
        visited[1] = true;
        assert_eq!(choices.remaining_degree(0, &visited), 1);
        visited[3] = true;
        assert_eq!(choices.remaining_degree(0, &visited), 0);
    }
}
