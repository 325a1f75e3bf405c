//! First-improvement hill climbing.

use log::{debug, info};
use rand::Rng;

use crate::error::{Error, Result};
use crate::models::Tour;
use crate::neighborhood::MoveOperator;

use super::{SearchResult, TspProblem};

/// Configuration for the hill-climbing drivers.
///
/// # Examples
///
/// ```
/// use tsp_search::search::HillclimbConfig;
///
/// let config = HillclimbConfig::new(5_000);
/// assert!(config.validate().is_ok());
/// assert!(HillclimbConfig::new(0).validate().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct HillclimbConfig {
    /// Total objective-evaluation budget.
    pub max_evaluations: u64,
}

impl HillclimbConfig {
    /// Creates a configuration with the given evaluation budget.
    pub fn new(max_evaluations: u64) -> Self {
        Self { max_evaluations }
    }

    /// Checks the configuration, failing loudly instead of defaulting.
    pub fn validate(&self) -> Result<()> {
        if self.max_evaluations == 0 {
            return Err(Error::configuration(
                "hillclimb requires a nonzero evaluation budget",
            ));
        }
        Ok(())
    }
}

/// Climbs from a random tour, moving to the first strictly improving
/// neighbor, until a local optimum is reached or the budget is spent.
///
/// Neighbors are pulled lazily from the operator's randomized enumeration;
/// candidates are never materialized ahead of need.
pub fn hillclimb<R: Rng>(
    problem: &TspProblem,
    operator: MoveOperator,
    config: &HillclimbConfig,
    rng: &mut R,
) -> Result<SearchResult> {
    config.validate()?;

    let mut best = problem.random_tour(rng);
    let mut best_score = problem.objective(&best);
    let mut evaluations: u64 = 1;

    'climb: while evaluations < config.max_evaluations {
        let mut moved = false;
        for candidate in operator.neighbors(&best, rng) {
            if evaluations >= config.max_evaluations {
                break 'climb;
            }
            let score = problem.objective(&candidate);
            evaluations += 1;
            if score > best_score {
                best = candidate;
                best_score = score;
                moved = true;
                debug!("hillclimb improved: score={best_score:.4} evaluations={evaluations}");
                break;
            }
        }
        if !moved {
            // Local optimum: the whole neighborhood was no better.
            break;
        }
    }

    info!("hillclimb finished: evaluations={evaluations} score={best_score:.4}");
    Ok(SearchResult {
        evaluations,
        score: best_score,
        best,
    })
}

/// Repeats [`hillclimb`] from fresh random tours until the shared budget is
/// exhausted, keeping the best tour over all restarts.
pub fn hillclimb_restarts<R: Rng>(
    problem: &TspProblem,
    operator: MoveOperator,
    config: &HillclimbConfig,
    rng: &mut R,
) -> Result<SearchResult> {
    config.validate()?;

    let mut evaluations: u64 = 0;
    let mut best: Option<(f64, Tour)> = None;

    while evaluations < config.max_evaluations {
        let run = HillclimbConfig::new(config.max_evaluations - evaluations);
        let result = hillclimb(problem, operator, &run, rng)?;
        evaluations += result.evaluations;
        if best.as_ref().is_none_or(|(score, _)| result.score > *score) {
            info!("restart found new best: score={:.4}", result.score);
            best = Some((result.score, result.best));
        }
    }

    // The budget is nonzero, so at least one climb ran.
    let (score, tour) = best.expect("at least one restart");
    Ok(SearchResult {
        evaluations,
        score,
        best: tour,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rectangle_problem() -> TspProblem {
        TspProblem::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(4.0, 3.0),
            Point::new(4.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_zero_budget_rejected() {
        let problem = rectangle_problem();
        let mut rng = SmallRng::seed_from_u64(41);
        let err = hillclimb(
            &problem,
            MoveOperator::ReversedSections,
            &HillclimbConfig::new(0),
            &mut rng,
        );
        assert!(matches!(err, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_converges_on_rectangle() {
        // The 4x3 rectangle's unique optimum is the perimeter, length 14;
        // segment reversal reaches it from any starting permutation.
        let problem = rectangle_problem();
        for seed in 0..10 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let result = hillclimb(
                &problem,
                MoveOperator::ReversedSections,
                &HillclimbConfig::new(500),
                &mut rng,
            )
            .unwrap();
            assert!(
                (result.best_length() - 14.0).abs() < 1e-9,
                "seed {seed} ended at {}",
                result.best_length()
            );
        }
    }

    #[test]
    fn test_respects_budget() {
        let problem = rectangle_problem();
        let mut rng = SmallRng::seed_from_u64(43);
        let result = hillclimb(
            &problem,
            MoveOperator::SwappedCities,
            &HillclimbConfig::new(5),
            &mut rng,
        )
        .unwrap();
        assert!(result.evaluations <= 5);
    }

    #[test]
    fn test_restarts_cover_budget() {
        let problem = rectangle_problem();
        let mut rng = SmallRng::seed_from_u64(44);
        let result = hillclimb_restarts(
            &problem,
            MoveOperator::ReversedSections,
            &HillclimbConfig::new(200),
            &mut rng,
        )
        .unwrap();
        assert!(result.evaluations >= 200);
        assert!((result.best_length() - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_city_instance() {
        let problem = TspProblem::new(vec![Point::new(1.0, 1.0)]).unwrap();
        let mut rng = SmallRng::seed_from_u64(45);
        let result = hillclimb(
            &problem,
            MoveOperator::ReversedSections,
            &HillclimbConfig::new(10),
            &mut rng,
        )
        .unwrap();
        assert_eq!(result.best.len(), 1);
        assert_eq!(result.score, 0.0);
    }
}
