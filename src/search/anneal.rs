//! Simulated annealing with geometric cooling.

use log::{debug, info};
use rand::Rng;

use crate::error::{Error, Result};
use crate::neighborhood::MoveOperator;

use super::{SearchResult, TspProblem};

/// Configuration for simulated annealing.
///
/// There are no defaults for the cooling schedule: a missing or nonsensical
/// schedule is a configuration error, never a silent fallback.
///
/// # Examples
///
/// ```
/// use tsp_search::search::AnnealConfig;
///
/// let config = AnnealConfig::new(10_000, 100.0, 0.995);
/// assert!(config.validate().is_ok());
/// assert!(AnnealConfig::new(10_000, 100.0, 1.5).validate().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Total objective-evaluation budget.
    pub max_evaluations: u64,
    /// Initial temperature.
    pub start_temp: f64,
    /// Geometric cooling factor applied after every accepted move.
    pub alpha: f64,
}

impl AnnealConfig {
    /// Creates an annealing configuration.
    pub fn new(max_evaluations: u64, start_temp: f64, alpha: f64) -> Self {
        Self {
            max_evaluations,
            start_temp,
            alpha,
        }
    }

    /// Checks the configuration, failing loudly instead of defaulting.
    pub fn validate(&self) -> Result<()> {
        if self.max_evaluations == 0 {
            return Err(Error::configuration(
                "anneal requires a nonzero evaluation budget",
            ));
        }
        if !self.start_temp.is_finite() || self.start_temp <= 0.0 {
            return Err(Error::configuration(format!(
                "start temperature must be positive, got {}",
                self.start_temp
            )));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(Error::configuration(format!(
                "cooling factor must lie in (0, 1), got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

/// Kirkpatrick acceptance: improving moves are always taken, worsening moves
/// with probability `exp(delta / temperature)`.
fn acceptance_probability(current: f64, candidate: f64, temperature: f64) -> f64 {
    if candidate > current {
        1.0
    } else {
        ((candidate - current) / temperature).exp()
    }
}

/// Anneals from a random tour: pulls neighbors lazily, accepts by the
/// Kirkpatrick criterion, and cools geometrically (`T ← alpha·T`) after
/// every accepted move. The best tour ever seen is tracked separately from
/// the current one and returned.
pub fn anneal<R: Rng>(
    problem: &TspProblem,
    operator: MoveOperator,
    config: &AnnealConfig,
    rng: &mut R,
) -> Result<SearchResult> {
    config.validate()?;

    let mut current = problem.random_tour(rng);
    let mut current_score = problem.objective(&current);
    let mut best = current.clone();
    let mut best_score = current_score;
    let mut evaluations: u64 = 1;
    let mut temperature = config.start_temp;

    'anneal: while evaluations < config.max_evaluations {
        let mut accepted = false;
        for candidate in operator.neighbors(&current, rng) {
            if evaluations >= config.max_evaluations {
                break 'anneal;
            }
            let score = problem.objective(&candidate);
            evaluations += 1;

            if score > best_score {
                best = candidate.clone();
                best_score = score;
                debug!("anneal new best: score={best_score:.4} temperature={temperature:.4}");
            }

            if rng.random::<f64>() < acceptance_probability(current_score, score, temperature) {
                current = candidate;
                current_score = score;
                accepted = true;
                break;
            }
        }
        if !accepted {
            // Every neighbor was rejected; nothing left to explore.
            break;
        }
        temperature *= config.alpha;
    }

    info!("anneal finished: evaluations={evaluations} score={best_score:.4}");
    Ok(SearchResult {
        evaluations,
        score: best_score,
        best,
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
    fn test_acceptance_probability() {
        assert_eq!(acceptance_probability(-10.0, -5.0, 1.0), 1.0);
        let p = acceptance_probability(-5.0, -10.0, 5.0);
        assert!((p - (-1.0f64).exp()).abs() < 1e-12);
        // Freezing temperature rejects all worsening moves.
        assert!(acceptance_probability(-5.0, -10.0, 1e-300) < 1e-10);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(AnnealConfig::new(0, 10.0, 0.9).validate().is_err());
        assert!(AnnealConfig::new(100, 0.0, 0.9).validate().is_err());
        assert!(AnnealConfig::new(100, -1.0, 0.9).validate().is_err());
        assert!(AnnealConfig::new(100, 10.0, 0.0).validate().is_err());
        assert!(AnnealConfig::new(100, 10.0, 1.0).validate().is_err());
        assert!(AnnealConfig::new(100, f64::NAN, 0.9).validate().is_err());
    }

    #[test]
    fn test_finds_rectangle_optimum() {
        let problem = rectangle_problem();
        let mut rng = SmallRng::seed_from_u64(51);
        let result = anneal(
            &problem,
            MoveOperator::ReversedSections,
            &AnnealConfig::new(2_000, 10.0, 0.9),
            &mut rng,
        )
        .unwrap();
        assert!((result.best_length() - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_respects_budget() {
        let problem = rectangle_problem();
        let mut rng = SmallRng::seed_from_u64(52);
        let result = anneal(
            &problem,
            MoveOperator::SwappedCities,
            &AnnealConfig::new(7, 10.0, 0.9),
            &mut rng,
        )
        .unwrap();
        assert!(result.evaluations <= 7);
    }

    #[test]
    fn test_best_no_worse_than_current() {
        let problem = rectangle_problem();
        let mut rng = SmallRng::seed_from_u64(53);
        let result = anneal(
            &problem,
            MoveOperator::ReversedSections,
            &AnnealConfig::new(300, 50.0, 0.95),
            &mut rng,
        )
        .unwrap();
        // Score is the best ever seen, so it is at least a valid tour score.
        assert!(result.score <= 0.0);
        assert_eq!(result.best.len(), 4);
    }
}
