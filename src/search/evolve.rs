//! Generational genetic algorithm with edge recombination.

use log::{debug, info};
use rand::Rng;

use crate::error::{Error, Result};
use crate::models::Tour;
use crate::neighborhood::MoveOperator;
use crate::recombine::recombine;

use super::{SearchResult, TspProblem};

/// Configuration for the genetic driver.
///
/// The population size has no default: the caller must choose one, and a
/// missing or undersized population is a configuration error.
///
/// # Examples
///
/// ```
/// use tsp_search::search::EvolveConfig;
///
/// let config = EvolveConfig::new(10_000, 50)
///     .with_tournament_size(3)
///     .with_mutation_probability(0.2);
/// assert!(config.validate().is_ok());
/// assert!(EvolveConfig::new(10_000, 1).validate().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EvolveConfig {
    /// Total objective-evaluation budget.
    pub max_evaluations: u64,
    /// Number of individuals per generation.
    pub population_size: usize,
    /// Contenders drawn per tournament selection.
    pub tournament_size: usize,
    /// Probability of mutating a child with one random neighborhood move.
    pub mutation_probability: f64,
}

impl EvolveConfig {
    /// Creates a configuration with the given budget and population size.
    ///
    /// Tournament size defaults to 2 and mutation probability to 0.1;
    /// both can be overridden with the builder methods.
    pub fn new(max_evaluations: u64, population_size: usize) -> Self {
        Self {
            max_evaluations,
            population_size,
            tournament_size: 2,
            mutation_probability: 0.1,
        }
    }

    /// Sets the number of contenders per tournament.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Sets the per-child mutation probability.
    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability;
        self
    }

    /// Checks the configuration, failing loudly instead of defaulting.
    pub fn validate(&self) -> Result<()> {
        if self.max_evaluations == 0 {
            return Err(Error::configuration(
                "evolve requires a nonzero evaluation budget",
            ));
        }
        if self.population_size < 2 {
            return Err(Error::configuration(format!(
                "population size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(Error::configuration(format!(
                "tournament size must lie in 1..={}, got {}",
                self.population_size, self.tournament_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(Error::configuration(format!(
                "mutation probability must lie in [0, 1], got {}",
                self.mutation_probability
            )));
        }
        Ok(())
    }
}

/// Evolves a population of random tours: tournament selection picks two
/// parents, edge recombination builds the child, and with the configured
/// probability the child takes one random neighborhood move. One elite
/// individual survives each generation unchanged.
pub fn evolve<R: Rng>(
    problem: &TspProblem,
    operator: MoveOperator,
    config: &EvolveConfig,
    rng: &mut R,
) -> Result<SearchResult> {
    config.validate()?;

    let mut evaluations: u64 = 0;
    let mut population: Vec<(f64, Tour)> = Vec::with_capacity(config.population_size);
    for _ in 0..config.population_size {
        let tour = problem.random_tour(rng);
        let score = problem.objective(&tour);
        evaluations += 1;
        population.push((score, tour));
        if evaluations >= config.max_evaluations {
            break;
        }
    }

    let mut best = population
        .iter()
        .max_by(|a, b| a.0.partial_cmp(&b.0).expect("scores are not NaN"))
        .cloned()
        .expect("population is non-empty");

    while evaluations < config.max_evaluations {
        let mut next_generation = Vec::with_capacity(config.population_size);
        next_generation.push(best.clone());

        while next_generation.len() < config.population_size
            && evaluations < config.max_evaluations
        {
            let parent1 = tournament(&population, config.tournament_size, rng).clone();
            let parent2 = tournament(&population, config.tournament_size, rng).clone();
            let mut child = recombine(&parent1, &parent2, rng)?;

            if rng.random::<f64>() < config.mutation_probability {
                if let Some(mutant) = operator.neighbors(&child, rng).next() {
                    child = mutant;
                }
            }

            let score = problem.objective(&child);
            evaluations += 1;
            if score > best.0 {
                best = (score, child.clone());
                debug!("evolve new best: score={:.4} evaluations={evaluations}", best.0);
            }
            next_generation.push((score, child));
        }

        population = next_generation;
    }

    info!(
        "evolve finished: evaluations={evaluations} score={:.4}",
        best.0
    );
    Ok(SearchResult {
        evaluations,
        score: best.0,
        best: best.1,
    })
}

/// Selects the best of `size` uniformly drawn contenders.
fn tournament<'a, R: Rng>(
    population: &'a [(f64, Tour)],
    size: usize,
    rng: &mut R,
) -> &'a Tour {
    let mut winner = &population[rng.random_range(0..population.len())];
    for _ in 1..size {
        let contender = &population[rng.random_range(0..population.len())];
        if contender.0 > winner.0 {
            winner = contender;
        }
    }
    &winner.1
}
