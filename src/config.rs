//! Configuration parameters for the genetic algorithm.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected before the search starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    PopulationSize,
    #[error("{field} must lie within [0, 1], got {value}")]
    Probability { field: &'static str, value: f64 },
    #[error("tournament_size must be between 1 and population_size ({population_size}), got {tournament_size}")]
    TournamentSize {
        tournament_size: usize,
        population_size: usize,
    },
    #[error("imbalance_weight must be non-negative, got {0}")]
    ImbalanceWeight(f64),
    #[error("num_vehicles must be at least 1")]
    NumVehicles,
    #[error("instance must contain at least one location")]
    NoLocations,
}

/// Behavioral constants of the evolution loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of individuals kept across generations (P)
    pub population_size: usize,
    /// Number of generations to run (G)
    pub generations: usize,
    /// Probability of crossing each adjacent parent pair
    pub crossover_prob: f64,
    /// Probability of attempting mutation on each offspring
    pub mutation_prob: f64,
    /// Per-gene swap probability within a mutation attempt
    pub per_gene_mutation_rate: f64,
    /// Number of entrants per selection tournament
    pub tournament_size: usize,
    /// Weight of the imbalance component in the scalar priority
    pub imbalance_weight: f64,
    /// Seed for the single random source driving the whole run
    pub random_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            population_size: 300,
            generations: 300,
            crossover_prob: 0.7,
            mutation_prob: 0.2,
            per_gene_mutation_rate: 0.05,
            tournament_size: 3,
            imbalance_weight: 1.0,
            random_seed: 42,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Set the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Set the crossover probability.
    pub fn with_crossover_prob(mut self, prob: f64) -> Self {
        self.crossover_prob = prob;
        self
    }

    /// Set the mutation probability.
    pub fn with_mutation_prob(mut self, prob: f64) -> Self {
        self.mutation_prob = prob;
        self
    }

    /// Set the per-gene mutation rate.
    pub fn with_per_gene_mutation_rate(mut self, rate: f64) -> Self {
        self.per_gene_mutation_rate = rate;
        self
    }

    /// Set the tournament size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Set the imbalance weight.
    pub fn with_imbalance_weight(mut self, weight: f64) -> Self {
        self.imbalance_weight = weight;
        self
    }

    /// Set the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Reject out-of-range parameters, naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::PopulationSize);
        }

        for (field, value) in [
            ("crossover_prob", self.crossover_prob),
            ("mutation_prob", self.mutation_prob),
            ("per_gene_mutation_rate", self.per_gene_mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(ConfigError::Probability { field, value });
            }
        }

        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(ConfigError::TournamentSize {
                tournament_size: self.tournament_size,
                population_size: self.population_size,
            });
        }

        if self.imbalance_weight < 0.0 || self.imbalance_weight.is_nan() {
            return Err(ConfigError::ImbalanceWeight(self.imbalance_weight));
        }

        Ok(())
    }
}
