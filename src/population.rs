//! Population management for the genetic algorithm.

use crate::individual::Individual;
use crate::problem::Problem;
use rand::seq::index::sample;
use rand::Rng;
use std::cmp::Ordering;

/// The fixed-size collection of individuals evolved across generations.
pub struct Population {
    pub individuals: Vec<Individual>,
}

impl Population {
    /// Create an empty population.
    pub fn new() -> Self {
        Population {
            individuals: Vec::new(),
        }
    }

    /// Fill the population with `size` independently shuffled genomes.
    pub fn initialize<R: Rng>(&mut self, genome_len: usize, size: usize, rng: &mut R) {
        self.individuals.clear();
        self.individuals.reserve(size);

        for _ in 0..size {
            self.individuals.push(Individual::random(genome_len, rng));
        }
    }

    /// Evaluate every individual whose fitness does not match its current
    /// genome (those with no stored fitness at all).
    pub fn evaluate(&mut self, problem: &Problem) {
        for individual in &mut self.individuals {
            if individual.fitness.is_none() {
                individual.evaluate(problem);
            }
        }
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Tournament selection: draw `count` parents, each the winner of a
    /// tournament among `tournament_size` distinct entrants. Entrants are
    /// drawn without replacement within a tournament and with replacement
    /// across tournaments.
    pub fn select_tournament<R: Rng>(
        &self,
        count: usize,
        tournament_size: usize,
        imbalance_weight: f64,
        rng: &mut R,
    ) -> Vec<Individual> {
        let mut parents = Vec::with_capacity(count);

        for _ in 0..count {
            let winner = sample(rng, self.individuals.len(), tournament_size)
                .iter()
                .map(|idx| &self.individuals[idx])
                .min_by(|a, b| a.compare(b, imbalance_weight))
                .expect("tournament drawn from empty population");

            parents.push(winner.clone());
        }

        parents
    }

    /// The best individual by priority order, if any.
    pub fn best(&self, imbalance_weight: f64) -> Option<&Individual> {
        self.individuals
            .iter()
            .min_by(|a, b| a.compare(b, imbalance_weight))
    }

    /// Mean and minimum scalar priority over the population.
    pub fn priority_stats(&self, imbalance_weight: f64) -> (f64, f64) {
        let priorities: Vec<f64> = self
            .individuals
            .iter()
            .map(|individual| individual.priority(imbalance_weight))
            .collect();

        let mean = priorities.iter().sum::<f64>() / priorities.len() as f64;
        let min = priorities
            .iter()
            .copied()
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .unwrap_or(f64::INFINITY);

        (mean, min)
    }

    /// Mean pairwise positional difference between genomes, a coarse
    /// measure of how much of the search space the population still spans.
    /// Sampled over the first 20 individuals to stay cheap per generation.
    pub fn diversity(&self) -> f64 {
        let window = self.individuals.len().min(20);

        if window < 2 {
            return 0.0;
        }

        let mut total_diff = 0.0;
        let mut pairs = 0;

        for i in 0..window {
            for j in i + 1..window {
                let diff = self.individuals[i]
                    .genome
                    .iter()
                    .zip(self.individuals[j].genome.iter())
                    .filter(|(a, b)| a != b)
                    .count();

                total_diff += diff as f64;
                pairs += 1;
            }
        }

        total_diff / pairs as f64
    }
}

impl Default for Population {
    fn default() -> Self {
        Population::new()
    }
}
