//! # GA-MVRP
//!
//! A generational genetic algorithm for balanced multi-vehicle routing:
//! partition delivery locations among a fleet departing from and
//! returning to a shared depot, minimizing total travel distance while
//! keeping per-vehicle workloads level.
//!
//! Individuals encode a visiting order as a permutation of location
//! indices; a fixed round-robin split assigns genome slots to vehicles,
//! so evolution optimizes slot placement and per-vehicle order. Fitness
//! is the pair (total distance, inter-vehicle imbalance), both minimized.
//! The whole run draws from one seeded random source, so a fixed seed
//! reproduces the population, statistics, and winner exactly.

pub mod config;
pub mod genetic;
pub mod individual;
pub mod population;
pub mod problem;
pub mod solution;
pub mod split;
pub mod utils;

use crate::config::{Config, ConfigError};
use crate::genetic::Genetic;
use crate::individual::Individual;
use crate::population::Population;
use crate::problem::Problem;
use crate::utils::{GenerationStats, RunSummary};

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

/// The evolution engine: owns the population, the hall of fame, the
/// per-generation statistics, and the single seeded random source.
pub struct GaAlgorithm {
    pub problem: Problem,
    pub config: Config,
    pub population: Population,
    /// Best individual seen across all generations so far
    pub hall_of_fame: Option<Individual>,
    /// One record per generation, appended after replacement
    pub stats: Vec<GenerationStats>,
    pub generation: usize,
    pub run_time: Duration,
    genetic: Genetic,
    rng: ChaCha8Rng,
    start_time: Instant,
}

impl GaAlgorithm {
    /// Create a new engine for the given problem and configuration.
    ///
    /// Out-of-range configuration is a caller error and is rejected here,
    /// before anything runs.
    pub fn new(problem: Problem, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        if problem.num_vehicles == 0 {
            return Err(ConfigError::NumVehicles);
        }

        if problem.num_locations() == 0 {
            return Err(ConfigError::NoLocations);
        }

        let rng = ChaCha8Rng::seed_from_u64(config.random_seed);

        Ok(GaAlgorithm {
            problem,
            config,
            population: Population::new(),
            hall_of_fame: None,
            stats: Vec::new(),
            generation: 0,
            run_time: Duration::from_secs(0),
            genetic: Genetic,
            rng,
            start_time: Instant::now(),
        })
    }

    /// Build and evaluate the initial population and seed the hall of
    /// fame from it.
    pub fn initialize(&mut self) {
        self.population.initialize(
            self.problem.num_locations(),
            self.config.population_size,
            &mut self.rng,
        );
        self.population.evaluate(&self.problem);

        self.hall_of_fame = self
            .population
            .best(self.config.imbalance_weight)
            .cloned();

        info!(
            "initialized population of {} for {} locations / {} vehicles",
            self.population.len(),
            self.problem.num_locations(),
            self.problem.num_vehicles
        );
    }

    /// Run one generation: select, vary, evaluate, replace, then update
    /// the hall of fame and append statistics. `initialize` must have
    /// run first.
    pub fn evolve(&mut self) {
        let weight = self.config.imbalance_weight;

        // Select
        let mut offspring = self.population.select_tournament(
            self.config.population_size,
            self.config.tournament_size,
            weight,
            &mut self.rng,
        );

        // Vary: cross adjacent pairs, then mutate each offspring
        for pair in offspring.chunks_exact_mut(2) {
            if self.rng.gen::<f64>() < self.config.crossover_prob {
                let (first, second) = pair.split_at_mut(1);
                self.genetic.crossover(
                    &mut first[0].genome,
                    &mut second[0].genome,
                    &mut self.rng,
                );
                first[0].invalidate_fitness();
                second[0].invalidate_fitness();
            }
        }

        for individual in &mut offspring {
            if self.rng.gen::<f64>() < self.config.mutation_prob {
                self.genetic.mutate(
                    &mut individual.genome,
                    self.config.per_gene_mutation_rate,
                    &mut self.rng,
                );
                individual.invalidate_fitness();
            }
        }

        for individual in &offspring {
            debug_assert!(
                individual.is_valid_permutation(),
                "genetic operator produced an invalid permutation"
            );
        }

        // Replace the whole population, then score the changed genomes
        self.population.individuals = offspring;
        self.population.evaluate(&self.problem);

        // Hall of fame accepts only a strictly better priority
        if let Some(best) = self.population.best(weight) {
            let improved = match &self.hall_of_fame {
                Some(current) => best.compare(current, weight) == std::cmp::Ordering::Less,
                None => true,
            };

            if improved {
                self.hall_of_fame = Some(best.clone());
            }
        }

        let (mean_priority, min_priority) = self.population.priority_stats(weight);
        self.stats.push(GenerationStats {
            generation: self.generation,
            mean_priority,
            min_priority,
        });

        debug!(
            "gen {:>4}  min {:.2}  mean {:.2}  diversity {:.2}",
            self.generation,
            min_priority,
            mean_priority,
            self.population.diversity()
        );

        self.generation += 1;
    }

    /// Run the full loop for the configured number of generations and
    /// return the hall-of-fame individual.
    pub fn run(&mut self) -> &Individual {
        self.start_time = Instant::now();

        self.initialize();

        for _ in 0..self.config.generations {
            self.evolve();
        }

        self.run_time = self.start_time.elapsed();

        let best = self.hall_of_fame.as_ref().unwrap();
        info!(
            "finished {} generations in {}, best priority {:.2}",
            self.generation,
            utils::format_duration(self.run_time),
            best.priority(self.config.imbalance_weight)
        );

        best
    }

    /// Summarize the finished run.
    pub fn summary(&self) -> RunSummary {
        let weight = self.config.imbalance_weight;
        let best_fitness = self
            .hall_of_fame
            .as_ref()
            .and_then(|individual| individual.fitness);

        RunSummary {
            generations: self.generation,
            runtime: self.run_time,
            best_total_distance: best_fitness.map_or(f64::NAN, |f| f.total_distance),
            best_imbalance: best_fitness.map_or(f64::NAN, |f| f.imbalance),
            best_priority: best_fitness.map_or(f64::NAN, |f| f.scalar(weight)),
            final_mean_priority: self
                .stats
                .last()
                .map_or(f64::NAN, |stats| stats.mean_priority),
            final_diversity: self.population.diversity(),
        }
    }
}
