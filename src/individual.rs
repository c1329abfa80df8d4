//! Individual representation for the genetic algorithm population.

use crate::problem::Problem;
use crate::split::Split;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The two-component objective attached to an evaluated individual.
/// Both components are minimized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fitness {
    /// Sum of all route legs across the fleet, depot legs included.
    pub total_distance: f64,
    /// Population standard deviation of the per-vehicle route distances.
    pub imbalance: f64,
}

impl Fitness {
    /// Collapse the pair into a single priority value. Lower is better.
    pub fn scalar(&self, imbalance_weight: f64) -> f64 {
        self.total_distance + imbalance_weight * self.imbalance
    }

    /// Pareto dominance: no worse in both components, strictly better in one.
    pub fn dominates(&self, other: &Fitness) -> bool {
        self.total_distance <= other.total_distance
            && self.imbalance <= other.imbalance
            && (self.total_distance < other.total_distance || self.imbalance < other.imbalance)
    }

    /// Priority ordering used by selection and the hall of fame: dominance
    /// first, remaining ties broken by the weighted scalar. `Less` means
    /// strictly better.
    pub fn compare(&self, other: &Fitness, imbalance_weight: f64) -> Ordering {
        if self.dominates(other) {
            Ordering::Less
        } else if other.dominates(self) {
            Ordering::Greater
        } else {
            self.scalar(imbalance_weight)
                .partial_cmp(&other.scalar(imbalance_weight))
                .unwrap_or(Ordering::Equal)
        }
    }
}

/// An individual: a permutation of the location indices `[0, N)` plus the
/// fitness of that genome. The fitness is `None` until the genome has been
/// evaluated, and any genome change must clear it again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub genome: Vec<usize>,
    pub fitness: Option<Fitness>,
}

impl Individual {
    /// Create an individual from an explicit genome, fitness unset.
    pub fn new(genome: Vec<usize>) -> Self {
        Individual {
            genome,
            fitness: None,
        }
    }

    /// Create an individual with a uniformly shuffled genome of `len` indices.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        let mut genome: Vec<usize> = (0..len).collect();
        genome.shuffle(rng);
        Individual::new(genome)
    }

    /// Decode the genome into routes and store the resulting fitness.
    pub fn evaluate(&mut self, problem: &Problem) {
        let plan = Split::decode(&self.genome, problem);
        self.fitness = Some(plan.fitness());
    }

    /// Clear the stored fitness after a genome change.
    pub fn invalidate_fitness(&mut self) {
        self.fitness = None;
    }

    /// Whether the genome contains each index in `[0, len)` exactly once.
    /// A `false` here means a genetic operator is broken.
    pub fn is_valid_permutation(&self) -> bool {
        let mut seen = vec![false; self.genome.len()];

        for &gene in &self.genome {
            if gene >= seen.len() || seen[gene] {
                return false;
            }
            seen[gene] = true;
        }

        true
    }

    /// Scalar priority of this individual. Evaluation must have run first;
    /// comparing an unevaluated individual is a programming defect.
    pub fn priority(&self, imbalance_weight: f64) -> f64 {
        self.fitness
            .expect("individual compared before evaluation")
            .scalar(imbalance_weight)
    }

    /// Priority ordering against another evaluated individual.
    pub fn compare(&self, other: &Individual, imbalance_weight: f64) -> Ordering {
        let own = self.fitness.expect("individual compared before evaluation");
        let theirs = other
            .fitness
            .expect("individual compared before evaluation");
        own.compare(&theirs, imbalance_weight)
    }
}
