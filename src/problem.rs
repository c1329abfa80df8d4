//! Problem definition and instance data for multi-vehicle routing.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading an instance file.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

/// A delivery location (or the depot) as an immutable 2-D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    /// Create a new location.
    pub fn new(x: f64, y: f64) -> Self {
        Location { x, y }
    }

    /// Euclidean distance to another location.
    pub fn distance(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A routing instance: the delivery locations, the shared depot, and the
/// fleet size. Pairwise distances are precomputed once since fitness
/// evaluation reads them for every individual of every generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub locations: Vec<Location>,
    pub depot: Location,
    pub num_vehicles: usize,
    distance_matrix: Vec<Vec<f64>>,
    depot_distances: Vec<f64>,
}

/// On-disk instance layout; distances are rebuilt after parsing.
#[derive(Deserialize)]
struct InstanceFile {
    name: String,
    locations: Vec<Location>,
    depot: Location,
    num_vehicles: usize,
}

impl Problem {
    /// Create a new problem instance.
    pub fn new(name: String, locations: Vec<Location>, depot: Location, num_vehicles: usize) -> Self {
        let distance_matrix = Self::compute_distance_matrix(&locations);
        let depot_distances = locations.iter().map(|loc| depot.distance(loc)).collect();

        Problem {
            name,
            locations,
            depot,
            num_vehicles,
            distance_matrix,
            depot_distances,
        }
    }

    /// Generate an instance with `num_locations` integer-valued coordinates
    /// drawn uniformly from [0, 100] and the depot at the center (50, 50).
    pub fn random_uniform<R: Rng>(num_locations: usize, num_vehicles: usize, rng: &mut R) -> Self {
        let locations = (0..num_locations)
            .map(|_| {
                Location::new(
                    rng.gen_range(0..=100) as f64,
                    rng.gen_range(0..=100) as f64,
                )
            })
            .collect();

        Problem::new(
            format!("random-{}x{}", num_locations, num_vehicles),
            locations,
            Location::new(50.0, 50.0),
            num_vehicles,
        )
    }

    /// Load an instance from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, InstanceError> {
        let file = File::open(path)?;
        let parsed: InstanceFile = serde_json::from_reader(BufReader::new(file))?;

        Ok(Problem::new(
            parsed.name,
            parsed.locations,
            parsed.depot,
            parsed.num_vehicles,
        ))
    }

    /// Number of delivery locations, excluding the depot.
    pub fn num_locations(&self) -> usize {
        self.locations.len()
    }

    /// Distance between two delivery locations by index.
    pub fn get_distance(&self, from: usize, to: usize) -> f64 {
        self.distance_matrix[from][to]
    }

    /// Distance between the depot and a delivery location by index.
    pub fn depot_distance(&self, location: usize) -> f64 {
        self.depot_distances[location]
    }

    fn compute_distance_matrix(locations: &[Location]) -> Vec<Vec<f64>> {
        let n = locations.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in 0..n {
                if i != j {
                    matrix[i][j] = locations[i].distance(&locations[j]);
                }
            }
        }

        matrix
    }
}
