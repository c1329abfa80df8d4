//! Decoded route representation and the routing objective.

use crate::problem::Problem;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::individual::Fitness;

/// The ordered stops of one vehicle. The depot is implicit at both ends
/// and is accounted for in `distance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    /// Location indices in visiting order (depot excluded)
    pub stops: Vec<usize>,
    /// Length of the full loop: depot -> stops... -> depot
    pub distance: f64,
}

impl Route {
    /// Create a new, empty route.
    pub fn new() -> Self {
        Route {
            stops: Vec::new(),
            distance: 0.0,
        }
    }

    /// Recompute the loop distance. An empty route is the degenerate
    /// depot-to-depot loop with distance zero.
    pub fn calculate_distance(&mut self, problem: &Problem) {
        if self.stops.is_empty() {
            self.distance = 0.0;
            return;
        }

        let mut total = problem.depot_distance(self.stops[0]);

        for i in 0..self.stops.len() - 1 {
            total += problem.get_distance(self.stops[i], self.stops[i + 1]);
        }

        total += problem.depot_distance(self.stops[self.stops.len() - 1]);
        self.distance = total;
    }

    /// Check if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::new()
    }
}

/// A full decoding of one genome: one route per vehicle. Recomputed on
/// demand, never stored on the individual.
#[derive(Clone, Serialize, Deserialize)]
pub struct RoutePlan {
    pub routes: Vec<Route>,
}

impl RoutePlan {
    /// Sum of all route distances.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(|route| route.distance).sum()
    }

    /// Population standard deviation of the per-route distances. Zero
    /// exactly when every vehicle travels the same distance.
    pub fn imbalance(&self) -> f64 {
        let n = self.routes.len() as f64;
        let mean = self.total_distance() / n;
        let variance = self
            .routes
            .iter()
            .map(|route| {
                let dev = route.distance - mean;
                dev * dev
            })
            .sum::<f64>()
            / n;

        variance.sqrt()
    }

    /// The two-component objective of this plan.
    pub fn fitness(&self) -> Fitness {
        Fitness {
            total_distance: self.total_distance(),
            imbalance: self.imbalance(),
        }
    }
}

impl fmt::Debug for RoutePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RoutePlan:")?;
        writeln!(f, "  Total Distance: {:.2}", self.total_distance())?;
        writeln!(f, "  Imbalance: {:.2}", self.imbalance())?;

        for (i, route) in self.routes.iter().enumerate() {
            writeln!(
                f,
                "  Vehicle {}: {:?} (Distance: {:.2})",
                i, route.stops, route.distance
            )?;
        }

        Ok(())
    }
}
