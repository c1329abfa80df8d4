//! Statistics and reporting helpers for the search.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::individual::Fitness;
use crate::problem::Problem;
use crate::solution::RoutePlan;

/// Convergence record for one generation: mean and minimum scalar
/// priority over the population after replacement. Generation indices
/// are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: usize,
    pub mean_priority: f64,
    pub min_priority: f64,
}

/// Format a duration for run reports.
pub fn format_duration(duration: Duration) -> String {
    if duration.as_secs() == 0 {
        return format!("{}ms", duration.as_millis());
    }

    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Write the decoded routes of a winning individual to a file.
pub fn save_solution<P: AsRef<Path>>(
    plan: &RoutePlan,
    fitness: &Fitness,
    problem: &Problem,
    path: P,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Routing solution for instance: {}", problem.name)?;
    writeln!(file, "Total Distance: {:.2}", fitness.total_distance)?;
    writeln!(file, "Imbalance: {:.2}", fitness.imbalance)?;
    writeln!(file, "Vehicles: {}", plan.routes.len())?;
    writeln!(file)?;

    for (i, route) in plan.routes.iter().enumerate() {
        if route.is_empty() {
            writeln!(file, "Vehicle #{}: depot -> depot (idle)", i + 1)?;
            continue;
        }

        let stops = route.stops.iter().map(|stop| stop.to_string()).join(" -> ");
        writeln!(file, "Vehicle #{}: depot -> {} -> depot", i + 1, stops)?;
        writeln!(file, "  Distance: {:.2}", route.distance)?;
    }

    Ok(())
}

/// Summary of a finished run.
pub struct RunSummary {
    pub generations: usize,
    pub runtime: Duration,
    pub best_total_distance: f64,
    pub best_imbalance: f64,
    pub best_priority: f64,
    pub final_mean_priority: f64,
    pub final_diversity: f64,
}

impl RunSummary {
    /// Format the summary as a string.
    pub fn format(&self) -> String {
        format!(
            "Run Summary:
- Generations: {}
- Runtime: {}
- Best Total Distance: {:.2}
- Best Imbalance: {:.2}
- Best Priority: {:.2}
- Final Mean Priority: {:.2}
- Final Diversity: {:.2}",
            self.generations,
            format_duration(self.runtime),
            self.best_total_distance,
            self.best_imbalance,
            self.best_priority,
            self.final_mean_priority,
            self.final_diversity
        )
    }
}

/// Print an ASCII rendering of a route plan to the console, one symbol
/// per vehicle, `D` for the depot.
pub fn print_route_visualization(plan: &RoutePlan, problem: &Problem) {
    println!("Route visualization for {}", problem.name);
    println!("Total Distance: {:.2}", plan.total_distance());
    println!("Vehicles: {}", plan.routes.len());
    println!();

    let mut min_x = problem.depot.x;
    let mut min_y = problem.depot.y;
    let mut max_x = problem.depot.x;
    let mut max_y = problem.depot.y;

    for location in &problem.locations {
        min_x = min_x.min(location.x);
        min_y = min_y.min(location.y);
        max_x = max_x.max(location.x);
        max_y = max_y.max(location.y);
    }

    let span_x = (max_x - min_x).max(f64::EPSILON);
    let span_y = (max_y - min_y).max(f64::EPSILON);

    let width = 80;
    let height = 25;

    let mut grid = vec![vec![' '; width]; height];

    let route_symbols = ['*', '+', 'x', '#', '@', '&', '%', '=', '^', '$'];

    for (v, route) in plan.routes.iter().enumerate() {
        let symbol = route_symbols[v % route_symbols.len()];

        for &stop in &route.stops {
            let location = &problem.locations[stop];
            let col = ((location.x - min_x) / span_x * (width as f64 - 1.0)) as usize;
            let row = ((location.y - min_y) / span_y * (height as f64 - 1.0)) as usize;

            grid[row][col] = symbol;
        }
    }

    let depot_col = ((problem.depot.x - min_x) / span_x * (width as f64 - 1.0)) as usize;
    let depot_row = ((problem.depot.y - min_y) / span_y * (height as f64 - 1.0)) as usize;
    grid[depot_row][depot_col] = 'D';

    for row in grid.iter().rev() {
        for &cell in row {
            print!("{}", cell);
        }
        println!();
    }
    println!();

    println!("Legend:");
    println!("D - Depot");
    for (v, _) in plan.routes.iter().enumerate().take(route_symbols.len()) {
        println!("{} - Vehicle #{}", route_symbols[v], v + 1);
    }
    println!();
}
