//! Benchmarks for the genetic routing engine.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ga_mvrp::config::Config;
use ga_mvrp::population::Population;
use ga_mvrp::problem::{Location, Problem};
use ga_mvrp::GaAlgorithm;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Create a benchmark problem of the given size.
fn create_benchmark_problem(size: usize) -> Problem {
    let grid = (size as f64).sqrt().ceil() as usize;
    let locations = (0..size)
        .map(|i| {
            let row = i / grid;
            let col = i % grid;
            Location::new(col as f64 * 10.0, row as f64 * 10.0)
        })
        .collect();

    Problem::new(
        format!("BenchProblem_{}", size),
        locations,
        Location::new(50.0, 50.0),
        (size / 7).max(1),
    )
}

fn benchmark_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");

    for size in [20, 50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = create_benchmark_problem(size);
            let mut rng = ChaCha8Rng::seed_from_u64(42);

            let mut population = Population::new();
            population.initialize(problem.num_locations(), 300, &mut rng);

            b.iter(|| {
                for individual in &mut population.individuals {
                    individual.invalidate_fitness();
                }
                population.evaluate(&problem);
            });
        });
    }

    group.finish();
}

fn benchmark_short_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("short_run");
    group.sample_size(10);

    for size in [20, 50].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = create_benchmark_problem(size);
            let config = Config::new()
                .with_population_size(100)
                .with_generations(20);

            b.iter(|| {
                let mut algorithm =
                    GaAlgorithm::new(problem.clone(), config.clone()).unwrap();
                algorithm.run();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_evaluation, benchmark_short_run);
criterion_main!(benches);
