//! Command-line front end: generate or load an instance, run the search,
//! report the winning routes.

use clap::Parser;
use ga_mvrp::config::Config;
use ga_mvrp::problem::Problem;
use ga_mvrp::split::Split;
use ga_mvrp::utils::{print_route_visualization, save_solution};
use ga_mvrp::GaAlgorithm;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ga_mvrp", about = "Balanced multi-vehicle routing via genetic search")]
struct Args {
    /// Number of random delivery locations to generate
    #[arg(long, default_value_t = 20)]
    locations: usize,

    /// Number of vehicles in the fleet
    #[arg(long, default_value_t = 3)]
    vehicles: usize,

    /// JSON instance file; overrides random generation
    #[arg(long)]
    instance: Option<PathBuf>,

    /// Population size (P)
    #[arg(long, default_value_t = 300)]
    population: usize,

    /// Number of generations (G)
    #[arg(long, default_value_t = 300)]
    generations: usize,

    /// Probability of crossing each adjacent parent pair
    #[arg(long, default_value_t = 0.7)]
    crossover_prob: f64,

    /// Probability of attempting mutation on each offspring
    #[arg(long, default_value_t = 0.2)]
    mutation_prob: f64,

    /// Per-gene swap probability within a mutation attempt
    #[arg(long, default_value_t = 0.05)]
    gene_rate: f64,

    /// Tournament size for parent selection
    #[arg(long, default_value_t = 3)]
    tournament: usize,

    /// Weight of the imbalance objective in the scalar priority
    #[arg(long, default_value_t = 1.0)]
    imbalance_weight: f64,

    /// Random seed; fixes locations and the whole search
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Write the winning routes to this file
    #[arg(long)]
    save: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let problem = match &args.instance {
        Some(path) => {
            println!("Loading instance from: {}", path.display());
            Problem::from_json_file(path)?
        }
        None => {
            let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
            Problem::random_uniform(args.locations, args.vehicles, &mut rng)
        }
    };

    println!(
        "Instance {}: {} locations, {} vehicles",
        problem.name,
        problem.num_locations(),
        problem.num_vehicles
    );

    let config = Config::new()
        .with_population_size(args.population)
        .with_generations(args.generations)
        .with_crossover_prob(args.crossover_prob)
        .with_mutation_prob(args.mutation_prob)
        .with_per_gene_mutation_rate(args.gene_rate)
        .with_tournament_size(args.tournament)
        .with_imbalance_weight(args.imbalance_weight)
        .with_random_seed(args.seed);

    let mut algorithm = GaAlgorithm::new(problem, config)?;
    let best = algorithm.run().clone();

    println!("{}", algorithm.summary().format());
    println!();

    let plan = Split::decode(&best.genome, &algorithm.problem);
    print_route_visualization(&plan, &algorithm.problem);

    if let (Some(path), Some(fitness)) = (&args.save, best.fitness) {
        save_solution(&plan, &fitness, &algorithm.problem, path)?;
        println!("Solution saved to: {}", path.display());
    }

    Ok(())
}
