//! Unit tests for the route decoder.

use ga_mvrp::problem::{Location, Problem};
use ga_mvrp::split::Split;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Creates a test problem with six locations on a line and a central depot.
fn create_line_problem(num_vehicles: usize) -> Problem {
    let locations = (0..6)
        .map(|i| Location::new((i + 1) as f64 * 10.0, 0.0))
        .collect();

    Problem::new(
        "LineProblem".to_string(),
        locations,
        Location::new(0.0, 0.0),
        num_vehicles,
    )
}

#[test]
fn test_round_robin_assignment() {
    let problem = create_line_problem(2);
    let genome = vec![0, 1, 2, 3, 4, 5];

    let plan = Split::decode(&genome, &problem);

    assert_eq!(plan.routes.len(), 2);
    assert_eq!(plan.routes[0].stops, vec![0, 2, 4]);
    assert_eq!(plan.routes[1].stops, vec![1, 3, 5]);
}

#[test]
fn test_assignment_follows_genome_positions_not_values() {
    let problem = create_line_problem(2);
    let genome = vec![5, 1, 4, 0, 3, 2];

    let plan = Split::decode(&genome, &problem);

    // Even positions go to vehicle 0, odd positions to vehicle 1,
    // keeping genome order within each vehicle
    assert_eq!(plan.routes[0].stops, vec![5, 4, 3]);
    assert_eq!(plan.routes[1].stops, vec![1, 0, 2]);
}

#[test]
fn test_single_vehicle_gets_full_genome_order() {
    let problem = create_line_problem(1);
    let genome = vec![3, 0, 5, 1, 4, 2];

    let plan = Split::decode(&genome, &problem);

    assert_eq!(plan.routes.len(), 1);
    assert_eq!(plan.routes[0].stops, genome);
}

#[test]
fn test_decoder_coverage() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for num_vehicles in 1..=7 {
        let problem = create_line_problem(num_vehicles);
        let mut genome: Vec<usize> = (0..6).collect();
        genome.shuffle(&mut rng);

        let plan = Split::decode(&genome, &problem);

        let mut visited: Vec<usize> = plan
            .routes
            .iter()
            .flat_map(|route| route.stops.iter().copied())
            .collect();
        visited.sort_unstable();

        assert_eq!(
            visited,
            (0..6).collect::<Vec<usize>>(),
            "every location visited exactly once with {} vehicles",
            num_vehicles
        );
    }
}

#[test]
fn test_more_vehicles_than_locations() {
    let locations = vec![Location::new(10.0, 0.0), Location::new(0.0, 10.0)];
    let problem = Problem::new(
        "SparseProblem".to_string(),
        locations,
        Location::new(0.0, 0.0),
        4,
    );

    let plan = Split::decode(&[0, 1], &problem);

    assert_eq!(plan.routes.len(), 4);
    assert_eq!(plan.routes[0].stops, vec![0]);
    assert_eq!(plan.routes[1].stops, vec![1]);

    // Idle vehicles decode to the degenerate depot-to-depot loop
    assert!(plan.routes[2].is_empty());
    assert!(plan.routes[3].is_empty());
    assert_eq!(plan.routes[2].distance, 0.0);
    assert_eq!(plan.routes[3].distance, 0.0);
}

#[test]
fn test_decoded_distances_are_computed() {
    let problem = create_line_problem(3);
    let plan = Split::decode(&[0, 1, 2, 3, 4, 5], &problem);

    for route in &plan.routes {
        // Two stops per vehicle on the positive x axis: out to the
        // farther stop and straight back
        assert!(route.distance > 0.0);
    }

    // Vehicle 0 visits locations 0 (x=10) and 3 (x=40): 10 + 30 + 40
    assert!((plan.routes[0].distance - 80.0).abs() < 1e-9);
}
