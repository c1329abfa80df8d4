//! Unit tests for routes, route plans, and the objective.

use ga_mvrp::problem::{Location, Problem};
use ga_mvrp::split::Split;

/// The four corners of a 10x10 square with the depot in the middle.
fn create_square_problem(num_vehicles: usize) -> Problem {
    let locations = vec![
        Location::new(0.0, 0.0),
        Location::new(10.0, 0.0),
        Location::new(10.0, 10.0),
        Location::new(0.0, 10.0),
    ];

    Problem::new(
        "SquareProblem".to_string(),
        locations,
        Location::new(5.0, 5.0),
        num_vehicles,
    )
}

#[test]
fn test_distance_properties() {
    let a = Location::new(1.0, 2.0);
    let b = Location::new(4.0, 6.0);

    assert_eq!(a.distance(&b), 5.0);
    assert_eq!(a.distance(&b), b.distance(&a));
    assert_eq!(a.distance(&a), 0.0);
    assert!(b.distance(&a) >= 0.0);
}

#[test]
fn test_square_tour_total_distance() {
    let problem = create_square_problem(1);
    let plan = Split::decode(&[0, 1, 2, 3], &problem);

    // depot -> (0,0) -> (10,0) -> (10,10) -> (0,10) -> depot:
    // two diagonal legs of sqrt(50) plus three sides of 10
    let expected = 30.0 + 2.0 * 50.0_f64.sqrt();

    assert!((plan.total_distance() - expected).abs() < 1e-9);

    // A single vehicle cannot be imbalanced
    assert_eq!(plan.imbalance(), 0.0);
}

#[test]
fn test_imbalance_zero_for_equal_routes() {
    let locations = vec![Location::new(4.0, 5.0), Location::new(6.0, 5.0)];
    let problem = Problem::new(
        "MirrorProblem".to_string(),
        locations,
        Location::new(5.0, 5.0),
        2,
    );

    let plan = Split::decode(&[0, 1], &problem);

    // Both vehicles make a loop of length 2
    assert_eq!(plan.routes[0].distance, 2.0);
    assert_eq!(plan.routes[1].distance, 2.0);
    assert_eq!(plan.imbalance(), 0.0);
}

#[test]
fn test_imbalance_is_population_std_dev() {
    let locations = vec![Location::new(1.0, 0.0), Location::new(2.0, 0.0)];
    let problem = Problem::new(
        "UnevenProblem".to_string(),
        locations,
        Location::new(0.0, 0.0),
        2,
    );

    let plan = Split::decode(&[0, 1], &problem);

    // Route distances 2 and 4: mean 3, deviations 1 each, no Bessel
    // correction, so the standard deviation is exactly 1
    assert!((plan.routes[0].distance - 2.0).abs() < 1e-12);
    assert!((plan.routes[1].distance - 4.0).abs() < 1e-12);
    assert!((plan.imbalance() - 1.0).abs() < 1e-12);
}

#[test]
fn test_single_stop_route_distance() {
    let locations = vec![Location::new(3.0, 4.0)];
    let problem = Problem::new(
        "SingleStop".to_string(),
        locations,
        Location::new(0.0, 0.0),
        1,
    );

    let plan = Split::decode(&[0], &problem);

    // Out and back along the 3-4-5 triangle hypotenuse
    assert!((plan.routes[0].distance - 10.0).abs() < 1e-12);
}

#[test]
fn test_total_distance_sums_all_routes() {
    let problem = create_square_problem(2);
    let plan = Split::decode(&[0, 1, 2, 3], &problem);

    let summed: f64 = plan.routes.iter().map(|route| route.distance).sum();
    assert!((plan.total_distance() - summed).abs() < 1e-12);
}

#[test]
fn test_fitness_matches_plan() {
    let problem = create_square_problem(2);
    let plan = Split::decode(&[0, 1, 2, 3], &problem);

    let fitness = plan.fitness();
    assert!((fitness.total_distance - plan.total_distance()).abs() < 1e-12);
    assert!((fitness.imbalance - plan.imbalance()).abs() < 1e-12);
}
