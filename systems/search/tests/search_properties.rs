use std::collections::HashSet;

use planar_route_core::{segments_cross, Bounds, NodeId, Point, Route, SearchOutcome};
use planar_route_system_generation::{corner_nearest_node, PointGeneration};
use planar_route_system_search::{SearchConfig, ShortestRouteSearch};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SET_SIZE: usize = 7;
const SEEDS: [u64; 4] = [11, 29, 1337, 0x00ab_cdef];

#[test]
fn solved_routes_visit_every_node_exactly_once() {
    for seed in SEEDS {
        let (points, route, _) = solve_generated(seed);
        let mut seen = HashSet::new();
        for node in route.nodes() {
            assert!(seen.insert(*node), "seed {seed}: node {node:?} repeated");
            assert!(node.index() < points.len(), "seed {seed}: node out of range");
        }
        assert_eq!(seen.len(), points.len(), "seed {seed}: nodes missing");
    }
}

#[test]
fn solved_routes_begin_at_the_selected_start() {
    for seed in SEEDS {
        let bounds = Bounds::from_extent(10.0, 10.0);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let points = PointGeneration::new().generate(SET_SIZE, bounds, &mut rng);
        let start = corner_nearest_node(&points, bounds).expect("non-empty set");

        let (_, route, _) = solve(&points, start);
        assert_eq!(route.first(), Some(start), "seed {seed}: start mismatch");
    }
}

#[test]
fn solved_routes_contain_no_crossing_edge_pairs() {
    for seed in SEEDS {
        let (points, route, _) = solve_generated(seed);
        let nodes = route.nodes();

        for i in 0..nodes.len().saturating_sub(1) {
            for j in (i + 2)..nodes.len().saturating_sub(1) {
                let a = points[nodes[i].index()];
                let b = points[nodes[i + 1].index()];
                let c = points[nodes[j].index()];
                let d = points[nodes[j + 1].index()];
                assert!(
                    !segments_cross(a, b, c, d),
                    "seed {seed}: edges {i} and {j} cross"
                );
            }
        }
    }
}

#[test]
fn reported_length_matches_the_route() {
    for seed in SEEDS {
        let (points, route, length) = solve_generated(seed);
        let recomputed = route.length(&points).expect("route indexes the set");
        assert!(
            (length - recomputed).abs() < 1e-9,
            "seed {seed}: reported {length}, recomputed {recomputed}"
        );
    }
}

#[test]
fn branch_and_bound_agrees_with_exhaustive_search() {
    for seed in SEEDS {
        let bounds = Bounds::from_extent(10.0, 10.0);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let points = PointGeneration::new().generate(SET_SIZE, bounds, &mut rng);
        let start = corner_nearest_node(&points, bounds).expect("non-empty set");

        let mut search = ShortestRouteSearch::new();
        let exhaustive = search
            .search(&points, start, &SearchConfig::default())
            .expect("valid request");
        let pruned = search
            .search(
                &points,
                start,
                &SearchConfig {
                    deadline: None,
                    prune_above_best: true,
                },
            )
            .expect("valid request");

        assert_eq!(exhaustive, pruned, "seed {seed}: pruning changed the result");
    }
}

fn solve_generated(seed: u64) -> (Vec<Point>, Route, f64) {
    let bounds = Bounds::from_extent(10.0, 10.0);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points = PointGeneration::new().generate(SET_SIZE, bounds, &mut rng);
    let start = corner_nearest_node(&points, bounds).expect("non-empty set");
    solve(&points, start)
}

fn solve(points: &[Point], start: NodeId) -> (Vec<Point>, Route, f64) {
    let outcome = ShortestRouteSearch::new()
        .search(points, start, &SearchConfig::default())
        .expect("valid request");

    match outcome {
        SearchOutcome::Solved { route, length } => (points.to_vec(), route, length),
        other => panic!("expected a solved outcome, got {other:?}"),
    }
}
