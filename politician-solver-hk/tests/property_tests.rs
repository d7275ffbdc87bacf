//! Property-based tests for the Held-Karp solver.
//!
//! These tests use `proptest` to assert invariants that must hold for all
//! valid inputs, complementing the golden tour regression tests and BDD
//! behavioural tests.
//!
//! # Invariants tested
//!
//! - **Optimality:** the DP cost equals an exhaustive search for small inputs.
//! - **Permutation:** the returned order visits every node exactly once.
//! - **Fixed endpoints:** tours start at `start` and finish at `end`.
//! - **Transposition:** reversing every edge leaves the optimal cost unchanged.
//! - **Waypoint order:** listing the waypoints backwards leaves the tour
//!   length unchanged.
//! - **Determinism:** repeated solves return identical routes.

mod proptest_support;

use std::collections::HashSet;

use politician_core::test_support::grid_lookup;
use politician_core::{DistanceMatrix, Euclidean, SolveRequest, Solver, TableLookup};
use politician_solver_hk::test_support::{
    brute_force_cycle, brute_force_path, path_cost, with_closing_node,
};
use politician_solver_hk::{HeldKarpSolver, held_karp};
use proptest::prelude::*;

use proptest_support::{assert_close, matrix_rows_strategy, points_strategy, transpose};

/// Name each point `p{idx}` and request a tour from the first to the last.
#[expect(
    clippy::expect_used,
    reason = "strategies always yield at least two points"
)]
fn planar_tour(points: &[(f64, f64)]) -> (TableLookup, SolveRequest) {
    let named: Vec<(String, f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(idx, &(lat, lon))| (format!("p{idx}"), lat, lon))
        .collect();
    let entries: Vec<(&str, f64, f64)> = named
        .iter()
        .map(|(name, lat, lon)| (name.as_str(), *lat, *lon))
        .collect();
    let names: Vec<&str> = entries.iter().map(|(name, _, _)| *name).collect();
    let (start, rest) = names.split_first().expect("at least two points");
    let (end, middle) = rest.split_last().expect("at least two points");
    let request = SolveRequest::new(*start, middle.iter().copied(), *end);
    (grid_lookup(&entries), request)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: the cycle cost matches exhaustive search.
    #[test]
    fn cycle_cost_matches_brute_force(rows in matrix_rows_strategy(2, 8)) {
        let matrix = DistanceMatrix::from_rows(rows).expect("generated rows are valid");
        let solution = held_karp(&matrix).expect("finite matrices are feasible");
        let expected = brute_force_cycle(&matrix).expect("finite matrices are feasible");
        assert_close(solution.cost, expected);
    }

    /// Property: with a closing node, the cost is the cheapest open path.
    #[test]
    fn open_path_cost_matches_brute_force(rows in matrix_rows_strategy(2, 8)) {
        let plain = DistanceMatrix::from_rows(rows.clone()).expect("generated rows are valid");
        let augmented = with_closing_node(&rows).expect("generated rows are valid");
        let solution = held_karp(&augmented).expect("closing node keeps the tour feasible");
        let expected = brute_force_path(&plain).expect("finite matrices are feasible");
        assert_close(solution.cost, expected);
    }

    /// Property: the order is a permutation that starts at 0, ends at the
    /// closing node, and whose edge costs sum to the reported cost.
    #[test]
    fn order_is_a_consistent_permutation(rows in matrix_rows_strategy(2, 9)) {
        let augmented = with_closing_node(&rows).expect("generated rows are valid");
        let solution = held_karp(&augmented).expect("feasible");
        let size = augmented.size();

        prop_assert_eq!(solution.order.len(), size);
        let unique: HashSet<usize> = solution.order.iter().copied().collect();
        prop_assert_eq!(unique.len(), size);
        prop_assert_eq!(solution.order.first().copied(), Some(0));
        prop_assert_eq!(solution.order.last().copied(), Some(size - 1));
        prop_assert_eq!(solution.order.iter().rev().nth(1).copied(), Some(size - 2));
        assert_close(path_cost(&augmented, &solution.order), solution.cost);
    }

    /// Property: reversing every edge preserves the optimal cycle cost.
    #[test]
    fn transposition_preserves_cycle_cost(rows in matrix_rows_strategy(2, 8)) {
        let forward = DistanceMatrix::from_rows(rows.clone()).expect("valid");
        let backward = DistanceMatrix::from_rows(transpose(&rows)).expect("valid");
        let there = held_karp(&forward).expect("feasible").cost;
        let back = held_karp(&backward).expect("feasible").cost;
        assert_close(there, back);
    }

    /// Property: solving the same request twice yields the same route.
    #[test]
    fn solver_is_deterministic(points in points_strategy(2, 8)) {
        let (lookup, request) = planar_tour(&points);
        let solver = HeldKarpSolver::new(lookup, Euclidean);
        let (start, end) = (request.start.as_str(), request.end.as_str());

        let first = solver.solve(&request).expect("solve should succeed");
        let second = solver.solve(&request).expect("solve should succeed");
        prop_assert_eq!(&first.route, &second.route);
        prop_assert_eq!(first.total_distance, second.total_distance);
        prop_assert_eq!(first.route.first().map(|l| l.name.as_str()), Some(start));
        prop_assert_eq!(first.route.last().map(|l| l.name.as_str()), Some(end));
    }

    /// Property: reversing the waypoint list leaves the tour length unchanged.
    #[test]
    fn reversed_waypoints_preserve_tour_length(points in points_strategy(3, 8)) {
        let (lookup, forward) = planar_tour(&points);
        let mut backward = forward.clone();
        backward.waypoints.reverse();
        let solver = HeldKarpSolver::new(lookup, Euclidean);

        let there = solver.solve(&forward).expect("solve should succeed");
        let back = solver.solve(&backward).expect("solve should succeed");
        prop_assert_eq!(there.route.len(), back.route.len());
        prop_assert_eq!(
            there.route.last().map(|l| l.name.as_str()),
            Some(forward.end.as_str())
        );
        prop_assert_eq!(
            back.route.last().map(|l| l.name.as_str()),
            Some(forward.end.as_str())
        );
        assert_close(there.total_distance, back.total_distance);
    }
}
