//! Test-only utilities for `politician-solver-hk`.
//!
//! The helpers in this module are available to unit tests, property tests
//! and benchmarks. They are gated behind the `test-support` feature (and
//! `cfg(test)`).

use politician_core::{DistanceMatrix, MatrixError};

/// Append a closing node to `rows` so that only the last row may enter it
/// and it may only leave towards row `0`.
///
/// This mirrors the layout produced by
/// [`TourMatrix::build`](politician_core::TourMatrix::build) for matrices
/// that were not derived from coordinates.
///
/// # Errors
///
/// Propagates [`MatrixError`] when `rows` is not a valid square matrix.
///
/// # Examples
/// ```rust
/// use politician_solver_hk::test_support::with_closing_node;
///
/// let matrix = with_closing_node(&[vec![0.0, 4.0], vec![4.0, 0.0]]).unwrap();
/// assert_eq!(matrix.size(), 3);
/// assert_eq!(matrix.get(1, 2), Some(0.0));
/// assert_eq!(matrix.get(0, 2), Some(f64::INFINITY));
/// ```
pub fn with_closing_node(rows: &[Vec<f64>]) -> Result<DistanceMatrix, MatrixError> {
    let inner = rows.len();
    let end = inner.saturating_sub(1);
    let mut augmented: Vec<Vec<f64>> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let mut extended = row.clone();
            extended.push(if idx == end { 0.0 } else { f64::INFINITY });
            extended
        })
        .collect();
    let mut closing = vec![f64::INFINITY; inner + 1];
    if let Some(first) = closing.first_mut() {
        *first = 0.0;
    }
    if let Some(last) = closing.last_mut() {
        *last = 0.0;
    }
    augmented.push(closing);
    DistanceMatrix::from_rows(augmented)
}

/// Cheapest Hamiltonian cycle from node `0`, found by trying every order.
///
/// Returns `None` when no finite cycle exists. Intended for matrices of at
/// most nine nodes.
#[must_use]
pub fn brute_force_cycle(matrix: &DistanceMatrix) -> Option<f64> {
    let mut middle: Vec<usize> = (1..matrix.size()).collect();
    let mut best = f64::INFINITY;
    for_each_permutation(&mut middle, &mut |order| {
        let cost = cycle_cost(matrix, order);
        if cost < best {
            best = cost;
        }
    });
    best.is_finite().then_some(best)
}

/// Cheapest open path from node `0` to node `n - 1` through every other node.
#[must_use]
pub fn brute_force_path(matrix: &DistanceMatrix) -> Option<f64> {
    let last = matrix.size().saturating_sub(1);
    let mut middle: Vec<usize> = (1..last).collect();
    let mut best = f64::INFINITY;
    for_each_permutation(&mut middle, &mut |order| {
        let mut nodes = Vec::with_capacity(order.len() + 2);
        nodes.push(0);
        nodes.extend_from_slice(order);
        nodes.push(last);
        let cost = path_cost(matrix, &nodes);
        if cost < best {
            best = cost;
        }
    });
    best.is_finite().then_some(best)
}

/// Sum of edge costs along `nodes`, without returning to the first node.
///
/// Out-of-range indices count as infinite edges.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "path costs are sums of floating-point edge weights"
)]
pub fn path_cost(matrix: &DistanceMatrix, nodes: &[usize]) -> f64 {
    nodes
        .windows(2)
        .map(|pair| match pair {
            [from, to] => matrix.get(*from, *to).unwrap_or(f64::INFINITY),
            _ => f64::INFINITY,
        })
        .sum()
}

#[expect(
    clippy::float_arithmetic,
    reason = "path costs are sums of floating-point edge weights"
)]
fn cycle_cost(matrix: &DistanceMatrix, middle: &[usize]) -> f64 {
    let mut nodes = Vec::with_capacity(middle.len() + 2);
    nodes.push(0);
    nodes.extend_from_slice(middle);
    let back = nodes
        .last()
        .and_then(|&last| matrix.get(last, 0))
        .unwrap_or(f64::INFINITY);
    path_cost(matrix, &nodes) + back
}

/// Heap's algorithm; visits every ordering of `items` exactly once.
fn for_each_permutation(items: &mut [usize], visit: &mut impl FnMut(&[usize])) {
    let len = items.len();
    let mut counters = vec![0_usize; len];
    visit(items);
    let mut idx = 1;
    while idx < len {
        let Some(counter) = counters.get(idx).copied() else {
            break;
        };
        if counter < idx {
            let other = if idx.is_multiple_of(2) { 0 } else { counter };
            items.swap(other, idx);
            visit(items);
            if let Some(slot) = counters.get_mut(idx) {
                *slot += 1;
            }
            idx = 1;
        } else {
            if let Some(slot) = counters.get_mut(idx) {
                *slot = 0;
            }
            idx += 1;
        }
    }
}
