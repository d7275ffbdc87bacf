//! Proptest strategies for Held-Karp property tests.
//!
//! Matrices are generated with finite, non-negative entries and a zero
//! diagonal. Asymmetric matrices are included so the tests exercise the
//! direction of every edge, not just its length.

use proptest::prelude::*;

/// Strategy for a square matrix of size `min_size..=max_size`.
pub fn matrix_rows_strategy(
    min_size: usize,
    max_size: usize,
) -> impl Strategy<Value = Vec<Vec<f64>>> {
    (min_size..=max_size).prop_flat_map(|size| {
        proptest::collection::vec(proptest::collection::vec(0.0_f64..100.0, size), size).prop_map(
            |mut rows| {
                for (idx, row) in rows.iter_mut().enumerate() {
                    if let Some(cell) = row.get_mut(idx) {
                        *cell = 0.0;
                    }
                }
                rows
            },
        )
    })
}

/// Strategy for planar points used with the Euclidean metric.
pub fn points_strategy(
    min_count: usize,
    max_count: usize,
) -> impl Strategy<Value = Vec<(f64, f64)>> {
    proptest::collection::vec((-50.0_f64..50.0, -50.0_f64..50.0), min_count..=max_count)
}

/// Transpose a square matrix, reversing the direction of every edge.
pub fn transpose(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    (0..rows.len())
        .map(|column| {
            rows.iter()
                .map(|row| row.get(column).copied().unwrap_or(f64::INFINITY))
                .collect()
        })
        .collect()
}

/// Assert two costs agree to within a relative tolerance.
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
