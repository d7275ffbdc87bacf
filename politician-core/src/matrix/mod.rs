//! Square distance matrices consumed by solvers.
//!
//! [`DistanceMatrix`] is a validated, row-major `n x n` matrix of non-negative
//! reals where `+infinity` marks a forbidden edge. [`TourMatrix`] builds one
//! from named locations, augmented with a closing node that forces the tour
//! to terminate at the requested end location.

mod error;
mod tour;

pub use error::{MatrixError, TourMatrixError};
pub use tour::TourMatrix;

/// Smallest matrix a solver accepts.
pub const MIN_MATRIX_SIZE: usize = 2;

/// A square matrix of edge costs.
///
/// `get(i, j)` is the cost of travelling from node `i` to node `j`. Entries
/// are either finite and non-negative or `f64::INFINITY`; NaN and negative
/// values are rejected on construction.
///
/// # Examples
/// ```
/// use politician_core::DistanceMatrix;
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0.0, 2.0],
///     vec![3.0, 0.0],
/// ])?;
/// assert_eq!(matrix.size(), 2);
/// assert_eq!(matrix.get(1, 0), Some(3.0));
/// assert_eq!(matrix.get(2, 0), None);
/// # Ok::<(), politician_core::MatrixError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    // Row-major, `size * size` entries.
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// Validate and construct a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::TooSmall`] when fewer than two rows are supplied.
    /// - [`MatrixError::NotSquare`] when any row length differs from the row
    ///   count.
    /// - [`MatrixError::InvalidEntry`] for NaN or negative entries.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        if size < MIN_MATRIX_SIZE {
            return Err(MatrixError::TooSmall { size });
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(MatrixError::NotSquare {
                    row: row_idx,
                    len: row.len(),
                    expected: size,
                });
            }
            for (column, value) in row.into_iter().enumerate() {
                if !is_valid_entry(value) {
                    return Err(MatrixError::InvalidEntry {
                        row: row_idx,
                        column,
                    });
                }
                cells.push(value);
            }
        }
        Ok(Self { size, cells })
    }

    /// A `size x size` matrix with every entry set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::TooSmall`] for `size < 2` and
    /// [`MatrixError::InvalidEntry`] if `value` is NaN or negative.
    pub fn filled(size: usize, value: f64) -> Result<Self, MatrixError> {
        if size < MIN_MATRIX_SIZE {
            return Err(MatrixError::TooSmall { size });
        }
        if !is_valid_entry(value) {
            return Err(MatrixError::InvalidEntry { row: 0, column: 0 });
        }
        Ok(Self {
            size,
            cells: vec![value; size * size],
        })
    }

    /// Number of nodes (rows and columns).
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Cost of the edge `from -> to`, or `None` when out of bounds.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        self.offset(from, to)
            .and_then(|offset| self.cells.get(offset))
            .copied()
    }

    /// Overwrite the edge `from -> to`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] for indices outside the matrix and
    /// [`MatrixError::InvalidEntry`] for NaN or negative values.
    pub fn set(&mut self, from: usize, to: usize, value: f64) -> Result<(), MatrixError> {
        if !is_valid_entry(value) {
            return Err(MatrixError::InvalidEntry {
                row: from,
                column: to,
            });
        }
        let size = self.size;
        let cell = self
            .offset(from, to)
            .and_then(|offset| self.cells.get_mut(offset))
            .ok_or(MatrixError::OutOfBounds {
                row: from,
                column: to,
                size,
            })?;
        *cell = value;
        Ok(())
    }

    /// Borrow row `from`, or `None` when out of bounds.
    pub fn row(&self, from: usize) -> Option<&[f64]> {
        self.cells.chunks_exact(self.size).nth(from)
    }

    /// Iterate over rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    /// Copy the matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    const fn offset(&self, from: usize, to: usize) -> Option<usize> {
        if from < self.size && to < self.size {
            Some(from * self.size + to)
        } else {
            None
        }
    }
}

fn is_valid_entry(value: f64) -> bool {
    // `NaN >= 0.0` is false, so NaN is rejected here too.
    value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn from_rows_round_trips_entries() {
        let rows = vec![
            vec![0.0, 1.0, f64::INFINITY],
            vec![1.0, 0.0, 2.0],
            vec![4.0, 2.0, 0.0],
        ];
        let matrix = DistanceMatrix::from_rows(rows.clone()).expect("valid matrix");
        assert_eq!(matrix.to_rows(), rows);
        assert_eq!(matrix.get(0, 2), Some(f64::INFINITY));
        assert_eq!(matrix.row(2), Some(&[4.0, 2.0, 0.0][..]));
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![vec![0.0]])]
    fn rejects_fewer_than_two_nodes(#[case] rows: Vec<Vec<f64>>) {
        let size = rows.len();
        assert_eq!(
            DistanceMatrix::from_rows(rows),
            Err(MatrixError::TooSmall { size })
        );
    }

    #[rstest]
    fn rejects_jagged_rows() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]])
            .expect_err("jagged matrix");
        assert_eq!(
            err,
            MatrixError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[rstest]
    fn rejects_rectangular_rows() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 2.0]])
            .expect_err("rectangular matrix");
        assert!(matches!(err, MatrixError::NotSquare { row: 0, .. }));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(-1.0)]
    #[case(f64::NEG_INFINITY)]
    fn rejects_invalid_entries(#[case] value: f64) {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, value], vec![1.0, 0.0]])
            .expect_err("invalid entry");
        assert_eq!(err, MatrixError::InvalidEntry { row: 0, column: 1 });
    }

    #[rstest]
    fn set_overwrites_and_bounds_checks() {
        let mut matrix = DistanceMatrix::filled(2, 0.0).expect("valid size");
        matrix.set(1, 0, f64::INFINITY).expect("in bounds");
        assert_eq!(matrix.get(1, 0), Some(f64::INFINITY));
        assert_eq!(
            matrix.set(2, 0, 1.0),
            Err(MatrixError::OutOfBounds {
                row: 2,
                column: 0,
                size: 2
            })
        );
        assert!(matches!(
            matrix.set(0, 0, f64::NAN),
            Err(MatrixError::InvalidEntry { .. })
        ));
    }

    #[rstest]
    fn out_of_bounds_reads_are_none() {
        let matrix = DistanceMatrix::filled(3, 1.0).expect("valid size");
        assert_eq!(matrix.get(0, 3), None);
        assert_eq!(matrix.row(3), None);
        assert_eq!(matrix.rows().count(), 3);
    }
}
