use thiserror::Error;

use crate::{DistanceError, LookupError};

/// Shape and content violations for [`crate::DistanceMatrix`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Fewer than two nodes were supplied.
    #[error("matrix must contain at least 2 nodes, found {size}")]
    TooSmall {
        /// Number of rows supplied.
        size: usize,
    },
    /// A row length differs from the number of rows.
    #[error("row {row} has {len} columns but {expected} expected (matrix must be square)")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Columns found in that row.
        len: usize,
        /// Required column count.
        expected: usize,
    },
    /// An entry was NaN or negative.
    #[error("entry ({row}, {column}) must be non-negative or +infinity")]
    InvalidEntry {
        /// Row index of the entry.
        row: usize,
        /// Column index of the entry.
        column: usize,
    },
    /// An index fell outside the matrix.
    #[error("index ({row}, {column}) is outside a {size}x{size} matrix")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Matrix dimension.
        size: usize,
    },
}

/// Errors from [`crate::TourMatrix::build`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourMatrixError {
    /// A location could not be resolved to coordinates.
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// The distance metric rejected a coordinate pair.
    #[error(transparent)]
    Distance(#[from] DistanceError),
    /// The assembled matrix violated a shape invariant.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
