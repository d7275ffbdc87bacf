//! Core domain types for the Politician tour planner.
//!
//! The crate models the inputs and outputs of a fixed start/end tour over a
//! set of waypoints: named [`Location`]s, the [`CoordinateLookup`] and
//! [`DistanceMetric`] capabilities supplied by the caller, the augmented
//! [`TourMatrix`] handed to solvers, and the [`Solver`] trait itself.
//!
//! Boundaries:
//! - No solver algorithms live here (see `politician-solver-hk`).
//! - No file or network access; coordinate sources are injected.
//!
//! Invariants:
//! - No global mutable state. Every lookup table is owned by the caller.
//! - Constructors and builders return `Result` to surface invalid input early.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
mod location;
pub mod lookup;
pub mod matrix;
mod solver;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(all(docsrs, not(test)), doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use distance::{DistanceError, DistanceMetric, Euclidean, Geodesic, Haversine};
pub use location::Location;
pub use lookup::{CoordinateLookup, LookupError, TableLookup};
pub use matrix::{DistanceMatrix, MatrixError, TourMatrix, TourMatrixError};
pub use solver::{
    Diagnostics, SolveError, SolveRequest, SolveRequestValidationError, SolveResponse, Solver,
};
