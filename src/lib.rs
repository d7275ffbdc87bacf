//! Facade crate for the Politician tour planner.
//!
//! This crate re-exports the core domain types and, behind the `solver-hk`
//! feature, the exact Held-Karp solver.
//!
//! ```
//! use politician::{Euclidean, HeldKarpSolver, SolveRequest, Solver, TableLookup};
//!
//! let lookup = TableLookup::new()
//!     .with_lat_lon("start", 0.0, 0.0)
//!     .with_lat_lon("a", 0.0, 1.0)
//!     .with_lat_lon("end", 0.0, 3.0);
//! let response = HeldKarpSolver::new(lookup, Euclidean)
//!     .solve(&SolveRequest::new("start", ["a"], "end"))?;
//! assert_eq!(response.total_distance, 3.0);
//! # Ok::<(), politician::SolveError>(())
//! ```

#![forbid(unsafe_code)]

pub use politician_core::{
    CoordinateLookup, Diagnostics, DistanceError, DistanceMatrix, DistanceMetric, Euclidean,
    Geodesic, Haversine, Location, LookupError, MatrixError, SolveError, SolveRequest,
    SolveRequestValidationError, SolveResponse, Solver, TableLookup, TourMatrix, TourMatrixError,
};

#[cfg(feature = "solver-hk")]
pub use politician_solver_hk::{
    DEFAULT_MAX_NODES, HeldKarpConfig, HeldKarpSolution, HeldKarpSolver, MAX_SUPPORTED_NODES,
    held_karp,
};
