//! Solver contract: requests, responses and the error taxonomy.

use std::time::Duration;

use thiserror::Error;

use crate::{DistanceError, Location, LookupError, MatrixError, TourMatrixError};

/// Parameters for a solve request.
///
/// The request names a fixed `start`, an unordered set of `waypoints` and a
/// fixed `end`. `start` and `end` may be the same location for a round trip.
/// Duplicate waypoints are accepted and become free zero-distance legs.
///
/// # Examples
/// ```rust
/// use politician_core::SolveRequest;
///
/// let request = SolveRequest::new("Texas", ["Oklahoma", "Kansas"], "Nebraska");
/// assert_eq!(request.node_count(), 4);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveRequest {
    /// Location the tour departs from.
    pub start: String,
    /// Locations to visit in any order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub waypoints: Vec<String>,
    /// Location the tour must finish at.
    pub end: String,
}

impl SolveRequest {
    /// Construct a request from any string-like identifiers.
    pub fn new<I, S>(start: impl Into<String>, waypoints: I, end: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            start: start.into(),
            waypoints: waypoints.into_iter().map(Into::into).collect(),
            end: end.into(),
        }
    }

    /// Number of real locations in the tour: waypoints plus start and end.
    pub fn node_count(&self) -> usize {
        self.waypoints.len() + 2
    }

    /// Validate the request, mapping failures to [`SolveError::InvalidRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidRequest`] when any identifier is blank.
    pub fn validate(&self) -> Result<(), SolveError> {
        self.validate_detailed().map_err(SolveError::InvalidRequest)
    }

    /// Validate the request, reporting which identifier is at fault.
    ///
    /// # Errors
    ///
    /// Returns the first [`SolveRequestValidationError`] found, checking
    /// `start`, then waypoints in order, then `end`.
    pub fn validate_detailed(&self) -> Result<(), SolveRequestValidationError> {
        if self.start.trim().is_empty() {
            return Err(SolveRequestValidationError::EmptyStart);
        }
        if let Some(index) = self.waypoints.iter().position(|w| w.trim().is_empty()) {
            return Err(SolveRequestValidationError::EmptyWaypoint { index });
        }
        if self.end.trim().is_empty() {
            return Err(SolveRequestValidationError::EmptyEnd);
        }
        Ok(())
    }
}

/// Reasons a [`SolveRequest`] is rejected before any lookup happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveRequestValidationError {
    /// The start identifier was blank.
    #[error("start location must not be empty")]
    EmptyStart,
    /// A waypoint identifier was blank.
    #[error("waypoint {index} must not be empty")]
    EmptyWaypoint {
        /// Zero-based waypoint position.
        index: usize,
    },
    /// The end identifier was blank.
    #[error("end location must not be empty")]
    EmptyEnd,
}

/// Runtime details about a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent in the solver, including matrix construction.
    pub solve_time: Duration,
    /// Number of `(subset, node)` states the solver filled.
    pub states_evaluated: u64,
}

/// Response from a successful solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResponse {
    /// Length of the optimal tour in the metric's unit.
    pub total_distance: f64,
    /// Locations in visiting order, from `start` to `end` inclusive.
    pub route: Vec<Location>,
    /// Solver diagnostics.
    pub diagnostics: Diagnostics,
}

impl SolveResponse {
    /// Location names in visiting order.
    pub fn route_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.route.iter().map(|location| location.name.as_str())
    }
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// Request parameters were invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(#[source] SolveRequestValidationError),
    /// A location could not be resolved to coordinates.
    #[error("lookup failed: {0}")]
    Lookup(#[from] LookupError),
    /// A distance evaluation rejected its coordinates.
    #[error("distance computation failed: {0}")]
    Computation(#[from] DistanceError),
    /// The matrix handed to the solver was malformed.
    #[error("precondition violated: {0}")]
    PreconditionViolation(#[from] MatrixError),
    /// No finite-cost tour exists.
    #[error("no feasible tour exists")]
    Infeasible,
    /// The request exceeds the solver's node budget.
    #[error("tour has {nodes} nodes but the solver accepts at most {limit}")]
    TooManyNodes {
        /// Nodes required, including any synthetic closing node.
        nodes: usize,
        /// Configured maximum.
        limit: usize,
    },
}

impl From<TourMatrixError> for SolveError {
    fn from(err: TourMatrixError) -> Self {
        match err {
            TourMatrixError::Lookup(source) => Self::Lookup(source),
            TourMatrixError::Distance(source) => Self::Computation(source),
            TourMatrixError::Matrix(source) => Self::PreconditionViolation(source),
        }
    }
}

/// Find the shortest tour for a request.
///
/// Implementations should return an error rather than panicking, and must
/// report an unreachable end location as [`SolveError::Infeasible`] rather
/// than as an infinite distance. Solvers must be `Send + Sync`.
pub trait Solver: Send + Sync {
    /// Solve a request, producing a tour or an error.
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError>;
}
