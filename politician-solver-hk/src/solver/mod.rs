//! `HeldKarpSolver`: resolve locations, build the tour matrix, run the DP.

use std::time::Instant;

use log::debug;
use politician_core::{
    CoordinateLookup, Diagnostics, DistanceMetric, MatrixError, SolveError, SolveRequest,
    SolveResponse, Solver, TourMatrix,
};

use crate::held_karp::{MAX_SUPPORTED_NODES, START_NODE, held_karp};

/// Default node budget, counting the synthetic closing node.
pub const DEFAULT_MAX_NODES: usize = 18;

/// Configuration for [`HeldKarpSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeldKarpConfig {
    /// Largest tour matrix the solver will build, including the closing node.
    ///
    /// Values above [`MAX_SUPPORTED_NODES`] are clamped.
    pub max_nodes: usize,
}

impl HeldKarpConfig {
    /// Effective limit after clamping to [`MAX_SUPPORTED_NODES`].
    #[must_use]
    pub fn node_limit(&self) -> usize {
        self.max_nodes.min(MAX_SUPPORTED_NODES)
    }
}

impl Default for HeldKarpConfig {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

/// Exact solver for fixed start/end tours.
///
/// The solver is generic over the two capabilities it needs: a
/// [`CoordinateLookup`] to resolve names and a [`DistanceMetric`] to price
/// each leg. It keeps no state between calls.
///
/// # Examples
/// ```
/// use politician_core::{Euclidean, SolveRequest, Solver, TableLookup};
/// use politician_solver_hk::HeldKarpSolver;
///
/// let lookup = TableLookup::new()
///     .with_lat_lon("start", 0.0, 0.0)
///     .with_lat_lon("a", 1.0, 0.0)
///     .with_lat_lon("b", 1.0, 1.0)
///     .with_lat_lon("end", 0.0, 1.0);
/// let solver = HeldKarpSolver::new(lookup, Euclidean);
/// let response = solver.solve(&SolveRequest::new("start", ["b", "a"], "end"))?;
///
/// assert_eq!(response.route_names().collect::<Vec<_>>(), ["start", "a", "b", "end"]);
/// assert_eq!(response.total_distance, 3.0);
/// # Ok::<(), politician_core::SolveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HeldKarpSolver<L, M>
where
    L: CoordinateLookup,
    M: DistanceMetric,
{
    lookup: L,
    metric: M,
    config: HeldKarpConfig,
}

impl<L, M> HeldKarpSolver<L, M>
where
    L: CoordinateLookup,
    M: DistanceMetric,
{
    /// Construct a solver using default configuration.
    pub fn new(lookup: L, metric: M) -> Self {
        Self::with_config(lookup, metric, HeldKarpConfig::default())
    }

    /// Construct a solver with explicit configuration.
    pub const fn with_config(lookup: L, metric: M, config: HeldKarpConfig) -> Self {
        Self {
            lookup,
            metric,
            config,
        }
    }

    /// Active configuration.
    pub const fn config(&self) -> &HeldKarpConfig {
        &self.config
    }

    fn admit(&self, request: &SolveRequest) -> Result<(), SolveError> {
        let nodes = request.node_count() + 1;
        let limit = self.config.node_limit();
        if nodes > limit {
            return Err(SolveError::TooManyNodes { nodes, limit });
        }
        Ok(())
    }
}

impl<L, M> Solver for HeldKarpSolver<L, M>
where
    L: CoordinateLookup + Send + Sync,
    M: DistanceMetric + Send + Sync,
{
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError> {
        request.validate()?;
        self.admit(request)?;
        let started_at = Instant::now();

        let tour = TourMatrix::build(
            &request.start,
            &request.waypoints,
            &request.end,
            &self.lookup,
            &self.metric,
        )?;
        let solution = held_karp(tour.matrix())?;
        let size = tour.matrix().size();
        let route = tour
            .route_for(&solution.order)
            .ok_or(MatrixError::OutOfBounds {
                row: START_NODE,
                column: size,
                size,
            })?;

        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            states_evaluated: solution.states_evaluated,
        };
        debug!(
            "solved tour over {} locations in {:?} ({} states)",
            route.len(),
            diagnostics.solve_time,
            diagnostics.states_evaluated
        );
        Ok(SolveResponse {
            total_distance: solution.cost,
            route,
            diagnostics,
        })
    }
}
