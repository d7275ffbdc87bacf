//! Augmented distance matrix for fixed start/end tours.
//!
//! Nodes are laid out as `[start, waypoints.., end, closing]`. The closing
//! node is synthetic: only `end` may enter it (at cost zero) and it may only
//! leave towards `start` (at cost zero). A solver looking for a minimum
//! Hamiltonian cycle through `start` is therefore forced to visit `end`
//! immediately before closing, which turns the open start/end path into a
//! plain cycle without special-casing the terminal node.

use std::collections::HashMap;

use geo::Coord;
use log::debug;

use super::{DistanceMatrix, MatrixError, TourMatrixError};
use crate::{CoordinateLookup, DistanceMetric, Location};

/// Index of the start location in every tour matrix.
pub const START_INDEX: usize = 0;

/// A distance matrix over named locations plus the synthetic closing node.
///
/// # Examples
/// ```
/// use politician_core::{Euclidean, TableLookup, TourMatrix};
///
/// let lookup = TableLookup::new()
///     .with_lat_lon("start", 0.0, 0.0)
///     .with_lat_lon("end", 0.0, 3.0);
/// let tour = TourMatrix::build("start", &[] as &[&str], "end", &lookup, &Euclidean)?;
///
/// // start, end and the closing node.
/// assert_eq!(tour.matrix().size(), 3);
/// assert_eq!(tour.matrix().get(0, 1), Some(3.0));
/// assert_eq!(tour.matrix().get(1, tour.closing_index()), Some(0.0));
/// assert_eq!(tour.matrix().get(0, tour.closing_index()), Some(f64::INFINITY));
/// # Ok::<(), politician_core::TourMatrixError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TourMatrix {
    locations: Vec<Location>,
    matrix: DistanceMatrix,
}

impl TourMatrix {
    /// Resolve `start`, `waypoints` and `end`, then build the augmented matrix.
    ///
    /// Each distinct identifier is looked up once; the metric is evaluated for
    /// every ordered pair of real locations. Waypoint order only affects the
    /// node numbering, never which tour is optimal.
    ///
    /// # Errors
    ///
    /// Returns [`TourMatrixError::Lookup`] if any identifier is unresolvable
    /// and [`TourMatrixError::Distance`] if the metric rejects a coordinate.
    /// No distances are computed until every location has resolved.
    pub fn build<S, L, M>(
        start: &str,
        waypoints: &[S],
        end: &str,
        lookup: &L,
        metric: &M,
    ) -> Result<Self, TourMatrixError>
    where
        S: AsRef<str>,
        L: CoordinateLookup + ?Sized,
        M: DistanceMetric + ?Sized,
    {
        let names = std::iter::once(start)
            .chain(waypoints.iter().map(S::as_ref))
            .chain(std::iter::once(end));
        let locations = resolve_locations(names, lookup)?;

        let inner = locations.len();
        let closing = inner;
        let end_index = inner - 1;
        let mut matrix = DistanceMatrix::filled(inner + 1, f64::INFINITY)?;

        for (from_idx, from) in locations.iter().enumerate() {
            for (to_idx, to) in locations.iter().enumerate() {
                let distance = metric.distance(from.coord, to.coord)?;
                matrix.set(from_idx, to_idx, distance)?;
            }
        }
        matrix.set(end_index, closing, 0.0)?;
        matrix.set(closing, START_INDEX, 0.0)?;
        matrix.set(closing, closing, 0.0)?;

        debug!(
            "built {size}x{size} tour matrix for {inner} locations",
            size = inner + 1
        );
        Ok(Self { locations, matrix })
    }

    /// Assemble a tour matrix from pre-resolved parts.
    ///
    /// `matrix` must have exactly one more node than `locations`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] when the sizes disagree.
    pub fn from_parts(
        locations: Vec<Location>,
        matrix: DistanceMatrix,
    ) -> Result<Self, MatrixError> {
        let expected = locations.len() + 1;
        if matrix.size() != expected {
            return Err(MatrixError::NotSquare {
                row: 0,
                len: matrix.size(),
                expected,
            });
        }
        Ok(Self { locations, matrix })
    }

    /// Resolved locations in node order (`start`, waypoints, `end`).
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The augmented matrix.
    pub const fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Index of the `end` location.
    pub fn end_index(&self) -> usize {
        self.locations.len().saturating_sub(1)
    }

    /// Index of the synthetic closing node.
    pub fn closing_index(&self) -> usize {
        self.locations.len()
    }

    /// Map a solver's node order back to locations, dropping the closing node.
    ///
    /// Returns `None` if `order` references an index outside the matrix.
    pub fn route_for(&self, order: &[usize]) -> Option<Vec<Location>> {
        let closing = self.closing_index();
        order
            .iter()
            .filter(|&&idx| idx != closing)
            .map(|&idx| self.locations.get(idx).cloned())
            .collect()
    }
}

fn resolve_locations<'a, L>(
    names: impl Iterator<Item = &'a str>,
    lookup: &L,
) -> Result<Vec<Location>, TourMatrixError>
where
    L: CoordinateLookup + ?Sized,
{
    let mut resolved: HashMap<&str, Coord<f64>> = HashMap::new();
    let mut locations = Vec::new();
    for name in names {
        let coord = match resolved.get(name) {
            Some(coord) => *coord,
            None => {
                let coord = lookup.lookup(name)?;
                resolved.insert(name, coord);
                coord
            }
        };
        locations.push(Location::new(name, coord));
    }
    Ok(locations)
}
