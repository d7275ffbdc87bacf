//! Deterministic lookups and metrics for unit and behaviour tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use geo::Coord;

use crate::{CoordinateLookup, DistanceError, DistanceMetric, LookupError, TableLookup};

/// Build a [`TableLookup`] from `(name, latitude, longitude)` triples.
///
/// # Examples
/// ```
/// use politician_core::CoordinateLookup;
/// use politician_core::test_support::grid_lookup;
///
/// let lookup = grid_lookup(&[("a", 1.0, 2.0)]);
/// let coord = lookup.lookup("a").unwrap();
/// assert_eq!((coord.y, coord.x), (1.0, 2.0));
/// ```
pub fn grid_lookup(entries: &[(&str, f64, f64)]) -> TableLookup {
    entries
        .iter()
        .map(|&(name, latitude, longitude)| {
            (
                name,
                Coord {
                    x: longitude,
                    y: latitude,
                },
            )
        })
        .collect()
}

/// Wraps a lookup and counts how often it is consulted.
#[derive(Debug, Default)]
pub struct CountingLookup<L> {
    inner: L,
    calls: AtomicUsize,
}

impl<L> CountingLookup<L> {
    /// Wrap `inner` with a zeroed call counter.
    pub const fn new(inner: L) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of lookups performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl<L: CoordinateLookup> CoordinateLookup for CountingLookup<L> {
    fn lookup(&self, name: &str) -> Result<Coord<f64>, LookupError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.lookup(name)
    }
}

/// Lookup that rejects every identifier as unknown.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingLookup;

impl CoordinateLookup for FailingLookup {
    fn lookup(&self, name: &str) -> Result<Coord<f64>, LookupError> {
        Err(LookupError::UnknownLocation {
            name: name.to_owned(),
        })
    }
}

/// Metric that rejects every coordinate pair.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingMetric;

impl DistanceMetric for FailingMetric {
    fn distance(&self, from: Coord<f64>, _to: Coord<f64>) -> Result<f64, DistanceError> {
        Err(DistanceError::InvalidCoordinate {
            latitude: from.y,
            longitude: from.x,
        })
    }
}

/// Metric reporting `1.0` between distinct coordinates and `0.0` otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnitDistance;

impl DistanceMetric for UnitDistance {
    fn distance(&self, from: Coord<f64>, to: Coord<f64>) -> Result<f64, DistanceError> {
        Ok(if from == to { 0.0 } else { 1.0 })
    }
}
