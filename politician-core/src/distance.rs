//! Pairwise distance between coordinates.
//!
//! The [`DistanceMetric`] trait is the distance capability the matrix builder
//! depends on. Implementations must be reflexive (`distance(p, p) == 0`) and
//! should be symmetric; neither property is enforced downstream.
//!
//! Three metrics are provided:
//! - [`Geodesic`]: shortest path on the WGS84 ellipsoid, in miles by default.
//! - [`Haversine`]: great-circle distance on a sphere, in miles by default.
//! - [`Euclidean`]: planar distance treating coordinates as Cartesian.
//!
//! The geographic metrics delegate to [`geo::Distance`].

use geo::{Coord, Distance, HaversineMeasure, Point};
use thiserror::Error;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3_958.761_3;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KILOMETRES: f64 = 6_371.008_8;

/// Metres in one statute mile.
pub const METRES_PER_MILE: f64 = 1_609.344;

/// Metres in one kilometre.
pub const METRES_PER_KILOMETRE: f64 = 1_000.0;

const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

/// Errors from [`DistanceMetric::distance`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistanceError {
    /// A coordinate was non-finite or outside the metric's valid range.
    #[error("coordinate (latitude {latitude}, longitude {longitude}) is invalid")]
    InvalidCoordinate {
        /// Offending latitude (`y`).
        latitude: f64,
        /// Offending longitude (`x`).
        longitude: f64,
    },
    /// The metric produced a negative or non-finite value.
    #[error("distance from {from:?} to {to:?} is not a finite non-negative number")]
    NonFiniteDistance {
        /// Origin coordinate.
        from: Coord<f64>,
        /// Destination coordinate.
        to: Coord<f64>,
    },
}

/// Compute the distance between two coordinates.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use politician_core::{DistanceError, DistanceMetric};
///
/// struct Manhattan;
///
/// impl DistanceMetric for Manhattan {
///     fn distance(&self, from: Coord<f64>, to: Coord<f64>) -> Result<f64, DistanceError> {
///         Ok((from.x - to.x).abs() + (from.y - to.y).abs())
///     }
/// }
///
/// let d = Manhattan.distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 2.0 })?;
/// assert_eq!(d, 3.0);
/// # Ok::<(), DistanceError>(())
/// ```
pub trait DistanceMetric {
    /// Return a non-negative distance from `from` to `to`.
    fn distance(&self, from: Coord<f64>, to: Coord<f64>) -> Result<f64, DistanceError>;
}

impl<T> DistanceMetric for &T
where
    T: DistanceMetric + ?Sized,
{
    fn distance(&self, from: Coord<f64>, to: Coord<f64>) -> Result<f64, DistanceError> {
        (**self).distance(from, to)
    }
}

/// Great-circle distance on a sphere of the given radius.
///
/// The result is expressed in the radius' unit. Coordinates must be finite
/// with latitude in `[-90, 90]` and longitude in `[-180, 180]`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use politician_core::{DistanceMetric, Haversine};
///
/// let austin = Coord { x: -97.7431, y: 30.2672 };
/// let denver = Coord { x: -104.9903, y: 39.7392 };
/// let miles = Haversine::miles().distance(austin, denver).unwrap();
/// assert!((miles - 772.0).abs() < 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    radius: f64,
}

impl Haversine {
    /// Sphere with an explicit radius.
    pub const fn with_radius(radius: f64) -> Self {
        Self { radius }
    }

    /// Earth-sized sphere reporting statute miles.
    pub const fn miles() -> Self {
        Self::with_radius(EARTH_RADIUS_MILES)
    }

    /// Earth-sized sphere reporting kilometres.
    pub const fn kilometres() -> Self {
        Self::with_radius(EARTH_RADIUS_KILOMETRES)
    }

    /// Radius used for the computation.
    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for Haversine {
    fn default() -> Self {
        Self::miles()
    }
}

impl DistanceMetric for Haversine {
    fn distance(&self, from: Coord<f64>, to: Coord<f64>) -> Result<f64, DistanceError> {
        ensure_geographic(from)?;
        ensure_geographic(to)?;
        let sphere = HaversineMeasure::new(self.radius);
        ensure_finite(
            sphere.distance(Point::from(from), Point::from(to)),
            from,
            to,
        )
    }
}

/// Geodesic distance on the WGS84 ellipsoid, scaled into a reporting unit.
///
/// Coordinates follow the same range rules as [`Haversine`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use politician_core::{DistanceMetric, Geodesic};
///
/// let austin = Coord { x: -97.7431, y: 30.2672 };
/// let denver = Coord { x: -104.9903, y: 39.7392 };
/// let miles = Geodesic::miles().distance(austin, denver).unwrap();
/// assert!((miles - 771.0).abs() < 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodesic {
    metres_per_unit: f64,
}

impl Geodesic {
    /// Report distances in a unit worth `metres_per_unit` metres.
    pub const fn in_units_of(metres_per_unit: f64) -> Self {
        Self { metres_per_unit }
    }

    /// Report statute miles.
    pub const fn miles() -> Self {
        Self::in_units_of(METRES_PER_MILE)
    }

    /// Report kilometres.
    pub const fn kilometres() -> Self {
        Self::in_units_of(METRES_PER_KILOMETRE)
    }

    /// Metres in one reporting unit.
    pub const fn metres_per_unit(&self) -> f64 {
        self.metres_per_unit
    }
}

impl Default for Geodesic {
    fn default() -> Self {
        Self::miles()
    }
}

impl DistanceMetric for Geodesic {
    fn distance(&self, from: Coord<f64>, to: Coord<f64>) -> Result<f64, DistanceError> {
        ensure_geographic(from)?;
        ensure_geographic(to)?;
        let metres = geo::Geodesic.distance(Point::from(from), Point::from(to));
        ensure_finite(metres / self.metres_per_unit, from, to)
    }
}

/// Straight-line distance treating `x`/`y` as Cartesian coordinates.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use politician_core::{DistanceMetric, Euclidean};
///
/// let d = Euclidean
///     .distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 })
///     .unwrap();
/// assert_eq!(d, 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    fn distance(&self, from: Coord<f64>, to: Coord<f64>) -> Result<f64, DistanceError> {
        ensure_finite_coord(from)?;
        ensure_finite_coord(to)?;
        ensure_finite((to.x - from.x).hypot(to.y - from.y), from, to)
    }
}

fn ensure_finite_coord(coord: Coord<f64>) -> Result<(), DistanceError> {
    if coord.x.is_finite() && coord.y.is_finite() {
        Ok(())
    } else {
        Err(invalid(coord))
    }
}

fn ensure_geographic(coord: Coord<f64>) -> Result<(), DistanceError> {
    ensure_finite_coord(coord)?;
    if (-MAX_LATITUDE..=MAX_LATITUDE).contains(&coord.y)
        && (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&coord.x)
    {
        Ok(())
    } else {
        Err(invalid(coord))
    }
}

const fn invalid(coord: Coord<f64>) -> DistanceError {
    DistanceError::InvalidCoordinate {
        latitude: coord.y,
        longitude: coord.x,
    }
}

fn ensure_finite(value: f64, from: Coord<f64>, to: Coord<f64>) -> Result<f64, DistanceError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DistanceError::NonFiniteDistance { from, to })
    }
}
