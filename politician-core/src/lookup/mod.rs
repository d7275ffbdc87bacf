//! Resolve location identifiers to coordinates.
//!
//! The [`CoordinateLookup`] trait abstracts the geocoding step. Callers own
//! the implementation and its lifecycle: a static table, a zip-code database,
//! or anything else that can map a name to a coordinate.
//!
//! Errors are returned when an identifier cannot be resolved; no lookup is
//! retried.

mod error;
mod table;

use geo::Coord;

pub use error::LookupError;
pub use table::TableLookup;

/// Resolve a location identifier to a WGS84 coordinate.
///
/// Implementations return `x = longitude`, `y = latitude` in degrees.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use politician_core::{CoordinateLookup, LookupError};
///
/// struct Origin;
///
/// impl CoordinateLookup for Origin {
///     fn lookup(&self, name: &str) -> Result<Coord<f64>, LookupError> {
///         match name {
///             "origin" => Ok(Coord { x: 0.0, y: 0.0 }),
///             other => Err(LookupError::UnknownLocation {
///                 name: other.to_owned(),
///             }),
///         }
///     }
/// }
///
/// assert_eq!(Origin.lookup("origin")?, Coord { x: 0.0, y: 0.0 });
/// assert!(Origin.lookup("elsewhere").is_err());
/// # Ok::<(), LookupError>(())
/// ```
pub trait CoordinateLookup {
    /// Return the coordinate for `name`.
    ///
    /// Implementations must return `Err(LookupError::UnknownLocation)` for
    /// identifiers they have never heard of.
    fn lookup(&self, name: &str) -> Result<Coord<f64>, LookupError>;
}

impl<T> CoordinateLookup for &T
where
    T: CoordinateLookup + ?Sized,
{
    fn lookup(&self, name: &str) -> Result<Coord<f64>, LookupError> {
        (**self).lookup(name)
    }
}
