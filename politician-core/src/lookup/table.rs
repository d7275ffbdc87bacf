//! In-memory name-to-coordinate table.

use std::collections::HashMap;

use geo::Coord;

use super::{CoordinateLookup, LookupError};

/// A caller-owned table mapping location names to coordinates.
///
/// Names are matched exactly; no case folding is applied.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use politician_core::{CoordinateLookup, TableLookup};
///
/// let table = TableLookup::new()
///     .with_lat_lon("Texas", 30.2672, -97.7431)
///     .with_lat_lon("Utah", 40.7608, -111.8910);
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(
///     table.lookup("Utah").ok(),
///     Some(Coord { x: -111.8910, y: 40.7608 })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableLookup {
    entries: HashMap<String, Coord<f64>>,
}

impl TableLookup {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the table with `name` mapped to `coord`.
    #[must_use]
    pub fn with_entry(mut self, name: impl Into<String>, coord: Coord<f64>) -> Self {
        self.insert(name, coord);
        self
    }

    /// Return the table with `name` mapped to the given latitude/longitude.
    #[must_use]
    pub fn with_lat_lon(self, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        self.with_entry(
            name,
            Coord {
                x: longitude,
                y: latitude,
            },
        )
    }

    /// Insert or replace an entry, returning the previous coordinate.
    pub fn insert(&mut self, name: impl Into<String>, coord: Coord<f64>) -> Option<Coord<f64>> {
        self.entries.insert(name.into(), coord)
    }

    /// Number of known locations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S> FromIterator<(S, Coord<f64>)> for TableLookup
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, Coord<f64>)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, coord)| (name.into(), coord))
                .collect(),
        }
    }
}

impl CoordinateLookup for TableLookup {
    fn lookup(&self, name: &str) -> Result<Coord<f64>, LookupError> {
        if name.trim().is_empty() {
            return Err(LookupError::EmptyIdentifier);
        }
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| LookupError::UnknownLocation {
                name: name.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn table() -> TableLookup {
        TableLookup::new()
            .with_lat_lon("Maine", 44.3106, -69.7795)
            .with_lat_lon("Ohio", 39.9612, -82.9988)
    }

    #[rstest]
    fn resolves_known_names(table: TableLookup) {
        let coord = table.lookup("Maine").expect("Maine is in the table");
        assert_eq!(coord, Coord { x: -69.7795, y: 44.3106 });
    }

    #[rstest]
    fn unknown_names_are_reported(table: TableLookup) {
        let err = table.lookup("Atlantis").expect_err("Atlantis is unknown");
        assert_eq!(
            err,
            LookupError::UnknownLocation {
                name: "Atlantis".into()
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_names_are_rejected(table: TableLookup, #[case] name: &str) {
        assert_eq!(table.lookup(name), Err(LookupError::EmptyIdentifier));
    }

    #[rstest]
    fn lookup_is_case_sensitive(table: TableLookup) {
        assert!(table.lookup("maine").is_err());
    }

    #[rstest]
    fn insert_replaces_existing_entry(mut table: TableLookup) {
        let previous = table.insert("Ohio", Coord { x: 0.0, y: 0.0 });
        assert_eq!(previous, Some(Coord { x: -82.9988, y: 39.9612 }));
        assert_eq!(table.len(), 2);
    }

    #[rstest]
    fn collects_from_pairs() {
        let table: TableLookup = [("a", Coord { x: 1.0, y: 2.0 })].into_iter().collect();
        assert_eq!(table.lookup("a"), Ok(Coord { x: 1.0, y: 2.0 }));
        assert!(!table.is_empty());
    }
}
