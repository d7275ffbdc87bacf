use geo::Coord;

/// A named place resolved to a geographic coordinate.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
/// Locations are resolved once per solve and are not mutated afterwards.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use politician_core::Location;
///
/// let boise = Location::from_lat_lon("Idaho", 43.6150, -116.2023);
///
/// assert_eq!(boise.name, "Idaho");
/// assert_eq!(boise.coord, Coord { x: -116.2023, y: 43.6150 });
/// assert_eq!(boise.latitude(), 43.6150);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Identifier supplied by the caller.
    pub name: String,
    /// Resolved position.
    pub coord: Coord<f64>,
}

impl Location {
    /// Construct a `Location` from a name and a `geo` coordinate.
    pub fn new(name: impl Into<String>, coord: Coord<f64>) -> Self {
        Self {
            name: name.into(),
            coord,
        }
    }

    /// Construct a `Location` from latitude and longitude in degrees.
    pub fn from_lat_lon(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self::new(
            name,
            Coord {
                x: longitude,
                y: latitude,
            },
        )
    }

    /// Latitude in degrees.
    pub const fn latitude(&self) -> f64 {
        self.coord.y
    }

    /// Longitude in degrees.
    pub const fn longitude(&self) -> f64 {
        self.coord.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lat_lon_stores_latitude_in_y() {
        let location = Location::from_lat_lon("Juneau", 58.3019, -134.4197);
        assert_eq!(location.coord.y, 58.3019);
        assert_eq!(location.coord.x, -134.4197);
        assert_eq!(location.longitude(), -134.4197);
    }
}
