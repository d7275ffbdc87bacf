//! Zip-code coordinate database loaded from CSV.
//!
//! The file must carry a header row naming at least `ZipCode`, `Latitude`
//! and `Longitude`. Other columns are ignored, as are rows whose coordinates
//! are blank. When a zip code appears more than once the first row wins.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use geo::Coord;
use log::{debug, warn};
use politician_core::{CoordinateLookup, LookupError};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading a [`ZipCodeDatabase`].
#[derive(Debug, Error)]
pub enum ZipDatabaseError {
    /// The database file could not be opened.
    #[error("failed to open zip code database at {path}")]
    Open {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// A row could not be parsed.
    #[error("failed to parse zip code database{}", line_suffix(*.line))]
    Parse {
        /// One-based line number of the offending record, when known.
        line: Option<u64>,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
}

fn line_suffix(line: Option<u64>) -> String {
    line.map(|value| format!(" at line {value}"))
        .unwrap_or_default()
}

impl From<csv::Error> for ZipDatabaseError {
    fn from(source: csv::Error) -> Self {
        let line = source.position().map(csv::Position::line);
        Self::Parse { line, source }
    }
}

#[derive(Debug, Deserialize)]
struct ZipRecord {
    #[serde(rename = "ZipCode")]
    zip_code: u32,
    #[serde(rename = "Latitude")]
    latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    longitude: Option<f64>,
}

/// Zip code to coordinate table.
///
/// # Examples
/// ```
/// use politician_data::ZipCodeDatabase;
///
/// let csv = "ZipCode,City,Latitude,Longitude\n36043,Montgomery,32.3668,-86.2999\n";
/// let database = ZipCodeDatabase::from_reader(csv.as_bytes())?;
/// let coord = database.get(36043).expect("zip present");
/// assert_eq!((coord.y, coord.x), (32.3668, -86.2999));
/// # Ok::<(), politician_data::ZipDatabaseError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZipCodeDatabase {
    entries: HashMap<u32, Coord<f64>>,
}

impl ZipCodeDatabase {
    /// Parse a database from any CSV reader.
    ///
    /// # Errors
    ///
    /// Returns [`ZipDatabaseError::Parse`] when the header lacks a required
    /// column or a row holds a malformed zip code or coordinate.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, ZipDatabaseError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut entries = HashMap::new();
        let mut skipped = 0_usize;
        for record in csv_reader.deserialize::<ZipRecord>() {
            let row = record?;
            let (Some(latitude), Some(longitude)) = (row.latitude, row.longitude) else {
                skipped += 1;
                continue;
            };
            match entries.entry(row.zip_code) {
                Entry::Vacant(slot) => {
                    slot.insert(Coord {
                        x: longitude,
                        y: latitude,
                    });
                }
                Entry::Occupied(_) => {
                    warn!(
                        "duplicate zip code {:05}; keeping the first row",
                        row.zip_code
                    );
                }
            }
        }
        debug!(
            "loaded {} zip codes ({skipped} rows without coordinates skipped)",
            entries.len()
        );
        Ok(Self { entries })
    }

    /// Open and parse a database file.
    ///
    /// # Errors
    ///
    /// Returns [`ZipDatabaseError::Open`] if the file cannot be opened and
    /// [`ZipDatabaseError::Parse`] for malformed content.
    pub fn open(path: &Utf8Path) -> Result<Self, ZipDatabaseError> {
        let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
            ZipDatabaseError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_reader(io::BufReader::new(file))
    }

    /// Coordinates for `zip`, if present.
    pub fn get(&self, zip: u32) -> Option<Coord<f64>> {
        self.entries.get(&zip).copied()
    }

    /// Number of zip codes with coordinates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the database is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u32, Coord<f64>)> for ZipCodeDatabase {
    fn from_iter<I: IntoIterator<Item = (u32, Coord<f64>)>>(iter: I) -> Self {
        let mut entries = HashMap::new();
        for (zip, coord) in iter {
            entries.entry(zip).or_insert(coord);
        }
        Self { entries }
    }
}

/// Resolves identifiers written as zip codes, e.g. `"36043"` or `"02108"`.
impl CoordinateLookup for ZipCodeDatabase {
    fn lookup(&self, name: &str) -> Result<Coord<f64>, LookupError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(LookupError::EmptyIdentifier);
        }
        let zip: u32 = trimmed
            .parse()
            .map_err(|_| LookupError::UnknownLocation {
                name: name.to_owned(),
            })?;
        self.get(zip).ok_or_else(|| LookupError::MissingCoordinates {
            name: name.to_owned(),
            reason: format!("zip code {zip:05} is not in the database"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    const SAMPLE: &str = "\
ZipCode,ZipCodeType,City,State,Latitude,Longitude
36043,STANDARD,MONTGOMERY,AL,32.3668,-86.2999
2108,STANDARD,BOSTON,MA,42.3576,-71.0643
2108,PO BOX,BOSTON,MA,0.0,0.0
99999,UNIQUE,NOWHERE,ZZ,,
";

    #[fixture]
    fn database() -> ZipCodeDatabase {
        ZipCodeDatabase::from_reader(SAMPLE.as_bytes()).expect("sample parses")
    }

    #[rstest]
    fn loads_rows_with_coordinates(database: ZipCodeDatabase) {
        assert_eq!(database.len(), 2);
        assert_eq!(
            database.get(36043),
            Some(Coord {
                x: -86.2999,
                y: 32.3668
            })
        );
        assert_eq!(database.get(99999), None);
    }

    #[rstest]
    fn first_duplicate_row_wins(database: ZipCodeDatabase) {
        assert_eq!(
            database.get(2108),
            Some(Coord {
                x: -71.0643,
                y: 42.3576
            })
        );
    }

    #[rstest]
    #[case("36043")]
    #[case(" 02108 ")]
    fn lookup_accepts_zip_strings(database: ZipCodeDatabase, #[case] zip: &str) {
        assert!(database.lookup(zip).is_ok());
    }

    #[rstest]
    fn lookup_reports_missing_and_malformed_zips(database: ZipCodeDatabase) {
        assert!(matches!(
            database.lookup("99999"),
            Err(LookupError::MissingCoordinates { .. })
        ));
        assert!(matches!(
            database.lookup("Boston"),
            Err(LookupError::UnknownLocation { .. })
        ));
        assert_eq!(database.lookup(" "), Err(LookupError::EmptyIdentifier));
    }

    #[rstest]
    fn malformed_coordinates_report_line() {
        let csv = "ZipCode,Latitude,Longitude\n1,2.0,3.0\n2,north,3.0\n";
        let err = ZipCodeDatabase::from_reader(csv.as_bytes()).expect_err("bad latitude");
        assert!(matches!(err, ZipDatabaseError::Parse { line: Some(3), .. }));
        assert!(err.to_string().contains("line 3"));
    }

    #[rstest]
    fn missing_column_is_a_parse_error() {
        let csv = "ZipCode,Latitude\n1,2.0\n";
        let err = ZipCodeDatabase::from_reader(csv.as_bytes()).expect_err("no longitude");
        assert!(matches!(err, ZipDatabaseError::Parse { .. }));
    }

    #[rstest]
    fn open_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.csv")).expect("utf8 path");
        let err = ZipCodeDatabase::open(&path).expect_err("file is absent");
        assert!(matches!(err, ZipDatabaseError::Open { .. }));
    }

    #[rstest]
    fn open_reads_file_from_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let std_path = dir.path().join("zips.csv");
        std::fs::write(&std_path, SAMPLE).expect("write sample");
        let path = Utf8PathBuf::from_path_buf(std_path).expect("utf8 path");
        let database = ZipCodeDatabase::open(&path).expect("database loads");
        assert_eq!(database.len(), 2);
    }
}
