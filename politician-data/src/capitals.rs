//! State capitals keyed by state name.

use geo::Coord;
use politician_core::{CoordinateLookup, LookupError};

use crate::ZipCodeDatabase;

/// Zip code of each state capital, plus the federal capital.
pub const STATE_CAPITAL_ZIP_CODES: &[(&str, u32)] = &[
    ("Alabama", 36043),
    ("Alaska", 99801),
    ("Arizona", 85001),
    ("Arkansas", 72201),
    ("California", 94203),
    ("Colorado", 80201),
    ("Connecticut", 6101),
    ("Delaware", 19901),
    ("Florida", 32301),
    ("Georgia", 30301),
    ("Hawaii", 96801),
    ("Idaho", 83701),
    ("Illinois", 62701),
    ("Indiana", 46201),
    ("Iowa", 50301),
    ("Kansas", 66601),
    ("Kentucky", 40601),
    ("Louisiana", 70801),
    ("Maine", 4330),
    ("Maryland", 21401),
    ("Massachusetts", 2108),
    ("Michigan", 48901),
    ("Minnesota", 55101),
    ("Mississippi", 39201),
    ("Missouri", 65101),
    ("Montana", 59601),
    ("Nebraska", 68501),
    ("Nevada", 89701),
    ("New Hampshire", 3301),
    ("New Jersey", 8601),
    ("New Mexico", 87501),
    ("New York", 12201),
    ("North Carolina", 27601),
    ("North Dakota", 58501),
    ("Ohio", 43201),
    ("Oklahoma", 73101),
    ("Oregon", 97301),
    ("Pennsylvania", 17101),
    ("Rhode Island", 2901),
    ("South Carolina", 29201),
    ("South Dakota", 57501),
    ("Tennessee", 37201),
    ("Texas", 73301),
    ("Utah", 84101),
    ("Vermont", 5601),
    ("Virginia", 23218),
    ("Washington", 98501),
    ("West Virginia", 25301),
    ("Wisconsin", 53701),
    ("Wyoming", 82001),
    ("Washington D.C.", 20500),
];

/// Zip code of the capital of `state`, matched exactly after trimming.
///
/// # Examples
/// ```
/// use politician_data::capital_zip;
///
/// assert_eq!(capital_zip("Texas"), Some(73301));
/// assert_eq!(capital_zip(" Maine "), Some(4330));
/// assert_eq!(capital_zip("Atlantis"), None);
/// ```
pub fn capital_zip(state: &str) -> Option<u32> {
    let wanted = state.trim();
    STATE_CAPITAL_ZIP_CODES
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|&(_, zip)| zip)
}

/// Resolves a state name to the coordinates of its capital.
///
/// The state is mapped to its capital's zip code through
/// [`STATE_CAPITAL_ZIP_CODES`], then the zip code is resolved through the
/// supplied [`ZipCodeDatabase`].
#[derive(Debug, Clone, Default)]
pub struct CapitalLookup {
    database: ZipCodeDatabase,
}

impl CapitalLookup {
    /// Wrap a loaded zip-code database.
    pub const fn new(database: ZipCodeDatabase) -> Self {
        Self { database }
    }

    /// The underlying database.
    pub const fn database(&self) -> &ZipCodeDatabase {
        &self.database
    }
}

impl CoordinateLookup for CapitalLookup {
    fn lookup(&self, name: &str) -> Result<Coord<f64>, LookupError> {
        if name.trim().is_empty() {
            return Err(LookupError::EmptyIdentifier);
        }
        let zip = capital_zip(name).ok_or_else(|| LookupError::UnknownLocation {
            name: name.to_owned(),
        })?;
        self.database
            .get(zip)
            .ok_or_else(|| LookupError::MissingCoordinates {
                name: name.to_owned(),
                reason: format!("capital zip code {zip:05} is not in the database"),
            })
    }
}
