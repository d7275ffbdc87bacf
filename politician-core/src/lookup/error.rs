use thiserror::Error;

/// Errors from [`crate::lookup::CoordinateLookup::lookup`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The identifier was empty or whitespace.
    #[error("location identifier must not be empty")]
    EmptyIdentifier,
    /// The lookup source has no entry for the identifier.
    #[error("no coordinates known for location {name:?}")]
    UnknownLocation {
        /// Identifier that failed to resolve.
        name: String,
    },
    /// The identifier is known but its coordinates are unavailable, e.g. a
    /// missing data row.
    #[error("coordinates for {name:?} are unavailable: {reason}")]
    MissingCoordinates {
        /// Identifier that failed to resolve.
        name: String,
        /// Human-readable cause.
        reason: String,
    },
}
