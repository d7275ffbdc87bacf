//! Coordinate sources for the Politician tour planner.
//!
//! Responsibilities:
//! - Map US state names to the zip code of their capital.
//! - Load zip-code coordinate databases from CSV.
//! - Combine both into a [`CoordinateLookup`](politician_core::CoordinateLookup)
//!   that resolves a state name to its capital's coordinates.
//!
//! Boundaries:
//! - No solving and no distance computation (live in `politician-core` and
//!   `politician-solver-hk`).
//! - No network access; databases are read from local files or readers.
//!
//! Invariants:
//! - No global mutable state. Databases are owned by the caller.

#![forbid(unsafe_code)]

mod capitals;
mod zip_codes;

pub use capitals::{CapitalLookup, STATE_CAPITAL_ZIP_CODES, capital_zip};
pub use zip_codes::{ZipCodeDatabase, ZipDatabaseError};
