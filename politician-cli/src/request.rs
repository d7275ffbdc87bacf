//! On-disk request and report formats for the `solve` command.
//!
//! A request names the starting state, the states to visit and the final
//! state:
//!
//! ```json
//! { "start": "Texas", "middle": "Oklahoma,Kansas", "end": "Colorado" }
//! ```
//!
//! `middle` may also be a JSON array of names. The report echoes the request
//! under `Input` next to the `Total Distance` and the visiting order in
//! `Path`.

use politician_core::{SolveRequest, SolveResponse};
use serde::{Deserialize, Serialize};

/// States to visit between the start and the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Waypoints {
    /// Comma-separated names, e.g. `"Oklahoma, Kansas"`.
    Joined(String),
    /// One name per element.
    List(Vec<String>),
}

impl Waypoints {
    /// Individual names, trimmed, with empty entries dropped.
    ///
    /// # Examples
    /// ```
    /// use politician_cli::Waypoints;
    ///
    /// let joined = Waypoints::Joined("Utah, Idaho,,".to_owned());
    /// assert_eq!(joined.names(), ["Utah", "Idaho"]);
    /// ```
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let pieces: Box<dyn Iterator<Item = &str>> = match self {
            Self::Joined(text) => Box::new(text.split(',')),
            Self::List(items) => Box::new(items.iter().map(String::as_str)),
        };
        pieces
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

impl Default for Waypoints {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// A tour request as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourRequestFile {
    /// State the tour starts in.
    pub start: String,
    /// States to visit, in any order.
    #[serde(default)]
    pub middle: Waypoints,
    /// State the tour finishes in.
    pub end: String,
}

impl TourRequestFile {
    /// Convert to the solver's request type.
    #[must_use]
    pub fn to_solve_request(&self) -> SolveRequest {
        SolveRequest::new(self.start.clone(), self.middle.names(), self.end.clone())
    }
}

/// Report written after a successful solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourReport {
    /// The request exactly as it was read.
    #[serde(rename = "Input")]
    pub input: TourRequestFile,
    /// Length of the route in the configured unit.
    #[serde(rename = "Total Distance")]
    pub total_distance: f64,
    /// Names in visiting order, start first and end last.
    #[serde(rename = "Path")]
    pub path: Vec<String>,
}

impl TourReport {
    /// Pair a request with the solver's answer.
    #[must_use]
    pub fn new(input: TourRequestFile, response: &SolveResponse) -> Self {
        Self {
            input,
            total_distance: response.total_distance,
            path: response.route_names().map(str::to_owned).collect(),
        }
    }
}
