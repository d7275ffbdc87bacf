//! Error types emitted by the Politician CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use politician_core::{LookupError, SolveError, SolveRequestValidationError};
use politician_data::ZipDatabaseError;
use thiserror::Error;

/// Errors emitted by the Politician CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Path that could not be inspected.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the tour request file failed.
    #[error("failed to open tour request at {path:?}: {source}")]
    OpenRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Tour request JSON could not be decoded.
    #[error("failed to parse tour request JSON at {path:?}: {source}")]
    ParseRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The tour request failed validation.
    #[error("tour request in {path:?} failed validation: {source}")]
    InvalidRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: SolveRequestValidationError,
    },
    /// Loading the zip-code database failed.
    #[error(transparent)]
    LoadZipDatabase(#[from] ZipDatabaseError),
    /// The solver rejected the request.
    #[error("solver failed: {source}")]
    Solve {
        /// Solver failure.
        source: SolveError,
    },
    /// A name passed to `lookup` could not be resolved.
    #[error("failed to look up {name:?}: {source}")]
    Lookup {
        /// Name as given on the command line.
        name: String,
        /// Lookup failure.
        #[source]
        source: LookupError,
    },
    /// Serialising the tour report failed.
    #[error("failed to serialise tour report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Creating the report file failed.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        /// Output path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
