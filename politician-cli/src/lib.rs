//! Command-line interface for the Politician tour planner.
//!
//! Two subcommands are exposed:
//! - `solve` reads a JSON tour request, resolves every state through the
//!   capital zip-code database and writes the shortest route as a JSON
//!   report.
//! - `lookup` prints the coordinates the planner would use for each name.
//!
//! Options are layered with `ortho_config`: defaults, then a configuration
//! file, then `POLITICIAN_*` environment variables, then flags.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod lookup;
mod request;
mod solve;

pub use error::CliError;
pub use request::{TourReport, TourRequestFile, Waypoints};

use lookup::{LookupArgs, run_lookup};
use solve::{SolveArgs, run_solve};

pub(crate) const ARG_SOLVE_REQUEST: &str = "request";
pub(crate) const ARG_ZIP_DB: &str = "zip-db";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_UNIT: &str = "unit";
pub(crate) const ARG_MAX_NODES: &str = "max-nodes";
pub(crate) const ENV_SOLVE_REQUEST: &str = "POLITICIAN_CMDS_SOLVE_REQUEST_PATH";

/// Zip-code database looked up relative to the working directory.
pub(crate) const DEFAULT_ZIP_DB: &str = "zip-codes-database-FREE.csv";

/// Run the Politician CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when argument parsing, configuration layering,
/// input loading, solving or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => run_solve(args),
        Command::Lookup(args) => run_lookup(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "politician",
    about = "Plan the shortest tour through state capitals with fixed endpoints",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Solve a tour request read from a JSON file.
    Solve(SolveArgs),
    /// Print the coordinates resolved for each state.
    Lookup(LookupArgs),
}

#[cfg(test)]
mod tests;
