//! Lookup command: print the coordinates resolved for each state.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use politician_core::CoordinateLookup;
use serde::{Deserialize, Serialize};

use crate::solve::load_capitals;
use crate::{ARG_ZIP_DB, CliError, DEFAULT_ZIP_DB};

/// CLI arguments for the `lookup` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "lookup", about = "Print name,latitude,longitude for each state")]
#[ortho_config(prefix = "POLITICIAN")]
pub(crate) struct LookupArgs {
    /// State names, e.g. `Texas "New Mexico"`.
    #[arg(value_name = "state")]
    #[serde(default)]
    pub(crate) names: Vec<String>,
    /// Zip-code CSV with `ZipCode`, `Latitude` and `Longitude` columns.
    #[arg(long = ARG_ZIP_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) zip_db: Option<Utf8PathBuf>,
}

pub(crate) fn run_lookup(args: LookupArgs) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let mut stdout = std::io::stdout().lock();
    run_lookup_with(merged, &mut stdout)
}

pub(crate) fn run_lookup_with(args: LookupArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let zip_db = args
        .zip_db
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_ZIP_DB));
    let lookup = load_capitals(&zip_db)?;
    for name in &args.names {
        let coord = lookup.lookup(name).map_err(|source| CliError::Lookup {
            name: name.clone(),
            source,
        })?;
        writeln!(writer, "{name},{},{}", coord.y, coord.x).map_err(CliError::WriteOutput)?;
    }
    Ok(())
}
