//! Solve command implementation for the Politician CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use politician_core::{Geodesic, Solver};
use politician_data::{CapitalLookup, ZipCodeDatabase};
use politician_solver_hk::{DEFAULT_MAX_NODES, HeldKarpConfig, HeldKarpSolver};
use serde::{Deserialize, Serialize};

use crate::fs::{create_utf8_file, file_is_file, open_utf8_file};
use crate::request::{TourReport, TourRequestFile};
use crate::{
    ARG_MAX_NODES, ARG_OUTPUT, ARG_SOLVE_REQUEST, ARG_UNIT, ARG_ZIP_DB, CliError, DEFAULT_ZIP_DB,
    ENV_SOLVE_REQUEST,
};

/// Unit the tour length is reported in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum DistanceUnit {
    /// Statute miles.
    #[default]
    Miles,
    /// Kilometres.
    Kilometres,
}

impl DistanceUnit {
    pub(crate) const fn metric(self) -> Geodesic {
        match self {
            Self::Miles => Geodesic::miles(),
            Self::Kilometres => Geodesic::kilometres(),
        }
    }
}

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "solve",
    long_about = "Solve a tour request stored as JSON. Each state is resolved \
                 to its capital through the zip-code database and the shortest \
                 route from the start through every listed state to the end is \
                 written as a JSON report.",
    about = "Find the shortest tour for a request file"
)]
#[ortho_config(prefix = "POLITICIAN")]
pub(crate) struct SolveArgs {
    /// Path to a JSON file holding `start`, `middle` and `end`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Zip-code CSV with `ZipCode`, `Latitude` and `Longitude` columns.
    #[arg(long = ARG_ZIP_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) zip_db: Option<Utf8PathBuf>,
    /// Write the report here instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Unit for the reported distance.
    #[arg(long = ARG_UNIT, value_enum)]
    #[serde(default)]
    pub(crate) unit: Option<DistanceUnit>,
    /// Refuse tours with more nodes than this (start, end and closing node
    /// included).
    #[arg(long = ARG_MAX_NODES, value_name = "count")]
    #[serde(default)]
    pub(crate) max_nodes: Option<usize>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the zip-code database.
    pub(crate) zip_db: Utf8PathBuf,
    /// Report destination; standard output when absent.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Reporting unit.
    pub(crate) unit: DistanceUnit,
    /// Solver admission limit.
    pub(crate) max_nodes: usize,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_SOLVE_REQUEST)
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SOLVE_REQUEST,
            env: ENV_SOLVE_REQUEST,
        })?;
        Ok(Self {
            request_path,
            zip_db: args
                .zip_db
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_ZIP_DB)),
            output: args.output,
            unit: args.unit.unwrap_or_default(),
            max_nodes: args.max_nodes.unwrap_or(DEFAULT_MAX_NODES),
        })
    }
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Open the zip-code database and wrap it in a capital lookup.
pub(crate) fn load_capitals(path: &Utf8Path) -> Result<CapitalLookup, CliError> {
    require_existing(path, ARG_ZIP_DB)?;
    let database = ZipCodeDatabase::open(path)?;
    info!("loaded {} zip codes from {path}", database.len());
    Ok(CapitalLookup::new(database))
}

/// Builds a solver instance for the current solve invocation.
pub(crate) trait SolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError>;
}

pub(crate) struct DefaultSolveSolverBuilder;

impl SolveSolverBuilder for DefaultSolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
        let lookup = load_capitals(&config.zip_db)?;
        let solver_config = HeldKarpConfig {
            max_nodes: config.max_nodes,
        };
        Ok(Box::new(HeldKarpSolver::with_config(
            lookup,
            config.unit.metric(),
            solver_config,
        )))
    }
}

pub(crate) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultSolveSolverBuilder;
    run_solve_with(args, &builder, &mut stdout)
}

/// Solve and emit the report, to `--output` when set and `stdout` otherwise.
pub(crate) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
    stdout: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    let report = execute_solve(&config, builder)?;
    match &config.output {
        Some(path) => {
            let mut file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            write_report(&mut file, &report)
        }
        None => write_report(stdout, &report),
    }
}

fn execute_solve(
    config: &SolveConfig,
    builder: &dyn SolveSolverBuilder,
) -> Result<TourReport, CliError> {
    let input = load_tour_request(&config.request_path)?;
    let request = input.to_solve_request();
    request
        .validate_detailed()
        .map_err(|source| CliError::InvalidRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let solver = builder.build(config)?;
    let response = solver
        .solve(&request)
        .map_err(|source| CliError::Solve { source })?;
    info!(
        "tour of {} stops covers {:.3} {:?} ({} states in {:?})",
        response.route.len(),
        response.total_distance,
        config.unit,
        response.diagnostics.states_evaluated,
        response.diagnostics.solve_time
    );
    Ok(TourReport::new(input, &response))
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    info!("solve configuration: {config:?}");
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`TourRequestFile`] from disk.
pub(crate) fn load_tour_request(path: &Utf8Path) -> Result<TourRequestFile, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_report(writer: &mut dyn Write, report: &TourReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
