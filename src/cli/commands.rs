//! CLI command handlers.
//!
//! Each handler plays the host role: it builds a [`Session`], drives it to
//! its target, and prints what the engine reports.

use std::process::ExitCode;

use tracing::warn;

use super::output::{print_help, print_report, print_slice, print_version};
use super::{Args, Command, RunOptions};
use crate::config::RunConfig;
use crate::engine::Axis;
use crate::error::{SimError, SimResult};
use crate::export::export_csv;
use crate::logging::init_tracing;
use crate::report::StatsReport;
use crate::session::Session;

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run(options) => {
            init_tracing(options.verbose);
            exit_code(run_simulation(&options))
        }
        Command::Slice {
            axis,
            position,
            thickness,
            mut options,
        } => {
            init_tracing(options.verbose);
            options.axis = Some(axis);
            options.position = Some(position);
            options.thickness = Some(thickness);
            exit_code(run_slice(&options))
        }
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

fn exit_code(result: SimResult<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_invalid_input() {
                warn!(error = %e, "rejected input");
            }
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Build the effective configuration: file (or defaults) plus CLI overrides.
///
/// # Errors
///
/// Returns error if the file cannot be loaded, an override is invalid, or
/// the merged configuration fails validation.
pub fn resolve_config(options: &RunOptions) -> SimResult<RunConfig> {
    let mut config = match &options.config_path {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };

    if let Some(seed) = options.seed {
        config.reproducibility.seed = Some(seed);
    }
    if let Some(target) = options.target {
        config.sampling.target = target;
    }
    if let Some(batch) = options.batch {
        config.sampling.batch_size =
            u64::try_from(batch).map_err(|_| SimError::InvalidBatchSize { requested: batch })?;
    }
    if let Some(axis) = &options.axis {
        config.slice.axis = axis.parse::<Axis>()?;
    }
    if let Some(position) = options.position {
        config.slice.position = position;
    }
    if let Some(thickness) = options.thickness {
        config.slice.thickness = thickness;
    }

    // Shrink the default batch for small targets instead of rejecting them.
    if options.batch.is_none() && config.sampling.batch_size > config.sampling.target {
        config.sampling.batch_size = config.sampling.target;
    }

    config.check()?;
    Ok(config)
}

/// Drive a session to its target, returning it with the merged configuration.
fn run_session(options: &RunOptions) -> SimResult<(Session, RunConfig)> {
    let config = resolve_config(options)?;
    let mut session = Session::from_config(&config)?;
    session.run_to_target();

    if let Some(path) = &options.csv_path {
        let rows = export_csv(session.engine(), path)?;
        eprintln!("Exported {rows} points to {}", path.display());
    }
    Ok((session, config))
}

/// Run a full simulation and print both estimates.
///
/// # Errors
///
/// Returns error on invalid configuration or failed export.
pub fn run_simulation(options: &RunOptions) -> SimResult<()> {
    let (session, config) = run_session(options)?;
    let report = StatsReport::capture(session.engine(), config.slice.to_params()?)
        .with_progress(session.progress());
    print_report(&report, options.json)
}

/// Run a simulation and print only the requested slab.
///
/// # Errors
///
/// Returns error on invalid slab arguments or configuration.
pub fn run_slice(options: &RunOptions) -> SimResult<()> {
    let (session, config) = run_session(options)?;
    let stats = session.engine().slice_stats(config.slice.to_params()?);
    print_slice(&stats, options.json)
}
