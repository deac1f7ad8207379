//! CLI output formatting.
//!
//! Rendering lives in functions that return `String` so the output can be
//! tested; the `print_*` wrappers only write to stdout.

use std::fmt::Write as _;

use crate::engine::SliceStats;
use crate::error::SimResult;
use crate::report::{group_thousands, StatsReport};

/// Version string including the git hash when the build could read it.
#[must_use]
pub fn version_string() -> String {
    match option_env!("GIT_HASH") {
        Some(hash) => format!("spherepi {} ({hash})", env!("CARGO_PKG_VERSION")),
        None => format!("spherepi {}", env!("CARGO_PKG_VERSION")),
    }
}

/// Print version information.
pub fn print_version() {
    println!("{}", version_string());
}

/// Print help message.
pub fn print_help() {
    println!(
        r"spherepi - Monte Carlo estimation of π from a sphere and its slices

USAGE:
    spherepi <COMMAND> [OPTIONS]

COMMANDS:
    run [config.yaml]           Sample up to the target and report both estimates
    slice <axis> <pos> <thick>  Sample up to the target and report one slab
    help                        Show this help message
    version                     Show version information

OPTIONS:
    --config <PATH>             YAML run configuration
    --seed <N>                  Seed of the point stream (random if omitted)
    --target <N>                Total points to generate (default: 100000)
    --batch <N>                 Points per batch (default: 1000)
    --axis <x|y|z>              Slice axis (default: z)
    --position <P>              Slice plane coordinate in [-1, 1] (default: 0)
    --thickness <T>             Slab width, > 0 (default: 0.02)
    --csv <PATH>                Export every generated point afterwards
    --json                      Print the report as JSON
    -v, --verbose               Debug logging (SPHEREPI_LOG overrides)

EXAMPLES:
    spherepi run --seed 42 --target 1000000
    spherepi run run.yaml --json
    spherepi slice z 0.3 0.05 --seed 7 --csv points.csv
"
    );
}

/// Text block for a single slab.
#[must_use]
pub fn render_slice_text(stats: &SliceStats) -> String {
    let estimate = stats.estimate;
    let mut out = String::new();
    let _ = writeln!(out, "Slice:           {}", stats.params);
    let _ = writeln!(out, "Radius r(s):     {:.6}", stats.radius);
    let _ = writeln!(out, "Slice points:    {}", group_thousands(stats.slice_total));
    let _ = writeln!(out, "Slice in disk:   {}", group_thousands(stats.slice_inside));
    let _ = writeln!(out, "π (2D):          {}", estimate.format_value(5));
    let _ = write!(out, "|error| (2D):    {}", estimate.format_error(5));
    if let Some(reason) = estimate.reason() {
        let _ = write!(out, "\nNote:            {reason}");
    }
    out
}

/// Print a full run report.
///
/// # Errors
///
/// Returns error if JSON serialization fails.
pub fn print_report(report: &StatsReport, json: bool) -> SimResult<()> {
    if json {
        println!("{}", report.render_json()?);
    } else {
        println!("{}", report.render_text());
    }
    Ok(())
}

/// Print statistics for one slab.
///
/// # Errors
///
/// Returns error if JSON serialization fails.
pub fn print_slice(stats: &SliceStats, json: bool) -> SimResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    } else {
        println!("{}", render_slice_text(stats));
    }
    Ok(())
}
