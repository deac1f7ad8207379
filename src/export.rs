//! CSV export of the point history.
//!
//! One row per point with columns `x,y,z,in_sphere`, the flag written as
//! `1` or `0`. Coordinates use Rust's shortest round-trip float formatting,
//! so a re-read file reproduces the exact stored values.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::engine::{PointsView, SamplingEngine};
use crate::error::{SimError, SimResult};

/// Header row of every export.
pub const CSV_HEADER: &str = "x,y,z,in_sphere";

/// Write `points` as CSV to `writer`, returning the number of data rows.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the writer fails.
pub fn write_csv<W: Write>(points: PointsView<'_>, mut writer: W) -> SimResult<u64> {
    writeln!(writer, "{CSV_HEADER}")?;
    let mut rows = 0u64;
    for p in points.iter() {
        writeln!(writer, "{},{},{},{}", p.x, p.y, p.z, u8::from(p.in_sphere))?;
        rows += 1;
    }
    writer.flush()?;
    Ok(rows)
}

/// Export the engine's full history to a CSV file at `path`.
///
/// # Errors
///
/// Returns [`SimError::Config`] when there is nothing to export, or
/// [`SimError::Io`] if the file cannot be written.
pub fn export_csv<P: AsRef<Path>>(engine: &SamplingEngine, path: P) -> SimResult<u64> {
    let points = engine.all_points();
    if points.is_empty() {
        return Err(SimError::config(
            "no points to export; run the simulation first",
        ));
    }
    let path = path.as_ref();
    let file = File::create(path)?;
    let rows = write_csv(points, BufWriter::new(file))?;
    info!(rows, path = %path.display(), "exported points to CSV");
    Ok(rows)
}
