//! spherepi CLI - Monte Carlo π from a sphere and its slices
//!
//! Thin wrapper: all logic lives in [`spherepi::cli`] so it can be tested.

use std::process::ExitCode;

use spherepi::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
