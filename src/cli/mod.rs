//! CLI module for spherepi.
//!
//! All CLI logic lives here so it can be tested without a process boundary.
//! `main.rs` only parses arguments and calls [`run_cli`].

mod args;
mod commands;
mod output;

pub use args::{Args, Command, RunOptions};
pub use commands::{resolve_config, run_cli, run_simulation, run_slice};
pub use output::{
    print_help, print_report, print_slice, print_version, render_slice_text, version_string,
};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests;
