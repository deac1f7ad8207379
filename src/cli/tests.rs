//! CLI module tests.

use super::args::{Args, Command, RunOptions};
use super::commands::{resolve_config, run_cli, run_simulation, run_slice};
use super::output::{render_slice_text, version_string};
use crate::engine::{Axis, SamplingEngine, SliceParams, UNDEFINED_MARK};
use crate::error::SimError;
use std::path::PathBuf;
use std::process::ExitCode;

// ============================================================================
// Args parsing tests
// ============================================================================

#[test]
fn test_parse_no_args_shows_help() {
    let args = Args::parse_from(["spherepi"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_help_variants() {
    for flag in ["-h", "--help", "help"] {
        let args = Args::parse_from(["spherepi", flag]);
        assert_eq!(args.command, Command::Help, "flag {flag}");
    }
}

#[test]
fn test_parse_version_variants() {
    for flag in ["-V", "--version", "version"] {
        let args = Args::parse_from(["spherepi", flag]);
        assert_eq!(args.command, Command::Version, "flag {flag}");
    }
}

#[test]
fn test_parse_unknown_command() {
    let args = Args::parse_from(["spherepi", "frobnicate"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_run_defaults() {
    let args = Args::parse_from(["spherepi", "run"]);
    assert_eq!(args.command, Command::Run(RunOptions::default()));
}

#[test]
fn test_parse_run_with_config_and_options() {
    let args = Args::parse_from([
        "spherepi",
        "run",
        "run.yaml",
        "--seed",
        "42",
        "--target",
        "5000",
        "--batch",
        "500",
        "--axis",
        "x",
        "--position",
        "-0.5",
        "--thickness",
        "0.1",
        "--csv",
        "out.csv",
        "--json",
        "-v",
    ]);
    let Command::Run(options) = args.command else {
        panic!("expected run command");
    };
    assert_eq!(options.config_path, Some(PathBuf::from("run.yaml")));
    assert_eq!(options.seed, Some(42));
    assert_eq!(options.target, Some(5000));
    assert_eq!(options.batch, Some(500));
    assert_eq!(options.axis.as_deref(), Some("x"));
    assert_eq!(options.position, Some(-0.5));
    assert_eq!(options.thickness, Some(0.1));
    assert_eq!(options.csv_path, Some(PathBuf::from("out.csv")));
    assert!(options.json);
    assert!(options.verbose);
}

#[test]
fn test_parse_run_config_flag() {
    let args = Args::parse_from(["spherepi", "run", "--config", "a.yaml"]);
    let Command::Run(options) = args.command else {
        panic!("expected run command");
    };
    assert_eq!(options.config_path, Some(PathBuf::from("a.yaml")));
}

#[test]
fn test_parse_run_negative_batch_is_kept_for_reporting() {
    let args = Args::parse_from(["spherepi", "run", "--batch", "-5"]);
    let Command::Run(options) = args.command else {
        panic!("expected run command");
    };
    assert_eq!(options.batch, Some(-5));
}

#[test]
fn test_parse_run_missing_value() {
    let args = Args::parse_from(["spherepi", "run", "--seed"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_run_bad_number() {
    let args = Args::parse_from(["spherepi", "run", "--seed", "abc"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_run_unexpected_argument() {
    let args = Args::parse_from(["spherepi", "run", "--frob"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_slice() {
    let args = Args::parse_from(["spherepi", "slice", "y", "-0.3", "0.05", "--seed", "7"]);
    let Command::Slice {
        axis,
        position,
        thickness,
        options,
    } = args.command
    else {
        panic!("expected slice command");
    };
    assert_eq!(axis, "y");
    assert_eq!(position, -0.3);
    assert_eq!(thickness, 0.05);
    assert_eq!(options.seed, Some(7));
}

#[test]
fn test_parse_slice_missing_arguments() {
    let args = Args::parse_from(["spherepi", "slice", "z", "0.0"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_slice_bad_position() {
    let args = Args::parse_from(["spherepi", "slice", "z", "middle", "0.1"]);
    assert_eq!(args.command, Command::Help);
}

// ============================================================================
// Config resolution tests
// ============================================================================

fn options_with_seed(seed: u64) -> RunOptions {
    RunOptions {
        seed: Some(seed),
        target: Some(2_000),
        ..RunOptions::default()
    }
}

#[test]
fn test_resolve_config_applies_overrides() {
    let options = RunOptions {
        axis: Some("1".to_string()),
        position: Some(0.25),
        thickness: Some(0.1),
        batch: Some(100),
        ..options_with_seed(9)
    };
    let config = resolve_config(&options).expect("valid overrides");
    assert_eq!(config.reproducibility.seed, Some(9));
    assert_eq!(config.sampling.target, 2_000);
    assert_eq!(config.sampling.batch_size, 100);
    assert_eq!(config.slice.axis, Axis::Y);
    assert_eq!(config.slice.position, 0.25);
    assert_eq!(config.slice.thickness, 0.1);
}

#[test]
fn test_resolve_config_shrinks_default_batch() {
    let options = RunOptions {
        target: Some(10),
        ..RunOptions::default()
    };
    let config = resolve_config(&options).expect("valid");
    assert_eq!(config.sampling.batch_size, 10);
}

#[test]
fn test_resolve_config_rejects_negative_batch() {
    let options = RunOptions {
        batch: Some(-3),
        ..options_with_seed(1)
    };
    let err = resolve_config(&options).unwrap_err();
    assert!(matches!(err, SimError::InvalidBatchSize { requested: -3 }));
}

#[test]
fn test_resolve_config_rejects_bad_axis() {
    let options = RunOptions {
        axis: Some("w".to_string()),
        ..options_with_seed(1)
    };
    let err = resolve_config(&options).unwrap_err();
    assert!(matches!(err, SimError::InvalidAxis { .. }));
}

#[test]
fn test_resolve_config_rejects_zero_thickness() {
    let options = RunOptions {
        thickness: Some(0.0),
        ..options_with_seed(1)
    };
    let err = resolve_config(&options).unwrap_err();
    assert!(matches!(err, SimError::InvalidThickness { .. }));
}

#[test]
fn test_resolve_config_rejects_out_of_range_position() {
    let options = RunOptions {
        position: Some(1.5),
        ..options_with_seed(1)
    };
    let err = resolve_config(&options).unwrap_err();
    assert!(matches!(err, SimError::InvalidPosition { .. }));
}

#[test]
fn test_resolve_config_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("run.yaml");
    std::fs::write(
        &path,
        "reproducibility:\n  seed: 11\nsampling:\n  target: 3000\n  batch_size: 300\n",
    )
    .expect("write config");

    let options = RunOptions {
        config_path: Some(path),
        target: Some(6_000),
        ..RunOptions::default()
    };
    let config = resolve_config(&options).expect("valid file");
    assert_eq!(config.reproducibility.seed, Some(11));
    assert_eq!(config.sampling.target, 6_000);
    assert_eq!(config.sampling.batch_size, 300);
}

#[test]
fn test_resolve_config_missing_file() {
    let options = RunOptions {
        config_path: Some(PathBuf::from("/nonexistent/run.yaml")),
        ..RunOptions::default()
    };
    assert!(matches!(
        resolve_config(&options).unwrap_err(),
        SimError::Io(_)
    ));
}

// ============================================================================
// Command execution tests
// ============================================================================

#[test]
fn test_run_simulation_succeeds() {
    let result = run_simulation(&options_with_seed(42));
    assert!(result.is_ok());
}

#[test]
fn test_run_simulation_json() {
    let options = RunOptions {
        json: true,
        ..options_with_seed(42)
    };
    assert!(run_simulation(&options).is_ok());
}

#[test]
fn test_run_slice_succeeds() {
    let options = RunOptions {
        axis: Some("x".to_string()),
        position: Some(0.5),
        thickness: Some(0.1),
        ..options_with_seed(42)
    };
    assert!(run_slice(&options).is_ok());
}

#[test]
fn test_run_simulation_exports_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("points.csv");
    let options = RunOptions {
        csv_path: Some(path.clone()),
        ..options_with_seed(42)
    };
    run_simulation(&options).expect("run");
    let content = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(content.lines().count(), 2_001);
}

fn same_exit(a: ExitCode, b: ExitCode) -> bool {
    format!("{a:?}") == format!("{b:?}")
}

#[test]
fn test_run_cli_help_and_version() {
    let help = run_cli(Args {
        command: Command::Help,
    });
    assert!(same_exit(help, ExitCode::SUCCESS));
    let version = run_cli(Args {
        command: Command::Version,
    });
    assert!(same_exit(version, ExitCode::SUCCESS));
}

#[test]
fn test_run_cli_invalid_input_fails() {
    let args = Args::parse_from(["spherepi", "slice", "z", "0.0", "-1", "--target", "100"]);
    assert!(same_exit(run_cli(args), ExitCode::from(1)));
}

#[test]
fn test_run_cli_run_succeeds() {
    let args = Args::parse_from(["spherepi", "run", "--seed", "5", "--target", "1000"]);
    assert!(same_exit(run_cli(args), ExitCode::SUCCESS));
}

// ============================================================================
// Output tests
// ============================================================================

#[test]
fn test_version_string() {
    let version = version_string();
    assert!(version.starts_with("spherepi "));
    assert!(version.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_render_slice_text_undefined() {
    let engine = SamplingEngine::new(42);
    let params = SliceParams::new(Axis::Z, 0.0, 0.02).expect("valid");
    let text = render_slice_text(&engine.slice_stats(params));
    assert!(text.contains(&format!("π (2D):          {UNDEFINED_MARK}")));
    assert!(text.contains("no samples"));
}

#[test]
fn test_render_slice_text_defined() {
    let mut engine = SamplingEngine::new(42);
    let _ = engine.next_batch(100_000);
    let params = SliceParams::new(Axis::Z, 0.0, 0.05).expect("valid");
    let text = render_slice_text(&engine.slice_stats(params));
    assert!(text.contains("Slice:           Z=0.00 (Δ=0.050)"));
    assert!(!text.contains(UNDEFINED_MARK));
    assert!(!text.contains("Note:"));
}

#[test]
fn test_render_slice_text_sparse_slab_shows_value() {
    let mut engine = SamplingEngine::new(42);
    let _ = engine.next_batch(500);
    let params = SliceParams::new(Axis::Z, 0.0, 0.05).expect("valid");
    let stats = engine.slice_stats(params);
    let pi_hat = stats.pi_hat().expect("non-empty slab has an estimate");

    let text = render_slice_text(&stats);
    assert!(text.contains(&format!("π (2D):          {pi_hat:.5}")));
    assert!(!text.contains(UNDEFINED_MARK));
}
