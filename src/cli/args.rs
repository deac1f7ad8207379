//! CLI argument parsing.
//!
//! Hand-written so the parser can be driven from any iterator in tests.
//! Values are kept as typed options; range checks happen when they are
//! applied to a [`RunConfig`](crate::config::RunConfig).

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Generate points up to a target and report both estimates.
    Run(RunOptions),
    /// Generate points up to a target and report one slab only.
    Slice {
        /// Axis name or index, validated later.
        axis: String,
        /// Plane coordinate.
        position: f64,
        /// Slab width.
        thickness: f64,
        /// Shared run options (seed, target, batch, output).
        options: RunOptions,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

/// Options shared by `run` and `slice`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// Optional YAML configuration file.
    pub config_path: Option<PathBuf>,
    /// Seed override.
    pub seed: Option<u64>,
    /// Target point count override.
    pub target: Option<u64>,
    /// Batch size override; signed so a negative value can be reported.
    pub batch: Option<i64>,
    /// Slice axis override.
    pub axis: Option<String>,
    /// Slice position override.
    pub position: Option<f64>,
    /// Slice thickness override.
    pub thickness: Option<f64>,
    /// Write the point history to this CSV file afterwards.
    pub csv_path: Option<PathBuf>,
    /// Print the report as JSON.
    pub json: bool,
    /// Log at debug level unless `SPHEREPI_LOG` says otherwise.
    pub verbose: bool,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(args),
            "slice" => Self::parse_slice_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse `run [config.yaml] [options]`.
    fn parse_run_command(args: &[String]) -> Command {
        let mut rest = &args[2..];
        let mut config_path = None;
        if let Some(first) = rest.first() {
            if !first.starts_with('-') {
                config_path = Some(PathBuf::from(first));
                rest = &rest[1..];
            }
        }

        match Self::parse_options(rest) {
            Some(mut options) => {
                if config_path.is_some() {
                    options.config_path = config_path;
                }
                Command::Run(options)
            }
            None => Command::Help,
        }
    }

    /// Parse `slice <axis> <position> <thickness> [options]`.
    fn parse_slice_command(args: &[String]) -> Command {
        if args.len() < 5 {
            eprintln!("Error: 'slice' requires <axis> <position> <thickness>");
            return Command::Help;
        }

        let Some(position) = parse_value::<f64>("position", &args[3]) else {
            return Command::Help;
        };
        let Some(thickness) = parse_value::<f64>("thickness", &args[4]) else {
            return Command::Help;
        };

        match Self::parse_options(&args[5..]) {
            Some(options) => Command::Slice {
                axis: args[2].clone(),
                position,
                thickness,
                options,
            },
            None => Command::Help,
        }
    }

    /// Parse trailing `--flag value` options; `None` after reporting an error.
    fn parse_options(args: &[String]) -> Option<RunOptions> {
        let mut options = RunOptions::default();
        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--json" => options.json = true,
                "-v" | "--verbose" => options.verbose = true,
                "--config" | "--seed" | "--target" | "--batch" | "--axis" | "--position"
                | "--thickness" | "--csv" => {
                    let Some(value) = args.get(i + 1) else {
                        eprintln!("Error: {flag} requires a value");
                        return None;
                    };
                    match flag {
                        "--config" => options.config_path = Some(PathBuf::from(value)),
                        "--seed" => options.seed = Some(parse_value(flag, value)?),
                        "--target" => options.target = Some(parse_value(flag, value)?),
                        "--batch" => options.batch = Some(parse_value(flag, value)?),
                        "--axis" => options.axis = Some(value.clone()),
                        "--position" => options.position = Some(parse_value(flag, value)?),
                        "--thickness" => options.thickness = Some(parse_value(flag, value)?),
                        _ => options.csv_path = Some(PathBuf::from(value)),
                    }
                    i += 1;
                }
                other => {
                    eprintln!("Error: unexpected argument '{other}'");
                    return None;
                }
            }
            i += 1;
        }
        Some(options)
    }
}

fn parse_value<T: std::str::FromStr>(name: &str, raw: &str) -> Option<T> {
    let parsed = raw.parse().ok();
    if parsed.is_none() {
        eprintln!("Error: invalid value '{raw}' for {name}");
    }
    parsed
}
