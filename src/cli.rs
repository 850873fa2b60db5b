// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Every flag is optional: running `runloop` with no arguments starts the
//! loop immediately using the config file (if any) and built-in defaults.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::DelayDisplay;

/// Command-line arguments for `runloop`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "runloop",
    version,
    about = "Run a command a fixed number of times with a pause between runs.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Runloop.toml` in the working directory, if it exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of runs (>= 1).
    #[arg(long, value_name = "N")]
    pub times: Option<u32>,

    /// Seconds to wait between runs.
    #[arg(long, value_name = "SECONDS")]
    pub delay: Option<u64>,

    /// How the wait between runs is shown: `silent` or `countdown`.
    #[arg(long, value_name = "MODE")]
    pub delay_display: Option<DelayDisplay>,

    /// Exit right after the last run instead of waiting for a keypress.
    #[arg(long)]
    pub no_pause: bool,

    /// Virtual environment directory to activate, relative to the working
    /// directory.
    #[arg(long, value_name = "DIR", conflicts_with = "no_venv")]
    pub venv: Option<PathBuf>,

    /// Do not activate any virtual environment.
    #[arg(long)]
    pub no_venv: bool,

    /// Directory the command runs in and relative paths resolve against.
    ///
    /// Default: the directory of `--config` if given, else the directory
    /// containing the `runloop` executable.
    #[arg(long, value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RUNLOOP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print the plan, but don't activate or run anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Command to run instead of the configured one, e.g. `-- python main.py`.
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
