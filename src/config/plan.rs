// src/config/plan.rs

//! Folding CLI overrides into a validated config to get the final
//! [`RunPlan`].

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::CliArgs;
use crate::config::model::ConfigFile;
use crate::config::validate::{validate_program, validate_times};
use crate::errors::Result;
use crate::exec::invocation::join_command_line;
use crate::types::DelayDisplay;

/// Values given on the command line that take precedence over the config
/// file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub times: Option<u32>,
    pub delay_seconds: Option<u64>,
    pub delay_display: Option<DelayDisplay>,
    pub no_pause: bool,
    pub venv: Option<PathBuf>,
    pub no_venv: bool,
    /// Program followed by its arguments; empty means "use the config".
    pub command: Vec<String>,
}

impl From<&CliArgs> for Overrides {
    fn from(args: &CliArgs) -> Self {
        Self {
            times: args.times,
            delay_seconds: args.delay,
            delay_display: args.delay_display,
            no_pause: args.no_pause,
            venv: args.venv.clone(),
            no_venv: args.no_venv,
            command: args.command.clone(),
        }
    }
}

/// Everything needed to drive the loop, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub times: u32,
    pub delay: Duration,
    pub delay_display: DelayDisplay,
    pub pause_at_end: bool,
    pub program: String,
    pub args: Vec<String>,
    pub workdir: PathBuf,
    /// Virtual environment to activate, already joined onto `workdir`.
    pub venv: Option<PathBuf>,
}

impl RunPlan {
    /// Combine a validated config with CLI overrides.
    ///
    /// Overridden values are validated again, since they never passed
    /// through `ConfigFile::try_from`.
    pub fn resolve(cfg: &ConfigFile, overrides: &Overrides, workdir: PathBuf) -> Result<Self> {
        let times = overrides.times.unwrap_or(cfg.run.times);
        validate_times(times)?;

        let delay_seconds = overrides.delay_seconds.unwrap_or(cfg.run.delay_seconds);
        let delay_display = overrides.delay_display.unwrap_or(cfg.run.delay_display);

        let (program, args) = match overrides.command.split_first() {
            Some((program, args)) => (program.clone(), args.to_vec()),
            None => (cfg.command.program.clone(), cfg.command.args.clone()),
        };
        validate_program(&program)?;

        let venv = if overrides.no_venv {
            None
        } else if let Some(dir) = &overrides.venv {
            Some(workdir.join(dir))
        } else {
            cfg.environment.venv_dir().map(|dir| workdir.join(dir))
        };

        Ok(Self {
            times,
            delay: Duration::from_secs(delay_seconds),
            delay_display,
            pause_at_end: cfg.run.pause_at_end && !overrides.no_pause,
            program,
            args,
            workdir,
            venv,
        })
    }

    /// The command line as a single display string.
    pub fn command_line(&self) -> String {
        join_command_line(&self.program, &self.args)
    }
}
