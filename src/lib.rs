// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod pause;
pub mod types;
pub mod venv;
pub mod workdir;

use std::future::Future;
use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, Overrides, RunPlan};
use crate::engine::{RunLoop, TokioSleeper};
use crate::errors::{Result, RunloopError};
use crate::exec::{Invocation, ProcessBackend};
use crate::workdir::resolve_workdir;

/// High-level entry point used by `main.rs`.
///
/// Progress lines, the dry-run plan and the pause prompt go to stdout.
pub async fn run(args: CliArgs) -> Result<()> {
    let mut stdout = io::stdout();
    run_with_output(&args, &mut stdout).await
}

/// [`run`] with console output sent to `out`.
///
/// This wires together:
/// - working directory + config resolution
/// - virtual environment activation
/// - the run loop with the real process backend
/// - the final keypress pause
/// - Ctrl-C handling
pub async fn run_with_output<W: Write + Send>(args: &CliArgs, out: &mut W) -> Result<()> {
    let plan = resolve_plan(args)?;

    if args.dry_run {
        return print_dry_run(&plan, out);
    }

    let environment = plan.venv.as_deref().map(venv::activate).transpose()?;
    let invocation = Invocation::from_plan(&plan, environment);

    let run_loop = RunLoop::new(
        invocation,
        plan.times,
        plan.delay,
        ProcessBackend::new(),
        TokioSleeper,
        &mut *out,
    )
    .with_delay_display(plan.delay_display);

    let summary = until_interrupted(run_loop.run()).await?;
    debug!(runs = summary.runs(), failures = summary.failures(), "all runs complete");

    if plan.pause_at_end {
        until_interrupted(pause::wait_for_keypress(out)).await?;
    }

    Ok(())
}

/// Resolve working directory, config file and CLI overrides into a plan.
pub fn resolve_plan(args: &CliArgs) -> Result<RunPlan> {
    let workdir = resolve_workdir(args.workdir.as_deref(), args.config.as_deref())?;
    info!(workdir = %workdir.display(), "working directory resolved");

    let cfg: ConfigFile = match &args.config {
        Some(path) => config::load_and_validate(path)?,
        None => config::load_optional(&workdir)?,
    };

    RunPlan::resolve(&cfg, &Overrides::from(args), workdir)
}

/// Drive `fut` to completion unless Ctrl-C arrives first.
async fn until_interrupted<F, T>(fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    until_signalled(fut, tokio::signal::ctrl_c()).await
}

/// Drive `fut` to completion unless `signal` fires first.
///
/// When the signal fires, `fut` is dropped (which kills a running child via
/// `kill_on_drop`) and [`RunloopError::Interrupted`] is returned. If the
/// signal cannot be listened for, `fut` simply runs to completion.
pub async fn until_signalled<F, S, T>(fut: F, signal: S) -> Result<T>
where
    F: Future<Output = Result<T>>,
    S: Future<Output = io::Result<()>>,
{
    tokio::pin!(fut);
    tokio::pin!(signal);
    let mut listen = true;

    loop {
        tokio::select! {
            res = &mut fut => return res,
            received = &mut signal, if listen => match received {
                Ok(()) => {
                    warn!("interrupt received; stopping");
                    return Err(RunloopError::Interrupted);
                }
                Err(e) => {
                    warn!(error = %e, "failed to listen for Ctrl+C");
                    listen = false;
                }
            },
        }
    }
}

/// Simple dry-run output: print the resolved plan.
fn print_dry_run<W: Write>(plan: &RunPlan, out: &mut W) -> Result<()> {
    writeln!(out, "runloop dry-run")?;
    writeln!(out, "  workdir: {}", plan.workdir.display())?;
    writeln!(out, "  command: {}", plan.command_line())?;
    writeln!(out, "  times: {}", plan.times)?;
    writeln!(out, "  delay_seconds: {}", plan.delay.as_secs())?;
    writeln!(out, "  delay_display: {}", plan.delay_display)?;
    writeln!(out, "  pause_at_end: {}", plan.pause_at_end)?;
    match &plan.venv {
        Some(dir) => writeln!(out, "  venv: {}", dir.display())?,
        None => writeln!(out, "  venv: (none)")?,
    }
    out.flush()?;

    debug!("dry-run complete (no execution)");
    Ok(())
}
