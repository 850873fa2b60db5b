// src/exec/process.rs

//! Single child process runner.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::exec::{Invocation, RunOutcome};

/// Spawn the invocation and wait for it to exit.
///
/// Never fails: problems spawning or waiting are turned into
/// [`RunOutcome::SpawnFailed`] so the caller can keep looping.
pub async fn run_once(run: u32, invocation: &Invocation) -> RunOutcome {
    match run_inner(run, invocation).await {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(run, cmd = %invocation.command_line(), error = %format!("{err:#}"), "command could not be run");
            RunOutcome::SpawnFailed(format!("{err:#}"))
        }
    }
}

async fn run_inner(run: u32, invocation: &Invocation) -> Result<RunOutcome> {
    debug!(
        run,
        cmd = %invocation.command_line(),
        workdir = %invocation.workdir.display(),
        "starting command process"
    );

    let mut child = invocation
        .to_command()
        .spawn()
        .with_context(|| format!("spawning '{}'", invocation.command_line()))?;

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for '{}'", invocation.command_line()))?;

    let outcome = match status.code() {
        Some(code) => RunOutcome::Exited(code),
        None => RunOutcome::Terminated,
    };

    if outcome.is_success() {
        info!(run, exit_code = 0, "command process exited");
    } else {
        warn!(run, ?outcome, "command process did not succeed; continuing");
    }

    Ok(outcome)
}
