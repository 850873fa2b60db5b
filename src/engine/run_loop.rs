// src/engine/run_loop.rs

use std::io::Write;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::engine::core::{LoopCommand, LoopCore};
use crate::engine::sleeper::Sleeper;
use crate::engine::RunSummary;
use crate::errors::Result;
use crate::exec::{CommandBackend, Invocation, RunOutcome};
use crate::types::DelayDisplay;

/// Line printed after every run.
pub const SEPARATOR: &str = "================";

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Async shell around [`LoopCore`].
///
/// Executes each step the core yields: progress lines go to `out`, runs go
/// to the `CommandBackend`, delays go to the `Sleeper`. Every step is
/// awaited before the next one is requested, so runs never overlap.
pub struct RunLoop<B: CommandBackend, S: Sleeper, W: Write + Send> {
    core: LoopCore,
    invocation: Invocation,
    delay: Duration,
    delay_display: DelayDisplay,
    backend: B,
    sleeper: S,
    out: W,
}

impl<B: CommandBackend, S: Sleeper, W: Write + Send> RunLoop<B, S, W> {
    pub fn new(
        invocation: Invocation,
        times: u32,
        delay: Duration,
        backend: B,
        sleeper: S,
        out: W,
    ) -> Self {
        Self {
            core: LoopCore::new(times),
            invocation,
            delay,
            delay_display: DelayDisplay::Silent,
            backend,
            sleeper,
            out,
        }
    }

    pub fn with_delay_display(mut self, delay_display: DelayDisplay) -> Self {
        self.delay_display = delay_display;
        self
    }

    /// Run every iteration and return the collected outcomes.
    ///
    /// Only console write failures end the loop early; failing runs do not.
    pub async fn run(mut self) -> Result<RunSummary> {
        info!(
            times = self.core.total(),
            delay_secs = self.delay.as_secs(),
            cmd = %self.invocation.command_line(),
            "run loop started"
        );

        let mut summary = RunSummary::default();

        while let Some(command) = self.core.next_command() {
            debug!(?command, "run loop step");
            match command {
                LoopCommand::Announce { run, total } => {
                    self.line(format_args!("Run {run} of {total}"))?;
                }
                LoopCommand::Invoke { run } => {
                    let outcome = self.backend.invoke(run, &self.invocation).await;
                    if let RunOutcome::SpawnFailed(reason) = &outcome {
                        self.line(format_args!("Run {run} failed to start: {reason}"))?;
                    }
                    summary.outcomes.push(outcome);
                }
                LoopCommand::Finish { run } => {
                    self.line(format_args!("Finished run {run}"))?;
                }
                LoopCommand::Separator { .. } => {
                    self.line(format_args!("{SEPARATOR}"))?;
                }
                LoopCommand::Delay { after_run } => {
                    debug!(after_run, delay_secs = self.delay.as_secs(), "waiting before next run");
                    self.wait().await?;
                }
            }
        }

        let failures = summary.failures();
        if failures > 0 {
            warn!(runs = summary.runs(), failures, "run loop finished with failing runs");
        } else {
            info!(runs = summary.runs(), "run loop finished");
        }

        Ok(summary)
    }

    async fn wait(&mut self) -> Result<()> {
        let secs = self.delay.as_secs();
        match self.delay_display {
            DelayDisplay::Countdown if secs > 0 => {
                for remaining in (1..=secs).rev() {
                    self.line(format_args!("Next run in {remaining}s..."))?;
                    self.sleeper.sleep(ONE_SECOND).await;
                }
            }
            _ => self.sleeper.sleep(self.delay).await,
        }
        Ok(())
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) -> Result<()> {
        self.out.write_fmt(args)?;
        self.out.write_all(b"\n")?;
        // Flush before the child writes to the same terminal.
        self.out.flush()?;
        Ok(())
    }
}
