// src/engine/core.rs

//! Pure iteration state machine.
//!
//! `LoopCore` knows nothing about processes, clocks or consoles. It only
//! yields the ordered steps of the loop:
//!
//! ```text
//! Announce(1) Invoke(1) Finish(1) Separator(1) Delay(1)
//! Announce(2) ...                 Separator(N)          <done>
//! ```
//!
//! No `Delay` follows the last run.

/// One step the IO shell has to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCommand {
    /// Print `Run {run} of {total}`.
    Announce { run: u32, total: u32 },
    /// Run the command once and wait for it.
    Invoke { run: u32 },
    /// Print `Finished run {run}`.
    Finish { run: u32 },
    /// Print the separator line.
    Separator { run: u32 },
    /// Wait the configured delay before the next run.
    Delay { after_run: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Announce,
    Invoke,
    Finish,
    Separator,
    Delay,
    Done,
}

#[derive(Debug, Clone)]
pub struct LoopCore {
    total: u32,
    run: u32,
    phase: Phase,
}

impl LoopCore {
    /// A core for `total` runs. `total == 0` yields nothing.
    pub fn new(total: u32) -> Self {
        let phase = if total == 0 { Phase::Done } else { Phase::Announce };
        Self {
            total,
            run: 1,
            phase,
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Advance the state machine and return the next step, or `None` once
    /// every run has been separated.
    pub fn next_command(&mut self) -> Option<LoopCommand> {
        let run = self.run;
        let (command, next) = match self.phase {
            Phase::Done => return None,
            Phase::Announce => (
                LoopCommand::Announce {
                    run,
                    total: self.total,
                },
                Phase::Invoke,
            ),
            Phase::Invoke => (LoopCommand::Invoke { run }, Phase::Finish),
            Phase::Finish => (LoopCommand::Finish { run }, Phase::Separator),
            Phase::Separator => {
                let next = if run < self.total { Phase::Delay } else { Phase::Done };
                (LoopCommand::Separator { run }, next)
            }
            Phase::Delay => {
                self.run += 1;
                (LoopCommand::Delay { after_run: run }, Phase::Announce)
            }
        };
        self.phase = next;
        Some(command)
    }
}

impl Iterator for LoopCore {
    type Item = LoopCommand;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_command()
    }
}
