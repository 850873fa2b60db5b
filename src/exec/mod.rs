// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`invocation`] describes *what* to run: program, args, working
//!   directory and the activated environment.
//! - [`backend`] provides the `CommandBackend` trait the run loop talks to,
//!   and the production `ProcessBackend`.
//! - [`process`] spawns one child with `tokio::process::Command` and waits
//!   for it.

pub mod backend;
pub mod invocation;
pub mod process;

pub use backend::{CommandBackend, ProcessBackend};
pub use invocation::Invocation;

/// How a single run of the command ended.
///
/// None of these stop the loop; they are only reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The process exited with a code (zero or not).
    Exited(i32),
    /// The process ended without an exit code (e.g. killed by a signal).
    Terminated,
    /// The process could not be started at all.
    SpawnFailed(String),
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Exited(0))
    }
}
