// src/exec/backend.rs

//! Pluggable command backend.
//!
//! The run loop talks to a `CommandBackend` instead of spawning processes
//! directly, so tests can count and order invocations without touching the
//! OS.

use std::future::Future;
use std::pin::Pin;

use crate::exec::process::run_once;
use crate::exec::{Invocation, RunOutcome};

/// Runs one invocation to completion.
///
/// Implementations must not return before the invocation has finished; the
/// run loop relies on this for strict sequencing.
pub trait CommandBackend: Send {
    fn invoke<'a>(
        &'a mut self,
        run: u32,
        invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = RunOutcome> + Send + 'a>>;
}

/// Production backend: one real child process per run.
#[derive(Debug, Clone, Default)]
pub struct ProcessBackend;

impl ProcessBackend {
    pub fn new() -> Self {
        Self
    }
}

impl CommandBackend for ProcessBackend {
    fn invoke<'a>(
        &'a mut self,
        run: u32,
        invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = RunOutcome> + Send + 'a>> {
        Box::pin(run_once(run, invocation))
    }
}
