// src/engine/mod.rs

//! Run loop engine.
//!
//! The pure iteration state machine lives in [`core`]; the async/IO shell
//! that prints progress, invokes the backend and sleeps is implemented in
//! [`run_loop`].

use crate::exec::RunOutcome;

pub mod core;
pub mod run_loop;
pub mod sleeper;

pub use core::{LoopCommand, LoopCore};
pub use run_loop::{RunLoop, SEPARATOR};
pub use sleeper::{Sleeper, TokioSleeper};

/// Outcomes of every run, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub outcomes: Vec<RunOutcome>,
}

impl RunSummary {
    pub fn runs(&self) -> usize {
        self.outcomes.len()
    }

    /// Runs that did not exit with code 0.
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_success()).count()
    }
}
