use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use runloop::exec::{CommandBackend, Invocation, RunOutcome};

use crate::shared_buffer::SharedBuffer;

/// A fake backend that:
/// - records which runs were invoked, in order
/// - tracks how many invocations were in flight at once
/// - returns a scripted outcome per run (cycled), `Exited(0)` by default
/// - optionally writes `[invoke N]` into a shared journal
#[derive(Clone)]
pub struct FakeBackend {
    executed: Arc<Mutex<Vec<u32>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    outcomes: Vec<RunOutcome>,
    journal: Option<SharedBuffer>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            executed: Arc::new(Mutex::new(Vec::new())),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
            outcomes: vec![RunOutcome::Exited(0)],
            journal: None,
        }
    }

    pub fn with_outcomes(mut self, outcomes: Vec<RunOutcome>) -> Self {
        assert!(!outcomes.is_empty(), "need at least one scripted outcome");
        self.outcomes = outcomes;
        self
    }

    pub fn with_journal(mut self, journal: SharedBuffer) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn executed(&self) -> Vec<u32> {
        self.executed.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandBackend for FakeBackend {
    fn invoke<'a>(
        &'a mut self,
        run: u32,
        _invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = RunOutcome> + Send + 'a>> {
        Box::pin(async move {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);

            if let Some(journal) = &self.journal {
                let mut journal = journal.clone();
                writeln!(journal, "[invoke {run}]").unwrap();
            }

            // Give any (buggy) concurrent caller a chance to overlap.
            tokio::task::yield_now().await;

            self.executed.lock().unwrap().push(run);
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            let idx = (run as usize - 1) % self.outcomes.len();
            self.outcomes[idx].clone()
        })
    }
}
