#![allow(dead_code)]

use std::time::Duration;

use runloop::engine::{RunLoop, RunSummary};
use runloop::errors::Result;
use runloop::types::DelayDisplay;
use runloop_test_utils::builders::InvocationBuilder;
use runloop_test_utils::fake_backend::FakeBackend;
use runloop_test_utils::recording_sleeper::RecordingSleeper;
use runloop_test_utils::shared_buffer::SharedBuffer;

/// Everything a fake-backed run leaves behind for assertions.
pub struct FakeRun {
    pub summary: RunSummary,
    pub output: SharedBuffer,
    pub backend: FakeBackend,
    pub sleeper: RecordingSleeper,
}

/// Run the loop against the fake backend and recording sleeper.
///
/// The backend journals `[invoke N]` into the same buffer the progress lines
/// go to, so ordering can be asserted on one stream.
pub async fn run_with_fakes(
    times: u32,
    delay: Duration,
    display: DelayDisplay,
    backend: FakeBackend,
) -> Result<FakeRun> {
    let output = SharedBuffer::new();
    let backend = backend.with_journal(output.clone());
    let sleeper = RecordingSleeper::new();

    let run_loop = RunLoop::new(
        InvocationBuilder::new("python").arg("main.py").build(),
        times,
        delay,
        backend.clone(),
        sleeper.clone(),
        output.clone(),
    )
    .with_delay_display(display);

    let summary = run_loop.run().await?;

    Ok(FakeRun {
        summary,
        output,
        backend,
        sleeper,
    })
}

/// Output lines without the backend's journal markers.
pub fn progress_lines(output: &SharedBuffer) -> Vec<String> {
    output
        .lines()
        .into_iter()
        .filter(|l| !l.starts_with("[invoke"))
        .collect()
}
