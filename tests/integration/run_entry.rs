// tests/integration/run_entry.rs
//
// The library entry point: dry run, activation failure, a full run with real
// processes, and interrupt handling.

#![cfg(unix)]

use std::error::Error;
use std::future;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use runloop::cli::CliArgs;
use runloop::engine::{RunLoop, TokioSleeper, SEPARATOR};
use runloop::errors::RunloopError;
use runloop::exec::ProcessBackend;
use runloop::{run_with_output, until_signalled};
use runloop_test_utils::builders::InvocationBuilder;
use runloop_test_utils::shared_buffer::SharedBuffer;
use runloop_test_utils::{init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

fn touch_args(workdir: PathBuf, marker: &str) -> CliArgs {
    CliArgs {
        workdir: Some(workdir),
        times: Some(1),
        delay: Some(0),
        no_pause: true,
        command: vec!["sh".into(), "-c".into(), format!("touch {marker}")],
        ..CliArgs::default()
    }
}

#[tokio::test]
async fn signal_interrupts_a_pending_future() {
    init_tracing();

    let res: Result<(), _> = until_signalled(
        future::pending::<runloop::errors::Result<()>>(),
        future::ready(Ok(())),
    )
    .await;

    assert!(matches!(res, Err(RunloopError::Interrupted)));
}

#[tokio::test]
async fn failed_signal_listener_lets_the_future_finish() {
    init_tracing();

    let signal = future::ready(Err(io::Error::other("no signal handler")));
    let res = with_timeout(until_signalled(
        async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(7)
        },
        signal,
    ))
    .await;

    assert_eq!(res.ok(), Some(7));
}

#[tokio::test]
async fn interrupt_kills_the_running_child() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let invocation = InvocationBuilder::new("sh")
        .arg("-c")
        .arg("sleep 1; touch late")
        .workdir(dir.path())
        .build();
    let out = SharedBuffer::new();
    let run_loop = RunLoop::new(
        invocation,
        1,
        Duration::ZERO,
        ProcessBackend::new(),
        TokioSleeper,
        out.clone(),
    );

    let res = until_signalled(run_loop.run(), async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        Ok(())
    })
    .await;

    assert!(matches!(res, Err(RunloopError::Interrupted)));
    assert_eq!(out.lines(), vec!["Run 1 of 1"]);

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(!dir.path().join("late").exists(), "child outlived the interrupt");
    Ok(())
}

#[tokio::test]
async fn dry_run_skips_activation_and_execution() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let args = CliArgs {
        dry_run: true,
        venv: Some(PathBuf::from("missing-venv")),
        ..touch_args(dir.path().to_path_buf(), "ran")
    };
    let mut out = SharedBuffer::new();

    run_with_output(&args, &mut out).await?;

    let printed = out.contents();
    assert!(printed.contains("runloop dry-run"));
    assert!(printed.contains("missing-venv"));
    assert!(printed.contains("command: sh -c"));
    assert!(!dir.path().join("ran").exists());
    Ok(())
}

#[tokio::test]
async fn missing_venv_stops_before_the_first_run() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let args = CliArgs {
        venv: Some(PathBuf::from("missing-venv")),
        ..touch_args(dir.path().to_path_buf(), "ran")
    };
    let mut out = SharedBuffer::new();

    let err = run_with_output(&args, &mut out)
        .await
        .expect_err("activation should fail");

    assert!(matches!(err, RunloopError::EnvActivation(_)), "got {err:?}");
    assert_eq!(out.contents(), "");
    assert!(!dir.path().join("ran").exists());
    Ok(())
}

#[tokio::test]
async fn full_run_without_venv_prints_progress() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let args = CliArgs {
        times: Some(2),
        no_venv: true,
        command: vec!["sh".into(), "-c".into(), "echo x >> runs.log".into()],
        ..touch_args(dir.path().to_path_buf(), "unused")
    };
    let mut out = SharedBuffer::new();

    with_timeout(run_with_output(&args, &mut out)).await?;

    assert_eq!(
        out.lines(),
        vec![
            "Run 1 of 2",
            "Finished run 1",
            SEPARATOR,
            "Run 2 of 2",
            "Finished run 2",
            SEPARATOR,
        ]
    );
    let log = std::fs::read_to_string(dir.path().join("runs.log"))?;
    assert_eq!(log.lines().count(), 2);
    Ok(())
}
