// src/main.rs

use runloop::errors::RunloopError;
use runloop::{cli, logging, run};

/// Conventional exit status for a process stopped by SIGINT.
const INTERRUPTED_EXIT_CODE: i32 = 130;

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        match err.downcast_ref::<RunloopError>() {
            Some(RunloopError::Interrupted) => {
                eprintln!("runloop: interrupted");
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
            _ => {
                eprintln!("runloop error: {err:?}");
                std::process::exit(1);
            }
        }
    }
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await?;
    Ok(())
}
