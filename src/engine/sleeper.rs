// src/engine/sleeper.rs

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Abstract wall-clock delay, so tests can record delays instead of
/// waiting for them.
pub trait Sleeper: Send {
    fn sleep(&mut self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

/// Implementation backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&mut self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(tokio::time::sleep(duration))
    }
}
