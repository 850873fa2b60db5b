// src/pause.rs

//! "Press any key to continue" at the end of the loop.
//!
//! On a terminal this reads a single key in raw mode via `crossterm`. When
//! stdin is not a terminal (piped, redirected, CI) one line or EOF counts as
//! the acknowledgement.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use tracing::debug;

use crate::errors::{Result, RunloopError};

pub const PROMPT: &str = "Press any key to continue . . .";

/// What a terminal event means while waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ack {
    Continue,
    Interrupt,
}

/// Print the prompt to `out` and block until the user acknowledges.
///
/// Returns [`RunloopError::Interrupted`] if Ctrl+C is pressed while the
/// terminal is in raw mode (the signal is not delivered then).
pub async fn wait_for_keypress<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()?;

    let ack = tokio::task::spawn_blocking(read_acknowledgement)
        .await
        .map_err(|e| RunloopError::Other(e.into()))?;

    writeln!(out)?;
    out.flush()?;

    ack
}

fn read_acknowledgement() -> Result<()> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        debug!("waiting for a key press on the terminal");
        read_key()
    } else {
        debug!("stdin is not a terminal; waiting for a line");
        read_line(stdin.lock())
    }
}

/// Restores cooked mode even if reading fails.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn read_key() -> Result<()> {
    let _guard = RawModeGuard::enable()?;
    loop {
        match classify(&event::read()?) {
            Some(Ack::Continue) => return Ok(()),
            Some(Ack::Interrupt) => return Err(RunloopError::Interrupted),
            None => continue,
        }
    }
}

fn classify(event: &Event) -> Option<Ack> {
    match event {
        Event::Key(KeyEvent {
            kind: KeyEventKind::Press,
            code,
            modifiers,
            ..
        }) => {
            if modifiers.contains(KeyModifiers::CONTROL) && *code == KeyCode::Char('c') {
                Some(Ack::Interrupt)
            } else {
                Some(Ack::Continue)
            }
        }
        _ => None,
    }
}

fn read_line<R: BufRead>(mut reader: R) -> Result<()> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(())
}
