use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// How the wait between two runs is shown on the console.
///
/// - `Silent`: sleep for the whole delay without printing anything (default).
/// - `Countdown`: print one `Next run in {n}s...` line per remaining second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelayDisplay {
    #[default]
    Silent,
    Countdown,
}

impl FromStr for DelayDisplay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "silent" => Ok(DelayDisplay::Silent),
            "countdown" => Ok(DelayDisplay::Countdown),
            other => Err(format!(
                "invalid delay_display: {other} (expected \"silent\" or \"countdown\")"
            )),
        }
    }
}

impl fmt::Display for DelayDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelayDisplay::Silent => f.write_str("silent"),
            DelayDisplay::Countdown => f.write_str("countdown"),
        }
    }
}
