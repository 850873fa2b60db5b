// src/config/model.rs

use serde::Deserialize;

use crate::types::DelayDisplay;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [run]
/// times = 10
/// delay_seconds = 5
/// delay_display = "silent"
/// pause_at_end = true
///
/// [command]
/// program = "python"
/// args = ["main.py"]
///
/// [environment]
/// venv = "venv"
/// ```
///
/// All sections are optional; the defaults reproduce `python main.py`
/// run ten times, five seconds apart, inside `venv/`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub run: RunSection,

    #[serde(default)]
    pub command: CommandSection,

    #[serde(default)]
    pub environment: EnvironmentSection,
}

/// Validated configuration. Only constructible through
/// `ConfigFile::try_from(RawConfigFile)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub run: RunSection,
    pub command: CommandSection,
    pub environment: EnvironmentSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        run: RunSection,
        command: CommandSection,
        environment: EnvironmentSection,
    ) -> Self {
        Self {
            run,
            command,
            environment,
        }
    }
}

/// `[run]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSection {
    /// How many times the command is run. Must be >= 1.
    #[serde(default = "default_times")]
    pub times: u32,

    /// Seconds to wait between two consecutive runs.
    #[serde(default = "default_delay_seconds")]
    pub delay_seconds: u64,

    #[serde(default)]
    pub delay_display: DelayDisplay,

    /// Wait for a keypress after the last run.
    #[serde(default = "default_pause_at_end")]
    pub pause_at_end: bool,
}

fn default_times() -> u32 {
    10
}

fn default_delay_seconds() -> u64 {
    5
}

fn default_pause_at_end() -> bool {
    true
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            times: default_times(),
            delay_seconds: default_delay_seconds(),
            delay_display: DelayDisplay::default(),
            pause_at_end: default_pause_at_end(),
        }
    }
}

/// `[command]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandSection {
    /// Program to execute. Bare names are looked up in the activated
    /// environment first, then on `PATH`.
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

fn default_program() -> String {
    "python".to_string()
}

fn default_args() -> Vec<String> {
    vec!["main.py".to_string()]
}

impl Default for CommandSection {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
        }
    }
}

/// `[environment]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentSection {
    /// Virtual environment directory relative to the working directory.
    /// An empty string disables activation.
    #[serde(default = "default_venv")]
    pub venv: String,
}

fn default_venv() -> String {
    "venv".to_string()
}

impl Default for EnvironmentSection {
    fn default() -> Self {
        Self {
            venv: default_venv(),
        }
    }
}

impl EnvironmentSection {
    /// The venv directory, or `None` when activation is disabled.
    pub fn venv_dir(&self) -> Option<&str> {
        let trimmed = self.venv.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }
}
